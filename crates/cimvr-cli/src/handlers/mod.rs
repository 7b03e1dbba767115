//! Command handlers for the launcher CLI.
//!
//! Handlers are thin: they adapt parsed arguments into core and runtime
//! calls and format output for the terminal. Path resolution lives in
//! `cimvr-core`; process and filesystem work lives in `cimvr-runtime`.
//! Ports are injected by `main.rs`, never constructed here.

pub mod launch;
pub mod new;
pub mod paths;
