//! Library surface of the `cimvr` binary.
//!
//! Split from `main.rs` so the parser and handlers can be tested without
//! spawning the binary. `main.rs` stays a thin composition root.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Dependencies wired up in main.rs only
use dotenvy as _;
use tracing_subscriber as _;

pub mod commands;
pub mod handlers;
pub mod parser;

// Re-export primary types for convenient access
pub use commands::Commands;
pub use parser::Cli;
