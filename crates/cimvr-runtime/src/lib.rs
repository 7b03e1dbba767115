//! OS-facing runtime for the `cimvr` tool: launch-plan construction, process
//! spawning, and plugin project scaffolding.

#![deny(unused_crate_dependencies)]

mod command;
mod launcher;
pub mod scaffold;
mod spawner;

// Re-export the launch pipeline
pub use command::{ClientOptions, build_launch_plan};
pub use launcher::{DEFAULT_STAGGER, Launcher};

// Re-export the ProcessSpawner implementation
pub use spawner::OsProcessSpawner;
