//! Core domain for the `cimvr` launcher tool.
//!
//! Everything here is a pure function of an explicit [`paths::SearchContext`]
//! snapshot: no process environment reads, no spawning, no I/O beyond
//! file-existence probes. The `cimvr-runtime` crate supplies the OS-facing
//! implementations of the ports defined here, and the CLI wires the two
//! together at its composition root.

#![deny(unused_crate_dependencies)]

pub mod paths;
pub mod ports;

// Re-export commonly used types for convenience
pub use paths::{
    EnvSnapshot, ExecutableSource, PathReport, PluginSource, ResolveError, ResolvedExecutable,
    ResolvedPlugin, Role, SearchContext, plugin_search_folders, resolve_executable, resolve_plugin,
};
pub use ports::{ChildHandle, LaunchCommand, ProcessExit, ProcessSpawner, SpawnError};
