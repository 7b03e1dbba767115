//! Path resolution for the launcher.
//!
//! Executables by role, plugin modules by name, and the plugin search-folder
//! list all derive from one immutable [`SearchContext`]:
//! - Server/client executable location
//! - Plugin module location (`.wasm` files)
//! - Search-folder enumeration for diagnostics
//!
//! # Design
//!
//! - The environment is an explicit snapshot, never read ad hoc
//! - First match wins everywhere; probe lists are built in full so a miss can
//!   report exactly what was searched
//! - No I/O beyond file-existence probes

mod context;
mod error;
mod executable;
mod plugins;
mod report;
mod roles;

// Re-export public API

// Invocation snapshot
pub use context::{EnvSnapshot, SearchContext};

// Roles
pub use roles::Role;

// Error type
pub use error::ResolveError;

// Executable resolution
pub use executable::{ExecutableSource, ResolvedExecutable, resolve_executable};

// Plugin resolution
pub use plugins::{
    PLUGIN_PATH_VAR, PluginSource, ResolvedPlugin, WASM_TARGET, plugin_search_folders,
    resolve_plugin,
};

// Aggregate report for CLI introspection
pub use report::PathReport;
