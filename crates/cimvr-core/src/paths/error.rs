//! Resolution error types.

use std::path::PathBuf;

use thiserror::Error;

use super::roles::Role;

/// Errors produced by executable and plugin resolution.
///
/// Every miss is a value, never a panic. Messages carry the exact locations
/// that were probed so the user can see where the search went.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// No executable was found for a requested role.
    #[error("Failed to find {role} executable\nSearched:\n{}", bullet_list(.searched))]
    ExecutableNotFound {
        /// Role that could not be resolved
        role: Role,
        /// Every location that was probed, in probe order
        searched: Vec<PathBuf>,
    },

    /// A plugin name matched no literal file and no search-folder entry.
    #[error("No plugin named \"{name}\" found.\nSearched folders:\n{}", bullet_list(.searched))]
    PluginNotFound {
        /// The raw plugin name as requested
        name: String,
        /// Every folder that was searched, in search order
        searched: Vec<PathBuf>,
    },
}

fn bullet_list(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|path| format!("  - {}", path.display()))
        .collect::<Vec<_>>()
        .join("\n")
}
