//! Plugin module resolution and search-folder computation.

use std::path::{Path, PathBuf};

use tracing::debug;

use super::context::SearchContext;
use super::error::ResolveError;

/// Environment variable holding extra plugin search roots, `;`-separated.
pub const PLUGIN_PATH_VAR: &str = "CIMVR_PLUGINS";

/// Build target triple plugin modules are compiled for.
pub const WASM_TARGET: &str = "wasm32-unknown-unknown";

/// File extension appended to bare plugin names.
const PLUGIN_EXTENSION: &str = ".wasm";

/// How a plugin path was derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PluginSource {
    /// The request was itself a path to an existing file, used unchanged.
    Literal,
    /// The file was found under one of the search folders.
    SearchFolder,
}

/// Resolution result for one requested plugin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPlugin {
    /// The raw name as requested
    pub name: String,
    /// Path to the plugin module file
    pub path: PathBuf,
    /// How the path was determined
    pub source: PluginSource,
}

/// Compute the ordered list of folders searched for plugin modules.
///
/// Fixed base folders first: `<root>/plugins`, then the conventional wasm
/// build output under `<root>/target`. Entries from [`PLUGIN_PATH_VAR`]
/// follow in listed order, each joined with `wasm32-unknown-unknown/release`.
///
/// Deduplication compares the RAW entry string against the base folders and
/// the raw entries taken so far, never against a joined path. A repeated
/// entry therefore contributes one folder, while an entry that happens to
/// spell out a previously derived path is kept. Empty entries are skipped.
pub fn plugin_search_folders(context: &SearchContext) -> Vec<PathBuf> {
    let root = context.root();
    let mut folders = vec![
        root.join("plugins"),
        root.join("target").join(WASM_TARGET).join("release"),
    ];

    if let Some(list) = context.env().get(PLUGIN_PATH_VAR) {
        // Dedup list holds the base folders and raw entries; derived paths
        // never enter it.
        let mut seen: Vec<String> = folders
            .iter()
            .map(|folder| folder.to_string_lossy().into_owned())
            .collect();
        for entry in list.split(';') {
            if entry.is_empty() {
                continue;
            }
            if seen.iter().any(|taken| taken == entry) {
                debug!(entry, "skipping duplicate plugin search entry");
                continue;
            }
            seen.push(entry.to_string());
            folders.push(Path::new(entry).join(WASM_TARGET).join("release"));
        }
    }

    folders
}

/// Resolve one plugin request to a module file.
///
/// A request that names an existing file is used unchanged. Anything else is
/// treated as a bare module name: `.wasm` is appended unconditionally (a name
/// already ending in `.wasm` searches for `<name>.wasm.wasm`) and each search
/// folder is probed in order; the first existing file wins.
pub fn resolve_plugin(
    raw_name: &str,
    context: &SearchContext,
) -> Result<ResolvedPlugin, ResolveError> {
    let literal = Path::new(raw_name);
    if literal.is_file() {
        debug!(name = raw_name, "plugin request is a literal file path");
        return Ok(ResolvedPlugin {
            name: raw_name.to_string(),
            path: literal.to_path_buf(),
            source: PluginSource::Literal,
        });
    }

    let file_name = format!("{raw_name}{PLUGIN_EXTENSION}");
    let folders = plugin_search_folders(context);
    if let Some(found) = folders
        .iter()
        .map(|folder| folder.join(&file_name))
        .find(|candidate| candidate.is_file())
    {
        debug!(name = raw_name, path = %found.display(), "found plugin");
        return Ok(ResolvedPlugin {
            name: raw_name.to_string(),
            path: found,
            source: PluginSource::SearchFolder,
        });
    }

    Err(ResolveError::PluginNotFound {
        name: raw_name.to_string(),
        searched: folders,
    })
}
