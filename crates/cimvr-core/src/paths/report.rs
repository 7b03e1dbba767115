//! Aggregate resolution report for CLI introspection.
//!
//! Captures what resolution would do for one invocation in a single struct,
//! backing the `cimvr paths` command and verbose diagnostics.

use std::fmt;
use std::path::PathBuf;

use super::context::SearchContext;
use super::executable::{ResolvedExecutable, resolve_executable};
use super::plugins::plugin_search_folders;
use super::roles::Role;

/// One invocation's view of the filesystem.
#[derive(Debug, Clone)]
pub struct PathReport {
    /// Root directory the search locations hang off
    pub root: PathBuf,
    /// Server executable outcome (`None` when nothing resolved)
    pub server: Option<ResolvedExecutable>,
    /// Client executable outcome
    pub client: Option<ResolvedExecutable>,
    /// Plugin search folders, in search order
    pub plugin_folders: Vec<PathBuf>,
}

impl PathReport {
    /// Gather the report. Misses are recorded as `None`, never as errors.
    pub fn gather(context: &SearchContext) -> Self {
        Self {
            root: context.root().to_path_buf(),
            server: resolve_executable(Role::Server, context).ok(),
            client: resolve_executable(Role::Client, context).ok(),
            plugin_folders: plugin_search_folders(context),
        }
    }
}

impl fmt::Display for PathReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "root = {}", self.root.display())?;
        for (label, outcome) in [("server", &self.server), ("client", &self.client)] {
            match outcome {
                Some(resolved) => {
                    writeln!(f, "{label}_executable = {}", resolved.path.display())?;
                    writeln!(f, "{label}_source = {:?}", resolved.source)?;
                }
                None => writeln!(f, "{label}_executable = (not found)")?,
            }
        }
        write!(f, "plugin_folders =")?;
        for folder in &self.plugin_folders {
            write!(f, "\n  - {}", folder.display())?;
        }
        Ok(())
    }
}
