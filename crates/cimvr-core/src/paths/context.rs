//! Invocation snapshot consumed by the resolver.
//!
//! The launcher treats the process environment as an override channel
//! (`CIMVR_SERVER`, `CIMVR_CLIENT`, `CIMVR_PLUGINS`). To keep resolution a
//! pure function that is unit-testable without mutating the real process
//! environment, the environment is captured once into an owned snapshot and
//! passed in explicitly.

use std::collections::HashMap;
use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Owned copy of the environment variables visible to one invocation.
#[derive(Debug, Clone, Default)]
pub struct EnvSnapshot {
    vars: HashMap<String, String>,
}

impl EnvSnapshot {
    /// Capture the current process environment.
    ///
    /// Call this once at startup, after `.env` loading, so every later lookup
    /// sees the same values. Variables whose name or value is not valid
    /// Unicode are treated as unset: POSIX permits such entries, and
    /// `std::env::vars()` would panic on them.
    pub fn from_process() -> Self {
        Self::from_os_pairs(env::vars_os())
    }

    /// Snapshot from raw OS pairs, keeping only the valid-Unicode ones.
    fn from_os_pairs(pairs: impl IntoIterator<Item = (OsString, OsString)>) -> Self {
        let vars = pairs
            .into_iter()
            .filter_map(|(name, value)| Some((name.into_string().ok()?, value.into_string().ok()?)))
            .collect();
        Self { vars }
    }

    /// Snapshot with no variables set. Starting point for tests.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builder-style insert, used by tests to describe an environment.
    #[must_use]
    pub fn with_var(mut self, name: &str, value: &str) -> Self {
        self.vars.insert(name.to_string(), value.to_string());
        self
    }

    /// Look up a variable.
    ///
    /// Present-but-empty is `Some("")`: an empty override is still an
    /// override.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    /// Interpret a variable as an on/off flag.
    ///
    /// Unset, empty, `0`, and `false` (any case) are off; everything else is
    /// on.
    pub fn flag(&self, name: &str) -> bool {
        match self.get(name) {
            None => false,
            Some(value) => {
                !(value.is_empty() || value == "0" || value.eq_ignore_ascii_case("false"))
            }
        }
    }
}

/// Everything the resolver is allowed to know about one invocation.
///
/// Built once per invocation and never mutated; resolution outcomes are a
/// function of this context and the filesystem.
#[derive(Debug, Clone)]
pub struct SearchContext {
    root: PathBuf,
    env: EnvSnapshot,
}

impl SearchContext {
    pub fn new(root: impl Into<PathBuf>, env: EnvSnapshot) -> Self {
        Self {
            root: root.into(),
            env,
        }
    }

    /// Root directory the conventional search locations hang off.
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn env(&self) -> &EnvSnapshot {
        &self.env
    }
}
