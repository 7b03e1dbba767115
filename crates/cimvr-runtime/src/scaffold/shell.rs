//! Shell profile registration for generated plugin projects.
//!
//! Appending an `export CIMVR_PLUGINS=...` line to the user's profile makes
//! the new plugin's build output discoverable by `cimvr launch` from any
//! directory. Only Linux (`~/.bashrc`) is supported; other platforms are
//! reported as [`ShellUpdate::Unsupported`] and left untouched.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Outcome of a shell registration attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellUpdate {
    /// The export line was appended to this profile file.
    Appended { profile: PathBuf },
    /// The host platform has no profile we know how to edit.
    Unsupported,
}

/// Append an export line for `target_dir` to the user's shell profile.
///
/// `target_dir` should be the plugin project's `target` directory, since the
/// launcher joins `wasm32-unknown-unknown/release` onto every search entry
/// itself. The edit keeps the existing `$CIMVR_PLUGINS` value in front so
/// repeated registrations accumulate rather than clobber.
pub fn register_plugin_dir(target_dir: &Path) -> Result<ShellUpdate> {
    let Some(profile) = profile_path() else {
        return Ok(ShellUpdate::Unsupported);
    };
    append_line(&profile, &export_line(target_dir))?;
    Ok(ShellUpdate::Appended { profile })
}

/// The export line itself, without a trailing newline.
pub fn export_line(target_dir: &Path) -> String {
    format!(
        "export CIMVR_PLUGINS=\"$CIMVR_PLUGINS;{}\"",
        target_dir.display()
    )
}

/// Profile file to edit on this platform, if any.
///
/// Uses `cfg!` rather than conditional compilation so the fallback arm stays
/// type-checked on every platform.
fn profile_path() -> Option<PathBuf> {
    if cfg!(target_os = "linux") {
        dirs::home_dir().map(|home| home.join(".bashrc"))
    } else {
        None
    }
}

/// Append `line` to `profile`, creating the file if it does not exist.
fn append_line(profile: &Path, line: &str) -> Result<()> {
    let mut contents = if profile.exists() {
        fs::read_to_string(profile)
            .with_context(|| format!("Failed to read {}", profile.display()))?
    } else {
        String::new()
    };

    // Keep the new line on its own row even if the file lacked a final newline.
    if !contents.is_empty() && !contents.ends_with('\n') {
        contents.push('\n');
    }
    contents.push_str(line);
    contents.push('\n');

    fs::write(profile, contents)
        .with_context(|| format!("Failed to update {}", profile.display()))?;
    Ok(())
}
