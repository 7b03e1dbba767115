//! Plugin project generation behind `cimvr new`.
//!
//! Scaffolding is a thin wrapper around `cargo new --lib`: cargo lays down
//! the package skeleton, then we rewrite it into a WASM plugin (engine
//! dependencies, `cdylib` crate type, default build target, starter source).
//! Optionally the project's `target` directory is registered in the user's
//! shell profile so `cimvr launch` can find the built plugin.

mod shell;
mod templates;

pub use shell::{ShellUpdate, export_line, register_plugin_dir};

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{Context, Result, bail};
use tracing::warn;

/// Generate a new plugin project named `name` under `parent`.
///
/// Returns the project directory. A failure to update the shell profile is
/// reported but does not fail the scaffold; the generated project is already
/// usable at that point.
pub fn create_plugin_project(parent: &Path, name: &str, append_shell: bool) -> Result<PathBuf> {
    let project_dir = parent.join(name);

    run_cargo_new(parent, name)?;
    apply_templates(&project_dir)?;
    println!("✓ Created plugin project `{name}`");

    if append_shell {
        match plugin_target_dir(&project_dir).and_then(|dir| register_plugin_dir(&dir)) {
            Ok(ShellUpdate::Appended { profile }) => {
                println!("✓ Added {} to CIMVR_PLUGINS in {}", name, profile.display());
            }
            Ok(ShellUpdate::Unsupported) => println!("Unsupported operating system."),
            Err(err) => warn!(error = %err, "failed to update shell profile"),
        }
    }

    Ok(project_dir)
}

/// Run `cargo new --lib <name>` inside `parent`.
fn run_cargo_new(parent: &Path, name: &str) -> Result<()> {
    let status = Command::new("cargo")
        .args(["new", "--lib", name])
        .current_dir(parent)
        .status()
        .context("Failed to run `cargo new`")?;

    if !status.success() {
        bail!("`cargo new --lib {name}` exited with {status}");
    }
    Ok(())
}

/// Rewrite the generated skeleton so it builds as a WASM plugin.
fn apply_templates(project_dir: &Path) -> Result<()> {
    append_manifest(project_dir)?;
    write_cargo_config(project_dir)?;
    write_plugin_stub(project_dir)?;
    Ok(())
}

/// Append the engine dependencies and `cdylib` crate type to the manifest.
///
/// `cargo new` ends the manifest with an open `[dependencies]` table, so the
/// appended block's dependency lines land inside it.
fn append_manifest(project_dir: &Path) -> Result<()> {
    let manifest = project_dir.join("Cargo.toml");
    let mut contents = fs::read_to_string(&manifest)
        .with_context(|| format!("Failed to read {}", manifest.display()))?;

    if !contents.ends_with('\n') {
        contents.push('\n');
    }
    contents.push_str(templates::MANIFEST_APPEND);

    fs::write(&manifest, contents)
        .with_context(|| format!("Failed to update {}", manifest.display()))?;
    Ok(())
}

/// Write `.cargo/config.toml` pinning the default build target to WASM.
fn write_cargo_config(project_dir: &Path) -> Result<()> {
    let config_dir = project_dir.join(".cargo");
    fs::create_dir_all(&config_dir)
        .with_context(|| format!("Failed to create {}", config_dir.display()))?;

    let config = config_dir.join("config.toml");
    fs::write(&config, templates::CARGO_CONFIG)
        .with_context(|| format!("Failed to write {}", config.display()))?;
    Ok(())
}

/// Replace the generated `src/lib.rs` with the plugin starter.
fn write_plugin_stub(project_dir: &Path) -> Result<()> {
    let lib_rs = project_dir.join("src").join("lib.rs");
    fs::write(&lib_rs, templates::PLUGIN_STUB)
        .with_context(|| format!("Failed to write {}", lib_rs.display()))?;
    Ok(())
}

/// Absolute `target` directory of the project, for shell registration.
///
/// The launcher joins `wasm32-unknown-unknown/release` onto search entries
/// itself, so the registered path stops at `target`.
fn plugin_target_dir(project_dir: &Path) -> Result<PathBuf> {
    let absolute = project_dir
        .canonicalize()
        .with_context(|| format!("Failed to resolve {}", project_dir.display()))?;
    Ok(absolute.join("target"))
}
