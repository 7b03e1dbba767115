//! New-project command handler.

use std::env;

use anyhow::Result;

use cimvr_runtime::scaffold;

/// Execute the new command.
///
/// Generates the plugin project in the current working directory.
pub fn execute(name: &str, append_shell: bool) -> Result<()> {
    let cwd = env::current_dir()?;
    scaffold::create_plugin_project(&cwd, name, append_shell)?;
    Ok(())
}
