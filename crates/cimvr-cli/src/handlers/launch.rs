//! Launch command handler.
//!
//! Resolves everything up front, then starts the requested processes.
//! Resolution failures abort before any process is spawned.

use anyhow::Result;
use tracing::debug;

use cimvr_core::paths::{Role, SearchContext};
use cimvr_core::ports::ProcessSpawner;
use cimvr_runtime::{ClientOptions, Launcher, build_launch_plan};

/// Roles to launch for the given restriction flags.
///
/// Without a restriction both roles launch. The parser rejects the
/// combination of both flags before this is reached.
pub fn requested_roles(client_only: bool, server_only: bool) -> Vec<Role> {
    match (client_only, server_only) {
        (true, false) => vec![Role::Client],
        (false, true) => vec![Role::Server],
        _ => vec![Role::Server, Role::Client],
    }
}

/// Execute the launch command.
///
/// Blocks until every launched process has exited. A non-zero child exit is
/// logged by the launcher but is not an error for the invocation itself.
pub fn execute(
    context: &SearchContext,
    spawner: &dyn ProcessSpawner,
    plugins: &[String],
    roles: &[Role],
    options: &ClientOptions,
) -> Result<()> {
    let plan = build_launch_plan(context, roles, plugins, options)?;
    debug!(processes = plan.len(), "launch plan resolved");

    Launcher::new().run(&plan, spawner)?;
    Ok(())
}
