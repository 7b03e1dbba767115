//! Launch-plan construction.
//!
//! Resolves every requested role and plugin up front, then assembles one
//! argument vector per role. The first miss aborts before anything spawns.

use std::ffi::OsString;

use tracing::debug;

use cimvr_core::paths::{ResolveError, Role, SearchContext, resolve_executable, resolve_plugin};
use cimvr_core::ports::LaunchCommand;

/// Launch order is fixed: the server starts before the client, regardless of
/// the order roles were requested in.
const LAUNCH_ORDER: [Role; 2] = [Role::Server, Role::Client];

/// Client-only launch options.
///
/// Appended to the client argument vector after the plugin paths, in a fixed
/// order: `--vr`, then `--username`, then `--connect`.
#[derive(Debug, Clone, Default)]
pub struct ClientOptions {
    /// Start the client in VR mode
    pub vr: bool,
    /// Username the client presents to the server
    pub username: Option<String>,
    /// Remote host address the client connects to
    pub connect: Option<String>,
}

impl ClientOptions {
    fn extend_args(&self, args: &mut Vec<OsString>) {
        if self.vr {
            args.push("--vr".into());
        }
        if let Some(username) = &self.username {
            args.push("--username".into());
            args.push(username.into());
        }
        if let Some(host) = &self.connect {
            args.push("--connect".into());
            args.push(host.into());
        }
    }
}

/// Build the ordered launch plan for the requested roles.
///
/// Executables for the requested roles are resolved first (in launch order),
/// then every plugin; the first resolution failure is returned and nothing
/// spawns. Each command's arguments are the resolved plugin paths in request
/// order, plus the client-only options on the client command.
pub fn build_launch_plan(
    context: &SearchContext,
    roles: &[Role],
    plugin_names: &[String],
    client_options: &ClientOptions,
) -> Result<Vec<LaunchCommand>, ResolveError> {
    let mut executables = Vec::with_capacity(roles.len());
    for role in LAUNCH_ORDER {
        if roles.contains(&role) {
            executables.push(resolve_executable(role, context)?);
        }
    }

    let mut plugin_args: Vec<OsString> = Vec::with_capacity(plugin_names.len());
    for name in plugin_names {
        let plugin = resolve_plugin(name, context)?;
        debug!(name = plugin.name.as_str(), path = %plugin.path.display(), "resolved plugin");
        plugin_args.push(plugin.path.into_os_string());
    }

    let plan = executables
        .into_iter()
        .map(|executable| {
            let mut args = plugin_args.clone();
            if executable.role == Role::Client {
                client_options.extend_args(&mut args);
            }
            LaunchCommand {
                role: executable.role,
                program: executable.path,
                args,
            }
        })
        .collect();
    Ok(plan)
}
