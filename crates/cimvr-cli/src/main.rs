//! CLI entry point - the composition root.
//!
//! This is the ONLY place that touches the ambient OS state: the process
//! environment, the working directory, logging, and the real process
//! spawner. Handlers receive all of it through explicit arguments, so
//! everything below this file is testable with fakes.

use std::env;

use anyhow::Result;
use clap::Parser;

use cimvr_cli::{Cli, Commands, handlers};
use cimvr_core::paths::{EnvSnapshot, SearchContext};
use cimvr_runtime::{ClientOptions, OsProcessSpawner};

fn main() -> Result<()> {
    // Load environment variables from a local .env, if any
    dotenvy::dotenv().ok();

    // Parse CLI arguments
    let cli = Cli::parse();

    let snapshot = EnvSnapshot::from_process();
    init_tracing(cli.verbose || snapshot.flag("CIMVR_VERBOSE"));

    // Dispatch to appropriate handler
    let Some(command) = cli.command else {
        // No command provided - show help
        use clap::CommandFactory;
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Launch {
            plugins,
            client,
            server,
            vr,
            username,
            connect,
        } => {
            let context = SearchContext::new(env::current_dir()?, snapshot);
            let roles = handlers::launch::requested_roles(client, server);
            let options = ClientOptions {
                vr,
                username,
                connect,
            };
            handlers::launch::execute(&context, &OsProcessSpawner, &plugins, &roles, &options)?;
        }
        Commands::New { name, append_shell } => {
            handlers::new::execute(&name, append_shell)?;
        }
        Commands::Paths => {
            let context = SearchContext::new(env::current_dir()?, snapshot);
            handlers::paths::execute(&context)?;
        }
    }

    Ok(())
}

/// Initialize logging.
///
/// `RUST_LOG` wins when set; otherwise the verbose flag (or the
/// `CIMVR_VERBOSE` environment variable) selects debug over info.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
