//! Main commands enum and subcommand arguments.
//!
//! This module defines the available commands for the launcher CLI.

use clap::Subcommand;

/// Available commands for the ChatImproVR launcher.
#[derive(Subcommand)]
pub enum Commands {
    /// Launches the client and server, finds plugin paths
    ///
    /// Plugins may be given as bare names, searched for as `<name>.wasm` in
    /// the conventional plugin folders, or as literal paths to existing
    /// files. The `CIMVR_PLUGINS` environment variable adds extra search
    /// entries as a semicolon-separated list of plugin project directories.
    Launch {
        /// Plugin names or paths to load into the client and server
        #[arg(required = true)]
        plugins: Vec<String>,

        /// Launch only the client
        #[arg(long, conflicts_with = "server")]
        client: bool,

        /// Launch only the server
        #[arg(long)]
        server: bool,

        /// Start the client in VR mode
        #[arg(long)]
        vr: bool,

        /// Username the client presents to the server
        #[arg(long)]
        username: Option<String>,

        /// Remote host address the client connects to
        #[arg(long)]
        connect: Option<String>,
    },

    /// Create a new plugin project
    New {
        /// Name of the plugin crate to generate
        name: String,

        /// Register the project's target directory in the shell profile
        /// so `cimvr launch` finds the built plugin
        #[arg(short = 'a', long = "append-shell")]
        append_shell: bool,
    },

    /// Show the resolved executable and plugin search paths
    Paths,
}
