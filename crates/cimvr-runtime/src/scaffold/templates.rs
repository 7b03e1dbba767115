//! File contents written into a freshly generated plugin project.
//!
//! These are deliberately plain string constants rather than a templating
//! engine; nothing in them is parameterized except where the caller says so.

/// Dependency and crate-type block appended to the manifest `cargo new` made.
///
/// Plugins compile to `cdylib` so the engine can load them as WASM, and they
/// pull the engine interface straight from the upstream repository.
pub const MANIFEST_APPEND: &str = r#"# Added by `cimvr new`
cimvr_common = { git = "https://github.com/ChatImproVR/iteration0.git", branch = "main" }
cimvr_engine_interface = { git = "https://github.com/ChatImproVR/iteration0.git", branch = "main" }
serde = { version = "1", features = ["derive"] }

[lib]
crate-type = ["cdylib"]
"#;

/// Cargo configuration making `wasm32-unknown-unknown` the default target.
///
/// The `test_pc` alias exists because plain `cargo test` would try to run the
/// test binary under the WASM target; the alias pins tests to the host.
pub const CARGO_CONFIG: &str = r#"# Added by `cimvr new`
[build]
target = "wasm32-unknown-unknown"

[alias]
test_pc = "test --target=x86_64-unknown-linux-gnu"
"#;

/// Minimal plugin source: one state struct per side, wired up by the
/// engine's entry-point macro.
pub const PLUGIN_STUB: &str = r#"use cimvr_engine_interface::{make_app_state, prelude::*, println};

// All state used by the client side
struct ClientState;

impl UserState for ClientState {
    // Called once at plugin load
    fn new(_io: &mut EngineIo, _sched: &mut EngineSchedule<Self>) -> Self {
        // This is the engine's println, not std's; std output never leaves
        // the WASM sandbox.
        println!("Hello, client!");
        Self
    }
}

// All state used by the server side
struct ServerState;

impl UserState for ServerState {
    fn new(_io: &mut EngineIo, _sched: &mut EngineSchedule<Self>) -> Self {
        println!("Hello, server!");
        Self
    }
}

// Defines the entry points the engine looks for when loading the plugin.
make_app_state!(ClientState, ServerState);
"#;
