//! Process spawn port.
//!
//! The launcher never talks to `std::process` directly; it goes through this
//! port so tests can verify spawn behavior with a recording fake, including
//! that nothing spawns when resolution fails.
//!
//! Wiring:
//! - Core owns the trait and DTOs (no `std::process` types in signatures)
//! - `cimvr-runtime` implements it over `std::process::Command`
//! - The CLI injects the implementation at its composition root

use std::ffi::OsString;
use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::paths::Role;

/// Errors from starting or waiting on a child process.
#[derive(Debug, Error)]
pub enum SpawnError {
    /// The child process could not be started.
    #[error("Failed to start {role} process `{}`: {reason}", .program.display())]
    Start {
        /// Role the process was meant to fill
        role: Role,
        /// Program that failed to start
        program: PathBuf,
        /// Stringified OS error
        reason: String,
    },

    /// Waiting on a started child failed.
    #[error("Failed while waiting for the {role} process: {reason}")]
    Wait {
        /// Role of the child being waited on
        role: Role,
        /// Stringified OS error
        reason: String,
    },
}

/// Exit summary for a launched process.
///
/// Port-owned rather than `std::process::ExitStatus`, which a fake cannot
/// construct.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessExit {
    /// OS exit code; `None` when the process was terminated by a signal
    pub code: Option<i32>,
}

impl ProcessExit {
    /// Whether the process exited cleanly with code zero.
    pub const fn success(self) -> bool {
        matches!(self.code, Some(0))
    }
}

/// One process the launcher intends to start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchCommand {
    /// Role this command fills
    pub role: Role,
    /// Executable to spawn
    pub program: PathBuf,
    /// Arguments, in final order
    pub args: Vec<OsString>,
}

/// Handle to a started child process.
pub trait ChildHandle: Send {
    /// Block until the process exits.
    fn wait(&mut self) -> Result<ProcessExit, SpawnError>;
}

// Opaque `Debug` so `Result<Box<dyn ChildHandle>, _>` satisfies the `Debug`
// bounds on `Result::unwrap`/`unwrap_err` without burdening implementors.
impl fmt::Debug for dyn ChildHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ChildHandle")
    }
}

/// Port for starting OS processes.
///
/// Implementations must inherit the parent's standard streams so launched
/// processes print straight to the user's terminal.
pub trait ProcessSpawner: Send + Sync {
    /// Start the process described by `command`.
    fn spawn(&self, command: &LaunchCommand) -> Result<Box<dyn ChildHandle>, SpawnError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_requires_exit_code_zero() {
        assert!(ProcessExit { code: Some(0) }.success());
        assert!(!ProcessExit { code: Some(1) }.success());
        assert!(!ProcessExit { code: None }.success());
    }

    #[test]
    fn start_error_names_role_and_program() {
        let err = SpawnError::Start {
            role: Role::Server,
            program: PathBuf::from("/opt/cimvr_server"),
            reason: "No such file or directory".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("server"));
        assert!(message.contains("/opt/cimvr_server"));
        assert!(message.contains("No such file or directory"));
    }
}
