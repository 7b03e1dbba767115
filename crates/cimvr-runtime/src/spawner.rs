//! `std::process` implementation of the spawn port.

use std::process::{Child, Command};

use cimvr_core::paths::Role;
use cimvr_core::ports::{ChildHandle, LaunchCommand, ProcessExit, ProcessSpawner, SpawnError};

/// Spawns real OS processes. Standard streams are inherited, so launched
/// processes print straight to the user's terminal.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsProcessSpawner;

struct OsChild {
    role: Role,
    child: Child,
}

impl ChildHandle for OsChild {
    fn wait(&mut self) -> Result<ProcessExit, SpawnError> {
        let status = self.child.wait().map_err(|err| SpawnError::Wait {
            role: self.role,
            reason: err.to_string(),
        })?;
        Ok(ProcessExit {
            code: status.code(),
        })
    }
}

impl ProcessSpawner for OsProcessSpawner {
    fn spawn(&self, command: &LaunchCommand) -> Result<Box<dyn ChildHandle>, SpawnError> {
        let child = Command::new(&command.program)
            .args(&command.args)
            .spawn()
            .map_err(|err| SpawnError::Start {
                role: command.role,
                program: command.program.clone(),
                reason: err.to_string(),
            })?;
        Ok(Box::new(OsChild {
            role: command.role,
            child,
        }))
    }
}
