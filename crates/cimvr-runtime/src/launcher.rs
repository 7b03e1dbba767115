//! Staggered process startup and blocking wait.

use std::thread;
use std::time::Duration;

use tracing::{debug, info, warn};

use cimvr_core::ports::{LaunchCommand, ProcessExit, ProcessSpawner, SpawnError};

/// Pause after each process start.
///
/// Gives the server time to begin listening before the client's first
/// connection attempt. This is a known race, not a readiness guarantee: a
/// slow server can still lose to a fast client.
pub const DEFAULT_STAGGER: Duration = Duration::from_millis(100);

/// Starts the planned processes in order and waits for all of them.
#[derive(Debug, Clone)]
pub struct Launcher {
    stagger: Duration,
}

impl Default for Launcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Launcher {
    pub const fn new() -> Self {
        Self {
            stagger: DEFAULT_STAGGER,
        }
    }

    /// Override the pause between starts. Tests pass `Duration::ZERO`.
    #[must_use]
    pub const fn with_stagger(mut self, stagger: Duration) -> Self {
        self.stagger = stagger;
        self
    }

    /// Spawn every command in plan order, pausing after each start, then
    /// block until all children exit.
    ///
    /// Children are never restarted or supervised; one that never exits
    /// blocks here forever. A spawn failure mid-plan is returned immediately
    /// and already-started children are left running.
    pub fn run(
        &self,
        plan: &[LaunchCommand],
        spawner: &dyn ProcessSpawner,
    ) -> Result<Vec<ProcessExit>, SpawnError> {
        let mut children = Vec::with_capacity(plan.len());
        for command in plan {
            info!(role = %command.role, program = %command.program.display(), "starting process");
            children.push((command.role, spawner.spawn(command)?));
            thread::sleep(self.stagger);
        }

        let mut exits = Vec::with_capacity(children.len());
        for (role, mut child) in children {
            let exit = child.wait()?;
            if exit.success() {
                debug!(%role, "process exited cleanly");
            } else {
                warn!(%role, code = ?exit.code, "process exited with failure");
            }
            exits.push(exit);
        }
        Ok(exits)
    }
}
