//! End-to-end launch pipeline tests: path resolution through plan
//! construction to the spawn port, against a staged filesystem.
//!
//! The process environment is never mutated; everything flows through
//! explicit `EnvSnapshot` values, so none of these tests need `#[ignore]`
//! under the workspace `unsafe_code` lint.

use std::path::Path;
use std::sync::Mutex;
use std::time::Duration;

use tempfile::tempdir;

use cimvr_core::paths::{EnvSnapshot, Role, SearchContext};
use cimvr_core::ports::{ChildHandle, LaunchCommand, ProcessExit, ProcessSpawner, SpawnError};
use cimvr_runtime::{ClientOptions, Launcher, build_launch_plan};

struct RecordingSpawner {
    commands: Mutex<Vec<LaunchCommand>>,
}

impl RecordingSpawner {
    fn new() -> Self {
        Self {
            commands: Mutex::new(Vec::new()),
        }
    }

    fn recorded(&self) -> Vec<LaunchCommand> {
        self.commands.lock().unwrap().clone()
    }
}

impl ProcessSpawner for RecordingSpawner {
    fn spawn(&self, command: &LaunchCommand) -> Result<Box<dyn ChildHandle>, SpawnError> {
        self.commands.lock().unwrap().push(command.clone());
        Ok(Box::new(ImmediateExit))
    }
}

struct ImmediateExit;

impl ChildHandle for ImmediateExit {
    fn wait(&mut self) -> Result<ProcessExit, SpawnError> {
        Ok(ProcessExit { code: Some(0) })
    }
}

fn write_file(path: &Path) {
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, "").unwrap();
}

fn instant_launcher() -> Launcher {
    Launcher::new().with_stagger(Duration::ZERO)
}

#[test]
fn both_roles_launch_with_the_resolved_plugin() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("cimvr_server"));
    write_file(&temp.path().join("cimvr_client"));
    let plugin = temp.path().join("plugins").join("foo.wasm");
    write_file(&plugin);

    let context = SearchContext::new(temp.path(), EnvSnapshot::empty());
    let plan = build_launch_plan(
        &context,
        &[Role::Server, Role::Client],
        &["foo".to_string()],
        &ClientOptions::default(),
    )
    .unwrap();

    let spawner = RecordingSpawner::new();
    let exits = instant_launcher().run(&plan, &spawner).unwrap();
    assert!(exits.iter().all(|exit| exit.success()));

    let commands = spawner.recorded();
    assert_eq!(commands.len(), 2);
    assert_eq!(commands[0].role, Role::Server);
    assert_eq!(commands[0].program, temp.path().join("cimvr_server"));
    assert_eq!(commands[1].role, Role::Client);
    assert_eq!(commands[1].program, temp.path().join("cimvr_client"));
    for command in &commands {
        assert_eq!(command.args, [plugin.clone().into_os_string()]);
    }
}

#[test]
fn client_only_launch_never_resolves_the_server() {
    let temp = tempdir().unwrap();
    // No server binary anywhere: the plan must not even look for one.
    write_file(&temp.path().join("cimvr_client"));
    let plugin = temp.path().join("bar.wasm");
    write_file(&plugin);

    let context = SearchContext::new(temp.path(), EnvSnapshot::empty());
    let plan = build_launch_plan(
        &context,
        &[Role::Client],
        &[plugin.to_string_lossy().into_owned()],
        &ClientOptions {
            vr: true,
            username: Some("Alice".to_string()),
            connect: None,
        },
    )
    .unwrap();

    let spawner = RecordingSpawner::new();
    instant_launcher().run(&plan, &spawner).unwrap();

    let commands = spawner.recorded();
    assert_eq!(commands.len(), 1);
    assert_eq!(commands[0].role, Role::Client);
    let expected = [
        plugin.into_os_string(),
        "--vr".into(),
        "--username".into(),
        "Alice".into(),
    ];
    assert_eq!(commands[0].args, expected);
}

#[test]
fn registered_project_directory_supplies_the_plugin() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("cimvr_server"));
    write_file(&temp.path().join("cimvr_client"));

    // A plugin project elsewhere, registered the way `cimvr new -a` does:
    // the entry stops at `target`, and the launcher derives the rest.
    let project = temp.path().join("proj");
    let built = project
        .join("target")
        .join("wasm32-unknown-unknown")
        .join("release")
        .join("foo.wasm");
    write_file(&built);

    let env = EnvSnapshot::empty().with_var(
        "CIMVR_PLUGINS",
        project.join("target").to_string_lossy().as_ref(),
    );
    let context = SearchContext::new(temp.path(), env);
    let plan = build_launch_plan(
        &context,
        &[Role::Server, Role::Client],
        &["foo".to_string()],
        &ClientOptions::default(),
    )
    .unwrap();

    assert_eq!(plan[0].args, [built.into_os_string()]);
}
