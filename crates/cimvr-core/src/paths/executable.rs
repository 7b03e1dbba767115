//! Executable resolution for the server and client roles.

use std::path::PathBuf;

use tracing::debug;

use super::context::SearchContext;
use super::error::ResolveError;
use super::roles::Role;

/// How an executable path was derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutableSource {
    /// The role's override variable was set; its value is used verbatim.
    Override,
    /// The path was found by probing the conventional locations.
    Probed,
}

/// Resolution result for one role's executable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedExecutable {
    /// Role this executable fills
    pub role: Role,
    /// Path the launcher should spawn
    pub path: PathBuf,
    /// How the path was determined
    pub source: ExecutableSource,
}

/// Locations probed for a role's executable when no override is set.
///
/// All candidate filenames next to the root, then in the release build
/// output, then in the client-specific release build output (client and
/// server may build to different target directories).
fn probe_locations(role: Role, context: &SearchContext) -> Vec<PathBuf> {
    let root = context.root();
    let search_dirs = [
        root.to_path_buf(),
        root.join("target").join("release"),
        root.join("client").join("target").join("release"),
    ];

    let mut locations = Vec::new();
    for dir in &search_dirs {
        for name in role.candidate_filenames() {
            locations.push(dir.join(name));
        }
    }
    locations
}

/// Resolve the executable for a role.
///
/// Resolution order:
/// 1. The role's override variable (`CIMVR_SERVER` / `CIMVR_CLIENT`), trusted
///    verbatim with no existence check
/// 2. The first probe location that exists as a file
pub fn resolve_executable(
    role: Role,
    context: &SearchContext,
) -> Result<ResolvedExecutable, ResolveError> {
    if let Some(value) = context.env().get(role.override_var()) {
        debug!(%role, value, "using executable override");
        return Ok(ResolvedExecutable {
            role,
            path: PathBuf::from(value),
            source: ExecutableSource::Override,
        });
    }

    let locations = probe_locations(role, context);
    if let Some(found) = locations.iter().find(|candidate| candidate.is_file()) {
        debug!(%role, path = %found.display(), "found executable");
        return Ok(ResolvedExecutable {
            role,
            path: found.clone(),
            source: ExecutableSource::Probed,
        });
    }

    Err(ResolveError::ExecutableNotFound {
        role,
        searched: locations,
    })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::paths::context::EnvSnapshot;

    fn context_at(root: &std::path::Path) -> SearchContext {
        SearchContext::new(root, EnvSnapshot::empty())
    }

    #[test]
    fn override_is_returned_verbatim_without_existence_check() {
        let dir = tempfile::tempdir().unwrap();
        let env = EnvSnapshot::empty().with_var("CIMVR_SERVER", "/definitely/not/a/real/file");
        let context = SearchContext::new(dir.path(), env);

        let resolved = resolve_executable(Role::Server, &context).unwrap();
        assert_eq!(resolved.path, PathBuf::from("/definitely/not/a/real/file"));
        assert_eq!(resolved.source, ExecutableSource::Override);
    }

    #[test]
    fn missing_everywhere_reports_all_probed_locations() {
        let dir = tempfile::tempdir().unwrap();
        let context = context_at(dir.path());

        let err = resolve_executable(Role::Client, &context).unwrap_err();
        match err {
            ResolveError::ExecutableNotFound { role, searched } => {
                assert_eq!(role, Role::Client);
                // Two candidate names across three directories.
                assert_eq!(searched.len(), 6);
                assert_eq!(searched[0], dir.path().join("cimvr_client"));
                assert_eq!(searched[1], dir.path().join("cimvr_client.exe"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn root_adjacent_wins_over_build_output() {
        let dir = tempfile::tempdir().unwrap();
        let build_dir = dir.path().join("target").join("release");
        fs::create_dir_all(&build_dir).unwrap();
        fs::write(dir.path().join("cimvr_server"), "").unwrap();
        fs::write(build_dir.join("cimvr_server"), "").unwrap();

        let resolved = resolve_executable(Role::Server, &context_at(dir.path())).unwrap();
        assert_eq!(resolved.path, dir.path().join("cimvr_server"));
        assert_eq!(resolved.source, ExecutableSource::Probed);
    }

    #[test]
    fn exe_suffix_at_root_wins_over_bare_name_in_build_output() {
        // Probing is per directory: every candidate name is tried at the root
        // before any build-output location.
        let dir = tempfile::tempdir().unwrap();
        let build_dir = dir.path().join("target").join("release");
        fs::create_dir_all(&build_dir).unwrap();
        fs::write(dir.path().join("cimvr_server.exe"), "").unwrap();
        fs::write(build_dir.join("cimvr_server"), "").unwrap();

        let resolved = resolve_executable(Role::Server, &context_at(dir.path())).unwrap();
        assert_eq!(resolved.path, dir.path().join("cimvr_server.exe"));
    }

    #[test]
    fn client_build_directory_is_probed_last() {
        let dir = tempfile::tempdir().unwrap();
        let client_build = dir.path().join("client").join("target").join("release");
        fs::create_dir_all(&client_build).unwrap();
        fs::write(client_build.join("cimvr_client"), "").unwrap();

        let resolved = resolve_executable(Role::Client, &context_at(dir.path())).unwrap();
        assert_eq!(resolved.path, client_build.join("cimvr_client"));
    }
}
