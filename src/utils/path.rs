use std::env;
use std::path::PathBuf;

/// How a filename argument is turned into a concrete path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PathResolution {
    /// Use the filename as given; relative paths follow the process working
    /// directory.
    #[default]
    WorkingDir,
    /// Bare filenames (no `/` or `\`) resolve next to the running executable.
    /// Kept for compatibility with callers that store the manifest alongside
    /// the installed tool.
    InstallDir,
}

/// Resolves a filename argument according to the chosen policy.
pub fn resolve_input_path(filename: &str, policy: PathResolution) -> PathBuf {
    if policy == PathResolution::InstallDir
        && !filename.contains('/')
        && !filename.contains('\\')
    {
        if let Some(dir) = install_dir() {
            return dir.join(filename);
        }
    }
    PathBuf::from(filename)
}

/// Directory holding the running executable, when discoverable.
fn install_dir() -> Option<PathBuf> {
    env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|p| p.to_path_buf()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn working_dir_policy_uses_the_name_as_given() {
        let resolved = resolve_input_path("package.json", PathResolution::WorkingDir);
        assert_eq!(resolved, Path::new("package.json"));
    }

    #[test]
    fn install_dir_policy_leaves_explicit_paths_alone() {
        let resolved = resolve_input_path("some/dir/package.json", PathResolution::InstallDir);
        assert_eq!(resolved, Path::new("some/dir/package.json"));
    }

    #[test]
    fn install_dir_policy_anchors_bare_names_next_to_the_binary() {
        let resolved = resolve_input_path("package.json", PathResolution::InstallDir);
        assert_eq!(
            resolved.file_name().and_then(|n| n.to_str()),
            Some("package.json")
        );
        // The test harness binary always has a parent directory.
        assert!(resolved.parent().is_some_and(|p| p.components().count() > 0));
    }
}
