//! Project discovery: scan the analysis root for directories following the
//! `native*` naming convention.

use std::path::{Path, PathBuf};

use crate::error::DiscoveryError;
use crate::observe::RunObserver;

/// Directory-name prefix that marks an analyzable NAPI project.
pub const TARGET_PREFIX: &str = "native";

/// One analyzable project. Immutable once discovered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    /// Absolute path handed to the analyzer as its single argument.
    pub path: PathBuf,
    /// Display name, the final path component.
    pub name: String,
}

/// List the immediate children of `root` that qualify as analysis targets:
/// directories whose name starts with [`TARGET_PREFIX`]. No recursion.
///
/// Returned order follows directory-listing order, which is stable within a
/// single filesystem snapshot. An empty result is valid and distinct from a
/// discovery failure.
pub fn discover(root: &Path, observer: &dyn RunObserver) -> Result<Vec<Target>, DiscoveryError> {
    observer.discovery_started(root);

    if !root.exists() {
        return Err(DiscoveryError::RootMissing(root.to_path_buf()));
    }
    let root = root.canonicalize().map_err(|e| DiscoveryError::Io {
        path: root.to_path_buf(),
        source: e,
    })?;
    if !root.is_dir() {
        return Err(DiscoveryError::NotADirectory(root));
    }

    let entries = std::fs::read_dir(&root).map_err(|e| DiscoveryError::Io {
        path: root.clone(),
        source: e,
    })?;

    let mut targets = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| DiscoveryError::Io {
            path: root.clone(),
            source: e,
        })?;

        let name = entry.file_name().to_string_lossy().into_owned();
        if !name.starts_with(TARGET_PREFIX) {
            continue;
        }
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }

        let target = Target { path, name };
        observer.target_found(&target);
        targets.push(target);
    }

    observer.targets_discovered(targets.len());
    Ok(targets)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observe::NoopObserver;
    use pretty_assertions::assert_eq;

    fn names(targets: &[Target]) -> Vec<&str> {
        let mut v: Vec<&str> = targets.iter().map(|t| t.name.as_str()).collect();
        v.sort_unstable();
        v
    }

    #[test]
    fn finds_only_prefixed_directories() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::create_dir(tmp.path().join("nativeA")).unwrap();
        std::fs::create_dir(tmp.path().join("nativeB")).unwrap();
        std::fs::create_dir(tmp.path().join("other")).unwrap();
        std::fs::write(tmp.path().join("native_readme.txt"), "not a dir").unwrap();

        let targets = discover(tmp.path(), &NoopObserver).unwrap();
        assert_eq!(names(&targets), vec!["nativeA", "nativeB"]);
    }

    #[test]
    fn target_paths_are_absolute() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::create_dir(tmp.path().join("native1")).unwrap();

        let targets = discover(tmp.path(), &NoopObserver).unwrap();
        assert_eq!(targets.len(), 1);
        assert!(targets[0].path.is_absolute());
        assert!(targets[0].path.ends_with("native1"));
    }

    #[test]
    fn empty_root_is_not_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let targets = discover(tmp.path(), &NoopObserver).unwrap();
        assert!(targets.is_empty());
    }

    #[test]
    fn missing_root_fails() {
        let tmp = tempfile::tempdir().unwrap();
        let gone = tmp.path().join("does-not-exist");
        let err = discover(&gone, &NoopObserver).unwrap_err();
        assert!(matches!(err, DiscoveryError::RootMissing(_)));
    }

    #[test]
    fn file_root_fails() {
        let tmp = tempfile::tempdir().unwrap();
        let file = tmp.path().join("root.txt");
        std::fs::write(&file, "x").unwrap();
        let err = discover(&file, &NoopObserver).unwrap_err();
        assert!(matches!(err, DiscoveryError::NotADirectory(_)));
    }

    #[test]
    fn does_not_recurse_into_subdirectories() {
        let tmp = tempfile::tempdir().unwrap();
        let nested = tmp.path().join("other").join("nativeNested");
        std::fs::create_dir_all(nested).unwrap();

        let targets = discover(tmp.path(), &NoopObserver).unwrap();
        assert!(targets.is_empty());
    }
}
