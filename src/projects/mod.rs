//! Project enumeration
//!
//! A project is an immediate subdirectory of the configured root. Discovery
//! happens once per run; non-directory entries are skipped silently.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// A project directory discovered under the root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    /// Directory name of the project
    pub name: String,
    /// Full filesystem path of the project
    pub path: PathBuf,
}

/// List the immediate subdirectories of `root`.
///
/// The order is the filesystem listing order unless `sort` is set, in which
/// case projects are sorted by name. Symlinks to directories count as
/// projects; everything else is skipped.
pub fn discover(root: &Path, sort: bool) -> Result<Vec<Project>> {
    let entries = fs::read_dir(root)
        .with_context(|| format!("failed to read projects root {}", root.display()))?;

    let mut projects = Vec::new();
    for entry in entries {
        let entry = entry
            .with_context(|| format!("failed to read entry under {}", root.display()))?;
        let path = entry.path();
        // is_dir() follows symlinks, matching the "is a directory" check
        if !path.is_dir() {
            continue;
        }
        projects.push(Project {
            name: entry.file_name().to_string_lossy().into_owned(),
            path,
        });
    }

    if sort {
        projects.sort_by(|a, b| a.name.cmp(&b.name));
    }

    debug!(root = %root.display(), count = projects.len(), "discovered projects");
    Ok(projects)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_discover_skips_regular_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("alpha")).unwrap();
        fs::create_dir(dir.path().join("beta")).unwrap();
        fs::write(dir.path().join("notes.txt"), "not a project").unwrap();

        let projects = discover(dir.path(), true).unwrap();

        let names: Vec<&str> = projects.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["alpha", "beta"]);
    }

    #[test]
    fn test_discover_empty_root() {
        let dir = tempfile::tempdir().unwrap();
        let projects = discover(dir.path(), false).unwrap();
        assert!(projects.is_empty());
    }

    #[test]
    fn test_discover_missing_root_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("gone");
        let err = discover(&missing, false).unwrap_err();
        assert!(err.to_string().contains("failed to read projects root"));
    }

    #[test]
    fn test_discover_sorted_order() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["zeta", "mid", "aardvark"] {
            fs::create_dir(dir.path().join(name)).unwrap();
        }

        let projects = discover(dir.path(), true).unwrap();

        let names: Vec<&str> = projects.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["aardvark", "mid", "zeta"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_discover_follows_directory_symlinks() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("real");
        fs::create_dir(&target).unwrap();
        std::os::unix::fs::symlink(&target, dir.path().join("linked")).unwrap();

        let projects = discover(dir.path(), true).unwrap();

        let names: Vec<&str> = projects.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["linked", "real"]);
    }
}
