//! Enumeration of work items

use batcher_core::{Layout, WorkItem};
use std::path::Path;

use crate::error::{EngineError, Result};

/// Version-control metadata directory, never a work item
const VCS_METADATA_DIR: &str = ".git";

/// Lists the immediate child directories of `dir`, sorted, without `.git`
///
/// Names that are not valid UTF-8 cannot be passed to the client as
/// pathspecs; they are skipped with a warning.
pub fn list_subdirectories(dir: &Path) -> Result<Vec<String>> {
    if !dir.is_dir() {
        return Err(EngineError::NotADirectory(dir.to_path_buf()));
    }

    let read_dir = std::fs::read_dir(dir).map_err(|source| EngineError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut names = Vec::new();
    for entry in read_dir {
        let entry = entry.map_err(|source| EngineError::Io {
            path: dir.to_path_buf(),
            source,
        })?;

        // Follows symlinks, like a plain `is_dir` check
        if !entry.path().is_dir() {
            continue;
        }

        match entry.file_name().into_string() {
            Ok(name) if name == VCS_METADATA_DIR => {}
            Ok(name) => names.push(name),
            Err(raw) => log::warn!("Skipping directory with non UTF-8 name: {:?}", raw),
        }
    }

    names.sort();
    Ok(names)
}

/// Resolves the directory to scan for a layout and lists its work items
pub fn enumerate_work_items(layout: Layout, repo_root: &Path) -> Result<Vec<WorkItem>> {
    if !repo_root.is_dir() {
        return Err(EngineError::NotADirectory(repo_root.to_path_buf()));
    }

    let scan_dir = match layout.scan_subdir() {
        Some(sub) => {
            let dir = repo_root.join(sub);
            if !dir.is_dir() {
                return Err(EngineError::MissingScanDir(dir));
            }
            dir
        }
        None => repo_root.to_path_buf(),
    };

    Ok(list_subdirectories(&scan_dir)?
        .iter()
        .map(|name| WorkItem::new(layout, repo_root, name))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_sorted_without_git_and_files() {
        let tmp = tempfile::tempdir().unwrap();
        for d in ["zeta", ".git", "alpha", "Mid"] {
            fs::create_dir(tmp.path().join(d)).unwrap();
        }
        fs::write(tmp.path().join("readme.txt"), "x").unwrap();

        let names = list_subdirectories(tmp.path()).unwrap();
        assert_eq!(names, vec!["Mid", "alpha", "zeta"]);
    }

    #[test]
    fn test_missing_root_is_not_a_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let err = list_subdirectories(&tmp.path().join("absent")).unwrap_err();
        assert!(matches!(err, EngineError::NotADirectory(_)));
    }

    #[test]
    fn test_file_root_is_not_a_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let file = tmp.path().join("file");
        fs::write(&file, "x").unwrap();
        let err = enumerate_work_items(Layout::Tree, &file).unwrap_err();
        assert!(matches!(err, EngineError::NotADirectory(_)));
    }

    #[test]
    fn test_packages_layout_requires_packages_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let err = enumerate_work_items(Layout::Packages, tmp.path()).unwrap_err();
        assert!(matches!(err, EngineError::MissingScanDir(_)));
    }

    #[test]
    fn test_packages_layout_items() {
        let tmp = tempfile::tempdir().unwrap();
        fs::create_dir_all(tmp.path().join("packages").join("b")).unwrap();
        fs::create_dir_all(tmp.path().join("packages").join("a")).unwrap();
        fs::create_dir_all(tmp.path().join("other")).unwrap();

        let items = enumerate_work_items(Layout::Packages, tmp.path()).unwrap();
        let rel: Vec<&str> = items.iter().map(|i| i.rel_path.as_str()).collect();
        assert_eq!(rel, vec!["packages/a", "packages/b"]);
    }
}
