//! Copies one top-level item, file or directory tree.
//!
//! Failures never bubble up to the caller: everything that could not be
//! copied comes back as a [`Skip`] while the rest of the item still goes
//! through.

use derive_more::Display;
use globset::GlobSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};
use walkdir::{DirEntry, WalkDir};

/// Why a path did not make it into the backup.
#[derive(Debug, Display)]
pub enum SkipReason {
    #[display("source does not exist")]
    MissingSource,
    #[display("{_0}")]
    Io(io::Error),
    #[display("{_0}")]
    Walk(walkdir::Error),
}

/// One path left out of an otherwise completed copy.
#[derive(Debug)]
pub struct Skip {
    pub path: PathBuf,
    pub reason: SkipReason,
}

impl Skip {
    fn missing<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            path: path.into(),
            reason: SkipReason::MissingSource,
        }
    }

    fn io<P: Into<PathBuf>>(path: P, e: io::Error) -> Self {
        Self {
            path: path.into(),
            reason: SkipReason::Io(e),
        }
    }
}

/// What a single copy operation did. No skips means the whole item made
/// it over.
#[derive(Debug, Default)]
pub struct CopyOutcome {
    pub copied: usize,
    pub skips: Vec<Skip>,
}

/// Copies `src` to `dst`, recursively when `src` is a directory.
///
/// Directory copies create `dst` and any intermediate directories, and
/// merge into a destination that already exists. Entries whose name
/// matches `excludes` are pruned at any depth, subtrees included.
/// A missing `src` is a skip, not an error.
pub fn copy_item(src: &Path, dst: &Path, excludes: &GlobSet) -> CopyOutcome {
    let mut outcome = CopyOutcome::default();
    if src.is_dir() {
        copy_tree(src, dst, excludes, &mut outcome);
    } else {
        copy_file(src, dst, &mut outcome);
    }

    outcome
}

fn copy_file(src: &Path, dst: &Path, outcome: &mut CopyOutcome) {
    trace!("copying file {:?} -> {:?}", src, dst);
    match fs::copy(src, dst) {
        Ok(_) => outcome.copied += 1,
        Err(e) if e.kind() == io::ErrorKind::NotFound => outcome.skips.push(Skip::missing(src)),
        Err(e) => outcome.skips.push(Skip::io(src, e)),
    }
}

fn copy_tree(src: &Path, dst: &Path, excludes: &GlobSet, outcome: &mut CopyOutcome) {
    debug!("copying tree {:?} -> {:?}", src, dst);
    let walker = WalkDir::new(src)
        .follow_links(true)
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_excluded(e, excludes));

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                let path = e
                    .path()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| src.to_path_buf());
                outcome.skips.push(Skip {
                    path,
                    reason: SkipReason::Walk(e),
                });
                continue;
            }
        };

        let target = match entry.path().strip_prefix(src) {
            Ok(rel) => dst.join(rel),
            Err(e) => {
                outcome.skips.push(Skip::io(entry.path(), io::Error::other(e)));
                continue;
            }
        };

        if entry.file_type().is_dir() {
            if let Err(e) = fs::create_dir_all(&target) {
                outcome.skips.push(Skip::io(entry.path(), e));
            }
        } else if let Err(e) = fs::copy(entry.path(), &target) {
            outcome.skips.push(Skip::io(entry.path(), e));
        } else {
            outcome.copied += 1;
        }
    }
}

fn is_excluded(entry: &DirEntry, excludes: &GlobSet) -> bool {
    excludes.is_match(Path::new(entry.file_name()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use globset::{GlobBuilder, GlobSetBuilder};
    use tempfile::TempDir;

    fn lock_excludes() -> GlobSet {
        let mut builder = GlobSetBuilder::new();
        builder.add(
            GlobBuilder::new("lock")
                .literal_separator(true)
                .build()
                .unwrap(),
        );
        builder.build().unwrap()
    }

    #[test]
    fn test_single_file_copy() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("notes.txt");
        let dst = dir.path().join("notes-copy.txt");
        fs::write(&src, "remember the milk").unwrap();

        let outcome = copy_item(&src, &dst, &lock_excludes());

        assert_eq!(outcome.copied, 1);
        assert!(outcome.skips.is_empty());
        assert_eq!(fs::read_to_string(dst).unwrap(), "remember the milk");
    }

    #[test]
    fn test_missing_file_is_a_skip() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("vanished");
        let dst = dir.path().join("vanished-copy");

        let outcome = copy_item(&src, &dst, &lock_excludes());

        assert_eq!(outcome.copied, 0);
        assert_eq!(outcome.skips.len(), 1);
        assert_eq!(outcome.skips[0].path, src);
        assert!(matches!(outcome.skips[0].reason, SkipReason::MissingSource));
        assert!(!dst.exists());
    }

    #[test]
    fn test_tree_copy_recurses() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("src");
        let dst = dir.path().join("dst");
        fs::create_dir_all(src.join("a/b")).unwrap();
        fs::write(src.join("top.txt"), "1").unwrap();
        fs::write(src.join("a/mid.txt"), "2").unwrap();
        fs::write(src.join("a/b/deep.txt"), "3").unwrap();

        let outcome = copy_item(&src, &dst, &lock_excludes());

        assert!(outcome.skips.is_empty());
        assert_eq!(outcome.copied, 3);
        assert_eq!(fs::read_to_string(dst.join("top.txt")).unwrap(), "1");
        assert_eq!(fs::read_to_string(dst.join("a/mid.txt")).unwrap(), "2");
        assert_eq!(fs::read_to_string(dst.join("a/b/deep.txt")).unwrap(), "3");
    }

    #[test]
    fn test_lock_entries_pruned_at_any_depth() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("src");
        let dst = dir.path().join("dst");
        fs::create_dir_all(src.join("sub/lock")).unwrap();
        fs::write(src.join("lock"), "top level lock file").unwrap();
        fs::write(src.join("keep.txt"), "kept").unwrap();
        fs::write(src.join("sub/lock/inner.txt"), "buried").unwrap();
        fs::write(src.join("sub/keep.txt"), "also kept").unwrap();

        let outcome = copy_item(&src, &dst, &lock_excludes());

        assert!(outcome.skips.is_empty());
        assert!(dst.join("keep.txt").is_file());
        assert!(dst.join("sub/keep.txt").is_file());
        assert!(!dst.join("lock").exists());
        assert!(!dst.join("sub/lock").exists());
    }

    #[test]
    fn test_tree_copy_merges_into_existing_destination() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("src");
        let dst = dir.path().join("dst");
        fs::create_dir_all(&src).unwrap();
        fs::create_dir_all(&dst).unwrap();
        fs::write(src.join("new.txt"), "new").unwrap();
        fs::write(dst.join("old.txt"), "old").unwrap();

        let outcome = copy_item(&src, &dst, &lock_excludes());

        assert!(outcome.skips.is_empty());
        assert_eq!(fs::read_to_string(dst.join("new.txt")).unwrap(), "new");
        assert_eq!(fs::read_to_string(dst.join("old.txt")).unwrap(), "old");
    }

    #[cfg(unix)]
    #[test]
    fn test_broken_entry_skipped_siblings_survive() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("src");
        let dst = dir.path().join("dst");
        fs::create_dir_all(&src).unwrap();
        fs::write(src.join("fine.txt"), "fine").unwrap();
        std::os::unix::fs::symlink(dir.path().join("gone"), src.join("dangling")).unwrap();

        let outcome = copy_item(&src, &dst, &lock_excludes());

        assert_eq!(outcome.skips.len(), 1);
        assert_eq!(fs::read_to_string(dst.join("fine.txt")).unwrap(), "fine");
        assert!(!dst.join("dangling").exists());
    }
}
