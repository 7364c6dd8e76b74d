use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use crate::system::FsOps;

/// Repository roots beneath `root`, in walk order.
///
/// A directory holding a repository marker is reported and not descended
/// into, so no result is nested inside another. Hidden and excluded child
/// directories are skipped; unreadable ones are skipped silently.
#[must_use]
pub fn find_repos(fs: &dyn FsOps, root: &Path, exclude: &[String], debug: bool) -> Vec<PathBuf> {
    let mut repos = Vec::new();
    if !root.exists() {
        if debug {
            eprintln!("[debug] root missing: {}", root.display());
        }
        return repos;
    }

    let mut walker = WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter();
    while let Some(next) = walker.next() {
        let entry = match next {
            Ok(entry) => entry,
            Err(err) => {
                if debug {
                    eprintln!("[debug] skipped: {err}");
                }
                continue;
            }
        };
        if !entry.file_type().is_dir() {
            continue;
        }
        if entry.depth() > 0 && is_skipped(&entry, exclude) {
            walker.skip_current_dir();
            continue;
        }
        if fs.is_repo(entry.path()) {
            if debug {
                eprintln!("[debug] repo: {}", entry.path().display());
            }
            repos.push(entry.into_path());
            walker.skip_current_dir();
        }
    }
    repos
}

fn is_skipped(entry: &DirEntry, exclude: &[String]) -> bool {
    let name = entry.file_name().to_string_lossy();
    name.starts_with('.') || exclude.iter().any(|e| *e == name)
}
