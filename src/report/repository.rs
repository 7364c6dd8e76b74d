use std::path::Path;

use crate::git::{GitRunner, current_branch, fetch_status};
use crate::status::parse_status;
use crate::types::{RepoReport, RepoState};

/// Invoke and classify one repository. Failures become
/// [`RepoState::Unavailable`] rather than errors.
pub(crate) fn inspect_repo(repo: &Path, git: &dyn GitRunner, debug: bool) -> RepoReport {
    let state = match fetch_status(repo, git) {
        Ok(text) => parse_status(&text).map_or(RepoState::Clean, RepoState::Changed),
        Err(err) => {
            if debug {
                eprintln!("[debug] status unavailable: {}: {err}", repo.display());
            }
            RepoState::Unavailable {
                reason: err.to_string(),
            }
        }
    };
    let branch = match state {
        RepoState::Unavailable { .. } => None,
        _ => current_branch(repo, git),
    };
    RepoReport {
        name: repo_display_name(repo),
        path: repo.to_path_buf(),
        branch,
        state,
    }
}

pub(crate) fn repo_display_name(path: &Path) -> String {
    path.file_name()
        .and_then(|s| s.to_str())
        .map(std::string::ToString::to_string)
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| path.display().to_string())
}
