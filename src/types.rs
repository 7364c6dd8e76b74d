use std::fmt;
use std::path::PathBuf;
use std::time::SystemTime;

use serde::{Serialize, Serializer};

/// One line recovered from a status section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileEntry {
    /// `modified:   src/main.rs` style lines, split on the first colon.
    Change { prefix: String, description: String },
    /// Lines kept verbatim (untracked paths, colon-less change lines).
    Bare(String),
}

impl fmt::Display for FileEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Change {
                prefix,
                description,
            } => write!(f, "{prefix}: {description}"),
            Self::Bare(text) => f.write_str(text),
        }
    }
}

impl Serialize for FileEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StatusRecord {
    pub staged: Vec<FileEntry>,
    pub modified: Vec<FileEntry>,
    pub untracked: Vec<FileEntry>,
}

impl StatusRecord {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.staged.is_empty() && self.modified.is_empty() && self.untracked.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoState {
    Clean,
    Changed(StatusRecord),
    /// `git status` could not run or exited non-zero.
    Unavailable { reason: String },
}

#[derive(Debug, Clone)]
pub struct RepoReport {
    pub name: String,
    pub path: PathBuf,
    pub branch: Option<String>,
    pub state: RepoState,
}

impl RepoReport {
    #[must_use]
    pub fn record(&self) -> Option<&StatusRecord> {
        match &self.state {
            RepoState::Changed(record) => Some(record),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AggregateTotals {
    pub staged: usize,
    pub modified: usize,
    pub untracked: usize,
    pub repos: usize,
    pub changed: usize,
    pub clean: usize,
    pub unavailable: usize,
}

impl AggregateTotals {
    #[must_use]
    pub fn from_repos(repos: &[RepoReport]) -> Self {
        let mut totals = Self {
            repos: repos.len(),
            ..Self::default()
        };
        for repo in repos {
            match &repo.state {
                RepoState::Clean => totals.clean += 1,
                RepoState::Unavailable { .. } => totals.unavailable += 1,
                RepoState::Changed(record) => {
                    totals.changed += 1;
                    totals.staged += record.staged.len();
                    totals.modified += record.modified.len();
                    totals.untracked += record.untracked.len();
                }
            }
        }
        totals
    }
}

#[derive(Debug, Clone)]
pub struct Report {
    pub roots: Vec<PathBuf>,
    /// Every discovered repository, in discovery order.
    pub repos: Vec<RepoReport>,
    pub totals: AggregateTotals,
    pub generated_at: SystemTime,
}

impl Report {
    #[must_use]
    pub fn new(roots: Vec<PathBuf>, repos: Vec<RepoReport>, generated_at: SystemTime) -> Self {
        let totals = AggregateTotals::from_repos(&repos);
        Self {
            roots,
            repos,
            totals,
            generated_at,
        }
    }

    #[must_use = "iterators are lazy"]
    pub fn changed(&self) -> impl Iterator<Item = (&RepoReport, &StatusRecord)> {
        self.repos
            .iter()
            .filter_map(|repo| repo.record().map(|record| (repo, record)))
    }

    #[must_use = "iterators are lazy"]
    pub fn unavailable(&self) -> impl Iterator<Item = (&RepoReport, &str)> {
        self.repos.iter().filter_map(|repo| match &repo.state {
            RepoState::Unavailable { reason } => Some((repo, reason.as_str())),
            _ => None,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct Options {
    pub roots: Vec<PathBuf>,
    /// Directory names never descended into.
    pub exclude: Vec<String>,
    /// Worker count for status collection; `None` uses every core.
    pub jobs: Option<usize>,
    pub progress: bool,
    pub debug: bool,
}
