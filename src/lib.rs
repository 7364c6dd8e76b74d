#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic)]

mod config;
mod git;
mod report;
mod scan;
mod status;
mod system;
mod types;
pub mod output;

pub use config::{Config, ConfigError, load_config};
pub use git::{DefaultGitRunner, GitRunner, StatusError};
pub use report::collect_report;
pub use scan::find_repos;
pub use status::parse_status;
pub use system::{Clock, DefaultClock, DefaultFsOps, FsOps, default_root};
pub use types::{
    AggregateTotals, FileEntry, Options, RepoReport, RepoState, Report, StatusRecord,
};
