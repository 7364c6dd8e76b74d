mod error;
mod refs;
mod runner;
mod status;

pub use error::StatusError;
pub use runner::{DefaultGitRunner, GitRunner};

pub(crate) use refs::current_branch;
pub(crate) use status::fetch_status;
