use std::process::ExitStatus;

/// Why a repository's status could not be collected.
#[derive(Debug)]
pub enum StatusError {
    Spawn {
        source: std::io::Error,
    },
    Exit {
        status: ExitStatus,
        stderr: String,
    },
}

impl std::fmt::Display for StatusError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Spawn { source } => write!(f, "failed to launch git: {source}"),
            Self::Exit { status, stderr } => {
                if stderr.is_empty() {
                    write!(f, "git status failed with {status}")
                } else {
                    write!(f, "git status failed with {status}: {stderr}")
                }
            }
        }
    }
}

impl std::error::Error for StatusError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Spawn { source } => Some(source),
            Self::Exit { .. } => None,
        }
    }
}
