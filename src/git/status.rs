use std::path::Path;

use super::{GitRunner, StatusError};

const STATUS_ARGS: [&str; 2] = ["--no-optional-locks", "status"];

/// Raw `git status` text for `repo`.
///
/// # Errors
/// Returns [`StatusError::Spawn`] when git cannot be launched and
/// [`StatusError::Exit`] when it exits unsuccessfully.
pub(crate) fn fetch_status(repo: &Path, git: &dyn GitRunner) -> Result<String, StatusError> {
    let out = git
        .run_git(repo, &STATUS_ARGS)
        .map_err(|source| StatusError::Spawn { source })?;
    if !out.status.success() {
        return Err(StatusError::Exit {
            status: out.status,
            stderr: String::from_utf8_lossy(&out.stderr).trim().to_string(),
        });
    }
    Ok(String::from_utf8_lossy(&out.stdout).into_owned())
}

#[cfg(all(test, unix))]
mod tests {
    use std::io;
    use std::os::unix::process::ExitStatusExt;
    use std::process::{ExitStatus, Output};

    use super::*;

    struct Canned {
        code: i32,
        stdout: &'static str,
        stderr: &'static str,
    }

    impl GitRunner for Canned {
        fn run_git(&self, _repo: &Path, args: &[&str]) -> io::Result<Output> {
            assert_eq!(args, STATUS_ARGS);
            Ok(Output {
                status: ExitStatus::from_raw(self.code << 8),
                stdout: self.stdout.as_bytes().to_vec(),
                stderr: self.stderr.as_bytes().to_vec(),
            })
        }
    }

    struct Missing;

    impl GitRunner for Missing {
        fn run_git(&self, _repo: &Path, _args: &[&str]) -> io::Result<Output> {
            Err(io::Error::new(io::ErrorKind::NotFound, "git not found"))
        }
    }

    #[test]
    fn returns_stdout_on_success() {
        let git = Canned {
            code: 0,
            stdout: "On branch main\n",
            stderr: "",
        };
        let text = fetch_status(Path::new("/r"), &git).expect("status");
        assert_eq!(text, "On branch main\n");
    }

    #[test]
    fn non_zero_exit_is_an_error_with_stderr() {
        let git = Canned {
            code: 128,
            stdout: "",
            stderr: "fatal: not a git repository\n",
        };
        let err = fetch_status(Path::new("/r"), &git).expect_err("failure");
        assert!(matches!(err, StatusError::Exit { .. }));
        assert!(err.to_string().ends_with("fatal: not a git repository"));
    }

    #[test]
    fn spawn_failure_is_an_error() {
        let err = fetch_status(Path::new("/r"), &Missing).expect_err("failure");
        assert!(matches!(err, StatusError::Spawn { .. }));
        assert!(err.to_string().contains("git not found"));
    }
}
