use std::env;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

pub trait FsOps {
    fn is_repo(&self, dir: &Path) -> bool;
    fn expand_tilde(&self, p: &Path) -> PathBuf;
}

pub struct DefaultFsOps;
impl FsOps for DefaultFsOps {
    fn is_repo(&self, dir: &Path) -> bool {
        dir.join(".git").is_dir()
    }
    fn expand_tilde(&self, p: &Path) -> PathBuf {
        if let Some(home) = env::var_os("HOME") {
            let home = PathBuf::from(home);
            if p.starts_with("~")
                && let Ok(rest) = p.strip_prefix("~")
            {
                return home.join(rest);
            }
        }
        p.to_path_buf()
    }
}

pub trait Clock {
    fn now(&self) -> SystemTime;
}

pub struct DefaultClock;
impl Clock for DefaultClock {
    fn now(&self) -> SystemTime {
        SystemTime::now()
    }
}

/// Parent of the directory holding the running executable.
///
/// Falls back to the current directory, then to `.`.
#[must_use]
pub fn default_root() -> PathBuf {
    env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().and_then(Path::parent).map(Path::to_path_buf))
        .or_else(|| env::current_dir().ok())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Make `path` absolute against the current directory without resolving
/// symlinks.
pub(crate) fn absolutize(path: PathBuf) -> PathBuf {
    if path.is_absolute() {
        return path;
    }
    match env::current_dir() {
        Ok(cwd) => cwd.join(path),
        Err(_) => path,
    }
}
