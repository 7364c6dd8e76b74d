use std::collections::HashSet;
use std::path::PathBuf;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use rayon::{ThreadPoolBuilder, prelude::*};

use crate::git::GitRunner;
use crate::scan::find_repos;
use crate::system::{Clock, FsOps, absolutize};
use crate::types::{Options, RepoReport, Report};

use super::repository::inspect_repo;

/// Discover every repository under the configured roots and classify each.
///
/// Never fails: unreadable directories and failed status calls are folded
/// into the report instead of aborting the run.
#[must_use]
pub fn collect_report(
    opts: &Options,
    fs: &dyn FsOps,
    git: &dyn GitRunner,
    clock: &dyn Clock,
) -> Report {
    let roots: Vec<PathBuf> = opts
        .roots
        .iter()
        .map(|root| absolutize(fs.expand_tilde(root)))
        .collect();

    let mut seen = HashSet::<PathBuf>::new();
    let mut repos = Vec::new();
    for root in &roots {
        let found = find_repos(fs, root, &opts.exclude, opts.debug);
        if opts.debug {
            eprintln!(
                "[debug] root={} repos_found={}",
                root.display(),
                found.len()
            );
        }
        repos.extend(found.into_iter().filter(|repo| seen.insert(repo.clone())));
    }
    let repos = drop_nested(repos, &seen);

    let reports = inspect_all(&repos, opts, git);
    Report::new(roots, reports, clock.now())
}

/// Overlapping roots can find a repository inside another one; keep only
/// the outermost, in discovery order.
fn drop_nested(repos: Vec<PathBuf>, found: &HashSet<PathBuf>) -> Vec<PathBuf> {
    repos
        .into_iter()
        .filter(|repo| !repo.ancestors().skip(1).any(|a| found.contains(a)))
        .collect()
}

fn inspect_all(repos: &[PathBuf], opts: &Options, git: &dyn GitRunner) -> Vec<RepoReport> {
    let progress = progress_bar(repos.len(), opts.progress);
    let inspect = |repo: &PathBuf| {
        let report = inspect_repo(repo, git, opts.debug);
        progress.inc(1);
        report
    };

    let thread_count = opts.jobs.unwrap_or_else(num_cpus::get).max(1);
    // Indexed collect keeps discovery order regardless of completion order.
    let reports: Vec<RepoReport> = match ThreadPoolBuilder::new().num_threads(thread_count).build() {
        Ok(pool) => pool.install(|| repos.par_iter().map(inspect).collect()),
        Err(err) => {
            if opts.debug {
                eprintln!("[debug] thread pool unavailable, scanning sequentially: {err}");
            }
            repos.iter().map(inspect).collect()
        }
    };

    progress.finish_and_clear();
    reports
}

fn progress_bar(len: usize, enabled: bool) -> ProgressBar {
    if !enabled || len == 0 {
        return ProgressBar::hidden();
    }
    let progress = ProgressBar::new(len as u64);
    let style =
        ProgressStyle::with_template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar());
    progress.set_style(style);
    progress.enable_steady_tick(Duration::from_millis(100));
    progress.set_message("checking repositories");
    progress
}
