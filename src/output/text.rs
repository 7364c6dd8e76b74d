use crate::types::{FileEntry, Report};

use super::local_time;

const RULE: &str = "================================================================================";

/// Plain listing: summary counts, one block per changed repository,
/// unavailable repositories, then grand totals.
#[must_use]
pub fn format_text(report: &Report) -> String {
    let totals = &report.totals;
    let mut lines: Vec<String> = report
        .roots
        .iter()
        .map(|root| format!("Scanned: {}", root.display()))
        .collect();
    lines.push(RULE.to_string());
    lines.push(format!("Found {} git repositories", totals.repos));
    lines.push(format!(
        "{} with changes, {} clean, {} unavailable",
        totals.changed, totals.clean, totals.unavailable
    ));
    lines.push(String::new());

    if totals.changed > 0 {
        lines.extend(changed_lines(report));
    }
    if totals.unavailable > 0 {
        lines.extend(unavailable_lines(report));
    }

    if totals.changed > 0 {
        lines.extend([
            RULE.to_string(),
            "Totals:".to_string(),
            format!("  Staged: {} files", totals.staged),
            format!("  Modified: {} files", totals.modified),
            format!("  Untracked: {} files", totals.untracked),
            RULE.to_string(),
        ]);
    } else if totals.unavailable == 0 {
        lines.push("All git repositories are clean (no changes)".to_string());
    } else {
        lines.push(format!(
            "No changes found; {} repositories could not be checked",
            totals.unavailable
        ));
    }

    lines.push(format!(
        "Generated at {}",
        local_time(report.generated_at).format("%Y-%m-%d %H:%M:%S")
    ));
    lines.join("\n")
}

fn changed_lines(report: &Report) -> Vec<String> {
    let mut lines = vec![
        RULE.to_string(),
        "Repositories with changes:".to_string(),
        RULE.to_string(),
        String::new(),
    ];
    for (repo, record) in report.changed() {
        lines.push(match &repo.branch {
            Some(branch) => format!("[{}] on {branch}", repo.name),
            None => format!("[{}]", repo.name),
        });
        lines.push(format!("   Path: {}", repo.path.display()));
        lines.extend(bucket_lines("Staged (Changes to be committed)", &record.staged));
        lines.extend(bucket_lines(
            "Modified (Changes not staged for commit)",
            &record.modified,
        ));
        lines.extend(bucket_lines("Untracked (Untracked files)", &record.untracked));
        lines.push(String::new());
    }
    lines
}

fn bucket_lines(label: &str, entries: &[FileEntry]) -> Vec<String> {
    if entries.is_empty() {
        return Vec::new();
    }
    std::iter::once(format!("   {label}: {} files", entries.len()))
        .chain(entries.iter().map(|entry| format!("      - {entry}")))
        .collect()
}

fn unavailable_lines(report: &Report) -> Vec<String> {
    let mut lines = vec![RULE.to_string(), "Status unavailable:".to_string()];
    lines.extend(
        report
            .unavailable()
            .map(|(repo, reason)| format!("  - {} ({}): {reason}", repo.name, repo.path.display())),
    );
    lines.push(String::new());
    lines
}
