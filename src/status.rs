//! Classification of `git status` long-format output.
//!
//! The report is a sequence of loosely delimited sections (staged, not
//! staged, untracked) interleaved with hint lines. A single pass folds an
//! explicit [`Section`] state over the lines and files each indented entry
//! line into the matching bucket of a [`StatusRecord`].

use crate::types::{FileEntry, StatusRecord};

const STAGED_MARKER: &str = "Changes to be committed:";
const MODIFIED_MARKER: &str = "Changes not staged for commit:";
const UNTRACKED_MARKER: &str = "Untracked files:";

// Matched against the lowercased line.
const HINT_PATTERNS: [&str; 3] = [
    "use \"git",
    "include in what will be committed",
    "no changes added",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    None,
    Staged,
    Modified,
    Untracked,
}

/// Parse raw status text into a record.
///
/// Returns `None` when no bucket received an entry, which callers treat as
/// a clean working copy. Never fails: unrecognised input yields `None` or a
/// partial record.
#[must_use]
pub fn parse_status(text: &str) -> Option<StatusRecord> {
    let mut record = StatusRecord::default();
    text.lines()
        .fold(Section::None, |section, line| scan_line(section, line, &mut record));
    if record.is_empty() { None } else { Some(record) }
}

fn scan_line(section: Section, line: &str, record: &mut StatusRecord) -> Section {
    if let Some(opened) = section_start(line) {
        return opened;
    }
    if section == Section::None {
        return section;
    }

    let trimmed = line.trim();
    if !trimmed.is_empty() && !is_indented(line) {
        return if is_hint(line) { section } else { Section::None };
    }
    if trimmed.is_empty() || trimmed.starts_with('(') {
        return section;
    }

    match section {
        Section::Staged => record.staged.push(change_entry(trimmed)),
        Section::Modified => record.modified.push(change_entry(trimmed)),
        Section::Untracked => record.untracked.push(FileEntry::Bare(trimmed.to_string())),
        Section::None => {}
    }
    section
}

fn section_start(line: &str) -> Option<Section> {
    if line.contains(STAGED_MARKER) {
        Some(Section::Staged)
    } else if line.contains(MODIFIED_MARKER) {
        Some(Section::Modified)
    } else if line.contains(UNTRACKED_MARKER) {
        Some(Section::Untracked)
    } else {
        None
    }
}

fn is_indented(line: &str) -> bool {
    line.starts_with('\t') || line.starts_with("  ")
}

fn is_hint(line: &str) -> bool {
    let lower = line.to_lowercase();
    HINT_PATTERNS.iter().any(|pattern| lower.contains(pattern))
}

fn change_entry(trimmed: &str) -> FileEntry {
    match trimmed.split_once(':') {
        Some((prefix, description)) => FileEntry::Change {
            prefix: prefix.trim().to_string(),
            description: description.trim().to_string(),
        },
        None => FileEntry::Bare(trimmed.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(entries: &[FileEntry]) -> Vec<String> {
        entries.iter().map(ToString::to_string).collect()
    }

    const FULL_STATUS: &str = "On branch main
Your branch is up to date with 'origin/main'.

Changes to be committed:
  (use \"git restore --staged <file>...\" to unstage)
\tnew file:   src/lib.rs
\tmodified:   Cargo.toml

Changes not staged for commit:
  (use \"git add <file>...\" to update what will be committed)
  (use \"git restore <file>...\" to discard changes in working directory)
\tmodified:   Cargo.toml
\tdeleted:    old.txt

Untracked files:
  (use \"git add <file>...\" to include in what will be committed)
\tnotes.md
\tscratch/

";

    #[test]
    fn classifies_every_section_of_a_full_report() {
        let record = parse_status(FULL_STATUS).expect("changes");
        assert_eq!(
            rendered(&record.staged),
            ["new file: src/lib.rs", "modified: Cargo.toml"]
        );
        assert_eq!(
            rendered(&record.modified),
            ["modified: Cargo.toml", "deleted: old.txt"]
        );
        assert_eq!(rendered(&record.untracked), ["notes.md", "scratch/"]);
    }

    #[test]
    fn clean_report_yields_none() {
        let text = "On branch main\nYour branch is up to date with 'origin/main'.\n\nnothing to commit, working tree clean\n";
        assert_eq!(parse_status(text), None);
        assert_eq!(parse_status(""), None);
    }

    #[test]
    fn header_without_entries_yields_none() {
        let text = "Untracked files:\n  (use \"git add <file>...\" to include in what will be committed)\n\n";
        assert_eq!(parse_status(text), None);
    }

    #[test]
    fn splits_on_first_colon_and_keeps_colonless_lines() {
        let text = "Changes not staged for commit:\n\tmodified:   src/main.go\n\trenamed file without colon\n\tmodified:   dir/a:b.txt\n";
        let record = parse_status(text).expect("changes");
        assert_eq!(
            record.modified,
            vec![
                FileEntry::Change {
                    prefix: "modified".to_string(),
                    description: "src/main.go".to_string(),
                },
                FileEntry::Bare("renamed file without colon".to_string()),
                FileEntry::Change {
                    prefix: "modified".to_string(),
                    description: "dir/a:b.txt".to_string(),
                },
            ]
        );
    }

    #[test]
    fn blank_line_and_hint_do_not_merge_sections() {
        let text = "Changes not staged for commit:\n  (use \"git add <file>...\" to update what will be committed)\n\tmodified:   a.txt\n\nUntracked files:\n\tb.txt\n";
        let record = parse_status(text).expect("changes");
        assert_eq!(rendered(&record.modified), ["modified: a.txt"]);
        assert_eq!(rendered(&record.untracked), ["b.txt"]);
        assert!(record.staged.is_empty());
    }

    #[test]
    fn non_indented_line_closes_the_section() {
        let text = "Untracked files:\n\tkept.txt\nSomething else entirely\n\tlost.txt\n";
        let record = parse_status(text).expect("changes");
        assert_eq!(rendered(&record.untracked), ["kept.txt"]);
    }

    #[test]
    fn new_header_reopens_after_boundary() {
        let text = "Untracked files:\n\tone.txt\nboundary\n\tignored.txt\nUntracked files:\n\ttwo.txt\n";
        let record = parse_status(text).expect("changes");
        assert_eq!(rendered(&record.untracked), ["one.txt", "two.txt"]);
    }

    #[test]
    fn unindented_hint_lines_are_swallowed() {
        let text = "Changes not staged for commit:\n\tmodified:   a.txt\nno changes added to commit (use \"git add\" and/or \"git commit -a\")\n\tmodified:   b.txt\n";
        let record = parse_status(text).expect("changes");
        assert_eq!(
            rendered(&record.modified),
            ["modified: a.txt", "modified: b.txt"]
        );
    }

    #[test]
    fn hint_match_ignores_case() {
        let text = "Untracked files:\nUSE \"GIT ADD\" TO TRACK\n\tnew.txt\n";
        let record = parse_status(text).expect("changes");
        assert_eq!(rendered(&record.untracked), ["new.txt"]);
    }

    #[test]
    fn single_space_indent_is_a_boundary() {
        let text = "Untracked files:\n first.txt\n\tsecond.txt\n";
        assert_eq!(parse_status(text), None);
    }

    #[test]
    fn two_space_indent_counts_as_entry() {
        let text = "Changes to be committed:\n  new file:   spaced.rs\n";
        let record = parse_status(text).expect("changes");
        assert_eq!(rendered(&record.staged), ["new file: spaced.rs"]);
    }

    #[test]
    fn marker_matches_inside_decorated_lines() {
        let text = "## Changes to be committed: ##\n\tnew file:   x\n";
        let record = parse_status(text).expect("changes");
        assert_eq!(rendered(&record.staged), ["new file: x"]);
    }

    #[test]
    fn marker_match_is_case_sensitive() {
        let text = "untracked files:\n\tnope.txt\n";
        assert_eq!(parse_status(text), None);
    }

    #[test]
    fn entries_outside_any_section_are_ignored() {
        let text = "\tmodified:   stray.txt\n\tstray.txt\n";
        assert_eq!(parse_status(text), None);
    }

    #[test]
    fn duplicates_are_kept_in_source_order() {
        let text = "Untracked files:\n\tdup.txt\n\tdup.txt\n";
        let record = parse_status(text).expect("changes");
        assert_eq!(rendered(&record.untracked), ["dup.txt", "dup.txt"]);
    }

    #[test]
    fn parsing_is_idempotent() {
        assert_eq!(parse_status(FULL_STATUS), parse_status(FULL_STATUS));
    }

    #[test]
    fn tolerates_crlf_and_arbitrary_text() {
        let text = "Untracked files:\r\n\tcrlf.txt\r\n";
        let record = parse_status(text).expect("changes");
        assert_eq!(rendered(&record.untracked), ["crlf.txt"]);

        for junk in [
            "\u{0}\u{1}",
            ":::",
            "(\n(\n",
            "\t\t\t",
            "Changes to be committed:",
            "Untracked files:\n\t:\n",
            "Changes to be committed:\n\t  \n\t(\n",
        ] {
            assert!(
                parse_status(junk).is_none_or(|record| !record.is_empty()),
                "empty record for {junk:?}"
            );
        }
        let record = parse_status("Untracked files:\n\t:\n").expect("changes");
        assert_eq!(rendered(&record.untracked), [":"]);
    }
}
