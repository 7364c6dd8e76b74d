use tabled::{
    builder::Builder,
    settings::{Alignment, Modify, object::Columns},
};

use crate::types::Report;

use super::{
    TabStyle,
    style::{empty_section, finish},
};

const TITLE: &str = "Repositories With Changes";

pub(crate) fn render(report: &Report, style: TabStyle) -> String {
    if report.totals.changed == 0 {
        return empty_section(style, TITLE);
    }

    let mut builder = Builder::default();
    builder.push_record(["Repo", "Branch", "Staged", "Modified", "Untracked", "Path"]);
    for (repo, record) in report.changed() {
        builder.push_record([
            repo.name.clone(),
            repo.branch.clone().unwrap_or_else(|| "HEAD".to_string()),
            record.staged.len().to_string(),
            record.modified.len().to_string(),
            record.untracked.len().to_string(),
            repo.path.display().to_string(),
        ]);
    }

    let mut table = builder.build();
    // Columns: 0 Repo, 1 Branch, 2 Staged, 3 Modified, 4 Untracked, 5 Path
    table.with(Modify::new(Columns::new(2..5)).with(Alignment::right()));
    finish(table, style, TITLE)
}
