use tabled::{
    builder::Builder,
    settings::{Alignment, Modify, object::Columns},
};

use crate::types::Report;

use super::{TabStyle, style::finish};

pub(crate) fn render(report: &Report, style: TabStyle) -> String {
    let totals = &report.totals;
    let mut builder = Builder::default();
    builder.push_record(["Repos", "Changed", "Clean", "Unavailable", "Staged", "Modified", "Untracked"]);
    builder.push_record([
        totals.repos.to_string(),
        totals.changed.to_string(),
        totals.clean.to_string(),
        totals.unavailable.to_string(),
        totals.staged.to_string(),
        totals.modified.to_string(),
        totals.untracked.to_string(),
    ]);
    let mut table = builder.build();
    table.with(Modify::new(Columns::new(0..7)).with(Alignment::right()));
    finish(table, style, "Totals")
}
