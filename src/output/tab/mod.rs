use crate::types::Report;

mod changes;
mod style;
mod totals;
mod unavailable;

pub use style::TabStyle;

/// Render the report as tables: changed repositories, unavailable ones
/// (only when present), then totals.
#[must_use]
pub fn format_tab(report: &Report, style: TabStyle) -> String {
    let mut sections = Vec::with_capacity(3);
    sections.push(changes::render(report, style));
    if report.totals.unavailable > 0 {
        sections.push(unavailable::render(report, style));
    }
    sections.push(totals::render(report, style));
    sections.join("\n")
}
