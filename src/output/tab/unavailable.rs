use tabled::builder::Builder;

use crate::types::Report;

use super::{TabStyle, style::finish};

pub(crate) fn render(report: &Report, style: TabStyle) -> String {
    let mut builder = Builder::default();
    builder.push_record(["Repo", "Reason", "Path"]);
    for (repo, reason) in report.unavailable() {
        builder.push_record([
            repo.name.clone(),
            reason.to_string(),
            repo.path.display().to_string(),
        ]);
    }
    finish(builder.build(), style, "Status Unavailable")
}
