use serde::Serialize;

use crate::types::{AggregateTotals, RepoReport, RepoState, Report, StatusRecord};

use super::local_time;

#[derive(Serialize)]
struct JsonReport<'a> {
    generated_at: String,
    roots: Vec<String>,
    totals: &'a AggregateTotals,
    repos: Vec<JsonRepo<'a>>,
}

#[derive(Serialize)]
struct JsonRepo<'a> {
    name: &'a str,
    path: String,
    branch: Option<&'a str>,
    state: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<&'a str>,
    #[serde(flatten)]
    changes: Option<&'a StatusRecord>,
}

impl<'a> From<&'a RepoReport> for JsonRepo<'a> {
    fn from(repo: &'a RepoReport) -> Self {
        let (state, reason, changes) = match &repo.state {
            RepoState::Clean => ("clean", None, None),
            RepoState::Changed(record) => ("changed", None, Some(record)),
            RepoState::Unavailable { reason } => ("unavailable", Some(reason.as_str()), None),
        };
        Self {
            name: &repo.name,
            path: repo.path.display().to_string(),
            branch: repo.branch.as_deref(),
            state,
            reason,
            changes,
        }
    }
}

/// Serialize the whole report, every repository included.
///
/// # Errors
/// Returns an error if serialization fails.
pub fn to_json(report: &Report) -> Result<String, serde_json::Error> {
    let view = JsonReport {
        generated_at: local_time(report.generated_at).to_rfc3339(),
        roots: report
            .roots
            .iter()
            .map(|root| root.display().to_string())
            .collect(),
        totals: &report.totals,
        repos: report.repos.iter().map(JsonRepo::from).collect(),
    };
    serde_json::to_string_pretty(&view)
}
