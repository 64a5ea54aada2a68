use std::sync::Arc;

use askama::Template;
use axum::{
    Router,
    extract::{Query, State},
    http::StatusCode,
    response::Html,
    routing::get,
};
use chrono::Local;
use serde::Deserialize;

use crate::{reports::ReportId, services::ServiceContext, state::AppState};

#[derive(Debug, Default, Deserialize)]
pub struct ViewQuery {
    pub view: Option<String>,
}

struct ReportSection {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    note: Option<&'static str>,
    columns: Vec<&'static str>,
    result: Option<SectionResult>,
}

/// Rows of the selected report, or the diagnostic that replaced them.
struct SectionResult {
    rows: Vec<Vec<String>>,
    error: Option<String>,
}

impl ReportSection {
    fn new(id: ReportId) -> Self {
        Self {
            id: id.as_str(),
            title: id.title(),
            description: id.description(),
            note: id.note(),
            columns: id.columns().to_vec(),
            result: None,
        }
    }
}

#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate {
    now: String,
    project_name: String,
    sections: Vec<ReportSection>,
}

type HtmlError = (StatusCode, Html<String>);

pub fn router(state: Arc<AppState>) -> Router {
    Router::new().route("/", get(index)).with_state(state)
}

async fn index(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ViewQuery>,
) -> Result<Html<String>, HtmlError> {
    let mut sections: Vec<ReportSection> =
        ReportId::ALL.into_iter().map(ReportSection::new).collect();

    if let Some(report) = selected_report(query.view.as_deref()) {
        let result = run_section(state.as_ref(), report).await;
        if let Some(section) = sections.iter_mut().find(|section| section.id == report.as_str()) {
            section.result = Some(result);
        }
    }

    let rendered = IndexTemplate {
        now: Local::now().to_rfc3339(),
        project_name: project_name(),
        sections,
    }
    .render()
    .map_err(|_| html_error(StatusCode::INTERNAL_SERVER_ERROR, "failed to render index"))?;
    Ok(Html(rendered))
}

// Anything outside the closed set renders the bare page, like an absent `view`.
fn selected_report(view: Option<&str>) -> Option<ReportId> {
    let view = view?.trim();
    if view.is_empty() {
        return None;
    }
    match view.parse::<ReportId>() {
        Ok(report) => Some(report),
        Err(err) => {
            tracing::debug!(error = %err, "ignoring view parameter");
            None
        }
    }
}

async fn run_section(state: &AppState, report: ReportId) -> SectionResult {
    let service = ServiceContext::from_state(state).report();
    match service.run(report).await {
        Ok(rows) => SectionResult {
            rows: rows.cells(),
            error: None,
        },
        Err(err) => SectionResult {
            rows: Vec::new(),
            error: Some(err.to_string()),
        },
    }
}

pub(crate) fn project_name() -> String {
    env!("CARGO_PKG_NAME")
        .split(['_', '-'])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_ascii_uppercase().to_string() + &chars.as_str().to_ascii_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn html_error(status: StatusCode, message: &'static str) -> HtmlError {
    (status, Html(message.to_string()))
}

#[cfg(test)]
mod tests {
    use super::{project_name, selected_report};
    use crate::reports::ReportId;

    #[test]
    fn project_name_is_title_cased() {
        assert_eq!(project_name(), "Sakila Reports");
    }

    #[test]
    fn only_known_views_select_a_report() {
        assert_eq!(selected_report(Some("q2")), Some(ReportId::Q2));
        assert_eq!(selected_report(Some("Q4")), Some(ReportId::Q4));
        assert_eq!(selected_report(Some("")), None);
        assert_eq!(selected_report(Some("q7")), None);
        assert_eq!(selected_report(None), None);
    }
}
