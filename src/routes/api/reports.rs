use std::sync::Arc;

use axum::{
    Router,
    extract::{Path, State},
    routing::get,
};
use serde::Serialize;

use crate::{
    reports::{ReportId, ReportRows},
    response::{ApiResult, JsonApiResponse},
    services::ServiceContext,
    state::AppState,
};

#[derive(Debug, Serialize)]
pub struct ReportInfo {
    pub id: ReportId,
    pub title: &'static str,
    pub description: &'static str,
    pub columns: &'static [&'static str],
}

impl From<ReportId> for ReportInfo {
    fn from(id: ReportId) -> Self {
        Self {
            id,
            title: id.title(),
            description: id.description(),
            columns: id.columns(),
        }
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/reports", get(list_reports))
        .route("/reports/{report_id}", get(run_report))
        .with_state(state)
}

async fn list_reports() -> ApiResult<Vec<ReportInfo>> {
    JsonApiResponse::ok(ReportId::ALL.into_iter().map(ReportInfo::from).collect())
}

async fn run_report(
    State(state): State<Arc<AppState>>,
    Path(report_id): Path<String>,
) -> ApiResult<ReportRows> {
    let report: ReportId = report_id.parse()?;
    let service = ServiceContext::from_state(state.as_ref()).report();
    let rows = service.run(report).await?;
    JsonApiResponse::ok(rows)
}
