use sea_orm::DbErr;
use thiserror::Error;

use crate::reports::ReportId;

/// The single failure mode of the report queries: the database could not run one.
#[derive(Debug, Error)]
#[error("query execution failed for report {report}: {source}")]
pub struct QueryExecutionError {
    pub report: ReportId,
    #[source]
    pub source: DbErr,
}

pub type DaoResult<T> = Result<T, QueryExecutionError>;

impl QueryExecutionError {
    pub fn new(report: ReportId, source: DbErr) -> Self {
        Self { report, source }
    }

    /// The driver's diagnostic, suitable for showing to the user.
    pub fn diagnostic(&self) -> String {
        self.source.to_string()
    }
}
