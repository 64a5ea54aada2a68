use crate::{db::dao::QueryExecutionError, reports::ReportIdError};

#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    Internal(String),
}

impl AppError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    pub fn message(&self) -> &str {
        match self {
            Self::NotFound(message) | Self::Internal(message) => message.as_str(),
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl From<QueryExecutionError> for AppError {
    fn from(err: QueryExecutionError) -> Self {
        AppError::internal(err.to_string())
    }
}

impl From<ReportIdError> for AppError {
    fn from(err: ReportIdError) -> Self {
        AppError::not_found(err.to_string())
    }
}
