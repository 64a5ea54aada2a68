mod dialect;
pub mod error;
pub mod report_dao;

pub use error::{DaoResult, QueryExecutionError};
pub use report_dao::{ReportDao, execute};
