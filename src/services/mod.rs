pub mod context;
pub mod report_service;

pub use context::ServiceContext;
pub use report_service::ReportService;
