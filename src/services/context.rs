use sea_orm::DatabaseConnection;

use crate::{services::report_service::ReportService, state::AppState};

#[derive(Clone)]
pub struct ServiceContext {
    db: DatabaseConnection,
}

impl ServiceContext {
    pub fn new(db: &DatabaseConnection) -> Self {
        Self { db: db.clone() }
    }

    pub fn from_state(state: &AppState) -> Self {
        Self::new(&state.db)
    }

    pub fn report(&self) -> ReportService {
        ReportService::new(&self.db)
    }
}
