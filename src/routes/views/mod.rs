use std::sync::Arc;

use axum::Router;

use crate::state::AppState;

pub mod reports;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new().merge(reports::router(state))
}
