use std::time::Instant;

use sea_orm::{ConnectionTrait, DatabaseConnection, DbBackend, DbErr, TransactionTrait};
use tracing::{info, warn};

use crate::{
    db::dao::{DaoResult, QueryExecutionError, report_dao},
    reports::{ReportId, ReportRows},
};

#[derive(Clone)]
pub struct ReportService {
    db: DatabaseConnection,
}

impl ReportService {
    pub fn new(db: &DatabaseConnection) -> Self {
        Self { db: db.clone() }
    }

    /// Runs one report inside a read-only transaction held for the duration of the query.
    /// Any early return drops the transaction, which rolls it back and frees the connection.
    pub async fn run(&self, report: ReportId) -> DaoResult<ReportRows> {
        let started = Instant::now();
        let result = self.run_scoped(report).await;
        let elapsed_ms = started.elapsed().as_millis() as u64;

        match &result {
            Ok(rows) => info!(report = %report, rows = rows.len(), elapsed_ms, "report executed"),
            Err(err) => warn!(report = %report, elapsed_ms, error = %err, "report failed"),
        }
        result
    }

    async fn run_scoped(&self, report: ReportId) -> DaoResult<ReportRows> {
        let failed = |source: DbErr| QueryExecutionError::new(report, source);

        let txn = self.db.begin().await.map_err(failed)?;
        if txn.get_database_backend() == DbBackend::Postgres {
            txn.execute_unprepared("SET TRANSACTION READ ONLY")
                .await
                .map_err(failed)?;
        }

        let rows = report_dao::execute(report, &txn).await?;
        txn.commit().await.map_err(failed)?;
        Ok(rows)
    }

    /// Round-trips `SELECT 1` through the pool.
    pub async fn health(&self) -> Result<(), DbErr> {
        self.db.execute_unprepared("SELECT 1").await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use sea_orm::{DatabaseBackend, DbErr, MockDatabase, MockExecResult, Value};

    use super::ReportService;
    use crate::reports::{ReportId, ReportRows};

    fn read_only_ack() -> MockExecResult {
        MockExecResult {
            last_insert_id: 0,
            rows_affected: 0,
        }
    }

    #[tokio::test]
    async fn runs_report_inside_a_transaction() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([read_only_ack()])
            .append_query_results([vec![BTreeMap::from([
                ("customer_id", Value::from(130i32)),
                ("customer_name", Value::from("CHARLOTTE HUNTER")),
            ])]])
            .into_connection();
        let service = ReportService::new(&db);

        let rows = service.run(ReportId::Q4).await.expect("report should run");

        assert_eq!(rows.len(), 1);
        assert!(matches!(rows, ReportRows::FirstQuarterOnlyCustomers(_)));
    }

    #[tokio::test]
    async fn failed_report_returns_no_rows() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([read_only_ack()])
            .append_query_errors([DbErr::Custom("relation \"rental\" does not exist".to_string())])
            .into_connection();
        let service = ReportService::new(&db);

        let err = service
            .run(ReportId::Q1)
            .await
            .expect_err("report should fail");

        assert_eq!(err.report, ReportId::Q1);
        assert!(err.diagnostic().contains("relation \"rental\" does not exist"));
    }

    #[tokio::test]
    async fn health_issues_select_one() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([read_only_ack()])
            .into_connection();
        let service = ReportService::new(&db);

        service.health().await.expect("health check should pass");
    }

    #[tokio::test]
    async fn health_surfaces_driver_errors() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_errors([DbErr::Custom("pool timed out".to_string())])
            .into_connection();
        let service = ReportService::new(&db);

        let err = service.health().await.expect_err("health check should fail");
        assert!(err.to_string().contains("pool timed out"));
    }
}
