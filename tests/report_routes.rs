use axum::{
    Router,
    body::{self, Body},
    http::{Request, StatusCode},
};
use sea_orm::{DatabaseBackend, DatabaseConnection, DbErr, MockDatabase};
use tower::ServiceExt;

use sakila_reports::{
    config::DatabaseConfig,
    db::connection,
    middleware::catch_panic_layer,
    routes::API_PREFIX,
    test_helpers::{RentalFixture, day, memory_database, test_router},
};

fn api_path(path: &str) -> String {
    format!("{API_PREFIX}{path}")
}

async fn seeded_database() -> DatabaseConnection {
    let db = memory_database().await.expect("in-memory schema should build");
    let mut fixture = RentalFixture::new(&db);
    fixture.category(1, "Action").await.unwrap();
    fixture.category(2, "Comedy").await.unwrap();
    fixture.film(1, "A", &[1]).await.unwrap();
    fixture.film(2, "B", &[1]).await.unwrap();
    fixture.film(3, "C", &[2]).await.unwrap();
    fixture.customer(1, "MARY", "SMITH").await.unwrap();
    fixture.rentals(1, 1, 10, day(2005, 5, 24)).await.unwrap();
    fixture.rentals(2, 1, 3, day(2005, 5, 24)).await.unwrap();
    fixture.rentals(3, 1, 7, day(2005, 5, 24)).await.unwrap();
    db
}

// Connected, but none of the rental tables exist.
async fn schemaless_database() -> DatabaseConnection {
    let cfg = DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        ..DatabaseConfig::default()
    };
    connection::connect(&cfg).await.expect("sqlite should connect")
}

fn app(db: DatabaseConnection) -> Router {
    test_router(db).layer(catch_panic_layer())
}

async fn get(app: Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .expect("request should succeed");
    let status = response.status();
    let bytes = body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body should read");
    (status, String::from_utf8_lossy(&bytes).into_owned())
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let (status, body) = get(app, uri).await;
    let json = serde_json::from_str(&body).expect("body should be json");
    (status, json)
}

#[tokio::test]
async fn index_lists_every_report_without_running_any() {
    let (status, html) = get(app(seeded_database().await), "/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Most rented film per category"));
    assert!(html.contains("Customers spending above the average"));
    assert!(html.contains("Films rented more than their category average"));
    assert!(html.contains("Customers who rented only in the first quarter"));
    assert!(!html.contains("<table>"));
}

#[tokio::test]
async fn selected_view_renders_rows_positionally() {
    let (status, html) = get(app(seeded_database().await), "/?view=q1").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("<th>Category</th><th>Title</th><th>Total rentals</th>"));
    assert!(html.contains("<td>Action</td><td>A</td><td>10</td>"));
    assert!(html.contains("<td>Comedy</td><td>C</td><td>7</td>"));
    assert!(!html.contains("<td>B</td>"));
    assert_eq!(html.matches("<table>").count(), 1);
}

#[tokio::test]
async fn empty_result_renders_no_results_message() {
    let (status, html) = get(app(seeded_database().await), "/?view=q4").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("<th>Customer ID</th><th>Full name</th>"));
    assert!(html.contains("No results."));
}

#[tokio::test]
async fn unknown_view_renders_the_bare_page() {
    let (status, html) = get(app(seeded_database().await), "/?view=q9").await;

    assert_eq!(status, StatusCode::OK);
    assert!(!html.contains("<table>"));
    assert!(!html.contains("class=\"error\""));
}

#[tokio::test]
async fn query_failure_is_shown_inline() {
    let (status, html) = get(app(schemaless_database().await), "/?view=q2").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("<p class=\"error\">query execution failed for report q2"));
    assert!(!html.contains("<table>"));
}

#[tokio::test]
async fn health_reports_ok_when_database_answers() {
    let (status, json) = get_json(app(schemaless_database().await), "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, serde_json::json!({ "status": "ok" }));
}

#[tokio::test]
async fn health_reports_driver_error() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_errors([DbErr::Custom("connection refused".to_string())])
        .into_connection();

    let (status, json) = get_json(app(db), "/health").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["status"], "error");
    assert!(
        json["detail"]
            .as_str()
            .expect("detail should be a string")
            .contains("connection refused")
    );
}

#[tokio::test]
async fn api_lists_report_catalog() {
    let (status, json) = get_json(app(seeded_database().await), &api_path("/reports")).await;

    assert_eq!(status, StatusCode::OK);
    let reports = json["data"].as_array().expect("data should be a list");
    let ids: Vec<&str> = reports
        .iter()
        .map(|report| report["id"].as_str().expect("id should be a string"))
        .collect();
    assert_eq!(ids, vec!["q1", "q2", "q3", "q4"]);
    assert_eq!(reports[1]["columns"][2], "Total spent");
}

#[tokio::test]
async fn api_runs_a_report() {
    let (status, json) = get_json(app(seeded_database().await), &api_path("/reports/q1")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], 200);
    assert_eq!(json["data"]["report"], "q1");
    assert_eq!(
        json["data"]["rows"],
        serde_json::json!([
            { "category": "Action", "title": "A", "total_rentals": 10 },
            { "category": "Comedy", "title": "C", "total_rentals": 7 },
        ])
    );
}

#[tokio::test]
async fn api_rejects_unknown_report() {
    let (status, json) = get_json(app(seeded_database().await), &api_path("/reports/q9")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["status"], 404);
    assert!(
        json["message"]
            .as_str()
            .expect("message should be a string")
            .contains("unknown report 'q9'")
    );
}

#[tokio::test]
async fn api_maps_query_failure_to_server_error() {
    let (status, json) = get_json(app(schemaless_database().await), &api_path("/reports/q3")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(
        json["message"]
            .as_str()
            .expect("message should be a string")
            .starts_with("query execution failed for report q3")
    );
    assert!(json["data"].is_null());
}
