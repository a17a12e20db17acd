//! HTTP tests for the REST exposure
//!
//! These tests verify the complete flow from HTTP request to response:
//! table listing, list views with query parameters, record details and
//! error responses.

mod common;

use axum::http::StatusCode;
use axum::{Json, Router, routing::get};
use axum_test::TestServer;
use common::dealers;
use partsmart::prelude::*;
use serde_json::{Value, json};

// =============================================================================
// Test Server
// =============================================================================

fn test_config() -> MarketConfig {
    let defaults = MarketConfig::default_config();
    let mut config = MarketConfig::default_config();
    config.tables = ["dealers", "orders"]
        .iter()
        .filter_map(|name| defaults.table(name).cloned())
        .collect();
    config
}

fn test_source() -> InMemoryRecordSource {
    let orders = vec![
        Record::new()
            .with("id", "ORD-1")
            .with("customer", "Maria Lopez")
            .with("total", 120.5)
            .with("status", "Shipped"),
        Record::new()
            .with("id", "ORD-2")
            .with("customer", "James Chen")
            .with("total", 80.0)
            .with("status", "Pending"),
    ];

    InMemoryRecordSource::new()
        .with_table("dealers", dealers())
        .with_table("orders", orders)
}

async fn create_test_server() -> TestServer {
    let app = ServerBuilder::new()
        .with_config(test_config())
        .with_source(test_source())
        .build()
        .await
        .expect("Failed to build router");

    TestServer::new(app).expect("Failed to create test server")
}

fn data_names(body: &Value) -> Vec<String> {
    body["data"]
        .as_array()
        .map(|rows| {
            rows.iter()
                .filter_map(|r| r["name"].as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}

// =============================================================================
// Health & Discovery
// =============================================================================

mod health_tests {
    use super::*;

    #[tokio::test]
    async fn test_health_routes() {
        let server = create_test_server().await;

        for path in ["/health", "/healthz"] {
            let response = server.get(path).await;
            response.assert_status_ok();

            let body: Value = response.json();
            assert_eq!(body, json!({"status": "ok", "service": "partsmart"}));
        }
    }

    #[tokio::test]
    async fn test_list_tables() {
        let server = create_test_server().await;

        let response = server.get("/tables").await;
        response.assert_status_ok();

        let body: Vec<Value> = response.json();
        assert_eq!(body.len(), 2);
        assert_eq!(body[0]["name"], "dealers");
        assert_eq!(body[0]["records"], 12);
        assert_eq!(body[0]["page_size"], 10);
        assert_eq!(body[0]["default_sort"], "name");
        assert_eq!(body[1]["name"], "orders");
        assert_eq!(body[1]["records"], 2);
    }
}

// =============================================================================
// List Views
// =============================================================================

mod list_tests {
    use super::*;

    #[tokio::test]
    async fn test_default_list_uses_default_sort() {
        let server = create_test_server().await;

        let response = server.get("/dealers").await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["pagination"]["total"], 12);
        assert_eq!(body["pagination"]["total_pages"], 2);
        assert_eq!(body["pagination"]["limit"], 10);
        assert_eq!(body["data"].as_array().map(Vec::len), Some(10));
        assert_eq!(data_names(&body)[0], "Apex Auto Parts");
    }

    #[tokio::test]
    async fn test_filter_by_status() {
        let server = create_test_server().await;

        let response = server
            .get("/dealers")
            .add_query_param("filter", r#"{"status":"Active"}"#)
            .await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["pagination"]["total"], 7);
        assert_eq!(body["pagination"]["total_pages"], 1);
        assert_eq!(
            data_names(&body),
            vec![
                "Apex Auto Parts",
                "Bolt & Bearing",
                "Coastal Clutch Co",
                "Midway Motors",
                "Redline Racing",
                "Torque Depot",
                "Valley Volt",
            ]
        );
    }

    #[tokio::test]
    async fn test_sort_and_limit() {
        let server = create_test_server().await;

        let response = server
            .get("/dealers")
            .add_query_param("sort", "rating:desc")
            .add_query_param("limit", 3)
            .await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["data"][0]["id"], "D03");
        assert_eq!(body["data"][1]["id"], "D01");
        assert_eq!(body["data"][2]["id"], "D09");
        assert_eq!(body["pagination"]["total_pages"], 4);
        assert_eq!(body["pagination"]["has_next"], true);
    }

    #[tokio::test]
    async fn test_search_without_matches() {
        let server = create_test_server().await;

        let response = server.get("/dealers").add_query_param("q", "zzz").await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["data"], json!([]));
        assert_eq!(body["pagination"]["total"], 0);
        assert_eq!(body["pagination"]["total_pages"], 0);
        assert_eq!(body["pagination"]["page"], 1);
    }

    #[tokio::test]
    async fn test_malformed_filter_and_sort_are_ignored() {
        let server = create_test_server().await;

        let response = server
            .get("/dealers")
            .add_query_param("filter", "{status: Active")
            .add_query_param("sort", "name:sideways")
            .await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["pagination"]["total"], 12);
        assert_eq!(data_names(&body)[0], "Apex Auto Parts");
    }

    #[tokio::test]
    async fn test_page_is_clamped() {
        let server = create_test_server().await;

        let response = server
            .get("/dealers")
            .add_query_param("page", 99)
            .add_query_param("limit", 5)
            .await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["pagination"]["page"], 3);
        assert_eq!(body["data"].as_array().map(Vec::len), Some(2));
    }

    #[tokio::test]
    async fn test_limit_is_capped() {
        let server = create_test_server().await;

        let response = server.get("/dealers").add_query_param("limit", 5000).await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["pagination"]["limit"], 100);
    }

    #[tokio::test]
    async fn test_range_filter_on_orders() {
        let server = create_test_server().await;

        let response = server
            .get("/orders")
            .add_query_param("filter", r#"{"total>": 100}"#)
            .await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["pagination"]["total"], 1);
        assert_eq!(body["data"][0]["id"], "ORD-1");
    }

    #[tokio::test]
    async fn test_negative_page_and_limit_are_clamped() {
        let server = create_test_server().await;

        let response = server
            .get("/dealers")
            .add_query_param("page", "-1")
            .add_query_param("limit", "-5")
            .await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["pagination"]["page"], 1);
        assert_eq!(body["pagination"]["limit"], 1);
        assert_eq!(body["data"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_non_numeric_page_falls_back_to_first_page() {
        let server = create_test_server().await;

        let response = server.get("/dealers").add_query_param("page", "two").await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["pagination"]["page"], 1);
    }
}

// =============================================================================
// Record Details & Errors
// =============================================================================

mod record_tests {
    use super::*;

    #[tokio::test]
    async fn test_get_record() {
        let server = create_test_server().await;

        let response = server.get("/dealers/D05").await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["name"], "Midway Motors");
        assert_eq!(body["rating"], 4.5);
    }

    #[tokio::test]
    async fn test_record_not_found() {
        let server = create_test_server().await;

        let response = server.get("/dealers/D99").expect_failure().await;
        assert_eq!(response.status_code(), StatusCode::NOT_FOUND);

        let body: Value = response.json();
        assert_eq!(body["code"], "RECORD_NOT_FOUND");
        assert_eq!(body["details"], json!({"table": "dealers", "id": "D99"}));
    }

    #[tokio::test]
    async fn test_unknown_table() {
        let server = create_test_server().await;

        for path in ["/widgets", "/widgets/1"] {
            let response = server.get(path).expect_failure().await;
            assert_eq!(response.status_code(), StatusCode::NOT_FOUND);

            let body: Value = response.json();
            assert_eq!(body["code"], "UNKNOWN_TABLE");
        }
    }
}

// =============================================================================
// Builder
// =============================================================================

mod builder_tests {
    use super::*;

    #[tokio::test]
    async fn test_custom_routes_are_merged() {
        let summary = Router::new().route(
            "/dashboard/summary",
            get(|| async { Json(json!({"open_tickets": 3})) }),
        );

        let app = ServerBuilder::new()
            .with_config(test_config())
            .with_source(test_source())
            .with_custom_routes(summary)
            .build()
            .await
            .expect("Failed to build router");
        let server = TestServer::new(app).expect("Failed to create test server");

        let response = server.get("/dashboard/summary").await;
        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["open_tickets"], 3);
    }

    #[tokio::test]
    async fn test_build_fails_when_a_table_is_missing() {
        let result = ServerBuilder::new()
            .with_source(test_source())
            .build()
            .await;

        let err = result.err().expect("build should fail");
        let load = err.downcast_ref::<LoadError>().expect("a load error");
        assert_eq!(load.table(), "products");
    }

    #[tokio::test]
    async fn test_build_fails_on_duplicate_ids() {
        let mut records = dealers();
        records.push(Record::new().with("id", "D01").with("name", "Copycat Parts"));
        let source = test_source().with_table("dealers", records);

        let result = ServerBuilder::new()
            .with_config(test_config())
            .with_source(source)
            .build()
            .await;

        let err = result.err().expect("build should fail");
        assert!(matches!(
            err.downcast_ref::<LoadError>(),
            Some(LoadError::DuplicateId { id, .. }) if id == "D01"
        ));
    }
}
