//! REST API exposure
//!
//! The REST exposure consumes a `ServerHost` and produces an Axum `Router`
//! with health, table listing, list view and record detail routes.

use super::super::host::ServerHost;
use anyhow::Result;
use axum::{Json, Router, routing::get};
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod handlers;

/// REST API exposure implementation
pub struct RestExposure;

impl RestExposure {
    /// Build the REST router from a host
    ///
    /// # Arguments
    ///
    /// * `host` - The server host holding configuration and loaded tables
    /// * `custom_routes` - Additional custom routes to merge
    ///
    /// # Returns
    ///
    /// Returns a fully configured Axum router with:
    /// - Health check routes
    /// - `GET /tables`
    /// - `GET /{table}` list views and `GET /{table}/{id}` details
    /// - Custom routes
    pub fn build_router(host: Arc<ServerHost>, custom_routes: Vec<Router>) -> Result<Router> {
        let allow_any_origin = host.config.server.allow_any_origin;

        let table_routes = Router::new()
            .route("/tables", get(handlers::list_tables))
            .route("/{table}", get(handlers::list_records))
            .route("/{table}/{id}", get(handlers::get_record))
            .with_state(host);

        let mut app = Self::health_routes().merge(table_routes);

        for custom_router in custom_routes {
            app = app.merge(custom_router);
        }

        // CorsLayer::new() sends no CORS headers at all
        let cors = if allow_any_origin {
            CorsLayer::permissive()
        } else {
            CorsLayer::new()
        };

        Ok(app.layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        ))
    }

    /// Build health check routes
    fn health_routes() -> Router {
        Router::new()
            .route("/health", get(Self::health_check))
            .route("/healthz", get(Self::health_check))
    }

    /// Health check endpoint handler
    async fn health_check() -> Json<Value> {
        Json(json!({
            "status": "ok",
            "service": "partsmart"
        }))
    }
}
