//! ServerBuilder for fluent API to build HTTP servers

use super::exposure::RestExposure;
use super::host::ServerHost;
use crate::config::MarketConfig;
use crate::core::RecordSource;
use crate::storage::Catalog;
use anyhow::Result;
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Builder for creating HTTP servers over the loaded tables
///
/// # Example
///
/// ```ignore
/// let app = ServerBuilder::new()
///     .with_config(MarketConfig::from_yaml_file("partsmart.yaml")?)
///     .with_source(JsonFileSource::new("data"))
///     .build()
///     .await?;
/// ```
pub struct ServerBuilder {
    configs: Vec<MarketConfig>,
    source: Option<Arc<dyn RecordSource>>,
    custom_routes: Vec<Router>,
}

impl ServerBuilder {
    /// Create a new ServerBuilder
    pub fn new() -> Self {
        Self {
            configs: Vec::new(),
            source: None,
            custom_routes: Vec::new(),
        }
    }

    /// Add a configuration
    ///
    /// Several configurations are merged in order. Without any, the
    /// built-in marketplace tables are used.
    pub fn with_config(mut self, config: MarketConfig) -> Self {
        self.configs.push(config);
        self
    }

    /// Set the record source (required)
    pub fn with_source(mut self, source: impl RecordSource + 'static) -> Self {
        self.source = Some(Arc::new(source));
        self
    }

    /// Add custom routes to the server
    ///
    /// Use this to add routes that don't fit the list/detail pattern, such
    /// as dashboard summaries or export endpoints.
    pub fn with_custom_routes(mut self, routes: Router) -> Self {
        self.custom_routes.push(routes);
        self
    }

    /// The configuration the host will be built with
    pub fn config(&self) -> MarketConfig {
        if self.configs.is_empty() {
            MarketConfig::default_config()
        } else {
            MarketConfig::merge(self.configs.clone())
        }
    }

    /// Load every table and build the transport-agnostic host
    ///
    /// Fails if the merged configuration is invalid, no source was set or
    /// any table fails to load.
    pub async fn build_host(&self) -> Result<ServerHost> {
        let config = self.config();
        config.validate()?;

        let source = self
            .source
            .as_ref()
            .ok_or_else(|| anyhow::anyhow!("RecordSource is required. Call .with_source()"))?;

        let catalog = Catalog::load(&config, source.as_ref()).await?;
        tracing::info!(tables = catalog.len(), "catalog loaded");

        Ok(ServerHost::new(config, catalog))
    }

    /// Build the final REST router
    pub async fn build(mut self) -> Result<Router> {
        let custom_routes = std::mem::take(&mut self.custom_routes);
        let host = Arc::new(self.build_host().await?);
        RestExposure::build_router(host, custom_routes)
    }

    /// Serve the application with graceful shutdown
    ///
    /// This will:
    /// - Load every table
    /// - Bind to the provided address
    /// - Handle SIGTERM and SIGINT (Ctrl+C) for graceful shutdown
    ///
    /// # Example
    ///
    /// ```ignore
    /// ServerBuilder::new()
    ///     .with_source(source)
    ///     .serve("127.0.0.1:3000").await?;
    /// ```
    pub async fn serve(self, addr: &str) -> Result<()> {
        let app = self.build().await?;
        let listener = TcpListener::bind(addr).await?;

        tracing::info!("Server listening on {}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }

    /// Serve on the bind address from the merged configuration
    pub async fn serve_configured(self) -> Result<()> {
        let addr = self.config().server.bind;
        self.serve(&addr).await
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, initiating graceful shutdown...");
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TableConfig;
    use crate::core::Record;
    use crate::storage::InMemoryRecordSource;

    fn users_config() -> MarketConfig {
        let mut config = MarketConfig::default_config();
        config.tables = vec![TableConfig::new("users").with_search_fields(["name"])];
        config
    }

    fn users_source() -> InMemoryRecordSource {
        InMemoryRecordSource::new().with_table(
            "users",
            vec![Record::new().with("id", "U1").with("name", "Ann")],
        )
    }

    #[tokio::test]
    async fn test_build_host_requires_source() {
        let err = ServerBuilder::new()
            .with_config(users_config())
            .build_host()
            .await
            .err()
            .unwrap();
        assert!(err.to_string().contains("RecordSource is required"));
    }

    #[tokio::test]
    async fn test_build_host_loads_catalog() {
        let host = ServerBuilder::new()
            .with_config(users_config())
            .with_source(users_source())
            .build_host()
            .await
            .unwrap();

        assert_eq!(host.table_names(), vec!["users"]);
        assert!(host.get("users", "U1").is_ok());
    }

    #[tokio::test]
    async fn test_build_host_fails_on_missing_table() {
        let result = ServerBuilder::new().with_source(users_source()).build_host().await;
        assert!(result.is_err());
    }

    #[test]
    fn test_config_defaults_to_marketplace_tables() {
        let builder = ServerBuilder::new();
        assert_eq!(builder.config().tables.len(), 6);
    }

    #[test]
    fn test_configs_are_merged() {
        let mut override_config = users_config();
        override_config.tables[0] = TableConfig::new("users").with_page_size(50);

        let builder = ServerBuilder::new()
            .with_config(users_config())
            .with_config(override_config);
        assert_eq!(builder.config().tables[0].page_size, Some(50));
    }
}
