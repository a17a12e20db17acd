//! Back-office demo: prints a few list views, then serves every table over REST
//!
//! ```text
//! cargo run --example back_office [config.yaml]
//! curl 'http://127.0.0.1:3000/dealers?filter={"status":"Active"}&sort=rating:desc'
//! ```

mod fixtures;

use partsmart::prelude::*;

fn print_view(title: &str, view: &ListView<'_>, column: &str) {
    println!(
        "📋 {title} (page {}/{}, {} matching)",
        view.pagination.page, view.pagination.total_pages, view.pagination.total
    );
    for record in &view.data {
        let id = record.id().unwrap_or_default();
        let value = record
            .get(column)
            .and_then(|v| v.display_text())
            .unwrap_or_default();
        println!("   {id:<10} {value}");
    }
    println!();
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = match std::env::args().nth(1) {
        Some(path) => MarketConfig::from_yaml_file(&path)?,
        None => MarketConfig::default_config(),
    };
    init_logging(&config.logging)?;

    println!("🚗 partsmart back office\n");

    let dealers = fixtures::dealers()?;
    let table = config
        .table("dealers")
        .ok_or_else(|| anyhow::anyhow!("dealers table is not configured"))?;

    let mut state = ListState::new(table, 5);
    print_view("All dealers", &state.view(&dealers, table), "name");

    state.select("status", "Active");
    state.toggle_sort("rating");
    state.toggle_sort("rating");
    print_view(
        "Active dealers by rating",
        &state.view(&dealers, table),
        "rating",
    );

    state.set_query("parts");
    print_view("Search \"parts\"", &state.view(&dealers, table), "name");

    let bind = config.server.bind.clone();
    println!("🌐 Serving on http://{bind}\n");

    ServerBuilder::new()
        .with_config(config)
        .with_source(fixtures::source()?)
        .serve(&bind)
        .await
}
