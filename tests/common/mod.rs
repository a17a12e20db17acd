//! Shared fixtures for integration tests

#![allow(dead_code)]

use partsmart::prelude::*;

/// Twelve dealers, seven of them Active, in no particular order
pub fn dealers() -> Vec<Record> {
    [
        ("D01", "Torque Depot", "Active", Some(4.8), "South"),
        ("D02", "Brake Barn", "Pending", Some(4.1), "West"),
        ("D03", "Apex Auto Parts", "Active", Some(4.9), "Midwest"),
        ("D04", "Gearhead Supply", "Suspended", Some(3.2), "West"),
        ("D05", "Midway Motors", "Active", Some(4.5), "Midwest"),
        ("D06", "Coastal Clutch Co", "Active", Some(4.3), "South"),
        ("D07", "Northern Pistons", "Inactive", Some(3.9), "Northeast"),
        ("D08", "Bolt & Bearing", "Active", Some(4.6), "West"),
        ("D09", "Redline Racing", "Active", Some(4.7), "South"),
        ("D10", "Summit Spares", "Pending", None, "West"),
        ("D11", "Valley Volt", "Active", Some(4.2), "West"),
        ("D12", "Ironworks Exhaust", "Suspended", Some(2.8), "Midwest"),
    ]
    .into_iter()
    .map(|(id, name, status, rating, region)| {
        Record::new()
            .with("id", id)
            .with("name", name)
            .with("status", status)
            .with("rating", rating)
            .with("region", region)
            .with("email", format!("{}@dealers.example", id.to_lowercase()))
    })
    .collect()
}

/// The dealers table from the built-in configuration
pub fn dealers_table() -> TableConfig {
    MarketConfig::default_config()
        .table("dealers")
        .cloned()
        .expect("dealers table is configured")
}

pub fn ids(rows: &[&Record]) -> Vec<String> {
    rows.iter()
        .map(|r| r.id().map(|id| id.into_owned()).unwrap_or_default())
        .collect()
}

pub fn names(rows: &[&Record]) -> Vec<String> {
    rows.iter()
        .filter_map(|r| r.get("name").and_then(|v| v.as_str()).map(str::to_string))
        .collect()
}
