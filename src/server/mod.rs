//! Server module for exposing the loaded tables over HTTP
//!
//! This module provides a `ServerBuilder` that loads every table through a
//! `RecordSource` and registers:
//! - Health routes
//! - Table listing and list view routes
//! - Record detail routes

pub mod builder;
pub mod exposure;
pub mod host;

pub use builder::ServerBuilder;
pub use exposure::RestExposure;
pub use host::ServerHost;
