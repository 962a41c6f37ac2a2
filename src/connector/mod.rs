//! Pluggable connector support.
//!
//! Only the configuration surface lives here: the fixed system-level schema
//! every connector shares, and the typed [`ConnectorConfig`] produced from
//! raw properties. Lifecycle management, task distribution, and transport
//! are owned by other parts of the runtime.

pub mod config;

pub use config::{
    connector_schema, ConnectorConfig, CONNECTOR_CLASS_CONFIG, NAME_CONFIG, TASKS_MAX_CONFIG,
    TASKS_MAX_DEFAULT, TOPICS_CONFIG,
};
