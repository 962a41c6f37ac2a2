//! # stream-connect
//!
//! Schema-driven configuration for pluggable connectors in a streaming
//! data-integration runtime.
//!
//! ## Features
//!
//! - **Typed Schemas**: Declare configuration keys with a type, importance
//!   tier, documentation, and optional default
//! - **Validation & Coercion**: Raw string properties validated and coerced
//!   in one pass, with every failure collected into a single report
//! - **Unused-Key Tracking**: Input keys the schema does not declare are
//!   surfaced for connector-specific configuration layers
//! - **System-Level Connector Schema**: The fixed schema every connector
//!   shares (name, implementation, parallelism, topics), built once and
//!   reused process-wide
//!
//! ## Quick Start
//!
//! ```rust
//! use stream_connect::ConnectorConfig;
//! use std::collections::HashMap;
//!
//! let props: HashMap<String, String> = [
//!     ("name", "orders-sink"),
//!     ("connector.class", "JdbcSinkConnector"),
//!     ("tasks.max", "3"),
//!     ("topics", "orders, payments"),
//!     ("connection.url", "jdbc:postgresql://db/orders"),
//! ]
//! .into_iter()
//! .map(|(k, v)| (k.to_string(), v.to_string()))
//! .collect();
//!
//! let config = ConnectorConfig::from_properties(&props).expect("valid config");
//! assert_eq!(config.name(), "orders-sink");
//! assert_eq!(config.tasks_max(), 3);
//! assert_eq!(config.topics(), &["orders", "payments"]);
//!
//! // Everything the system-level schema does not declare is handed to the
//! // connector-specific configuration layer untouched.
//! assert!(config.unused_properties().contains_key("connection.url"));
//! ```

pub mod config;
pub mod connector;

// Re-export main API at crate root for easy access
pub use config::{
    resolve,
    ConfigError,
    ConfigKey,
    ConfigResult,
    ConfigSchema,
    ConfigSchemaBuilder,
    ConfigType,
    ConfigValue,
    Importance,
    ResolvedConfig,
};
pub use connector::{connector_schema, ConnectorConfig};
