//! Schema-Driven Configuration
//!
//! This module provides the schema/validation mechanism used for
//! system-level connector settings:
//!
//! - **Typed Keys**: Configuration keys declared with a type, importance
//!   tier, documentation, and optional default
//! - **Coercion**: Raw string-keyed input coerced into typed values
//! - **Error Accumulation**: Every validation failure for one input is
//!   collected and reported together
//! - **Unused-Key Tracking**: Input keys the schema does not declare are
//!   set aside for connector-specific configuration layers
//! - **JSON Schema Generation**: Schemas render as JSON Schema documents
//!   for IDE integration and operator documentation

pub mod error;
pub mod resolved;
pub mod resolver;
pub mod schema;
pub mod types;

pub use error::{ConfigError, ConfigResult};
pub use resolved::ResolvedConfig;
pub use resolver::resolve;
pub use schema::{ConfigSchema, ConfigSchemaBuilder};
pub use types::{ConfigKey, ConfigType, ConfigValue, Importance};
