//! Core schema types: key descriptions, value domains, and resolved values.

use serde::{Deserialize, Serialize};

/// Value domain of a configuration key.
///
/// Closed set so every coercion path is exhaustively handled; adding a new
/// type is a compile-time-checked change in the resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConfigType {
    /// Arbitrary string, passed through verbatim
    String,
    /// Base-10 signed 64-bit integer
    Int,
    /// Comma-separated list of strings, each element trimmed
    List,
    /// Case-insensitive `true` / `false`
    Boolean,
}

impl ConfigType {
    /// JSON Schema type name for this value domain
    pub fn json_type(&self) -> &'static str {
        match self {
            ConfigType::String => "string",
            ConfigType::Int => "integer",
            ConfigType::List => "array",
            ConfigType::Boolean => "boolean",
        }
    }
}

impl std::fmt::Display for ConfigType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigType::String => write!(f, "STRING"),
            ConfigType::Int => write!(f, "INT"),
            ConfigType::List => write!(f, "LIST"),
            ConfigType::Boolean => write!(f, "BOOLEAN"),
        }
    }
}

/// Operator-facing priority tier of a configuration key.
///
/// Documentation metadata only; never drives behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Importance {
    High,
    Medium,
    Low,
}

/// A resolved, typed configuration value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ConfigValue {
    String(String),
    Int(i64),
    List(Vec<String>),
    Boolean(bool),
}

impl ConfigValue {
    /// The value domain this value belongs to
    pub fn config_type(&self) -> ConfigType {
        match self {
            ConfigValue::String(_) => ConfigType::String,
            ConfigValue::Int(_) => ConfigType::Int,
            ConfigValue::List(_) => ConfigType::List,
            ConfigValue::Boolean(_) => ConfigType::Boolean,
        }
    }
}

/// Immutable description of one configuration key.
///
/// A key without a default is required: callers must supply it explicitly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigKey {
    /// Key name, unique within its schema
    pub name: String,
    /// Value domain used for coercion
    pub config_type: ConfigType,
    /// Operator-facing priority tier
    pub importance: Importance,
    /// Default value if not supplied; `None` marks the key required
    pub default: Option<ConfigValue>,
    /// Documentation text, may be empty
    pub doc: String,
}

impl ConfigKey {
    /// Whether callers must supply this key explicitly
    pub fn is_required(&self) -> bool {
        self.default.is_none()
    }
}
