//! System-level connector configuration.
//!
//! These are only the settings the runtime itself interprets (connector
//! name, implementation class, task parallelism, topic list). Everything
//! else in the input is connector-specific and is passed through untouched
//! via [`ConnectorConfig::unused_properties`]. Note that some keys are not
//! meaningful for every connector; `topics` is sink-specific.

use crate::config::{
    resolve, ConfigResult, ConfigSchema, ConfigType, ConfigValue, Importance, ResolvedConfig,
};
use std::collections::HashMap;
use std::sync::LazyLock;

/// Globally unique name to use for this connector.
pub const NAME_CONFIG: &str = "name";
const NAME_DOC: &str = "Globally unique name to use for this connector.";

/// Implementation class/path for this connector.
pub const CONNECTOR_CLASS_CONFIG: &str = "connector.class";
const CONNECTOR_CLASS_DOC: &str = "Name of the implementation for this connector.";

/// Maximum number of tasks to use for this connector.
pub const TASKS_MAX_CONFIG: &str = "tasks.max";
const TASKS_MAX_DOC: &str = "Maximum number of tasks to use for this connector.";
pub const TASKS_MAX_DEFAULT: i64 = 1;

/// Topic list for sink connectors.
pub const TOPICS_CONFIG: &str = "topics";
const TOPICS_DOC: &str = "";

static CONNECTOR_SCHEMA: LazyLock<ConfigSchema> = LazyLock::new(|| {
    ConfigSchema::builder()
        .define(NAME_CONFIG, ConfigType::String, Importance::High, None, NAME_DOC)
        .define(
            CONNECTOR_CLASS_CONFIG,
            ConfigType::String,
            Importance::High,
            None,
            CONNECTOR_CLASS_DOC,
        )
        .define(
            TASKS_MAX_CONFIG,
            ConfigType::Int,
            Importance::High,
            Some(ConfigValue::Int(TASKS_MAX_DEFAULT)),
            TASKS_MAX_DOC,
        )
        .define(
            TOPICS_CONFIG,
            ConfigType::List,
            Importance::High,
            Some(ConfigValue::List(Vec::new())),
            TOPICS_DOC,
        )
        .build()
});

/// The system-level connector schema, built once per process and shared
/// read-only by every resolution.
pub fn connector_schema() -> &'static ConfigSchema {
    &CONNECTOR_SCHEMA
}

/// Validated system-level settings for one connector instance.
#[derive(Debug, Clone, PartialEq)]
pub struct ConnectorConfig {
    name: String,
    connector_class: String,
    tasks_max: i64,
    topics: Vec<String>,
    resolved: ResolvedConfig,
}

impl ConnectorConfig {
    /// Validate raw properties against the system-level schema.
    ///
    /// Fails with the complete list of validation errors; on success the
    /// typed accessors are infallible.
    pub fn from_properties(properties: &HashMap<String, String>) -> ConfigResult<Self> {
        let resolved = resolve(connector_schema(), properties)?;

        // The fixed schema guarantees these keys resolve with these types,
        // so an accessor failure here is a schema bug.
        let name = resolved
            .get_string(NAME_CONFIG)
            .map_err(|e| vec![e])?
            .to_string();
        let connector_class = resolved
            .get_string(CONNECTOR_CLASS_CONFIG)
            .map_err(|e| vec![e])?
            .to_string();
        let tasks_max = resolved.get_int(TASKS_MAX_CONFIG).map_err(|e| vec![e])?;
        let topics = resolved
            .get_list(TOPICS_CONFIG)
            .map_err(|e| vec![e])?
            .to_vec();

        Ok(Self {
            name,
            connector_class,
            tasks_max,
            topics,
            resolved,
        })
    }

    /// Globally unique connector name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Connector implementation identifier
    pub fn connector_class(&self) -> &str {
        &self.connector_class
    }

    /// Maximum number of tasks for this connector
    pub fn tasks_max(&self) -> i64 {
        self.tasks_max
    }

    /// Topic list (sink connectors only; empty otherwise)
    pub fn topics(&self) -> &[String] {
        &self.topics
    }

    /// The original raw input, preserved verbatim
    pub fn raw(&self) -> &HashMap<String, String> {
        self.resolved.raw()
    }

    /// Input keys the system-level schema does not declare, with their raw
    /// values. Handed onward to the connector-specific configuration layer.
    pub fn unused_properties(&self) -> HashMap<String, String> {
        self.resolved.unused_properties()
    }

    /// The underlying resolved configuration
    pub fn resolved(&self) -> &ResolvedConfig {
        &self.resolved
    }
}
