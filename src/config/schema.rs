//! Configuration schema definition.
//!
//! A `ConfigSchema` is the immutable description of one configuration
//! "shape": the ordered set of typed, documented keys a component accepts.
//! Schemas are built once through `ConfigSchemaBuilder` and then shared
//! read-only across every resolution for that shape.

use crate::config::types::{ConfigKey, ConfigType, ConfigValue, Importance};
use serde_json::{json, Value};
use std::collections::HashMap;

/// Builder for [`ConfigSchema`].
///
/// Keys keep their definition order, which is also the order they are
/// validated and documented in.
#[derive(Debug, Default)]
pub struct ConfigSchemaBuilder {
    keys: Vec<ConfigKey>,
    by_name: HashMap<String, usize>,
}

impl ConfigSchemaBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register one configuration key.
    ///
    /// A key without a default is required; pass `Some(default)` to make it
    /// optional.
    ///
    /// # Panics
    ///
    /// Panics if `name` was already defined on this builder or is empty.
    /// Both are programmer errors in the schema itself, not correctable by
    /// input, so they abort component initialization.
    pub fn define(
        mut self,
        name: impl Into<String>,
        config_type: ConfigType,
        importance: Importance,
        default: Option<ConfigValue>,
        doc: impl Into<String>,
    ) -> Self {
        let name = name.into();
        if name.is_empty() {
            panic!("Configuration key name cannot be empty");
        }
        if self.by_name.contains_key(&name) {
            panic!("Configuration key '{}' is defined twice", name);
        }
        if let Some(default) = &default {
            if default.config_type() != config_type {
                panic!(
                    "Default for configuration key '{}' has type {}, not {}",
                    name,
                    default.config_type(),
                    config_type
                );
            }
        }

        self.by_name.insert(name.clone(), self.keys.len());
        self.keys.push(ConfigKey {
            name,
            config_type,
            importance,
            default,
            doc: doc.into(),
        });
        self
    }

    /// Finalize the schema. No further mutation is possible afterwards.
    pub fn build(self) -> ConfigSchema {
        ConfigSchema {
            keys: self.keys,
            by_name: self.by_name,
        }
    }
}

/// Immutable, ordered collection of configuration keys.
///
/// Safe to share across arbitrarily many concurrent resolutions; it is never
/// mutated after `build()`.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigSchema {
    keys: Vec<ConfigKey>,
    by_name: HashMap<String, usize>,
}

impl ConfigSchema {
    /// Start building a new schema
    pub fn builder() -> ConfigSchemaBuilder {
        ConfigSchemaBuilder::new()
    }

    /// Keys in definition order
    pub fn keys(&self) -> &[ConfigKey] {
        &self.keys
    }

    /// Look up a key by name
    pub fn lookup(&self, name: &str) -> Option<&ConfigKey> {
        self.by_name.get(name).map(|&idx| &self.keys[idx])
    }

    /// Whether `name` is declared in this schema
    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Generate a JSON Schema (draft 2020-12) document for this schema.
    ///
    /// Used for IDE integration and operator documentation: each key becomes
    /// a property with its type, description, and default; required keys are
    /// listed in the `required` array.
    pub fn to_json_schema(&self) -> Value {
        let mut properties = serde_json::Map::new();
        let mut required = Vec::new();

        for key in &self.keys {
            let mut property = serde_json::Map::new();
            property.insert("type".to_string(), json!(key.config_type.json_type()));
            if !key.doc.is_empty() {
                property.insert("description".to_string(), json!(key.doc));
            }
            if let Some(default) = &key.default {
                let default_json = match default {
                    ConfigValue::String(s) => json!(s),
                    ConfigValue::Int(i) => json!(i),
                    ConfigValue::List(items) => json!(items),
                    ConfigValue::Boolean(b) => json!(b),
                };
                property.insert("default".to_string(), default_json);
            } else {
                required.push(key.name.clone());
            }
            properties.insert(key.name.clone(), Value::Object(property));
        }

        json!({
            "$schema": "https://json-schema.org/draft/2020-12/schema",
            "type": "object",
            "properties": properties,
            "required": required,
            "additionalProperties": true
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_schema() -> ConfigSchema {
        ConfigSchema::builder()
            .define(
                "name",
                ConfigType::String,
                Importance::High,
                None,
                "Connector name",
            )
            .define(
                "tasks.max",
                ConfigType::Int,
                Importance::High,
                Some(ConfigValue::Int(1)),
                "Maximum number of tasks",
            )
            .build()
    }

    #[test]
    fn test_keys_keep_definition_order() {
        let schema = sample_schema();
        let names: Vec<&str> = schema.keys().iter().map(|k| k.name.as_str()).collect();
        assert_eq!(names, vec!["name", "tasks.max"]);
    }

    #[test]
    fn test_lookup_finds_declared_keys_only() {
        let schema = sample_schema();
        assert!(schema.lookup("name").is_some());
        assert!(schema.lookup("tasks.max").unwrap().default.is_some());
        assert!(schema.lookup("bogus").is_none());
        assert!(schema.contains("name"));
        assert!(!schema.contains("bogus"));
    }

    #[test]
    #[should_panic(expected = "defined twice")]
    fn test_duplicate_key_definition_panics() {
        ConfigSchema::builder()
            .define("name", ConfigType::String, Importance::High, None, "")
            .define("name", ConfigType::String, Importance::Low, None, "")
            .build();
    }

    #[test]
    #[should_panic(expected = "has type STRING, not INT")]
    fn test_mistyped_default_panics() {
        ConfigSchema::builder()
            .define(
                "tasks.max",
                ConfigType::Int,
                Importance::High,
                Some(ConfigValue::String("1".to_string())),
                "",
            )
            .build();
    }

    #[test]
    fn test_json_schema_lists_properties_and_required() {
        let schema = sample_schema().to_json_schema();

        assert_eq!(schema["properties"]["name"]["type"], "string");
        assert_eq!(schema["properties"]["tasks.max"]["type"], "integer");
        assert_eq!(schema["properties"]["tasks.max"]["default"], 1);
        assert_eq!(schema["required"], json!(["name"]));
    }
}
