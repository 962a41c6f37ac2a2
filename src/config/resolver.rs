//! Resolution of raw string properties against a configuration schema.
//!
//! Resolution walks the schema in definition order, coercing each raw value
//! to its declared type, falling back to defaults, and recording every
//! failure before reporting. Keys present in the input but not declared in
//! the schema are set aside as unused, for hand-off to a downstream
//! connector-specific schema.

use crate::config::error::{ConfigError, ConfigResult};
use crate::config::resolved::ResolvedConfig;
use crate::config::schema::ConfigSchema;
use crate::config::types::{ConfigType, ConfigValue};
use log::debug;
use std::collections::{BTreeSet, HashMap};

/// Validate and coerce `raw` against `schema`.
///
/// Errors are accumulated, not fail-fast: one call reports every missing
/// required key and every uncoercible value in the input. On success the
/// returned [`ResolvedConfig`] holds one typed value per schema key, the
/// verbatim raw input, and the set of undeclared (unused) keys.
pub fn resolve(schema: &ConfigSchema, raw: &HashMap<String, String>) -> ConfigResult<ResolvedConfig> {
    let mut values = HashMap::with_capacity(schema.len());
    let mut errors = Vec::new();

    for key in schema.keys() {
        match raw.get(&key.name) {
            Some(raw_value) => match coerce(raw_value, key.config_type) {
                Ok(value) => {
                    values.insert(key.name.clone(), value);
                }
                Err(_) => errors.push(ConfigError::TypeCoercion {
                    key: key.name.clone(),
                    value: raw_value.clone(),
                    expected: key.config_type,
                }),
            },
            None => match &key.default {
                Some(default) => {
                    debug!(
                        "Configuration key '{}' not supplied, using default {:?}",
                        key.name, default
                    );
                    values.insert(key.name.clone(), default.clone());
                }
                None => errors.push(ConfigError::MissingRequiredKey {
                    key: key.name.clone(),
                }),
            },
        }
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    // Unused means "not declared in the schema", independent of whether any
    // resolved value is ever read afterwards.
    let unused_keys: BTreeSet<String> = raw
        .keys()
        .filter(|k| !schema.contains(k.as_str()))
        .cloned()
        .collect();

    Ok(ResolvedConfig::new(raw.clone(), values, unused_keys))
}

/// Coerce one raw string to its declared type.
///
/// String and List never fail; Int and Boolean fail on any text outside
/// their domain.
fn coerce(raw: &str, config_type: ConfigType) -> Result<ConfigValue, ()> {
    match config_type {
        ConfigType::String => Ok(ConfigValue::String(raw.to_string())),
        ConfigType::Int => raw
            .trim()
            .parse::<i64>()
            .map(ConfigValue::Int)
            .map_err(|_| ()),
        ConfigType::Boolean => match raw.trim().to_ascii_lowercase().as_str() {
            "true" => Ok(ConfigValue::Boolean(true)),
            "false" => Ok(ConfigValue::Boolean(false)),
            _ => Err(()),
        },
        ConfigType::List => {
            if raw.is_empty() {
                Ok(ConfigValue::List(Vec::new()))
            } else {
                Ok(ConfigValue::List(
                    raw.split(',').map(|item| item.trim().to_string()).collect(),
                ))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::types::Importance;

    fn schema() -> ConfigSchema {
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
            .define(
                "topics",
                ConfigType::List,
                Importance::High,
                Some(ConfigValue::List(Vec::new())),
                "",
            )
            .define(
                "enabled",
                ConfigType::Boolean,
                Importance::Low,
                Some(ConfigValue::Boolean(true)),
                "",
            )
            .build()
    }

    fn props(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_explicit_values_override_defaults() {
        let resolved = resolve(
            &schema(),
            &props(&[("name", "orders"), ("tasks.max", "4"), ("enabled", "FALSE")]),
        )
        .unwrap();

        assert_eq!(resolved.get_string("name").unwrap(), "orders");
        assert_eq!(resolved.get_int("tasks.max").unwrap(), 4);
        assert!(!resolved.get_boolean("enabled").unwrap());
    }

    #[test]
    fn test_defaults_fill_absent_optional_keys() {
        let resolved = resolve(&schema(), &props(&[("name", "orders")])).unwrap();

        assert_eq!(resolved.get_int("tasks.max").unwrap(), 1);
        assert!(resolved.get_list("topics").unwrap().is_empty());
        assert!(resolved.get_boolean("enabled").unwrap());
    }

    #[test]
    fn test_missing_required_key_is_reported() {
        let errors = resolve(&schema(), &props(&[("tasks.max", "3")])).unwrap_err();

        assert_eq!(
            errors,
            vec![ConfigError::MissingRequiredKey {
                key: "name".to_string()
            }]
        );
    }

    #[test]
    fn test_coercion_failure_does_not_short_circuit() {
        // Both the bad integer and the missing required key must be reported
        // in one pass.
        let errors = resolve(&schema(), &props(&[("tasks.max", "abc")])).unwrap_err();

        assert_eq!(errors.len(), 2);
        assert!(errors.contains(&ConfigError::TypeCoercion {
            key: "tasks.max".to_string(),
            value: "abc".to_string(),
            expected: ConfigType::Int,
        }));
        assert!(errors.contains(&ConfigError::MissingRequiredKey {
            key: "name".to_string()
        }));
    }

    #[test]
    fn test_out_of_range_int_fails_coercion() {
        let raw = props(&[("name", "orders"), ("tasks.max", "99999999999999999999")]);
        let errors = resolve(&schema(), &raw).unwrap_err();
        assert!(matches!(
            errors.as_slice(),
            [ConfigError::TypeCoercion { key, .. }] if key == "tasks.max"
        ));
    }

    #[test]
    fn test_list_splits_and_trims() {
        let resolved =
            resolve(&schema(), &props(&[("name", "n"), ("topics", "a, b ,c")])).unwrap();
        assert_eq!(resolved.get_list("topics").unwrap(), &["a", "b", "c"]);
    }

    #[test]
    fn test_empty_list_input_yields_empty_list() {
        let resolved = resolve(&schema(), &props(&[("name", "n"), ("topics", "")])).unwrap();
        assert!(resolved.get_list("topics").unwrap().is_empty());
    }

    #[test]
    fn test_boolean_rejects_non_boolean_text() {
        let errors = resolve(&schema(), &props(&[("name", "n"), ("enabled", "yes")])).unwrap_err();
        assert!(matches!(
            errors.as_slice(),
            [ConfigError::TypeCoercion { key, .. }] if key == "enabled"
        ));
    }

    #[test]
    fn test_unused_keys_are_the_undeclared_input_keys() {
        let resolved = resolve(
            &schema(),
            &props(&[("name", "n"), ("connection.url", "jdbc:..."), ("batch", "10")]),
        )
        .unwrap();

        let unused = resolved.unused_properties();
        assert_eq!(unused.len(), 2);
        assert_eq!(unused.get("connection.url").unwrap(), "jdbc:...");
        assert_eq!(unused.get("batch").unwrap(), "10");
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let raw = props(&[("name", "n"), ("tasks.max", "2"), ("extra", "x")]);
        let schema = schema();

        let first = resolve(&schema, &raw).unwrap();
        let second = resolve(&schema, &raw).unwrap();
        assert_eq!(first, second);
    }
}
