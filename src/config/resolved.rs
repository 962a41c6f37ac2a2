//! The immutable result of a successful configuration resolution.

use crate::config::error::ConfigError;
use crate::config::types::{ConfigType, ConfigValue};
use log::{info, warn};
use std::collections::{BTreeSet, HashMap};

/// Typed configuration values produced by [`resolve`](crate::config::resolve).
///
/// Holds one typed value per schema key (explicit input or default), the
/// verbatim raw input, and the set of raw keys the schema does not declare.
/// Never mutated after creation; owned exclusively by the caller that
/// requested validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    raw: HashMap<String, String>,
    values: HashMap<String, ConfigValue>,
    unused_keys: BTreeSet<String>,
}

impl ResolvedConfig {
    pub(crate) fn new(
        raw: HashMap<String, String>,
        values: HashMap<String, ConfigValue>,
        unused_keys: BTreeSet<String>,
    ) -> Self {
        Self {
            raw,
            values,
            unused_keys,
        }
    }

    /// The original raw input, preserved verbatim
    pub fn raw(&self) -> &HashMap<String, String> {
        &self.raw
    }

    /// Typed value for `name`, regardless of declared type
    pub fn get(&self, name: &str) -> Option<&ConfigValue> {
        self.values.get(name)
    }

    /// String value of a STRING-typed key
    pub fn get_string(&self, name: &str) -> Result<&str, ConfigError> {
        match self.declared(name)? {
            ConfigValue::String(s) => Ok(s),
            other => Err(wrong_type(name, ConfigType::String, other)),
        }
    }

    /// Integer value of an INT-typed key
    pub fn get_int(&self, name: &str) -> Result<i64, ConfigError> {
        match self.declared(name)? {
            ConfigValue::Int(i) => Ok(*i),
            other => Err(wrong_type(name, ConfigType::Int, other)),
        }
    }

    /// List value of a LIST-typed key
    pub fn get_list(&self, name: &str) -> Result<&[String], ConfigError> {
        match self.declared(name)? {
            ConfigValue::List(items) => Ok(items),
            other => Err(wrong_type(name, ConfigType::List, other)),
        }
    }

    /// Boolean value of a BOOLEAN-typed key
    pub fn get_boolean(&self, name: &str) -> Result<bool, ConfigError> {
        match self.declared(name)? {
            ConfigValue::Boolean(b) => Ok(*b),
            other => Err(wrong_type(name, ConfigType::Boolean, other)),
        }
    }

    fn declared(&self, name: &str) -> Result<&ConfigValue, ConfigError> {
        self.values.get(name).ok_or_else(|| ConfigError::UnknownKey {
            key: name.to_string(),
        })
    }

    /// Raw input keys not declared in the schema
    pub fn unused_keys(&self) -> &BTreeSet<String> {
        &self.unused_keys
    }

    /// Undeclared raw keys with their original string values, intended to be
    /// handed to a downstream connector-specific configuration schema.
    pub fn unused_properties(&self) -> HashMap<String, String> {
        self.unused_keys
            .iter()
            .filter_map(|key| {
                self.raw
                    .get(key)
                    .map(|value| (key.clone(), value.clone()))
            })
            .collect()
    }

    /// Log every resolved key and value at info level
    pub fn log_all(&self) {
        let mut names: Vec<&String> = self.values.keys().collect();
        names.sort();
        for name in names {
            info!("Configuration {} = {:?}", name, self.values[name]);
        }
    }

    /// Warn once per input key the schema does not declare
    pub fn log_unused(&self) {
        for key in &self.unused_keys {
            warn!("Configuration key '{}' is not a recognized system-level setting and was not used", key);
        }
    }
}

fn wrong_type(name: &str, expected: ConfigType, actual: &ConfigValue) -> ConfigError {
    ConfigError::WrongType {
        key: name.to_string(),
        expected,
        actual: actual.config_type(),
    }
}
