//! Layering a user override over the defaults and checking its shape.

use serde_json::{Map, Value};

use crate::error::{ConfigError, ConfigResult};
use crate::model::Configuration;

const SECTIONS: [&str; 4] = ["jira", "emoji", "subject", "description"];

const BOOLEAN_FIELDS: [(&str, &str); 5] = [
    ("jira", "enabled"),
    ("jira", "required"),
    ("jira", "allowNoJira"),
    ("emoji", "enabled"),
    ("description", "required"),
];

/// Merge `user` over `defaults`, one level deep.
///
/// Object values merge key-by-key with the matching default section; any
/// other value (scalar, array, null) replaces the default outright.
pub fn merge_over(user: &Map<String, Value>, defaults: &Value) -> Value {
    let mut merged = match defaults {
        Value::Object(map) => map.clone(),
        _ => Map::new(),
    };

    for (key, value) in user {
        let next = match value {
            Value::Object(overrides) => {
                let mut section = match defaults.get(key) {
                    Some(Value::Object(base)) => base.clone(),
                    _ => Map::new(),
                };
                section.extend(overrides.iter().map(|(k, v)| (k.clone(), v.clone())));
                Value::Object(section)
            }
            other => other.clone(),
        };
        merged.insert(key.clone(), next);
    }

    Value::Object(merged)
}

/// Check the types of every known field in a merged tree.
///
/// Returns one message per offending field; an empty list means the tree can
/// be deserialized into a [`Configuration`].
pub fn validate_shape(config: &Value) -> Vec<String> {
    let mut errors = Vec::new();

    for section in SECTIONS {
        match config.get(section) {
            None | Some(Value::Object(_)) => {}
            Some(_) => errors.push(format!("config.{section} must be an object")),
        }
    }

    for (section, field) in BOOLEAN_FIELDS {
        if let Some(value) = config.get(section).and_then(|s| s.get(field)) {
            if !value.is_boolean() {
                errors.push(format!("config.{section}.{field} must be a boolean"));
            }
        }
    }

    if let Some(value) = config.get("subject").and_then(|s| s.get("maxLength")) {
        if whole_length(value).is_none() {
            errors.push("config.subject.maxLength must be a positive integer".to_string());
        }
    }

    errors
}

/// A length of at least one, written either as an integer or as a float with
/// no fractional part (`50.0` from YAML or JSON).
fn whole_length(value: &Value) -> Option<u64> {
    if let Some(n) = value.as_u64() {
        return (n >= 1).then_some(n);
    }
    value
        .as_f64()
        .filter(|n| n.fract() == 0.0 && *n >= 1.0 && *n <= u32::MAX as f64)
        .map(|n| n as u64)
}

/// Merge a parsed user file over the defaults and produce a typed configuration.
///
/// The override is applied all-or-nothing: any shape error rejects it.
pub fn apply_override(user: Value) -> ConfigResult<Configuration> {
    let user = match user {
        Value::Object(map) => map,
        Value::Null => {
            return Err(ConfigError::Invalid(vec![
                "config file must export an object".to_string(),
            ]))
        }
        _ => {
            return Err(ConfigError::Invalid(vec![
                "config root must be an object".to_string(),
            ]))
        }
    };

    let mut merged = merge_over(&user, &Configuration::defaults_value());
    let errors = validate_shape(&merged);
    if !errors.is_empty() {
        return Err(ConfigError::Invalid(errors));
    }

    if let Some(length) = merged.get_mut("subject").and_then(|s| s.get_mut("maxLength")) {
        if let Some(n) = whole_length(length) {
            *length = Value::from(n);
        }
    }

    Ok(serde_json::from_value(merged)?)
}
