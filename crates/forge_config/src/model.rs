//! Configuration data model.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Effective configuration for the grammar, validators, and formatter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Configuration {
    pub jira: JiraConfig,
    pub emoji: EmojiConfig,
    pub subject: SubjectConfig,
    pub description: DescriptionConfig,
    /// Unknown top-level keys from a user file. Preserved, never validated.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Issue-tracker segment settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JiraConfig {
    pub enabled: bool,
    pub required: bool,
    /// Accept the `NO-JIRA` sentinel in place of a real id.
    pub allow_no_jira: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmojiConfig {
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectConfig {
    pub max_length: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DescriptionConfig {
    pub required: bool,
}

impl Default for JiraConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            required: true,
            allow_no_jira: true,
        }
    }
}

impl Default for EmojiConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl Default for SubjectConfig {
    fn default() -> Self {
        Self { max_length: 72 }
    }
}

impl Default for DescriptionConfig {
    fn default() -> Self {
        Self { required: false }
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            jira: JiraConfig::default(),
            emoji: EmojiConfig::default(),
            subject: SubjectConfig::default(),
            description: DescriptionConfig::default(),
            extra: Map::new(),
        }
    }
}

impl Configuration {
    /// The defaults as a JSON tree, used as the base layer for merging.
    pub fn defaults_value() -> Value {
        // Serializing plain structs and a string-keyed map cannot fail.
        serde_json::to_value(Self::default()).unwrap_or(Value::Null)
    }

    pub fn with_jira(mut self, enabled: bool, required: bool, allow_no_jira: bool) -> Self {
        self.jira = JiraConfig {
            enabled,
            required,
            allow_no_jira,
        };
        self
    }

    pub fn with_emoji(mut self, enabled: bool) -> Self {
        self.emoji.enabled = enabled;
        self
    }

    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.subject.max_length = max_length;
        self
    }

    pub fn with_description_required(mut self, required: bool) -> Self {
        self.description.required = required;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_value_uses_camel_case() {
        let value = Configuration::defaults_value();
        assert_eq!(value["jira"]["allowNoJira"], Value::Bool(true));
        assert_eq!(value["subject"]["maxLength"], Value::from(72));
        assert!(value.get("extra").is_none());
    }

    #[test]
    fn test_unknown_top_level_keys_are_preserved() {
        let mut value = Configuration::defaults_value();
        value["team"] = Value::from("payments");

        let config: Configuration = serde_json::from_value(value).unwrap();
        assert_eq!(config.extra.get("team"), Some(&Value::from("payments")));
        assert_eq!(config.jira, JiraConfig::default());
    }
}
