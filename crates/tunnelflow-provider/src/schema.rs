//! Attribute schema declaration
//!
//! Providers, resources and data sources declare their configuration surface
//! as a flat map of string attributes. The orchestrator uses the schema for
//! plan rendering; the bootstrap uses [`Schema::validate`] for presence checks
//! before any network I/O happens.

use crate::error::{ProviderError, Result};
use serde_json::Value;
use std::collections::BTreeMap;

/// How an attribute participates in configuration and state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeMode {
    /// Must be supplied by the caller
    Required,
    /// May be supplied by the caller
    Optional,
    /// Assigned remotely; never supplied by the caller
    Computed,
}

/// A single string-typed attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attribute {
    pub mode: AttributeMode,
    /// Sensitive attributes are excluded from logs and plan output
    pub sensitive: bool,
}

impl Attribute {
    pub fn required() -> Self {
        Self {
            mode: AttributeMode::Required,
            sensitive: false,
        }
    }

    pub fn optional() -> Self {
        Self {
            mode: AttributeMode::Optional,
            sensitive: false,
        }
    }

    pub fn computed() -> Self {
        Self {
            mode: AttributeMode::Computed,
            sensitive: false,
        }
    }

    pub fn sensitive(mut self) -> Self {
        self.sensitive = true;
        self
    }
}

/// Declared attribute set for a provider, resource or data source
#[derive(Debug, Clone, Default)]
pub struct Schema {
    attributes: BTreeMap<String, Attribute>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_attribute(mut self, name: impl Into<String>, attribute: Attribute) -> Self {
        self.attributes.insert(name.into(), attribute);
        self
    }

    pub fn get(&self, name: &str) -> Option<&Attribute> {
        self.attributes.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Attribute)> {
        self.attributes.iter()
    }

    /// Check that every required attribute is present and non-empty.
    ///
    /// Unknown keys are ignored; the orchestrator owns full type checking.
    pub fn validate(&self, config: &Value) -> Result<()> {
        for (name, attribute) in &self.attributes {
            if attribute.mode != AttributeMode::Required {
                continue;
            }
            let missing = match config.get(name) {
                None | Some(Value::Null) => true,
                Some(Value::String(s)) => s.is_empty(),
                Some(_) => false,
            };
            if missing {
                return Err(ProviderError::InvalidConfig(format!(
                    "missing required attribute: {name}"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_schema() -> Schema {
        Schema::new()
            .with_attribute("api_token", Attribute::required().sensitive())
            .with_attribute("account_id", Attribute::required())
            .with_attribute("base_url", Attribute::optional())
            .with_attribute("id", Attribute::computed())
    }

    #[test]
    fn validate_accepts_complete_config() {
        let config = json!({"api_token": "t", "account_id": "a"});
        assert!(sample_schema().validate(&config).is_ok());
    }

    #[test]
    fn validate_rejects_missing_required() {
        let config = json!({"api_token": "t"});
        let err = sample_schema().validate(&config).unwrap_err();
        assert!(err.to_string().contains("account_id"));
    }

    #[test]
    fn validate_rejects_empty_required() {
        let config = json!({"api_token": "", "account_id": "a"});
        let err = sample_schema().validate(&config).unwrap_err();
        assert!(err.to_string().contains("api_token"));
    }

    #[test]
    fn validate_ignores_absent_optional_and_computed() {
        let config = json!({"api_token": "t", "account_id": "a"});
        assert!(sample_schema().validate(&config).is_ok());
    }

    #[test]
    fn sensitive_flag_is_preserved() {
        let schema = sample_schema();
        assert!(schema.get("api_token").unwrap().sensitive);
        assert!(!schema.get("account_id").unwrap().sensitive);
    }
}
