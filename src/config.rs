//! Index configuration.
//!
//! JS callers pass a plain object with optional fields; it is deserialized
//! into [`JsIndexConfig`] and merged with defaults into the concrete
//! [`IndexConfig`] used by the builders.

use serde::{Deserialize, Serialize};

/// JS-facing configuration with every field optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JsIndexConfig {
    /// Use the parallel builder for large texts (requires the `parallel`
    /// feature; ignored otherwise).
    pub parallel: Option<bool>,
    /// Re-validate the permutation invariant after construction.
    pub validate: Option<bool>,
}

impl JsIndexConfig {
    /// Fill unset fields with defaults.
    pub fn merge_with_defaults(&self) -> IndexConfig {
        let defaults = IndexConfig::default();
        IndexConfig {
            parallel: self.parallel.unwrap_or(defaults.parallel),
            validate: self.validate.unwrap_or(defaults.validate),
        }
    }
}

/// Resolved configuration for index construction.
#[derive(Debug, Clone)]
pub struct IndexConfig {
    /// Use the parallel builder when the input is large enough.
    pub parallel: bool,
    /// Re-validate the permutation invariant after construction.
    pub validate: bool,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            parallel: true,
            validate: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_empty_uses_defaults() {
        let config = JsIndexConfig::default().merge_with_defaults();
        assert!(config.parallel);
        assert!(!config.validate);
    }

    #[test]
    fn test_merge_keeps_explicit_fields() {
        let js = JsIndexConfig {
            parallel: Some(false),
            validate: Some(true),
        };
        let config = js.merge_with_defaults();
        assert!(!config.parallel);
        assert!(config.validate);
    }

    #[test]
    fn test_deserialize_camel_case() {
        let js: JsIndexConfig = serde_json::from_str(r#"{"parallel": false}"#).unwrap();
        assert_eq!(js.parallel, Some(false));
        assert_eq!(js.validate, None);
    }
}
