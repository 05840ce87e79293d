use std::collections::BTreeMap;

use serde::Deserialize;

use crate::classify::single_scalar;

/// Raw mapping table as written in TOML, before the reverse table is derived.
#[derive(Debug, Clone, Deserialize)]
pub struct TableConfig {
    pub forward: BTreeMap<String, String>,
    #[serde(default)]
    pub reverse_overrides: BTreeMap<String, String>,
    #[serde(default)]
    pub reorder: Vec<ReorderConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReorderConfig {
    pub trigger: String,
    pub matra: String,
}

#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[forward] table is empty")]
    EmptyForward,
    #[error("[{section}] key must be a single character: {key:?}")]
    MultiCharKey { section: &'static str, key: String },
    #[error("[{section}] empty value for key: {key:?}")]
    EmptyValue { section: &'static str, key: String },
    #[error("invalid reorder rule with trigger {trigger:?}: {reason}")]
    InvalidReorder { trigger: String, reason: String },
    #[error("preeti table already initialized")]
    AlreadyInitialized,
}

impl TableConfig {
    /// Check the shape of every entry. Rules that depend on the derived
    /// consonant set are checked when the tables are built.
    pub fn validate(&self) -> Result<(), TableError> {
        if self.forward.is_empty() {
            return Err(TableError::EmptyForward);
        }
        check_entries("forward", &self.forward)?;
        check_entries("reverse_overrides", &self.reverse_overrides)?;

        for rule in &self.reorder {
            if single_scalar(&rule.trigger).is_none() {
                return Err(TableError::InvalidReorder {
                    trigger: rule.trigger.clone(),
                    reason: "trigger must be a single character".to_string(),
                });
            }
            if single_scalar(&rule.matra).is_none() {
                return Err(TableError::InvalidReorder {
                    trigger: rule.trigger.clone(),
                    reason: "matra must be a single character".to_string(),
                });
            }
        }
        Ok(())
    }
}

fn check_entries(
    section: &'static str,
    entries: &BTreeMap<String, String>,
) -> Result<(), TableError> {
    for (key, value) in entries {
        if single_scalar(key).is_none() {
            return Err(TableError::MultiCharKey {
                section,
                key: key.clone(),
            });
        }
        if value.is_empty() {
            return Err(TableError::EmptyValue {
                section,
                key: key.clone(),
            });
        }
    }
    Ok(())
}

/// Parse and validate a mapping table TOML document.
pub fn parse_table_toml(toml_str: &str) -> Result<TableConfig, TableError> {
    let config: TableConfig =
        toml::from_str(toml_str).map_err(|e| TableError::Parse(e.to_string()))?;
    config.validate()?;
    Ok(config)
}
