//! Configuration file support for deptrace.
//!
//! Provides YAML-based filter configuration through `deptrace.config.yml`
//! files, including data structures, file loading, and validation.

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;
use tracing::warn;

use crate::dependency_tree::domain::{IssueCategory, Severity};
use crate::dependency_tree::policies::FilterCriteria;
use crate::shared::error::TreeError;
use crate::shared::security::read_checked;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "deptrace.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub severities: Option<Vec<String>>,
    pub categories: Option<Vec<String>>,
    pub issues: Option<Vec<String>>,
    pub min_severity: Option<String>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// Converts the raw file values into filter criteria.
    ///
    /// # Errors
    /// Returns a `ConfigError` naming the first invalid severity or category.
    pub fn to_criteria(&self) -> Result<FilterCriteria> {
        let mut criteria = FilterCriteria::new();

        if let Some(ref severities) = self.severities {
            criteria = criteria.with_severities(parse_all::<Severity>(severities, "severities")?);
        }
        if let Some(ref categories) = self.categories {
            criteria =
                criteria.with_categories(parse_all::<IssueCategory>(categories, "categories")?);
        }
        if let Some(ref issues) = self.issues {
            criteria = criteria.with_issue_ids(issues.iter().map(|id| id.trim().to_string()));
        }
        if let Some(ref min_severity) = self.min_severity {
            let min = min_severity
                .parse::<Severity>()
                .map_err(|details| config_error("min_severity", details))?;
            criteria = criteria.with_min_severity(min);
        }

        Ok(criteria)
    }
}

fn parse_all<T>(values: &[String], field: &str) -> Result<Vec<T>>
where
    T: FromStr<Err = String>,
{
    values
        .iter()
        .enumerate()
        .map(|(i, value)| {
            value
                .parse::<T>()
                .map_err(|details| config_error(&format!("{}[{}]", field, i), details))
        })
        .collect()
}

fn config_error(field: &str, details: String) -> anyhow::Error {
    TreeError::ConfigError {
        details: format!("{}: {}", field, details),
        hint: format!("Fix the '{}' entry in {}", field, CONFIG_FILENAME),
    }
    .into()
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = read_checked(path, "config file").with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config, path);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref issues) = config.issues {
        for (i, id) in issues.iter().enumerate() {
            if id.trim().is_empty() {
                return Err(TreeError::ConfigError {
                    details: format!("issues[{}] must not be empty", i),
                    hint: "Each issues entry must be an issue id (e.g., \"CVE-2024-1234\").".to_string(),
                }
                .into());
            }
        }
    }

    // Surface invalid enum names at load time rather than at first filter run
    config.to_criteria().map(|_| ())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile, path: &Path) {
    for key in config.unknown_fields.keys() {
        warn!(
            field = %key,
            config = %path.display(),
            "Unknown config field will be ignored"
        );
    }
}
