use crate::config::{discover_config, load_config_from_path};
use crate::dependency_tree::policies::FilterCriteria;
use crate::ports::outbound::FilterCriteriaSource;
use crate::shared::Result;
use std::path::PathBuf;
use tracing::debug;

#[derive(Debug, Clone)]
enum ConfigLocation {
    /// `--config` was given; the file must exist
    Explicit(PathBuf),
    /// Look for `deptrace.config.yml` in this directory
    Discover(PathBuf),
}

/// YamlCriteriaSource adapter reading filter criteria from `deptrace.config.yml`
///
/// The file is read again on every call so edits made between two filter
/// runs take effect without restarting. Criteria given on the command line
/// override the file dimension by dimension.
#[derive(Debug, Clone)]
pub struct YamlCriteriaSource {
    location: ConfigLocation,
    overrides: FilterCriteria,
}

impl YamlCriteriaSource {
    /// Reads criteria from an explicit config file
    pub fn explicit(path: impl Into<PathBuf>) -> Self {
        Self {
            location: ConfigLocation::Explicit(path.into()),
            overrides: FilterCriteria::new(),
        }
    }

    /// Reads criteria from `deptrace.config.yml` in `dir` if present
    pub fn discover(dir: impl Into<PathBuf>) -> Self {
        Self {
            location: ConfigLocation::Discover(dir.into()),
            overrides: FilterCriteria::new(),
        }
    }

    pub fn with_overrides(mut self, overrides: FilterCriteria) -> Self {
        self.overrides = overrides;
        self
    }
}

impl FilterCriteriaSource for YamlCriteriaSource {
    fn current_criteria(&self) -> Result<FilterCriteria> {
        let from_file = match &self.location {
            ConfigLocation::Explicit(path) => load_config_from_path(path)?.to_criteria()?,
            ConfigLocation::Discover(dir) => match discover_config(dir)? {
                Some(config) => config.to_criteria()?,
                None => {
                    debug!(dir = %dir.display(), "no config file found, using defaults");
                    FilterCriteria::new()
                }
            },
        };

        Ok(from_file.overridden_by(&self.overrides))
    }
}
