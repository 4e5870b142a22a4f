use crate::shared::error::TreeError;
use crate::shared::Result;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Maximum length for component names (security limit)
const MAX_NAME_LENGTH: usize = 255;

/// Maximum length for component versions (security limit)
const MAX_VERSION_LENGTH: usize = 100;

/// Coordinates naming one dependency: `name@version`.
///
/// Names may carry a group (`org.acme:core`) or an npm scope (`@scope/pkg`);
/// the version is always whatever follows the last `@`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ComponentId {
    name: String,
    version: String,
}

impl ComponentId {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Result<Self> {
        let name = name.into();
        let version = version.into();

        validate_part(&name, "name", MAX_NAME_LENGTH)?;
        validate_part(&version, "version", MAX_VERSION_LENGTH)?;

        Ok(Self { name, version })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }
}

fn validate_part(value: &str, part: &str, max_length: usize) -> Result<()> {
    if value.is_empty() {
        anyhow::bail!("Component {} cannot be empty", part);
    }

    // Security: Length limit to prevent DoS
    if value.len() > max_length {
        anyhow::bail!(
            "Component {} is too long ({} bytes). Maximum allowed: {} bytes",
            part,
            value.len(),
            max_length
        );
    }

    if value.chars().any(|c| c.is_whitespace() || c.is_control()) {
        anyhow::bail!(
            "Component {} '{}' contains whitespace or control characters",
            part,
            value
        );
    }

    Ok(())
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.name, self.version)
    }
}

impl FromStr for ComponentId {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let (name, version) = s
            .rsplit_once('@')
            .filter(|(name, _)| !name.is_empty())
            .ok_or_else(|| TreeError::InvalidIdentity {
                value: s.to_string(),
                reason: "missing '@version' suffix".to_string(),
            })?;

        Self::new(name, version).map_err(|e| {
            TreeError::InvalidIdentity {
                value: s.to_string(),
                reason: e.to_string(),
            }
            .into()
        })
    }
}

/// Position of a node relative to the project's descriptors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// The scanned project itself
    Root,
    /// Declared explicitly in a project descriptor
    DirectDependency,
    /// Pulled in through another dependency
    TransitiveDependency,
}

impl NodeKind {
    pub fn label(&self) -> &'static str {
        match self {
            NodeKind::Root => "root",
            NodeKind::DirectDependency => "direct",
            NodeKind::TransitiveDependency => "transitive",
        }
    }
}

/// Package ecosystem a dependency (and the descriptor declaring it) belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ecosystem {
    Maven,
    Gradle,
    Npm,
    Go,
    Pypi,
    #[default]
    Other,
}

impl fmt::Display for Ecosystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Ecosystem::Maven => "maven",
            Ecosystem::Gradle => "gradle",
            Ecosystem::Npm => "npm",
            Ecosystem::Go => "go",
            Ecosystem::Pypi => "pypi",
            Ecosystem::Other => "other",
        };
        write!(f, "{}", name)
    }
}
