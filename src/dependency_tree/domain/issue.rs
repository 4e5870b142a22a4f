use super::ComponentId;
use crate::shared::Result;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Issue severity, ordered from least to most severe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Unknown,
    Information,
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Unknown => "unknown",
            Severity::Information => "information",
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
            Severity::Critical => "critical",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "unknown" => Ok(Severity::Unknown),
            "information" | "info" => Ok(Severity::Information),
            "low" => Ok(Severity::Low),
            "medium" => Ok(Severity::Medium),
            "high" => Ok(Severity::High),
            "critical" => Ok(Severity::Critical),
            _ => Err(format!(
                "Invalid severity: {}. Expected one of: unknown, information, low, medium, high, critical",
                s
            )),
        }
    }
}

/// What kind of problem the scanner reported
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueCategory {
    Vulnerability,
    License,
    OperationalRisk,
}

impl IssueCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueCategory::Vulnerability => "vulnerability",
            IssueCategory::License => "license",
            IssueCategory::OperationalRisk => "operational_risk",
        }
    }
}

impl fmt::Display for IssueCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for IssueCategory {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "vulnerability" | "security" => Ok(IssueCategory::Vulnerability),
            "license" => Ok(IssueCategory::License),
            "operational_risk" => Ok(IssueCategory::OperationalRisk),
            _ => Err(format!(
                "Invalid category: {}. Expected one of: vulnerability, license, operational_risk",
                s
            )),
        }
    }
}

/// A security or license finding attached to one dependency.
///
/// Issues are immutable value objects: equality, hashing and ordering take
/// every field into account, so the same finding raised against two
/// different components stays two distinct issues.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Issue {
    id: String,
    severity: Severity,
    category: IssueCategory,
    summary: String,
    affected_component: ComponentId,
}

impl Issue {
    pub fn new(
        id: impl Into<String>,
        severity: Severity,
        category: IssueCategory,
        summary: impl Into<String>,
        affected_component: ComponentId,
    ) -> Result<Self> {
        let id = id.into();
        if id.trim().is_empty() {
            anyhow::bail!("Issue id cannot be empty (affected component: {})", affected_component);
        }

        Ok(Self {
            id,
            severity,
            category,
            summary: summary.into(),
            affected_component,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn category(&self) -> IssueCategory {
        self.category
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }

    pub fn affected_component(&self) -> &ComponentId {
        &self.affected_component
    }
}
