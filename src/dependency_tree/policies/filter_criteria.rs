use crate::dependency_tree::domain::{Issue, IssueCategory, Severity};
use std::collections::BTreeSet;

/// Decides whether one issue belongs to the active filter.
///
/// Implemented for [`FilterCriteria`] and for any `Fn(&Issue) -> bool`.
pub trait IssuePredicate {
    fn matches(&self, issue: &Issue) -> bool;
}

impl<F> IssuePredicate for F
where
    F: Fn(&Issue) -> bool,
{
    fn matches(&self, issue: &Issue) -> bool {
        self(issue)
    }
}

/// The user's active issue filter.
///
/// Each populated dimension narrows the selection; an issue must satisfy
/// all of them. Criteria with every dimension empty select every issue.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    severities: BTreeSet<Severity>,
    categories: BTreeSet<IssueCategory>,
    issue_ids: BTreeSet<String>,
    min_severity: Option<Severity>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_severities(mut self, severities: impl IntoIterator<Item = Severity>) -> Self {
        self.severities = severities.into_iter().collect();
        self
    }

    pub fn with_categories(mut self, categories: impl IntoIterator<Item = IssueCategory>) -> Self {
        self.categories = categories.into_iter().collect();
        self
    }

    pub fn with_issue_ids<S: Into<String>>(mut self, ids: impl IntoIterator<Item = S>) -> Self {
        self.issue_ids = ids.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_min_severity(mut self, min_severity: Severity) -> Self {
        self.min_severity = Some(min_severity);
        self
    }

    pub fn severities(&self) -> &BTreeSet<Severity> {
        &self.severities
    }

    pub fn categories(&self) -> &BTreeSet<IssueCategory> {
        &self.categories
    }

    pub fn issue_ids(&self) -> &BTreeSet<String> {
        &self.issue_ids
    }

    pub fn min_severity(&self) -> Option<Severity> {
        self.min_severity
    }

    /// True when no dimension is populated
    pub fn is_unrestricted(&self) -> bool {
        self.severities.is_empty()
            && self.categories.is_empty()
            && self.issue_ids.is_empty()
            && self.min_severity.is_none()
    }

    /// Dimension-wise override: every dimension populated in `overrides`
    /// replaces the one in `self`.
    pub fn overridden_by(mut self, overrides: &FilterCriteria) -> Self {
        if !overrides.severities.is_empty() {
            self.severities = overrides.severities.clone();
        }
        if !overrides.categories.is_empty() {
            self.categories = overrides.categories.clone();
        }
        if !overrides.issue_ids.is_empty() {
            self.issue_ids = overrides.issue_ids.clone();
        }
        if overrides.min_severity.is_some() {
            self.min_severity = overrides.min_severity;
        }
        self
    }
}

impl IssuePredicate for FilterCriteria {
    fn matches(&self, issue: &Issue) -> bool {
        (self.severities.is_empty() || self.severities.contains(&issue.severity()))
            && (self.categories.is_empty() || self.categories.contains(&issue.category()))
            && (self.issue_ids.is_empty() || self.issue_ids.contains(issue.id()))
            && self
                .min_severity
                .map_or(true, |min| issue.severity() >= min)
    }
}
