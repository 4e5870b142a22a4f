use crate::dependency_tree::domain::{DependencyTree, Issue, Severity};
use crate::dependency_tree::services::IssueAggregator;
use std::collections::BTreeSet;

/// Result of one filter run: the pruned tree plus the issues left in it
#[derive(Debug, Clone)]
pub struct FilteredView {
    pub tree: DependencyTree,
    pub summary: BTreeSet<Issue>,
}

impl FilteredView {
    pub fn new(tree: DependencyTree) -> Self {
        let summary = IssueAggregator::aggregate(&tree, tree.root());
        Self { tree, summary }
    }

    pub fn has_issues(&self) -> bool {
        !self.summary.is_empty()
    }

    pub fn highest_severity(&self) -> Option<Severity> {
        IssueAggregator::highest_severity(&self.summary)
    }
}
