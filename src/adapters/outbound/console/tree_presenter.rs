use crate::dependency_tree::domain::{DependencyTree, Issue, NodeId, NodeKind, Severity};
use crate::dependency_tree::services::IssueAggregator;
use crate::ports::outbound::TreePresenter;
use owo_colors::OwoColorize;
use std::collections::{BTreeSet, HashMap};
use termtree::Tree;
use tracing::instrument;

/// TermTreePresenter adapter drawing a dependency tree with box characters
///
/// Each dependency line carries its kind and the highest severity found in
/// its subtree. Issues reported on a node are drawn as its first leaves.
pub struct TermTreePresenter {
    colored: bool,
}

impl TermTreePresenter {
    pub fn new(colored: bool) -> Self {
        Self { colored }
    }

    fn severity(&self, severity: Severity) -> String {
        if !self.colored {
            return severity.to_string();
        }
        match severity {
            Severity::Critical => severity.red().bold().to_string(),
            Severity::High => severity.red().to_string(),
            Severity::Medium => severity.yellow().to_string(),
            Severity::Low => severity.blue().to_string(),
            Severity::Information => severity.cyan().to_string(),
            Severity::Unknown => severity.dimmed().to_string(),
        }
    }

    fn node_label(&self, tree: &DependencyTree, id: NodeId, summary: &BTreeSet<Issue>) -> String {
        let Some(node) = tree.node(id) else {
            return String::new();
        };

        let mut label = match node.kind() {
            NodeKind::Root => node.identity().to_string(),
            kind => format!("{} [{}]", node.identity(), kind.label()),
        };
        if let Some(highest) = IssueAggregator::highest_severity(summary) {
            label.push_str(&format!(" ({})", self.severity(highest)));
        }
        label
    }

    fn issue_label(&self, issue: &Issue) -> String {
        let mut label = format!(
            "{} {} {}",
            issue.id(),
            self.severity(issue.severity()),
            issue.category()
        );
        if !issue.summary().is_empty() {
            label.push_str(&format!(": {}", issue.summary()));
        }
        label
    }

    fn build(
        &self,
        tree: &DependencyTree,
        id: NodeId,
        summaries: &HashMap<NodeId, BTreeSet<Issue>>,
    ) -> Tree<String> {
        let empty = BTreeSet::new();
        let summary = summaries.get(&id).unwrap_or(&empty);
        let mut rendered = Tree::new(self.node_label(tree, id, summary));

        if let Some(node) = tree.node(id) {
            for issue in node.own_issues() {
                rendered.push(Tree::new(self.issue_label(issue)));
            }
            for &child in node.children() {
                rendered.push(self.build(tree, child, summaries));
            }
        }
        rendered
    }
}

impl Default for TermTreePresenter {
    fn default() -> Self {
        Self::new(true)
    }
}

impl TreePresenter for TermTreePresenter {
    #[instrument(skip_all, fields(project = %tree.project_key()))]
    fn render(&self, tree: &DependencyTree) -> String {
        let summaries = IssueAggregator::aggregate_per_node(tree);
        self.build(tree, tree.root(), &summaries).to_string()
    }
}
