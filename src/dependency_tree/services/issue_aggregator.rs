use crate::dependency_tree::domain::{DependencyTree, Issue, NodeId, Severity};
use std::collections::{BTreeSet, HashMap};

/// IssueAggregator service computing transitive issue sets
///
/// Pure business logic: it only reads the tree.
pub struct IssueAggregator;

impl IssueAggregator {
    /// Union of the node's own issues and those of all its descendants.
    /// A handle that is not part of `tree` aggregates to the empty set.
    pub fn aggregate(tree: &DependencyTree, node: NodeId) -> BTreeSet<Issue> {
        let mut issues = BTreeSet::new();
        Self::collect(tree, node, &mut issues);
        issues
    }

    fn collect(tree: &DependencyTree, id: NodeId, issues: &mut BTreeSet<Issue>) {
        if let Some(node) = tree.node(id) {
            issues.extend(node.own_issues().iter().cloned());
            for &child in node.children() {
                Self::collect(tree, child, issues);
            }
        }
    }

    /// Aggregated issues for every node in a single bottom-up pass
    pub fn aggregate_per_node(tree: &DependencyTree) -> HashMap<NodeId, BTreeSet<Issue>> {
        let mut per_node = HashMap::with_capacity(tree.node_count());
        Self::fill(tree, tree.root(), &mut per_node);
        per_node
    }

    fn fill(
        tree: &DependencyTree,
        id: NodeId,
        per_node: &mut HashMap<NodeId, BTreeSet<Issue>>,
    ) -> BTreeSet<Issue> {
        let Some(node) = tree.node(id) else {
            return BTreeSet::new();
        };

        let mut issues = node.own_issues().clone();
        for &child in node.children() {
            issues.extend(Self::fill(tree, child, per_node));
        }
        per_node.insert(id, issues.clone());
        issues
    }

    pub fn highest_severity<'a>(issues: impl IntoIterator<Item = &'a Issue>) -> Option<Severity> {
        issues.into_iter().map(Issue::severity).max()
    }
}
