use crate::dependency_tree::domain::{DependencyTree, Issue, NodeId};
use crate::dependency_tree::policies::IssuePredicate;
use std::collections::BTreeSet;
use tracing::debug;

/// A source node that survived filtering, with its matching issues and
/// surviving children. Built first so the output tree is only written once
/// the keep/drop decision for a whole subtree is known.
struct Survivor {
    source: NodeId,
    issues: BTreeSet<Issue>,
    children: Vec<Survivor>,
}

/// TreeFilter service producing filtered views of a scanned tree
///
/// The source tree is never modified; every call builds a fresh tree.
pub struct TreeFilter;

impl TreeFilter {
    /// Builds the view of `source` restricted to issues matching `predicate`.
    ///
    /// - A node is kept when one of its own issues matches or one of its
    ///   descendants was kept; ancestor chains of matches are preserved.
    /// - Kept nodes carry only their matching own issues.
    /// - The root is always present. When nothing matches, the result is
    ///   the root alone with no issues.
    pub fn filter<P>(source: &DependencyTree, predicate: &P) -> DependencyTree
    where
        P: IssuePredicate + ?Sized,
    {
        let root = source.root_node();
        let root_issues = Self::matching_issues(root.own_issues(), predicate);
        let survivors: Vec<Survivor> = root
            .children()
            .iter()
            .filter_map(|&child| Self::prune(source, child, predicate))
            .collect();

        let mut filtered = source.empty_like(root_issues);
        let filtered_root = filtered.root();
        for survivor in survivors {
            Self::graft(source, &mut filtered, filtered_root, survivor);
        }

        debug!(
            project = %source.project_key(),
            kept = filtered.node_count(),
            total = source.node_count(),
            "filtered dependency tree"
        );
        filtered
    }

    fn prune<P>(source: &DependencyTree, id: NodeId, predicate: &P) -> Option<Survivor>
    where
        P: IssuePredicate + ?Sized,
    {
        let node = source.node(id)?;
        let issues = Self::matching_issues(node.own_issues(), predicate);
        let children: Vec<Survivor> = node
            .children()
            .iter()
            .filter_map(|&child| Self::prune(source, child, predicate))
            .collect();

        if issues.is_empty() && children.is_empty() {
            return None;
        }

        Some(Survivor {
            source: id,
            issues,
            children,
        })
    }

    fn graft(
        source: &DependencyTree,
        target: &mut DependencyTree,
        parent: NodeId,
        survivor: Survivor,
    ) {
        let Some(template) = source.node(survivor.source) else {
            return;
        };
        let id = target.graft(parent, template, survivor.issues);
        for child in survivor.children {
            Self::graft(source, target, id, child);
        }
    }

    fn matching_issues<P>(issues: &BTreeSet<Issue>, predicate: &P) -> BTreeSet<Issue>
    where
        P: IssuePredicate + ?Sized,
    {
        issues
            .iter()
            .filter(|issue| predicate.matches(issue))
            .cloned()
            .collect()
    }
}
