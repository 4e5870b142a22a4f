use crate::dependency_tree::domain::{ComponentId, DependencyTree, NavigationCandidate, NodeId};
use std::collections::HashSet;
use tracing::debug;

/// PathResolver service mapping a dependency to the descriptor lines
/// that produced it.
///
/// The tree duplicates a dependency once per path, so resolution scans the
/// whole tree by identity and resolves each instance on its own path.
pub struct PathResolver;

impl PathResolver {
    /// One candidate per instance of `target` that has a navigable anchor.
    ///
    /// An unknown identity, or instances with no declared ancestor, give an
    /// empty set. The set has no defined order.
    pub fn resolve_navigation(
        tree: &DependencyTree,
        target: &ComponentId,
    ) -> HashSet<NavigationCandidate> {
        let instances = tree.find_all(target);
        let candidates: HashSet<NavigationCandidate> = instances
            .iter()
            .filter_map(|&instance| Self::resolve_instance(tree, instance))
            .collect();

        debug!(
            target = %target,
            instances = instances.len(),
            candidates = candidates.len(),
            "resolved navigation candidates"
        );
        candidates
    }

    /// Resolves a single tree instance on its own path
    pub fn resolve_instance(tree: &DependencyTree, node: NodeId) -> Option<NavigationCandidate> {
        let anchor_id = Self::navigable_parent(tree, node)?;
        let anchor = tree.node(anchor_id)?;
        let location = anchor.declared_at()?.clone();

        Some(NavigationCandidate::new(
            location,
            tree.path_from_root(node),
            anchor.identity().clone(),
            anchor_id,
            node,
        ))
    }

    /// The node itself when it is declared in a descriptor, otherwise the
    /// nearest ancestor that is.
    pub fn navigable_parent(tree: &DependencyTree, node: NodeId) -> Option<NodeId> {
        tree.node(node)?;
        std::iter::once(node)
            .chain(tree.ancestors(node))
            .find(|&id| tree.node(id).is_some_and(|n| n.declared_at().is_some()))
    }
}
