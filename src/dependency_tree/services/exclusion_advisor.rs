use crate::dependency_tree::domain::{
    DependencyTree, ExclusionAction, NavigationCandidate, NodeId, NodeKind,
};
use std::collections::HashMap;
use tracing::trace;

/// ExclusionAdvisor service deciding which navigation candidates can also
/// offer "exclude this dependency".
///
/// A candidate that cannot be excluded is simply left out of the result;
/// that is an expected outcome, not an error.
pub struct ExclusionAdvisor;

impl ExclusionAdvisor {
    /// Maps each excludable candidate to the action that performs it
    pub fn resolve_exclusions<'a>(
        tree: &DependencyTree,
        candidates: impl IntoIterator<Item = &'a NavigationCandidate>,
    ) -> HashMap<NavigationCandidate, ExclusionAction> {
        candidates
            .into_iter()
            .filter_map(|candidate| {
                Self::exclusion_for(tree, candidate).map(|action| (candidate.clone(), action))
            })
            .collect()
    }

    /// Builds the exclusion of the candidate's target from under its anchor.
    ///
    /// Returns `None` when the anchor's ecosystem has no exclusion syntax or
    /// the pair is not structurally excludable.
    pub fn exclusion_for(
        tree: &DependencyTree,
        candidate: &NavigationCandidate,
    ) -> Option<ExclusionAction> {
        let target_id = candidate.target_node();
        let affected_id = candidate.anchor_node();

        if !Self::is_excludable(tree, target_id, affected_id) {
            trace!(
                location = %candidate.descriptor_location(),
                "candidate is not structurally excludable"
            );
            return None;
        }

        let affected = tree.node(affected_id)?;
        let Some(syntax) = affected.ecosystem().exclusion_syntax() else {
            trace!(
                ecosystem = %affected.ecosystem(),
                "ecosystem has no exclusion syntax"
            );
            return None;
        };

        let target = tree.node(target_id)?;
        Some(ExclusionAction::new(
            target.identity().clone(),
            affected.identity().clone(),
            candidate.descriptor_location().clone(),
            syntax,
        ))
    }

    /// `target` can be excluded under `affected` when `affected` is a direct
    /// dependency and a strict ancestor of `target`.
    pub fn is_excludable(tree: &DependencyTree, target: NodeId, affected: NodeId) -> bool {
        if target == affected {
            return false;
        }

        let direct = tree
            .node(affected)
            .is_some_and(|node| node.kind() == NodeKind::DirectDependency);

        direct && tree.ancestors(target).any(|ancestor| ancestor == affected)
    }
}
