use crate::dependency_tree::domain::{DependencyTree, ProjectKey};
use dashmap::DashMap;
use std::sync::Arc;
use tracing::debug;

/// ProjectRegistry holding the canonical tree of every scanned project
///
/// Trees are immutable once published. A new scan cycle publishes a
/// complete replacement; readers keep whatever snapshot they took, so a
/// concurrent publish never exposes a half-built tree.
#[derive(Debug, Default, Clone)]
pub struct ProjectRegistry {
    trees: Arc<DashMap<ProjectKey, Arc<DependencyTree>>>,
}

impl ProjectRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the project's tree, returning the snapshot it replaced
    pub fn publish(&self, tree: DependencyTree) -> Option<Arc<DependencyTree>> {
        let key = tree.project_key().clone();
        debug!(project = %key, nodes = tree.node_count(), "publishing tree");
        self.trees.insert(key, Arc::new(tree))
    }

    pub fn snapshot(&self, key: &ProjectKey) -> Option<Arc<DependencyTree>> {
        self.trees.get(key).map(|entry| Arc::clone(entry.value()))
    }

    pub fn remove(&self, key: &ProjectKey) -> Option<Arc<DependencyTree>> {
        self.trees.remove(key).map(|(_, tree)| tree)
    }

    /// Keys of all registered projects, sorted
    pub fn keys(&self) -> Vec<ProjectKey> {
        let mut keys: Vec<ProjectKey> = self.trees.iter().map(|e| e.key().clone()).collect();
        keys.sort();
        keys
    }

    pub fn len(&self) -> usize {
        self.trees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trees.is_empty()
    }
}
