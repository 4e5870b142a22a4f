use super::{ComponentId, DescriptorLocation, Ecosystem, Issue, NodeKind};
use crate::shared::error::TreeError;
use crate::shared::Result;
use chrono::{DateTime, Utc};
use generational_arena::{Arena, Index};
use std::collections::BTreeSet;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::instrument;

/// Handle to a node inside one [`DependencyTree`].
///
/// Handles are only meaningful for the tree that issued them; a filtered
/// view is a new tree with its own handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(Index);

/// Identifies which scanned project a tree belongs to
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProjectKey {
    name: String,
    path: PathBuf,
}

impl ProjectKey {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl fmt::Display for ProjectKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.path.display())
    }
}

/// One dependency (or the project root) in the flattened dependency tree
#[derive(Debug, Clone)]
pub struct DependencyNode {
    identity: ComponentId,
    kind: NodeKind,
    ecosystem: Ecosystem,
    declared_at: Option<DescriptorLocation>,
    own_issues: BTreeSet<Issue>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl DependencyNode {
    fn new(
        identity: ComponentId,
        kind: NodeKind,
        ecosystem: Ecosystem,
        parent: Option<NodeId>,
    ) -> Self {
        Self {
            identity,
            kind,
            ecosystem,
            declared_at: None,
            own_issues: BTreeSet::new(),
            parent,
            children: Vec::new(),
        }
    }

    pub fn identity(&self) -> &ComponentId {
        &self.identity
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn ecosystem(&self) -> Ecosystem {
        self.ecosystem
    }

    /// Descriptor line declaring this node; only direct dependencies have one
    pub fn declared_at(&self) -> Option<&DescriptorLocation> {
        self.declared_at.as_ref()
    }

    pub fn own_issues(&self) -> &BTreeSet<Issue> {
        &self.own_issues
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    fn same_content(&self, other: &DependencyNode) -> bool {
        self.identity == other.identity
            && self.kind == other.kind
            && self.ecosystem == other.ecosystem
            && self.declared_at == other.declared_at
            && self.own_issues == other.own_issues
    }
}

/// DependencyTree aggregate: one scan result for one project.
///
/// Nodes live in an arena and refer to each other by [`NodeId`]; the
/// parent link is a plain handle, never ownership. The same logical
/// dependency appears once per distinct path from the root.
#[derive(Debug, Clone)]
pub struct DependencyTree {
    project_key: ProjectKey,
    scanned_at: DateTime<Utc>,
    arena: Arena<DependencyNode>,
    root: NodeId,
}

impl DependencyTree {
    pub fn new(project_key: ProjectKey, root_identity: ComponentId, ecosystem: Ecosystem) -> Self {
        let mut arena = Arena::new();
        let root = NodeId(arena.insert(DependencyNode::new(
            root_identity,
            NodeKind::Root,
            ecosystem,
            None,
        )));

        Self {
            project_key,
            scanned_at: Utc::now(),
            arena,
            root,
        }
    }

    pub fn with_scanned_at(mut self, scanned_at: DateTime<Utc>) -> Self {
        self.scanned_at = scanned_at;
        self
    }

    pub fn project_key(&self) -> &ProjectKey {
        &self.project_key
    }

    pub fn scanned_at(&self) -> DateTime<Utc> {
        self.scanned_at
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn root_node(&self) -> &DependencyNode {
        &self.arena[self.root.0]
    }

    pub fn node(&self, id: NodeId) -> Option<&DependencyNode> {
        self.arena.get(id.0)
    }

    fn node_mut(&mut self, id: NodeId) -> Result<&mut DependencyNode> {
        self.arena.get_mut(id.0).ok_or_else(|| {
            TreeError::UnknownNode {
                details: format!("{:?} does not belong to tree of {}", id, self.project_key),
            }
            .into()
        })
    }

    /// Adds a dependency below `parent`.
    ///
    /// Children of the root become direct dependencies, everything deeper
    /// is transitive.
    ///
    /// # Errors
    /// - `parent` is not a node of this tree
    /// - `parent` already has a child with the same identity
    pub fn add_dependency(
        &mut self,
        parent: NodeId,
        identity: ComponentId,
        ecosystem: Ecosystem,
    ) -> Result<NodeId> {
        let kind = if parent == self.root {
            NodeKind::DirectDependency
        } else {
            NodeKind::TransitiveDependency
        };

        let parent_node = self.node(parent).ok_or_else(|| TreeError::UnknownNode {
            details: format!("parent {:?} for '{}'", parent, identity),
        })?;

        if parent_node
            .children
            .iter()
            .filter_map(|&child| self.node(child))
            .any(|child| child.identity == identity)
        {
            return Err(TreeError::DuplicateChild {
                parent: parent_node.identity.to_string(),
                identity: identity.to_string(),
            }
            .into());
        }

        Ok(self.insert_child(
            parent,
            DependencyNode::new(identity, kind, ecosystem, Some(parent)),
        ))
    }

    fn insert_child(&mut self, parent: NodeId, node: DependencyNode) -> NodeId {
        let id = NodeId(self.arena.insert(node));
        if let Some(parent_node) = self.arena.get_mut(parent.0) {
            parent_node.children.push(id);
        }
        id
    }

    /// Records the descriptor line that declares a direct dependency
    pub fn declare(&mut self, node: NodeId, location: DescriptorLocation) -> Result<()> {
        let node = self.node_mut(node)?;
        if node.kind != NodeKind::DirectDependency {
            return Err(TreeError::InvalidDeclaration {
                identity: node.identity.to_string(),
                reason: format!(
                    "only direct dependencies are declared in a descriptor (node is {})",
                    node.kind.label()
                ),
            }
            .into());
        }
        node.declared_at = Some(location);
        Ok(())
    }

    pub fn attach_issue(&mut self, node: NodeId, issue: Issue) -> Result<()> {
        self.node_mut(node)?.own_issues.insert(issue);
        Ok(())
    }

    /// Attaches `issue` to every node whose identity is the issue's
    /// affected component. Returns the number of nodes it landed on.
    pub fn attach_issue_by_identity(&mut self, issue: &Issue) -> usize {
        let targets = self.find_all(issue.affected_component());
        for id in &targets {
            if let Some(node) = self.arena.get_mut(id.0) {
                node.own_issues.insert(issue.clone());
            }
        }
        targets.len()
    }

    /// A root-only tree for the same project and scan cycle, carrying
    /// `root_issues` as the root's own issues.
    pub(crate) fn empty_like(&self, root_issues: BTreeSet<Issue>) -> Self {
        let source = self.root_node();
        let mut tree = Self::new(
            self.project_key.clone(),
            source.identity.clone(),
            source.ecosystem,
        )
        .with_scanned_at(self.scanned_at);
        tree.arena[tree.root.0].own_issues = root_issues;
        tree
    }

    /// Copies `template` (minus its links) below `parent` with a replacement
    /// issue set. The kind and declaration are kept as-is, so this is only
    /// valid when `parent` mirrors the template's original parent.
    pub(crate) fn graft(
        &mut self,
        parent: NodeId,
        template: &DependencyNode,
        own_issues: BTreeSet<Issue>,
    ) -> NodeId {
        let node = DependencyNode {
            identity: template.identity.clone(),
            kind: template.kind,
            ecosystem: template.ecosystem,
            declared_at: template.declared_at.clone(),
            own_issues,
            parent: Some(parent),
            children: Vec::new(),
        };
        self.insert_child(parent, node)
    }

    /// Pre-order traversal, children left to right
    #[instrument(level = "trace", skip(self))]
    pub fn iter(&self) -> TreeIterator<'_> {
        TreeIterator {
            tree: self,
            stack: vec![self.root],
        }
    }

    /// Every node whose identity equals `identity`, in pre-order
    pub fn find_all(&self, identity: &ComponentId) -> Vec<NodeId> {
        self.iter()
            .filter(|(_, node)| node.identity() == identity)
            .map(|(id, _)| id)
            .collect()
    }

    /// Walks parent links upwards, starting at the parent of `id`
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_> {
        Ancestors {
            tree: self,
            next: self.node(id).and_then(|node| node.parent),
        }
    }

    /// Identities from the first node below the root down to `id`.
    /// Empty for the root itself or for a foreign handle.
    pub fn path_from_root(&self, id: NodeId) -> Vec<ComponentId> {
        if self.node(id).is_none() {
            return Vec::new();
        }

        let mut path: Vec<ComponentId> = std::iter::once(id)
            .chain(self.ancestors(id))
            .filter(|&node_id| node_id != self.root)
            .filter_map(|node_id| self.node(node_id))
            .map(|node| node.identity.clone())
            .collect();
        path.reverse();
        path
    }

    pub fn node_count(&self) -> usize {
        self.arena.len()
    }

    /// True when the root has neither children nor issues
    pub fn is_root_only(&self) -> bool {
        let root = self.root_node();
        root.children.is_empty() && root.own_issues.is_empty()
    }

    pub fn depth(&self) -> usize {
        self.depth_below(self.root)
    }

    fn depth_below(&self, id: NodeId) -> usize {
        self.node(id)
            .map(|node| {
                1 + node
                    .children
                    .iter()
                    .map(|&child| self.depth_below(child))
                    .max()
                    .unwrap_or(0)
            })
            .unwrap_or(0)
    }

    fn subtree_eq(&self, id: NodeId, other: &DependencyTree, other_id: NodeId) -> bool {
        match (self.node(id), other.node(other_id)) {
            (Some(a), Some(b)) => {
                a.same_content(b)
                    && a.children.len() == b.children.len()
                    && a.children
                        .iter()
                        .zip(&b.children)
                        .all(|(&x, &y)| self.subtree_eq(x, other, y))
            }
            _ => false,
        }
    }
}

/// Structural equality: same project and the same nodes in the same order.
/// Arena slots and scan timestamps are not compared.
impl PartialEq for DependencyTree {
    fn eq(&self, other: &Self) -> bool {
        self.project_key == other.project_key && self.subtree_eq(self.root, other, other.root)
    }
}

impl Eq for DependencyTree {}

pub struct TreeIterator<'a> {
    tree: &'a DependencyTree,
    stack: Vec<NodeId>,
}

impl<'a> Iterator for TreeIterator<'a> {
    type Item = (NodeId, &'a DependencyNode);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(current) = self.stack.pop() {
            if let Some(node) = self.tree.node(current) {
                // Push children in reverse order for left-to-right traversal
                self.stack.extend(node.children.iter().rev());
                return Some((current, node));
            }
        }
        None
    }
}

pub struct Ancestors<'a> {
    tree: &'a DependencyTree,
    next: Option<NodeId>,
}

impl Iterator for Ancestors<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = self.tree.node(current).and_then(|node| node.parent);
        Some(current)
    }
}
