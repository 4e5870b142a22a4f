use super::{ComponentId, NodeId};
use std::fmt;
use std::path::{Path, PathBuf};

/// A line in a project descriptor (pom.xml, build.gradle, package.json, ...)
///
/// `line` is zero-based, matching editor offsets; use [`display_line`] for
/// anything shown to a person.
///
/// [`display_line`]: DescriptorLocation::display_line
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DescriptorLocation {
    file: PathBuf,
    line: usize,
}

impl DescriptorLocation {
    pub fn new(file: impl Into<PathBuf>, line: usize) -> Self {
        Self {
            file: file.into(),
            line,
        }
    }

    pub fn file(&self) -> &Path {
        &self.file
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn display_line(&self) -> usize {
        self.line + 1
    }
}

impl fmt::Display for DescriptorLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file.display(), self.display_line())
    }
}

/// One editable place that produced a dependency on one concrete path.
///
/// `anchor` is the direct dependency whose declaration `descriptor_location`
/// points at. For a direct dependency the anchor is the node itself;
/// for a transitive one it is the nearest declared ancestor on that path.
/// `target_node` always refers to the originally selected instance.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NavigationCandidate {
    descriptor_location: DescriptorLocation,
    path_from_root: Vec<ComponentId>,
    anchor: ComponentId,
    anchor_node: NodeId,
    target_node: NodeId,
}

impl NavigationCandidate {
    pub fn new(
        descriptor_location: DescriptorLocation,
        path_from_root: Vec<ComponentId>,
        anchor: ComponentId,
        anchor_node: NodeId,
        target_node: NodeId,
    ) -> Self {
        Self {
            descriptor_location,
            path_from_root,
            anchor,
            anchor_node,
            target_node,
        }
    }

    pub fn descriptor_location(&self) -> &DescriptorLocation {
        &self.descriptor_location
    }

    /// Identities from the first node below the root down to the target
    pub fn path_from_root(&self) -> &[ComponentId] {
        &self.path_from_root
    }

    pub fn anchor(&self) -> &ComponentId {
        &self.anchor
    }

    pub fn anchor_node(&self) -> NodeId {
        self.anchor_node
    }

    pub fn target_node(&self) -> NodeId {
        self.target_node
    }

    /// Whether the target is declared directly at this location
    pub fn is_direct(&self) -> bool {
        self.anchor_node == self.target_node
    }
}
