pub mod component;
pub mod exclusion;
pub mod issue;
pub mod navigation;
pub mod tree;

pub use component::{ComponentId, Ecosystem, NodeKind};
pub use exclusion::{ExclusionAction, ExclusionSyntax};
pub use issue::{Issue, IssueCategory, Severity};
pub use navigation::{DescriptorLocation, NavigationCandidate};
pub use tree::{DependencyNode, DependencyTree, NodeId, ProjectKey};
