//! deptrace - trace dependency issues back to project descriptors
//!
//! This library models a scanned dependency tree annotated with issues
//! (vulnerabilities, license violations, operational risk), filters it,
//! and resolves every descriptor line through which a dependency entered
//! the project, following hexagonal architecture and Domain-Driven Design
//! principles.
//!
//! # Architecture
//!
//! - **Domain Layer** (`dependency_tree`): tree model, filter policies and
//!   the aggregation, filtering, navigation and exclusion services
//! - **Application Layer** (`application`): use cases, registry and read models
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use deptrace::prelude::*;
//! use std::path::Path;
//!
//! # fn main() -> Result<()> {
//! let tree = JsonScanReader::new().read_scan(Path::new("scan.json"))?;
//! let project = tree.project_key().clone();
//!
//! let registry = ProjectRegistry::new();
//! registry.publish(tree);
//!
//! let criteria = FilterCriteria::new().with_min_severity(Severity::High);
//! let view = ApplyFiltersUseCase::new(registry, criteria)
//!     .execute(&project)?
//!     .expect("tree was just published");
//!
//! println!("{}", TermTreePresenter::new(false).render(&view.tree));
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod dependency_tree;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::{
        ConsoleNavigator, DryRunExclusionEditor, TermTreePresenter,
    };
    pub use crate::adapters::outbound::filesystem::{
        FileSystemDescriptorPaths, FileSystemWriter, JsonScanReader, StdoutPresenter,
        YamlCriteriaSource,
    };
    pub use crate::application::dto::FilteredView;
    pub use crate::application::read_models::{ContextMenu, MenuAction, MenuEntry, MenuItem};
    pub use crate::application::use_cases::{ApplyFiltersUseCase, BuildContextMenuUseCase};
    pub use crate::application::ProjectRegistry;
    pub use crate::dependency_tree::domain::{
        ComponentId, DependencyNode, DependencyTree, DescriptorLocation, Ecosystem,
        ExclusionAction, ExclusionSyntax, Issue, IssueCategory, NavigationCandidate, NodeId,
        NodeKind, ProjectKey, Severity,
    };
    pub use crate::dependency_tree::policies::{FilterCriteria, IssuePredicate};
    pub use crate::dependency_tree::services::{
        ExclusionAdvisor, IssueAggregator, PathResolver, TreeFilter,
    };
    pub use crate::ports::outbound::{
        DescriptorNavigator, DescriptorPathRenderer, ExclusionEditor, FilterCriteriaSource,
        OutputPresenter, ScanResultReader, TreePresenter,
    };
    pub use crate::shared::Result;
}
