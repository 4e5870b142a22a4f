use crate::application::dto::FilteredView;
use crate::application::project_registry::ProjectRegistry;
use crate::dependency_tree::domain::ProjectKey;
use crate::dependency_tree::services::TreeFilter;
use crate::ports::outbound::FilterCriteriaSource;
use crate::shared::Result;
use tracing::{debug, instrument};

/// ApplyFiltersUseCase - Produces the filtered view of a project's tree
///
/// The canonical tree is never modified; each run clones the snapshot it
/// filters. Criteria are fetched from the source on every run.
///
/// # Type Parameters
/// * `S` - FilterCriteriaSource implementation
pub struct ApplyFiltersUseCase<S: FilterCriteriaSource> {
    registry: ProjectRegistry,
    criteria_source: S,
}

impl<S: FilterCriteriaSource> ApplyFiltersUseCase<S> {
    pub fn new(registry: ProjectRegistry, criteria_source: S) -> Self {
        Self {
            registry,
            criteria_source,
        }
    }

    /// Filters the current tree of `project`
    ///
    /// # Returns
    /// `None` when no tree has been published for `project`
    ///
    /// # Errors
    /// Returns an error if the criteria cannot be read
    #[instrument(skip_all, fields(project = %project))]
    pub fn execute(&self, project: &ProjectKey) -> Result<Option<FilteredView>> {
        let Some(snapshot) = self.registry.snapshot(project) else {
            debug!("no tree published for project");
            return Ok(None);
        };

        let criteria = self.criteria_source.current_criteria()?;
        let filtered = TreeFilter::filter(&snapshot, &criteria);
        let view = FilteredView::new(filtered);

        debug!(
            remaining_nodes = view.tree.node_count(),
            remaining_issues = view.summary.len(),
            "filters applied"
        );
        Ok(Some(view))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dependency_tree::domain::{
        DependencyTree, Ecosystem, Issue, IssueCategory, Severity,
    };
    use crate::dependency_tree::policies::FilterCriteria;
    use std::cell::Cell;

    struct CountingSource {
        criteria: FilterCriteria,
        calls: Cell<usize>,
    }

    impl FilterCriteriaSource for CountingSource {
        fn current_criteria(&self) -> Result<FilterCriteria> {
            self.calls.set(self.calls.get() + 1);
            Ok(self.criteria.clone())
        }
    }

    struct FailingSource;

    impl FilterCriteriaSource for FailingSource {
        fn current_criteria(&self) -> Result<FilterCriteria> {
            anyhow::bail!("config unreadable")
        }
    }

    fn shop_key() -> ProjectKey {
        ProjectKey::new("shop", "/shop")
    }

    fn issue(id: &str, severity: Severity, component: &str) -> Issue {
        Issue::new(
            id,
            severity,
            IssueCategory::Vulnerability,
            "",
            component.parse().unwrap(),
        )
        .unwrap()
    }

    fn registry_with_shop() -> ProjectRegistry {
        let mut tree = DependencyTree::new(
            shop_key(),
            "shop@1.0".parse().unwrap(),
            Ecosystem::Maven,
        );
        let a = tree
            .add_dependency(tree.root(), "a@1".parse().unwrap(), Ecosystem::Maven)
            .unwrap();
        let b = tree
            .add_dependency(tree.root(), "b@1".parse().unwrap(), Ecosystem::Maven)
            .unwrap();
        tree.attach_issue(a, issue("CVE-LOW", Severity::Low, "a@1"))
            .unwrap();
        tree.attach_issue(b, issue("CVE-HIGH", Severity::High, "b@1"))
            .unwrap();

        let registry = ProjectRegistry::new();
        registry.publish(tree);
        registry
    }

    #[test]
    fn test_unknown_project_gives_none() {
        let use_case = ApplyFiltersUseCase::new(ProjectRegistry::new(), FilterCriteria::new());
        assert!(use_case.execute(&shop_key()).unwrap().is_none());
    }

    #[test]
    fn test_filters_with_current_criteria() {
        let source = CountingSource {
            criteria: FilterCriteria::new().with_min_severity(Severity::High),
            calls: Cell::new(0),
        };
        let registry = registry_with_shop();
        let use_case = ApplyFiltersUseCase::new(registry.clone(), source);

        let view = use_case.execute(&shop_key()).unwrap().unwrap();

        assert_eq!(view.tree.node_count(), 2);
        assert_eq!(view.summary.len(), 1);
        assert_eq!(view.highest_severity(), Some(Severity::High));
        // Canonical tree untouched
        assert_eq!(registry.snapshot(&shop_key()).unwrap().node_count(), 3);
    }

    #[test]
    fn test_criteria_are_read_on_every_run() {
        let source = CountingSource {
            criteria: FilterCriteria::new(),
            calls: Cell::new(0),
        };
        let use_case = ApplyFiltersUseCase::new(registry_with_shop(), source);

        use_case.execute(&shop_key()).unwrap();
        use_case.execute(&shop_key()).unwrap();

        assert_eq!(use_case.criteria_source.calls.get(), 2);
    }

    #[test]
    fn test_criteria_failure_propagates() {
        let use_case = ApplyFiltersUseCase::new(registry_with_shop(), FailingSource);
        let err = use_case.execute(&shop_key()).unwrap_err();
        assert!(err.to_string().contains("config unreadable"));
    }

    #[test]
    fn test_no_match_gives_root_only_view() {
        let criteria = FilterCriteria::new().with_issue_ids(["CVE-NONE"]);
        let use_case = ApplyFiltersUseCase::new(registry_with_shop(), criteria);

        let view = use_case.execute(&shop_key()).unwrap().unwrap();
        assert!(view.tree.is_root_only());
        assert!(!view.has_issues());
    }
}
