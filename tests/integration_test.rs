/// Integration tests for the application layer
mod test_utilities;

use deptrace::prelude::*;
use std::path::Path;
use test_utilities::mocks::*;

const SHOP_SCAN: &str = "tests/fixtures/shop/scan.json";

fn id(s: &str) -> ComponentId {
    s.parse().unwrap()
}

fn load_shop() -> (ProjectRegistry, ProjectKey) {
    let tree = JsonScanReader::new()
        .read_scan(Path::new(SHOP_SCAN))
        .unwrap();
    let key = tree.project_key().clone();
    let registry = ProjectRegistry::new();
    registry.publish(tree);
    (registry, key)
}

fn filtered_shop(criteria: FilterCriteria) -> FilteredView {
    let (registry, key) = load_shop();
    ApplyFiltersUseCase::new(registry, criteria)
        .execute(&key)
        .unwrap()
        .unwrap()
}

fn item_labels(entry: &MenuEntry) -> Vec<String> {
    match entry {
        MenuEntry::Single { label, .. } => vec![label.clone()],
        MenuEntry::Submenu { items, .. } => items.iter().map(|i| i.label.clone()).collect(),
    }
}

#[test]
fn test_unrestricted_filter_keeps_every_issue_path() {
    let view = filtered_shop(FilterCriteria::new());

    // org.clean:util carries no issue and is pruned
    assert_eq!(view.tree.node_count(), 7);
    assert!(view.tree.find_all(&id("org.clean:util@1.0")).is_empty());
    assert_eq!(view.tree.find_all(&id("org.yaml:snakeyaml@1.33")).len(), 2);

    let ids: Vec<&str> = view.summary.iter().map(|i| i.id()).collect();
    assert_eq!(ids.len(), 3);
    assert!(ids.contains(&"CVE-2022-1471"));
    assert!(ids.contains(&"CVE-2020-36518"));
    assert!(ids.contains(&"LIC-GPL-3.0"));
    assert_eq!(view.highest_severity(), Some(Severity::Critical));
}

#[test]
fn test_criteria_changes_apply_on_next_run() {
    let (registry, key) = load_shop();
    let source = MockCriteriaSource::new(FilterCriteria::new());
    let use_case = ApplyFiltersUseCase::new(registry, &source);

    let first = use_case.execute(&key).unwrap().unwrap();
    assert_eq!(first.summary.len(), 3);

    source.set(FilterCriteria::new().with_min_severity(Severity::Critical));
    let second = use_case.execute(&key).unwrap().unwrap();

    assert_eq!(second.summary.len(), 1);
    // root, web, batch-core and snakeyaml below each of them
    assert_eq!(second.tree.node_count(), 5);
    assert_eq!(source.calls(), 2);
}

#[test]
fn test_license_only_filter() {
    let view = filtered_shop(FilterCriteria::new().with_categories([IssueCategory::License]));

    assert_eq!(view.tree.node_count(), 2);
    assert_eq!(view.highest_severity(), Some(Severity::Medium));
}

#[test]
fn test_criteria_failure_propagates() {
    let (registry, key) = load_shop();
    let source = MockCriteriaSource::with_failure();

    let result = ApplyFiltersUseCase::new(registry, &source).execute(&key);
    assert!(result.is_err());
}

#[test]
fn test_menu_for_multi_module_transitive() {
    let view = filtered_shop(FilterCriteria::new());
    let renderer = MockPathRenderer::new(view.tree.project_key().path());

    let menu = BuildContextMenuUseCase::new(renderer)
        .execute(&view.tree, &id("org.yaml:snakeyaml@1.33"));

    let navigation = menu.navigation.as_ref().unwrap();
    assert!(matches!(navigation, MenuEntry::Submenu { .. }));
    assert_eq!(item_labels(navigation), vec!["batch/pom.xml 7", "pom.xml 12"]);

    let exclusion = menu.exclusion.as_ref().unwrap();
    assert_eq!(item_labels(exclusion), vec!["batch/pom.xml 7", "pom.xml 12"]);
}

#[test]
fn test_menu_labels_fall_back_when_descriptor_is_gone() {
    let view = filtered_shop(FilterCriteria::new());

    let menu = BuildContextMenuUseCase::new(MockPathRenderer::with_failure())
        .execute(&view.tree, &id("org.yaml:snakeyaml@1.33"));

    assert_eq!(
        item_labels(menu.navigation.as_ref().unwrap()),
        vec!["pom.xml 12", "pom.xml 7"]
    );
}

#[test]
fn test_navigate_every_candidate() {
    let view = filtered_shop(FilterCriteria::new());
    let menu = BuildContextMenuUseCase::new(MockPathRenderer::new(view.tree.project_key().path()))
        .execute(&view.tree, &id("org.yaml:snakeyaml@1.33"));
    let navigator = RecordingNavigator::new();

    for action in menu.navigation.iter().flat_map(|entry| entry.actions()) {
        if let MenuAction::Navigate(location) = action {
            navigator.navigate(location).unwrap();
        }
    }

    let visited = navigator.visited.borrow();
    assert_eq!(visited.len(), 2);
    assert!(visited.iter().any(|l| l.file().ends_with("batch/pom.xml") && l.line() == 6));
    assert!(visited.iter().any(|l| l.file().ends_with("shop/pom.xml") && l.line() == 11));
}

#[test]
fn test_exclude_through_each_direct_dependency() {
    let view = filtered_shop(FilterCriteria::new());
    let menu = BuildContextMenuUseCase::new(MockPathRenderer::new(view.tree.project_key().path()))
        .execute(&view.tree, &id("org.yaml:snakeyaml@1.33"));
    let editor = RecordingExclusionEditor::new();

    for action in menu.exclusion.iter().flat_map(|entry| entry.actions()) {
        if let MenuAction::Exclude(exclusion) = action {
            editor.exclude(exclusion).unwrap();
        }
    }

    let applied = editor.applied.borrow();
    let mut anchors: Vec<String> = applied.iter().map(|a| a.anchor().to_string()).collect();
    anchors.sort();
    assert_eq!(anchors, vec!["org.acme:batch-core@1.4", "org.acme:web@2.0"]);
    assert!(applied.iter().all(|a| a.snippet()
        == "<exclusion><groupId>org.yaml</groupId><artifactId>snakeyaml</artifactId></exclusion>"));
}

#[test]
fn test_direct_dependency_offers_navigation_only() {
    let view = filtered_shop(FilterCriteria::new());
    let menu = BuildContextMenuUseCase::new(MockPathRenderer::new(view.tree.project_key().path()))
        .execute(&view.tree, &id("org.gpl:widgets@3.1"));

    assert!(matches!(menu.navigation, Some(MenuEntry::Single { .. })));
    assert!(menu.exclusion.is_none());
}

#[test]
fn test_pruned_dependency_has_empty_menu() {
    let view = filtered_shop(FilterCriteria::new());
    let menu = BuildContextMenuUseCase::new(MockPathRenderer::new(view.tree.project_key().path()))
        .execute(&view.tree, &id("org.clean:util@1.0"));

    assert!(menu.is_empty());
}

#[test]
fn test_new_scan_cycle_replaces_tree() {
    let (registry, key) = load_shop();
    let held = registry.snapshot(&key).unwrap();

    let mut rescanned = DependencyTree::new(key.clone(), id("org.acme:shop@1.0.0"), Ecosystem::Maven);
    rescanned
        .add_dependency(rescanned.root(), id("org.clean:util@1.0"), Ecosystem::Maven)
        .unwrap();
    let reader = MockScanReader::new(rescanned);

    let previous = registry
        .publish(reader.read_scan(Path::new("ignored.json")).unwrap())
        .unwrap();

    assert!(std::sync::Arc::ptr_eq(&previous, &held));
    assert_eq!(held.node_count(), 8);
    assert_eq!(registry.snapshot(&key).unwrap().node_count(), 2);

    let view = ApplyFiltersUseCase::new(registry, FilterCriteria::new())
        .execute(&key)
        .unwrap()
        .unwrap();
    assert!(view.tree.is_root_only());
}

#[test]
fn test_failing_scan_reader() {
    let result = MockScanReader::with_failure().read_scan(Path::new("scan.json"));
    assert!(result.is_err());
}
