use crate::application::read_models::{ContextMenu, MenuAction, MenuEntry, MenuItem};
use crate::dependency_tree::domain::{
    ComponentId, DependencyTree, DescriptorLocation, ExclusionAction,
};
use crate::dependency_tree::services::{ExclusionAdvisor, PathResolver};
use crate::ports::outbound::DescriptorPathRenderer;
use std::collections::BTreeSet;
use tracing::{debug, error};

pub const NAVIGATE_LABEL: &str = "Show in project descriptor";
pub const EXCLUDE_LABEL: &str = "Exclude dependency";

/// BuildContextMenuUseCase - Builds the context menu for a selected dependency
///
/// A dependency reached through one descriptor line gets plain entries.
/// One reached through several gets a submenu per action, with an item
/// per descriptor line labelled `<relative path> <line>`.
///
/// # Type Parameters
/// * `R` - DescriptorPathRenderer implementation used for submenu labels
pub struct BuildContextMenuUseCase<R: DescriptorPathRenderer> {
    path_renderer: R,
}

impl<R: DescriptorPathRenderer> BuildContextMenuUseCase<R> {
    pub fn new(path_renderer: R) -> Self {
        Self { path_renderer }
    }

    /// Builds the menu for every instance of `target` in `tree`
    ///
    /// An identity with no navigable instance gives an empty menu.
    pub fn execute(&self, tree: &DependencyTree, target: &ComponentId) -> ContextMenu {
        let candidates = PathResolver::resolve_navigation(tree, target);
        if candidates.is_empty() {
            debug!(target_dependency = %target, "nothing to navigate to");
            return ContextMenu::default();
        }

        let locations: BTreeSet<DescriptorLocation> = candidates
            .iter()
            .map(|candidate| candidate.descriptor_location().clone())
            .collect();

        let actions: BTreeSet<OrderedAction> = ExclusionAdvisor::resolve_exclusions(tree, &candidates)
            .into_values()
            .map(OrderedAction)
            .collect();

        ContextMenu {
            navigation: self.navigation_entry(locations),
            exclusion: self.exclusion_entry(actions),
        }
    }

    fn navigation_entry(&self, locations: BTreeSet<DescriptorLocation>) -> Option<MenuEntry> {
        if locations.len() == 1 {
            let location = locations.into_iter().next()?;
            return Some(MenuEntry::Single {
                label: NAVIGATE_LABEL.to_string(),
                action: MenuAction::Navigate(location),
            });
        }

        let items = locations
            .into_iter()
            .map(|location| MenuItem {
                label: self.item_label(&location),
                action: MenuAction::Navigate(location),
            })
            .collect();
        Some(MenuEntry::Submenu {
            label: NAVIGATE_LABEL.to_string(),
            items: sorted(items),
        })
    }

    fn exclusion_entry(&self, actions: BTreeSet<OrderedAction>) -> Option<MenuEntry> {
        match actions.len() {
            0 => None,
            1 => {
                let action = actions.into_iter().next()?.0;
                Some(MenuEntry::Single {
                    label: EXCLUDE_LABEL.to_string(),
                    action: MenuAction::Exclude(action),
                })
            }
            _ => {
                let items = actions
                    .into_iter()
                    .map(|OrderedAction(action)| MenuItem {
                        label: self.item_label(action.descriptor_location()),
                        action: MenuAction::Exclude(action),
                    })
                    .collect();
                Some(MenuEntry::Submenu {
                    label: EXCLUDE_LABEL.to_string(),
                    items: sorted(items),
                })
            }
        }
    }

    fn item_label(&self, location: &DescriptorLocation) -> String {
        let path = match self.path_renderer.relativize(location) {
            Ok(relative) => relative,
            Err(e) => {
                error!(
                    descriptor = %location.file().display(),
                    error = %e,
                    "failed to relativize descriptor path"
                );
                location
                    .file()
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or_else(|| location.file().display().to_string())
            }
        };
        format!("{} {}", path, location.display_line())
    }
}

fn sorted(mut items: Vec<MenuItem>) -> Vec<MenuItem> {
    items.sort_by(|a, b| a.label.cmp(&b.label));
    items
}

/// Orders exclusion actions by descriptor location, then anchor
struct OrderedAction(ExclusionAction);

impl PartialEq for OrderedAction {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == std::cmp::Ordering::Equal
    }
}

impl Eq for OrderedAction {}

impl Ord for OrderedAction {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0
            .descriptor_location()
            .cmp(other.0.descriptor_location())
            .then_with(|| self.0.anchor().cmp(other.0.anchor()))
            .then_with(|| self.0.target().cmp(other.0.target()))
    }
}

impl PartialOrd for OrderedAction {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
