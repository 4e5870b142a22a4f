use crate::dependency_tree::domain::{DescriptorLocation, ExclusionAction};
use std::fmt;

/// What selecting a menu item does
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuAction {
    Navigate(DescriptorLocation),
    Exclude(ExclusionAction),
}

/// One top-level menu entry: either directly actionable or a submenu
/// with one item per descriptor location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuEntry {
    Single { label: String, action: MenuAction },
    Submenu { label: String, items: Vec<MenuItem> },
}

impl MenuEntry {
    pub fn label(&self) -> &str {
        match self {
            MenuEntry::Single { label, .. } | MenuEntry::Submenu { label, .. } => label,
        }
    }

    /// Every action reachable from this entry
    pub fn actions(&self) -> Vec<&MenuAction> {
        match self {
            MenuEntry::Single { action, .. } => vec![action],
            MenuEntry::Submenu { items, .. } => items.iter().map(|item| &item.action).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub label: String,
    pub action: MenuAction,
}

/// Context menu offered for a dependency selected in the tree
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContextMenu {
    pub navigation: Option<MenuEntry>,
    pub exclusion: Option<MenuEntry>,
}

impl ContextMenu {
    pub fn is_empty(&self) -> bool {
        self.navigation.is_none() && self.exclusion.is_none()
    }
}

impl fmt::Display for ContextMenu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in self.navigation.iter().chain(self.exclusion.iter()) {
            match entry {
                MenuEntry::Single { label, action } => {
                    writeln!(f, "{} -> {}", label, describe(action))?;
                }
                MenuEntry::Submenu { label, items } => {
                    writeln!(f, "{} >", label)?;
                    for item in items {
                        writeln!(f, "    {}", item.label)?;
                    }
                }
            }
        }
        Ok(())
    }
}

fn describe(action: &MenuAction) -> String {
    match action {
        MenuAction::Navigate(location) => location.to_string(),
        MenuAction::Exclude(exclusion) => format!(
            "{} from {}",
            exclusion.target(),
            exclusion.descriptor_location()
        ),
    }
}
