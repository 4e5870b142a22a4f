use crate::dependency_tree::domain::ExclusionAction;
use crate::shared::Result;

/// ExclusionEditor port: performs the descriptor edit for an exclusion
pub trait ExclusionEditor {
    /// Applies `action` to its descriptor
    ///
    /// # Errors
    /// Returns an error if the descriptor cannot be edited
    fn exclude(&self, action: &ExclusionAction) -> Result<()>;
}
