use crate::dependency_tree::domain::ExclusionAction;
use crate::ports::outbound::{ExclusionEditor, OutputPresenter};
use crate::shared::Result;
use tracing::info;

/// DryRunExclusionEditor adapter describing the descriptor edit instead of
/// performing it
pub struct DryRunExclusionEditor<P: OutputPresenter> {
    presenter: P,
}

impl<P: OutputPresenter> DryRunExclusionEditor<P> {
    pub fn new(presenter: P) -> Self {
        Self { presenter }
    }
}

impl<P: OutputPresenter> ExclusionEditor for DryRunExclusionEditor<P> {
    fn exclude(&self, action: &ExclusionAction) -> Result<()> {
        info!(
            target_dependency = %action.target(),
            anchor = %action.anchor(),
            "dry-run exclusion"
        );
        self.presenter.present(&format!(
            "Would exclude {} from {} at {} ({}):\n    {}\n",
            action.target(),
            action.anchor(),
            action.descriptor_location(),
            action.syntax(),
            action.snippet()
        ))
    }
}
