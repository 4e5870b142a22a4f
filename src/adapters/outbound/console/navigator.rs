use crate::dependency_tree::domain::DescriptorLocation;
use crate::ports::outbound::{DescriptorNavigator, OutputPresenter};
use crate::shared::error::TreeError;
use crate::shared::Result;

/// ConsoleNavigator adapter printing `path:line` for each navigation request
///
/// The one-based `path:line` form is what most editors and terminals accept
/// as a jump target.
pub struct ConsoleNavigator<P: OutputPresenter> {
    presenter: P,
}

impl<P: OutputPresenter> ConsoleNavigator<P> {
    pub fn new(presenter: P) -> Self {
        Self { presenter }
    }
}

impl<P: OutputPresenter> DescriptorNavigator for ConsoleNavigator<P> {
    fn navigate(&self, location: &DescriptorLocation) -> Result<()> {
        if !location.file().exists() {
            return Err(TreeError::DescriptorUnavailable {
                path: location.file().to_path_buf(),
                reason: "cannot navigate to a missing descriptor".to_string(),
            }
            .into());
        }
        self.presenter.present(&format!("{}\n", location))
    }
}
