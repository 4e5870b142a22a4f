use crate::dependency_tree::domain::DescriptorLocation;
use crate::shared::Result;

/// DescriptorNavigator port: opens a project descriptor at a given line
pub trait DescriptorNavigator {
    fn navigate(&self, location: &DescriptorLocation) -> Result<()>;
}
