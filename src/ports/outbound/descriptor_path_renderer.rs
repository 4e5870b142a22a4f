use crate::dependency_tree::domain::DescriptorLocation;
use crate::shared::Result;

/// DescriptorPathRenderer port producing the short, project-relative form
/// of a descriptor path for menu labels.
///
/// # Errors
/// Fails when the descriptor can no longer be resolved (deleted, moved,
/// invalid path). Callers are expected to fall back rather than propagate.
pub trait DescriptorPathRenderer {
    fn relativize(&self, location: &DescriptorLocation) -> Result<String>;
}
