use crate::dependency_tree::policies::FilterCriteria;
use crate::shared::Result;

/// FilterCriteriaSource port supplying the user's active filter
///
/// Read at the start of every filter run; implementations must not hand
/// out a stale cached value.
pub trait FilterCriteriaSource {
    fn current_criteria(&self) -> Result<FilterCriteria>;
}

/// Fixed criteria, e.g. assembled from command-line flags
impl FilterCriteriaSource for FilterCriteria {
    fn current_criteria(&self) -> Result<FilterCriteria> {
        Ok(self.clone())
    }
}
