mod filter_criteria;

pub use filter_criteria::{FilterCriteria, IssuePredicate};
