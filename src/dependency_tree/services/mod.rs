mod exclusion_advisor;
mod issue_aggregator;
mod path_resolver;
mod tree_filter;

pub use exclusion_advisor::ExclusionAdvisor;
pub use issue_aggregator::IssueAggregator;
pub use path_resolver::PathResolver;
pub use tree_filter::TreeFilter;
