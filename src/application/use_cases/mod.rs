/// Use cases module containing application business logic orchestration
mod apply_filters;
mod build_context_menu;

pub use apply_filters::ApplyFiltersUseCase;
pub use build_context_menu::{BuildContextMenuUseCase, EXCLUDE_LABEL, NAVIGATE_LABEL};
