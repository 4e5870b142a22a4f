/// Console adapters standing in for an editor backend
mod dry_run_editor;
mod navigator;
mod tree_presenter;

pub use dry_run_editor::DryRunExclusionEditor;
pub use navigator::ConsoleNavigator;
pub use tree_presenter::TermTreePresenter;
