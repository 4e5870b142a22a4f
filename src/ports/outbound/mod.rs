/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with the scanner, descriptor files and the console.
pub mod descriptor_navigator;
pub mod descriptor_path_renderer;
pub mod exclusion_editor;
pub mod filter_criteria_source;
pub mod output_presenter;
pub mod scan_result_reader;
pub mod tree_presenter;

pub use descriptor_navigator::DescriptorNavigator;
pub use descriptor_path_renderer::DescriptorPathRenderer;
pub use exclusion_editor::ExclusionEditor;
pub use filter_criteria_source::FilterCriteriaSource;
pub use output_presenter::OutputPresenter;
pub use scan_result_reader::ScanResultReader;
pub use tree_presenter::TreePresenter;
