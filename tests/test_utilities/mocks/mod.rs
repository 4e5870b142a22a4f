//! Mock implementations for testing
#![allow(dead_code)]

mod mock_criteria_source;
mod mock_path_renderer;
mod mock_scan_reader;
mod recording_exclusion_editor;
mod recording_navigator;

pub use mock_criteria_source::MockCriteriaSource;
pub use mock_path_renderer::MockPathRenderer;
pub use mock_scan_reader::MockScanReader;
pub use recording_exclusion_editor::RecordingExclusionEditor;
pub use recording_navigator::RecordingNavigator;
