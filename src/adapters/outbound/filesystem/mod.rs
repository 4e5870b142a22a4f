/// Filesystem adapters for file I/O operations
mod criteria_reader;
mod descriptor_paths;
mod file_writer;
mod scan_reader;

pub use criteria_reader::YamlCriteriaSource;
pub use descriptor_paths::FileSystemDescriptorPaths;
pub use file_writer::{FileSystemWriter, StdoutPresenter};
pub use scan_reader::JsonScanReader;
