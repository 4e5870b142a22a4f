use crate::dependency_tree::domain::DescriptorLocation;
use crate::ports::outbound::DescriptorPathRenderer;
use crate::shared::error::TreeError;
use crate::shared::Result;
use std::path::PathBuf;

/// FileSystemDescriptorPaths adapter rendering descriptor paths relative to
/// the project base directory.
pub struct FileSystemDescriptorPaths {
    base_dir: PathBuf,
}

impl FileSystemDescriptorPaths {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }
}

impl DescriptorPathRenderer for FileSystemDescriptorPaths {
    fn relativize(&self, location: &DescriptorLocation) -> Result<String> {
        let file = location.file();
        if !file.is_file() {
            return Err(TreeError::DescriptorUnavailable {
                path: file.to_path_buf(),
                reason: "file does not exist or is not a regular file".to_string(),
            }
            .into());
        }

        let relative = pathdiff::diff_paths(file, &self.base_dir).ok_or_else(|| {
            TreeError::DescriptorUnavailable {
                path: file.to_path_buf(),
                reason: format!(
                    "cannot be expressed relative to {}",
                    self.base_dir.display()
                ),
            }
        })?;

        Ok(relative.display().to_string())
    }
}
