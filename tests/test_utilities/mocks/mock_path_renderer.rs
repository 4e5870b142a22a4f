use deptrace::prelude::*;
use std::path::PathBuf;

/// Mock DescriptorPathRenderer stripping a fixed base directory
pub struct MockPathRenderer {
    base: PathBuf,
    should_fail: bool,
}

impl MockPathRenderer {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self {
            base: base.into(),
            should_fail: false,
        }
    }

    /// Every descriptor behaves as if it had been deleted
    pub fn with_failure() -> Self {
        Self {
            base: PathBuf::new(),
            should_fail: true,
        }
    }
}

impl DescriptorPathRenderer for MockPathRenderer {
    fn relativize(&self, location: &DescriptorLocation) -> Result<String> {
        if self.should_fail {
            anyhow::bail!("Mock descriptor unavailable: {}", location.file().display());
        }
        Ok(location
            .file()
            .strip_prefix(&self.base)?
            .display()
            .to_string())
    }
}
