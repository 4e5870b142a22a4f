use deptrace::prelude::*;
use std::path::Path;

/// Mock ScanResultReader handing out a prebuilt tree
pub struct MockScanReader {
    tree: Option<DependencyTree>,
}

impl MockScanReader {
    pub fn new(tree: DependencyTree) -> Self {
        Self { tree: Some(tree) }
    }

    pub fn with_failure() -> Self {
        Self { tree: None }
    }
}

impl ScanResultReader for MockScanReader {
    fn read_scan(&self, _scan_path: &Path) -> Result<DependencyTree> {
        match &self.tree {
            Some(tree) => Ok(tree.clone()),
            None => anyhow::bail!("Mock scan read failure"),
        }
    }
}
