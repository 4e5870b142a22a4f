use crate::dependency_tree::domain::DependencyTree;
use crate::shared::Result;
use std::path::Path;

/// ScanResultReader port for loading the scanner's output
///
/// Each call produces a complete, freshly built tree for one scan cycle;
/// there are no incremental updates.
pub trait ScanResultReader {
    /// Reads one scan result and builds its dependency tree
    ///
    /// # Errors
    /// Returns an error if:
    /// - The scan result cannot be found or read
    /// - The document is malformed
    /// - The document describes an invalid tree (e.g. duplicate siblings)
    fn read_scan(&self, scan_path: &Path) -> Result<DependencyTree>;
}
