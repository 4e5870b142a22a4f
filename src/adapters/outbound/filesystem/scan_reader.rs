use crate::dependency_tree::domain::{
    ComponentId, DependencyTree, DescriptorLocation, Ecosystem, Issue, IssueCategory, NodeId,
    ProjectKey, Severity,
};
use crate::ports::outbound::ScanResultReader;
use crate::shared::error::TreeError;
use crate::shared::security::read_checked;
use crate::shared::Result;
use anyhow::Context;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

/// Maximum nesting depth accepted from a scan document
const MAX_TREE_DEPTH: usize = 50;

#[derive(Debug, Deserialize)]
struct ScanDocument {
    project: ProjectDto,
    #[serde(default)]
    scanned_at: Option<DateTime<Utc>>,
    root: NodeDto,
}

#[derive(Debug, Deserialize)]
struct ProjectDto {
    name: String,
    path: PathBuf,
}

#[derive(Debug, Deserialize)]
struct NodeDto {
    name: String,
    version: String,
    #[serde(default)]
    ecosystem: Option<Ecosystem>,
    #[serde(default)]
    declared_at: Option<LocationDto>,
    #[serde(default)]
    issues: Vec<IssueDto>,
    #[serde(default)]
    dependencies: Vec<NodeDto>,
}

#[derive(Debug, Deserialize)]
struct LocationDto {
    file: PathBuf,
    line: usize,
}

#[derive(Debug, Deserialize)]
struct IssueDto {
    id: String,
    severity: Severity,
    category: IssueCategory,
    #[serde(default)]
    summary: String,
}

/// JsonScanReader adapter building dependency trees from scanner JSON output
///
/// Relative paths are resolved as follows:
/// - `project.path` against the directory holding the scan file
/// - `declared_at.file` against the project path
///
/// Nodes without an explicit `ecosystem` inherit their parent's.
pub struct JsonScanReader;

impl JsonScanReader {
    pub fn new() -> Self {
        Self
    }

    fn build_tree(&self, document: ScanDocument, scan_path: &Path) -> Result<DependencyTree> {
        let scan_dir = scan_path.parent().unwrap_or_else(|| Path::new("."));
        let project_path = normalized(&scan_dir.join(&document.project.path));
        let project_key = ProjectKey::new(document.project.name, project_path.clone());

        let root = document.root;
        let root_ecosystem = root.ecosystem.unwrap_or_default();
        let root_identity = ComponentId::new(&root.name, &root.version)?;

        let mut tree = DependencyTree::new(project_key, root_identity.clone(), root_ecosystem);
        if let Some(scanned_at) = document.scanned_at {
            tree = tree.with_scanned_at(scanned_at);
        }

        let root_id = tree.root();
        attach_issues(&mut tree, root_id, &root_identity, root.issues)?;

        let context = BuildContext {
            project_path: &project_path,
        };
        for child in root.dependencies {
            context.add_subtree(&mut tree, root_id, root_ecosystem, child, 1)?;
        }

        Ok(tree)
    }
}

impl Default for JsonScanReader {
    fn default() -> Self {
        Self::new()
    }
}

struct BuildContext<'a> {
    project_path: &'a Path,
}

impl BuildContext<'_> {
    fn add_subtree(
        &self,
        tree: &mut DependencyTree,
        parent: NodeId,
        inherited: Ecosystem,
        dto: NodeDto,
        depth: usize,
    ) -> Result<()> {
        if depth > MAX_TREE_DEPTH {
            return Err(TreeError::Validation {
                message: format!(
                    "dependency tree is nested deeper than {} levels (at '{}@{}')",
                    MAX_TREE_DEPTH, dto.name, dto.version
                ),
            }
            .into());
        }

        let ecosystem = dto.ecosystem.unwrap_or(inherited);
        let identity = ComponentId::new(&dto.name, &dto.version)?;
        let node = tree.add_dependency(parent, identity.clone(), ecosystem)?;

        if let Some(location) = dto.declared_at {
            let file = normalized(&self.project_path.join(location.file));
            tree.declare(node, DescriptorLocation::new(file, location.line))?;
        }

        attach_issues(tree, node, &identity, dto.issues)?;

        for child in dto.dependencies {
            self.add_subtree(tree, node, ecosystem, child, depth + 1)?;
        }
        Ok(())
    }
}

/// Drops `.` components so `dir/./pom.xml` displays as `dir/pom.xml`
fn normalized(path: &Path) -> PathBuf {
    path.components().collect()
}

fn attach_issues(
    tree: &mut DependencyTree,
    node: NodeId,
    identity: &ComponentId,
    issues: Vec<IssueDto>,
) -> Result<()> {
    for dto in issues {
        let issue = Issue::new(
            dto.id,
            dto.severity,
            dto.category,
            dto.summary,
            identity.clone(),
        )?;
        tree.attach_issue(node, issue)?;
    }
    Ok(())
}

impl ScanResultReader for JsonScanReader {
    #[instrument(skip_all, fields(scan = %scan_path.display()))]
    fn read_scan(&self, scan_path: &Path) -> Result<DependencyTree> {
        if !scan_path.exists() {
            return Err(TreeError::ScanFileNotFound {
                path: scan_path.to_path_buf(),
                suggestion: "Run the scanner first, or pass the scan result with --scan <FILE>"
                    .to_string(),
            }
            .into());
        }

        let content = read_checked(scan_path, "scan result")?;

        let document: ScanDocument =
            serde_json::from_str(&content).map_err(|e| TreeError::ScanParseError {
                path: scan_path.to_path_buf(),
                details: e.to_string(),
            })?;

        let tree = self
            .build_tree(document, scan_path)
            .with_context(|| format!("Invalid dependency tree in {}", scan_path.display()))?;

        debug!(
            project = %tree.project_key(),
            nodes = tree.node_count(),
            depth = tree.depth(),
            "loaded scan result"
        );
        Ok(tree)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dependency_tree::domain::NodeKind;
    use std::fs;
    use tempfile::TempDir;

    const SCAN: &str = r#"{
        "project": { "name": "shop", "path": "." },
        "scanned_at": "2024-05-01T12:00:00Z",
        "root": {
            "name": "shop", "version": "1.0.0", "ecosystem": "maven",
            "dependencies": [
                {
                    "name": "org.acme:web", "version": "2.0",
                    "declared_at": { "file": "pom.xml", "line": 11 },
                    "dependencies": [
                        {
                            "name": "org.yaml:snakeyaml", "version": "1.33",
                            "issues": [
                                { "id": "CVE-2022-1471", "severity": "critical", "category": "vulnerability" }
                            ]
                        }
                    ]
                },
                { "name": "left-pad", "version": "1.3.0", "ecosystem": "npm" }
            ]
        }
    }"#;

    fn write_scan(dir: &TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("scan.json");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_read_scan_builds_tree() {
        let dir = TempDir::new().unwrap();
        let path = write_scan(&dir, SCAN);

        let tree = JsonScanReader::new().read_scan(&path).unwrap();

        assert_eq!(tree.project_key().name(), "shop");
        assert_eq!(tree.node_count(), 4);
        assert_eq!(tree.scanned_at().to_rfc3339(), "2024-05-01T12:00:00+00:00");

        let web = tree.find_all(&"org.acme:web@2.0".parse().unwrap())[0];
        let web_node = tree.node(web).unwrap();
        assert_eq!(web_node.kind(), NodeKind::DirectDependency);
        assert_eq!(web_node.ecosystem(), Ecosystem::Maven);
        let location = web_node.declared_at().unwrap();
        assert_eq!(location.file(), dir.path().join("pom.xml"));
        assert!(!location.file().display().to_string().contains("/./"));
        assert_eq!(location.line(), 11);

        let yaml = tree.find_all(&"org.yaml:snakeyaml@1.33".parse().unwrap())[0];
        let yaml_node = tree.node(yaml).unwrap();
        assert_eq!(yaml_node.kind(), NodeKind::TransitiveDependency);
        assert_eq!(yaml_node.own_issues().len(), 1);
        assert_eq!(
            yaml_node.own_issues().iter().next().unwrap().affected_component(),
            yaml_node.identity()
        );

        let pad = tree.find_all(&"left-pad@1.3.0".parse().unwrap())[0];
        assert_eq!(tree.node(pad).unwrap().ecosystem(), Ecosystem::Npm);
    }

    #[test]
    fn test_read_scan_file_not_found() {
        let dir = TempDir::new().unwrap();
        let result = JsonScanReader::new().read_scan(&dir.path().join("missing.json"));

        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("Scan result not found"));
    }

    #[test]
    fn test_read_scan_malformed_json() {
        let dir = TempDir::new().unwrap();
        let path = write_scan(&dir, "{ not json");

        let err = format!("{}", JsonScanReader::new().read_scan(&path).unwrap_err());
        assert!(err.contains("Failed to parse scan result"));
    }

    #[test]
    fn test_read_scan_rejects_duplicate_siblings() {
        let dir = TempDir::new().unwrap();
        let path = write_scan(
            &dir,
            r#"{
                "project": { "name": "p", "path": "." },
                "root": {
                    "name": "p", "version": "1",
                    "dependencies": [
                        { "name": "a", "version": "1" },
                        { "name": "a", "version": "1" }
                    ]
                }
            }"#,
        );

        let err = JsonScanReader::new().read_scan(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("Duplicate dependency"));
    }

    #[test]
    fn test_read_scan_rejects_declared_transitive() {
        let dir = TempDir::new().unwrap();
        let path = write_scan(
            &dir,
            r#"{
                "project": { "name": "p", "path": "." },
                "root": {
                    "name": "p", "version": "1",
                    "dependencies": [
                        { "name": "a", "version": "1", "dependencies": [
                            { "name": "b", "version": "1",
                              "declared_at": { "file": "pom.xml", "line": 3 } }
                        ] }
                    ]
                }
            }"#,
        );

        let err = JsonScanReader::new().read_scan(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("only direct dependencies"));
    }

    #[test]
    fn test_read_scan_rejects_excessive_depth() {
        let dir = TempDir::new().unwrap();
        let mut node = r#"{ "name": "leaf", "version": "1" }"#.to_string();
        for level in 0..=MAX_TREE_DEPTH {
            node = format!(
                r#"{{ "name": "n{}", "version": "1", "dependencies": [{}] }}"#,
                level, node
            );
        }
        let path = write_scan(
            &dir,
            &format!(
                r#"{{ "project": {{ "name": "p", "path": "." }}, "root": {{ "name": "p", "version": "1", "dependencies": [{}] }} }}"#,
                node
            ),
        );

        let err = JsonScanReader::new().read_scan(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("nested deeper than"));
    }
}
