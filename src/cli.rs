use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

use deptrace::dependency_tree::domain::{ComponentId, IssueCategory, Severity};
use deptrace::dependency_tree::policies::FilterCriteria;

/// Explore a scanned dependency tree and trace issues back to the
/// project descriptors that pulled them in
#[derive(Parser, Debug)]
#[command(name = "deptrace")]
#[command(version)]
#[command(about = "Trace dependency issues back to project descriptors", long_about = None)]
pub struct Args {
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the filtered dependency tree
    Tree(TreeArgs),
    /// Print the context menu offered for a dependency
    Menu(SelectArgs),
    /// Print the descriptor lines that declare a dependency
    Navigate(SelectArgs),
    /// Describe the exclusions that would remove a dependency
    Exclude(SelectArgs),
}

/// Scan input and filter options shared by every subcommand
#[derive(ClapArgs, Debug)]
pub struct ScanArgs {
    /// Scan result JSON produced by the scanner
    #[arg(short, long, value_name = "FILE")]
    pub scan: PathBuf,

    /// Config file (defaults to deptrace.config.yml in the project directory)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Keep only issues with these severities (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub severity: Vec<Severity>,

    /// Keep only issues with these categories (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub category: Vec<IssueCategory>,

    /// Keep only these issue ids (comma-separated)
    #[arg(long = "issue", value_name = "ID", value_delimiter = ',')]
    pub issues: Vec<String>,

    /// Keep only issues at or above this severity
    #[arg(long, value_name = "SEVERITY")]
    pub min_severity: Option<Severity>,
}

impl ScanArgs {
    /// Criteria given on the command line; these override the config file
    pub fn criteria_overrides(&self) -> FilterCriteria {
        let mut criteria = FilterCriteria::new()
            .with_severities(self.severity.iter().copied())
            .with_categories(self.category.iter().copied())
            .with_issue_ids(self.issues.iter().cloned());
        if let Some(min) = self.min_severity {
            criteria = criteria.with_min_severity(min);
        }
        criteria
    }
}

#[derive(ClapArgs, Debug)]
pub struct TreeArgs {
    #[command(flatten)]
    pub scan: ScanArgs,

    /// Exit with code 1 when the filtered tree still has issues
    #[arg(long)]
    pub check: bool,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

#[derive(ClapArgs, Debug)]
pub struct SelectArgs {
    #[command(flatten)]
    pub scan: ScanArgs,

    /// Dependency to act on, as name@version
    #[arg(value_name = "IDENTITY")]
    pub identity: ComponentId,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
