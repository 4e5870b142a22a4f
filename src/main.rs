mod cli;
mod logging;

use cli::{Args, Command, ScanArgs, SelectArgs, TreeArgs};
use deptrace::adapters::outbound::console::{
    ConsoleNavigator, DryRunExclusionEditor, TermTreePresenter,
};
use deptrace::adapters::outbound::filesystem::{
    FileSystemDescriptorPaths, JsonScanReader, StdoutPresenter, YamlCriteriaSource,
};
use deptrace::application::dto::FilteredView;
use deptrace::application::factories::{PresenterFactory, PresenterType};
use deptrace::application::read_models::{ContextMenu, MenuAction};
use deptrace::application::use_cases::{ApplyFiltersUseCase, BuildContextMenuUseCase};
use deptrace::application::ProjectRegistry;
use deptrace::ports::outbound::{
    DescriptorNavigator, ExclusionEditor, OutputPresenter, ScanResultReader, TreePresenter,
};
use deptrace::shared::error::{ExitCode, TreeError};
use deptrace::shared::Result;
use std::io::IsTerminal;
use std::process;
use tracing::warn;

fn main() {
    let args = Args::parse_args();
    logging::init_logging(args.verbose);

    match run(args) {
        Ok(exit_code) => process::exit(exit_code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            for cause in e.chain().skip(1) {
                eprintln!("\nCaused by: {}", cause);
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

fn run(args: Args) -> Result<ExitCode> {
    match args.command {
        Command::Tree(tree_args) => run_tree(tree_args),
        Command::Menu(select) => run_menu(select),
        Command::Navigate(select) => run_navigate(select),
        Command::Exclude(select) => run_exclude(select),
    }
}

/// Reads the scan, publishes it and applies the active filters
fn load_filtered_view(scan_args: &ScanArgs) -> Result<FilteredView> {
    let reader = JsonScanReader::new();
    let tree = reader.read_scan(&scan_args.scan)?;
    let project = tree.project_key().clone();

    let criteria_source = match &scan_args.config {
        Some(path) => YamlCriteriaSource::explicit(path),
        None => YamlCriteriaSource::discover(project.path()),
    }
    .with_overrides(scan_args.criteria_overrides());

    let registry = ProjectRegistry::new();
    registry.publish(tree);

    let use_case = ApplyFiltersUseCase::new(registry, criteria_source);
    use_case.execute(&project)?.ok_or_else(|| {
        anyhow::Error::from(TreeError::Validation {
            message: format!("no tree published for {}", project),
        })
    })
}

fn run_tree(args: TreeArgs) -> Result<ExitCode> {
    let view = load_filtered_view(&args.scan)?;

    let colored = !args.no_color && args.output.is_none() && std::io::stdout().is_terminal();
    let presenter = TermTreePresenter::new(colored);
    let mut output = presenter.render(&view.tree);
    output.push('\n');
    output.push_str(&summary_line(&view));
    output.push('\n');

    PresenterFactory::create(PresenterType::from(args.output)).present(&output)?;

    if args.check && view.has_issues() {
        return Ok(ExitCode::IssuesDetected);
    }
    Ok(ExitCode::Success)
}

fn summary_line(view: &FilteredView) -> String {
    match view.highest_severity() {
        Some(highest) => format!(
            "{} issue(s) match the active filters (highest: {})",
            view.summary.len(),
            highest
        ),
        None => "No issues match the active filters".to_string(),
    }
}

fn build_menu(select: &SelectArgs) -> Result<ContextMenu> {
    let view = load_filtered_view(&select.scan)?;
    let renderer = FileSystemDescriptorPaths::new(view.tree.project_key().path());
    let menu = BuildContextMenuUseCase::new(renderer).execute(&view.tree, &select.identity);
    if menu.is_empty() {
        warn!(
            dependency = %select.identity,
            "dependency is not in the filtered tree or has no declaring descriptor"
        );
    }
    Ok(menu)
}

fn run_menu(select: SelectArgs) -> Result<ExitCode> {
    let menu = build_menu(&select)?;
    let presenter = StdoutPresenter::new();
    if menu.is_empty() {
        presenter.present(&format!("No actions available for {}\n", select.identity))?;
    } else {
        presenter.present(&menu.to_string())?;
    }
    Ok(ExitCode::Success)
}

fn run_navigate(select: SelectArgs) -> Result<ExitCode> {
    let menu = build_menu(&select)?;
    let navigator = ConsoleNavigator::new(StdoutPresenter::new());

    for action in menu.navigation.iter().flat_map(|entry| entry.actions()) {
        if let MenuAction::Navigate(location) = action {
            navigator.navigate(location)?;
        }
    }
    Ok(ExitCode::Success)
}

fn run_exclude(select: SelectArgs) -> Result<ExitCode> {
    let menu = build_menu(&select)?;
    let editor = DryRunExclusionEditor::new(StdoutPresenter::new());

    let Some(entry) = menu.exclusion else {
        StdoutPresenter::new().present(&format!(
            "No exclusion available for {}\n",
            select.identity
        ))?;
        return Ok(ExitCode::Success);
    };

    for action in entry.actions() {
        if let MenuAction::Exclude(exclusion) = action {
            editor.exclude(exclusion)?;
        }
    }
    Ok(ExitCode::Success)
}
