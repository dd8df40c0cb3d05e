use crate::output::print_json;
use anyhow::Context;
use depbot_core::{
    manifest::{self, ManifestStatus},
    paths,
    prompt::{prompt_selection, ChoicePrompt},
    scaffold::{self, ScaffoldOutcome, ScaffoldReport},
    DepbotError, Interval, Mode, Selection,
};
use std::io::Write;
use std::path::Path;

pub fn run(
    root: &Path,
    mode: Option<Mode>,
    interval: Option<Interval>,
    json: bool,
) -> anyhow::Result<()> {
    let selection = collect_selection(mode, interval, json)?;

    let report = scaffold::run(root, selection)
        .with_context(|| format!("failed to scaffold Dependabot in {}", root.display()))?;

    if report.dispatched() {
        warn_on_manifest(root);
    }

    if json {
        return print_json(&report);
    }

    println!("{}", describe(&report));
    if report.dispatched() {
        println!(
            "Dependabot will update {} based on your selection.",
            report.interval
        );
    }
    Ok(())
}

fn warn_on_manifest(root: &Path) {
    match manifest::inspect(root) {
        ManifestStatus::NoDependencies => eprintln!(
            "note: package.json declares no dependencies; Dependabot will have nothing to update yet."
        ),
        ManifestStatus::Unreadable(reason) => {
            tracing::warn!("could not read {}: {reason}", paths::PACKAGE_JSON)
        }
        ManifestStatus::Missing | ManifestStatus::HasDependencies => {}
    }
}

/// Use the flags when both are given; otherwise prompt on the terminal for
/// whatever is missing.
fn collect_selection(
    mode: Option<Mode>,
    interval: Option<Interval>,
    json: bool,
) -> anyhow::Result<Selection> {
    if let (Some(mode), Some(interval)) = (mode, interval) {
        return Ok(Selection::new(mode, interval));
    }

    if !atty::is(atty::Stream::Stdin) {
        return Err(DepbotError::NotInteractive.into());
    }

    // Keep stdout clean for the JSON report.
    let out: Box<dyn Write> = if json {
        Box::new(std::io::stderr())
    } else {
        Box::new(std::io::stdout())
    };
    let mut prompt = ChoicePrompt::new(std::io::stdin().lock(), out);
    Ok(prompt_selection(&mut prompt, mode, interval)?)
}

fn describe(report: &ScaffoldReport) -> String {
    match (&report.outcome, report.mode) {
        (ScaffoldOutcome::Created { .. }, Mode::Local) => {
            format!("Dependabot configuration file created at {}", paths::DEPENDABOT_FILE)
        }
        (ScaffoldOutcome::Created { .. }, Mode::Action) => {
            format!("GitHub Actions workflow created at {}", paths::WORKFLOW_FILE)
        }
        (ScaffoldOutcome::AlreadyConfigured { .. }, _) => {
            "Dependabot configuration file already exists. Please remove it before proceeding."
                .to_string()
        }
        (ScaffoldOutcome::ConfigExists { .. }, Mode::Local) => {
            "Dependabot configuration already exists.".to_string()
        }
        (ScaffoldOutcome::ConfigExists { .. }, Mode::Action) => format!(
            "Dependabot configuration file already exists in {} (Delete if you need to create a GitHub Action)",
            paths::GITHUB_DIR
        ),
        (ScaffoldOutcome::WorkflowExists { .. }, _) => format!(
            "GitHub Actions workflow for checking dependabot already exists in {}. (Delete if you need to create a GitHub Action)",
            paths::WORKFLOWS_DIR
        ),
    }
}
