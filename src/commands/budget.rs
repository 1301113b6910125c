use crate::cli::{Cli, Commands};
use crate::domain::models::{PhaseReport, Project};
use crate::services::budget::{phase_budget, project_budget};
use crate::services::config::Config;
use crate::services::export::project_csv;
use crate::services::output::{emit_document, print_one};
use crate::services::render::{
    format_currency, phase_budget_html, project_summary_html, step_content_html,
};
use std::path::Path;

pub fn handle_budget_commands(
    cli: &Cli,
    project: &Project,
    config: &Config,
) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Budget => {
            let budget = project_budget(&project.phases);
            if cli.json {
                print_one(true, budget, |_| String::new())?;
            } else {
                println!(
                    "Total Project Cost: {}",
                    format_currency(budget.total, config)
                );
                for phase in &budget.phases {
                    println!(
                        "{}\t{}\t{:.1}%",
                        phase.name,
                        format_currency(phase.total, config),
                        phase.percent_of_total
                    );
                }
            }
        }
        Commands::Phase { name } => {
            let phase = find_phase(project, name)?;
            let budget = phase_budget(&phase.steps);
            let report = PhaseReport {
                name: phase.name.clone(),
                total: budget.total,
                steps: budget.steps,
            };
            if cli.json {
                print_one(true, report, |_| String::new())?;
            } else {
                println!(
                    "{}: {}",
                    report.name,
                    format_currency(report.total, config)
                );
                for step in &report.steps {
                    println!(
                        "{}\t{}\t{}",
                        step.step_number,
                        step.title,
                        format_currency(step.total, config)
                    );
                }
            }
        }
        Commands::Export { output } => {
            let csv = project_csv(&project_budget(&project.phases));
            let target = output
                .as_deref()
                .map(|path| resolve_export_path(path, config));
            emit_document(cli.json, target.as_deref(), csv)?;
        }
        Commands::Render { phase, output } => {
            let html = match phase {
                Some(name) => {
                    let phase = find_phase(project, name)?;
                    phase
                        .steps
                        .iter()
                        .map(|step| step_content_html(step, config))
                        .collect::<String>()
                }
                None => {
                    let budget = project_budget(&project.phases);
                    let mut html = project_summary_html(&budget, config);
                    for summary in &budget.phases {
                        html.push_str(&phase_budget_html(summary, config));
                    }
                    html
                }
            };
            emit_document(cli.json, output.as_deref(), html)?;
        }
        Commands::List | Commands::Show { .. } | Commands::Validate => {
            unreachable!("handled by content commands")
        }
    }
    Ok(())
}

fn find_phase<'a>(
    project: &'a Project,
    name: &str,
) -> anyhow::Result<&'a crate::domain::models::Phase> {
    project
        .phases
        .iter()
        .find(|p| p.name.eq_ignore_ascii_case(name))
        .ok_or_else(|| anyhow::anyhow!("unknown phase: {name}"))
}

/// Exporting onto an existing directory picks the configured file name.
fn resolve_export_path(path: &Path, config: &Config) -> std::path::PathBuf {
    if path.is_dir() {
        path.join(&config.export_filename)
    } else {
        path.to_path_buf()
    }
}

