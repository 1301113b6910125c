use crate::cli::{Cli, Commands};
use crate::domain::models::{PhaseInfo, Project, Step};
use crate::services::config::Config;
use crate::services::loader::validate_plan;
use crate::services::output::{print_one, print_out};
use crate::services::render::format_currency;

pub fn handle_content_commands(
    cli: &Cli,
    project: &Project,
    config: &Config,
) -> anyhow::Result<()> {
    match &cli.command {
        Commands::List => {
            let infos: Vec<PhaseInfo> = project
                .phases
                .iter()
                .map(|phase| PhaseInfo {
                    name: phase.name.clone(),
                    section_count: phase.steps.len(),
                    sections: phase.steps.iter().map(|s| s.title.clone()).collect(),
                })
                .collect();
            print_out(cli.json, &infos, |p| {
                format!("{}\t{}", p.name, p.sections.join(", "))
            })?;
        }
        Commands::Show { section } => {
            let step = find_section(project, section)?;
            if cli.json {
                print_one(true, step, |_| String::new())?;
            } else {
                print_section(step, config);
            }
        }
        Commands::Budget
        | Commands::Phase { .. }
        | Commands::Export { .. }
        | Commands::Render { .. }
        | Commands::Validate => unreachable!("handled by budget commands or before loading"),
    }
    Ok(())
}

/// `validate` runs before the plan is loaded so a broken manifest is
/// reported as a failing check instead of aborting the command.
pub fn handle_validate(cli: &Cli) -> anyhow::Result<()> {
    let report = validate_plan(&cli.plan);
    if cli.json {
        print_one(true, report, |_| String::new())?;
    } else {
        println!("plan: {}", report.plan);
        println!("overall: {}", report.overall);
        for check in &report.checks {
            println!("{}\t{}", check.name, check.status);
        }
    }
    Ok(())
}

fn find_section<'a>(project: &'a Project, section: &str) -> anyhow::Result<&'a Step> {
    project
        .phases
        .iter()
        .flat_map(|phase| phase.steps.iter())
        .find(|step| step.title.eq_ignore_ascii_case(section))
        .ok_or_else(|| anyhow::anyhow!("unknown section: {section}"))
}

fn print_section(step: &Step, config: &Config) {
    println!("section: {}", step.title);
    if let Some(days) = &step.days {
        println!("days: {days}");
    }
    if let Some(goal) = &step.goal {
        println!("goal: {goal}");
    }
    if let Some(hours) = step.estimated_time_hours {
        println!("estimated hours: {hours}");
    }
    if !step.materials.is_empty() {
        println!("materials:");
        for material in &step.materials {
            let price = match &material.display_cost {
                Some(display) => display.clone(),
                None => format_currency(material.line_total(), config),
            };
            println!("- {}\t{}", material.name, price);
        }
    }
    if !step.instructions.is_empty() {
        println!("instructions:");
        for (index, instruction) in step.instructions.iter().enumerate() {
            println!("{}. {}", index + 1, instruction.text);
        }
    }
    if !step.tools.is_empty() {
        println!("tools: {}", step.tools.join(", "));
    }
    for tip in &step.tips {
        println!("tip: {tip}");
    }
    for note in &step.safety {
        println!("safety: {note}");
    }
}
