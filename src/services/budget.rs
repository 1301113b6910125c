//! Hierarchical cost aggregation: line -> step -> phase -> project.
//!
//! All functions are pure and total: malformed values were already coerced
//! at ingestion, so nothing here can fail or produce a non-finite number.
//! Order of phases and steps in every result follows input order.

use crate::domain::models::{
    Material, Phase, PhaseBudget, PhaseSummary, ProjectBudget, Step, StepBudget,
};

/// Unit cost times quantity for one material. Always finite; a material
/// whose source cost was non-numeric carries `unit_cost = 0`.
pub fn line_total(material: &Material) -> f64 {
    material.line_total()
}

/// Sum of line totals over a step's materials; 0 for an empty list.
pub fn step_total(step: &Step) -> f64 {
    step.materials.iter().map(line_total).sum()
}

/// Per-step breakdown for one phase's step sequence, input order preserved.
/// Untitled steps are reported as "Step N".
pub fn phase_budget(steps: &[Step]) -> PhaseBudget {
    let breakdown: Vec<StepBudget> = steps
        .iter()
        .enumerate()
        .map(|(index, step)| {
            let title = if step.title.is_empty() {
                format!("Step {}", index + 1)
            } else {
                step.title.clone()
            };
            StepBudget {
                step_number: index + 1,
                title,
                total: step_total(step),
                materials: step.materials.clone(),
            }
        })
        .collect();

    let total = breakdown.iter().map(|s| s.total).sum();
    PhaseBudget {
        total,
        steps: breakdown,
    }
}

/// Project-wide budget across all phases, in input order. Percentages are
/// filled in after the project total is known so they always refer to the
/// final total.
pub fn project_budget(phases: &[Phase]) -> ProjectBudget {
    let budgets: Vec<(String, PhaseBudget)> = phases
        .iter()
        .map(|phase| (phase.name.clone(), phase_budget(&phase.steps)))
        .collect();

    let total: f64 = budgets.iter().map(|(_, b)| b.total).sum();

    let phases = budgets
        .into_iter()
        .map(|(name, budget)| PhaseSummary {
            name,
            percent_of_total: percentage_of_total(budget.total, total),
            total: budget.total,
            steps: budget.steps,
        })
        .collect();

    ProjectBudget { total, phases }
}

/// Share of the project total, rounded to one decimal for display.
/// Defined as 0 when the project total is 0.
pub fn percentage_of_total(phase_total: f64, project_total: f64) -> f64 {
    if project_total <= 0.0 {
        return 0.0;
    }
    (phase_total / project_total * 100.0 * 10.0).round() / 10.0
}
