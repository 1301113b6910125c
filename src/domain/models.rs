use serde::Serialize;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

/// One purchasable line item, already normalized by ingestion.
///
/// A source cost that was not a JSON number (e.g. `"R8,500"`) keeps the
/// original string in `display_cost` and aggregates with `unit_cost = 0`;
/// string costs are display-only and never parsed as currency.
#[derive(Debug, Clone, Serialize)]
pub struct Material {
    pub name: String,
    pub unit_cost: f64,
    pub quantity: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_cost: Option<String>,
}

impl Material {
    pub fn line_total(&self) -> f64 {
        self.unit_cost * f64::from(self.quantity)
    }
}

/// A single instruction within a step. Sources supply either a bare string
/// or a `{title, description}` object; both normalize to this.
#[derive(Debug, Clone, Serialize)]
pub struct Instruction {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub text: String,
}

/// A reference image. Sources supply either a bare path string or a
/// `{name, description}` object; the description becomes alt text.
#[derive(Debug, Clone, Serialize)]
pub struct Image {
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// One plan section: a construction task with its materials and the content
/// carried for display (goal, tools, tips, safety notes, images).
#[derive(Debug, Clone, Default, Serialize)]
pub struct Step {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal: Option<String>,
    pub materials: Vec<Material>,
    pub instructions: Vec<Instruction>,
    pub tools: Vec<String>,
    pub tips: Vec<String>,
    pub safety: Vec<String>,
    pub images: Vec<Image>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_time_hours: Option<f64>,
}

/// A named group of steps representing one project stage.
#[derive(Debug, Clone, Serialize)]
pub struct Phase {
    pub name: String,
    pub steps: Vec<Step>,
}

/// The full plan: the top-level aggregation unit.
#[derive(Debug, Clone, Serialize)]
pub struct Project {
    pub name: String,
    pub phases: Vec<Phase>,
}

/// Per-step breakdown inside a phase budget. `step_number` is 1-based and
/// follows input order.
#[derive(Debug, Clone, Serialize)]
pub struct StepBudget {
    pub step_number: usize,
    pub title: String,
    pub total: f64,
    pub materials: Vec<Material>,
}

/// Budget for one phase's step sequence.
#[derive(Debug, Clone, Serialize)]
pub struct PhaseBudget {
    pub total: f64,
    pub steps: Vec<StepBudget>,
}

/// One row of the project summary. `percent_of_total` is rounded to one
/// decimal and 0 when the project total is 0.
#[derive(Debug, Clone, Serialize)]
pub struct PhaseSummary {
    pub name: String,
    pub total: f64,
    pub percent_of_total: f64,
    pub steps: Vec<StepBudget>,
}

/// Project-wide budget, phases in input order.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectBudget {
    pub total: f64,
    pub phases: Vec<PhaseSummary>,
}

/// `phase <name>` output: one phase's budget with its name attached.
#[derive(Debug, Clone, Serialize)]
pub struct PhaseReport {
    pub name: String,
    pub total: f64,
    pub steps: Vec<StepBudget>,
}

/// `list` output row.
#[derive(Debug, Clone, Serialize)]
pub struct PhaseInfo {
    pub name: String,
    pub section_count: usize,
    pub sections: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CheckItem {
    pub name: String,
    pub status: String,
}

/// `validate` output: one check per data source in the plan directory.
#[derive(Debug, Clone, Serialize)]
pub struct ValidateReport {
    pub overall: String,
    pub plan: String,
    pub checks: Vec<CheckItem>,
}
