//! CSV assembly for the project budget.
//!
//! Layout matches the published export format: one data row per material,
//! a PHASE TOTAL row per phase and a trailing PROJECT TOTAL row. Name
//! fields are always quoted (embedded quotes doubled); numeric fields are
//! written bare, without decimals when whole.

use crate::domain::constants::CSV_HEADER;
use crate::domain::models::ProjectBudget;

pub fn project_csv(budget: &ProjectBudget) -> String {
    let mut csv = String::new();
    csv.push_str(CSV_HEADER);
    csv.push('\n');

    for phase in &budget.phases {
        for step in &phase.steps {
            for material in &step.materials {
                csv.push_str(&format!(
                    "{},{},{},{},{},{}\n",
                    field(&phase.name),
                    field(&step.title),
                    field(&material.name),
                    number(f64::from(material.quantity)),
                    number(material.unit_cost),
                    number(material.line_total()),
                ));
            }
        }
        csv.push_str(&format!(
            "{},\"PHASE TOTAL\",\"\",\"\",\"\",{}\n",
            field(&phase.name),
            number(phase.total),
        ));
    }

    csv.push_str(&format!(
        "\"PROJECT TOTAL\",\"\",\"\",\"\",\"\",{}\n",
        number(budget.total),
    ));
    csv
}

fn field(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

fn number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{Material, Phase, Step};
    use crate::services::budget::project_budget;

    fn material(name: &str, unit_cost: f64, quantity: u32) -> Material {
        Material {
            name: name.to_string(),
            unit_cost,
            quantity,
            display_cost: None,
        }
    }

    fn sample_budget() -> ProjectBudget {
        let phases = vec![
            Phase {
                name: "Phase 1".to_string(),
                steps: vec![Step {
                    title: "Water System".to_string(),
                    materials: vec![material("Pump", 8500.0, 1), material("Panel", 1600.0, 2)],
                    ..Step::default()
                }],
            },
            Phase {
                name: "Phase 2".to_string(),
                steps: vec![Step {
                    title: "Kitchen".to_string(),
                    materials: vec![material("Stove", 3300.0, 1)],
                    ..Step::default()
                }],
            },
        ];
        project_budget(&phases)
    }

    #[test]
    fn row_count_is_materials_plus_phase_totals_plus_one() {
        let csv = project_csv(&sample_budget());
        let rows: Vec<&str> = csv.lines().collect();
        // header + 3 materials + 2 phase totals + 1 project total
        assert_eq!(rows.len(), 7);
        assert_eq!(rows[0], "Phase,Step,Material,Quantity,Unit Cost,Total Cost");
    }

    #[test]
    fn material_rows_carry_line_totals() {
        let csv = project_csv(&sample_budget());
        assert!(csv.contains("\"Phase 1\",\"Water System\",\"Pump\",1,8500,8500"));
        assert!(csv.contains("\"Phase 1\",\"Water System\",\"Panel\",2,1600,3200"));
    }

    #[test]
    fn totals_rows_close_each_phase_and_the_project() {
        let csv = project_csv(&sample_budget());
        assert!(csv.contains("\"Phase 1\",\"PHASE TOTAL\",\"\",\"\",\"\",11700"));
        assert!(csv.contains("\"Phase 2\",\"PHASE TOTAL\",\"\",\"\",\"\",3300"));
        assert!(csv.ends_with("\"PROJECT TOTAL\",\"\",\"\",\"\",\"\",15000\n"));
    }

    #[test]
    fn embedded_quotes_and_commas_stay_inside_the_field() {
        let phases = vec![Phase {
            name: "Phase 1".to_string(),
            steps: vec![Step {
                title: "Fencing, gates".to_string(),
                materials: vec![material("Wire \"heavy\" gauge", 100.0, 1)],
                ..Step::default()
            }],
        }];
        let csv = project_csv(&project_budget(&phases));
        assert!(csv.contains("\"Fencing, gates\",\"Wire \"\"heavy\"\" gauge\""));
    }
}
