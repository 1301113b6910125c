//! Plan ingestion: manifest walk plus shape normalization.
//!
//! A plan directory holds a `project.json` manifest listing phases in order.
//! Two source shapes exist:
//! - sections phase: `dir` + `files`, one JSON file per section, numeric costs;
//! - bundle phase: one `file` holding an ordered map of section name -> section,
//!   costs usually pre-formatted currency strings.
//!
//! Everything funnels through one normalization pass producing the canonical
//! `Project`. Coercion is tolerant: a missing or non-numeric cost
//! becomes 0 (string costs are kept verbatim for display, never parsed), an
//! absent or non-positive quantity becomes 1. A section file or bundle that
//! cannot be read or parsed is logged and contributes nothing; only a broken
//! manifest is a hard error.

use crate::domain::constants::MANIFEST_FILE;
use crate::domain::models::{
    CheckItem, Image, Instruction, Material, Phase, Project, Step, ValidateReport,
};
use serde::Deserialize;
use serde_json::Value;
use std::path::Path;
use tracing::warn;

#[derive(Debug, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phases: Vec<ManifestPhase>,
}

#[derive(Debug, Deserialize)]
pub struct ManifestPhase {
    pub name: String,
    #[serde(default)]
    pub dir: Option<String>,
    #[serde(default)]
    pub files: Vec<String>,
    #[serde(default)]
    pub file: Option<String>,
}

/// Raw section as found on disk. Every field is captured as a loose JSON
/// value so one malformed field never rejects the whole section.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawSection {
    title: Value,
    days: Value,
    goal: Value,
    materials: Value,
    steps: Value,
    tools: Value,
    tips: Value,
    safety: Value,
    images: Value,
    estimated_time_hours: Value,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawMaterial {
    item: Value,
    name: Value,
    cost: Value,
    quantity: Value,
}

pub fn load_manifest(plan_dir: &Path) -> anyhow::Result<Manifest> {
    let path = plan_dir.join(MANIFEST_FILE);
    if !path.exists() {
        anyhow::bail!("plan manifest not found: {}", path.display());
    }
    let raw = std::fs::read_to_string(&path)?;
    Ok(serde_json::from_str(&raw)?)
}

/// Load and normalize the whole plan. Phases appear in manifest order; a
/// phase whose data cannot be loaded stays in place with zero sections.
pub fn load_project(plan_dir: &Path) -> anyhow::Result<Project> {
    let manifest = load_manifest(plan_dir)?;
    let name = if manifest.name.is_empty() {
        "Homestead Project".to_string()
    } else {
        manifest.name
    };
    let phases = manifest
        .phases
        .iter()
        .map(|entry| load_phase(plan_dir, entry))
        .collect();
    Ok(Project { name, phases })
}

fn load_phase(plan_dir: &Path, entry: &ManifestPhase) -> Phase {
    if let Some(file) = &entry.file {
        return load_bundle_phase(plan_dir, &entry.name, file);
    }
    if let Some(dir) = &entry.dir {
        return load_sections_phase(plan_dir, &entry.name, dir, &entry.files);
    }
    warn!(phase = %entry.name, "manifest entry has neither dir nor file");
    Phase {
        name: entry.name.clone(),
        steps: vec![],
    }
}

fn load_sections_phase(plan_dir: &Path, name: &str, dir: &str, files: &[String]) -> Phase {
    let mut steps = Vec::new();
    for file in files {
        let path = plan_dir.join(dir).join(format!("{file}.json"));
        let raw = match std::fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(err) => {
                warn!(path = %path.display(), %err, "skipping unreadable section file");
                continue;
            }
        };
        match serde_json::from_str::<RawSection>(&raw) {
            Ok(section) => steps.push(normalize_section(section, file)),
            Err(err) => {
                warn!(path = %path.display(), %err, "skipping malformed section file");
            }
        }
    }
    Phase {
        name: name.to_string(),
        steps,
    }
}

fn load_bundle_phase(plan_dir: &Path, name: &str, file: &str) -> Phase {
    let path = plan_dir.join(file);
    let empty = Phase {
        name: name.to_string(),
        steps: vec![],
    };
    let raw = match std::fs::read_to_string(&path) {
        Ok(raw) => raw,
        Err(err) => {
            warn!(path = %path.display(), %err, "phase bundle unreadable, phase contributes zero");
            return empty;
        }
    };
    let value: Value = match serde_json::from_str(&raw) {
        Ok(value) => value,
        Err(err) => {
            warn!(path = %path.display(), %err, "phase bundle malformed, phase contributes zero");
            return empty;
        }
    };
    let Some(map) = value.as_object() else {
        warn!(path = %path.display(), "phase bundle is not an object, phase contributes zero");
        return empty;
    };

    // serde_json is built with preserve_order, so bundle sections keep
    // their insertion order and totals/percentages stay reproducible.
    let steps = map
        .iter()
        .map(|(section_name, section)| {
            match serde_json::from_value::<RawSection>(section.clone()) {
                Ok(raw) => normalize_section(raw, section_name),
                Err(err) => {
                    warn!(section = %section_name, %err, "section entry malformed, kept empty");
                    Step {
                        title: section_name.to_string(),
                        ..Step::default()
                    }
                }
            }
        })
        .collect();

    Phase {
        name: name.to_string(),
        steps,
    }
}

fn normalize_section(raw: RawSection, fallback_title: &str) -> Step {
    let title = opt_string(&raw.title).unwrap_or_else(|| fallback_title.to_string());
    let materials = match raw.materials.as_array() {
        Some(entries) => entries.iter().map(normalize_material).collect(),
        None => vec![],
    };
    let instructions = match raw.steps.as_array() {
        Some(entries) => entries.iter().filter_map(normalize_instruction).collect(),
        None => vec![],
    };
    Step {
        title,
        days: string_or_number(&raw.days),
        goal: opt_string(&raw.goal),
        materials,
        instructions,
        tools: string_list(&raw.tools),
        tips: text_list(&raw.tips),
        safety: string_list(&raw.safety),
        images: image_list(&raw.images),
        estimated_time_hours: raw.estimated_time_hours.as_f64(),
    }
}

fn normalize_material(value: &Value) -> Material {
    let raw: RawMaterial = serde_json::from_value(value.clone()).unwrap_or_default();
    let name = opt_string(&raw.item)
        .or_else(|| opt_string(&raw.name))
        .unwrap_or_else(|| "Unnamed item".to_string());
    let (unit_cost, display_cost) = coerce_cost(&raw.cost);
    Material {
        name,
        unit_cost,
        quantity: coerce_quantity(&raw.quantity),
        display_cost,
    }
}

/// Numeric cost -> unit cost, clamped to a finite non-negative value.
/// String cost -> 0, kept verbatim for display only.
fn coerce_cost(value: &Value) -> (f64, Option<String>) {
    match value {
        Value::Number(n) => {
            let cost = n.as_f64().unwrap_or(0.0);
            if cost.is_finite() && cost > 0.0 {
                (cost, None)
            } else {
                (0.0, None)
            }
        }
        Value::String(s) => (0.0, Some(s.clone())),
        _ => (0.0, None),
    }
}

/// Absent or non-positive quantities count as a single unit.
fn coerce_quantity(value: &Value) -> u32 {
    match value.as_i64() {
        Some(q) if q >= 1 => u32::try_from(q).unwrap_or(u32::MAX),
        _ => 1,
    }
}

fn normalize_instruction(value: &Value) -> Option<Instruction> {
    match value {
        Value::String(text) => Some(Instruction {
            title: None,
            text: text.clone(),
        }),
        Value::Object(map) => {
            let title = map.get("title").and_then(Value::as_str).map(str::to_string);
            let text = map
                .get("description")
                .and_then(Value::as_str)
                .map(str::to_string)
                .or_else(|| title.clone())?;
            Some(Instruction { title, text })
        }
        _ => None,
    }
}

fn opt_string(value: &Value) -> Option<String> {
    value.as_str().map(str::to_string)
}

fn string_or_number(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn string_list(value: &Value) -> Vec<String> {
    match value.as_array() {
        Some(entries) => entries
            .iter()
            .filter_map(|v| v.as_str().map(str::to_string))
            .collect(),
        None => vec![],
    }
}

/// Tips are either bare strings or `{content}` objects.
fn text_list(value: &Value) -> Vec<String> {
    match value.as_array() {
        Some(entries) => entries
            .iter()
            .filter_map(|v| match v {
                Value::String(s) => Some(s.clone()),
                Value::Object(map) => map.get("content").and_then(Value::as_str).map(str::to_string),
                _ => None,
            })
            .collect(),
        None => vec![],
    }
}

/// Images are either bare path strings or `{name, description}` objects;
/// the description survives normalization to serve as alt text.
fn image_list(value: &Value) -> Vec<Image> {
    match value.as_array() {
        Some(entries) => entries
            .iter()
            .filter_map(|v| match v {
                Value::String(path) => Some(Image {
                    path: path.clone(),
                    description: None,
                }),
                Value::Object(map) => {
                    let path = map.get("name").and_then(Value::as_str)?;
                    Some(Image {
                        path: path.to_string(),
                        description: map
                            .get("description")
                            .and_then(Value::as_str)
                            .map(str::to_string),
                    })
                }
                _ => None,
            })
            .collect(),
        None => vec![],
    }
}

/// Per-source health report for `validate`. Never fails: a broken manifest
/// is itself reported as a failing check.
pub fn validate_plan(plan_dir: &Path) -> ValidateReport {
    let mut checks = Vec::new();

    let manifest = match load_manifest(plan_dir) {
        Ok(manifest) => {
            checks.push(CheckItem {
                name: MANIFEST_FILE.to_string(),
                status: "ok".to_string(),
            });
            Some(manifest)
        }
        Err(err) => {
            checks.push(CheckItem {
                name: MANIFEST_FILE.to_string(),
                status: format!("invalid: {err}"),
            });
            None
        }
    };

    if let Some(manifest) = manifest {
        for entry in &manifest.phases {
            if let Some(file) = &entry.file {
                checks.push(check_file(plan_dir, &plan_dir.join(file)));
            } else if let Some(dir) = &entry.dir {
                for file in &entry.files {
                    let path = plan_dir.join(dir).join(format!("{file}.json"));
                    checks.push(check_file(plan_dir, &path));
                }
            } else {
                checks.push(CheckItem {
                    name: entry.name.clone(),
                    status: "no data source".to_string(),
                });
            }
        }
    }

    let overall = if checks.iter().all(|c| c.status == "ok") {
        "ok".to_string()
    } else {
        "issues".to_string()
    };
    ValidateReport {
        overall,
        plan: plan_dir.display().to_string(),
        checks,
    }
}

fn check_file(plan_dir: &Path, path: &Path) -> CheckItem {
    let name = path
        .strip_prefix(plan_dir)
        .unwrap_or(path)
        .display()
        .to_string();
    let status = match std::fs::read_to_string(path) {
        Ok(raw) => match serde_json::from_str::<Value>(&raw) {
            Ok(_) => "ok".to_string(),
            Err(err) => format!("invalid: {err}"),
        },
        Err(_) => "missing".to_string(),
    };
    CheckItem { name, status }
}
