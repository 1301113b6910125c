//! HTML fragment rendering and currency formatting.
//!
//! Renderers are pure string producers: the CLI writes fragments to stdout
//! or a file and leaves page shells, styling and wiring to the consumer.
//! All interpolated text is escaped. Materials whose source cost was a
//! display-only string are shown verbatim and carry no computed total.

use crate::domain::models::{PhaseSummary, ProjectBudget, Step};
use crate::services::config::Config;

pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Currency display: configurable prefix, thousands grouped with commas,
/// two decimals only when the amount is not whole. Non-finite amounts
/// render as zero rather than leaking NaN into markup.
pub fn format_currency(amount: f64, config: &Config) -> String {
    if !amount.is_finite() {
        return format!("{}0", config.currency);
    }
    let negative = amount < 0.0;
    let amount = amount.abs();
    let whole = amount.trunc() as u64;
    let grouped = group_thousands(whole);
    let body = if amount.fract() == 0.0 {
        grouped
    } else {
        format!("{grouped}.{:02}", (amount.fract() * 100.0).round() as u64)
    };
    format!(
        "{}{}{}",
        if negative { "-" } else { "" },
        config.currency,
        body
    )
}

fn group_thousands(mut value: u64) -> String {
    let mut groups = Vec::new();
    loop {
        let chunk = value % 1000;
        value /= 1000;
        if value == 0 {
            groups.push(chunk.to_string());
            break;
        }
        groups.push(format!("{chunk:03}"));
    }
    groups.reverse();
    groups.join(",")
}

pub fn is_high_cost(cost: f64, config: &Config) -> bool {
    cost >= config.high_cost_threshold
}

/// Project cost summary table: one row per phase with its percentage of
/// the total, closed by a 100% total row.
pub fn project_summary_html(budget: &ProjectBudget, config: &Config) -> String {
    let mut html = String::new();
    html.push_str("<section class=\"budget-summary\">\n");
    html.push_str("<h2>Project Cost Summary</h2>\n");
    html.push_str(&format!(
        "<div class=\"budget-overview\"><span class=\"label\">Total Project Cost:</span> <span class=\"amount\">{}</span></div>\n",
        format_currency(budget.total, config)
    ));
    html.push_str("<table class=\"budget-table\">\n");
    html.push_str(&format!(
        "<thead><tr><th>Phase</th><th>Cost ({})</th><th>% of Total</th></tr></thead>\n",
        escape_html(&config.currency)
    ));
    html.push_str("<tbody>\n");

    for phase in &budget.phases {
        let row_class = if is_high_cost(phase.total, config) {
            " class=\"high-cost-row\""
        } else {
            ""
        };
        html.push_str(&format!(
            "<tr{}><td>{}</td><td class=\"cost-cell\">{}</td><td class=\"percentage-cell\">{:.1}%</td></tr>\n",
            row_class,
            escape_html(&phase.name),
            format_currency(phase.total, config),
            phase.percent_of_total,
        ));
    }

    html.push_str(&format!(
        "<tr class=\"total-row\"><td><strong>Total</strong></td><td class=\"cost-cell\"><strong>{}</strong></td><td class=\"percentage-cell\"><strong>100%</strong></td></tr>\n",
        format_currency(budget.total, config)
    ));
    html.push_str("</tbody>\n</table>\n</section>\n");
    html
}

/// Per-step budget breakdown for one phase. Steps without materials are
/// skipped; they have nothing to itemize.
pub fn phase_budget_html(phase: &PhaseSummary, config: &Config) -> String {
    let mut html = String::new();
    html.push_str("<div class=\"budget-section\">\n");
    html.push_str(&format!(
        "<h3>{} Budget Breakdown</h3>\n",
        escape_html(&phase.name)
    ));
    for step in &phase.steps {
        if step.materials.is_empty() {
            continue;
        }
        html.push_str("<div class=\"budget-step\">\n");
        html.push_str(&format!(
            "<h4>{} <span class=\"step-cost\">{}</span></h4>\n",
            escape_html(&step.title),
            format_currency(step.total, config)
        ));
        html.push_str(&materials_list_html(&step.materials, config));
        html.push_str("</div>\n");
    }
    html.push_str(&format!(
        "<div class=\"phase-total\"><strong>Phase Total:</strong> <span class=\"cost-amount\">{}</span></div>\n",
        format_currency(phase.total, config)
    ));
    html.push_str("</div>\n");
    html
}

fn materials_list_html(
    materials: &[crate::domain::models::Material],
    config: &Config,
) -> String {
    if materials.is_empty() {
        return "<p class=\"no-data\">No materials listed</p>\n".to_string();
    }
    let mut html = String::from("<ul class=\"materials-list\">\n");
    for material in materials {
        let line_total = material.line_total();
        let high = is_high_cost(line_total, config);
        let class = if high { " class=\"high-cost-item\"" } else { "" };
        let badge = if high {
            " <span class=\"high-cost-badge\">High Cost</span>"
        } else {
            ""
        };
        let price = match &material.display_cost {
            Some(display) => escape_html(display),
            None if material.quantity > 1 => format!(
                "({}x {}) {}",
                material.quantity,
                format_currency(material.unit_cost, config),
                format_currency(line_total, config)
            ),
            None => format_currency(line_total, config),
        };
        html.push_str(&format!(
            "<li{}><span class=\"material-name\">{} - {}</span>{}</li>\n",
            class,
            escape_html(&material.name),
            price,
            badge
        ));
    }
    html.push_str("</ul>\n");
    html
}

/// Full content fragment for one section: days, goal, materials,
/// numbered instructions, tools, tips and safety notes.
pub fn step_content_html(step: &Step, config: &Config) -> String {
    let mut html = String::from("<section>\n");
    let heading = match &step.days {
        Some(days) => format!("{} (Days {})", step.title, days),
        None => step.title.clone(),
    };
    html.push_str(&format!("<h2>{}</h2>\n", escape_html(&heading)));

    if let Some(goal) = &step.goal {
        html.push_str(&format!(
            "<p class=\"goal\"><strong>Goal:</strong> {}</p>\n",
            escape_html(goal)
        ));
    }
    if let Some(hours) = step.estimated_time_hours {
        html.push_str(&format!(
            "<p><strong>Estimated Time:</strong> {hours} hours</p>\n"
        ));
    }

    if !step.materials.is_empty() {
        html.push_str("<h3>Materials Required</h3>\n");
        html.push_str(&materials_list_html(&step.materials, config));
    }

    if !step.instructions.is_empty() {
        html.push_str("<h3>Step-by-Step Instructions</h3>\n<div class=\"step-by-step\">\n");
        for (index, instruction) in step.instructions.iter().enumerate() {
            html.push_str(&format!(
                "<div class=\"step\"><strong>Step {}</strong><br>{}</div>\n",
                index + 1,
                escape_html(&instruction.text)
            ));
        }
        html.push_str("</div>\n");
    }

    if !step.tools.is_empty() {
        html.push_str("<h3>Tools</h3>\n<ul class=\"tools-list\">\n");
        for tool in &step.tools {
            html.push_str(&format!("<li>{}</li>\n", escape_html(tool)));
        }
        html.push_str("</ul>\n");
    }

    for tip in &step.tips {
        html.push_str(&format!("<div class=\"tip\">{}</div>\n", escape_html(tip)));
    }
    for note in &step.safety {
        html.push_str(&format!(
            "<div class=\"warning\">{}</div>\n",
            escape_html(note)
        ));
    }

    if !step.images.is_empty() {
        html.push_str("<h3>Reference Images</h3>\n");
        for image in &step.images {
            let alt = image.description.as_deref().unwrap_or("Reference image");
            html.push_str(&format!(
                "<div class=\"diagram\"><img src=\"{}\" alt=\"{}\" loading=\"lazy\"></div>\n",
                escape_html(&image.path),
                escape_html(alt)
            ));
        }
    }

    html.push_str("</section>\n");
    html
}
