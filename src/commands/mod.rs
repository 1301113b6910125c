//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `budget.rs` — budget/phase/export/render: everything that aggregates.
//! - `content.rs` — list/show/validate: plan inspection without aggregation.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate calculation and rendering to `services/*`.
//! - Keep behavior and output schema stable.

pub mod budget;
pub mod content;

pub use budget::handle_budget_commands;
pub use content::{handle_content_commands, handle_validate};
