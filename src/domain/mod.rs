//! Shared data model layer (structs/constants only).
//!
//! ## Purpose
//! - Keep the canonical plan model and report structs in one place.
//! - Make JSON output schema changes explicit and reviewable.
//!
//! ## Files
//! - `models.rs` — canonical plan types, budget/report/output structs.
//! - `constants.rs` — stable defaults (plan dir, CSV header, thresholds).
//!
//! ## Rule of thumb
//! Domain types should be data-only: no filesystem side effects. Shape
//! coercion happens once, in `services::loader`, so everything downstream of
//! ingestion works on a single canonical `Project`.
//!
//! ## Compatibility note
//! Changes in these structs can affect `--json` outputs and the CSV layout.
//! Keep schema-impacting changes synchronized with `docs/contracts/*`.

pub mod constants;
pub mod models;
