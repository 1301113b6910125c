//! Service layer containing the aggregation logic and side-effect helpers.
//!
//! ## Service map
//! - `loader.rs` — plan ingestion: manifest walk + shape normalization.
//! - `budget.rs` — line/step/phase/project cost aggregation.
//! - `export.rs` — CSV assembly.
//! - `render.rs` — HTML fragments + currency formatting.
//! - `config.rs` — optional per-plan `stead.toml`.
//! - `output.rs` — JSON/text envelopes + document (file-or-stdout) output.
//!
//! ## Conventions
//! - Prefer pure helpers where possible; `budget`, `export` and `render`
//!   never touch the filesystem.
//! - Malformed data coerces toward zero/default at ingestion and is never
//!   an error past that point.
//! - Keep command handlers thin; delegate to services.

pub mod budget;
pub mod config;
pub mod export;
pub mod loader;
pub mod output;
pub mod render;
