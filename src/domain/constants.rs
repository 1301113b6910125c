//! Stable defaults shared across commands and services.

/// Plan directory searched when `--plan` is not given.
pub const DEFAULT_PLAN_DIR: &str = "plan";

/// Manifest file expected at the root of every plan directory.
pub const MANIFEST_FILE: &str = "project.json";

/// Optional per-plan configuration file.
pub const CONFIG_FILE: &str = "stead.toml";

/// Currency prefix used when the plan does not configure one.
pub const DEFAULT_CURRENCY: &str = "R";

/// Line totals at or above this are flagged as high-cost in rendered output.
pub const DEFAULT_HIGH_COST_THRESHOLD: f64 = 10_000.0;

/// Default file name for `export` when `--output` names a directory.
pub const DEFAULT_EXPORT_FILENAME: &str = "homestead-budget.csv";

/// CSV header row, one data row per material below it.
pub const CSV_HEADER: &str = "Phase,Step,Material,Quantity,Unit Cost,Total Cost";
