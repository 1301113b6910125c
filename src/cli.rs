use crate::domain::constants::DEFAULT_PLAN_DIR;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "stead", version, about = "Homestead build-plan budget CLI")]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        default_value = DEFAULT_PLAN_DIR,
        help = "Plan directory containing project.json and phase data"
    )]
    pub plan: PathBuf,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List phases and their section titles
    List,
    /// Show one section's full content
    Show {
        section: String,
    },
    /// Project budget summary: total plus per-phase percentages
    Budget,
    /// Per-step budget breakdown for one phase
    Phase {
        name: String,
    },
    /// Export the project budget as CSV
    Export {
        #[arg(long, help = "Write to this file instead of stdout")]
        output: Option<PathBuf>,
    },
    /// Render HTML fragments for the budget or one phase's content
    Render {
        #[arg(long, help = "Render this phase's section content instead of the summary")]
        phase: Option<String>,
        #[arg(long, help = "Write to this file instead of stdout")]
        output: Option<PathBuf>,
    },
    /// Check every data source referenced by the plan manifest
    Validate,
}
