//! CLI argument definitions using clap derive

use clap::{Parser, Subcommand};

use crate::cli::commands::{check::CheckArgs, plan::PlanArgs, validate::ValidateArgs};

#[derive(Parser)]
#[command(name = "registrar")]
#[command(author, version, about = "Declarative schema registrar for automation host modules")]
#[command(
    long_about = "Validates and dry-runs declarative module schemas: properties, attributes, display variables, and shared presentation profiles."
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate a schema document against category requirements
    Validate(ValidateArgs),

    /// Report variables whose type disagrees with their profile
    Check(CheckArgs),

    /// Dry-run a full registration and print the host operations
    Plan(PlanArgs),
}
