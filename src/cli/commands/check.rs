//! `registrar check` command - report variable/profile type mismatches

use console::style;
use miette::Result;
use std::path::PathBuf;

use crate::schema::check_type_consistency;

#[derive(clap::Args, Debug)]
pub struct CheckArgs {
    /// Schema document (.yaml or .json)
    pub schema: PathBuf,
}

pub fn run(args: CheckArgs) -> Result<()> {
    let schema = super::load_schema(&args.schema)?;
    let mismatches = check_type_consistency(&schema);

    if mismatches.is_empty() {
        println!(
            "{} {} variable(s) consistent with their profiles",
            style("✓").green(),
            schema.variables.len()
        );
        return Ok(());
    }

    for m in &mismatches {
        println!(
            "{} variable '{}' is {} but profile '{}' is {}",
            style("✗").red(),
            m.variable,
            m.variable_type,
            m.profile,
            m.profile_type
        );
    }
    Err(miette::miette!("{} type mismatch(es)", mismatches.len()))
}
