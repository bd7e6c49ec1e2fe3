//! `registrar plan` command - dry-run a registration against an in-memory host

use console::style;
use miette::Result;
use std::path::PathBuf;

use crate::host::{InstanceId, MemoryHost};
use crate::registrar::Registrar;

#[derive(clap::Args, Debug)]
pub struct PlanArgs {
    /// Schema document (.yaml or .json)
    pub schema: PathBuf,
}

pub fn run(args: PlanArgs) -> Result<()> {
    let schema = super::load_schema(&args.schema)?;

    // a host exposing every capability, so the plan shows the full pass
    let mut host = MemoryHost::new(InstanceId(1));
    Registrar::new(&mut host).register(&schema)?;

    println!(
        "{} {} host operation(s):",
        style("→").blue(),
        host.log.len()
    );
    for op in &host.log {
        println!("  {}", op);
    }
    Ok(())
}
