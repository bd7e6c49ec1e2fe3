//! `registrar validate` command - check schema items against category requirements

use console::style;
use miette::Result;
use std::path::PathBuf;

use crate::core::types::{Category, ValueType};
use crate::schema::validator;

#[derive(clap::Args, Debug)]
pub struct ValidateArgs {
    /// Schema document (.yaml or .json)
    pub schema: PathBuf,

    /// Continue validation after the first failing item
    #[arg(long)]
    pub keep_going: bool,
}

pub fn run(args: ValidateArgs) -> Result<()> {
    let schema = super::load_schema(&args.schema)?;

    let sections: [(Category, &[(String, crate::schema::ItemSpec)]); 3] = [
        (Category::Property, &schema.properties),
        (Category::Attribute, &schema.attributes),
        (Category::Variable, &schema.variables),
    ];

    let mut checked = 0usize;
    let mut failures = 0usize;

    'sections: for (category, items) in sections {
        for (ident, item) in items {
            checked += 1;
            if let Err(e) = validator::validate(category, item) {
                failures += 1;
                eprintln!(
                    "{} {} '{}': {} (required: {})",
                    style("✗").red(),
                    category,
                    ident,
                    e,
                    category.required_fields().join(", ")
                );
                if !args.keep_going {
                    break 'sections;
                }
            }
        }
    }

    if failures == 0 || args.keep_going {
        for (name, profile) in &schema.profiles {
            checked += 1;
            let type_name = profile.value_type.as_deref().unwrap_or_default();
            if ValueType::parse(type_name).is_err() {
                failures += 1;
                eprintln!(
                    "{} profile '{}': unsupported type '{}'",
                    style("✗").red(),
                    name,
                    type_name
                );
                if !args.keep_going {
                    break;
                }
            }
        }
    }

    if failures > 0 {
        return Err(miette::miette!(
            "{} of {} item(s) failed validation",
            failures,
            checked
        ));
    }

    println!(
        "{} {} item(s) valid ({} properties, {} attributes, {} variables, {} profiles)",
        style("✓").green(),
        checked,
        schema.properties.len(),
        schema.attributes.len(),
        schema.variables.len(),
        schema.profiles.len()
    );
    Ok(())
}
