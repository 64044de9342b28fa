//! Categories command - list the catalogue and the active subject format.

use anyhow::Result;
use clap::Args;
use forge_config::Configuration;
use forge_grammar::{format_example, Category};
use serde_json::{json, Value};

#[derive(Args, Debug, Default)]
pub struct CategoriesArgs {
    /// Output the catalogue as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn execute(args: CategoriesArgs, config: &Configuration) -> Result<()> {
    if args.json {
        println!("{}", serde_json::to_string_pretty(&catalogue_json(config))?);
        return Ok(());
    }

    println!("Allowed categories:");
    for category in Category::ALL {
        println!("  {} {}: {}", category.icon(), category.keyword(), category.description());
    }

    println!();
    println!("Commit title format:");
    println!("  {}", format_example(config).trim_matches('"'));

    Ok(())
}

fn catalogue_json(config: &Configuration) -> Value {
    let categories: Vec<Value> = Category::ALL
        .iter()
        .map(|category| {
            json!({
                "category": category,
                "icon": category.icon(),
                "description": category.description(),
            })
        })
        .collect();

    json!({
        "categories": categories,
        "format": format_example(config).trim_matches('"'),
    })
}
