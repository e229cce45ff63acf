//! Command dispatcher that routes parsed clap `Commands` to their handlers.

use anyhow::{anyhow, Context, Result};
use cukai::config::Config;
use cukai::entity::EntityType;
use cukai::tax;
use cukai::utils::parse_profit;
use tracing::info;

use crate::cli::formatters;
use crate::cli::Commands;

/// Route a parsed command to its handler
pub fn dispatch_command(command: &Commands, config: &Config, json_output: bool) -> Result<()> {
    match command {
        Commands::Calculate {
            profit,
            entity,
            breakdown,
        } => dispatch_calculate(profit, entity.as_deref(), *breakdown, config, json_output),
        Commands::Compare { profit } => dispatch_compare(profit, json_output),
        Commands::Entities => dispatch_entities(json_output),
        Commands::Brackets { entity } => dispatch_brackets(entity, json_output),
    }
}

fn resolve_entity(flag: Option<&str>, config: &Config) -> Result<EntityType> {
    if let Some(selector) = flag {
        return Ok(selector.parse::<EntityType>()?);
    }
    config
        .default_entity()?
        .ok_or_else(|| anyhow!("no entity type given; pass --entity or set default_entity in config"))
}

fn dispatch_calculate(
    profit: &str,
    entity: Option<&str>,
    show_tiers: bool,
    config: &Config,
    json_output: bool,
) -> Result<()> {
    let entity_type = resolve_entity(entity, config)?;
    let profit = parse_profit(profit).context("failed to read profit")?;

    info!("Calculating {} tax on profit {}", entity_type, profit);
    let breakdown = tax::calculate_breakdown(entity_type, profit);

    if json_output {
        println!("{}", formatters::format_json(&breakdown));
    } else {
        print!("{}", formatters::format_breakdown_table(&breakdown, show_tiers));
    }
    Ok(())
}

fn dispatch_compare(profit: &str, json_output: bool) -> Result<()> {
    let profit = parse_profit(profit).context("failed to read profit")?;

    info!("Comparing entity types for profit {}", profit);
    let results = tax::compare_entities(profit);

    if json_output {
        println!("{}", formatters::format_json(&results));
    } else {
        print!("{}", formatters::format_comparison_table(&results));
    }
    Ok(())
}

fn dispatch_entities(json_output: bool) -> Result<()> {
    if json_output {
        println!("{}", formatters::format_json(&formatters::entities_json()));
    } else {
        print!("{}", formatters::format_entities_table());
    }
    Ok(())
}

fn dispatch_brackets(entity: &str, json_output: bool) -> Result<()> {
    let entity_type: EntityType = entity.parse()?;

    if json_output {
        println!("{}", formatters::format_json(&formatters::brackets_json(entity_type)));
    } else {
        print!("{}", formatters::format_schedule_table(entity_type));
    }
    Ok(())
}
