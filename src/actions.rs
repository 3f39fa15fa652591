//! Command handlers

use icon_sprites::RotatorError;
use thiserror::Error;

use crate::cli::{Cli, Commands, GenerateArgs, PlanArgs, RecolorArgs};
use crate::config::{Config, ConfigError};

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Sprites(#[from] RotatorError),
}

/// Dispatch a parsed command line.
pub fn run(cli: Cli) -> Result<(), AppError> {
    let config = cli.load_config()?;
    match &cli.command {
        Commands::Generate(args) => cmd_generate(&config, args),
        Commands::Recolor(args) => cmd_recolor(&config, args),
        Commands::Plan(args) => cmd_plan(&config, args),
    }
}

fn cmd_generate(config: &Config, args: &GenerateArgs) -> Result<(), AppError> {
    let options = args.apply(&config.generate).to_options()?;
    let report = icon_sprites::generate(&options)?;
    println!(
        "Generated {} sprites in {} ({} stale removed)",
        report.written.len(),
        options.output_dir.display(),
        report.removed.len()
    );
    Ok(())
}

fn cmd_recolor(config: &Config, args: &RecolorArgs) -> Result<(), AppError> {
    let options = args.apply(&config.recolor).to_options();
    let report = icon_sprites::recolor(&options)?;
    println!(
        "Recolored {} sprites in {}",
        report.recolored.len(),
        options.directory.display()
    );
    Ok(())
}

fn cmd_plan(config: &Config, args: &PlanArgs) -> Result<(), AppError> {
    let options = args.apply(&config.generate).to_options()?;
    let plan = icon_sprites::plan(&options)?;

    println!("Output: {}", plan.manifest.directory().display());
    println!("Writes {} sprites:", plan.manifest.len());
    for entry in plan.manifest.entries() {
        println!("  + {}", entry.path.display());
    }
    if plan.stale.is_empty() {
        println!("No stale sprites");
    } else {
        println!("Removes {} stale sprites:", plan.stale.len());
        for path in &plan.stale {
            println!("  - {}", path.display());
        }
    }
    Ok(())
}
