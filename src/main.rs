use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use dish_grouping::{batch, config::SolverConfig, logging};

#[derive(Parser, Debug)]
#[command(name = "dish-grouping", about = "Group dishes to maximize distinct ingredients per group")]
struct Args {
    /// TOML solver configuration
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory holding instance files
    #[arg(long)]
    input_dir: Option<PathBuf>,

    /// Directory receiving plan files (created if missing)
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Randomized trials per instance
    #[arg(long)]
    trials: Option<usize>,

    #[arg(long)]
    seed: Option<u64>,
}

impl Args {
    fn into_config(self) -> Result<SolverConfig> {
        let mut config = match &self.config {
            Some(path) => SolverConfig::load(path)
                .with_context(|| format!("loading config {}", path.display()))?,
            None => SolverConfig::default(),
        };
        if let Some(dir) = self.input_dir {
            config = config.with_input_dir(dir);
        }
        if let Some(dir) = self.output_dir {
            config = config.with_output_dir(dir);
        }
        if let Some(trials) = self.trials {
            config = config.with_trial_count(trials);
        }
        if let Some(seed) = self.seed {
            config = config.with_random_seed(seed);
        }
        config.validate()?;
        Ok(config)
    }
}

fn main() -> Result<()> {
    logging::init();
    let config = Args::parse().into_config()?;
    let reports = batch::run(&config)
        .with_context(|| format!("solving instances in {}", config.input_dir.display()))?;
    for report in &reports {
        println!("{}\t{}\t{}", report.name, report.group_count, report.score);
    }
    Ok(())
}
