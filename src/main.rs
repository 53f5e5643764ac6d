//! Command-line front end: load the playoff field, plan every round, print the report.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use playoff_core::{render_report, write_report, PlanSummary, PlannerConfig, Round};

#[derive(Parser, Debug)]
#[command(name = "playoff-planner", about = "Plan single-use fantasy lineups across the playoff bracket")]
struct Cli {
    /// Planner configuration (JSON)
    #[arg(short, long)]
    config: PathBuf,

    /// Directory holding the team stat sheets; defaults to the config's directory
    #[arg(short, long)]
    roster_dir: Option<PathBuf>,

    /// Also save the text report to this file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Rounds to plan, in order (defaults to the whole bracket)
    #[arg(long, value_delimiter = ',')]
    rounds: Vec<Round>,

    /// Print the plan as JSON instead of the text report
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = PlannerConfig::from_file(&cli.config)
        .with_context(|| format!("loading configuration from {:?}", cli.config))?;
    let roster_dir = cli.roster_dir.clone().unwrap_or_else(|| {
        cli.config
            .parent()
            .map(|p| p.to_path_buf())
            .unwrap_or_default()
    });

    let mut driver = config.driver(&roster_dir).context("loading team rosters")?;

    let rounds = if cli.rounds.is_empty() {
        Round::ALL.to_vec()
    } else {
        cli.rounds.clone()
    };
    info!("Planning rounds: {:?}", rounds);

    let plan = driver.run(&rounds);
    let summary = PlanSummary::new(&plan, driver.store(), driver.valuator());
    let report = render_report(&summary);

    if cli.json {
        println!("{}", summary.to_json());
    } else {
        print!("{}", report);
    }

    if let Some(path) = &cli.output {
        write_report(path, &report)?;
    }

    Ok(())
}
