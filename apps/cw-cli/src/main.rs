mod error;
mod table;

use clap::{Parser, Subcommand};
use cw_pipe::{Scenario, compare_iterations, district_heating_scenarios, evaluate_all};
use cw_solver::{Iterations, Operand, solve};
use error::{AppError, AppResult};
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "cw-cli")]
#[command(about = "Colebrook-White friction factor via Clamond's quartic iterations", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Friction factor for one or more Reynolds numbers
    Solve {
        /// Reynolds number(s), comma separated
        #[arg(short, long, value_delimiter = ',', required = true, allow_negative_numbers = true)]
        reynolds: Vec<f64>,
        /// Relative roughness eps/D
        #[arg(short = 'k', long, default_value_t = 0.0, allow_negative_numbers = true)]
        roughness: f64,
        /// Number of quartic iterations
        #[arg(long, default_value_t = 2, allow_negative_numbers = true)]
        iters: i64,
    },
    /// Evaluate district heating scenarios
    Scenarios {
        /// YAML scenario table (defaults to the built-in DH cases)
        #[arg(short, long)]
        file: Option<PathBuf>,
        /// Number of quartic iterations
        #[arg(long, default_value_t = 2, allow_negative_numbers = true)]
        iters: i64,
    },
    /// Compare results at two iteration counts for the feeder pipe case
    Compare {
        #[arg(long, default_value_t = 1)]
        coarse: usize,
        #[arg(long, default_value_t = 2)]
        fine: usize,
    },
}

fn main() -> AppResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Solve {
            reynolds,
            roughness,
            iters,
        } => cmd_solve(reynolds, roughness, iters),
        Commands::Scenarios { file, iters } => cmd_scenarios(file.as_deref(), iters),
        Commands::Compare { coarse, fine } => cmd_compare(coarse.into(), fine.into()),
    }
}

fn cmd_solve(reynolds: Vec<f64>, roughness: f64, iters: i64) -> AppResult<()> {
    let input = if reynolds.len() == 1 {
        Operand::Scalar(reynolds[0])
    } else {
        Operand::from(reynolds)
    };
    match solve(input, roughness, iters)? {
        Operand::Scalar(f) => println!("{f}"),
        Operand::Array(f) => println!("{f}"),
    }
    Ok(())
}

fn cmd_scenarios(file: Option<&Path>, iters: i64) -> AppResult<()> {
    let iters = Iterations::try_from(iters)?;
    let scenarios = match file {
        Some(path) => load_scenarios(path)?,
        None => district_heating_scenarios(),
    };
    if scenarios.is_empty() {
        return Err(AppError::InvalidInput("scenario table is empty".into()));
    }

    let results = evaluate_all(&scenarios, iters)?;
    print!("{}", table::render(&results, iters));
    Ok(())
}

fn cmd_compare(coarse: Iterations, fine: Iterations) -> AppResult<()> {
    let scenarios = district_heating_scenarios();
    let feeder = &scenarios[1];
    let cmp = compare_iterations(feeder, coarse, fine)?;
    print!("{}", table::render_comparison(&cmp));
    Ok(())
}

fn load_scenarios(path: &Path) -> AppResult<Vec<Scenario>> {
    let text = std::fs::read_to_string(path).map_err(|source| AppError::ScenarioFileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let scenarios: Vec<Scenario> =
        serde_yaml::from_str(&text).map_err(|source| AppError::ScenarioFileParse {
            path: path.to_path_buf(),
            source,
        })?;
    debug!(path = %path.display(), count = scenarios.len(), "loaded scenario table");
    Ok(scenarios)
}
