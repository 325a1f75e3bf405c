use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use log::info;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use tsp_search::error::{Error, Result};
use tsp_search::io::read_coords;
use tsp_search::neighborhood::MoveOperator;
use tsp_search::render::write_tour_svg;
use tsp_search::search::{
    anneal, evolve, hillclimb_restarts, AnnealConfig, EvolveConfig, HillclimbConfig,
    SearchResult, TspProblem,
};

/// Local-search TSP solver.
#[derive(Debug, Parser)]
#[command(name = "tsp-search", version, about)]
struct Cli {
    /// TSPLIB-style city coordinate file.
    city_file: PathBuf,

    /// Objective evaluation budget.
    #[arg(short = 'n', long)]
    max_evaluations: u64,

    /// Search driver.
    #[arg(short = 'a', long, value_enum, default_value_t = Algorithm::Hillclimb)]
    algorithm: Algorithm,

    /// Neighborhood move operator.
    #[arg(short = 'm', long, value_enum, default_value_t = Move::ReversedSections)]
    move_operator: Move,

    /// Annealing schedule as `start_temp:alpha` (required for -a anneal).
    #[arg(long)]
    cooling: Option<String>,

    /// Population size (required for -a evolve).
    #[arg(long)]
    popsize: Option<usize>,

    /// Tournament size for the genetic driver.
    #[arg(long, default_value_t = 2)]
    tournament: usize,

    /// Mutation probability for the genetic driver.
    #[arg(long, default_value_t = 0.1)]
    mutation: f64,

    /// Seed for deterministic runs.
    #[arg(long)]
    seed: Option<u64>,

    /// Write the best tour as SVG.
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Write a JSON run report.
    #[arg(long)]
    report: Option<PathBuf>,

    /// Verbose logging.
    #[arg(short = 'v', long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Algorithm {
    Hillclimb,
    Anneal,
    Evolve,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Move {
    ReversedSections,
    SwappedCities,
}

impl From<Move> for MoveOperator {
    fn from(value: Move) -> Self {
        match value {
            Move::ReversedSections => MoveOperator::ReversedSections,
            Move::SwappedCities => MoveOperator::SwappedCities,
        }
    }
}

fn parse_cooling(cooling: &str) -> Result<(f64, f64)> {
    let (temp, alpha) = cooling.split_once(':').ok_or_else(|| {
        Error::configuration(format!("--cooling expects 'start_temp:alpha', got '{cooling}'"))
    })?;
    let temp: f64 = temp
        .parse()
        .map_err(|_| Error::configuration(format!("invalid start temperature '{temp}'")))?;
    let alpha: f64 = alpha
        .parse()
        .map_err(|_| Error::configuration(format!("invalid cooling factor '{alpha}'")))?;
    Ok((temp, alpha))
}

/// Resolves the annealing configuration, failing when `--cooling` is absent.
fn anneal_config(cli: &Cli) -> Result<AnnealConfig> {
    let cooling = cli.cooling.as_deref().ok_or_else(|| {
        Error::configuration("missing --cooling start_temp:alpha for annealing")
    })?;
    let (start_temp, alpha) = parse_cooling(cooling)?;
    Ok(AnnealConfig::new(cli.max_evaluations, start_temp, alpha))
}

/// Resolves the genetic configuration, failing when `--popsize` is absent.
fn evolve_config(cli: &Cli) -> Result<EvolveConfig> {
    let popsize = cli
        .popsize
        .ok_or_else(|| Error::configuration("missing --popsize for evolve"))?;
    Ok(EvolveConfig::new(cli.max_evaluations, popsize)
        .with_tournament_size(cli.tournament)
        .with_mutation_probability(cli.mutation))
}

fn run(cli: &Cli) -> Result<SearchResult> {
    let file = File::open(&cli.city_file)?;
    let points = read_coords(BufReader::new(file))?;
    let problem = TspProblem::new(points)?;
    info!(
        "loaded {} cities from {}",
        problem.num_cities(),
        cli.city_file.display()
    );

    let operator = MoveOperator::from(cli.move_operator);
    let mut rng = match cli.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_os_rng(),
    };

    let result = match cli.algorithm {
        Algorithm::Hillclimb => {
            let config = HillclimbConfig::new(cli.max_evaluations);
            hillclimb_restarts(&problem, operator, &config, &mut rng)?
        }
        Algorithm::Anneal => {
            let config = anneal_config(cli)?;
            anneal(&problem, operator, &config, &mut rng)?
        }
        Algorithm::Evolve => {
            let config = evolve_config(cli)?;
            evolve(&problem, operator, &config, &mut rng)?
        }
    };

    if let Some(path) = &cli.output {
        let title = format!("{}: {:.4}", cli.city_file.display(), result.best_length());
        let mut writer = BufWriter::new(File::create(path)?);
        write_tour_svg(problem.points(), &result.best, &title, &mut writer)?;
        writer.flush()?;
        info!("wrote tour image to {}", path.display());
    }

    if let Some(path) = &cli.report {
        let mut writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(&mut writer, &result)
            .map_err(|e| Error::invalid_input(format!("report serialization failed: {e}")))?;
        writer.flush()?;
        info!("wrote report to {}", path.display());
    }

    Ok(result)
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(if cli.verbose {
            log::LevelFilter::Info
        } else {
            log::LevelFilter::Warn
        })
        .target(env_logger::Target::Stderr)
        .init();

    match run(&cli) {
        Ok(result) => {
            println!(
                "{} {:.4} {:?}",
                result.evaluations,
                result.score,
                result.best.cities()
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cooling() {
        assert_eq!(parse_cooling("10:0.9").unwrap(), (10.0, 0.9));
        assert!(parse_cooling("10").is_err());
        assert!(parse_cooling("x:0.9").is_err());
        assert!(parse_cooling("10:y").is_err());
    }

    #[test]
    fn test_anneal_without_cooling_is_configuration_error() {
        let cli = Cli::parse_from(["tsp-search", "cities.tsp", "-n", "100", "-a", "anneal"]);
        let err = anneal_config(&cli).unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
        assert!(err.to_string().contains("--cooling"));
    }

    #[test]
    fn test_anneal_with_cooling_resolves() {
        let cli = Cli::parse_from([
            "tsp-search", "cities.tsp", "-n", "100", "-a", "anneal", "--cooling", "50:0.99",
        ]);
        let config = anneal_config(&cli).unwrap();
        assert_eq!(config.start_temp, 50.0);
        assert_eq!(config.alpha, 0.99);
        assert_eq!(config.max_evaluations, 100);
    }

    #[test]
    fn test_evolve_without_popsize_is_configuration_error() {
        let cli = Cli::parse_from(["tsp-search", "cities.tsp", "-n", "100", "-a", "evolve"]);
        let err = evolve_config(&cli).unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
        assert!(err.to_string().contains("--popsize"));
    }

    #[test]
    fn test_evolve_with_popsize_resolves() {
        let cli = Cli::parse_from([
            "tsp-search", "cities.tsp", "-n", "100", "-a", "evolve", "--popsize", "40",
            "--tournament", "3",
        ]);
        let config = evolve_config(&cli).unwrap();
        assert_eq!(config.population_size, 40);
        assert_eq!(config.tournament_size, 3);
    }

    #[test]
    fn test_cli_parses() {
        let cli = Cli::parse_from([
            "tsp-search",
            "cities.tsp",
            "-n",
            "1000",
            "-a",
            "anneal",
            "--cooling",
            "10:0.99",
            "--seed",
            "42",
        ]);
        assert!(matches!(cli.algorithm, Algorithm::Anneal));
        assert_eq!(cli.max_evaluations, 1000);
        assert_eq!(cli.seed, Some(42));
    }
}
