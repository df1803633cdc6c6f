// Main entry point for the application

use clap::{Parser, Subcommand};
use hashfix::common::types::DEFAULT_ROOT;
use hashfix::oracle::self_test;
use hashfix::progress::fixture_progress_bar;
use hashfix::{os_seeded_rng, verify_corpus, Algorithm, FixtureConfig, FixtureGenerator};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

#[derive(Parser)]
#[command(name = "hashfix")]
#[command(about = "Generate and verify digest-named hash test fixtures", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write fresh random fixtures for each algorithm
    Generate {
        /// Fixture root directory
        #[arg(long, default_value = DEFAULT_ROOT)]
        root: PathBuf,

        /// Fixtures per algorithm
        #[arg(short = 'n', long, default_value_t = 8)]
        repetitions: usize,

        /// Restrict to these algorithms (repeatable; default: all)
        #[arg(short, long = "algorithm")]
        algorithms: Vec<Algorithm>,

        /// Seed for a reproducible corpus (default: OS randomness)
        #[arg(long)]
        seed: Option<u64>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Re-hash every fixture and check it against its file name
    Verify {
        /// Fixture root directory
        #[arg(long, default_value = DEFAULT_ROOT)]
        root: PathBuf,

        /// Restrict to these algorithms (repeatable; default: all)
        #[arg(short, long = "algorithm")]
        algorithms: Vec<Algorithm>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// List supported algorithms and their digest lengths
    Algorithms,

    /// Check the reference hashers against known-answer vectors
    Selftest,
}

fn build_config(root: PathBuf, algorithms: Vec<Algorithm>) -> Result<FixtureConfig> {
    let config = FixtureConfig::new(root);
    if algorithms.is_empty() {
        Ok(config)
    } else {
        Ok(config.with_algorithms(algorithms)?)
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate { root, repetitions, algorithms, seed, json } => {
            let config = build_config(root, algorithms)?.with_repetitions(repetitions)?;

            let mut rng = match seed {
                Some(seed) => {
                    log::info!("Using fixed seed {}", seed);
                    StdRng::seed_from_u64(seed)
                }
                None => os_seeded_rng()?,
            };

            let generator = FixtureGenerator::new(config)?;
            let progress = fixture_progress_bar(generator.planned_fixtures() as u64, "Generating");
            let report = generator.with_progress(progress).generate_all(&mut rng)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("Fixture root: {:?}", report.root);
                for summary in &report.algorithms {
                    println!(
                        "  {:<10} {} files, {} bytes",
                        summary.algorithm.name(),
                        summary.fixtures.len(),
                        summary.bytes()
                    );
                }
                println!(
                    "Total: {} files, {} bytes ({} overwritten)",
                    report.total_files, report.total_bytes, report.overwritten
                );
            }
        }

        Commands::Verify { root, algorithms, json } => {
            let config = build_config(root, algorithms)?;
            let progress = fixture_progress_bar(0, "Verifying");
            let report = verify_corpus(&config, Some(&progress))?;

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                for result in &report.algorithms {
                    println!(
                        "  {:<10} {}/{} ok",
                        result.algorithm.name(),
                        result.passed,
                        result.files
                    );
                }
                for algorithm in &report.missing {
                    println!("  {:<10} missing", algorithm.name());
                }
                for failure in &report.failures {
                    println!("FAILED {:?}: {}", failure.path, failure.reason);
                }
            }

            if !report.is_success() {
                return Err(format!(
                    "{} fixture(s) failed, {} algorithm(s) missing",
                    report.failures.len(),
                    report.missing.len()
                )
                .into());
            }
            if !json {
                println!("All {} fixtures verified", report.checked);
            }
        }

        Commands::Algorithms => {
            for algorithm in Algorithm::ALL {
                println!("{:<10} {:>3} hex chars", algorithm.name(), algorithm.hex_len());
            }
        }

        Commands::Selftest => {
            let failures = self_test();
            if !failures.is_empty() {
                for failure in &failures {
                    eprintln!(
                        "{} {}: expected {}, got {}",
                        failure.algorithm, failure.label, failure.expected, failure.actual
                    );
                }
                return Err(format!("{} known-answer vector(s) failed", failures.len()).into());
            }
            println!("All known-answer vectors passed");
        }
    }

    Ok(())
}
