//! Quickiter CLI
//!
//! Runs a generator from the command line and prints what it produces, or
//! cross-checks the generators against the Python reference oracle.

use anyhow::{bail, Context};
use clap::{Parser, Subcommand, ValueEnum};
use quickiter::config::{GeneratorConfig, OracleConfig};
use quickiter::oracle::ReferenceOracle;
use quickiter::{Spawner, VERSION};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use std::path::PathBuf;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "quickiter")]
#[command(author, version, about = "Itertools-style generators on rendezvous channels", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text, global = true)]
    format: Format,

    /// Generator configuration file (JSON)
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Verbose output (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Count from START in steps of STEP
    Count {
        #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
        start: i64,
        #[arg(long, default_value_t = 1, allow_hyphen_values = true)]
        step: i64,
        /// How many values to print
        #[arg(short, long, default_value_t = 10)]
        take: usize,
    },

    /// Repeat a list of values
    Cycle {
        /// Comma-separated values
        #[arg(value_delimiter = ',', allow_hyphen_values = true, required = true)]
        values: Vec<i64>,
        /// How many values to print
        #[arg(short, long, default_value_t = 10)]
        take: usize,
    },

    /// Running fold over a list of values
    Accumulate {
        /// Comma-separated values
        #[arg(value_delimiter = ',', allow_hyphen_values = true)]
        values: Vec<i64>,
        /// Fold operation
        #[arg(long, value_enum, default_value_t = FoldOp::Add)]
        op: FoldOp,
        /// Seed value, emitted first
        #[arg(long, allow_hyphen_values = true)]
        init: Option<i64>,
    },

    /// Concatenate lists
    Chain {
        /// Comma-separated lists; pass "" for an empty one
        #[arg(allow_hyphen_values = true)]
        sequences: Vec<String>,
    },

    /// Successive overlapping pairs
    Pairwise {
        /// Comma-separated values
        #[arg(value_delimiter = ',', allow_hyphen_values = true)]
        values: Vec<i64>,
    },

    /// Cross-check the generators against the Python reference oracle
    Verify {
        /// Random seed
        #[arg(long, default_value_t = 42)]
        seed: u64,
        /// Number of random cases per generator
        #[arg(long, default_value_t = 20)]
        rounds: usize,
        /// Python interpreter
        #[arg(long)]
        python: Option<String>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
enum FoldOp {
    Add,
    Sub,
    Mul,
    Max,
    Min,
}

impl FoldOp {
    fn apply(self, acc: i64, next: i64) -> i64 {
        match self {
            FoldOp::Add => acc.wrapping_add(next),
            FoldOp::Sub => acc.wrapping_sub(next),
            FoldOp::Mul => acc.wrapping_mul(next),
            FoldOp::Max => acc.max(next),
            FoldOp::Min => acc.min(next),
        }
    }
}

fn main() {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    setup_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn setup_logging(verbosity: u8) {
    let default = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_spawner(path: Option<&PathBuf>) -> anyhow::Result<Spawner> {
    let config = match path {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            GeneratorConfig::from_json(&text).with_context(|| format!("parsing {}", path.display()))?
        }
        None => GeneratorConfig::default(),
    };
    debug!(?config, "generator configuration");
    Ok(Spawner::new(config))
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let spawner = load_spawner(cli.config.as_ref())?;
    let format = cli.format;

    match cli.command {
        Commands::Count { start, step, take } => {
            let values = spawner.count(start, step)?.take_vec(take);
            print_values(format, &values)
        }
        Commands::Cycle { values, take } => {
            let values = spawner.cycle(values)?.take_vec(take);
            print_values(format, &values)
        }
        Commands::Accumulate { values, op, init } => {
            let fold = move |acc, next| op.apply(acc, next);
            let values = match init {
                Some(initial) => spawner.accumulate_with_init(values, fold, initial)?.drain(),
                None => spawner.accumulate(values, fold)?.drain(),
            };
            print_values(format, &values)
        }
        Commands::Chain { sequences } => {
            let nested = sequences
                .iter()
                .map(|s| parse_list(s))
                .collect::<anyhow::Result<Vec<_>>>()?;
            let values = spawner.chain_from_iterable(nested)?.drain();
            print_values(format, &values)
        }
        Commands::Pairwise { values } => {
            let pairs = spawner.pairwise(values)?.drain();
            print_pairs(format, &pairs)
        }
        Commands::Verify { seed, rounds, python } => {
            let mut config = OracleConfig::default();
            if let Some(python) = python {
                config.interpreter = python;
            }
            verify(&spawner, ReferenceOracle::with_config(config), seed, rounds)
        }
    }
}

/// Parse "1,2,3" (or "" for an empty list)
fn parse_list(text: &str) -> anyhow::Result<Vec<i64>> {
    text.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(|item| item.parse::<i64>().with_context(|| format!("invalid integer '{}'", item)))
        .collect()
}

fn print_values<T: std::fmt::Display + Serialize>(format: Format, values: &[T]) -> anyhow::Result<()> {
    match format {
        Format::Text => {
            for value in values {
                println!("{}", value);
            }
        }
        Format::Json => println!("{}", serde_json::to_string(values)?),
    }
    Ok(())
}

fn print_pairs(format: Format, pairs: &[(i64, i64)]) -> anyhow::Result<()> {
    match format {
        Format::Text => {
            for (a, b) in pairs {
                println!("{},{}", a, b);
            }
        }
        Format::Json => println!("{}", serde_json::to_string(pairs)?),
    }
    Ok(())
}

fn random_sequence(rng: &mut StdRng) -> Vec<i64> {
    let n: usize = rng.gen_range(1..=100);
    (0..n).map(|_| rng.gen_range(-1000..1000)).collect()
}

fn verify(spawner: &Spawner, oracle: ReferenceOracle, seed: u64, rounds: usize) -> anyhow::Result<()> {
    println!("Quickiter {} - verifying against {}", VERSION, oracle.config().interpreter);

    if !oracle.is_available() {
        bail!(
            "reference oracle '{}' is not available (script dir {})",
            oracle.config().interpreter,
            oracle.config().script_dir.display()
        );
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let mut failures = 0usize;

    for round in 0..rounds {
        let start: i64 = rng.gen_range(-1_000_000..1_000_000);
        let step: i64 = rng.gen_range(-1000..1000);
        let n: usize = rng.gen_range(1..=100);
        let got = spawner.count(start, step)?.take_vec(n);
        let want = oracle.count(start, step, n)?;
        if got != want {
            warn!(round, start, step, n, "count mismatch");
            failures += 1;
        }

        let data = random_sequence(&mut rng);
        let got = spawner.accumulate(data.clone(), |a: i64, b| a + b)?.drain();
        let want = oracle.accumulate(&data)?;
        if got != want {
            warn!(round, len = data.len(), "accumulate mismatch");
            failures += 1;
        }

        let data = random_sequence(&mut rng);
        let got = spawner.pairwise(data.clone())?.drain();
        let want = oracle.pairwise(&data)?;
        if got != want {
            warn!(round, len = data.len(), "pairwise mismatch");
            failures += 1;
        }

        info!(round, "round checked");
    }

    let checks = rounds * 3;
    println!("{} checks, {} passed, {} failed", checks, checks - failures, failures);
    if failures > 0 {
        bail!("{} of {} checks disagreed with the reference oracle", failures, checks);
    }
    Ok(())
}
