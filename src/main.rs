use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing_subscriber::EnvFilter;

use qce_rs::SimulatorConfig;
use qce_rs::menu::Session;

/// Interactive state-vector quantum circuit simulator
#[derive(Debug, Parser)]
#[command(name = "qce", version, about)]
struct Args {
    /// Qubit count; skips the interactive prompt
    #[arg(short, long)]
    qubits: Option<usize>,

    /// Seed for measurement sampling
    #[arg(short, long)]
    seed: Option<u64>,

    /// Largest qubit count accepted by the prompt
    #[arg(long)]
    max_qubits: Option<usize>,

    /// Shots used by the histogram option
    #[arg(long)]
    shots: Option<usize>,

    /// Path to a TOML config file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
}

fn load_config(args: &Args) -> Result<SimulatorConfig> {
    let mut config = match &args.config {
        Some(path) => SimulatorConfig::from_file(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => SimulatorConfig::default(),
    };
    if let Some(max_qubits) = args.max_qubits {
        config.max_qubits = max_qubits;
    }
    if let Some(shots) = args.shots {
        config.shots = shots;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    config.validate().context("invalid settings")?;
    Ok(config)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("qce_rs=warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let config = load_config(&args)?;

    if let Some(n) = args.qubits {
        if n == 0 || n > config.max_qubits {
            bail!("--qubits must be between 1 and {}, got {}", config.max_qubits, n);
        }
    }

    let rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    tracing::info!(?config, "starting session");

    let stdin = io::stdin();
    let mut session =
        Session::new(stdin.lock(), io::stdout(), rng, config).with_qubits(args.qubits);
    session.run().context("interactive session failed")?;
    Ok(())
}
