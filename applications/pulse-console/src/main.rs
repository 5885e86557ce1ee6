/// Pulse Console - drive the Pulse Player controller from a terminal
use anyhow::Context;
use clap::Parser;
use pulse_console::{Session, SessionOptions};
use pulse_playback::PlayerConfig;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "pulse-console")]
#[command(about = "Headless Pulse Player session on a simulated clock", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Read commands from a file instead of stdin
    #[arg(short, long)]
    script: Option<PathBuf>,

    /// Print player events as JSON lines
    #[arg(long)]
    json: bool,

    /// Seed for shuffle picks
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout stays machine readable with --json
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pulse_console=info,pulse_playback=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    let config = PlayerConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    tracing::info!(tracks = config.seed.len(), "Starting Pulse Console");

    let mut session = Session::new(
        &config,
        SessionOptions {
            json: cli.json,
            seed: cli.seed,
        },
    )?;

    let stdout = io::stdout();
    let mut output = stdout.lock();

    match cli.script {
        Some(path) => {
            let script = File::open(&path)
                .with_context(|| format!("Failed to open script {}", path.display()))?;
            session.run(BufReader::new(script), &mut output)?;
        }
        None => {
            let stdin = io::stdin();
            session.run(stdin.lock(), &mut output)?;
        }
    }

    Ok(())
}
