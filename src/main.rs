use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use statesim::config::{ConfigOverrides, OutputFormat, SimConfig};
use statesim::core::Machine;
use statesim::driver::{self, SessionOptions};
use statesim::machines::{AutomaticDoor, VendingMachine};
use statesim::runtime::Simulator;
use tokio::io::BufReader;
use tracing::info;

#[derive(Parser)]
#[command(name = "statesim")]
#[command(about = "Interactive State pattern simulators", long_about = None)]
struct Cli {
    /// Machine to simulate
    #[arg(value_enum)]
    machine: MachineKind,

    /// JSON config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output format (overrides the config file)
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Delay before Opening/Closing advance on their own
    #[arg(long)]
    auto_delay_ms: Option<u64>,

    /// Pause after each menu action
    #[arg(long = "pause-ms")]
    menu_pause_ms: Option<u64>,
}

#[derive(Clone, Copy, ValueEnum)]
enum MachineKind {
    /// Automatic door with timed opening and closing
    Door,
    /// Vending machine
    Vending,
}

impl Cli {
    fn config(&self) -> Result<SimConfig> {
        let config = match &self.config {
            Some(path) => SimConfig::load_from_file(path)
                .with_context(|| format!("failed to load config from {}", path.display()))?,
            None => SimConfig::default(),
        };
        let overrides = ConfigOverrides {
            format: self.format,
            auto_delay_ms: self.auto_delay_ms,
            menu_pause_ms: self.menu_pause_ms,
        };
        Ok(config.with_overrides(&overrides).checked()?)
    }
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

async fn simulate<M: Machine>(config: &SimConfig) -> Result<()> {
    let mut sim: Simulator<M> = Simulator::from_config(config);
    let options = SessionOptions::for_machine::<M>(config);
    info!(machine = M::NAME, ?options, "starting session");

    let input = BufReader::new(tokio::io::stdin());
    let mut output = tokio::io::stdout();
    let summary = driver::run(&mut sim, input, &mut output, &options)
        .await
        .context("session failed")?;

    info!(
        machine = M::NAME,
        events = summary.events,
        transitions = summary.transitions,
        auto_transitions = summary.auto_transitions,
        final_state = %summary.final_state,
        "session finished"
    );
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();
    let config = cli.config()?;

    match cli.machine {
        MachineKind::Door => simulate::<AutomaticDoor>(&config).await,
        MachineKind::Vending => simulate::<VendingMachine>(&config).await,
    }
}
