//! Blueprint logic simulator CLI.
//!
//! This binary loads a circuit blueprint image and drives it without a window. It provides:
//! 1. **Info:** Print what extraction found (gates, wires, crossings).
//! 2. **Run:** Toggle wires under given pixels, run a fixed number of ticks, print stats or a JSON dump.
//! 3. **Watch:** Run in real time at a fixed tick rate and log status lines, as the desktop front end would.

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::thread;
use std::time::{Duration, Instant};

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use bitwidgets_core::common::{CircuitError, ConfigError, LoadError, PixelCoord, WireId};
use bitwidgets_core::{CircuitModel, Config, RealtimeDriver};

#[derive(Parser, Debug)]
#[command(
    name = "bitwidgets",
    author,
    version,
    about = "Logic gate simulator using images as circuit blueprints",
    long_about = "Load a blueprint image, extract its gates and wires, and simulate it.\n\nWires are white, magenta, yellow or cyan traces. A red pixel next to a blue (NOT) or green (DIODE) pixel is a gate; other red pixels are crossings.\n\nExamples:\n  bitwidgets info circuit.png\n  bitwidgets run circuit.png --toggle 3,4 --ticks 10 --dump\n  bitwidgets watch circuit.png --rate 30 --seconds 10"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the extraction summary and gate list.
    Info {
        /// Blueprint image (PNG or BMP).
        image: PathBuf,

        /// JSON configuration file.
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Run a fixed number of ticks.
    Run {
        /// Blueprint image (PNG or BMP).
        image: PathBuf,

        /// Number of ticks to simulate.
        #[arg(short = 'n', long, default_value_t = 1)]
        ticks: u64,

        /// Toggle the wire under pixel X,Y before simulating (repeatable).
        #[arg(long, value_parser = parse_coord)]
        toggle: Vec<PixelCoord>,

        /// JSON configuration file.
        #[arg(long)]
        config: Option<PathBuf>,

        /// Print the final state as JSON instead of statistics.
        #[arg(long)]
        dump: bool,
    },

    /// Run in real time and log status lines.
    Watch {
        /// Blueprint image (PNG or BMP).
        image: PathBuf,

        /// How long to run, in seconds.
        #[arg(long, default_value_t = 5)]
        seconds: u64,

        /// Ticks per second (overrides the configuration).
        #[arg(short, long)]
        rate: Option<u32>,

        /// JSON configuration file.
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    Circuit(#[from] CircuitError),
    #[error("failed to serialize snapshot: {0}")]
    Json(#[from] serde_json::Error),
}

/// Parses `X,Y` into a pixel coordinate.
fn parse_coord(text: &str) -> Result<PixelCoord, String> {
    let (x, y) = text
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y, got '{text}'"))?;
    let x = x.trim().parse().map_err(|e| format!("bad X in '{text}': {e}"))?;
    let y = y.trim().parse().map_err(|e| format!("bad Y in '{text}': {e}"))?;
    Ok(PixelCoord::new(x, y))
}

fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    path.map_or_else(|| Ok(Config::default()), Config::from_file)
}

fn show_wire(id: Option<WireId>) -> String {
    id.map_or_else(|| "-".to_string(), |w| w.to_string())
}

fn cmd_info(image: &Path, config: Option<&Path>) -> Result<(), CliError> {
    let config = load_config(config)?;
    let model = CircuitModel::open_with_config(image, &config)?;
    let (width, height) = model.dimensions();

    println!("Blueprint: {} ({width}x{height})", image.display());
    model.stats().print_sections(&["circuit".to_string()]);
    for (i, gate) in model.gates().iter().enumerate() {
        println!(
            "  g{i:<4} {:<5} at {:<12} facing {:<5} in={:<6} out={}",
            gate.kind,
            gate.position.to_string(),
            gate.direction.to_string(),
            show_wire(gate.input_wire),
            show_wire(gate.output_wire),
        );
    }
    Ok(())
}

fn cmd_run(
    image: &Path,
    ticks: u64,
    toggles: &[PixelCoord],
    config: Option<&Path>,
    dump: bool,
) -> Result<(), CliError> {
    let config = load_config(config)?;
    let mut model = CircuitModel::open_with_config(image, &config)?;

    for &coord in toggles {
        match model.toggle_at(coord)? {
            Some(id) => info!(%coord, wire = %id, "toggled"),
            None => info!(%coord, "no wire at pixel"),
        }
    }
    model.step(ticks);

    if dump {
        println!("{}", model.snapshot().to_json()?);
    } else {
        for (i, wire) in model.wires().iter().enumerate() {
            println!(
                "  w{i:<4} {:<8} {:<4} {:>6} px{}",
                format!("{:?}", wire.color),
                wire.state.to_string(),
                wire.len(),
                if wire.touchable { "" } else { "  (driven)" }
            );
        }
        model.stats().print();
    }
    Ok(())
}

fn cmd_watch(
    image: &Path,
    seconds: u64,
    rate: Option<u32>,
    config: Option<&Path>,
) -> Result<(), CliError> {
    let mut config = load_config(config)?;
    if let Some(rate) = rate {
        config.driver.rate_hz = rate;
    }
    let mut model = CircuitModel::open_with_config(image, &config)?;
    let mut driver = RealtimeDriver::new(&config.driver);

    let frame = Duration::from_millis(16);
    let total = Duration::from_secs(seconds);
    let start = Instant::now();
    while start.elapsed() < total {
        let elapsed = start.elapsed();
        let _report = driver.advance(&mut model, elapsed);
        if driver.should_report(elapsed) {
            info!("[BITWIDGETS] {}", model.stats().summary_line());
        }
        thread::sleep(frame);
    }
    model.stats().print();
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let result = match &cli.command {
        Commands::Info { image, config } => cmd_info(image, config.as_deref()),
        Commands::Run {
            image,
            ticks,
            toggle,
            config,
            dump,
        } => cmd_run(image, *ticks, toggle, config.as_deref(), *dump),
        Commands::Watch {
            image,
            seconds,
            rate,
            config,
        } => cmd_watch(image, *seconds, *rate, config.as_deref()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\n[!] FATAL: {e}");
            ExitCode::FAILURE
        }
    }
}
