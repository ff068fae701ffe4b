//! PISO shift register simulator CLI.
//!
//! This binary runs one scenario and prints the serial output trace. It performs:
//! 1. **Configuration:** Built-in defaults, optionally a JSON file, then flag overrides.
//! 2. **Stimulus:** The reference reset-load-shift script, or a JSON script file.
//! 3. **Report:** One `PISO Serial Out: <bit>` line per sample, optional statistics.

use std::path::{Path, PathBuf};
use std::{fs, process};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use piso_core::config::{Config, ResetMode};
use piso_core::{ConfigError, Sample, Script, Testbench};

#[derive(Parser, Debug)]
#[command(
    name = "piso",
    author,
    version,
    about = "Parallel-in serial-out shift register simulator",
    long_about = "Reset the register, load a parallel pattern, and shift it out one bit per clock.\n\nExamples:\n  piso\n  piso --width 8 --pattern 0xA5 --cycles 8\n  piso --config piso.json --stats\n  RUST_LOG=trace piso --script steps.json"
)]
struct Cli {
    /// JSON configuration file; flags below override its values.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// JSON stimulus script (array of steps) replacing the reference script.
    #[arg(short, long)]
    script: Option<PathBuf>,

    /// Register width in bits.
    #[arg(short, long)]
    width: Option<u32>,

    /// Parallel pattern to load (decimal, 0x hex, or 0b binary).
    #[arg(short, long, value_parser = parse_pattern)]
    pattern: Option<u64>,

    /// Shift cycles to record after the script.
    #[arg(short = 'n', long)]
    cycles: Option<usize>,

    /// Treat a high reset pin as asserted.
    #[arg(long)]
    reset_active_high: bool,

    /// Clear the register as soon as reset is asserted.
    #[arg(long)]
    async_reset: bool,

    /// Reject patterns wider than the register instead of truncating.
    #[arg(long)]
    strict: bool,

    /// Print run statistics after the trace.
    #[arg(long)]
    stats: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = build_config(&cli).unwrap_or_else(|e| {
        eprintln!("[!] FATAL: {e}");
        process::exit(1);
    });
    tracing::debug!(?config, "configuration loaded");

    let script = cli.script.as_deref().map(|path| {
        load_script(path).unwrap_or_else(|e| {
            eprintln!("[!] FATAL: Could not load script '{}': {e}", path.display());
            process::exit(1);
        })
    });

    let (tb, samples) = simulate(&config, script.as_ref()).unwrap_or_else(|e| {
        eprintln!("[!] FATAL: {e}");
        process::exit(1);
    });

    report(&samples);
    if cli.stats {
        tb.stats().print();
    }
}

/// Merges the optional configuration file with command-line overrides.
fn build_config(cli: &Cli) -> Result<Config, ConfigError> {
    let mut config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    if let Some(width) = cli.width {
        config.width = width;
    }
    if let Some(pattern) = cli.pattern {
        config.initial_pattern = pattern;
    }
    if let Some(cycles) = cli.cycles {
        config.shift_cycles = cycles;
    }
    if cli.reset_active_high {
        config.reset_active_low = false;
    }
    if cli.async_reset {
        config.reset_mode = ResetMode::Asynchronous;
    }
    if cli.strict {
        config.strict_width = true;
    }
    config.validate()?;
    Ok(config)
}

/// Runs `script` when one was given, otherwise the configured reference scenario.
fn simulate(
    config: &Config,
    script: Option<&Script>,
) -> Result<(Testbench, Vec<Sample>), ConfigError> {
    match script {
        Some(script) => {
            let mut tb = Testbench::new(config)?;
            let samples = tb.run(script, config.shift_cycles);
            Ok((tb, samples))
        }
        None => Testbench::scenario(config),
    }
}

fn load_script(path: &Path) -> Result<Script, String> {
    let text = fs::read_to_string(path).map_err(|e| e.to_string())?;
    Script::from_json_str(&text).map_err(|e| e.to_string())
}

fn report(samples: &[Sample]) {
    for sample in samples {
        println!("{sample}");
    }
}

/// Parses a pattern written in decimal, `0x` hexadecimal, or `0b` binary.
fn parse_pattern(s: &str) -> Result<u64, String> {
    let s = s.replace('_', "");
    let parsed = if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        u64::from_str_radix(hex, 16)
    } else if let Some(bin) = s.strip_prefix("0b").or_else(|| s.strip_prefix("0B")) {
        u64::from_str_radix(bin, 2)
    } else {
        s.parse()
    };
    parsed.map_err(|e| format!("invalid pattern '{s}': {e}"))
}
