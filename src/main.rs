//! Handle-Scout main entry point
//!
//! Command-line interface for the handle-availability scanner. `main`
//! doubles as the supervisor: it owns the shared scan state, races the
//! engine against Ctrl-C, and guarantees a best-effort final checkpoint
//! flush before any abnormal exit.

use clap::Parser;
use handle_scout::checkpoint::Checkpoint;
use handle_scout::config::{load_config_with_hash, Config};
use handle_scout::engine::ScanEngine;
use handle_scout::input::read_handles;
use handle_scout::state::ScanState;
use handle_scout::HttpClassifier;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tracing_subscriber::EnvFilter;

/// Handle-Scout: a resumable handle-availability scanner
///
/// Checks each handle from a newline-delimited list against the target
/// platform and reports which ones are still unclaimed. Progress is
/// checkpointed after every handle, so an interrupted run picks up where
/// it left off.
#[derive(Parser, Debug)]
#[command(name = "handle-scout")]
#[command(version = "0.5.0")]
#[command(about = "A resumable handle-availability scanner", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(value_name = "CONFIG")]
    config: PathBuf,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Ignore any existing checkpoint and start a fresh scan
    #[arg(long)]
    fresh: bool,

    /// Validate config and show what would be scanned without scanning
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    // Load and validate configuration
    tracing::info!("Loading configuration from: {}", cli.config.display());
    let (config, config_hash) = match load_config_with_hash(&cli.config) {
        Ok((cfg, hash)) => (cfg, hash),
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Read the handle list; nothing to scan is a fatal startup condition
    let handles = match read_handles(Path::new(&config.input.handles_path)) {
        Ok(handles) => handles,
        Err(e) => {
            tracing::error!("{}", e);
            std::process::exit(1);
        }
    };

    if cli.dry_run {
        handle_dry_run(&config, &handles);
        return;
    }

    // Rehydrate prior progress unless a fresh scan was requested
    let checkpoint = Checkpoint::new(&config.output, &config_hash);
    let state = checkpoint.initial_state(cli.fresh);

    if !state.checked.is_empty() {
        println!(
            "Resuming — already checked {}/{} handles",
            state.checked.len(),
            handles.len()
        );
    }

    let classifier = match HttpClassifier::new(&config.platform, &config.scan) {
        Ok(classifier) => classifier,
        Err(e) => {
            tracing::error!("Failed to build classifier: {}", e);
            std::process::exit(1);
        }
    };

    let state = Arc::new(Mutex::new(state));
    let mut engine = ScanEngine::new(
        classifier,
        checkpoint.clone(),
        Arc::clone(&state),
        &config.scan,
    );

    // Supervisor: race the engine against an external interrupt. On either
    // abnormal outcome, flush whatever state accumulated and exit non-zero.
    tokio::select! {
        result = engine.run(&handles) => match result {
            Ok(summary) => {
                println!(
                    "\nDone — {} available handle(s) written to {}",
                    summary.total_available,
                    checkpoint.available_path().display()
                );
            }
            Err(e) => {
                tracing::error!("Scan failed: {}", e);
                flush_best_effort(&checkpoint, &state);
                std::process::exit(1);
            }
        },
        _ = tokio::signal::ctrl_c() => {
            eprintln!("\nInterrupted (Ctrl-C) — progress saved.");
            flush_best_effort(&checkpoint, &state);
            std::process::exit(1);
        }
    }
}

/// Final flush on the abnormal-exit path.
///
/// The per-handle flush already covers everything up to the in-flight
/// handle; this covers an interrupt landing mid-classification. A failure
/// here is only logged, the process is exiting non-zero either way.
fn flush_best_effort(checkpoint: &Checkpoint, state: &Arc<Mutex<ScanState>>) {
    let snapshot = state
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .clone();

    if let Err(e) = checkpoint.flush(&snapshot) {
        tracing::error!("Final checkpoint flush failed: {}", e);
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("handle_scout=info,warn"),
            1 => EnvFilter::new("handle_scout=debug,info"),
            2 => EnvFilter::new("handle_scout=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles the --dry-run mode: validates config and shows the scan plan
fn handle_dry_run(config: &Config, handles: &[String]) {
    println!("=== Handle-Scout Dry Run ===\n");

    println!("Scan Configuration:");
    println!("  Inter-handle delay: {}ms", config.scan.delay_ms);
    println!(
        "  Navigation timeout: {}ms",
        config.scan.navigation_timeout_ms
    );
    println!("  Max retries per handle: {}", config.scan.max_retries);
    println!("  User agent: {}", config.scan.user_agent);

    println!("\nPlatform:");
    println!("  Base URL: {}", config.platform.base_url);

    println!("\nArtifacts:");
    println!("  Handle list: {}", config.input.handles_path);
    println!("  Checkpoint: {}", config.output.checkpoint_path);
    println!("  Available handles: {}", config.output.available_path);

    println!("\n✓ Configuration is valid");
    println!("✓ Would scan {} distinct handle(s)", handles.len());
}
