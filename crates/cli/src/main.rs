//! SRRIP trace-driven cache simulator CLI.
//!
//! This binary replays a memory-access trace through a set-associative cache
//! managed by the SRRIP replacement engine. It performs:
//! 1. **Configuration:** Built-in defaults, optionally overridden by a JSON file and flags.
//! 2. **Replay:** Feeds every access through the cache's hit/miss callbacks.
//! 3. **Reporting:** Prints cache and policy statistics as text or JSON.

use std::path::PathBuf;
use std::{fs, process};

use clap::{Parser, Subcommand, ValueEnum};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use srrip_core::config::{Config, SuppressionScope};
use srrip_core::sim::{self, trace};
use srrip_core::stats::ReplayStats;
use srrip_core::CacheSim;

#[derive(Parser, Debug)]
#[command(
    name = "srrip",
    author,
    version,
    about = "SRRIP cache replacement simulator",
    long_about = "Replay a memory-access trace through an SRRIP-managed set-associative cache.\n\nExamples:\n  srrip run --trace traces/scan.txt\n  srrip run --trace traces/scan.txt --config cache.json --json\n  srrip run --trace traces/scan.txt --rpv-max 7 --scope installed-line"
)]
struct Cli {
    /// Log policy decisions at debug level (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Replay a trace and print statistics.
    Run {
        /// Trace file (`R <addr>` / `W <addr>` per line).
        #[arg(short, long)]
        trace: PathBuf,

        /// JSON configuration file.
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Override the maximal RRPV.
        #[arg(long)]
        rpv_max: Option<u32>,

        /// Override the promotion suppression scope.
        #[arg(long, value_enum)]
        scope: Option<Scope>,

        /// Print statistics as JSON.
        #[arg(long)]
        json: bool,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Scope {
    /// Suppress the next promotion of any line.
    AnyLine,
    /// Suppress only a promotion of the just-installed line.
    InstalledLine,
}

impl From<Scope> for SuppressionScope {
    fn from(scope: Scope) -> Self {
        match scope {
            Scope::AnyLine => Self::AnyLine,
            Scope::InstalledLine => Self::InstalledLine,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Run {
            trace,
            config,
            rpv_max,
            scope,
            json,
        } => cmd_run(&trace, config.as_deref(), rpv_max, scope, json),
    }
}

/// Installs the fmt subscriber; `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Prints a fatal error and exits with status 1.
fn fatal(msg: &str) -> ! {
    eprintln!("\n[!] FATAL: {msg}");
    process::exit(1);
}

/// Loads the configuration file, if any, and applies flag overrides.
fn load_config(
    path: Option<&std::path::Path>,
    rpv_max: Option<u32>,
    scope: Option<Scope>,
) -> Config {
    let mut config = match path {
        Some(path) => {
            let text = fs::read_to_string(path).unwrap_or_else(|e| {
                fatal(&format!("could not read config '{}': {e}", path.display()))
            });
            Config::from_json(&text).unwrap_or_else(|e| {
                fatal(&format!("invalid config '{}': {e}", path.display()))
            })
        }
        None => Config::default(),
    };

    if let Some(rpv_max) = rpv_max {
        config.cache.srrip.rpv_max = rpv_max;
    }
    if let Some(scope) = scope {
        config.cache.srrip.suppression = scope.into();
    }
    config
}

/// Replays the trace and prints the resulting statistics.
fn cmd_run(
    trace_path: &std::path::Path,
    config_path: Option<&std::path::Path>,
    rpv_max: Option<u32>,
    scope: Option<Scope>,
    json: bool,
) {
    let config = load_config(config_path, rpv_max, scope);
    debug!(?config, "configuration loaded");

    let accesses = trace::load_trace(trace_path).unwrap_or_else(|e| fatal(&e.to_string()));
    let mut cache = CacheSim::new(&config.cache).unwrap_or_else(|e| fatal(&e.to_string()));
    let cache_stats =
        sim::replay(&mut cache, &accesses).unwrap_or_else(|e| fatal(&e.to_string()));

    let stats = ReplayStats {
        cache: cache_stats,
        policy: *cache.policy().stats(),
    };

    if json {
        match serde_json::to_string_pretty(&stats) {
            Ok(out) => println!("{out}"),
            Err(e) => fatal(&format!("could not serialize statistics: {e}")),
        }
    } else {
        let c = &config.cache;
        println!(
            "Configuration: {} bytes, {}-byte lines, {} ways, {} sets, rpv_max={}, scope={:?}",
            c.size_bytes,
            c.line_bytes,
            c.ways,
            cache.num_sets(),
            c.srrip.rpv_max,
            c.srrip.suppression
        );
        println!();
        println!("{stats}");
    }
}
