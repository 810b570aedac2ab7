// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! `euler` - search for fifth-power counterexamples to Euler's conjecture.
//!
//! **Usage:**
//! ```text
//! euler [--bound <N>] [--strategy <name>] [--width <auto|u64|u128>]
//!       [--bitmap-bits <2^k>] [--progress-interval <iterations>]
//! ```
//!
//! Matches and progress are logged through `tracing`; set `RUST_LOG` to
//! change verbosity (default `info`).

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use euler_search::config::{DEFAULT_BITMAP_BITS, DEFAULT_BOUND, DEFAULT_PROGRESS_INTERVAL};
use euler_search::{search, LogSink, SearchConfig, Strategy, Width};

/// Search for a^5 + b^5 + c^5 + d^5 = e^5 with all bases below a bound.
#[derive(Parser, Debug)]
#[command(name = "euler", version, about)]
struct Args {
    /// Table bound N: bases and roots are drawn from 0..N.
    #[arg(short = 'n', long, default_value_t = DEFAULT_BOUND)]
    bound: usize,

    /// Membership test: exact-map, bitmap-filtered, bucket-hash or range-scan.
    #[arg(short, long, default_value_t = Strategy::default())]
    strategy: Strategy,

    /// Integer width for powers: auto, u64 or u128.
    #[arg(short, long, default_value_t = Width::default())]
    width: Width,

    /// Bitmap bits or bucket count for the hashed strategies (power of two).
    #[arg(long, default_value_t = DEFAULT_BITMAP_BITS)]
    bitmap_bits: usize,

    /// Iterations between progress reports; 0 disables them.
    #[arg(long, default_value_t = DEFAULT_PROGRESS_INTERVAL)]
    progress_interval: u64,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let args = Args::parse();
    let config = SearchConfig {
        bound: args.bound,
        width: args.width,
        strategy: args.strategy,
        bitmap_bits: args.bitmap_bits,
        progress_interval: args.progress_interval,
    };

    let summary = search(&config, &mut LogSink, &mut LogSink)
        .with_context(|| format!("cannot search with bound {}", config.bound))?;

    println!(
        "Done in {:.3}s. itr: {} hits: {} sp: {} i/ms hh: {}",
        summary.elapsed.as_secs_f64(),
        summary.iterations(),
        summary.hits(),
        summary
            .throughput()
            .map_or_else(|| "-".to_string(), |v| v.to_string()),
        summary
            .filter_ratio()
            .map_or_else(|| "-".to_string(), |v| v.to_string()),
    );
    for root in &summary.roots {
        println!("primitive root: {root}");
    }

    Ok(())
}
