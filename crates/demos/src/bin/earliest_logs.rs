use anyhow::Result;
use clap::Parser;
use tracing::info;

use tk_core::logs::sample_logs;
use tk_runtime::{init_tracing, MetricsRegistry, Stopwatch};
use tk_views::{ByTimestamp, TopKConfig, TopKSelector};

/// Print the K earliest logs from an unsorted batch.
#[derive(Parser, Debug)]
struct Args {
    /// How many logs to keep
    #[arg(long, default_value_t = 3, allow_negative_numbers = true)]
    k: i64,
    /// Emit a JSON metrics line after the results
    #[arg(long)]
    metrics: bool,
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();
    let cfg = TopKConfig::from_signed(args.k)?;
    info!(k = cfg.k, "earliest_logs starting");

    let metrics = MetricsRegistry::default();
    let timer = Stopwatch::start();

    let mut selector = TopKSelector::new(cfg, ByTimestamp);
    selector.extend(sample_logs());
    let (earliest, stats) = selector.finish_with_stats();
    metrics.record_selection(&stats);

    for log in &earliest {
        println!("{}, {}", log.label, log.ts);
    }

    if args.metrics {
        println!("{}", metrics.snapshot().to_json_line("earliest_logs", Some(timer.elapsed())));
    }
    Ok(())
}
