use anyhow::{bail, Result};
use clap::Parser;
use tracing::info;

use tk_runtime::init_tracing;

/// Max-element queries over a fixed vector.
#[derive(Parser, Debug)]
struct Args {
    /// Start of the sub-range, inclusive
    #[arg(long, default_value_t = 1)]
    from: usize,
    /// End of the sub-range, exclusive
    #[arg(long, default_value_t = 4)]
    to: usize,
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();
    let vec: Vec<i64> = vec![10, 20, 5, 30, 40, -50];
    info!(len = vec.len(), from = args.from, to = args.to, "max_element starting");

    let Some(range) = vec.get(args.from..args.to) else {
        bail!("range {}..{} out of bounds for length {}", args.from, args.to, vec.len());
    };

    if let Some(max) = vec.iter().max() {
        println!("{max}");
    }
    match range.iter().max() {
        Some(max) => println!("{max}"),
        None => println!("(empty range)"),
    }
    if let Some(max_abs) = vec.iter().max_by_key(|v| v.abs()) {
        println!("{max_abs}");
    }
    if let Some(max) = [10, 20, 30].into_iter().max() {
        println!("{max}");
    }
    Ok(())
}
