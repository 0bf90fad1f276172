use std::fmt::Write;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use tk_runtime::init_tracing;
use tk_views::{ComparatorHeap, Natural, Reversed};

/// Push values into a min-heap and print them in pop order.
#[derive(Parser, Debug)]
struct Args {
    #[arg(allow_negative_numbers = true)]
    values: Vec<i64>,
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();
    let values = if args.values.is_empty() { vec![40, 20, 30, 10] } else { args.values };
    info!(count = values.len(), "min_heap starting");

    let mut heap = ComparatorHeap::with_capacity(values.len(), Reversed(Natural));
    for v in values {
        heap.push(v);
    }

    let mut line = String::new();
    while let Some(v) = heap.pop() {
        write!(line, "{v}, ")?;
    }
    println!("{line}");
    Ok(())
}
