//! Page-replacement simulator CLI.
//!
//! This binary is the input, presentation, and analytics front for the
//! simulation engine. It performs:
//! 1. **Run:** Replay one reference stream under one policy and print the
//!    frame-by-time table, narration, series, or JSON history.
//! 2. **Compare:** Replay the same input under all four policies and print
//!    a fault-count comparison.
//!
//! Input validation failures are reported per field and exit with code 1
//! before any simulation runs.

mod render;

use clap::{Parser, Subcommand};
use std::process;
use std::str::FromStr;

use pagesim_core::{
    CumulativeCounts, FrameCount, PolicyKind, ReferenceStream, RunSummary, simulate,
};

#[derive(Parser, Debug)]
#[command(
    name = "pagesim",
    author,
    version,
    about = "Page-replacement policy simulator",
    long_about = "Replay a page reference string against a fixed number of frames under FIFO, \
Second-Chance, LRU, or Optimal replacement, and inspect the run step by step.\n\nExamples:\n  \
pagesim run --refs \"7 0 1 2 0 3 0 4 2 3 0 3 2\" --frames 3 --policy lru\n  \
pagesim run --refs \"1 2 3 4 1 2 5\" --frames 3 --policy optimal --narrate\n  \
pagesim compare --refs \"1 2 3 4 1 2 5 1 2 3 4 5\" --frames 3"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run one policy over a reference string.
    Run {
        /// Whitespace-delimited page reference string, e.g. "7 0 1 2 0 3".
        #[arg(short, long)]
        refs: String,

        /// Number of page frames (positive integer).
        #[arg(short, long)]
        frames: String,

        /// Replacement policy: fifo, second-chance, lru, or optimal.
        #[arg(short, long)]
        policy: String,

        /// Emit the full step history as JSON instead of tables.
        #[arg(long)]
        json: bool,

        /// Print the per-step narration lines.
        #[arg(long)]
        narrate: bool,

        /// Print the cumulative fault/hit series.
        #[arg(long)]
        chart: bool,
    },

    /// Run all four policies over the same input and compare fault counts.
    Compare {
        /// Whitespace-delimited page reference string.
        #[arg(short, long)]
        refs: String,

        /// Number of page frames (positive integer).
        #[arg(short, long)]
        frames: String,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Run {
            refs,
            frames,
            policy,
            json,
            narrate,
            chart,
        }) => cmd_run(&refs, &frames, &policy, json, narrate, chart),
        Some(Commands::Compare { refs, frames }) => cmd_compare(&refs, &frames),
        None => {
            eprintln!("pagesim — pass a subcommand");
            eprintln!();
            eprintln!("  pagesim run --refs \"7 0 1 2\" --frames 3 --policy lru");
            eprintln!("  pagesim compare --refs \"7 0 1 2\" --frames 3");
            eprintln!();
            eprintln!("  pagesim --help  for full options");
            process::exit(1);
        }
    }
}

/// Parses and validates both numeric inputs, exiting with code 1 on error.
///
/// Validation happens here, at the boundary: by the time the engine runs,
/// failure is no longer possible.
fn parse_inputs(refs: &str, frames: &str) -> (ReferenceStream, FrameCount) {
    let stream = ReferenceStream::parse(refs).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        process::exit(1);
    });
    let frame_count = FrameCount::parse(frames).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        process::exit(1);
    });
    (stream, frame_count)
}

/// Runs one policy and prints the requested views of its history.
fn cmd_run(refs: &str, frames: &str, policy: &str, json: bool, narrate: bool, chart: bool) {
    let kind = PolicyKind::from_str(policy).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        eprintln!("Supported policies: fifo, second-chance, lru, optimal");
        process::exit(1);
    });
    let (stream, frame_count) = parse_inputs(refs, frames);

    let history = simulate(kind, &stream, frame_count);

    if json {
        let payload = serde_json::to_string_pretty(&history).expect("history serializes");
        println!("{payload}");
        return;
    }

    println!("{}", render::frame_table(&history));

    if narrate {
        for record in &history {
            println!("{}", record.narration());
        }
        println!();
    }

    if chart {
        println!("{}", render::cumulative_table(&CumulativeCounts::from_history(&history)));
    }

    RunSummary::new(&history).print();
}

/// Runs every policy on the same input and prints the comparison table.
fn cmd_compare(refs: &str, frames: &str) {
    let (stream, frame_count) = parse_inputs(refs, frames);

    let summaries: Vec<RunSummary> = PolicyKind::ALL
        .iter()
        .map(|&kind| RunSummary::new(&simulate(kind, &stream, frame_count)))
        .collect();

    print!("{}", render::comparison_table(&summaries));
}
