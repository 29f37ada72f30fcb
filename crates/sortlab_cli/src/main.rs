//! SORTLAB CLI
//!
//! Command-line interface for the step-traced sort analysis engine.

#![warn(missing_docs)]
#![warn(clippy::all)]

use clap::{Parser, Subcommand};
use color_eyre::Result;
use console::style;
use sortlab_core::parse_sequence;
use sortlab_report::{
    Analysis, AnalysisOptions, RunExport, render_summary, render_trace,
    render_trace_window,
};
use sortlab_trace::TraceEngine;

#[derive(Parser)]
#[command(name = "sortlab")]
#[command(about = "SORTLAB - step-traced insertion sort analysis", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a full analysis and print the summary
    Run {
        /// Comma-separated signed integers to sort
        list: String,
        /// Also run bubble sort and quicksort for comparison
        #[arg(short, long)]
        compare: bool,
    },
    /// Print the step-by-step execution trace
    Trace {
        /// Comma-separated signed integers to sort
        list: String,
        /// First step to print
        #[arg(long, default_value_t = 0)]
        from: usize,
        /// Maximum steps to print (0 = all)
        #[arg(long, default_value_t = 0)]
        limit: usize,
    },
    /// Print the machine-readable JSON export
    Export {
        /// Comma-separated signed integers to sort
        list: String,
        /// Also run bubble sort and quicksort for comparison
        #[arg(short, long)]
        compare: bool,
    },
    /// Run the traced engine and check its invariants
    Verify {
        /// Comma-separated signed integers to sort
        list: String,
    },
}

fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { list, compare } => {
            let analysis = Analysis::run(&list, AnalysisOptions { compare })?;
            println!("{}", render_summary(&analysis));
            println!("{}", style("Analysis complete").green().bold());
            Ok(())
        }
        Commands::Trace { list, from, limit } => {
            let analysis = Analysis::run(&list, AnalysisOptions::default())?;
            let text = if from == 0 && limit == 0 {
                render_trace(&analysis.traced.steps)
            } else {
                render_trace_window(&analysis.traced.steps, from, limit)?
            };
            println!("{}", text);
            Ok(())
        }
        Commands::Export { list, compare } => {
            let analysis = Analysis::run(&list, AnalysisOptions { compare })?;
            println!("{}", RunExport::from_analysis(&analysis).to_json()?);
            Ok(())
        }
        Commands::Verify { list } => {
            let values = parse_sequence(&list)?;
            let run = TraceEngine::new().run(&values);
            run.verify()?;
            println!(
                "{} {} elements, {} steps, {}",
                style("verified:").green().bold(),
                run.sorted.len(),
                run.step_count(),
                run.counters
            );
            Ok(())
        }
    }
}
