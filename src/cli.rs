use crate::io::output::OutputFormat;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "roicanvas")]
#[command(about = "AI initiative portfolio scoring, selection and roadmap engine", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score a batch of initiatives, select a portfolio and build the canvas
    Run {
        /// Path to the portfolio input JSON ({ context, initiatives })
        input: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Minimum number of collected initiatives required for a run
        /// (0 disables the gate)
        #[arg(long = "min-initiatives", default_value = "5")]
        min_initiatives: usize,

        /// Anchor date for roadmap scheduling, YYYY-MM-DD (defaults to today)
        #[arg(long = "as-of")]
        as_of: Option<NaiveDate>,
    },

    /// Write a sample portfolio input template
    Init {
        /// Overwrite an existing template
        #[arg(long)]
        force: bool,
    },
}
