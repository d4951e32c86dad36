//! The `run` command: load a collected batch, gate it, run the pipeline,
//! enrich the narrative fields and write the canvas.

use crate::enrich::{apply_narrative, NarrativeProvider, UnconfiguredProvider};
use crate::errors::PortfolioError;
use crate::io::output::{create_writer, OutputFormat};
use crate::pipeline::process_portfolio;
use anyhow::Result;
use chrono::{Local, NaiveDate};
use std::path::PathBuf;

pub struct RunConfig {
    pub input: PathBuf,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub min_initiatives: usize,
    pub as_of: Option<NaiveDate>,
}

pub fn run_portfolio(config: RunConfig) -> Result<()> {
    let input = crate::io::load_portfolio(&config.input)?;

    // The minimum-batch policy is a collection-step gate, enforced here at
    // the caller side; the scoring core accepts any batch size.
    if config.min_initiatives > 0 && input.initiatives.len() < config.min_initiatives {
        return Err(PortfolioError::BatchTooSmall {
            minimum: config.min_initiatives,
            actual: input.initiatives.len(),
        }
        .into());
    }

    let today = config.as_of.unwrap_or_else(|| Local::now().date_naive());
    log::info!(
        "scoring {} initiatives, anchor date {}",
        input.initiatives.len(),
        today
    );

    let (result, mut canvas) = process_portfolio(input.initiatives, &input.context, today);
    log::info!(
        "selected {} initiatives, total effort {}, portfolio NPV {:.0}",
        result.summary.selected_count,
        result.summary.total_effort,
        result.summary.total_npv
    );

    // Enrichment runs after the numeric result is complete; a provider can
    // only fill text fields, never invalidate the computation.
    let narrative = UnconfiguredProvider.generate(&canvas);
    apply_narrative(&mut canvas, narrative);

    let mut writer = create_writer(config.format, config.output.as_deref())?;
    writer.write_canvas(&canvas)?;
    Ok(())
}
