pub mod output;

pub use output::{create_writer, JsonWriter, OutputFormat, OutputWriter, TerminalWriter};

use crate::core::{BusinessContext, RawInitiative};
use crate::errors::PortfolioError;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One collected portfolio batch: the business context plus the raw
/// initiatives gathered by the collection step.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioInput {
    pub context: BusinessContext,
    pub initiatives: Vec<RawInitiative>,
}

/// Load and parse a portfolio input file.
///
/// Unknown tier or category values fail here as parse errors; the scoring
/// core only ever sees well-formed closed-enum values.
pub fn load_portfolio(path: &Path) -> Result<PortfolioInput, PortfolioError> {
    let content = fs::read_to_string(path).map_err(|source| PortfolioError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| PortfolioError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

pub fn read_file(path: &Path) -> Result<String> {
    Ok(fs::read_to_string(path)?)
}

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content)?;
    Ok(())
}
