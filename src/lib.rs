// Export modules for library usage
pub mod aggregate;
pub mod canvas;
pub mod cli;
pub mod commands;
pub mod core;
pub mod enrich;
pub mod errors;
pub mod io;
pub mod metrics;
pub mod pipeline;
pub mod schedule;
pub mod selection;

// Re-export commonly used types
pub use crate::core::{
    AggregatedFinancials, BusinessContext, Category, ComputedInitiative, EffortTier, Horizon,
    PortfolioResult, PortfolioSummary, RawInitiative, RiskTier, Roadmap, RoadmapEntry,
};

pub use crate::canvas::FinalCanvas;
pub use crate::enrich::{CanvasNarrative, NarrativeProvider, UnconfiguredProvider};
pub use crate::io::output::{create_writer, OutputFormat, OutputWriter};
pub use crate::metrics::{compute_metrics, NPV_MULTIPLIER_3YR_10PCT};
pub use crate::pipeline::process_portfolio;
pub use crate::selection::EFFORT_BUDGET;
