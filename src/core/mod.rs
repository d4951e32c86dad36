pub mod types;

pub use types::{
    AggregatedFinancials, BusinessContext, Category, ComputedInitiative, EffortTier, Horizon,
    PortfolioResult, PortfolioSummary, RawInitiative, RiskTier, Roadmap, RoadmapEntry,
};
