//! Common type definitions used across the portfolio engine.

use serde::{Deserialize, Serialize};

/// Qualitative implementation-effort tier for an initiative.
///
/// The tier set is closed: out-of-domain values are rejected by serde at the
/// input boundary, so the scoring code never sees an unknown tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EffortTier {
    Low,
    Medium,
    High,
}

impl EffortTier {
    /// Ordinal weight (1/2/3) used as the unit of the selection budget.
    pub fn score(&self) -> u32 {
        match self {
            EffortTier::Low => 1,
            EffortTier::Medium => 2,
            EffortTier::High => 3,
        }
    }

    /// Get the display name for this tier
    pub fn display_name(&self) -> &'static str {
        match self {
            EffortTier::Low => "Low",
            EffortTier::Medium => "Medium",
            EffortTier::High => "High",
        }
    }
}

/// Qualitative delivery-risk tier for an initiative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskTier {
    Low,
    Medium,
    High,
}

impl RiskTier {
    /// Risk adjustment applied to NPV when ranking (0.9 / 1.0 / 1.2).
    pub fn multiplier(&self) -> f64 {
        match self {
            RiskTier::Low => 0.9,
            RiskTier::Medium => 1.0,
            RiskTier::High => 1.2,
        }
    }

    /// Get the display name for this tier
    pub fn display_name(&self) -> &'static str {
        match self {
            RiskTier::Low => "Low",
            RiskTier::Medium => "Medium",
            RiskTier::High => "High",
        }
    }
}

/// Whether an initiative automates a task outright or augments a human.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Automation,
    Augmentation,
}

impl Category {
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Automation => "Automation",
            Category::Augmentation => "Augmentation",
        }
    }
}

/// Delivery horizon assigned to a selected initiative.
///
/// `NotScheduled` covers both the pre-scheduling state and unselected
/// initiatives after the pipeline completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Horizon {
    #[serde(rename = "Q1")]
    Q1,
    #[serde(rename = "1-year")]
    OneYear,
    #[serde(rename = "3-year")]
    ThreeYear,
    #[serde(rename = "N/A")]
    NotScheduled,
}

impl Horizon {
    /// Label as it appears in the canvas document.
    pub fn label(&self) -> &'static str {
        match self {
            Horizon::Q1 => "Q1",
            Horizon::OneYear => "1-year",
            Horizon::ThreeYear => "3-year",
            Horizon::NotScheduled => "N/A",
        }
    }

    /// Near-term horizons are Q1 and 1-year; 3-year is long-term.
    pub fn is_near_term(&self) -> bool {
        matches!(self, Horizon::Q1 | Horizon::OneYear)
    }
}

/// One candidate AI initiative as collected from the user.
///
/// Immutable once submitted. Numeric ranges are assumed already coerced to
/// valid numbers upstream; no plausibility validation happens here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawInitiative {
    pub id: String,
    pub name: String,
    pub problem: String,
    pub kpi: String,
    pub benefit_low: f64,
    pub benefit_high: f64,
    pub cost_low: f64,
    pub cost_high: f64,
    pub effort: EffortTier,
    pub risk: RiskTier,
    pub dependencies: String,
    pub category: Category,
}

/// A raw initiative plus all derived financial and scheduling attributes.
///
/// Created once by the metric calculator; the selection flag and schedule
/// fields are filled in by the selector and scheduler stages, and never
/// mutated again after the pipeline completes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComputedInitiative {
    #[serde(flatten)]
    pub raw: RawInitiative,
    pub benefit_mid: f64,
    pub cost_mid: f64,
    pub roi: f64,
    pub npv: f64,
    pub payback: f64,
    pub effort_score: u32,
    pub risk_multiplier: f64,
    pub value_score: f64,
    pub selected: bool,
    pub horizon: Horizon,
    pub start_date: String,
    pub end_date: String,
    pub milestone: String,
}

/// Opaque labeling context for a portfolio run.
///
/// Consumed only for canvas headers and narrative prompts, never for scoring
/// or selection logic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessContext {
    pub author_name: String,
    pub industry: String,
    pub objective: String,
    pub kpis: String,
    pub constraints: String,
    pub date: String,
    pub version: String,
}

/// Headline numbers for the selected portfolio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    pub selected_count: usize,
    pub total_effort: u32,
    pub total_npv: f64,
}

/// Cost/benefit/ROI rollups over the selected portfolio.
///
/// Values are raw f64 sums; whole-unit rounding and percent formatting are
/// presentation concerns handled when building the canvas document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregatedFinancials {
    pub near_term_cost: f64,
    pub long_term_cost: f64,
    pub annual_maintenance: f64,
    pub near_term_benefits: f64,
    pub long_term_benefits: f64,
    pub total_costs: f64,
    pub total_benefits: f64,
    pub near_term_roi: f64,
    pub long_term_roi: f64,
    pub total_roi: f64,
}

/// One scheduled initiative as it appears in a roadmap bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoadmapEntry {
    pub name: String,
    pub start: String,
    pub end: String,
    pub milestone: String,
}

/// The three horizon buckets. Buckets are disjoint and together contain
/// exactly the selected initiatives.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Roadmap {
    pub q1: Vec<RoadmapEntry>,
    pub one_year: Vec<RoadmapEntry>,
    pub three_year: Vec<RoadmapEntry>,
}

/// Complete output of one portfolio pipeline run.
///
/// A fresh value per run; never mutated externally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioResult {
    /// All initiatives, ranked by value score descending, selection decided.
    pub initiatives: Vec<ComputedInitiative>,
    pub summary: PortfolioSummary,
    pub financials: AggregatedFinancials,
    pub roadmap: Roadmap,
}
