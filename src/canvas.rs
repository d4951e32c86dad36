//! The canvas document: the fixed-key JSON shape the portfolio result is
//! exported and rendered as.
//!
//! Key names are part of the export contract (downstream consumers parse
//! them), hence the explicit serde renames rather than a rename_all rule.
//! Presentation rounding lives here: currency to whole units, ROI as a
//! one-decimal percent string, payback and value score to two decimals.

use crate::core::{BusinessContext, ComputedInitiative, PortfolioResult, RoadmapEntry};
use serde::{Deserialize, Serialize};

/// Placeholder for narrative fields before enrichment has run.
pub const PENDING_NARRATIVE: &str = "Generating...";

const CANVAS_TITLE: &str = "AI ROI & Roadmap Canvas";
const PRIMARY_JUSTIFICATION: &str =
    "Selected based on highest Value Score within Effort constraint (Max 6).";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Header {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "DesignedBy")]
    pub designed_by: String,
    #[serde(rename = "DesignedFor")]
    pub designed_for: String,
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Version")]
    pub version: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessContextSection {
    #[serde(rename = "Objective")]
    pub objective: String,
    #[serde(rename = "StrategicFocus")]
    pub strategic_focus: String,
    #[serde(rename = "KPIs")]
    pub kpis: String,
    #[serde(rename = "Constraints")]
    pub constraints: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputsSection {
    #[serde(rename = "Resources")]
    pub resources: String,
    #[serde(rename = "Personnel")]
    pub personnel: String,
    #[serde(rename = "ExternalSupport")]
    pub external_support: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImpactsSection {
    #[serde(rename = "HardBenefits")]
    pub hard_benefits: String,
    #[serde(rename = "SoftBenefits")]
    pub soft_benefits: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapabilitiesSection {
    #[serde(rename = "Skills")]
    pub skills: String,
    #[serde(rename = "Technology")]
    pub technology: String,
}

/// One initiative row in the canvas table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UseCaseRow {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Problem")]
    pub problem: String,
    #[serde(rename = "KPI")]
    pub kpi: String,
    #[serde(rename = "Benefit_midpoint")]
    pub benefit_midpoint: f64,
    #[serde(rename = "Cost_midpoint")]
    pub cost_midpoint: f64,
    #[serde(rename = "ROI")]
    pub roi: String,
    #[serde(rename = "NPV_3yr_10pct")]
    pub npv_3yr_10pct: i64,
    #[serde(rename = "Payback_Years")]
    pub payback_years: f64,
    #[serde(rename = "Effort_Level")]
    pub effort_level: String,
    #[serde(rename = "Risk_Level")]
    pub risk_level: String,
    #[serde(rename = "Value_Score")]
    pub value_score: f64,
    #[serde(rename = "Dependencies")]
    pub dependencies: String,
    #[serde(rename = "Automation_or_Augmentation")]
    pub automation_or_augmentation: String,
    #[serde(rename = "Selected_for_Portfolio")]
    pub selected_for_portfolio: String,
    #[serde(rename = "Roadmap_Timeline")]
    pub roadmap_timeline: String,
    #[serde(rename = "Start_Date")]
    pub start_date: String,
    #[serde(rename = "End_Date")]
    pub end_date: String,
    #[serde(rename = "Milestone")]
    pub milestone: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummarySection {
    #[serde(rename = "Total_Use_Cases_Selected")]
    pub total_use_cases_selected: usize,
    #[serde(rename = "Primary_Justification")]
    pub primary_justification: String,
    #[serde(rename = "Total_Effort")]
    pub total_effort: u32,
    #[serde(rename = "Total_Portfolio_NPV")]
    pub total_portfolio_npv: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialsSection {
    #[serde(rename = "Near_Term_Cost")]
    pub near_term_cost: i64,
    #[serde(rename = "Long_Term_Cost")]
    pub long_term_cost: i64,
    #[serde(rename = "Annual_Maintenance")]
    pub annual_maintenance: i64,
    #[serde(rename = "Near_Term_Benefits")]
    pub near_term_benefits: i64,
    #[serde(rename = "Long_Term_Benefits")]
    pub long_term_benefits: i64,
    #[serde(rename = "Total_Costs")]
    pub total_costs: i64,
    #[serde(rename = "Total_Benefits")]
    pub total_benefits: i64,
    #[serde(rename = "Near_Term_ROI")]
    pub near_term_roi: String,
    #[serde(rename = "Long_Term_ROI")]
    pub long_term_roi: String,
    #[serde(rename = "Total_Portfolio_ROI")]
    pub total_portfolio_roi: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoadmapSection {
    #[serde(rename = "Q1")]
    pub q1: Vec<RoadmapEntry>,
    #[serde(rename = "1_year")]
    pub one_year: Vec<RoadmapEntry>,
    #[serde(rename = "3_year")]
    pub three_year: Vec<RoadmapEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinalNotes {
    #[serde(rename = "Risks_and_Mitigations")]
    pub risks_and_mitigations: String,
    #[serde(rename = "Data_and_Infra_Requirements")]
    pub data_and_infra_requirements: String,
    #[serde(rename = "Organizational_Considerations")]
    pub organizational_considerations: String,
}

/// The complete exportable canvas document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinalCanvas {
    #[serde(rename = "Header")]
    pub header: Header,
    #[serde(rename = "Business_Context")]
    pub business_context: BusinessContextSection,
    #[serde(rename = "Inputs")]
    pub inputs: InputsSection,
    #[serde(rename = "Impacts")]
    pub impacts: ImpactsSection,
    #[serde(rename = "Capabilities")]
    pub capabilities: CapabilitiesSection,
    #[serde(rename = "Use_Cases")]
    pub use_cases: Vec<UseCaseRow>,
    #[serde(rename = "Selected_Portfolio_Summary")]
    pub summary: SummarySection,
    #[serde(rename = "Aggregated_Financials")]
    pub financials: FinancialsSection,
    #[serde(rename = "Roadmap")]
    pub roadmap: RoadmapSection,
    #[serde(rename = "Final_Notes")]
    pub final_notes: FinalNotes,
}

/// Format a ratio as a one-decimal percent string ("1.0" -> "100.0%").
pub fn format_percent(ratio: f64) -> String {
    format!("{:.1}%", ratio * 100.0)
}

/// Round currency to the nearest whole unit for presentation.
fn round_currency(amount: f64) -> i64 {
    amount.round() as i64
}

/// Round to two decimals (payback years, value score display).
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn use_case_row(item: &ComputedInitiative) -> UseCaseRow {
    UseCaseRow {
        name: item.raw.name.clone(),
        problem: item.raw.problem.clone(),
        kpi: item.raw.kpi.clone(),
        benefit_midpoint: item.benefit_mid,
        cost_midpoint: item.cost_mid,
        roi: format_percent(item.roi),
        npv_3yr_10pct: round_currency(item.npv),
        payback_years: round2(item.payback),
        effort_level: item.raw.effort.display_name().to_string(),
        risk_level: item.raw.risk.display_name().to_string(),
        value_score: round2(item.value_score),
        dependencies: item.raw.dependencies.clone(),
        automation_or_augmentation: item.raw.category.display_name().to_string(),
        selected_for_portfolio: if item.selected { "Yes" } else { "No" }.to_string(),
        roadmap_timeline: item.horizon.label().to_string(),
        start_date: item.start_date.clone(),
        end_date: item.end_date.clone(),
        milestone: item.milestone.clone(),
    }
}

impl FinalCanvas {
    /// Build the canvas document from a finished pipeline run.
    ///
    /// Narrative fields start as [`PENDING_NARRATIVE`] sentinels; a
    /// [`crate::enrich::NarrativeProvider`] fills them in afterwards.
    pub fn build(result: &PortfolioResult, context: &BusinessContext) -> Self {
        FinalCanvas {
            header: Header {
                title: CANVAS_TITLE.to_string(),
                designed_by: context.author_name.clone(),
                designed_for: context.industry.clone(),
                date: context.date.clone(),
                version: context.version.clone(),
            },
            business_context: BusinessContextSection {
                objective: context.objective.clone(),
                strategic_focus: PENDING_NARRATIVE.to_string(),
                kpis: context.kpis.clone(),
                constraints: context.constraints.clone(),
            },
            inputs: InputsSection {
                resources: PENDING_NARRATIVE.to_string(),
                personnel: PENDING_NARRATIVE.to_string(),
                external_support: PENDING_NARRATIVE.to_string(),
            },
            impacts: ImpactsSection {
                hard_benefits: PENDING_NARRATIVE.to_string(),
                soft_benefits: PENDING_NARRATIVE.to_string(),
            },
            capabilities: CapabilitiesSection {
                skills: PENDING_NARRATIVE.to_string(),
                technology: PENDING_NARRATIVE.to_string(),
            },
            use_cases: result.initiatives.iter().map(use_case_row).collect(),
            summary: SummarySection {
                total_use_cases_selected: result.summary.selected_count,
                primary_justification: PRIMARY_JUSTIFICATION.to_string(),
                total_effort: result.summary.total_effort,
                total_portfolio_npv: round_currency(result.summary.total_npv),
            },
            financials: FinancialsSection {
                near_term_cost: round_currency(result.financials.near_term_cost),
                long_term_cost: round_currency(result.financials.long_term_cost),
                annual_maintenance: round_currency(result.financials.annual_maintenance),
                near_term_benefits: round_currency(result.financials.near_term_benefits),
                long_term_benefits: round_currency(result.financials.long_term_benefits),
                total_costs: round_currency(result.financials.total_costs),
                total_benefits: round_currency(result.financials.total_benefits),
                near_term_roi: format_percent(result.financials.near_term_roi),
                long_term_roi: format_percent(result.financials.long_term_roi),
                total_portfolio_roi: format_percent(result.financials.total_roi),
            },
            roadmap: RoadmapSection {
                q1: result.roadmap.q1.clone(),
                one_year: result.roadmap.one_year.clone(),
                three_year: result.roadmap.three_year.clone(),
            },
            final_notes: FinalNotes {
                risks_and_mitigations: PENDING_NARRATIVE.to_string(),
                data_and_infra_requirements: PENDING_NARRATIVE.to_string(),
                organizational_considerations: PENDING_NARRATIVE.to_string(),
            },
        }
    }
}
