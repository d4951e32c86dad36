//! Financial rollups over the selected portfolio.
//!
//! Sums are plain folds over midpoint values; ROI divisions share the same
//! zero-denominator guard as the per-initiative metrics. Whole-unit rounding
//! and percent formatting happen later, when the canvas document is built.

use crate::core::{AggregatedFinancials, ComputedInitiative, Horizon, PortfolioSummary};

/// Annual maintenance estimated as a fixed share of total implementation cost.
pub const ANNUAL_MAINTENANCE_RATIO: f64 = 0.20;

/// ROI = (benefits - costs) / costs, or 0 when there are no costs.
fn safe_roi(benefits: f64, costs: f64) -> f64 {
    if costs == 0.0 {
        0.0
    } else {
        (benefits - costs) / costs
    }
}

/// Headline numbers for the selected portfolio.
pub fn summarize_portfolio(items: &[ComputedInitiative]) -> PortfolioSummary {
    let selected = items.iter().filter(|i| i.selected);
    let mut count = 0usize;
    let mut total_effort = 0u32;
    let mut total_npv = 0.0;
    for item in selected {
        count += 1;
        total_effort += item.effort_score;
        total_npv += item.npv;
    }
    PortfolioSummary {
        selected_count: count,
        total_effort,
        total_npv,
    }
}

/// Roll up costs, benefits and ROI by horizon group.
///
/// Near-term covers Q1 and 1-year; long-term is 3-year. Unselected
/// initiatives carry the `N/A` horizon and contribute to neither group.
pub fn aggregate_financials(items: &[ComputedInitiative]) -> AggregatedFinancials {
    let mut near_term_cost = 0.0;
    let mut near_term_benefits = 0.0;
    let mut long_term_cost = 0.0;
    let mut long_term_benefits = 0.0;

    for item in items.iter().filter(|i| i.selected) {
        if item.horizon.is_near_term() {
            near_term_cost += item.cost_mid;
            near_term_benefits += item.benefit_mid;
        } else if item.horizon == Horizon::ThreeYear {
            long_term_cost += item.cost_mid;
            long_term_benefits += item.benefit_mid;
        }
    }

    let total_costs = near_term_cost + long_term_cost;
    let total_benefits = near_term_benefits + long_term_benefits;

    AggregatedFinancials {
        near_term_cost,
        long_term_cost,
        annual_maintenance: total_costs * ANNUAL_MAINTENANCE_RATIO,
        near_term_benefits,
        long_term_benefits,
        total_costs,
        total_benefits,
        near_term_roi: safe_roi(near_term_benefits, near_term_cost),
        long_term_roi: safe_roi(long_term_benefits, long_term_cost),
        total_roi: safe_roi(total_benefits, total_costs),
    }
}
