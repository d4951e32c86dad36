//! Portfolio ranking and budget-constrained selection.
//!
//! Both stages are pure: each consumes a `Vec` and returns a new ordering or
//! flag assignment with no side effects.
//!
//! Selection is deliberately a greedy walk over the ranked sequence, not a
//! knapsack solver: a later low-effort initiative may be skipped even though
//! it would fit, when an earlier higher-ranked item already consumed the
//! remaining budget in a less efficient split. That behavior is part of the
//! contract and must not be "fixed" to true optimality.

use crate::core::ComputedInitiative;
use std::cmp::Ordering;

/// Ceiling on total effort score across the selected portfolio.
/// Fixed policy, not configurable per run.
pub const EFFORT_BUDGET: u32 = 6;

/// Sorts initiatives by value score in descending order.
///
/// Uses a stable sort, so initiatives with equal value scores keep their
/// input order; callers and tests rely on that tie-break.
pub fn rank_by_value_score(mut items: Vec<ComputedInitiative>) -> Vec<ComputedInitiative> {
    items.sort_by(|a, b| {
        b.value_score
            .partial_cmp(&a.value_score)
            .unwrap_or(Ordering::Equal)
    });
    items
}

/// Walks the ranked sequence setting selection flags under [`EFFORT_BUDGET`].
///
/// An initiative is selected when its effort score still fits the running
/// total, or unconditionally when nothing has been selected yet — the
/// top-ranked item is always taken even if it alone exceeds the budget, so
/// the portfolio is never empty. Only selected initiatives consume budget.
pub fn select_within_budget(items: Vec<ComputedInitiative>) -> Vec<ComputedInitiative> {
    let mut running_effort = 0u32;
    let mut selected_count = 0usize;

    items
        .into_iter()
        .map(|mut item| {
            if running_effort + item.effort_score <= EFFORT_BUDGET || selected_count == 0 {
                running_effort += item.effort_score;
                selected_count += 1;
                item.selected = true;
            } else {
                item.selected = false;
            }
            item
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Category, EffortTier, RawInitiative, RiskTier};
    use crate::metrics::compute_metrics;

    fn candidate(id: &str, benefit: f64, effort: EffortTier) -> ComputedInitiative {
        compute_metrics(RawInitiative {
            id: id.to_string(),
            name: id.to_string(),
            problem: String::new(),
            kpi: String::new(),
            benefit_low: benefit,
            benefit_high: benefit,
            cost_low: 1_000.0,
            cost_high: 1_000.0,
            effort,
            risk: RiskTier::Medium,
            dependencies: String::new(),
            category: Category::Automation,
        })
    }

    fn selected_ids(items: &[ComputedInitiative]) -> Vec<&str> {
        items
            .iter()
            .filter(|i| i.selected)
            .map(|i| i.raw.id.as_str())
            .collect()
    }

    #[test]
    fn ranking_is_descending_by_value_score() {
        let ranked = rank_by_value_score(vec![
            candidate("low", 10_000.0, EffortTier::Low),
            candidate("high", 90_000.0, EffortTier::Low),
            candidate("mid", 50_000.0, EffortTier::Low),
        ]);
        let ids: Vec<_> = ranked.iter().map(|i| i.raw.id.as_str()).collect();
        assert_eq!(ids, ["high", "mid", "low"]);
    }

    #[test]
    fn equal_value_scores_keep_input_order() {
        let ranked = rank_by_value_score(vec![
            candidate("first", 40_000.0, EffortTier::Low),
            candidate("second", 40_000.0, EffortTier::Low),
            candidate("third", 40_000.0, EffortTier::Low),
        ]);
        let ids: Vec<_> = ranked.iter().map(|i| i.raw.id.as_str()).collect();
        assert_eq!(ids, ["first", "second", "third"]);
    }

    #[test]
    fn selection_respects_effort_budget() {
        // Four Medium-effort items (2 each): only three fit under 6.
        let selected = select_within_budget(rank_by_value_score(vec![
            candidate("a", 90_000.0, EffortTier::Medium),
            candidate("b", 80_000.0, EffortTier::Medium),
            candidate("c", 70_000.0, EffortTier::Medium),
            candidate("d", 60_000.0, EffortTier::Medium),
        ]));
        assert_eq!(selected_ids(&selected), ["a", "b", "c"]);
        let total: u32 = selected
            .iter()
            .filter(|i| i.selected)
            .map(|i| i.effort_score)
            .sum();
        assert!(total <= EFFORT_BUDGET);
    }

    #[test]
    fn top_ranked_item_is_always_selected() {
        // A single High-effort item consumes 3 of 6 and is still taken first.
        let selected = select_within_budget(rank_by_value_score(vec![candidate(
            "only",
            90_000.0,
            EffortTier::High,
        )]));
        assert_eq!(selected_ids(&selected), ["only"]);
    }

    #[test]
    fn greedy_walk_skips_over_budget_item_but_keeps_later_fits() {
        // Top item takes 3 of 6; six more at effort 1 follow. The walk keeps
        // accumulating until the budget is exhausted, then skips the rest.
        let selected = select_within_budget(rank_by_value_score(vec![
            candidate("top", 1_000_000.0, EffortTier::High),
            candidate("s1", 90_000.0, EffortTier::Low),
            candidate("s2", 85_000.0, EffortTier::Low),
            candidate("s3", 80_000.0, EffortTier::Low),
            candidate("s4", 75_000.0, EffortTier::Low),
            candidate("s5", 70_000.0, EffortTier::Low),
            candidate("s6", 65_000.0, EffortTier::Low),
        ]));
        assert_eq!(selected_ids(&selected), ["top", "s1", "s2", "s3"]);
    }

    #[test]
    fn medium_item_over_budget_is_skipped_while_low_item_still_fits() {
        // After top (3) + m1 (2) = 5, a Medium item (2) would exceed 6 and is
        // skipped, but the lower-ranked Low item (1) still fits.
        let selected = select_within_budget(rank_by_value_score(vec![
            candidate("top", 1_000_000.0, EffortTier::High),
            candidate("m1", 90_000.0, EffortTier::Medium),
            candidate("m2", 85_000.0, EffortTier::Medium),
            candidate("l1", 35_000.0, EffortTier::Low),
        ]));
        assert_eq!(selected_ids(&selected), ["top", "m1", "l1"]);
    }

    #[test]
    fn unselected_items_do_not_consume_budget() {
        let selected = select_within_budget(rank_by_value_score(vec![
            candidate("a", 100_000.0, EffortTier::High),
            candidate("b", 90_000.0, EffortTier::High),
            candidate("c", 80_000.0, EffortTier::High),
            candidate("d", 70_000.0, EffortTier::High),
        ]));
        // 3 + 3 = 6 fits exactly; c and d are skipped and consume nothing.
        assert_eq!(selected_ids(&selected), ["a", "b"]);
    }
}
