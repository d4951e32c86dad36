//! Delivery-horizon assignment and roadmap date calculation.
//!
//! Horizon classification is a heuristic keyword classifier over the
//! free-text dependency field, not a parser. The keyword sets live in
//! explicit predicate lists so they can be extended without touching the
//! scheduling control flow.

use crate::core::{ComputedInitiative, Horizon, Roadmap, RoadmapEntry};
use chrono::{Datelike, Duration, NaiveDate};

/// Sentinel for schedule fields of unselected initiatives.
pub const UNSCHEDULED: &str = "-";

/// Dependency keywords that push a selected initiative to the 3-year
/// (transformational) horizon.
const TRANSFORMATIONAL_KEYWORDS: &[&str] = &["migration", "legacy", "transform"];

/// Dependency keywords treated as an explicit "no dependencies" statement.
const NO_DEPENDENCY_KEYWORDS: &[&str] = &["none"];

/// Dependency text shorter than this counts as trivial.
///
/// A knowingly fragile proxy ("API" qualifies, "needs IT" does not); kept
/// as-is because downstream canvases depend on the existing classification.
const TRIVIAL_DEPENDENCY_MAX_LEN: usize = 5;

/// True when the dependency text reads as trivial or absent:
/// contains an explicit no-dependency keyword, is empty, or is shorter than
/// [`TRIVIAL_DEPENDENCY_MAX_LEN`]. Case-insensitive.
pub fn is_trivial_dependency(text: &str) -> bool {
    let lowered = text.to_lowercase();
    NO_DEPENDENCY_KEYWORDS.iter().any(|kw| lowered.contains(kw))
        || lowered.is_empty()
        || lowered.chars().count() < TRIVIAL_DEPENDENCY_MAX_LEN
}

/// True when the dependency text names transformational work
/// (migrations, legacy replacement, large-scale transformation).
pub fn mentions_transformational_work(text: &str) -> bool {
    let lowered = text.to_lowercase();
    TRANSFORMATIONAL_KEYWORDS.iter().any(|kw| lowered.contains(kw))
}

/// Decide the horizon for a selected initiative. First match wins:
///
/// 1. Q1 — Low effort, risk below High, trivial dependency text.
/// 2. 3-year — High effort, or High risk, or transformational keywords.
/// 3. 1-year — everything else (the core horizon).
///
/// Q1 is checked first; when an initiative's risk/dependency clauses could
/// satisfy both rules, that ordering is the deciding tie-break.
pub fn classify_horizon(item: &ComputedInitiative) -> Horizon {
    use crate::core::{EffortTier, RiskTier};

    let deps = &item.raw.dependencies;

    let immediate = item.raw.effort == EffortTier::Low
        && is_trivial_dependency(deps)
        && item.raw.risk != RiskTier::High;

    let transformational = item.raw.effort == EffortTier::High
        || item.raw.risk == RiskTier::High
        || mentions_transformational_work(deps);

    if immediate {
        Horizon::Q1
    } else if transformational {
        Horizon::ThreeYear
    } else {
        Horizon::OneYear
    }
}

/// Delivery window in months from "now", and the milestone label, per horizon.
fn horizon_window(horizon: Horizon) -> (u32, u32, &'static str) {
    match horizon {
        Horizon::Q1 => (1, 4, "MVP / Pilot Complete"),
        Horizon::OneYear => (1, 12, "Production Deployment"),
        Horizon::ThreeYear => (12, 36, "Enterprise Scaling"),
        Horizon::NotScheduled => (0, 0, UNSCHEDULED),
    }
}

/// Add calendar months, letting day-of-month overflow roll into the
/// following month (Jan 31 + 1 month lands on Mar 2 or Mar 3, not Feb 28).
pub fn add_months(date: NaiveDate, months: u32) -> NaiveDate {
    let zero_based = date.month0() + months;
    let year = date.year() + (zero_based / 12) as i32;
    let month = zero_based % 12 + 1;

    match NaiveDate::from_ymd_opt(year, month, date.day()) {
        Some(d) => d,
        None => {
            let overflow = date.day() - days_in_month(year, month);
            let (next_year, next_month) = if month == 12 {
                (year + 1, 1)
            } else {
                (year, month + 1)
            };
            // next_month always starts with day 1, so this cannot fail; the
            // epoch fallback is unreachable.
            NaiveDate::from_ymd_opt(next_year, next_month, 1)
                .map(|d| d + Duration::days(i64::from(overflow) - 1))
                .unwrap_or(date)
        }
    }
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|d| d.pred_opt())
        .map(|d| d.day())
        .unwrap_or(28)
}

/// Render a date the way the canvas displays it: "Sep 26, 2026".
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Assign horizon, window dates and milestone to every initiative.
///
/// Unselected initiatives get the `N/A` horizon and `"-"` sentinels in all
/// three schedule fields; they never carry partial schedule data.
pub fn schedule_roadmap(
    items: Vec<ComputedInitiative>,
    today: NaiveDate,
) -> Vec<ComputedInitiative> {
    items
        .into_iter()
        .map(|mut item| {
            if !item.selected {
                item.horizon = Horizon::NotScheduled;
                item.start_date = UNSCHEDULED.to_string();
                item.end_date = UNSCHEDULED.to_string();
                item.milestone = UNSCHEDULED.to_string();
                return item;
            }

            let horizon = classify_horizon(&item);
            let (start_offset, end_offset, milestone) = horizon_window(horizon);

            item.horizon = horizon;
            item.start_date = format_date(add_months(today, start_offset));
            item.end_date = format_date(add_months(today, end_offset));
            item.milestone = milestone.to_string();
            item
        })
        .collect()
}

/// Group scheduled initiatives into the three horizon buckets.
///
/// Unselected initiatives carry the `N/A` horizon and fall into no bucket,
/// so the buckets partition exactly the selected set.
pub fn bucket_roadmap(items: &[ComputedInitiative]) -> Roadmap {
    let entries_for = |horizon: Horizon| {
        items
            .iter()
            .filter(|i| i.horizon == horizon)
            .map(|i| RoadmapEntry {
                name: i.raw.name.clone(),
                start: i.start_date.clone(),
                end: i.end_date.clone(),
                milestone: i.milestone.clone(),
            })
            .collect()
    };

    Roadmap {
        q1: entries_for(Horizon::Q1),
        one_year: entries_for(Horizon::OneYear),
        three_year: entries_for(Horizon::ThreeYear),
    }
}
