//! The portfolio pipeline: metrics → ranking/selection → scheduling →
//! aggregation, composed into one pass over a batch of raw initiatives.
//!
//! The pipeline is stateless and idempotent. Re-running it on the same batch
//! and the same anchor date yields identical output; a different anchor date
//! shifts only the schedule dates, never the scores or the selection.

use crate::aggregate::{aggregate_financials, summarize_portfolio};
use crate::canvas::FinalCanvas;
use crate::core::{BusinessContext, PortfolioResult, RawInitiative};
use crate::metrics::compute_metrics;
use crate::schedule::{bucket_roadmap, schedule_roadmap};
use crate::selection::{rank_by_value_score, select_within_budget};
use chrono::NaiveDate;

/// Run the scoring, selection and scheduling stages over one batch.
///
/// `today` anchors all roadmap dates; callers wanting wall-clock behavior
/// pass `Local::now().date_naive()`.
pub fn run_portfolio(initiatives: Vec<RawInitiative>, today: NaiveDate) -> PortfolioResult {
    let computed: Vec<_> = initiatives.into_iter().map(compute_metrics).collect();
    let ranked = rank_by_value_score(computed);
    let selected = select_within_budget(ranked);
    let scheduled = schedule_roadmap(selected, today);

    let summary = summarize_portfolio(&scheduled);
    let financials = aggregate_financials(&scheduled);
    let roadmap = bucket_roadmap(&scheduled);

    log::debug!(
        "portfolio run: {} of {} initiatives selected, total effort {}",
        summary.selected_count,
        scheduled.len(),
        summary.total_effort
    );

    PortfolioResult {
        initiatives: scheduled,
        summary,
        financials,
        roadmap,
    }
}

/// Run the full pipeline and build the canvas document in one pass.
///
/// The business context is consumed only for canvas labeling; it never
/// influences scoring or selection.
pub fn process_portfolio(
    initiatives: Vec<RawInitiative>,
    context: &BusinessContext,
    today: NaiveDate,
) -> (PortfolioResult, FinalCanvas) {
    let result = run_portfolio(initiatives, today);
    let canvas = FinalCanvas::build(&result, context);
    (result, canvas)
}
