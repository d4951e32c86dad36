//! Per-initiative financial metric derivation.
//!
//! Pure functions mapping one [`RawInitiative`] to its computed attributes.
//! No dependency on other initiatives, no side effects, and no error states:
//! every division is guarded against a zero denominator and falls back to 0
//! ("no return information") rather than producing NaN or infinity. Negative
//! or zero inputs pass through the arithmetic unchanged.

use crate::core::{ComputedInitiative, Horizon, RawInitiative};

/// Present value of a 3-year benefit stream discounted at 10% annually.
///
/// A fixed model coefficient applied identically to every initiative
/// regardless of its eventual horizon; it is not derived dynamically.
pub const NPV_MULTIPLIER_3YR_10PCT: f64 = 2.48685;

/// Derive all financial and scoring attributes for one initiative.
///
/// The selection flag initializes to unselected and the schedule fields to
/// their unset state; the selector and scheduler stages fill them in later.
pub fn compute_metrics(raw: RawInitiative) -> ComputedInitiative {
    let benefit_mid = (raw.benefit_low + raw.benefit_high) / 2.0;
    let cost_mid = (raw.cost_low + raw.cost_high) / 2.0;

    // ROI = (Benefit - Cost) / Cost
    let roi = if cost_mid == 0.0 {
        0.0
    } else {
        (benefit_mid - cost_mid) / cost_mid
    };

    // NPV = Benefit * Multiplier - Cost
    let npv = benefit_mid * NPV_MULTIPLIER_3YR_10PCT - cost_mid;

    // Payback = Cost / Benefit
    let payback = if benefit_mid == 0.0 {
        0.0
    } else {
        cost_mid / benefit_mid
    };

    let effort_score = raw.effort.score();
    let risk_multiplier = raw.risk.multiplier();

    // The closed tier set keeps effort_score in 1..=3, but the zero guard is
    // part of the contract.
    let value_score = if effort_score == 0 {
        0.0
    } else {
        npv * risk_multiplier / effort_score as f64
    };

    ComputedInitiative {
        raw,
        benefit_mid,
        cost_mid,
        roi,
        npv,
        payback,
        effort_score,
        risk_multiplier,
        value_score,
        selected: false,
        horizon: Horizon::NotScheduled,
        start_date: String::new(),
        end_date: String::new(),
        milestone: String::new(),
    }
}
