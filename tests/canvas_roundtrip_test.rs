//! Canvas JSON export: fixed key schema and numeric round-trip fidelity.

use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use roicanvas::{
    process_portfolio, BusinessContext, Category, EffortTier, FinalCanvas, RawInitiative, RiskTier,
};

fn sample_canvas() -> FinalCanvas {
    let initiatives = vec![
        RawInitiative {
            id: "uc-1".to_string(),
            name: "Invoice triage".to_string(),
            problem: "Manual routing".to_string(),
            kpi: "Hours saved".to_string(),
            benefit_low: 80_000.0,
            benefit_high: 120_000.0,
            cost_low: 40_000.0,
            cost_high: 60_000.0,
            effort: EffortTier::Low,
            risk: RiskTier::Low,
            dependencies: "none".to_string(),
            category: Category::Automation,
        },
        RawInitiative {
            id: "uc-2".to_string(),
            name: "Core modernization".to_string(),
            problem: "Legacy platform".to_string(),
            kpi: "Release cadence".to_string(),
            benefit_low: 400_000.0,
            benefit_high: 700_000.0,
            cost_low: 250_000.0,
            cost_high: 400_000.0,
            effort: EffortTier::High,
            risk: RiskTier::High,
            dependencies: "Legacy data migration".to_string(),
            category: Category::Automation,
        },
    ];
    let context = BusinessContext {
        author_name: "Dana".to_string(),
        industry: "Logistics".to_string(),
        objective: "Cut manual handling".to_string(),
        kpis: "Hours saved".to_string(),
        constraints: "One platform team".to_string(),
        date: "2026-08-26".to_string(),
        version: "1.0".to_string(),
    };
    let (_, canvas) = process_portfolio(
        initiatives,
        &context,
        NaiveDate::from_ymd_opt(2026, 8, 26).unwrap(),
    );
    canvas
}

#[test]
fn canvas_serializes_with_the_export_key_schema() {
    let canvas = sample_canvas();
    let value = serde_json::to_value(&canvas).unwrap();

    for key in [
        "Header",
        "Business_Context",
        "Inputs",
        "Impacts",
        "Capabilities",
        "Use_Cases",
        "Selected_Portfolio_Summary",
        "Aggregated_Financials",
        "Roadmap",
        "Final_Notes",
    ] {
        assert!(value.get(key).is_some(), "missing top-level key {key}");
    }

    let roadmap = value.get("Roadmap").unwrap();
    assert!(roadmap.get("Q1").is_some());
    assert!(roadmap.get("1_year").is_some());
    assert!(roadmap.get("3_year").is_some());

    let row = &value["Use_Cases"][0];
    assert!(row.get("NPV_3yr_10pct").is_some());
    assert!(row.get("Automation_or_Augmentation").is_some());
    assert!(row.get("Selected_for_Portfolio").is_some());
}

#[test]
fn canvas_round_trips_through_json() {
    let canvas = sample_canvas();
    let json = serde_json::to_string_pretty(&canvas).unwrap();
    let parsed: FinalCanvas = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, canvas);
}

#[test]
fn roi_and_currency_fields_are_formatted_for_presentation() {
    let canvas = sample_canvas();

    let triage = canvas
        .use_cases
        .iter()
        .find(|row| row.name == "Invoice triage")
        .unwrap();
    assert_eq!(triage.roi, "100.0%");
    assert_eq!(triage.npv_3yr_10pct, 198_685);

    assert!(canvas.financials.total_portfolio_roi.ends_with('%'));
    // Whole-unit currency after rounding.
    assert_eq!(
        canvas.financials.total_costs,
        canvas.financials.near_term_cost + canvas.financials.long_term_cost
    );
}
