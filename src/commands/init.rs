use crate::io;
use anyhow::Result;
use std::path::PathBuf;

/// Write a sample portfolio input template for the `run` command.
pub fn init_template(force: bool) -> Result<()> {
    let template_path = PathBuf::from("portfolio.json");

    if template_path.exists() && !force {
        anyhow::bail!("Portfolio template already exists. Use --force to overwrite.");
    }

    let template = r#"{
  "context": {
    "authorName": "Your Name",
    "industry": "Your Industry",
    "objective": "Reduce manual processing costs",
    "kpis": "Hours saved per month, error rate",
    "constraints": "One platform team, 12-month budget cycle",
    "date": "2026-01-01",
    "version": "1.0"
  },
  "initiatives": [
    {
      "id": "uc-1",
      "name": "Invoice triage",
      "problem": "Invoices are routed by hand",
      "kpi": "Hours saved",
      "benefitLow": 80000,
      "benefitHigh": 120000,
      "costLow": 40000,
      "costHigh": 60000,
      "effort": "Low",
      "risk": "Low",
      "dependencies": "none",
      "category": "Automation"
    },
    {
      "id": "uc-2",
      "name": "Support copilot",
      "problem": "Agents search three systems per ticket",
      "kpi": "Handle time",
      "benefitLow": 150000,
      "benefitHigh": 250000,
      "costLow": 60000,
      "costHigh": 90000,
      "effort": "Medium",
      "risk": "Medium",
      "dependencies": "Knowledge base cleanup",
      "category": "Augmentation"
    },
    {
      "id": "uc-3",
      "name": "Demand forecast",
      "problem": "Forecasts are spreadsheet-driven",
      "kpi": "Forecast accuracy",
      "benefitLow": 100000,
      "benefitHigh": 180000,
      "costLow": 50000,
      "costHigh": 80000,
      "effort": "Medium",
      "risk": "Low",
      "dependencies": "Data warehouse access",
      "category": "Augmentation"
    },
    {
      "id": "uc-4",
      "name": "Document extraction",
      "problem": "Contract terms are keyed in manually",
      "kpi": "Documents per day",
      "benefitLow": 60000,
      "benefitHigh": 90000,
      "costLow": 30000,
      "costHigh": 45000,
      "effort": "Low",
      "risk": "Medium",
      "dependencies": "API",
      "category": "Automation"
    },
    {
      "id": "uc-5",
      "name": "Core system modernization",
      "problem": "Legacy platform blocks automation",
      "kpi": "Release cadence",
      "benefitLow": 400000,
      "benefitHigh": 700000,
      "costLow": 250000,
      "costHigh": 400000,
      "effort": "High",
      "risk": "High",
      "dependencies": "Legacy data migration",
      "category": "Automation"
    }
  ]
}
"#;

    io::write_file(&template_path, template)?;
    println!("Created portfolio.json input template");

    Ok(())
}
