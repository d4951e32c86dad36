//! Output writers for the canvas document.
//!
//! The JSON writer emits the fixed-key export document (the "Download JSON"
//! artifact); the terminal writer renders a colored report for interactive
//! runs. Both sit behind the [`OutputWriter`] trait so commands stay
//! format-agnostic.

use crate::canvas::FinalCanvas;
use crate::core::RoadmapEntry;
use clap::ValueEnum;
use colored::*;
use comfy_table::{presets::UTF8_FULL_CONDENSED, Table};
use std::io::Write;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Terminal,
}

pub trait OutputWriter {
    fn write_canvas(&mut self, canvas: &FinalCanvas) -> anyhow::Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_canvas(&mut self, canvas: &FinalCanvas) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(canvas)?;
        self.writer.write_all(json.as_bytes())?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }
}

pub struct TerminalWriter;

impl Default for TerminalWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalWriter {
    pub fn new() -> Self {
        Self
    }
}

impl OutputWriter for TerminalWriter {
    fn write_canvas(&mut self, canvas: &FinalCanvas) -> anyhow::Result<()> {
        print_header(canvas);
        print_use_cases(canvas);
        print_summary(canvas);
        print_financials(canvas);
        print_roadmap(canvas);
        print_final_notes(canvas);
        Ok(())
    }
}

fn print_header(canvas: &FinalCanvas) {
    println!();
    println!("{}", "═══════════════════════════════════════════".cyan());
    println!("{}", format!("   {}", canvas.header.title).bold().cyan());
    println!("{}", "═══════════════════════════════════════════".cyan());
    println!(
        "Designed by {} for {} · {} · v{}",
        canvas.header.designed_by,
        canvas.header.designed_for,
        canvas.header.date,
        canvas.header.version
    );
    println!();
    println!("{} {}", "Objective:".bold(), canvas.business_context.objective);
    println!(
        "{} {}",
        "Strategic Focus:".bold(),
        canvas.business_context.strategic_focus
    );
    println!();
}

fn print_use_cases(canvas: &FinalCanvas) {
    println!("{}", "USE CASES".bold());
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED).set_header(vec![
        "Name", "ROI", "NPV (3yr)", "Payback", "Effort", "Risk", "Value Score", "Selected",
        "Horizon",
    ]);
    for row in &canvas.use_cases {
        table.add_row(vec![
            row.name.clone(),
            row.roi.clone(),
            row.npv_3yr_10pct.to_string(),
            format!("{:.2}", row.payback_years),
            row.effort_level.clone(),
            row.risk_level.clone(),
            format!("{:.2}", row.value_score),
            row.selected_for_portfolio.clone(),
            row.roadmap_timeline.clone(),
        ]);
    }
    println!("{table}");
    println!();
}

fn print_summary(canvas: &FinalCanvas) {
    println!("{}", "SELECTED PORTFOLIO".bold());
    println!("───────────────────────────────────────────");
    println!(
        "Use cases selected: {}",
        canvas
            .summary
            .total_use_cases_selected
            .to_string()
            .green()
            .bold()
    );
    println!("Total effort: {} / 6", canvas.summary.total_effort);
    println!("Total portfolio NPV: {}", canvas.summary.total_portfolio_npv);
    println!("{}", canvas.summary.primary_justification.dimmed());
    println!();
}

fn print_financials(canvas: &FinalCanvas) {
    let f = &canvas.financials;
    println!("{}", "AGGREGATED FINANCIALS".bold());
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_header(vec!["", "Cost", "Benefits", "ROI"]);
    table.add_row(vec![
        "Near-term".to_string(),
        f.near_term_cost.to_string(),
        f.near_term_benefits.to_string(),
        f.near_term_roi.clone(),
    ]);
    table.add_row(vec![
        "Long-term".to_string(),
        f.long_term_cost.to_string(),
        f.long_term_benefits.to_string(),
        f.long_term_roi.clone(),
    ]);
    table.add_row(vec![
        "Total".to_string(),
        f.total_costs.to_string(),
        f.total_benefits.to_string(),
        f.total_portfolio_roi.clone(),
    ]);
    println!("{table}");
    println!("Estimated annual maintenance: {}", f.annual_maintenance);
    println!();
}

fn print_bucket(label: &str, entries: &[RoadmapEntry]) {
    println!("  {}", label.bold());
    if entries.is_empty() {
        println!("    (none)");
    }
    for entry in entries {
        println!(
            "    {} — {} to {} · {}",
            entry.name, entry.start, entry.end, entry.milestone
        );
    }
}

fn print_roadmap(canvas: &FinalCanvas) {
    println!("{}", "ROADMAP".bold());
    print_bucket("Q1 (Immediate)", &canvas.roadmap.q1);
    print_bucket("1-Year (Core)", &canvas.roadmap.one_year);
    print_bucket("3-Year (Transformational)", &canvas.roadmap.three_year);
    println!();
}

fn print_final_notes(canvas: &FinalCanvas) {
    println!("{}", "FINAL NOTES".bold());
    println!(
        "Risks & mitigations: {}",
        canvas.final_notes.risks_and_mitigations
    );
    println!(
        "Data & infra requirements: {}",
        canvas.final_notes.data_and_infra_requirements
    );
    println!(
        "Organizational considerations: {}",
        canvas.final_notes.organizational_considerations
    );
}

/// Build a writer for the requested format, targeting `output` when given
/// and stdout otherwise. The terminal format always renders to stdout.
pub fn create_writer(
    format: OutputFormat,
    output: Option<&Path>,
) -> anyhow::Result<Box<dyn OutputWriter>> {
    match format {
        OutputFormat::Json => match output {
            Some(path) => Ok(Box::new(JsonWriter::new(std::fs::File::create(path)?))),
            None => Ok(Box::new(JsonWriter::new(std::io::stdout()))),
        },
        OutputFormat::Terminal => Ok(Box::new(TerminalWriter::new())),
    }
}
