//! File exports: the comparison table as CSV and the plain-text summary report.

use anyhow::{Context, Result};
use ftz_core::{
    cost_model::DerivedFigures,
    format::{accounting, latin1_safe},
    insights::Insights,
};
use std::io::Write;

pub const CSV_HEADER: [&str; 4] = ["Category", "Without FTZ ($)", "With FTZ ($)", "FTZ Savings ($)"];

/// One header line, then one record per comparison row with amounts to the cent.
pub fn write_comparison_csv<W: Write>(figures: &DerivedFigures, out: W) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(out);

    writer.write_record(CSV_HEADER)?;
    for row in figures.rows() {
        writer.write_record([
            row.item.label().to_string(),
            format!("{:.2}", row.without_ftz),
            format!("{:.2}", row.with_ftz),
            format!("{:.2}", row.savings),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

pub fn save_comparison_csv(figures: &DerivedFigures, path: &str) -> Result<()> {
    let file = std::fs::File::create(path).with_context(|| format!("Cannot create {path}"))?;
    write_comparison_csv(figures, file)
}

/// Report text restricted to Latin-1 so any single-byte viewer can show it.
pub fn report_body(figures: &DerivedFigures) -> String {
    let insights = latin1_safe(&Insights::from_figures(figures).render());
    format!(
        "FTZ Savings Summary Report\n\n{insights}\nNet Savings to Brand: {}\n",
        accounting(figures.net_savings_to_brand)
    )
}

pub fn save_report(figures: &DerivedFigures, path: &str) -> Result<()> {
    std::fs::write(path, report_body(figures)).with_context(|| format!("Cannot write {path}"))?;
    Ok(())
}
