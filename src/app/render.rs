use crate::domain::model::Report;
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

pub fn render<W: Write>(report: &Report, format: OutputFormat, out: &mut W) -> Result<()> {
    match format {
        OutputFormat::Text => render_text(report, out),
        OutputFormat::Json => render_json(report, out),
        OutputFormat::Csv => render_csv(report, out),
    }
}

pub fn render_text<W: Write>(report: &Report, out: &mut W) -> Result<()> {
    writeln!(out, "{}", report.title)?;
    writeln!(out, "{}", report.headline)?;
    writeln!(out)?;

    let label_width = report
        .metrics
        .iter()
        .map(|m| m.label.chars().count())
        .max()
        .unwrap_or(0);
    for metric in &report.metrics {
        let pad = label_width - metric.label.chars().count();
        writeln!(out, "  {}{}  {}", metric.label, " ".repeat(pad), metric.value)?;
    }

    if !report.table.is_empty() {
        writeln!(out)?;
        let name_width = report
            .table
            .iter()
            .map(|r| r.name.chars().count())
            .max()
            .unwrap_or(0)
            .max(10);
        writeln!(out, "  {:<name_width$} {:>8} {:>8}", "ingredient", "grams", "percent")?;
        for row in &report.table {
            writeln!(
                out,
                "  {:<name_width$} {:>8} {:>8}",
                row.name, row.grams, row.percent
            )?;
        }
    }

    if let Some(caption) = &report.caption {
        writeln!(out)?;
        writeln!(out, "{}", caption)?;
    }

    for warning in &report.warnings {
        writeln!(out, "⚠️  {}", warning)?;
    }
    Ok(())
}

pub fn render_json<W: Write>(report: &Report, out: &mut W) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)?;
    Ok(())
}

/// 只輸出配方表，方便貼到試算表
pub fn render_csv<W: Write>(report: &Report, out: &mut W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    for row in &report.table {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::IngredientRow;

    fn sample_report() -> Report {
        let mut report = Report::new("🍞 Test", "Total dough weight: 985 g").metric("Water", "375 g");
        report.table = vec![
            IngredientRow {
                name: "flour".to_string(),
                grams: 500,
                percent: "100.0%".to_string(),
            },
            IngredientRow {
                name: "water".to_string(),
                grams: 375,
                percent: "75.0%".to_string(),
            },
        ];
        report.warnings.push("careful".to_string());
        report
    }

    #[test]
    fn test_render_text() {
        let mut out = Vec::new();
        render(&sample_report(), OutputFormat::Text, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Total dough weight: 985 g"));
        assert!(text.contains("Water  375 g"));
        assert!(text.contains("75.0%"));
        assert!(text.contains("careful"));
    }

    #[test]
    fn test_render_json() {
        let mut out = Vec::new();
        render(&sample_report(), OutputFormat::Json, &mut out).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["table"][1]["grams"], 375);
        assert_eq!(value["metrics"][0]["label"], "Water");
        assert!(value.get("resolution").is_none());
    }

    #[test]
    fn test_render_csv() {
        let mut out = Vec::new();
        render(&sample_report(), OutputFormat::Csv, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "name,grams,percent\nflour,500,100.0%\nwater,375,75.0%\n");
    }
}
