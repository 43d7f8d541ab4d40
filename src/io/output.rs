//! Report writers for the CLI.
//!
//! Mirrors the three-format shape of the analysis output: JSON for machines,
//! markdown for docs, a colored summary for terminals. Writers are dumb:
//! everything they print was derived beforehand.

use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::ValueEnum;
use colored::*;
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::advisor::Advisory;
use crate::core::Priority;
use crate::stats::Statistics;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

/// Full analysis output: the statistics snapshot plus advisories.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub wardrobe_id: String,
    pub generated_at: DateTime<Utc>,
    pub statistics: Statistics,
    pub advisories: Vec<Advisory>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelatedView {
    pub id: String,
    pub name: String,
    pub count: usize,
}

/// A clothing relation with display names resolved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelationView {
    pub id: String,
    pub name: String,
    pub frequency: usize,
    pub related: Vec<RelatedView>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelationsReport {
    pub wardrobe_id: String,
    pub generated_at: DateTime<Utc>,
    pub relations: Vec<RelationView>,
}

pub trait OutputWriter {
    fn write_analysis(&mut self, report: &AnalysisReport) -> Result<()>;
    fn write_relations(&mut self, report: &RelationsReport) -> Result<()>;
}

pub fn create_writer<W: Write + 'static>(format: OutputFormat, writer: W) -> Box<dyn OutputWriter> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(writer)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer)),
    }
}

/// Breakdown map entries sorted by count descending, name ascending on ties.
fn sorted_counts<'a, I>(entries: I) -> Vec<(String, usize)>
where
    I: IntoIterator<Item = (String, &'a usize)>,
{
    let mut rows: Vec<(String, usize)> = entries.into_iter().map(|(k, v)| (k, *v)).collect();
    rows.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    rows
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
    fn write_analysis(&mut self, report: &AnalysisReport) -> Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_relations(&mut self, report: &RelationsReport) -> Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_header(&mut self, title: &str, wardrobe_id: &str, generated_at: DateTime<Utc>) -> Result<()> {
        writeln!(self.writer, "# {title}")?;
        writeln!(self.writer)?;
        if !wardrobe_id.is_empty() {
            writeln!(self.writer, "Wardrobe: {wardrobe_id}")?;
        }
        writeln!(
            self.writer,
            "Generated: {}",
            generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_summary(&mut self, stats: &Statistics) -> Result<()> {
        writeln!(self.writer, "## Summary")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "- Items: {}", stats.total_clothings)?;
        writeln!(self.writer, "- Outfits: {}", stats.total_outfits)?;
        writeln!(self.writer, "- Total value: {:.2}", stats.total_value)?;
        writeln!(self.writer, "- Average price: {:.2}", stats.avg_price)?;
        writeln!(
            self.writer,
            "- Utilization: {:.1}% ({} of {} worn)",
            stats.utilization.rate, stats.utilization.worn, stats.utilization.total
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_breakdown(&mut self, title: &str, rows: &[(String, usize)]) -> Result<()> {
        if rows.is_empty() {
            return Ok(());
        }
        writeln!(self.writer, "## {title}")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Name | Count |")?;
        writeln!(self.writer, "|------|-------|")?;
        for (name, count) in rows {
            writeln!(self.writer, "| {name} | {count} |")?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_rankings(&mut self, stats: &Statistics) -> Result<()> {
        if !stats.top_clothings.is_empty() {
            writeln!(self.writer, "## Most Worn")?;
            writeln!(self.writer)?;
            writeln!(self.writer, "| Item | Wears |")?;
            writeln!(self.writer, "|------|-------|")?;
            for item in &stats.top_clothings {
                writeln!(self.writer, "| {} | {} |", item.name, item.use_count)?;
            }
            writeln!(self.writer)?;
        }

        if !stats.brand_stats.is_empty() {
            writeln!(self.writer, "## Brands")?;
            writeln!(self.writer)?;
            writeln!(self.writer, "| Brand | Items | Total wears |")?;
            writeln!(self.writer, "|-------|-------|-------------|")?;
            for brand in &stats.brand_stats {
                writeln!(
                    self.writer,
                    "| {} | {} | {} |",
                    brand.brand, brand.item_count, brand.total_use
                )?;
            }
            writeln!(self.writer)?;
        }

        if !stats.idle_clothings.is_empty() {
            writeln!(self.writer, "## Idle Items")?;
            writeln!(self.writer)?;
            writeln!(self.writer, "| Item | Days since last wear |")?;
            writeln!(self.writer, "|------|----------------------|")?;
            for idle in &stats.idle_clothings {
                writeln!(
                    self.writer,
                    "| {} | {} |",
                    idle.name, idle.days_since_last_wear
                )?;
            }
            writeln!(self.writer)?;
        }
        Ok(())
    }

    fn write_trend(&mut self, stats: &Statistics) -> Result<()> {
        let worn: usize = stats.wear_trends.iter().map(|p| p.count).sum();
        writeln!(self.writer, "## Wear Trend (last 30 days)")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "{worn} item(s) last worn in the window.")?;
        writeln!(self.writer)?;
        for point in stats.wear_trends.iter().filter(|p| p.count > 0) {
            writeln!(self.writer, "- {}: {}", point.date, point.count)?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_advisories(&mut self, advisories: &[Advisory]) -> Result<()> {
        writeln!(self.writer, "## Advisories")?;
        writeln!(self.writer)?;
        if advisories.is_empty() {
            writeln!(self.writer, "Nothing to flag.")?;
        }
        for advisory in advisories {
            writeln!(
                self.writer,
                "- **[{}] {}**: {}",
                advisory.priority, advisory.title, advisory.message
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_analysis(&mut self, report: &AnalysisReport) -> Result<()> {
        self.write_header(
            "Wardrobe Analysis",
            &report.wardrobe_id,
            report.generated_at,
        )?;
        self.write_summary(&report.statistics)?;
        self.write_breakdown(
            "Categories",
            &sorted_counts(
                report
                    .statistics
                    .category_breakdown
                    .iter()
                    .map(|(k, v)| (k.clone(), v)),
            ),
        )?;
        self.write_breakdown(
            "Status",
            &sorted_counts(
                report
                    .statistics
                    .status_breakdown
                    .iter()
                    .map(|(k, v)| (k.to_string(), v)),
            ),
        )?;
        self.write_breakdown(
            "Seasons",
            &sorted_counts(
                report
                    .statistics
                    .season_breakdown
                    .iter()
                    .map(|(k, v)| (k.to_string(), v)),
            ),
        )?;
        self.write_rankings(&report.statistics)?;
        self.write_trend(&report.statistics)?;
        self.write_advisories(&report.advisories)?;
        Ok(())
    }

    fn write_relations(&mut self, report: &RelationsReport) -> Result<()> {
        self.write_header(
            "Outfit Relations",
            &report.wardrobe_id,
            report.generated_at,
        )?;
        if report.relations.is_empty() {
            writeln!(self.writer, "No items appear in any outfit.")?;
            return Ok(());
        }
        for relation in &report.relations {
            writeln!(
                self.writer,
                "## {} ({} outfit(s))",
                relation.name, relation.frequency
            )?;
            writeln!(self.writer)?;
            for related in &relation.related {
                writeln!(
                    self.writer,
                    "- {}: {} shared outfit(s)",
                    related.name, related.count
                )?;
            }
            writeln!(self.writer)?;
        }
        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn priority_label(priority: Priority) -> ColoredString {
        match priority {
            Priority::High => "HIGH".red().bold(),
            Priority::Medium => "MEDIUM".yellow(),
            Priority::Low => "LOW".cyan(),
        }
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_analysis(&mut self, report: &AnalysisReport) -> Result<()> {
        let stats = &report.statistics;

        writeln!(self.writer, "{}", "Wardrobe Analysis".bold().underline())?;
        writeln!(
            self.writer,
            "  {} items, {} outfits | value {:.2}, avg price {:.2}",
            stats.total_clothings, stats.total_outfits, stats.total_value, stats.avg_price
        )?;
        writeln!(
            self.writer,
            "  utilization {} ({} of {} worn)",
            format!("{:.1}%", stats.utilization.rate).green(),
            stats.utilization.worn,
            stats.utilization.total
        )?;
        writeln!(self.writer)?;

        if !stats.top_clothings.is_empty() {
            writeln!(self.writer, "{}", "Most worn".bold())?;
            for item in &stats.top_clothings {
                writeln!(self.writer, "  {:>4}x  {}", item.use_count, item.name)?;
            }
            writeln!(self.writer)?;
        }

        if !stats.brand_stats.is_empty() {
            writeln!(self.writer, "{}", "Brands".bold())?;
            for brand in &stats.brand_stats {
                writeln!(
                    self.writer,
                    "  {:>4} wears  {} ({} items)",
                    brand.total_use, brand.brand, brand.item_count
                )?;
            }
            writeln!(self.writer)?;
        }

        if !stats.idle_clothings.is_empty() {
            writeln!(self.writer, "{}", "Idle this season".bold())?;
            for idle in &stats.idle_clothings {
                let days = if idle.days_since_last_wear >= crate::stats::NEVER_WORN_SENTINEL {
                    "never worn".to_string()
                } else {
                    format!("{}d", idle.days_since_last_wear)
                };
                writeln!(self.writer, "  {:>10}  {}", days, idle.name)?;
            }
            writeln!(self.writer)?;
        }

        let worn_in_window: usize = stats.wear_trends.iter().map(|p| p.count).sum();
        writeln!(
            self.writer,
            "{} {} item(s) last worn in the past 30 days",
            "Trend:".bold(),
            worn_in_window
        )?;
        writeln!(self.writer)?;

        writeln!(self.writer, "{}", "Advisories".bold().underline())?;
        if report.advisories.is_empty() {
            writeln!(self.writer, "  {}", "nothing to flag".green())?;
        }
        for advisory in &report.advisories {
            writeln!(
                self.writer,
                "  [{}] {}: {}",
                Self::priority_label(advisory.priority),
                advisory.title.bold(),
                advisory.message
            )?;
        }
        Ok(())
    }

    fn write_relations(&mut self, report: &RelationsReport) -> Result<()> {
        writeln!(self.writer, "{}", "Outfit Relations".bold().underline())?;
        if report.relations.is_empty() {
            writeln!(self.writer, "  no items appear in any outfit")?;
            return Ok(());
        }
        for relation in &report.relations {
            writeln!(
                self.writer,
                "{} {}",
                relation.name.bold(),
                format!("({} outfits)", relation.frequency).dimmed()
            )?;
            for related in &relation.related {
                writeln!(self.writer, "  {:>3}x  {}", related.count, related.name)?;
            }
        }
        Ok(())
    }
}
