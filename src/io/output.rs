//! Report writers: terminal, JSON, and markdown renderings of an
//! [`AnalysisReport`].

use std::io::Write;

use colored::*;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};

use crate::config::{REQUIRED_ROSTER_COLUMNS, SUMMARY_COLUMNS};
use crate::core::{AnalysisReport, EmployeeRecord};
use crate::views::SummaryView;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

pub trait ReportWriter {
    fn write_report(&mut self, report: &AnalysisReport) -> anyhow::Result<()>;
}

pub fn create_writer(format: OutputFormat, writer: Box<dyn Write>) -> Box<dyn ReportWriter> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(writer)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer)),
    }
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> ReportWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
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

    fn write_kpis(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", "Key Metrics".bold().green())?;
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec!["Metric", "Value"]);
        table.add_row(vec![
            "Total Employees".to_string(),
            report.kpis.total_employees.to_string(),
        ]);
        table.add_row(vec![
            "Employees with Violations".to_string(),
            report.kpis.employees_with_violations.to_string(),
        ]);
        table.add_row(vec![
            "Total Violations".to_string(),
            report.kpis.total_violations.to_string(),
        ]);
        table.add_row(vec![
            "Most Violated Role".to_string(),
            report.kpis.most_violated_role.clone(),
        ]);
        writeln!(self.writer, "{table}")?;
        Ok(())
    }

    fn write_flow(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", "Violation Flow".bold().green())?;
        let Some(flow) = &report.flow else {
            writeln!(
                self.writer,
                "No violations available to generate the flow view."
            )?;
            return Ok(());
        };
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec!["Role", "Violated Role", "Employees"]);
        for edge in &flow.edges {
            table.add_row(vec![
                flow.labels[edge.source].clone(),
                flow.labels[edge.target].clone(),
                edge.employees.to_string(),
            ]);
        }
        writeln!(self.writer, "{table}")?;
        Ok(())
    }

    fn write_hierarchy(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", "Violated Access by Role".bold().green())?;
        let Some(hierarchy) = &report.hierarchy else {
            writeln!(self.writer, "No access data available for the hierarchy view.")?;
            return Ok(());
        };
        for group in &hierarchy.groups {
            writeln!(
                self.writer,
                "{} ({})",
                group.label.bold(),
                group.total
            )?;
            for leaf in &group.children {
                writeln!(self.writer, "  {} ({})", leaf.label, leaf.count)?;
            }
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_summary(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        match report.view {
            SummaryView::Employees => {
                writeln!(self.writer, "{}", "Employees".bold().green())?;
                let mut table = Table::new();
                table
                    .load_preset(UTF8_FULL)
                    .set_content_arrangement(ContentArrangement::Dynamic)
                    .set_header(REQUIRED_ROSTER_COLUMNS.to_vec());
                for employee in &report.roster {
                    table.add_row(roster_cells(employee));
                }
                writeln!(self.writer, "{table}")?;
            }
            SummaryView::Violations => {
                writeln!(self.writer, "{}", "Violations".bold().green())?;
                let mut table = Table::new();
                table
                    .load_preset(UTF8_FULL)
                    .set_content_arrangement(ContentArrangement::Dynamic)
                    .set_header(SUMMARY_COLUMNS.to_vec());
                for row in &report.summary.rows {
                    table.add_row(row.cells().to_vec());
                }
                writeln!(self.writer, "{table}")?;
            }
        }
        Ok(())
    }
}

impl<W: Write> ReportWriter for TerminalWriter<W> {
    fn write_report(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        self.write_kpis(report)?;
        self.write_flow(report)?;
        self.write_hierarchy(report)?;
        self.write_summary(report)?;
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

    fn write_header(&mut self) -> anyhow::Result<()> {
        writeln!(self.writer, "# Role Access Report")?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_kpis(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        writeln!(self.writer, "## Key Metrics")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Metric | Value |")?;
        writeln!(self.writer, "|--------|-------|")?;
        writeln!(
            self.writer,
            "| Total Employees | {} |",
            report.kpis.total_employees
        )?;
        writeln!(
            self.writer,
            "| Employees with Violations | {} |",
            report.kpis.employees_with_violations
        )?;
        writeln!(
            self.writer,
            "| Total Violations | {} |",
            report.kpis.total_violations
        )?;
        writeln!(
            self.writer,
            "| Most Violated Role | {} |",
            report.kpis.most_violated_role
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_flow(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        writeln!(self.writer, "## Violation Flow")?;
        writeln!(self.writer)?;
        let Some(flow) = &report.flow else {
            writeln!(self.writer, "No violations available.")?;
            writeln!(self.writer)?;
            return Ok(());
        };
        writeln!(self.writer, "| Role | Violated Role | Employees |")?;
        writeln!(self.writer, "|------|---------------|-----------|")?;
        for edge in &flow.edges {
            writeln!(
                self.writer,
                "| {} | {} | {} |",
                flow.labels[edge.source], flow.labels[edge.target], edge.employees
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_hierarchy(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        writeln!(self.writer, "## Violated Access by Role")?;
        writeln!(self.writer)?;
        let Some(hierarchy) = &report.hierarchy else {
            writeln!(self.writer, "No access data available.")?;
            writeln!(self.writer)?;
            return Ok(());
        };
        for group in &hierarchy.groups {
            writeln!(self.writer, "- {} ({})", group.label, group.total)?;
            for leaf in &group.children {
                writeln!(self.writer, "  - {} ({})", leaf.label, leaf.count)?;
            }
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_summary(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        match report.view {
            SummaryView::Employees => {
                writeln!(self.writer, "## Employees")?;
                writeln!(self.writer)?;
                writeln!(self.writer, "| {} |", REQUIRED_ROSTER_COLUMNS.join(" | "))?;
                writeln!(
                    self.writer,
                    "|{}|",
                    REQUIRED_ROSTER_COLUMNS.map(|_| "---").join("|")
                )?;
                for employee in &report.roster {
                    writeln!(self.writer, "| {} |", roster_cells(employee).join(" | "))?;
                }
            }
            SummaryView::Violations => {
                writeln!(self.writer, "## Violations")?;
                writeln!(self.writer)?;
                writeln!(self.writer, "| {} |", SUMMARY_COLUMNS.join(" | "))?;
                writeln!(self.writer, "|{}|", SUMMARY_COLUMNS.map(|_| "---").join("|"))?;
                for row in &report.summary.rows {
                    writeln!(self.writer, "| {} |", row.cells().join(" | "))?;
                }
            }
        }
        writeln!(self.writer)?;
        Ok(())
    }
}

impl<W: Write> ReportWriter for MarkdownWriter<W> {
    fn write_report(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        self.write_header()?;
        self.write_kpis(report)?;
        self.write_flow(report)?;
        self.write_hierarchy(report)?;
        self.write_summary(report)?;
        Ok(())
    }
}

fn roster_cells(employee: &EmployeeRecord) -> Vec<String> {
    [
        Some(employee.identifier.clone()),
        employee.name.clone(),
        employee.job_code.clone(),
        employee.job_description.clone(),
        employee.cluster.clone(),
        employee.spg.clone(),
        employee.bu.clone(),
    ]
    .into_iter()
    .map(Option::unwrap_or_default)
    .collect()
}
