//! End-to-end pipeline: read the two sheets, validate, normalize,
//! reconcile, filter, aggregate, and hand the report to a writer.

use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use crate::config::{
    ACCESS_SHEET_NAME, REQUIRED_ACCESS_COLUMNS, REQUIRED_ROSTER_COLUMNS, ROSTER_SHEET_NAME,
    UNNAMED_COLUMN_PREFIX,
};
use crate::core::errors::Result;
use crate::core::{AnalysisReport, EmployeeRecord, RawTable};
use crate::filters::{self, FacetFilter};
use crate::io::output::{create_writer, OutputFormat};
use crate::io::read_table;
use crate::kpi;
use crate::normalize::{roster_from_table, violations_from_table};
use crate::reconcile::reconcile;
use crate::validate::require_columns;
use crate::views::{flow, hierarchy, summary, SummaryView};

pub struct AnalyzeConfig {
    pub roster_path: PathBuf,
    pub access_path: PathBuf,
    pub filter: FacetFilter,
    pub view: SummaryView,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
}

pub fn handle_analyze(config: AnalyzeConfig) -> anyhow::Result<()> {
    let roster_table = read_table(&config.roster_path, ROSTER_SHEET_NAME)?;
    let access_table = read_table(&config.access_path, ACCESS_SHEET_NAME)?;

    let report = build_report(roster_table, access_table, config.filter, config.view)?;

    let writer: Box<dyn Write> = match &config.output {
        Some(path) => Box::new(File::create(path)?),
        None => Box::new(std::io::stdout()),
    };
    create_writer(config.format, writer).write_report(&report)?;
    Ok(())
}

/// Pure transformation of the two sheets into the report. Validation
/// failures are terminal; empty views degrade to their no-data state
/// without affecting the others.
pub fn build_report(
    mut roster_table: RawTable,
    access_table: RawTable,
    filter: FacetFilter,
    view: SummaryView,
) -> Result<AnalysisReport> {
    roster_table.drop_unnamed_columns(UNNAMED_COLUMN_PREFIX);
    require_columns(&roster_table, &REQUIRED_ROSTER_COLUMNS, ROSTER_SHEET_NAME)?;
    require_columns(&access_table, &REQUIRED_ACCESS_COLUMNS, ACCESS_SHEET_NAME)?;

    let roster = roster_from_table(&roster_table);
    let violations = violations_from_table(&access_table);
    warn_on_unknown_facets(&roster, &filter);

    let reconciled = reconcile(&roster, violations);
    let filtered = filters::filter_violations(&reconciled, &filter);
    let filtered_roster = filters::filter_roster(&roster, &filter);
    log::debug!(
        "{} of {} reconciled rows match the filter",
        filtered.len(),
        reconciled.len()
    );

    let summary_table = summary::build_summary(&filtered);
    let kpis = kpi::summarize(&roster, &summary_table);

    Ok(AnalysisReport {
        filter,
        view,
        kpis,
        flow: flow::build_flow(&filtered),
        hierarchy: hierarchy::build_hierarchy(&filtered),
        summary: summary::blank_shared_fields(&summary_table),
        roster: filtered_roster,
    })
}

fn warn_on_unknown_facets(roster: &[EmployeeRecord], filter: &FacetFilter) {
    if filter.is_unconstrained() {
        return;
    }
    let available = filters::facet_values(roster);
    for (facet, selected, known) in [
        ("Cluster", &filter.clusters, &available.clusters),
        ("SPG", &filter.spgs, &available.spgs),
        ("BU", &filter.bus, &available.bus),
    ] {
        for value in selected {
            if !known.contains(value) {
                log::warn!("{facet} filter value {value:?} matches no roster row");
            }
        }
    }
}
