use accessmap::core::errors::Error;
use accessmap::{build_report, FacetFilter, RawTable, SummaryView};
use pretty_assertions::assert_eq;

fn cells(values: &[&str]) -> Vec<Option<String>> {
    values
        .iter()
        .map(|v| {
            if v.is_empty() {
                None
            } else {
                Some(v.to_string())
            }
        })
        .collect()
}

fn roster_table(rows: &[&[&str]]) -> RawTable {
    RawTable::new(
        vec![
            "PS No".to_string(),
            "Name".to_string(),
            "Emp Job Code".to_string(),
            "Emp Job Description".to_string(),
            "Cluster".to_string(),
            "SPG".to_string(),
            "BU".to_string(),
        ],
        rows.iter().map(|r| cells(r)).collect(),
    )
}

fn access_table(rows: &[&[&str]]) -> RawTable {
    RawTable::new(
        vec![
            "PS No".to_string(),
            "Name".to_string(),
            "Emp Job Code".to_string(),
            "Emp Job Description".to_string(),
            "Violation Job Code".to_string(),
            "Violated Job Description".to_string(),
        ],
        rows.iter().map(|r| cells(r)).collect(),
    )
}

#[test]
fn missing_roster_columns_halt_the_pipeline_with_the_exact_list() {
    let roster = RawTable::new(
        vec!["PS No".to_string(), "Name".to_string()],
        vec![],
    );
    let access = access_table(&[]);
    let err = build_report(roster, access, FacetFilter::default(), SummaryView::default())
        .unwrap_err();
    match err {
        Error::MissingColumns { table, columns } => {
            assert_eq!(table, "HR Master Sheet");
            assert_eq!(
                columns,
                vec!["Emp Job Code", "Emp Job Description", "Cluster", "SPG", "BU"]
            );
        }
        other => panic!("expected MissingColumns, got {other:?}"),
    }
}

#[test]
fn missing_access_columns_are_reported_for_the_access_sheet() {
    let roster = roster_table(&[]);
    let access = RawTable::new(vec!["PS No".to_string()], vec![]);
    let err = build_report(roster, access, FacetFilter::default(), SummaryView::default())
        .unwrap_err();
    match err {
        Error::MissingColumns { table, columns } => {
            assert_eq!(table, "Access Data Sheet");
            assert_eq!(columns.len(), 5);
        }
        other => panic!("expected MissingColumns, got {other:?}"),
    }
}

#[test]
fn unnamed_placeholder_columns_do_not_fail_roster_validation() {
    let mut columns: Vec<String> = vec![
        "PS No", "Name", "Emp Job Code", "Emp Job Description", "Cluster", "SPG", "BU",
    ]
    .into_iter()
    .map(String::from)
    .collect();
    columns.push("Unnamed: 7".to_string());
    let roster = RawTable::new(
        columns,
        vec![cells(&["1", "Ada", "J1", "Clerk", "North", "A", "Retail", "junk"])],
    );
    let access = access_table(&[&["1", "Ada", "J1", "Clerk", "V1", "Admin"]]);
    let report =
        build_report(roster, access, FacetFilter::default(), SummaryView::default()).unwrap();
    assert_eq!(report.kpis.total_employees, 1);
}

#[test]
fn reconciled_facets_come_from_the_first_roster_occurrence() {
    // duplicate roster identifier with conflicting facets
    let roster = roster_table(&[
        &["1001", "Ada", "J1", "Clerk", "North", "A", "Retail"],
        &["1001", "Ada", "J1", "Clerk", "South", "B", "Banking"],
    ]);
    // float-formatted identifier on the access side still joins
    let access = access_table(&[&["1001.0", "Ada", "J1", "Clerk", "V1", "Admin"]]);
    let report =
        build_report(roster, access, FacetFilter::default(), SummaryView::default()).unwrap();
    assert_eq!(report.summary.rows.len(), 1);
    assert_eq!(report.summary.rows[0].cluster, "North");
    assert_eq!(report.summary.rows[0].spg, "A");
    assert_eq!(report.summary.rows[0].bu, "Retail");
}

#[test]
fn self_violations_never_reach_any_view_or_kpi() {
    let roster = roster_table(&[&["1", "Ada", "J1", "Clerk", "North", "A", "Retail"]]);
    let access = access_table(&[
        &["1", "Ada", "J1", "Clerk", "J1", "Clerk"],
        &["1", "Ada", "J1", "Clerk", "V2", "Admin"],
    ]);
    let report =
        build_report(roster, access, FacetFilter::default(), SummaryView::default()).unwrap();
    assert_eq!(report.kpis.total_violations, 1);
    assert_eq!(report.summary.rows[0].violated_job_description, "Admin");
    let flow = report.flow.unwrap();
    assert_eq!(flow.edges.len(), 1);
    let hierarchy = report.hierarchy.unwrap();
    assert_eq!(hierarchy.groups[0].children.len(), 1);
}

#[test]
fn forward_fill_groups_continuation_rows_under_their_header() {
    let roster = roster_table(&[&["1", "Ada", "J1", "Clerk", "North", "A", "Retail"]]);
    let access = access_table(&[
        &["1", "Ada", "J1", "Clerk", "V1", "Admin"],
        &["", "", "", "", "V2", "Manager"],
        &["", "", "", "", "V3", "Auditor"],
    ]);
    let report =
        build_report(roster, access, FacetFilter::default(), SummaryView::default()).unwrap();
    assert_eq!(report.kpis.employees_with_violations, 1);
    assert_eq!(report.kpis.total_violations, 3);
    // summary blanking: one full row, two continuation rows
    let full_rows = report
        .summary
        .rows
        .iter()
        .filter(|r| !r.identifier.is_empty())
        .count();
    assert_eq!(full_rows, 1);
}

#[test]
fn filtering_is_a_subset_and_applies_to_both_projections() {
    let roster = roster_table(&[
        &["1", "Ada", "J1", "Clerk", "North", "A", "Retail"],
        &["2", "Bob", "J2", "Manager", "South", "B", "Banking"],
    ]);
    let access = access_table(&[
        &["1", "Ada", "J1", "Clerk", "V1", "Admin"],
        &["2", "Bob", "J2", "Manager", "V2", "Admin"],
    ]);
    let unfiltered = build_report(
        roster_table(&[
            &["1", "Ada", "J1", "Clerk", "North", "A", "Retail"],
            &["2", "Bob", "J2", "Manager", "South", "B", "Banking"],
        ]),
        access_table(&[
            &["1", "Ada", "J1", "Clerk", "V1", "Admin"],
            &["2", "Bob", "J2", "Manager", "V2", "Admin"],
        ]),
        FacetFilter::default(),
        SummaryView::default(),
    )
    .unwrap();

    let filter = FacetFilter {
        clusters: vec!["North".to_string()],
        ..FacetFilter::default()
    };
    let report = build_report(roster, access, filter, SummaryView::default()).unwrap();

    assert!(report.summary.rows.len() <= unfiltered.summary.rows.len());
    assert_eq!(report.summary.rows.len(), 1);
    assert_eq!(report.summary.rows[0].identifier, "1");
    // roster projection honors the same filter state
    assert_eq!(report.roster.len(), 1);
    assert_eq!(report.roster[0].identifier, "1");
    // total employees ignores the filter
    assert_eq!(report.kpis.total_employees, 2);
}

#[test]
fn unmatched_filter_value_empties_every_derived_view() {
    let roster = roster_table(&[&["1", "Ada", "J1", "Clerk", "North", "A", "Retail"]]);
    let access = access_table(&[&["1", "Ada", "J1", "Clerk", "V1", "Admin"]]);
    let filter = FacetFilter {
        bus: vec!["Atlantis".to_string()],
        ..FacetFilter::default()
    };
    let report = build_report(roster, access, filter, SummaryView::default()).unwrap();
    assert!(report.summary.is_empty());
    assert!(report.flow.is_none());
    assert!(report.hierarchy.is_none());
    assert_eq!(report.kpis.most_violated_role, "N/A");
}

#[test]
fn unmatched_identifier_joins_nothing_but_stays_in_the_dataset() {
    let roster = roster_table(&[&["1", "Ada", "J1", "Clerk", "North", "A", "Retail"]]);
    let access = access_table(&[&["9999", "Zed", "J9", "Ops", "V1", "Admin"]]);
    let report =
        build_report(roster, access, FacetFilter::default(), SummaryView::default()).unwrap();
    assert_eq!(report.summary.rows.len(), 1);
    assert_eq!(report.summary.rows[0].cluster, "");
    assert_eq!(report.summary.rows[0].spg, "");
    assert_eq!(report.summary.rows[0].bu, "");
}

#[test]
fn identical_inputs_produce_byte_identical_reports() {
    let make = || {
        build_report(
            roster_table(&[
                &["1", "Ada", "J1", "Clerk", "North", "A", "Retail"],
                &["2", "Bob", "J2", "Manager", "South", "B", "Banking"],
            ]),
            access_table(&[
                &["1", "Ada", "J1", "Clerk", "V1", "Admin"],
                &["2", "Bob", "J2", "Manager", "V2", "Admin"],
                &["", "", "", "", "V3", "Auditor"],
            ]),
            FacetFilter::default(),
            SummaryView::default(),
        )
        .unwrap()
    };
    let first = serde_json::to_string(&make()).unwrap();
    let second = serde_json::to_string(&make()).unwrap();
    assert_eq!(first, second);
}
