//! File-backed end-to-end runs: input parsing and the written outputs.

use std::fs;
use std::path::Path;

use chrono::{TimeZone, Utc};
use geoxref_core::{LoadConfig, RunKeys};
use geoxref_loader::input;

fn write_file(dir: &Path, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

fn config(dir: &Path) -> LoadConfig {
    LoadConfig {
        input_file: dir.join("entrezgene.ids"),
        association_file: dir.join("associations.tsv"),
        report_file: dir.join("discrepancy.rpt"),
        bcp_file: dir.join("acc_accession.bcp"),
        keys: RunKeys {
            next_accession_key: 5000001,
            geo_logical_db_key: 190,
            marker_type_key: 2,
            created_by_key: 1475,
        },
    }
}

#[test]
fn id_list_skips_blank_lines_and_keeps_duplicates() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(dir.path(), "ids.txt", "11\n\n  \n22\n11\n");

    let ids = input::read_id_list(&path).unwrap();
    assert_eq!(ids, vec!["11", "22", "11"]);
}

#[test]
fn association_snapshot_parses_tab_delimited_pairs() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(dir.path(), "assoc.tsv", "11\t4\n22\t5\n");

    let associations = input::read_associations(&path).unwrap();
    assert_eq!(
        associations,
        vec![("11".to_string(), 4), ("22".to_string(), 5)]
    );
}

#[test]
fn association_snapshot_rejects_garbage_lines() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(dir.path(), "assoc.tsv", "11\tnot-a-key\n");
    assert!(input::read_associations(&path).is_err());

    let path = write_file(dir.path(), "assoc2.tsv", "no-tab-here\n");
    assert!(input::read_associations(&path).is_err());
}

#[test]
fn full_run_writes_report_and_bcp_files() {
    let dir = tempfile::tempdir().unwrap();
    // "11" is clean; "200" holds two markers; "300" is unknown.
    write_file(dir.path(), "entrezgene.ids", "11\n200\n300\n");
    write_file(dir.path(), "associations.tsv", "11\t4\n200\t1\n200\t2\n");
    let config = config(dir.path());
    let load_date = Utc.with_ymd_and_hms(2008, 7, 11, 8, 30, 0).unwrap();

    let summary = geoxref_loader::run(&config, load_date).unwrap();
    assert_eq!(summary.requested, 3);
    assert_eq!(summary.discrepancies, 2);
    assert_eq!(summary.records, 1);

    let report = fs::read_to_string(&config.report_file).unwrap();
    assert!(report.contains("GEO Discrepancy Report"));
    assert!(report.contains("300"));
    assert!(report.contains("EntrezGene ID not associated with a marker"));
    assert!(report.contains("200"));
    assert!(report.contains("EntrezGene ID associated with multiple markers"));
    assert!(report.ends_with("Number of discrepancies: 2\n"));

    let bcp = fs::read_to_string(&config.bcp_file).unwrap();
    let lines: Vec<&str> = bcp.lines().collect();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with("5000001\t11\t\t11\t190\t4\t2\t1\t1\t1475\t1475\t"));
}

#[test]
fn fatal_generation_error_leaves_no_output_files() {
    let dir = tempfile::tempdir().unwrap();
    // "NOID" passes classification (clean singleton) but cannot be split.
    write_file(dir.path(), "entrezgene.ids", "NOID\n");
    write_file(dir.path(), "associations.tsv", "NOID\t4\n");
    let config = config(dir.path());

    let err = geoxref_loader::run(&config, Utc::now()).unwrap_err();
    assert!(err.to_string().contains("malformed accession ID"));
    assert!(!config.report_file.exists());
    assert!(!config.bcp_file.exists());
}

#[test]
fn clean_run_writes_an_empty_report_with_zero_count() {
    let dir = tempfile::tempdir().unwrap();
    write_file(dir.path(), "entrezgene.ids", "11\n");
    write_file(dir.path(), "associations.tsv", "11\t4\n");
    let config = config(dir.path());

    geoxref_loader::run(&config, Utc::now()).unwrap();
    let report = fs::read_to_string(&config.report_file).unwrap();
    assert!(report.ends_with("Number of discrepancies: 0\n"));
}
