use super::*;
use crate::logic::error::InsightError;

fn grade_table(rows: &[&[&str]]) -> RawTable {
    RawTable::from_str_rows(&["G1", "G2", "G3"], rows)
}

#[test]
fn test_missing_grade_column_is_schema_error() {
    let table = RawTable::from_str_rows(&["g1", "g3"], &[&["1", "2"]]);
    match load_roster(&table) {
        Err(InsightError::MissingColumn { column }) => assert_eq!(column, "G2"),
        other => panic!("Expected MissingColumn, got {:?}", other),
    }
}

#[test]
fn test_fewer_than_five_valid_rows_rejected() {
    let table = grade_table(&[
        &["10", "10", "10"],
        &["11", "11", "11"],
        &["12", "12", "12"],
        &["13", "13", "13"],
        &["x", "13", "13"],
        &["13", "", "13"],
    ]);

    match load_roster(&table) {
        Err(InsightError::InsufficientData { valid, required }) => {
            assert_eq!(valid, 4);
            assert_eq!(required, 5);
        }
        other => panic!("Expected InsufficientData, got {:?}", other),
    }
}

#[test]
fn test_invalid_rows_dropped_before_counting() {
    let table = grade_table(&[
        &["10", "10", "10"],
        &["11", "11", "11"],
        &["bad", "11", "11"],
        &["12", "12", "12"],
        &["13", "13", "13"],
        &["14", "14", "14"],
    ]);

    let roster = load_roster(&table).unwrap();
    assert_eq!(roster.len(), 5);
    assert_eq!(roster.total_rows, 6);
    assert_eq!(roster.dropped_rows, 1);
    // Source rows keep their original index
    assert_eq!(roster.records[2].source_row, 3);
    assert!(!roster.has_absences);
}

#[test]
fn test_max_absences_ignores_missing_cells() {
    let table = RawTable::from_str_rows(
        &["g1", "g2", "g3", "absences"],
        &[
            &["10", "10", "10", "4"],
            &["11", "11", "11", ""],
            &["12", "12", "12", "30"],
            &["13", "13", "13", "2"],
            &["14", "14", "14", "0"],
        ],
    );

    let roster = load_roster(&table).unwrap();
    assert!(roster.has_absences);
    assert_eq!(roster.max_absences(), Some(30.0));
}

#[test]
fn test_max_absences_defaults_to_zero_without_column() {
    let table = grade_table(&[
        &["10", "10", "10"],
        &["11", "11", "11"],
        &["12", "12", "12"],
        &["13", "13", "13"],
        &["14", "14", "14"],
    ]);

    let roster = load_roster(&table).unwrap();
    assert_eq!(roster.max_absences(), Some(0.0));
}
