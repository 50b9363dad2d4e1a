//! Integration tests for feature derivation over whole tables

use super::*;
use crate::logic::dataset::{load_roster, RawTable};

const FULL_HEADERS: &[&str] = &[
    "G1", "G2", "G3", "absences", "studytime", "traveltime", "activities", "higher",
    "schoolsup", "internet", "paid", "famsup", "Medu", "Fedu", "famrel", "goout", "Dalc",
    "Walc", "health", "Pstatus",
];

fn uniform_rows(fields: &[&str], count: usize) -> Vec<Vec<String>> {
    (0..count)
        .map(|i| {
            let mut row: Vec<String> = vec![format!("{}", 8 + i), "10".into(), "12".into()];
            row.extend(fields.iter().map(|f| f.to_string()));
            row
        })
        .collect()
}

fn table(fields: &[&str]) -> RawTable {
    RawTable::new(
        FULL_HEADERS.iter().map(|h| h.to_string()).collect(),
        uniform_rows(fields, 5),
    )
}

fn assert_indices_bounded(features: &[DerivedFeatures]) {
    for f in features {
        for (name, value) in f.indices() {
            assert!(
                (0.0..=1.0).contains(&value),
                "{} = {} outside [0, 1]",
                name,
                value
            );
        }
    }
}

#[test]
fn test_indices_bounded_all_zero_fields() {
    let zeros = [
        "0", "0", "0", "no", "no", "no", "no", "no", "no", "0", "0", "0", "0", "0", "0", "0", "T",
    ];
    let roster = load_roster(&table(&zeros)).unwrap();
    assert_indices_bounded(&derive_all(&roster));
}

#[test]
fn test_indices_bounded_all_max_fields() {
    let maxes = [
        "93", "4", "4", "yes", "yes", "yes", "yes", "yes", "yes", "4", "4", "5", "5", "5", "5",
        "5", "A",
    ];
    let roster = load_roster(&table(&maxes)).unwrap();
    let features = derive_all(&roster);
    assert_indices_bounded(&features);
    assert!((features[0].engagement - 1.0).abs() < 1e-9);
    assert!((features[0].lifestyle_risk - 1.0).abs() < 1e-9);
}

#[test]
fn test_indices_bounded_out_of_range_codes() {
    let wild = [
        "-4", "12", "-3", "yes", "no", "yes", "no", "yes", "no", "9", "-2", "11", "-7", "40",
        "22", "-1", "A",
    ];
    let roster = load_roster(&table(&wild)).unwrap();
    assert_indices_bounded(&derive_all(&roster));
}

#[test]
fn test_avg_and_trend_match_grades() {
    let roster = load_roster(&RawTable::from_str_rows(
        &["g1", "g2", "g3"],
        &[
            &["10", "12", "14"],
            &["3.5", "7", "1"],
            &["20", "20", "20"],
            &["0", "0", "0"],
            &["11", "9", "15.5"],
        ],
    ))
    .unwrap();

    for (record, f) in roster.records.iter().zip(derive_all(&roster)) {
        let g = record.grades;
        assert!((f.avg_grade - (g.g1 + g.g2 + g.g3) / 3.0).abs() < 1e-9);
        assert_eq!(f.grade_trend, g.g3 - g.g1);
        assert!(f.grade_stability > 0.0 && f.grade_stability <= 1.0);
    }
}

#[test]
fn test_vector_follows_layout() {
    let roster = load_roster(&RawTable::from_str_rows(
        &["g1", "g2", "g3"],
        &[
            &["10", "12", "14"],
            &["10", "12", "14"],
            &["10", "12", "14"],
            &["10", "12", "14"],
            &["10", "12", "14"],
        ],
    ))
    .unwrap();

    let f = derive_all(&roster)[0];
    let v = f.vector();
    assert_eq!(v.get_by_name("avg_grade"), Some(f.avg_grade));
    assert_eq!(v.get_by_name("grade_trend"), Some(4.0));
    assert_eq!(v.get_by_name("low_ses"), Some(f.low_ses));
}
