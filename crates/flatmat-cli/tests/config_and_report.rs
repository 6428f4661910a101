//! Integration tests for config loading and report rendering.

use std::io::Write;

use clap::{Arg, Command};
use flatmat::{ElementKind, MatrixError};
use flatmat_cli::config::{CellWrite, MatrixConfig};
use flatmat_cli::report::{build_matrix, run_report};
use serde_json::Number;

fn write_config(json: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file
}

fn override_command() -> Command {
    Command::new("test")
        .arg(
            Arg::new("rows")
                .long("rows")
                .value_parser(clap::value_parser!(i64))
                .allow_negative_numbers(true),
        )
        .arg(
            Arg::new("cols")
                .long("cols")
                .value_parser(clap::value_parser!(i64))
                .allow_negative_numbers(true),
        )
        .arg(Arg::new("type").long("type"))
        .arg(
            Arg::new("fill")
                .long("fill")
                .allow_negative_numbers(true),
        )
}

// ---------------------------------------------------------------------------
// MatrixConfig
// ---------------------------------------------------------------------------

#[test]
fn default_config_is_exercise_scenario() {
    let cfg = MatrixConfig::default();
    assert_eq!((cfg.rows, cfg.cols), (3, 4));
    assert_eq!(cfg.element_type, ElementKind::U32);
    assert_eq!(
        cfg.writes,
        vec![CellWrite {
            row: 1,
            col: 2,
            value: Number::from(99)
        }]
    );
}

#[test]
fn config_file_fields_are_loaded() {
    let file = write_config(
        r#"{
            "rows": 2,
            "cols": 2,
            "element_type": "d",
            "fill": 1.5,
            "writes": [{"row": 0, "col": 1, "value": -2.0}],
            "show_rows": [0],
            "show_cols": []
        }"#,
    );
    let cfg = MatrixConfig::from_file(file.path()).unwrap();
    assert_eq!((cfg.rows, cfg.cols), (2, 2));
    assert_eq!(cfg.element_type, ElementKind::F64);
    assert_eq!(cfg.fill.as_f64(), Some(1.5));
    assert_eq!(cfg.writes.len(), 1);
    assert!(cfg.show_cols.is_empty());
}

#[test]
fn missing_and_invalid_fields_fall_back_to_defaults() {
    let file = write_config(r#"{"rows": 5, "element_type": "not-a-type"}"#);
    let cfg = MatrixConfig::from_file(file.path()).unwrap();
    let defaults = MatrixConfig::default();
    assert_eq!(cfg.rows, 5);
    assert_eq!(cfg.cols, defaults.cols);
    assert_eq!(cfg.element_type, defaults.element_type);
    assert_eq!(cfg.writes, defaults.writes);
}

#[test]
fn unreadable_config_errors() {
    assert!(MatrixConfig::from_file("/nonexistent/path/matrix.json").is_err());
    let file = write_config("{ not json");
    assert!(MatrixConfig::from_file(file.path()).is_err());
}

#[test]
fn command_line_overrides_config() {
    let file = write_config(r#"{"rows": 2, "cols": 2, "element_type": "i"}"#);
    let matches = override_command()
        .try_get_matches_from(["test", "--rows", "6", "--type", "f32", "--fill", "3"])
        .unwrap();
    let cfg = MatrixConfig::from_arguments(Some(file.path()), &matches).unwrap();
    assert_eq!((cfg.rows, cfg.cols), (6, 2));
    assert_eq!(cfg.element_type, ElementKind::F32);
    assert_eq!(cfg.fill, Number::from(3));
}

#[test]
fn unknown_keys_are_ignored() {
    let file = write_config(r#"{"version": "0.0.1", "rows": 2, "comment": "scratch"}"#);
    let cfg = MatrixConfig::from_file(file.path()).unwrap();
    assert_eq!(cfg.rows, 2);
    assert_eq!(cfg.cols, MatrixConfig::default().cols);
}

#[test]
fn fill_override_must_be_a_number() {
    let matches = override_command()
        .try_get_matches_from(["test", "--fill", "lots"])
        .unwrap();
    let err = MatrixConfig::from_arguments(None, &matches).unwrap_err();
    assert!(err.to_string().contains("Invalid fill value"));
}

#[test]
fn bad_type_override_errors() {
    let matches = override_command()
        .try_get_matches_from(["test", "--type", "complex"])
        .unwrap();
    assert!(MatrixConfig::from_arguments(None, &matches).is_err());
}

// ---------------------------------------------------------------------------
// Reports
// ---------------------------------------------------------------------------

#[test]
fn default_report_shows_views() {
    let report = run_report(&MatrixConfig::default()).unwrap();
    let expected = "\
FlatMatrix(3x4, type=u32)
m[1, 2]  : 99
row 1   : [0, 0, 99, 0]
col 2   : [0, 99, 0]
nested  : [[0, 0, 0, 0], [0, 0, 99, 0], [0, 0, 0, 0]]
";
    assert_eq!(report, expected);
}

#[test]
fn negative_dimension_is_reported_by_the_matrix() {
    let cfg = MatrixConfig {
        cols: -1,
        ..MatrixConfig::default()
    };
    let err = run_report(&cfg).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<MatrixError>(),
        Some(MatrixError::InvalidDimension { value: -1, .. })
    ));
}

#[test]
fn negative_coordinate_is_out_of_range() {
    let cfg = MatrixConfig {
        writes: vec![CellWrite {
            row: -1,
            col: 0,
            value: Number::from(1),
        }],
        ..MatrixConfig::default()
    };
    let err = build_matrix::<i32>(&cfg).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<MatrixError>(),
        Some(MatrixError::IndexOutOfRange { index: -1, .. })
    ));
}

#[test]
fn value_outside_element_range_errors() {
    let cfg = MatrixConfig {
        element_type: ElementKind::U8,
        fill: Number::from(300),
        ..MatrixConfig::default()
    };
    let err = run_report(&cfg).unwrap_err();
    assert!(err.to_string().contains("does not fit in u8"));
}

#[test]
fn float_matrix_report() {
    let cfg = MatrixConfig {
        rows: 1,
        cols: 2,
        element_type: ElementKind::F64,
        fill: Number::from_f64(0.5).unwrap(),
        writes: vec![],
        show_rows: vec![0],
        show_cols: vec![],
        ..MatrixConfig::default()
    };
    let report = run_report(&cfg).unwrap();
    assert!(report.starts_with("FlatMatrix(1x2, type=f64)\n"));
    assert!(report.contains("row 0   : [0.5, 0.5]"));
}

#[test]
fn large_integers_are_stored_exactly() {
    let file = write_config(
        r#"{
            "rows": 1,
            "cols": 2,
            "element_type": "q",
            "fill": 9007199254740993,
            "writes": [{"row": 0, "col": 1, "value": -9007199254740993}]
        }"#,
    );
    let cfg = MatrixConfig::from_file(file.path()).unwrap();
    let m = build_matrix::<i64>(&cfg).unwrap();
    assert_eq!(m.get(0, 0).unwrap(), 9_007_199_254_740_993);
    assert_eq!(m.get(0, 1).unwrap(), -9_007_199_254_740_993);

    let cfg = MatrixConfig {
        element_type: ElementKind::U64,
        fill: Number::from(u64::MAX),
        writes: vec![],
        ..MatrixConfig::default()
    };
    let m = build_matrix::<u64>(&cfg).unwrap();
    assert_eq!(m.get(2, 3).unwrap(), u64::MAX);
}

#[test]
fn fractional_value_for_integer_type_errors() {
    let matches = override_command()
        .try_get_matches_from(["test", "--type", "i", "--fill", "1.5"])
        .unwrap();
    let cfg = MatrixConfig::from_arguments(None, &matches).unwrap();
    let err = run_report(&cfg).unwrap_err();
    assert!(err.to_string().contains("not an integer"));

    let cfg = MatrixConfig {
        fill: Number::from_f64(2.0).unwrap(),
        ..MatrixConfig::default()
    };
    let m = build_matrix::<u32>(&cfg).unwrap();
    assert_eq!(m.get(0, 0).unwrap(), 2);
}
