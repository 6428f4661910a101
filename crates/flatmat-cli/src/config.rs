use anyhow::{Context, Result};
use clap::ArgMatches;
use flatmat::ElementKind;
use serde::{Deserialize, Serialize};
use serde_json::Number;
use std::fs;
use std::path::Path;

/// One assignment applied to the matrix after construction.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct CellWrite {
    pub row: i64,
    pub col: i64,
    pub value: Number,
}

/// Description of the matrix to build and which parts of it to print.
///
/// Dimensions and coordinates are signed so that bad input is reported by the
/// matrix itself (`InvalidDimension`, `IndexOutOfRange`) instead of failing
/// to parse. Values stay JSON numbers until the element type is known, so
/// 64-bit integers are not rounded through `f64`.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct MatrixConfig {
    pub rows: i64,
    pub cols: i64,
    pub element_type: ElementKind,
    pub fill: Number,
    pub writes: Vec<CellWrite>,
    pub show_rows: Vec<i64>,
    pub show_cols: Vec<i64>,
}

impl Default for MatrixConfig {
    fn default() -> Self {
        MatrixConfig {
            rows: 3,
            cols: 4,
            element_type: ElementKind::U32,
            fill: Number::from(0u32),
            writes: vec![CellWrite {
                row: 1,
                col: 2,
                value: Number::from(99u32),
            }],
            show_rows: vec![1],
            show_cols: vec![2],
        }
    }
}

impl MatrixConfig {
    /// Read a JSON config. Missing or malformed fields keep their default and
    /// log a warning.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let config_json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let partial: serde_json::Value = serde_json::from_str(&config_json)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        let mut config = MatrixConfig::default();

        macro_rules! load_or_default {
            ($field:ident) => {
                if let Some(val) = partial.get(stringify!($field)) {
                    if let Ok(parsed) = serde_json::from_value(val.clone()) {
                        config.$field = parsed;
                    } else {
                        log::warn!(
                            "Config Invalid value for '{}', using default: {:?}",
                            stringify!($field),
                            config.$field
                        );
                    }
                } else {
                    log::warn!(
                        "Config Missing field '{}', using default: {:?}",
                        stringify!($field),
                        config.$field
                    );
                }
            };
        }

        load_or_default!(rows);
        load_or_default!(cols);
        load_or_default!(element_type);
        load_or_default!(fill);
        load_or_default!(writes);
        load_or_default!(show_rows);
        load_or_default!(show_cols);

        Ok(config)
    }

    /// Start from the config file when one is given, then apply command-line
    /// overrides.
    pub fn from_arguments(config_path: Option<&Path>, matches: &ArgMatches) -> Result<Self> {
        let mut config = match config_path {
            Some(path) => MatrixConfig::from_file(path)?,
            None => MatrixConfig::default(),
        };

        if let Some(rows) = matches.get_one::<i64>("rows") {
            config.rows = *rows;
        }
        if let Some(cols) = matches.get_one::<i64>("cols") {
            config.cols = *cols;
        }
        if let Some(code) = matches.get_one::<String>("type") {
            config.element_type = code
                .parse()
                .with_context(|| format!("Invalid element type: {}", code))?;
        }
        if let Some(fill) = matches.get_one::<String>("fill") {
            config.fill = serde_json::from_str(fill)
                .with_context(|| format!("Invalid fill value: {}", fill))?;
        }

        Ok(config)
    }
}
