use anyhow::{anyhow, bail, Result};
use flatmat::{coordinate, dimension, Axis, Element, ElementKind, FlatMatrix};
use serde_json::Number;
use std::fmt::Write;

use crate::config::MatrixConfig;

/// Convert a JSON number to `T` without passing integers through `f64`.
/// Integer types accept only integral values.
fn cast<T: Element>(value: &Number) -> Result<T> {
    let converted = if T::KIND.is_float() {
        value.as_f64().and_then(T::from_f64)
    } else if let Some(v) = value.as_i64() {
        T::from_i64(v)
    } else if let Some(v) = value.as_u64() {
        T::from_u64(v)
    } else {
        match value.as_f64() {
            Some(v) if v.fract() == 0.0 => T::from_f64(v),
            _ => bail!("value {} is not an integer, cannot store in {}", value, T::KIND),
        }
    };
    converted.ok_or_else(|| anyhow!("value {} does not fit in {}", value, T::KIND))
}

fn format_values<'a, T: Element>(values: impl IntoIterator<Item = &'a T>) -> String {
    let values: Vec<String> = values.into_iter().map(|v| v.to_string()).collect();
    format!("[{}]", values.join(", "))
}

/// Construct the matrix described by `config` and apply its writes.
pub fn build_matrix<T: Element>(config: &MatrixConfig) -> Result<FlatMatrix<T>> {
    let rows = dimension(config.rows, Axis::Row)?;
    let cols = dimension(config.cols, Axis::Column)?;
    let mut matrix = FlatMatrix::new(rows, cols, cast::<T>(&config.fill)?)?;

    for write in &config.writes {
        let r = coordinate(write.row, rows, Axis::Row)?;
        let c = coordinate(write.col, cols, Axis::Column)?;
        matrix.set(r, c, cast::<T>(&write.value)?)?;
    }
    log::debug!(
        "built {} with {} writes",
        matrix.summary(),
        config.writes.len()
    );
    Ok(matrix)
}

/// Text report of a matrix: summary, written cells, requested rows and
/// columns, and the nested copy.
pub fn render_report<T: Element>(config: &MatrixConfig, matrix: &FlatMatrix<T>) -> Result<String> {
    let (rows, cols) = matrix.shape();
    let mut out = String::new();

    writeln!(out, "{}", matrix.summary())?;
    for write in &config.writes {
        let r = coordinate(write.row, rows, Axis::Row)?;
        let c = coordinate(write.col, cols, Axis::Column)?;
        writeln!(out, "m[{}, {}]  : {}", r, c, matrix.get(r, c)?)?;
    }
    for &row in &config.show_rows {
        let r = coordinate(row, rows, Axis::Row)?;
        writeln!(out, "row {:<4}: {}", r, format_values(matrix.row(r)?))?;
    }
    for &col in &config.show_cols {
        let c = coordinate(col, cols, Axis::Column)?;
        writeln!(out, "col {:<4}: {}", c, format_values(matrix.col(c)?))?;
    }
    writeln!(out, "nested  : {}", matrix)?;

    Ok(out)
}

fn report_as<T: Element>(config: &MatrixConfig) -> Result<String> {
    let matrix = build_matrix::<T>(config)?;
    render_report(config, &matrix)
}

/// Build and render with the element type named in `config`.
pub fn run_report(config: &MatrixConfig) -> Result<String> {
    match config.element_type {
        ElementKind::I8 => report_as::<i8>(config),
        ElementKind::I16 => report_as::<i16>(config),
        ElementKind::I32 => report_as::<i32>(config),
        ElementKind::I64 => report_as::<i64>(config),
        ElementKind::U8 => report_as::<u8>(config),
        ElementKind::U16 => report_as::<u16>(config),
        ElementKind::U32 => report_as::<u32>(config),
        ElementKind::U64 => report_as::<u64>(config),
        ElementKind::F32 => report_as::<f32>(config),
        ElementKind::F64 => report_as::<f64>(config),
    }
}
