//! CSV serialization of a generated dataset.
//!
//! One file per table, header row first, fields quoted only when they
//! contain a delimiter, quote, or newline. Existing files are overwritten;
//! the data directory is created if absent.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{Result, StoreGenError};
use crate::generate::Dataset;
use crate::model::CsvRecord;

/// File name for a table's CSV, relative to the data directory.
pub fn table_file(data_dir: &Path, table: &str) -> PathBuf {
    data_dir.join(format!("{}.csv", table))
}

/// Write all five tables under `data_dir`, creating it if needed.
pub fn write_dataset(data_dir: &Path, data: &Dataset) -> Result<()> {
    fs::create_dir_all(data_dir).map_err(|e| StoreGenError::Output {
        message: format!("creating data directory {}", data_dir.display()),
        source: e,
    })?;

    write_table_file(&table_file(data_dir, "users"), &data.users)?;
    write_table_file(&table_file(data_dir, "products"), &data.products)?;
    write_table_file(&table_file(data_dir, "orders"), &data.orders)?;
    write_table_file(&table_file(data_dir, "order_items"), &data.order_items)?;
    write_table_file(&table_file(data_dir, "payments"), &data.payments)?;

    Ok(())
}

/// Write one table to `path`, truncating any existing file.
pub fn write_table_file<R: CsvRecord>(path: &Path, rows: &[R]) -> Result<()> {
    let file = File::create(path).map_err(|e| StoreGenError::Output {
        message: format!("creating {}", path.display()),
        source: e,
    })?;
    let mut writer = BufWriter::new(file);
    write_table(&mut writer, rows)?;
    writer.flush().map_err(|e| StoreGenError::Output {
        message: format!("flushing {}", path.display()),
        source: e,
    })
}

/// Write header + rows to any writer. The header is emitted even for an
/// empty table so the loader can still infer the column list.
pub fn write_table<W: Write, R: CsvRecord>(writer: &mut W, rows: &[R]) -> Result<()> {
    writeln!(
        writer,
        "{}",
        R::COLUMNS
            .iter()
            .map(|c| csv_escape(c))
            .collect::<Vec<_>>()
            .join(",")
    )
    .map_err(|e| StoreGenError::Output {
        message: "writing CSV header".to_string(),
        source: e,
    })?;

    for row in rows {
        let values: Vec<String> = row.csv_record().iter().map(|v| csv_escape(v)).collect();
        writeln!(writer, "{}", values.join(",")).map_err(|e| StoreGenError::Output {
            message: "writing CSV row".to_string(),
            source: e,
        })?;
    }

    Ok(())
}

/// Escape a string for CSV: quote if it contains comma, quote, or newline.
pub fn csv_escape(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') || s.contains('\r') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}
