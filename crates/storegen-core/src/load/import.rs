//! # Bulk CSV Import
//!
//! Reads each table's CSV, auto-detects column types, and inserts every
//! row inside a single transaction as batched multi-row INSERT statements.
//! If anything fails — a missing file, a malformed row, a constraint
//! violation — the transaction rolls back and the error propagates, so a
//! partial load never survives.

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use sqlx::SqlitePool;

use crate::error::{Result, StoreGenError};
use crate::load::infer::{detect_column_types, parse_cell, split_csv_line, SqlValue};
use crate::load::schema::TABLE_ORDER;
use crate::output::csv::table_file;

/// Rows per multi-row INSERT statement.
pub const INSERT_BATCH_SIZE: usize = 100;

/// Progress reporting interval (rows) to avoid terminal I/O overhead.
const PROGRESS_BATCH_SIZE: usize = 1_000;

/// One parsed CSV file, ready for insertion.
#[derive(Debug)]
pub struct TableCsv {
    pub table: &'static str,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<SqlValue>>,
}

/// Read and parse one table's CSV from disk.
///
/// Fails if the file is missing, has no header, or any row's field count
/// doesn't match the header — there is no row-level skipping.
pub fn read_table_csv(data_dir: &Path, table: &'static str) -> Result<TableCsv> {
    let path = table_file(data_dir, table);
    let content = fs::read_to_string(&path).map_err(|e| StoreGenError::LoadData {
        table: table.to_string(),
        path: path.display().to_string(),
        message: format!("cannot read source file: {}", e),
    })?;

    let mut lines = content.lines();
    let header = lines.next().ok_or_else(|| StoreGenError::LoadData {
        table: table.to_string(),
        path: path.display().to_string(),
        message: "file is empty, expected a header row".to_string(),
    })?;
    let columns = split_csv_line(header);

    let mut raw_rows = Vec::new();
    for (line_no, line) in lines.enumerate() {
        if line.is_empty() {
            continue;
        }
        let fields = split_csv_line(line);
        if fields.len() != columns.len() {
            return Err(StoreGenError::LoadData {
                table: table.to_string(),
                path: path.display().to_string(),
                message: format!(
                    "line {}: expected {} fields, found {}",
                    line_no + 2,
                    columns.len(),
                    fields.len()
                ),
            });
        }
        raw_rows.push(fields);
    }

    let types = detect_column_types(columns.len(), &raw_rows);
    let rows = raw_rows
        .iter()
        .map(|row| {
            row.iter()
                .zip(&types)
                .map(|(cell, ty)| parse_cell(cell, *ty))
                .collect()
        })
        .collect();

    Ok(TableCsv {
        table,
        columns,
        rows,
    })
}

/// Load all five tables from `data_dir` into the database.
///
/// Files are read and validated up front, then inserted in parent-before-
/// child order within one transaction. Returns the per-table row counts in
/// load order. The `progress_callback` receives (rows_inserted, total).
pub async fn load_tables(
    pool: &SqlitePool,
    data_dir: &Path,
    progress_callback: Option<&(dyn Fn(usize, usize) + Send + Sync)>,
) -> Result<IndexMap<String, usize>> {
    let tables: Vec<TableCsv> = TABLE_ORDER
        .into_iter()
        .map(|table| read_table_csv(data_dir, table))
        .collect::<Result<_>>()?;

    let total_rows: usize = tables.iter().map(|t| t.rows.len()).sum();

    let mut tx = pool.begin().await.map_err(|e| StoreGenError::Sql {
        statement: "BEGIN".to_string(),
        source: e,
    })?;

    let mut counts = IndexMap::new();
    let mut rows_inserted = 0usize;

    for table in &tables {
        tracing::debug!(table = table.table, rows = table.rows.len(), "loading table");

        for chunk in table.rows.chunks(INSERT_BATCH_SIZE) {
            let sql = build_batched_insert(table.table, &table.columns, chunk);

            sqlx::query(&sql)
                .execute(&mut *tx)
                .await
                .map_err(|e| StoreGenError::InsertFailed {
                    table: table.table.to_string(),
                    row_index: rows_inserted,
                    sql_preview: truncate_sql(&sql, 200),
                    source: e,
                })?;

            rows_inserted += chunk.len();
            report_progress(progress_callback, rows_inserted, total_rows);
        }

        counts.insert(table.table.to_string(), table.rows.len());
    }

    tx.commit().await.map_err(|e| StoreGenError::Sql {
        statement: "COMMIT".to_string(),
        source: e,
    })?;

    Ok(counts)
}

/// Build a multi-row INSERT for one chunk.
fn build_batched_insert(table: &str, columns: &[String], rows: &[Vec<SqlValue>]) -> String {
    let col_list = columns.join(", ");
    let values: Vec<String> = rows
        .iter()
        .map(|row| {
            let literals: Vec<String> = row.iter().map(|v| v.to_sql_literal()).collect();
            format!("({})", literals.join(", "))
        })
        .collect();
    format!(
        "INSERT INTO {} ({}) VALUES {}",
        table,
        col_list,
        values.join(", ")
    )
}

/// Truncate a SQL string for error messages.
fn truncate_sql(sql: &str, max_len: usize) -> String {
    if sql.len() <= max_len {
        sql.to_string()
    } else {
        format!("{}...", &sql[..max_len])
    }
}

/// Report progress in batches to avoid terminal I/O overhead.
fn report_progress(
    callback: Option<&(dyn Fn(usize, usize) + Send + Sync)>,
    current: usize,
    total: usize,
) {
    if let Some(cb) = callback {
        if current.is_multiple_of(PROGRESS_BATCH_SIZE) || current == total {
            cb(current, total);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_batched_insert() {
        let columns = vec!["user_id".to_string(), "email".to_string()];
        let rows = vec![
            vec![SqlValue::Int(1), SqlValue::Text("a@b.com".to_string())],
            vec![SqlValue::Int(2), SqlValue::Text("c@d.com".to_string())],
        ];
        let sql = build_batched_insert("users", &columns, &rows);
        assert_eq!(
            sql,
            "INSERT INTO users (user_id, email) VALUES (1, 'a@b.com'), (2, 'c@d.com')"
        );
    }

    #[test]
    fn test_truncate_sql_short() {
        assert_eq!(truncate_sql("SELECT 1", 200), "SELECT 1");
    }

    #[test]
    fn test_truncate_sql_long() {
        let sql = "A".repeat(300);
        let truncated = truncate_sql(&sql, 200);
        assert_eq!(truncated.len(), 203);
        assert!(truncated.ends_with("..."));
    }

    #[test]
    fn test_read_table_csv_missing_file() {
        let tmp = tempfile::tempdir().unwrap();
        let err = read_table_csv(tmp.path(), "users").unwrap_err();
        assert!(matches!(err, StoreGenError::LoadData { .. }));
    }

    #[test]
    fn test_read_table_csv_field_count_mismatch() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join("users.csv"), "a,b\n1,2\n3\n").unwrap();
        let err = read_table_csv(tmp.path(), "users").unwrap_err();
        match err {
            StoreGenError::LoadData { message, .. } => {
                assert!(message.contains("line 3"), "unexpected message: {}", message);
            }
            other => panic!("expected LoadData, got {:?}", other),
        }
    }

    #[test]
    fn test_read_table_csv_parses_types() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(
            tmp.path().join("payments.csv"),
            "payment_id,order_id,payment_date,payment_status,amount\n\
             1,9,2023-02-03 10:00:00,paid,42.50\n",
        )
        .unwrap();
        let csv = read_table_csv(tmp.path(), "payments").unwrap();
        assert_eq!(csv.columns.len(), 5);
        assert_eq!(csv.rows.len(), 1);
        assert_eq!(csv.rows[0][0], SqlValue::Int(1));
        assert!(matches!(csv.rows[0][2], SqlValue::Timestamp(_)));
        assert_eq!(csv.rows[0][4], SqlValue::Real(42.5));
    }
}
