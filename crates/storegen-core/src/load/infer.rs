//! CSV parsing and column-type auto-detection.
//!
//! The loader does not hard-code per-column parsers. Instead it sniffs
//! every value in a column and settles on the narrowest SQL type that fits
//! them all, widening as needed (integer + real → real, anything mixed
//! with text → text). Empty cells are NULL and don't constrain the type.

use chrono::NaiveDateTime;

use crate::model::TIMESTAMP_FORMAT;

/// SQL type detected for a whole column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    Integer,
    Real,
    Boolean,
    Timestamp,
    Text,
}

/// One parsed CSV cell, typed according to the detected column type.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Null,
    Int(i64),
    Real(f64),
    Bool(bool),
    Timestamp(NaiveDateTime),
    Text(String),
}

impl SqlValue {
    /// Render as a SQL literal for an INSERT statement.
    pub fn to_sql_literal(&self) -> String {
        match self {
            SqlValue::Null => "NULL".to_string(),
            SqlValue::Int(i) => i.to_string(),
            SqlValue::Real(f) => format!("{}", f),
            SqlValue::Bool(b) => {
                if *b {
                    "TRUE".to_string()
                } else {
                    "FALSE".to_string()
                }
            }
            SqlValue::Timestamp(ts) => format!("'{}'", ts.format(TIMESTAMP_FORMAT)),
            SqlValue::Text(s) => format!("'{}'", s.replace('\'', "''")),
        }
    }
}

/// Split one CSV line into fields, honoring double-quote escaping.
/// The inverse of the writer's `csv_escape`.
pub fn split_csv_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            if c == '"' {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    field.push('"');
                } else {
                    in_quotes = false;
                }
            } else {
                field.push(c);
            }
        } else {
            match c {
                '"' => in_quotes = true,
                ',' => {
                    fields.push(std::mem::take(&mut field));
                }
                _ => field.push(c),
            }
        }
    }
    fields.push(field);
    fields
}

/// Detect the type of every column by sniffing all rows.
///
/// A column with no non-empty values falls back to text.
pub fn detect_column_types(column_count: usize, rows: &[Vec<String>]) -> Vec<ColumnType> {
    let mut detected: Vec<Option<ColumnType>> = vec![None; column_count];

    for row in rows {
        for (idx, cell) in row.iter().enumerate().take(column_count) {
            if cell.is_empty() {
                continue;
            }
            let sniffed = sniff_cell(cell);
            detected[idx] = Some(match detected[idx] {
                None => sniffed,
                Some(prev) => widen(prev, sniffed),
            });
        }
    }

    detected
        .into_iter()
        .map(|t| t.unwrap_or(ColumnType::Text))
        .collect()
}

/// Narrowest type a single cell could be.
fn sniff_cell(raw: &str) -> ColumnType {
    if raw == "true" || raw == "false" {
        return ColumnType::Boolean;
    }
    if raw.parse::<i64>().is_ok() {
        return ColumnType::Integer;
    }
    if raw.parse::<f64>().is_ok() {
        return ColumnType::Real;
    }
    if NaiveDateTime::parse_from_str(raw, TIMESTAMP_FORMAT).is_ok() {
        return ColumnType::Timestamp;
    }
    ColumnType::Text
}

/// Combine two observed types into the narrowest one covering both.
fn widen(a: ColumnType, b: ColumnType) -> ColumnType {
    use ColumnType::*;
    match (a, b) {
        (x, y) if x == y => x,
        (Integer, Real) | (Real, Integer) => Real,
        _ => Text,
    }
}

/// Parse one cell according to the detected column type. Empty is NULL.
/// The type was inferred from the same data, so a mismatch can only come
/// from the widening rules; such cells degrade to text rather than lying.
pub fn parse_cell(raw: &str, ty: ColumnType) -> SqlValue {
    if raw.is_empty() {
        return SqlValue::Null;
    }
    match ty {
        ColumnType::Integer => raw
            .parse::<i64>()
            .map(SqlValue::Int)
            .unwrap_or_else(|_| SqlValue::Text(raw.to_string())),
        ColumnType::Real => raw
            .parse::<f64>()
            .map(SqlValue::Real)
            .unwrap_or_else(|_| SqlValue::Text(raw.to_string())),
        ColumnType::Boolean => match raw {
            "true" => SqlValue::Bool(true),
            "false" => SqlValue::Bool(false),
            other => SqlValue::Text(other.to_string()),
        },
        ColumnType::Timestamp => NaiveDateTime::parse_from_str(raw, TIMESTAMP_FORMAT)
            .map(SqlValue::Timestamp)
            .unwrap_or_else(|_| SqlValue::Text(raw.to_string())),
        ColumnType::Text => SqlValue::Text(raw.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_plain_line() {
        assert_eq!(
            split_csv_line("1,Ada,ada@example.com"),
            vec!["1", "Ada", "ada@example.com"]
        );
    }

    #[test]
    fn test_split_quoted_fields() {
        assert_eq!(
            split_csv_line("1,\"hello,world\",\"say \"\"hi\"\"\""),
            vec!["1", "hello,world", "say \"hi\""]
        );
    }

    #[test]
    fn test_split_trailing_empty_field() {
        assert_eq!(split_csv_line("a,b,"), vec!["a", "b", ""]);
    }

    #[test]
    fn test_split_roundtrips_escape() {
        use crate::output::csv::csv_escape;
        let fields = ["plain", "with,comma", "with \"quotes\"", ""];
        let line = fields
            .iter()
            .map(|f| csv_escape(f))
            .collect::<Vec<_>>()
            .join(",");
        assert_eq!(split_csv_line(&line), fields);
    }

    #[test]
    fn test_sniff_cell_types() {
        assert_eq!(sniff_cell("42"), ColumnType::Integer);
        assert_eq!(sniff_cell("-7"), ColumnType::Integer);
        assert_eq!(sniff_cell("42.50"), ColumnType::Real);
        assert_eq!(sniff_cell("true"), ColumnType::Boolean);
        assert_eq!(sniff_cell("2023-02-03 10:00:00"), ColumnType::Timestamp);
        assert_eq!(sniff_cell("delivered"), ColumnType::Text);
    }

    #[test]
    fn test_detect_widens_int_to_real() {
        let rows = vec![
            vec!["1".to_string(), "5".to_string()],
            vec!["2".to_string(), "5.25".to_string()],
        ];
        assert_eq!(
            detect_column_types(2, &rows),
            vec![ColumnType::Integer, ColumnType::Real]
        );
    }

    #[test]
    fn test_detect_mixed_falls_back_to_text() {
        let rows = vec![
            vec!["1".to_string()],
            vec!["pending".to_string()],
        ];
        assert_eq!(detect_column_types(1, &rows), vec![ColumnType::Text]);
    }

    #[test]
    fn test_detect_ignores_empty_cells() {
        let rows = vec![vec!["".to_string()], vec!["3".to_string()]];
        assert_eq!(detect_column_types(1, &rows), vec![ColumnType::Integer]);
    }

    #[test]
    fn test_detect_all_empty_column_is_text() {
        let rows = vec![vec!["".to_string()], vec!["".to_string()]];
        assert_eq!(detect_column_types(1, &rows), vec![ColumnType::Text]);
    }

    #[test]
    fn test_parse_cell_null_and_values() {
        assert_eq!(parse_cell("", ColumnType::Integer), SqlValue::Null);
        assert_eq!(parse_cell("42", ColumnType::Integer), SqlValue::Int(42));
        assert_eq!(parse_cell("42.5", ColumnType::Real), SqlValue::Real(42.5));
        assert_eq!(parse_cell("true", ColumnType::Boolean), SqlValue::Bool(true));
        assert_eq!(
            parse_cell("pending", ColumnType::Text),
            SqlValue::Text("pending".to_string())
        );
    }

    #[test]
    fn test_sql_literal_rendering() {
        assert_eq!(SqlValue::Null.to_sql_literal(), "NULL");
        assert_eq!(SqlValue::Int(7).to_sql_literal(), "7");
        assert_eq!(SqlValue::Bool(true).to_sql_literal(), "TRUE");
        assert_eq!(
            SqlValue::Text("O'Brien".to_string()).to_sql_literal(),
            "'O''Brien'"
        );
        let ts = NaiveDateTime::parse_from_str("2023-02-03 10:00:00", TIMESTAMP_FORMAT).unwrap();
        assert_eq!(
            SqlValue::Timestamp(ts).to_sql_literal(),
            "'2023-02-03 10:00:00'"
        );
    }
}
