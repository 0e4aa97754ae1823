use serde_json::Value;
use std::fs::File;
use std::io;
use std::path::Path;

use roi_calc_core::roi::export::{ExportRow, CSV_HEADER};

use super::{flatten, scalar_text};

/// Write export rows under a `field,value` header.
pub fn write_rows<W: io::Write>(writer: W, rows: &[ExportRow]) -> Result<(), csv::Error> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(CSV_HEADER)?;
    for row in rows {
        wtr.write_record([row.field.as_str(), row.value.as_str()])?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write export rows to a file, replacing any existing one.
pub fn write_rows_to_file(path: &Path, rows: &[ExportRow]) -> Result<(), csv::Error> {
    let file = File::create(path)?;
    write_rows(file, rows)
}

/// Write any command output as two-column CSV to stdout, nested fields
/// flattened to dotted names.
pub fn print_csv(value: &Value) {
    let source = value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value);

    let mut flat = Vec::new();
    flatten(source, "", &mut flat);
    let rows: Vec<ExportRow> = flat
        .into_iter()
        .map(|(field, val)| ExportRow {
            field,
            value: scalar_text(val, ""),
        })
        .collect();

    let stdout = io::stdout();
    if let Err(e) = write_rows(stdout.lock(), &rows) {
        eprintln!("CSV write error: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn row(field: &str, value: &str) -> ExportRow {
        ExportRow {
            field: field.into(),
            value: value.into(),
        }
    }

    #[test]
    fn test_write_rows_with_header() {
        let rows = vec![
            row("Start date", "2025-05-31"),
            row("Realised ROI", ""),
            row("Contracted net", "-100.00"),
        ];
        let mut buf = Vec::new();
        write_rows(&mut buf, &rows).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(
            text,
            "field,value\nStart date,2025-05-31\nRealised ROI,\nContracted net,-100.00\n"
        );
    }

    #[test]
    fn test_values_with_commas_are_quoted() {
        let mut buf = Vec::new();
        write_rows(&mut buf, &[row("Net", "$1,184.13")]).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text, "field,value\nNet,\"$1,184.13\"\n");
    }

    #[test]
    fn test_row_count_matches_export() {
        let rows: Vec<ExportRow> = (0..13).map(|i| row(&format!("f{i}"), "1")).collect();
        let mut buf = Vec::new();
        write_rows(&mut buf, &rows).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text.lines().count(), 14);
    }
}
