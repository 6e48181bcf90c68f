use std::io::Write;
use std::path::Path;
use std::str::FromStr;

use resumex_core::ResumeRecord;

/// Output file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            other => Err(format!("unknown export format: {}", other)),
        }
    }
}

/// Write the given records to `path` as one delimited table.
///
/// Columns are the fixed record field names, one row per document's record.
/// Empty fields are written as empty strings, never a null marker.
pub fn export_records(
    records: &[ResumeRecord],
    format: ExportFormat,
    path: &Path,
) -> Result<(), String> {
    let content = match format {
        ExportFormat::Csv => export_csv(records),
        ExportFormat::Json => export_json(records),
    };

    let mut file =
        std::fs::File::create(path).map_err(|e| format!("Failed to create file: {}", e))?;
    file.write_all(content.as_bytes())
        .map_err(|e| format!("Failed to write: {}", e))?;
    Ok(())
}

fn csv_escape(s: &str) -> String {
    if s.contains('"') || s.contains(',') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

pub fn export_csv(records: &[ResumeRecord]) -> String {
    let mut out = String::new();
    out.push_str(&ResumeRecord::FIELD_NAMES.join(","));
    out.push('\n');
    for record in records {
        let row: Vec<String> = record
            .field_values()
            .iter()
            .map(|value| csv_escape(value))
            .collect();
        out.push_str(&row.join(","));
        out.push('\n');
    }
    out
}

fn json_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c < '\x20' => {
                out.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => out.push(c),
        }
    }
    out
}

fn json_str(s: &str) -> String {
    format!("\"{}\"", json_escape(s))
}

pub fn export_json(records: &[ResumeRecord]) -> String {
    let mut out = String::from("[\n");
    for (ri, record) in records.iter().enumerate() {
        out.push_str("  {\n");
        let values = record.field_values();
        for (fi, (name, value)) in ResumeRecord::FIELD_NAMES.iter().zip(values).enumerate() {
            out.push_str(&format!("    {}: {}", json_str(name), json_str(value)));
            if fi + 1 < ResumeRecord::FIELD_NAMES.len() {
                out.push(',');
            }
            out.push('\n');
        }
        out.push_str("  }");
        if ri + 1 < records.len() {
            out.push(',');
        }
        out.push('\n');
    }
    out.push_str("]\n");
    out
}
