use std::io::Write;
use std::path::Path;

use owo_colors::OwoColorize;
use resumex_core::ResumeRecord;

/// Whether to use colored output.
#[derive(Debug, Clone, Copy)]
pub struct ColorMode(pub bool);

impl ColorMode {
    pub fn enabled(&self) -> bool {
        self.0
    }
}

/// Print the per-field summary of an extracted record.
///
/// Values longer than 100 characters are truncated for display.
pub fn print_record_summary(
    w: &mut dyn Write,
    record: &ResumeRecord,
    color: ColorMode,
) -> std::io::Result<()> {
    writeln!(w, "Extracted resume data:")?;
    writeln!(w, "{}", "-".repeat(50))?;
    for (name, value) in ResumeRecord::FIELD_NAMES.iter().zip(record.field_values()) {
        let display = truncate_value(value, 100);
        if color.enabled() {
            writeln!(w, "{}: {}", name.to_uppercase().bold(), display)?;
        } else {
            writeln!(w, "{}: {}", name.to_uppercase(), display)?;
        }
    }
    writeln!(w)?;
    Ok(())
}

/// Print the saved-output confirmation line.
pub fn print_saved(
    w: &mut dyn Write,
    path: &Path,
    rows: usize,
    color: ColorMode,
) -> std::io::Result<()> {
    let msg = format!("{} record(s) saved to {}", rows, path.display());
    if color.enabled() {
        writeln!(w, "{}", msg.green())?;
    } else {
        writeln!(w, "{}", msg)?;
    }
    Ok(())
}

fn truncate_value(value: &str, max_chars: usize) -> String {
    // Single-line display; section bodies may carry newlines
    let flat = value.replace('\n', " | ");
    if flat.chars().count() > max_chars {
        let cut: String = flat.chars().take(max_chars).collect();
        format!("{}...", cut)
    } else {
        flat
    }
}
