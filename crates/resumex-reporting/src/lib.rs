pub mod export;

pub use export::{ExportFormat, export_csv, export_json, export_records};
