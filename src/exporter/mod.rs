// file: src/exporter/mod.rs
// description: report export module exports

pub mod csv;
pub mod json;
pub mod table;

pub use self::csv::CsvExporter;
pub use self::json::{ExportManifest, JsonExporter};
pub use self::table::{ReportColumns, ReportTable};
