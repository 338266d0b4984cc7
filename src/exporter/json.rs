// file: src/exporter/json.rs
// description: json export of the report table

use crate::error::{FilterError, Result};
use crate::exporter::{ReportColumns, ReportTable};
use crate::models::ReportRow;
use chrono::Utc;
use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing::info;

#[derive(Debug, Serialize)]
pub struct ExportManifest<'a> {
    pub exported_at: String,
    pub total_matches: usize,
    pub columns: ReportColumns,
    pub rows: &'a [ReportRow],
}

impl<'a> ExportManifest<'a> {
    pub fn new(table: &'a ReportTable) -> Self {
        Self {
            exported_at: Utc::now().to_rfc3339(),
            total_matches: table.len(),
            columns: table.columns(),
            rows: table.rows(),
        }
    }
}

pub struct JsonExporter;

impl JsonExporter {
    pub fn to_string(table: &ReportTable, pretty: bool) -> Result<String> {
        let manifest = ExportManifest::new(table);
        let json = if pretty {
            serde_json::to_string_pretty(&manifest)
        } else {
            serde_json::to_string(&manifest)
        };
        json.map_err(|e| FilterError::Serialization(e.to_string()))
    }

    pub fn write(table: &ReportTable, path: &Path, pretty: bool) -> Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| FilterError::file_operation(parent, e))?;
        }

        let json = Self::to_string(table, pretty)?;
        fs::write(path, json).map_err(|e| FilterError::file_operation(path, e))?;

        info!("Export complete: {} match(es) written to {}", table.len(), path.display());
        Ok(())
    }
}
