// file: src/exporter/csv.rs
// description: csv export of the report table
// reference: https://docs.rs/csv

use crate::error::{FilterError, Result};
use crate::exporter::ReportTable;
use csv::Writer;
use std::fs;
use std::path::Path;
use tracing::info;

pub struct CsvExporter;

impl CsvExporter {
    /// Writes a header row followed by one record per matched resume.
    pub fn write(table: &ReportTable, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| FilterError::file_operation(parent, e))?;
        }

        let mut writer = Writer::from_path(path)?;
        writer.write_record(table.headers())?;
        for record in table.records() {
            writer.write_record(&record)?;
        }
        writer.flush().map_err(|e| FilterError::file_operation(path, e))?;

        info!("Wrote {} report row(s) to {}", table.len(), path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exporter::ReportColumns;
    use crate::models::ReportRow;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_write_csv() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("reports/matches.csv");
        let table = ReportTable::new(
            ReportColumns::all(),
            vec![ReportRow {
                filename: "asha.pdf".to_string(),
                experience: 8.0,
                email: Some("asha@mail.com".to_string()),
                phone: None,
                skills: vec!["sql".to_string(), "excel".to_string()],
            }],
        );

        CsvExporter::write(&table, &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(
            content,
            "Filename,Experience,Email,Phone,Skills\nasha.pdf,8,asha@mail.com,Not found,\"sql, excel\"\n"
        );
    }

    #[test]
    fn test_write_empty_csv_has_header() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("empty.csv");
        let table = ReportTable::new(ReportColumns::minimal(), vec![]);

        CsvExporter::write(&table, &path).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "Filename,Experience\n");
    }
}
