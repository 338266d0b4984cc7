// file: src/exporter/table.rs
// description: report table of matched resumes with configurable columns
// reference: terminal rendering shared by the csv and json exporters

use crate::config::ReportConfig;
use crate::models::ReportRow;
use serde::Serialize;

/// Optional report columns. Filename and experience are always present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReportColumns {
    pub email: bool,
    pub phone: bool,
    pub skills: bool,
}

impl ReportColumns {
    pub fn all() -> Self {
        Self {
            email: true,
            phone: true,
            skills: true,
        }
    }

    pub fn minimal() -> Self {
        Self {
            email: false,
            phone: false,
            skills: false,
        }
    }

    pub fn headers(&self) -> Vec<&'static str> {
        let mut headers = vec!["Filename", "Experience"];
        if self.email {
            headers.push("Email");
        }
        if self.phone {
            headers.push("Phone");
        }
        if self.skills {
            headers.push("Skills");
        }
        headers
    }

    pub fn cells(&self, row: &ReportRow) -> Vec<String> {
        let mut cells = vec![row.filename.clone(), row.experience_display()];
        if self.email {
            cells.push(row.email_display().to_string());
        }
        if self.phone {
            cells.push(row.phone_display().to_string());
        }
        if self.skills {
            cells.push(row.skills_display());
        }
        cells
    }
}

impl Default for ReportColumns {
    fn default() -> Self {
        Self::all()
    }
}

impl From<&ReportConfig> for ReportColumns {
    fn from(config: &ReportConfig) -> Self {
        Self {
            email: config.include_email,
            phone: config.include_phone,
            skills: config.include_skills,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportTable {
    columns: ReportColumns,
    rows: Vec<ReportRow>,
}

impl ReportTable {
    pub fn new(columns: ReportColumns, rows: Vec<ReportRow>) -> Self {
        Self { columns, rows }
    }

    pub fn columns(&self) -> ReportColumns {
        self.columns
    }

    pub fn rows(&self) -> &[ReportRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn headers(&self) -> Vec<&'static str> {
        self.columns.headers()
    }

    pub fn records(&self) -> impl Iterator<Item = Vec<String>> + '_ {
        self.rows.iter().map(|row| self.columns.cells(row))
    }

    /// Left-aligned plain text with a dashed rule under the header.
    pub fn render(&self) -> String {
        let headers = self.headers();
        let records: Vec<Vec<String>> = self.records().collect();

        let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
        for record in &records {
            for (width, cell) in widths.iter_mut().zip(record) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let mut out = String::new();
        push_line(&mut out, headers.iter().map(|h| h.to_string()), &widths);
        push_line(&mut out, widths.iter().map(|w| "-".repeat(*w)), &widths);
        for record in records {
            push_line(&mut out, record.into_iter(), &widths);
        }
        out
    }
}

fn push_line(out: &mut String, cells: impl Iterator<Item = String>, widths: &[usize]) {
    let line = cells
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
        .collect::<Vec<_>>()
        .join("  ");
    out.push_str(line.trim_end());
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn rows() -> Vec<ReportRow> {
        vec![
            ReportRow {
                filename: "asha.pdf".to_string(),
                experience: 8.0,
                email: Some("asha@mail.com".to_string()),
                phone: None,
                skills: vec!["sql".to_string(), "excel".to_string()],
            },
            ReportRow {
                filename: "ravi_kumar.pdf".to_string(),
                experience: 2.5,
                email: None,
                phone: Some("9876543210".to_string()),
                skills: vec![],
            },
        ]
    }

    #[test]
    fn test_headers_follow_columns() {
        assert_eq!(
            ReportColumns::all().headers(),
            vec!["Filename", "Experience", "Email", "Phone", "Skills"]
        );
        assert_eq!(ReportColumns::minimal().headers(), vec!["Filename", "Experience"]);

        let config = ReportConfig {
            include_phone: false,
            ..ReportConfig::default()
        };
        assert_eq!(
            ReportColumns::from(&config).headers(),
            vec!["Filename", "Experience", "Email", "Skills"]
        );
    }

    #[test]
    fn test_records_use_display_values() {
        let table = ReportTable::new(ReportColumns::all(), rows());
        let records: Vec<Vec<String>> = table.records().collect();

        assert_eq!(records[0], vec!["asha.pdf", "8", "asha@mail.com", "Not found", "sql, excel"]);
        assert_eq!(records[1], vec!["ravi_kumar.pdf", "2.5", "Not found", "9876543210", ""]);
    }

    #[test]
    fn test_render_aligns_columns() {
        let table = ReportTable::new(ReportColumns::minimal(), rows());
        let expected = "\
Filename        Experience
--------------  ----------
asha.pdf        8
ravi_kumar.pdf  2.5
";
        assert_eq!(table.render(), expected);
    }

    #[test]
    fn test_render_empty_table() {
        let table = ReportTable::new(ReportColumns::minimal(), vec![]);
        assert!(table.is_empty());
        assert_eq!(table.render(), "Filename  Experience\n--------  ----------\n");
    }
}
