// file: src/utils/validation.rs
// description: path validation and folder provisioning helpers
// reference: input validation patterns

use crate::error::{FilterError, Result};
use std::fs;
use std::path::Path;

pub struct Validator;

impl Validator {
    pub fn validate_file_path(path: &Path) -> Result<()> {
        let canonical = fs::canonicalize(path).map_err(|e| {
            FilterError::Validation(format!(
                "Cannot canonicalize path {}: {}",
                path.display(),
                e
            ))
        })?;

        if !canonical.is_file() {
            return Err(FilterError::Validation(format!(
                "Path is not a file: {}",
                canonical.display()
            )));
        }

        Ok(())
    }

    pub fn validate_directory(path: &Path) -> Result<()> {
        if !path.exists() {
            return Err(FilterError::Validation(format!(
                "Directory does not exist: {}",
                path.display()
            )));
        }

        if !path.is_dir() {
            return Err(FilterError::Validation(format!(
                "Path is not a directory: {}",
                path.display()
            )));
        }

        Ok(())
    }

    /// Creates the directory (and parents) when missing.
    pub fn ensure_directory(path: &Path) -> Result<()> {
        if path.is_dir() {
            return Ok(());
        }

        fs::create_dir_all(path).map_err(|e| FilterError::file_operation(path, e))
    }

    pub fn validate_pdf_extension(path: &Path) -> Result<()> {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("pdf") => Ok(()),
            _ => Err(FilterError::Validation(format!(
                "File is not a PDF: {}",
                path.display()
            ))),
        }
    }

    /// Input and output folders must differ, otherwise matches would be copied onto
    /// themselves and re-scanned on the next run.
    pub fn validate_distinct_dirs(input: &Path, output: &Path) -> Result<()> {
        let same = match (fs::canonicalize(input), fs::canonicalize(output)) {
            (Ok(a), Ok(b)) => a == b,
            _ => input == output,
        };

        if same {
            return Err(FilterError::Validation(format!(
                "Input and output directories must differ: {}",
                input.display()
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_validate_file_path() {
        let temp = TempDir::new().unwrap();
        let file_path = temp.path().join("cv.pdf");
        fs::write(&file_path, "pdf").unwrap();

        assert!(Validator::validate_file_path(&file_path).is_ok());
        assert!(Validator::validate_file_path(temp.path()).is_err());
        assert!(Validator::validate_file_path(Path::new("/nonexistent")).is_err());
    }

    #[test]
    fn test_validate_directory() {
        let temp = TempDir::new().unwrap();
        assert!(Validator::validate_directory(temp.path()).is_ok());
        assert!(Validator::validate_directory(Path::new("/nonexistent")).is_err());
    }

    #[test]
    fn test_ensure_directory_creates_nested() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("selected/2026");

        Validator::ensure_directory(&nested).unwrap();
        assert!(nested.is_dir());

        // second call is a no-op
        Validator::ensure_directory(&nested).unwrap();
    }

    #[test]
    fn test_validate_pdf_extension() {
        assert!(Validator::validate_pdf_extension(Path::new("cv.pdf")).is_ok());
        assert!(Validator::validate_pdf_extension(Path::new("CV.PDF")).is_ok());
        assert!(Validator::validate_pdf_extension(Path::new("cv.docx")).is_err());
    }

    #[test]
    fn test_validate_distinct_dirs() {
        let temp = TempDir::new().unwrap();
        let input = temp.path().join("resumes");
        let output = temp.path().join("selected");
        fs::create_dir_all(&input).unwrap();
        fs::create_dir_all(&output).unwrap();

        assert!(Validator::validate_distinct_dirs(&input, &output).is_ok());
        assert!(Validator::validate_distinct_dirs(&input, &temp.path().join("./resumes")).is_err());
    }
}
