// file: src/repository/scanner.rs
// description: input folder listing with pdf filtering
// reference: https://docs.rs/walkdir

use crate::error::Result;
use crate::utils::Validator;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

pub struct ResumeScanner {
    extensions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedFile {
    pub path: PathBuf,
    pub file_name: String,
    pub size: u64,
}

impl ResumeScanner {
    pub fn new() -> Self {
        Self {
            extensions: vec!["pdf".to_string()],
        }
    }

    /// Lists resumes directly inside `root` (no recursion), sorted by file name so a
    /// batch runs in the same order on every platform.
    pub fn scan_directory(&self, root: &Path) -> Result<Vec<ScannedFile>> {
        info!("Scanning directory: {}", root.display());
        Validator::validate_directory(root)?;

        let mut files = Vec::new();

        for entry in WalkDir::new(root).min_depth(1).max_depth(1).follow_links(true) {
            // Unreadable entries (dangling links, permission denied) are skipped.
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    let path = e.path().unwrap_or(root).display().to_string();
                    warn!("Skipping unreadable entry {}: {}", path, e);
                    continue;
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }

            let path = entry.path();

            if !self.is_resume(path) {
                debug!("Skipping non-resume file: {}", path.display());
                continue;
            }

            let size = entry.metadata().map(|m| m.len()).unwrap_or(0);

            files.push(ScannedFile {
                path: path.to_path_buf(),
                file_name: entry.file_name().to_string_lossy().to_string(),
                size,
            });
        }

        files.sort_by(|a, b| a.file_name.cmp(&b.file_name));

        info!("Found {} resume files", files.len());
        Ok(files)
    }

    pub fn is_resume(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                self.extensions
                    .iter()
                    .any(|allowed| allowed.eq_ignore_ascii_case(ext))
            })
    }
}

impl Default for ResumeScanner {
    fn default() -> Self {
        Self::new()
    }
}
