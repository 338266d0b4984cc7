// file: src/ocr/tesseract.rs
// description: pdf rasterisation with pdftoppm and recognition with tesseract
// reference: external tool invocation with a per-call deadline

use crate::config::OcrConfig;
use crate::error::{FilterError, Result};
use crate::ocr::TextExtractor;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};
use tracing::{debug, trace, warn};

const POLL_INTERVAL: Duration = Duration::from_millis(50);

pub struct TesseractOcr {
    config: OcrConfig,
}

impl TesseractOcr {
    pub fn new(config: OcrConfig) -> Self {
        Self { config }
    }

    fn timeout(&self) -> Option<Duration> {
        (self.config.timeout_secs > 0).then(|| Duration::from_secs(self.config.timeout_secs))
    }

    fn render_pages(&self, pdf: &Path, workdir: &Path) -> Result<Vec<PathBuf>> {
        let prefix = workdir.join("page");

        let mut command = Command::new(&self.config.pdftoppm_command);
        command
            .arg("-r")
            .arg(self.config.dpi.to_string())
            .arg("-png")
            .arg(pdf)
            .arg(&prefix);

        run_with_deadline(command, pdf, "pdftoppm", self.timeout())?;

        // pdftoppm zero-pads page numbers, so name order is page order
        let mut pages: Vec<PathBuf> = fs::read_dir(workdir)
            .map_err(|e| FilterError::file_operation(workdir, e))?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| path.extension().is_some_and(|ext| ext == "png"))
            .collect();
        pages.sort();

        Ok(pages)
    }

    fn recognise_page(&self, pdf: &Path, page: &Path) -> Result<String> {
        let output_base = page.with_extension("");

        let mut command = Command::new(&self.config.tesseract_command);
        command
            .arg(page)
            .arg(&output_base)
            .arg("-l")
            .arg(&self.config.language);

        run_with_deadline(command, pdf, "tesseract", self.timeout())?;

        let text_path = output_base.with_extension("txt");
        fs::read_to_string(&text_path).map_err(|e| FilterError::file_operation(text_path, e))
    }
}

impl TextExtractor for TesseractOcr {
    fn name(&self) -> &'static str {
        "tesseract"
    }

    fn extract_text(&self, path: &Path) -> Result<String> {
        let workdir = tempfile::tempdir()?;
        let pages = self.render_pages(path, workdir.path())?;

        if pages.is_empty() {
            return Err(FilterError::extraction(path, "pdftoppm produced no pages"));
        }

        debug!("OCR: {} page(s) from {}", pages.len(), path.display());

        let mut text = String::new();
        let mut recognised = 0usize;

        for (index, page) in pages.iter().enumerate() {
            match self.recognise_page(path, page) {
                Ok(page_text) => {
                    trace!("OCR page {}/{}: {} chars", index + 1, pages.len(), page_text.len());
                    if !text.is_empty() {
                        text.push('\n');
                    }
                    text.push_str(&page_text);
                    recognised += 1;
                }
                Err(e) => {
                    warn!("OCR failed for page {}/{} of {}: {}", index + 1, pages.len(), path.display(), e);
                }
            }
        }

        if recognised == 0 {
            return Err(FilterError::extraction(path, "no page could be recognised"));
        }

        Ok(text)
    }
}

/// Runs an external tool to completion, killing it once the deadline passes.
/// Output goes to files, so stdout/stderr are discarded and cannot fill a pipe.
fn run_with_deadline(
    mut command: Command,
    document: &Path,
    tool: &str,
    timeout: Option<Duration>,
) -> Result<()> {
    command.stdin(Stdio::null()).stdout(Stdio::null()).stderr(Stdio::null());

    let mut child = command
        .spawn()
        .map_err(|e| FilterError::extraction(document, format!("failed to start {}: {}", tool, e)))?;

    let deadline = timeout.map(|t| Instant::now() + t);

    loop {
        match child.try_wait()? {
            Some(status) if status.success() => return Ok(()),
            Some(status) => {
                return Err(FilterError::extraction(
                    document,
                    format!("{} exited with {}", tool, status),
                ));
            }
            None => {
                if let Some(deadline) = deadline
                    && Instant::now() >= deadline
                {
                    let _ = child.kill();
                    let _ = child.wait();
                    return Err(FilterError::extraction(
                        document,
                        format!("{} timed out", tool),
                    ));
                }
                thread::sleep(POLL_INTERVAL);
            }
        }
    }
}
