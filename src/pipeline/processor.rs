// file: src/pipeline/processor.rs
// description: sequential resume batch: text extraction, matching, copying, reporting
// reference: runs the analyzer per document and performs output side effects

use crate::error::{FilterError, Result};
use crate::models::{ExtractedFacts, FilterCriteria, ReportRow};
use crate::ocr::TextExtractor;
use crate::pipeline::ResumeAnalyzer;
use crate::pipeline::{BatchStats, ProgressTracker};
use crate::repository::ScannedFile;
use crate::utils::{OperationTimer, Validator};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Default)]
pub struct BatchOutcome {
    pub rows: Vec<ReportRow>,
    pub stats: BatchStats,
}

impl BatchOutcome {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

pub struct ResumeBatchProcessor {
    extractor: Box<dyn TextExtractor>,
    analyzer: ResumeAnalyzer,
    output_dir: PathBuf,
    show_progress: bool,
}

impl ResumeBatchProcessor {
    pub fn new(
        extractor: Box<dyn TextExtractor>,
        analyzer: ResumeAnalyzer,
        output_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            extractor,
            analyzer,
            output_dir: output_dir.into(),
            show_progress: false,
        }
    }

    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Screens every document in file-name order. A document whose text cannot be
    /// extracted is screened as empty text; a failed copy is logged and counted. Only
    /// failing to create the output directory aborts the batch.
    pub fn process(&self, documents: &[ScannedFile], criteria: &FilterCriteria) -> Result<BatchOutcome> {
        Validator::ensure_directory(&self.output_dir)?;

        let timer = OperationTimer::new("resume screening");
        let mut ordered: Vec<&ScannedFile> = documents.iter().collect();
        ordered.sort_by(|a, b| a.file_name.cmp(&b.file_name));

        info!(
            "Screening {} resume(s) with {} extractor",
            ordered.len(),
            self.extractor.name()
        );

        let progress = if self.show_progress {
            ProgressTracker::new(ordered.len())
        } else {
            ProgressTracker::hidden()
        };

        let mut rows = Vec::new();

        for document in ordered {
            progress.start_document(&document.file_name);

            let text = self.read_text(document, &progress);
            let result = self.analyzer.analyze(&document.file_name, &text, criteria);
            progress.inc_scanned();

            if !result.is_match {
                continue;
            }

            progress.inc_matched();
            match self.copy_to_output(document) {
                Ok(target) => debug!("Copied {} to {}", document.file_name, target.display()),
                Err(e) => {
                    warn!("Failed to copy matched resume {}: {}", document.file_name, e);
                    progress.inc_copy_failures();
                }
            }

            rows.push(ReportRow::from(&result));
        }

        progress.finish();
        let mut stats = progress.get_stats();
        stats.duration = timer.finish_with_count(stats.documents_scanned);

        info!(
            "Screened {} resume(s): {} matched, {} unreadable",
            stats.documents_scanned, stats.documents_matched, stats.extraction_failures
        );

        Ok(BatchOutcome { rows, stats })
    }

    /// Extracts facts from a single resume without filtering. Extraction errors are
    /// returned instead of being degraded to empty text.
    pub fn inspect(&self, path: &Path) -> Result<ExtractedFacts> {
        let raw = self.extractor.extract_text(path)?;
        let text = self.analyzer.normalize(&raw);
        Ok(self
            .analyzer
            .extract_facts(&text, &FilterCriteria::match_everything()))
    }

    fn read_text(&self, document: &ScannedFile, progress: &ProgressTracker) -> String {
        match self.extractor.extract_text(&document.path) {
            Ok(text) => text,
            Err(e) => {
                warn!("Could not extract text from {}: {}", document.file_name, e);
                progress.inc_extraction_failures();
                String::new()
            }
        }
    }

    /// Copies under the same file name, overwriting any earlier copy.
    fn copy_to_output(&self, document: &ScannedFile) -> Result<PathBuf> {
        let target = self.output_dir.join(&document.file_name);
        fs::copy(&document.path, &target).map_err(|e| FilterError::file_operation(&document.path, e))?;
        Ok(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CriteriaInput;
    use crate::repository::ResumeScanner;
    use pretty_assertions::assert_eq;
    use std::collections::{BTreeSet, HashMap};
    use tempfile::TempDir;

    const SAMPLE: &str =
        "b.tech mechanical engineer, 8 years experience, pune, cert: safety, worked at acme corp";

    /// Serves canned text keyed by file name; names without an entry fail extraction.
    struct StubExtractor {
        texts: HashMap<String, String>,
    }

    impl StubExtractor {
        fn new(entries: &[(&str, &str)]) -> Self {
            Self {
                texts: entries
                    .iter()
                    .map(|(name, text)| (name.to_string(), text.to_string()))
                    .collect(),
            }
        }
    }

    impl TextExtractor for StubExtractor {
        fn name(&self) -> &'static str {
            "stub"
        }

        fn extract_text(&self, path: &Path) -> Result<String> {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default();
            self.texts
                .get(&name)
                .cloned()
                .ok_or_else(|| FilterError::extraction(path, "stub has no text"))
        }
    }

    struct Fixture {
        _temp: TempDir,
        input: PathBuf,
        output: PathBuf,
    }

    fn fixture(files: &[&str]) -> Fixture {
        let temp = TempDir::new().unwrap();
        let input = temp.path().join("resumes");
        let output = temp.path().join("selected");
        fs::create_dir_all(&input).unwrap();

        for name in files {
            fs::write(input.join(name), format!("%PDF-1.4 {}", name)).unwrap();
        }

        Fixture {
            _temp: temp,
            input,
            output,
        }
    }

    fn processor(fixture: &Fixture, entries: &[(&str, &str)]) -> ResumeBatchProcessor {
        ResumeBatchProcessor::new(
            Box::new(StubExtractor::new(entries)),
            ResumeAnalyzer::new(),
            &fixture.output,
        )
    }

    fn sample_criteria(min_experience: f64) -> FilterCriteria {
        FilterCriteria::from_input(&CriteriaInput {
            skills: "mechanical".to_string(),
            match_all: false,
            min_experience,
            qualification: "undergraduate".to_string(),
            location: "pune".to_string(),
            specialization: "mechanical".to_string(),
            certifications: "safety".to_string(),
            company: "acme".to_string(),
        })
        .unwrap()
    }

    fn output_files(dir: &Path) -> BTreeSet<String> {
        fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
            .collect()
    }

    fn scan(fixture: &Fixture) -> Vec<ScannedFile> {
        ResumeScanner::new().scan_directory(&fixture.input).unwrap()
    }

    #[test]
    fn test_end_to_end_match() {
        let fixture = fixture(&["ravi.pdf"]);
        let processor = processor(&fixture, &[("ravi.pdf", SAMPLE)]);

        let outcome = processor.process(&scan(&fixture), &sample_criteria(5.0)).unwrap();

        assert_eq!(outcome.rows.len(), 1);
        let row = &outcome.rows[0];
        assert_eq!(row.filename, "ravi.pdf");
        assert_eq!(row.experience, 8.0);
        assert_eq!(row.skills, vec!["mechanical".to_string()]);

        let copied = fs::read(fixture.output.join("ravi.pdf")).unwrap();
        let source = fs::read(fixture.input.join("ravi.pdf")).unwrap();
        assert_eq!(copied, source);
    }

    #[test]
    fn test_end_to_end_experience_too_low() {
        let fixture = fixture(&["ravi.pdf"]);
        let processor = processor(&fixture, &[("ravi.pdf", SAMPLE)]);

        let outcome = processor.process(&scan(&fixture), &sample_criteria(10.0)).unwrap();

        assert!(outcome.is_empty());
        assert_eq!(outcome.stats.documents_scanned, 1);
        assert!(output_files(&fixture.output).is_empty());
    }

    #[test]
    fn test_empty_input_directory() {
        let fixture = fixture(&[]);
        let processor = processor(&fixture, &[]);

        let outcome = processor.process(&scan(&fixture), &sample_criteria(0.0)).unwrap();

        assert!(outcome.rows.is_empty());
        assert_eq!(outcome.stats, BatchStats {
            duration: outcome.stats.duration,
            ..BatchStats::new()
        });
        assert!(fixture.output.is_dir());
    }

    #[test]
    fn test_unreadable_document_does_not_stop_batch() {
        let fixture = fixture(&["a_broken.pdf", "b_good.pdf"]);
        let processor = processor(&fixture, &[("b_good.pdf", SAMPLE)]);

        let outcome = processor.process(&scan(&fixture), &sample_criteria(5.0)).unwrap();

        assert_eq!(outcome.stats.documents_scanned, 2);
        assert_eq!(outcome.stats.extraction_failures, 1);
        assert_eq!(outcome.rows.len(), 1);
        assert_eq!(outcome.rows[0].filename, "b_good.pdf");
    }

    #[test]
    fn test_unreadable_document_matches_everything_criteria() {
        let fixture = fixture(&["broken.pdf"]);
        let processor = processor(&fixture, &[]);

        let outcome = processor
            .process(&scan(&fixture), &FilterCriteria::match_everything())
            .unwrap();

        assert_eq!(outcome.rows.len(), 1);
        assert_eq!(outcome.rows[0].experience, 0.0);
        assert_eq!(outcome.rows[0].email, None);
    }

    #[test]
    fn test_rerun_is_idempotent() {
        let fixture = fixture(&["a.pdf", "b.pdf", "c.pdf"]);
        let entries = [
            ("a.pdf", SAMPLE),
            ("b.pdf", "b.e mechanical, pune, acme, safety, 12 years"),
            ("c.pdf", "m.tech civil, delhi"),
        ];
        let processor = processor(&fixture, &entries);
        let criteria = sample_criteria(5.0);

        let first = processor.process(&scan(&fixture), &criteria).unwrap();
        let files_after_first = output_files(&fixture.output);
        let second = processor.process(&scan(&fixture), &criteria).unwrap();
        let files_after_second = output_files(&fixture.output);

        assert_eq!(files_after_first, files_after_second);
        assert_eq!(
            files_after_first,
            BTreeSet::from(["a.pdf".to_string(), "b.pdf".to_string()])
        );

        let sorted = |rows: &[ReportRow]| {
            let mut rows = rows.to_vec();
            rows.sort_by(|a, b| a.filename.cmp(&b.filename));
            rows
        };
        assert_eq!(sorted(&first.rows), sorted(&second.rows));
    }

    #[test]
    fn test_existing_output_is_overwritten() {
        let fixture = fixture(&["ravi.pdf"]);
        fs::create_dir_all(&fixture.output).unwrap();
        fs::write(fixture.output.join("ravi.pdf"), b"stale copy").unwrap();

        let processor = processor(&fixture, &[("ravi.pdf", SAMPLE)]);
        processor.process(&scan(&fixture), &sample_criteria(5.0)).unwrap();

        let copied = fs::read_to_string(fixture.output.join("ravi.pdf")).unwrap();
        assert_eq!(copied, "%PDF-1.4 ravi.pdf");
    }

    #[test]
    fn test_rows_follow_file_name_order() {
        let fixture = fixture(&["c.pdf", "a.pdf", "b.pdf"]);
        let processor = processor(
            &fixture,
            &[("a.pdf", "resume"), ("b.pdf", "resume"), ("c.pdf", "resume")],
        );

        let mut documents = scan(&fixture);
        documents.reverse();
        let outcome = processor
            .process(&documents, &FilterCriteria::match_everything())
            .unwrap();

        let names: Vec<&str> = outcome.rows.iter().map(|r| r.filename.as_str()).collect();
        assert_eq!(names, vec!["a.pdf", "b.pdf", "c.pdf"]);
    }

    #[test]
    fn test_inspect_returns_facts() {
        let fixture = fixture(&["ravi.pdf"]);
        let processor = processor(
            &fixture,
            &[("ravi.pdf", "ravi@mail.in +91 9876543210 m.tech, six years")],
        );

        let facts = processor.inspect(&fixture.input.join("ravi.pdf")).unwrap();
        assert_eq!(facts.experience_years, 6.0);
        assert_eq!(facts.email.as_deref(), Some("ravi@mail.in"));
        assert_eq!(facts.phone.as_deref(), Some("+91 9876543210"));
        assert!(facts.qualification.is_postgraduate);

        assert!(processor.inspect(&fixture.input.join("missing.pdf")).is_err());
    }
}
