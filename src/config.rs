// file: src/config.rs
// description: application configuration management with toml support
// reference: https://docs.rs/config

use crate::error::{FilterError, Result};
use crate::extractor::patterns::{
    DEFAULT_EMAIL_PATTERN, DEFAULT_PHONE_PATTERNS, DEFAULT_POSTGRADUATE_KEYWORDS,
    DEFAULT_UNDERGRADUATE_KEYWORDS, default_number_words,
};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";
pub const ENV_PREFIX: &str = "RESUME_FILTER";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub ocr: OcrConfig,
    #[serde(default)]
    pub report: ReportConfig,
    #[serde(default)]
    pub heuristics: HeuristicsConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PathsConfig {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OcrEngine {
    /// Render pages with pdftoppm and recognise them with tesseract.
    Tesseract,
    /// Read the embedded text layer only.
    Embedded,
    /// Embedded text first, OCR when the text layer is (nearly) empty.
    Auto,
}

impl std::str::FromStr for OcrEngine {
    type Err = FilterError;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_lowercase().as_str() {
            "tesseract" | "ocr" => Ok(Self::Tesseract),
            "embedded" | "text" => Ok(Self::Embedded),
            "auto" => Ok(Self::Auto),
            other => Err(FilterError::Config(format!("unknown OCR engine '{}'", other))),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct OcrConfig {
    pub engine: OcrEngine,
    pub pdftoppm_command: String,
    pub tesseract_command: String,
    pub dpi: u32,
    pub language: String,
    /// Upper bound for a single external tool invocation. 0 disables the limit.
    pub timeout_secs: u64,
    pub min_text_chars: usize,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ReportConfig {
    pub include_email: bool,
    pub include_phone: bool,
    pub include_skills: bool,
    pub csv_path: Option<PathBuf>,
    pub json_path: Option<PathBuf>,
    pub show_progress: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct HeuristicsConfig {
    pub undergraduate_keywords: Vec<String>,
    pub postgraduate_keywords: Vec<String>,
    pub email_pattern: String,
    pub phone_patterns: Vec<String>,
    pub number_words: BTreeMap<String, u32>,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("resumes"),
            output_dir: PathBuf::from("selected"),
        }
    }
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            engine: OcrEngine::Tesseract,
            pdftoppm_command: "pdftoppm".to_string(),
            tesseract_command: "tesseract".to_string(),
            dpi: 200,
            language: "eng".to_string(),
            timeout_secs: 120,
            min_text_chars: 50,
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            include_email: true,
            include_phone: true,
            include_skills: true,
            csv_path: None,
            json_path: None,
            show_progress: true,
        }
    }
}

impl Default for HeuristicsConfig {
    fn default() -> Self {
        Self {
            undergraduate_keywords: to_owned_list(DEFAULT_UNDERGRADUATE_KEYWORDS),
            postgraduate_keywords: to_owned_list(DEFAULT_POSTGRADUATE_KEYWORDS),
            email_pattern: DEFAULT_EMAIL_PATTERN.to_string(),
            phone_patterns: to_owned_list(DEFAULT_PHONE_PATTERNS),
            number_words: default_number_words(),
        }
    }
}

fn to_owned_list(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

impl Config {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenv().ok();

        let mut builder = config::Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        } else {
            builder = builder
                .add_source(config::File::from(Path::new(DEFAULT_CONFIG_PATH)).required(false));
        }

        builder = builder.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .map_err(|e| FilterError::Config(e.to_string()))?;

        let config: Config = settings
            .try_deserialize()
            .map_err(|e| FilterError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn default_config() -> Self {
        Self::default()
    }

    pub fn validate(&self) -> Result<()> {
        if self.ocr.dpi == 0 {
            return Err(FilterError::Config("ocr.dpi must be greater than 0".to_string()));
        }

        if self.heuristics.undergraduate_keywords.is_empty()
            || self.heuristics.postgraduate_keywords.is_empty()
        {
            return Err(FilterError::Config(
                "qualification keyword lists must not be empty".to_string(),
            ));
        }

        if self.heuristics.number_words.is_empty() {
            return Err(FilterError::Config(
                "heuristics.number_words must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}
