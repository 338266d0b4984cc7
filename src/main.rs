// file: src/main.rs
// description: commandline application entry point with command handling
// reference: application bootstrap and orchestration

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use resume_filter::utils::logging::{
    format_info, format_match_summary, format_success, format_warning, init_logger,
};
use resume_filter::{
    Config, CriteriaInput, CsvExporter, FilterCriteria, JsonExporter, OcrEngine, ReportColumns,
    ReportTable, ResumeAnalyzer, ResumeBatchProcessor, ResumeScanner, Validator, build_extractor,
};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "resume_filter")]
#[command(version = "0.1.0")]
#[command(about = "OCR a folder of PDF resumes and keep the ones that match your criteria", long_about = None)]
struct Cli {
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = "config/default.toml"
    )]
    config: PathBuf,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Screen every resume in the input folder and copy the matches
    Filter(FilterArgs),

    /// List the resumes a filter run would screen
    Scan {
        #[arg(short, long, value_name = "DIR")]
        input: Option<PathBuf>,
    },

    /// Print the facts extracted from a single resume
    Inspect {
        file: PathBuf,

        #[arg(long, value_name = "ENGINE")]
        engine: Option<OcrEngine>,
    },
}

#[derive(Args)]
struct CriteriaArgs {
    /// Comma separated skills
    #[arg(long, default_value = "")]
    skills: String,

    /// Require every skill instead of any one
    #[arg(long)]
    match_all: bool,

    #[arg(long, value_name = "YEARS", default_value_t = 0.0, allow_negative_numbers = true)]
    min_experience: f64,

    /// all, undergraduate or postgraduate
    #[arg(long, default_value = "all")]
    qualification: String,

    #[arg(long, default_value = "all")]
    location: String,

    /// Space separated terms, any one must appear
    #[arg(long, default_value = "")]
    specialization: String,

    /// Comma separated certifications, any one must appear
    #[arg(long, default_value = "")]
    certifications: String,

    #[arg(long, default_value = "all")]
    company: String,
}

impl From<CriteriaArgs> for CriteriaInput {
    fn from(args: CriteriaArgs) -> Self {
        Self {
            skills: args.skills,
            match_all: args.match_all,
            min_experience: args.min_experience,
            qualification: args.qualification,
            location: args.location,
            specialization: args.specialization,
            certifications: args.certifications,
            company: args.company,
        }
    }
}

#[derive(Args)]
struct FilterArgs {
    #[command(flatten)]
    criteria: CriteriaArgs,

    #[arg(short, long, value_name = "DIR")]
    input: Option<PathBuf>,

    #[arg(short, long, value_name = "DIR")]
    output: Option<PathBuf>,

    /// tesseract, embedded or auto
    #[arg(long, value_name = "ENGINE")]
    engine: Option<OcrEngine>,

    /// Also write the report as CSV
    #[arg(long, value_name = "FILE")]
    csv: Option<PathBuf>,

    /// Also write the report as JSON
    #[arg(long, value_name = "FILE")]
    json: Option<PathBuf>,

    #[arg(long)]
    pretty: bool,

    #[arg(long)]
    no_progress: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logger(cli.color, cli.verbose);

    info!("Resume Filter");
    info!("Loading configuration from: {}", cli.config.display());

    let config = load_config(&cli.config)?;

    match cli.command {
        Commands::Filter(args) => cmd_filter(config, args)?,
        Commands::Scan { input } => cmd_scan(&config, input)?,
        Commands::Inspect { file, engine } => cmd_inspect(config, &file, engine)?,
    }

    Ok(())
}

fn load_config(path: &Path) -> Result<Config> {
    if path.exists() {
        return Config::load(Some(path)).context("Failed to load configuration");
    }

    warn!(
        "Config file {} not found, using default configuration",
        path.display()
    );
    Ok(Config::load(None).unwrap_or_else(|e| {
        warn!("Falling back to built-in defaults: {}", e);
        Config::default_config()
    }))
}

fn cmd_filter(mut config: Config, args: FilterArgs) -> Result<()> {
    if let Some(input) = args.input {
        config.paths.input_dir = input;
    }
    if let Some(output) = args.output {
        config.paths.output_dir = output;
    }
    if let Some(engine) = args.engine {
        config.ocr.engine = engine;
    }
    if args.csv.is_some() {
        config.report.csv_path = args.csv;
    }
    if args.json.is_some() {
        config.report.json_path = args.json;
    }
    if args.no_progress {
        config.report.show_progress = false;
    }

    let criteria = FilterCriteria::from_input(&CriteriaInput::from(args.criteria))
        .context("Invalid filter criteria")?;
    info!("Criteria: {}", criteria);

    let input_dir = &config.paths.input_dir;
    let output_dir = &config.paths.output_dir;

    Validator::ensure_directory(input_dir).context("Failed to create input directory")?;
    Validator::ensure_directory(output_dir).context("Failed to create output directory")?;
    Validator::validate_distinct_dirs(input_dir, output_dir)?;

    let analyzer =
        ResumeAnalyzer::from_config(&config.heuristics).context("Invalid heuristics configuration")?;

    let documents = ResumeScanner::new()
        .scan_directory(input_dir)
        .context("Failed to scan input directory")?;

    let processor = ResumeBatchProcessor::new(build_extractor(&config.ocr), analyzer, output_dir)
        .with_progress(config.report.show_progress);

    let outcome = processor
        .process(&documents, &criteria)
        .context("Resume screening failed")?;
    let stats = outcome.stats;

    println!(
        "{}",
        format_match_summary(stats.documents_matched, stats.documents_scanned)
    );

    if stats.extraction_failures > 0 {
        println!(
            "{}",
            format_warning(&format!(
                "{} resume(s) could not be read and were screened as empty",
                stats.extraction_failures
            ))
        );
    }
    if stats.copy_failures > 0 {
        println!(
            "{}",
            format_warning(&format!(
                "{} matched resume(s) could not be copied to {}",
                stats.copy_failures,
                output_dir.display()
            ))
        );
    }

    let table = ReportTable::new(ReportColumns::from(&config.report), outcome.rows);

    if !table.is_empty() {
        println!();
        print!("{}", table.render());
        println!();
        println!(
            "{}",
            format_info(&format!("Copied matches to {}", output_dir.display()))
        );
    }

    if let Some(path) = &config.report.csv_path {
        CsvExporter::write(&table, path).context("Failed to write CSV report")?;
        println!(
            "{}",
            format_success(&format!("CSV report written to {}", path.display()))
        );
    }

    if let Some(path) = &config.report.json_path {
        JsonExporter::write(&table, path, args.pretty).context("Failed to write JSON report")?;
        println!(
            "{}",
            format_success(&format!("JSON report written to {}", path.display()))
        );
    }

    info!(
        "Run complete in {:.2}s ({:.1}% match rate)",
        stats.duration.as_secs_f64(),
        stats.match_rate()
    );

    Ok(())
}

fn cmd_scan(config: &Config, input: Option<PathBuf>) -> Result<()> {
    let input_dir = input.unwrap_or_else(|| config.paths.input_dir.clone());

    let documents = ResumeScanner::new()
        .scan_directory(&input_dir)
        .context("Failed to scan input directory")?;

    if documents.is_empty() {
        println!(
            "{}",
            format_warning(&format!("No PDF resumes in {}", input_dir.display()))
        );
        return Ok(());
    }

    for document in &documents {
        println!("{:<40} {:>10} bytes", document.file_name, document.size);
    }
    println!();
    println!(
        "{}",
        format_info(&format!(
            "{} resume(s) in {}",
            documents.len(),
            input_dir.display()
        ))
    );

    Ok(())
}

fn cmd_inspect(mut config: Config, file: &Path, engine: Option<OcrEngine>) -> Result<()> {
    Validator::validate_file_path(file)?;
    Validator::validate_pdf_extension(file)?;

    if let Some(engine) = engine {
        config.ocr.engine = engine;
    }

    let analyzer =
        ResumeAnalyzer::from_config(&config.heuristics).context("Invalid heuristics configuration")?;
    let processor = ResumeBatchProcessor::new(
        build_extractor(&config.ocr),
        analyzer,
        &config.paths.output_dir,
    );

    let facts = processor
        .inspect(file)
        .with_context(|| format!("Failed to extract text from {}", file.display()))?;

    let or_missing = |value: &Option<String>| {
        value
            .clone()
            .unwrap_or_else(|| resume_filter::models::NOT_FOUND.to_string())
    };

    println!("File:           {}", file.display());
    println!(
        "Experience:     {} year(s)",
        resume_filter::models::format_experience(facts.experience_years)
    );
    println!("Email:          {}", or_missing(&facts.email));
    println!("Phone:          {}", or_missing(&facts.phone));
    println!("Undergraduate:  {}", facts.qualification.is_undergraduate);
    println!("Postgraduate:   {}", facts.qualification.is_postgraduate);

    Ok(())
}
