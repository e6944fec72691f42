use std::path::PathBuf;
use std::process;

use clap::Parser;

use callgauge_core::pipeline::analyze_call_use_case::AnalyzeCallUseCase;
use callgauge_core::storage::infrastructure::json_report_writer::JsonReportWriter;
use callgauge_core::transcript::domain::transcript_source::TranscriptSource;
use callgauge_core::transcript::infrastructure::json_transcript_reader::JsonTranscriptReader;
use callgauge_core::transcript::infrastructure::scripted_transcript_source::ScriptedTranscriptSource;

/// Sales call analysis: talk metrics, sentiment, objections, and a call score.
#[derive(Parser)]
#[command(name = "callgauge")]
struct Cli {
    /// Transcript JSON file: a segment array or {"segments": [...]}.
    transcript: Option<PathBuf>,

    /// Analyze the built-in demo pitch instead of a transcript file.
    #[arg(long)]
    demo: bool,

    /// Write the report to this file instead of stdout.
    #[arg(long)]
    output: Option<PathBuf>,

    /// Pretty-print the JSON report.
    #[arg(long)]
    pretty: bool,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    validate(&cli)?;

    // validate() guarantees a file path whenever --demo is absent
    let source: Box<dyn TranscriptSource> = match &cli.transcript {
        Some(path) => Box::new(JsonTranscriptReader::new(path)),
        None => Box::new(ScriptedTranscriptSource::demo_pitch()),
    };

    let writer = Box::new(JsonReportWriter::new(cli.pretty));
    let use_case = AnalyzeCallUseCase::new(source, writer);
    let result = use_case.run(cli.output.as_deref())?;

    match cli.output {
        Some(path) => log::info!("Report written to {}", path.display()),
        None => {
            let json = if cli.pretty {
                serde_json::to_string_pretty(&result)?
            } else {
                serde_json::to_string(&result)?
            };
            println!("{json}");
        }
    }

    Ok(())
}

fn validate(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    if cli.demo && cli.transcript.is_some() {
        return Err("A transcript file and --demo are mutually exclusive".into());
    }
    match &cli.transcript {
        None if !cli.demo => Err("Transcript file is required unless --demo is used".into()),
        Some(path) if !path.exists() => {
            Err(format!("Transcript file not found: {}", path.display()).into())
        }
        _ => Ok(()),
    }
}
