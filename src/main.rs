// src/main.rs
use clap::Parser;
use resolution_extractor::extractors::{MarkerTable, ResolutionExtractor, TemplateConfig};
use resolution_extractor::source::{FileTextSource, StdinTextSource, TextSource};
use resolution_extractor::storage::StorageManager;
use resolution_extractor::utils::error::StorageError;
use resolution_extractor::utils::{self, AppError};
use std::path::PathBuf;

const TEMPLATE_ENV: &str = "RESOLUTION_TEMPLATE";

/// Command Line Interface for the resolution document extractor
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Normalized document text (reads stdin when omitted)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output directory for extracted records
    #[arg(short, long, default_value = "./output")]
    output_dir: String,

    /// Base name of the output files (defaults to the input file stem)
    #[arg(short, long)]
    name: Option<String>,

    /// JSON template overriding the built-in section markers
    #[arg(short, long)]
    template: Option<PathBuf>,

    /// Print the record to stdout instead of saving it
    #[arg(long)]
    stdout: bool,

    /// Debug mode - save the document with located markers highlighted
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<(), AppError> {
    // 1. Setup Logging (reads RUST_LOG env var)
    utils::logging::setup_logging();

    // 2. Parse CLI Arguments
    let args = Args::parse();
    tracing::info!("Starting processing for args: {:?}", args);

    // 3. Resolve the template: CLI flag, then environment, then built-in
    let template_path = args
        .template
        .clone()
        .or_else(|| std::env::var_os(TEMPLATE_ENV).map(PathBuf::from));
    let custom_markers = match &template_path {
        Some(path) => {
            tracing::info!("Loading template from {}", path.display());
            Some(MarkerTable::compile(&TemplateConfig::from_json_file(path)?)?)
        }
        None => None,
    };
    let markers = custom_markers
        .as_ref()
        .unwrap_or_else(|| MarkerTable::default_template());

    // 4. Read the document text
    let source: Box<dyn TextSource> = match &args.input {
        Some(path) => Box::new(FileTextSource::new(path)),
        None => Box::new(StdinTextSource),
    };
    let text = source.document_text()?;
    tracing::info!("Read document from {} ({} bytes)", source.describe(), text.len());

    // 5. Extract
    let record = ResolutionExtractor::new(markers).extract(&text);

    if args.stdout {
        let json = record
            .to_json_pretty()
            .map_err(|e| StorageError::SerializationError(e.to_string()))?;
        println!("{}", json);
        if !args.debug {
            return Ok(());
        }
    }

    // 6. Persist
    let name = output_name(&args);
    let storage = StorageManager::new(&args.output_dir)?;

    if !args.stdout {
        storage.save_record(&record, &name)?;
        match storage.save_record_metadata(&record, &name) {
            Ok(path) => tracing::info!("Saved record metadata to: {}", path.display()),
            Err(e) => tracing::error!("Failed to save record metadata: {}", e),
        }
    }

    if args.debug {
        let debug_path = storage.debug_dir()?.join(format!("{}_markers.html", name));
        if let Err(e) = utils::html_debug::create_debug_html(&text, &debug_path, markers) {
            tracing::warn!("Failed to create debug HTML: {}", e);
        }
    }

    tracing::info!("Processing finished for {}", name);
    Ok(())
}

fn output_name(args: &Args) -> String {
    args.name
        .clone()
        .or_else(|| {
            args.input
                .as_ref()
                .and_then(|p| p.file_stem())
                .map(|s| s.to_string_lossy().into_owned())
        })
        .unwrap_or_else(|| "resolution".to_string())
}
