//! Command-line interface for ripeness_scan
//!
//! Classifies one watermelon photo and prints the result as JSON

use flexi_logger::{Logger, LoggerHandle};
use ripeness_scan::{
    analyze_watermelon_file, AnalysisError, ClassificationResult, PredictionResponse,
    ServiceConfig, UploadHandler,
};
use std::{env, path::Path, process};

struct Args {
    image_path: String,
    store: bool,
    config_path: Option<String>,
    log_level: String,
}

fn main() {
    let args: Vec<String> = env::args().collect();
    let parsed = parse_args(&args);

    let _logger = setup_logging(&parsed.log_level);

    let image_path = Path::new(&parsed.image_path);
    if !image_path.exists() {
        eprintln!("Error: File '{}' does not exist", image_path.display());
        process::exit(1);
    }

    let outcome = if parsed.store {
        store_and_classify(image_path, parsed.config_path.as_deref()).map(|response| {
            print_json(&response);
            print_summary(&response.class, response.confidence, &response.details);
            eprintln!("  Stored At: {}", response.image_path);
        })
    } else {
        analyze_watermelon_file(image_path).map(|result| print_result(&result))
    };

    if let Err(error) = outcome {
        eprintln!("Analysis failed: {}", error);
        if error.is_recoverable() {
            eprintln!("Suggestion: {}", error.user_message());
        }
        process::exit(1);
    }
}

fn parse_args(args: &[String]) -> Args {
    let mut store = false;
    let mut config_path = None;
    let mut log_level = "info".to_string();
    let mut image_path_arg = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--store" => store = true,
            "--config" | "--log-level" => {
                let Some(value) = args.get(i + 1) else {
                    eprintln!("Error: {} requires a value", args[i]);
                    process::exit(1);
                };
                if args[i] == "--config" {
                    config_path = Some(value.clone());
                } else {
                    log_level = value.clone();
                }
                i += 1;
            }
            "--help" | "-h" => {
                print_help(&args[0]);
                process::exit(0);
            }
            arg if !arg.starts_with("--") => {
                if image_path_arg.is_none() {
                    image_path_arg = Some(arg.to_string());
                } else {
                    eprintln!("Error: Multiple image paths provided");
                    process::exit(1);
                }
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                eprintln!("Use --help for usage information");
                process::exit(1);
            }
        }
        i += 1;
    }

    let Some(image_path) = image_path_arg else {
        print_help(args.first().map_or("ripeness", String::as_str));
        process::exit(1);
    };

    Args {
        image_path,
        store,
        config_path,
        log_level,
    }
}

fn setup_logging(level: &str) -> Option<LoggerHandle> {
    match Logger::try_with_str(level).and_then(|logger| logger.log_to_stderr().start()) {
        Ok(handle) => Some(handle),
        Err(e) => {
            eprintln!("Warning: Logger initialization failed: {}", e);
            None
        }
    }
}

fn store_and_classify(
    image_path: &Path,
    config_path: Option<&str>,
) -> Result<PredictionResponse, AnalysisError> {
    let config = match config_path {
        Some(path) => ServiceConfig::from_json_file(Path::new(path))?,
        None => ServiceConfig::default(),
    };

    let filename = image_path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or_default();
    let bytes = std::fs::read(image_path).map_err(|e| {
        AnalysisError::image_load(format!("Failed to read {}", image_path.display()), e)
    })?;

    UploadHandler::new(config).handle(filename, &bytes)
}

fn print_help(program_name: &str) {
    eprintln!("Usage: {} [OPTIONS] <image_path>", program_name);
    eprintln!();
    eprintln!("Classify watermelon ripeness from a photo (PNG, JPG or JPEG).");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --store             Store the image in the upload folder before analysis");
    eprintln!("  --config FILE       Upload configuration JSON (used with --store)");
    eprintln!("  --log-level LEVEL   Log level, e.g. debug or ripeness_scan=debug (default: info)");
    eprintln!("  --help, -h          Show this help message");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  {} melon.jpg", program_name);
    eprintln!("  {} --store --config service.json melon.png", program_name);
}

fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error serializing result: {}", e),
    }
}

fn print_result(result: &ClassificationResult) {
    // JSON on stdout for programmatic use
    print_json(result);
    print_summary(result.condition.label(), result.confidence, &result.details);
}

fn print_summary(class: &str, confidence: f32, details: &str) {
    eprintln!();
    eprintln!("Ripeness Summary:");
    eprintln!("  Class: {}", class);
    eprintln!("  Confidence: {:.1}%", confidence * 100.0);
    eprintln!("  Details: {}", details);
}
