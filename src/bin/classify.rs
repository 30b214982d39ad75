use clap::Parser;
use imgsort::cli::ClassifyArgs;
use imgsort::domain::classify_by_threshold;
use imgsort::logging;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = ClassifyArgs::parse();
    logging::init_stderr();

    let report = match classify_by_threshold(&args.directory, args.threshold, args.policy()) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(1);
        }
    };

    tracing::info!(
        bigger = report.bigger.len(),
        smaller = report.smaller.len(),
        malformed = report.malformed.len(),
        "classification finished"
    );

    if report.malformed.is_empty() {
        return ExitCode::SUCCESS;
    }

    eprintln!(
        "Skipped {} file(s) without a confidence score:",
        report.malformed.len()
    );
    for name in &report.malformed {
        eprintln!("  {}", name);
    }
    ExitCode::from(2)
}
