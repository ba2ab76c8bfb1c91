//! Score command implementation

use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::cli::ScoreArgs;
use crate::data::load_predictions;
use crate::pipeline::score_predictions;

use super::run::progress_level;

pub fn run_score(args: ScoreArgs, level: LogLevel) -> Result<(), String> {
    log(
        level,
        progress_level(args.format),
        &format!("Scoring predictions in {}", args.input.display()),
    );

    let predictions = load_predictions(&args.input)
        .map_err(|e| format!("Failed to read {}: {e}", args.input.display()))?;
    log(
        level,
        LogLevel::Verbose,
        &format!(
            "  {} rows{}",
            predictions.len(),
            if predictions.scores.is_some() { " with scores" } else { "" }
        ),
    );

    let name = args
        .input
        .file_stem()
        .map_or_else(|| "predictions".to_string(), |s| s.to_string_lossy().into_owned());
    let report = score_predictions(&predictions, &name, args.pos_label, args.beta)
        .map_err(|e| format!("Scoring error: {e}"))?;

    let rendered = args
        .format
        .render(&report)
        .map_err(|e| format!("Serialization error: {e}"))?;
    println!("{rendered}");
    Ok(())
}
