//! Run command implementation

use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::cli::RunArgs;
use crate::config::{apply_overrides, load_config, validate_config, ExperimentSpec, OutputFormat};
use crate::pipeline::Experiment;

pub fn run_experiment(args: RunArgs, level: LogLevel) -> Result<(), String> {
    let progress = progress_level(args.format);
    log(
        level,
        progress,
        &format!("Evaluar: running {}", args.config.display()),
    );

    // Load and validate config
    let mut spec = load_config(&args.config).map_err(|e| format!("Config error: {e}"))?;

    // Overrides can break what the file promised
    apply_overrides(&mut spec, &args);
    validate_config(&spec).map_err(|e| format!("Invalid override: {e}"))?;

    execute(&spec, args.format, level)
}

/// Level for progress lines; JSON and YAML output keeps stdout clean unless `-v`
pub(super) fn progress_level(format: OutputFormat) -> LogLevel {
    match format {
        OutputFormat::Text => LogLevel::Normal,
        OutputFormat::Json | OutputFormat::Yaml => LogLevel::Verbose,
    }
}

/// Run an experiment, write its artifacts and print the report
pub(super) fn execute(spec: &ExperimentSpec, format: OutputFormat, level: LogLevel) -> Result<(), String> {
    let progress = progress_level(format);
    let plots = spec
        .output
        .plot_kinds()
        .map_err(|e| format!("Config error: {e}"))?;

    let data = &spec.data.generator;
    log(
        level,
        LogLevel::Verbose,
        &format!(
            "  Data: {} samples, {} features, {} classes (seed {})",
            data.n_samples, data.n_features, data.n_classes, data.seed
        ),
    );
    log(
        level,
        LogLevel::Verbose,
        &format!("  Metrics: {}", spec.eval.metrics.join(", ")),
    );

    let report = Experiment::new(spec.clone())
        .run()
        .map_err(|e| format!("Experiment error: {e}"))?;

    let charts = report.charts(&plots, spec.output.normalize());
    let written = report
        .write_artifacts(&spec.output.dir, &charts)
        .map_err(|e| format!("Output error: {e}"))?;

    let rendered = format
        .render(&report)
        .map_err(|e| format!("Serialization error: {e}"))?;
    println!("{rendered}");

    for path in &written {
        log(level, progress, &format!("Wrote {}", path.display()));
    }
    Ok(())
}
