//! CLI command tests

use super::*;
use crate::cli::LogLevel;
use crate::config::cli::{DemoArgs, InfoArgs, InitArgs, RunArgs, ScoreArgs, ValidateArgs};
use crate::config::{InitTemplate, OutputFormat};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Write a small, fast binary experiment into `dir`
fn create_test_config(dir: &TempDir) -> PathBuf {
    let config_path = dir.path().join("experiment.yaml");
    let output_path = dir.path().join("out");
    let config = format!(
        r"
data:
  n_samples: 200
  class_sep: 2.0
  seed: 3
model:
  max_iter: 500
eval:
  metrics: [accuracy, f1_binary, roc_auc]
output:
  dir: {}
  plots: [roc, confusion]
",
        output_path.display()
    );
    std::fs::write(&config_path, config).unwrap();
    config_path
}

fn run_args(config: &Path) -> RunArgs {
    RunArgs {
        config: config.to_path_buf(),
        output_dir: None,
        seed: None,
        samples: None,
        format: OutputFormat::Json,
        no_plots: false,
    }
}

#[test]
fn test_run_writes_artifacts() {
    let dir = TempDir::new().unwrap();
    let config = create_test_config(&dir);

    run::run_experiment(run_args(&config), LogLevel::Quiet).unwrap();

    let out = dir.path().join("out");
    assert!(out.join("report.json").exists());
    assert!(out.join("roc.svg").exists());
    assert!(out.join("confusion.svg").exists());
    assert!(!out.join("pr.svg").exists());

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(out.join("report.json")).unwrap()).unwrap();
    assert_eq!(json["seed"], 3);
}

#[test]
fn test_run_overrides() {
    let dir = TempDir::new().unwrap();
    let config = create_test_config(&dir);
    let custom = dir.path().join("custom");
    let args = RunArgs {
        output_dir: Some(custom.clone()),
        seed: Some(11),
        no_plots: true,
        ..run_args(&config)
    };

    run::run_experiment(args, LogLevel::Quiet).unwrap();

    assert!(custom.join("report.json").exists());
    assert!(!custom.join("roc.svg").exists());
    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(custom.join("report.json")).unwrap())
            .unwrap();
    assert_eq!(json["seed"], 11);
}

#[test]
fn test_run_rejects_invalid_override() {
    let dir = TempDir::new().unwrap();
    let config = create_test_config(&dir);
    let args = RunArgs {
        samples: Some(2),
        ..run_args(&config)
    };
    let err = run::run_experiment(args, LogLevel::Quiet).unwrap_err();
    assert!(err.contains("Invalid override"));
}

#[test]
fn test_run_missing_config() {
    let err = run::run_experiment(run_args(Path::new("/nonexistent.yaml")), LogLevel::Quiet)
        .unwrap_err();
    assert!(err.contains("Config error"));
}

#[test]
fn test_demo_without_plots() {
    let dir = TempDir::new().unwrap();
    let args = DemoArgs {
        template: InitTemplate::Binary,
        output_dir: Some(dir.path().join("demo")),
        format: OutputFormat::Yaml,
        no_plots: true,
    };
    demo::run_demo(args, LogLevel::Quiet).unwrap();
    assert!(dir.path().join("demo").join("report.json").exists());
}

#[test]
fn test_validate_and_info() {
    let dir = TempDir::new().unwrap();
    let config = create_test_config(&dir);

    validate::run_validate(
        ValidateArgs {
            config: config.clone(),
            detailed: true,
        },
        LogLevel::Quiet,
    )
    .unwrap();

    for format in [OutputFormat::Text, OutputFormat::Json, OutputFormat::Yaml] {
        info::run_info(
            InfoArgs {
                config: config.clone(),
                format,
            },
            LogLevel::Quiet,
        )
        .unwrap();
    }
}

#[test]
fn test_validate_reports_bad_config() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("bad.yaml");
    std::fs::write(&config, "eval:\n  metrics: [accuracy, r2]\n").unwrap();

    let err = validate::run_validate(
        ValidateArgs {
            config,
            detailed: false,
        },
        LogLevel::Quiet,
    )
    .unwrap_err();
    assert!(err.contains("Unknown metric: r2"));
}

#[test]
fn test_init_writes_template_once() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("multi.yaml");
    let args = InitArgs {
        template: InitTemplate::Multiclass,
        output: Some(path.clone()),
        force: false,
    };

    init::run_init(args.clone(), LogLevel::Quiet).unwrap();
    let spec = crate::config::load_config(&path).unwrap();
    assert_eq!(spec.data.generator.n_classes, 3);

    let err = init::run_init(args.clone(), LogLevel::Quiet).unwrap_err();
    assert!(err.contains("already exists"));

    init::run_init(InitArgs { force: true, ..args }, LogLevel::Quiet).unwrap();
}

#[test]
fn test_score_csv() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("preds.csv");
    std::fs::write(&path, "y_true,y_pred,score\n0,0,0.1\n0,1,0.4\n1,0,0.35\n1,1,0.8\n").unwrap();

    let args = ScoreArgs {
        input: path,
        pos_label: 1,
        beta: 1.0,
        format: OutputFormat::Json,
    };
    score::run_score(args, LogLevel::Quiet).unwrap();
}

#[test]
fn test_score_missing_file() {
    let args = ScoreArgs {
        input: PathBuf::from("/nonexistent.csv"),
        pos_label: 1,
        beta: 2.0,
        format: OutputFormat::Text,
    };
    let err = score::run_score(args, LogLevel::Quiet).unwrap_err();
    assert!(err.contains("Failed to read"));
}

#[test]
fn test_run_command_dispatch() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("binary.yaml");
    let cli = crate::config::parse_args([
        "evaluar",
        "-q",
        "init",
        "--output",
        path.to_str().unwrap(),
    ])
    .unwrap();
    run_command(cli).unwrap();
    assert!(path.exists());
}
