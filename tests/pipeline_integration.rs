//! End-to-end experiment tests
//!
//! Each test goes from a YAML configuration to the files a run leaves on disk.

use evaluar::cli::run_command;
use evaluar::config::{
    load_config, parse_args, template_yaml, validate_config, InitTemplate, PlotKind,
};
use evaluar::data::read_predictions;
use evaluar::eval::Metric;
use evaluar::pipeline::{score_predictions, Experiment, REPORT_FILE};
use std::fs;
use tempfile::TempDir;

fn write_template(dir: &TempDir, template: InitTemplate, n_samples: usize) -> std::path::PathBuf {
    let yaml = template_yaml(template)
        .unwrap()
        .replace("n_samples: 1000", &format!("n_samples: {n_samples}"));
    let path = dir.path().join(format!("{template}.yaml"));
    fs::write(&path, yaml).unwrap();
    path
}

#[test]
fn templates_load_and_validate() {
    let dir = TempDir::new().unwrap();
    for template in [InitTemplate::Binary, InitTemplate::Imbalanced, InitTemplate::Multiclass] {
        let path = write_template(&dir, template, 400);
        let spec = load_config(&path).unwrap_or_else(|e| panic!("{template}: {e}"));
        validate_config(&spec).unwrap_or_else(|e| panic!("{template}: {e}"));
        assert_eq!(spec.data.generator.n_samples, 400, "{template}");
    }
}

#[test]
fn binary_experiment_writes_report_and_charts() {
    let dir = TempDir::new().unwrap();
    let config = write_template(&dir, InitTemplate::Binary, 400);
    let mut spec = load_config(&config).unwrap();
    spec.output.dir = dir.path().join("out");

    let report = Experiment::new(spec.clone()).run().unwrap();
    let charts = report.charts(&spec.output.plot_kinds().unwrap(), spec.output.normalize());
    let written = report.write_artifacts(&spec.output.dir, &charts).unwrap();

    assert_eq!(written.len(), 4);
    assert!(written[0].ends_with(REPORT_FILE));
    for kind in PlotKind::ALL {
        let svg = fs::read_to_string(spec.output.dir.join(kind.file_name())).unwrap();
        assert!(svg.contains("<svg"), "{kind}");
    }

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&written[0]).unwrap()).unwrap();
    assert_eq!(json["n_classes"], 2);
    assert_eq!(json["results"].as_array().unwrap().len(), 2);
    let auc = json["roc_auc"].as_f64().unwrap();
    assert!(auc > 0.5 && auc <= 1.0);
}

#[test]
fn multiclass_experiment_skips_pr_chart() {
    let dir = TempDir::new().unwrap();
    let config = write_template(&dir, InitTemplate::Multiclass, 300);
    let spec = load_config(&config).unwrap();

    let report = Experiment::new(spec).run().unwrap();
    let charts = report.charts(&PlotKind::ALL, None);
    assert!(charts.get(PlotKind::Pr).is_none());
    assert!(charts.get(PlotKind::Roc).is_some());
    assert!(report.results[0].get_score(Metric::F1(evaluar::eval::Average::Macro)).is_some());
}

#[test]
fn cli_run_with_overrides() {
    let dir = TempDir::new().unwrap();
    let config = write_template(&dir, InitTemplate::Binary, 1000);
    let out = dir.path().join("cli-out");

    let cli = parse_args([
        "evaluar",
        "--quiet",
        "run",
        config.to_str().unwrap(),
        "--output-dir",
        out.to_str().unwrap(),
        "--samples",
        "200",
        "--no-plots",
    ])
    .unwrap();
    run_command(cli).unwrap();

    assert!(out.join(REPORT_FILE).exists());
    assert!(!out.join(PlotKind::Roc.file_name()).exists());
    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(out.join(REPORT_FILE)).unwrap()).unwrap();
    let train = json["data"]["train"]["n_samples"].as_u64().unwrap();
    let test = json["data"]["test"]["n_samples"].as_u64().unwrap();
    assert_eq!(train + test, 200);
}

#[test]
fn scoring_external_predictions() {
    let csv = "y_true,y_pred,score\n0,0,0.1\n0,1,0.4\n1,0,0.35\n1,1,0.8\n";
    let predictions = read_predictions(csv.as_bytes()).unwrap();
    let report = score_predictions(&predictions, "external", 1, 1.0).unwrap();

    assert_eq!(report.result.model_name, "external");
    assert!((report.result.get_score(Metric::RocAuc).unwrap() - 0.75).abs() < 1e-12);
    assert!((report.result.get_score(Metric::Accuracy).unwrap() - 0.5).abs() < 1e-12);
    assert_eq!(report.confusion_matrix.get(1, 1), 1);
}
