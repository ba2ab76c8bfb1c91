//! The linear experiment: generate, split, fit, evaluate, build curves

use super::report::{CurveSet, DataReport, ExperimentReport, ModelSummary, ThresholdReport};
use crate::config::ExperimentSpec;
use crate::data::{make_classification, train_test_split, Dataset};
use crate::error::Result;
use crate::eval::{
    precision_recall_curve, roc_curve, ClassificationReport, ConfusionMatrix, EvalConfig,
    EvalResult, Leaderboard, Metric, ModelEvaluator, ThresholdSweep,
};
use crate::model::{Classifier, DummyClassifier, DummyStrategy, LogisticRegression};
use ndarray::Array2;

/// One configured run of the evaluation lesson
///
/// # Example
///
/// ```
/// use evaluar::config::ExperimentSpec;
/// use evaluar::pipeline::Experiment;
///
/// let mut spec = ExperimentSpec::default();
/// spec.data.generator.n_samples = 200;
///
/// let report = Experiment::new(spec).run().unwrap();
/// assert!(report.roc_auc > 0.5);
/// ```
#[derive(Debug, Clone)]
pub struct Experiment {
    spec: ExperimentSpec,
}

/// Predictions of one fitted model on the test split
struct Scored {
    name: String,
    y_pred: Vec<usize>,
    proba: Array2<f64>,
}

impl Experiment {
    pub fn new(spec: ExperimentSpec) -> Self {
        Self { spec }
    }

    pub fn spec(&self) -> &ExperimentSpec {
        &self.spec
    }

    fn logistic(&self) -> LogisticRegression {
        let m = &self.spec.model;
        LogisticRegression::new()
            .with_learning_rate(m.learning_rate)
            .with_max_iter(m.max_iter)
            .with_tolerance(m.tol)
            .with_l2(m.l2)
            .with_fit_intercept(m.fit_intercept)
    }

    fn evaluator(&self, metrics: Vec<Metric>) -> ModelEvaluator {
        ModelEvaluator::new(EvalConfig {
            metrics,
            cv_folds: self.spec.eval.cv_folds,
            seed: self.spec.data.generator.seed,
            pos_label: self.spec.eval.pos_label,
            stratified: self.spec.data.stratify,
        })
    }

    /// Run every step and collect the results
    pub fn run(&self) -> Result<ExperimentReport> {
        let spec = &self.spec;
        let seed = spec.data.generator.seed;
        let pos_label = spec.eval.pos_label;

        // Step 1-2: data
        let data = make_classification(&spec.data.generator)?;
        let n_classes = data.n_classes();
        let (train, test) =
            train_test_split(&data, spec.data.test_size, spec.data.stratify, seed)?;

        // Step 3: fit the model and its baseline
        let mut model = self.logistic();
        model.fit(train.features(), train.labels())?;
        let mut baseline = DummyClassifier::new(DummyStrategy::Prior).with_seed(seed);
        baseline.fit(train.features(), train.labels())?;

        let scored = [&model as &dyn Classifier, &baseline]
            .into_iter()
            .map(|clf| score(clf, &test))
            .collect::<Result<Vec<_>>>()?;

        // Step 4: metrics
        let evaluator = self.evaluator(spec.eval.parsed_metrics()?);
        let mut leaderboard = Leaderboard::new(evaluator.primary_metric());
        let mut results = Vec::with_capacity(scored.len());
        for s in &scored {
            let result = evaluator.evaluate_with_scores(&s.name, &s.y_pred, &s.proba, test.labels())?;
            leaderboard.add(result.clone());
            results.push(result);
        }

        let cross_validation = if spec.eval.cv_folds >= 2 {
            Some(self.cross_validate(&evaluator, &train)?)
        } else {
            None
        };

        let lead = &scored[0];
        let summary = self
            .evaluator(vec![Metric::RocAuc, Metric::AveragePrecision])
            .evaluate_with_scores(&lead.name, &lead.y_pred, &lead.proba, test.labels())?;
        let confusion_matrix = ConfusionMatrix::with_labels(&lead.y_pred, test.labels(), n_classes)?;
        let classification_report = ClassificationReport::from_confusion_matrix(&confusion_matrix);

        // Step 5: curves and thresholds
        let (curves, thresholds) = if n_classes == 2 {
            let beta = spec.eval.beta()?.value();
            let scores = lead.proba.column(pos_label).to_vec();
            let sweep = ThresholdSweep::new(test.labels(), &scores, pos_label)?;
            let thresholds = ThresholdReport {
                youden: sweep.best_by_youden(),
                beta,
                fbeta: sweep.best_by_fbeta(beta),
            };
            (binary_curves(&scored, test.labels(), pos_label)?, Some(thresholds))
        } else {
            (one_vs_rest_curves(lead, test.labels(), n_classes)?, None)
        };

        let n_iter = model.n_iter();
        let (n_features, n_outputs) = model.coefficients().map_or((0, 0), |w| w.dim());

        Ok(ExperimentReport {
            generated_at: chrono::Utc::now(),
            seed,
            n_classes,
            pos_label,
            data: DataReport {
                train: train.summary(),
                test: test.summary(),
            },
            model: ModelSummary {
                name: lead.name.clone(),
                n_features,
                n_outputs,
                n_iter,
                max_iter: spec.model.max_iter,
                converged: model.converged(),
            },
            results,
            cross_validation,
            confusion_matrix,
            classification_report,
            roc_auc: summary.get_score(Metric::RocAuc).unwrap_or(0.0),
            average_precision: summary.get_score(Metric::AveragePrecision).unwrap_or(0.0),
            thresholds,
            leaderboard: leaderboard.to_markdown(),
            curves,
        })
    }

    /// K-fold scores of a fresh logistic regression on the training split
    fn cross_validate(&self, evaluator: &ModelEvaluator, train: &Dataset) -> Result<EvalResult> {
        let template = self.logistic();
        evaluator.evaluate_cv("LogisticRegression (cv)", train.labels(), |train_idx, test_idx| {
            let fold_train = train.select(train_idx);
            let fold_test = train.select(test_idx);
            let mut model = template.clone();
            model.fit(fold_train.features(), fold_train.labels())?;
            model.predict(fold_test.features())
        })
    }
}

fn score(clf: &dyn Classifier, test: &Dataset) -> Result<Scored> {
    Ok(Scored {
        name: clf.name().to_string(),
        y_pred: clf.predict(test.features())?,
        proba: clf.predict_proba(test.features())?,
    })
}

/// ROC and PR curves of every model on the positive-class column
fn binary_curves(scored: &[Scored], y_true: &[usize], pos_label: usize) -> Result<CurveSet> {
    let mut curves = CurveSet::default();
    for s in scored {
        let scores = s.proba.column(pos_label).to_vec();
        let roc = roc_curve(y_true, &scores, pos_label, true)?;
        let pr = precision_recall_curve(y_true, &scores, pos_label)?;
        let (auc, ap) = (roc.auc(), pr.average_precision());
        curves.no_skill.get_or_insert(pr.no_skill());
        curves.roc.push((s.name.clone(), roc, auc));
        curves.pr.push((s.name.clone(), pr, ap));
    }
    Ok(curves)
}

/// One ROC curve per class, each class against the rest
fn one_vs_rest_curves(lead: &Scored, y_true: &[usize], n_classes: usize) -> Result<CurveSet> {
    let mut curves = CurveSet::default();
    for class in 0..n_classes {
        let scores = lead.proba.column(class).to_vec();
        let roc = roc_curve(y_true, &scores, class, true)?;
        let auc = roc.auc();
        curves.roc.push((format!("class {class} vs rest"), roc, auc));
    }
    Ok(curves)
}
