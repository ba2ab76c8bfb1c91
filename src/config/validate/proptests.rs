//! Property-based tests for configuration validation

use super::error::ValidationError;
use super::validator::validate_config;
use crate::config::schema::*;
use crate::data::ClassificationSpec;
use proptest::prelude::*;

fn arb_valid_spec() -> impl Strategy<Value = ExperimentSpec> {
    (
        2usize..6,      // n_classes
        0usize..500,    // extra samples
        1usize..8,      // n_features
        0.1f64..5.0,    // class_sep
        0.05f64..0.95,  // test_size
        1e-4f64..10.0,  // learning_rate
        0.0f64..1.0,    // l2
    )
        .prop_map(
            |(n_classes, extra, n_features, class_sep, test_size, learning_rate, l2)| {
                ExperimentSpec {
                    data: DataSpec {
                        generator: ClassificationSpec {
                            n_samples: 2 * n_classes + extra,
                            n_features,
                            n_informative: n_features,
                            n_classes,
                            class_sep,
                            ..Default::default()
                        },
                        test_size,
                        stratify: true,
                    },
                    model: ModelSpec {
                        learning_rate,
                        l2,
                        ..Default::default()
                    },
                    eval: EvalSpec {
                        pos_label: n_classes - 1,
                        ..Default::default()
                    },
                    output: OutputSpec::default(),
                }
            },
        )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_valid_spec_passes(spec in arb_valid_spec()) {
        prop_assert!(validate_config(&spec).is_ok());
    }

    #[test]
    fn prop_pos_label_beyond_classes_fails(spec in arb_valid_spec(), offset in 0usize..10) {
        let mut spec = spec;
        spec.eval.pos_label = spec.data.generator.n_classes + offset;
        let is_pos_label_error = matches!(
            validate_config(&spec),
            Err(ValidationError::InvalidPosLabel { .. })
        );
        prop_assert!(is_pos_label_error);
    }

    #[test]
    fn prop_nonpositive_lr_fails(spec in arb_valid_spec(), lr in -10.0f64..=0.0) {
        let mut spec = spec;
        spec.model.learning_rate = lr;
        let is_lr_error = matches!(
            validate_config(&spec),
            Err(ValidationError::InvalidLearningRate(_))
        );
        prop_assert!(is_lr_error);
    }

    #[test]
    fn prop_validated_spec_survives_yaml(spec in arb_valid_spec()) {
        let yaml = serde_yaml::to_string(&spec).unwrap();
        let back: ExperimentSpec = serde_yaml::from_str(&yaml).unwrap();
        prop_assert!(validate_config(&back).is_ok());
        prop_assert_eq!(back.data.generator.n_classes, spec.data.generator.n_classes);
    }
}
