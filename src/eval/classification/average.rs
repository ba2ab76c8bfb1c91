//! Averaging strategies for multi-class metrics

use std::fmt;

/// Averaging strategy for multi-class metrics
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Average {
    /// Report only the metric of `pos_label`
    Binary {
        /// Class treated as positive
        pos_label: usize,
    },
    /// Calculate metrics for each label, return unweighted mean
    Macro,
    /// Calculate metrics globally by counting total TP, FP, FN
    Micro,
    /// Weighted mean by support (number of true instances per label)
    Weighted,
    /// Return metrics per class (no averaging) - scalars fall back to macro
    None,
}

impl Average {
    /// Binary averaging with class 1 as the positive label
    pub const BINARY: Average = Average::Binary { pos_label: 1 };

    /// Parse the suffix used in metric names (`f1_macro`, `precision_binary`)
    pub fn from_suffix(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "binary" => Some(Self::BINARY),
            "macro" => Some(Average::Macro),
            "micro" => Some(Average::Micro),
            "weighted" => Some(Average::Weighted),
            "none" => Some(Average::None),
            _ => None,
        }
    }

    /// Replace the positive label of a binary average; other strategies are unchanged
    pub fn with_pos_label(self, pos_label: usize) -> Self {
        match self {
            Average::Binary { .. } => Average::Binary { pos_label },
            other => other,
        }
    }
}

impl fmt::Display for Average {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Average::Binary { .. } => write!(f, "binary"),
            Average::Macro => write!(f, "macro"),
            Average::Micro => write!(f, "micro"),
            Average::Weighted => write!(f, "weighted"),
            Average::None => write!(f, "none"),
        }
    }
}
