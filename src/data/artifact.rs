use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::model::{FeatureVector, N_FEATURES};

// ---------------------------------------------------------------------------
// Capabilities
// ---------------------------------------------------------------------------

/// Preprocessing applied to raw measurements before classification.
pub trait Transformer {
    fn transform(&self, features: &FeatureVector) -> FeatureVector;
}

/// Binary potability classifier. Returns the raw predicted label.
pub trait Classifier {
    fn predict(&self, features: &FeatureVector) -> f64;
}

// ---------------------------------------------------------------------------
// Validation errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, PartialEq)]
pub enum ArtifactError {
    #[error("{field} has {actual} values, expected {expected}")]
    WrongLength {
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("split on feature {index}, but only {} features exist", N_FEATURES)]
    FeatureIndex { index: usize },

    #[error("leaf has {actual} class weights, expected {expected}")]
    LeafWidth { expected: usize, actual: usize },

    #[error("{0} must not be empty")]
    Empty(&'static str),
}

fn check_len(field: &'static str, values: &[f64], expected: usize) -> Result<(), ArtifactError> {
    if values.len() == expected {
        Ok(())
    } else {
        Err(ArtifactError::WrongLength {
            field,
            expected,
            actual: values.len(),
        })
    }
}

// ---------------------------------------------------------------------------
// Transform artifact
// ---------------------------------------------------------------------------

/// One fitted preprocessing step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TransformStep {
    /// Replace NaN with the per-feature fill value.
    Impute { fill: Vec<f64> },
    /// `(x - mean) / scale`.
    StandardScale { mean: Vec<f64>, scale: Vec<f64> },
    /// `x * scale + min`.
    MinMaxScale { min: Vec<f64>, scale: Vec<f64> },
}

impl TransformStep {
    fn validate(&self) -> Result<(), ArtifactError> {
        match self {
            TransformStep::Impute { fill } => check_len("impute.fill", fill, N_FEATURES),
            TransformStep::StandardScale { mean, scale } => {
                check_len("standard_scale.mean", mean, N_FEATURES)?;
                check_len("standard_scale.scale", scale, N_FEATURES)
            }
            TransformStep::MinMaxScale { min, scale } => {
                check_len("min_max_scale.min", min, N_FEATURES)?;
                check_len("min_max_scale.scale", scale, N_FEATURES)
            }
        }
    }

    fn apply(&self, values: &mut [f64; N_FEATURES]) {
        match self {
            TransformStep::Impute { fill } => {
                for (v, &f) in values.iter_mut().zip(fill) {
                    if v.is_nan() {
                        *v = f;
                    }
                }
            }
            TransformStep::StandardScale { mean, scale } => {
                for ((v, &m), &s) in values.iter_mut().zip(mean).zip(scale) {
                    // Constant features were fitted with zero variance.
                    let s = if s == 0.0 { 1.0 } else { s };
                    *v = (*v - m) / s;
                }
            }
            TransformStep::MinMaxScale { min, scale } => {
                for ((v, &m), &s) in values.iter_mut().zip(min).zip(scale) {
                    *v = *v * s + m;
                }
            }
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            TransformStep::Impute { .. } => "impute",
            TransformStep::StandardScale { .. } => "standard_scale",
            TransformStep::MinMaxScale { .. } => "min_max_scale",
        }
    }
}

/// Ordered preprocessing pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preprocessor {
    pub steps: Vec<TransformStep>,
}

impl Preprocessor {
    pub fn validate(&self) -> Result<(), ArtifactError> {
        if self.steps.is_empty() {
            return Err(ArtifactError::Empty("steps"));
        }
        self.steps.iter().try_for_each(TransformStep::validate)
    }
}

impl Transformer for Preprocessor {
    fn transform(&self, features: &FeatureVector) -> FeatureVector {
        let mut values = features.0;
        for step in &self.steps {
            step.apply(&mut values);
        }
        FeatureVector(values)
    }
}

// ---------------------------------------------------------------------------
// Classifier artifact
// ---------------------------------------------------------------------------

/// Internal split node: samples with `x[feature] <= threshold` go left.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Split {
    pub feature: usize,
    pub threshold: f64,
    pub left: Box<TreeNode>,
    pub right: Box<TreeNode>,
}

/// Terminal node holding one weight (count or probability) per class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Leaf {
    pub value: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TreeNode {
    Split(Split),
    Leaf(Leaf),
}

impl TreeNode {
    fn validate(&self, n_classes: usize) -> Result<(), ArtifactError> {
        match self {
            TreeNode::Split(split) => {
                if split.feature >= N_FEATURES {
                    return Err(ArtifactError::FeatureIndex {
                        index: split.feature,
                    });
                }
                split.left.validate(n_classes)?;
                split.right.validate(n_classes)
            }
            TreeNode::Leaf(leaf) => {
                if leaf.value.len() == n_classes {
                    Ok(())
                } else {
                    Err(ArtifactError::LeafWidth {
                        expected: n_classes,
                        actual: leaf.value.len(),
                    })
                }
            }
        }
    }

    /// Walk the tree down to the leaf for `x`.
    fn leaf(&self, x: &[f64]) -> &Leaf {
        let mut node = self;
        loop {
            match node {
                TreeNode::Leaf(leaf) => return leaf,
                TreeNode::Split(split) => {
                    node = if x[split.feature] <= split.threshold {
                        &*split.left
                    } else {
                        &*split.right
                    };
                }
            }
        }
    }

    /// Leaf weights normalized to sum to one.
    fn proba(&self, x: &[f64]) -> Vec<f64> {
        let value = &self.leaf(x).value;
        let total: f64 = value.iter().sum();
        if total > 0.0 {
            value.iter().map(|v| v / total).collect()
        } else {
            value.clone()
        }
    }
}

/// Index of the largest weight; the first one wins ties.
fn argmax(values: &[f64]) -> usize {
    let mut best = 0;
    for (i, &v) in values.iter().enumerate().skip(1) {
        if v > values[best] {
            best = i;
        }
    }
    best
}

fn default_classes() -> Vec<f64> {
    vec![0.0, 1.0]
}

/// A fitted potability classifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ClassifierModel {
    /// Linear decision function `coef·x + intercept`; positive means `classes[1]`.
    Logistic {
        coef: Vec<f64>,
        intercept: f64,
        #[serde(default = "default_classes")]
        classes: Vec<f64>,
    },
    DecisionTree { classes: Vec<f64>, tree: TreeNode },
    RandomForest { classes: Vec<f64>, trees: Vec<TreeNode> },
}

impl ClassifierModel {
    pub fn validate(&self) -> Result<(), ArtifactError> {
        match self {
            ClassifierModel::Logistic { coef, classes, .. } => {
                check_len("logistic.coef", coef, N_FEATURES)?;
                check_len("logistic.classes", classes, 2)
            }
            ClassifierModel::DecisionTree { classes, tree } => {
                if classes.is_empty() {
                    return Err(ArtifactError::Empty("classes"));
                }
                tree.validate(classes.len())
            }
            ClassifierModel::RandomForest { classes, trees } => {
                if classes.is_empty() {
                    return Err(ArtifactError::Empty("classes"));
                }
                if trees.is_empty() {
                    return Err(ArtifactError::Empty("trees"));
                }
                trees.iter().try_for_each(|t| t.validate(classes.len()))
            }
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            ClassifierModel::Logistic { .. } => "logistic",
            ClassifierModel::DecisionTree { .. } => "decision_tree",
            ClassifierModel::RandomForest { .. } => "random_forest",
        }
    }
}

impl Classifier for ClassifierModel {
    fn predict(&self, features: &FeatureVector) -> f64 {
        let x = features.as_slice();
        match self {
            ClassifierModel::Logistic {
                coef,
                intercept,
                classes,
            } => {
                let decision: f64 = coef.iter().zip(x).map(|(c, v)| c * v).sum::<f64>() + intercept;
                if decision > 0.0 {
                    classes[1]
                } else {
                    classes[0]
                }
            }
            ClassifierModel::DecisionTree { classes, tree } => {
                classes[argmax(&tree.leaf(x).value)]
            }
            ClassifierModel::RandomForest { classes, trees } => {
                let mut mean = vec![0.0; classes.len()];
                for tree in trees {
                    for (m, p) in mean.iter_mut().zip(tree.proba(x)) {
                        *m += p;
                    }
                }
                classes[argmax(&mean)]
            }
        }
    }
}
