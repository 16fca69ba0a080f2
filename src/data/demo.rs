use super::artifact::{ClassifierModel, Leaf, Preprocessor, Split, TransformStep, TreeNode};

// ---------------------------------------------------------------------------
// Demo artifacts
// ---------------------------------------------------------------------------
//
// Fixed parameters for running the app without the external training
// pipeline. The imputer/scaler statistics match the public water potability
// dataset; the forest is a small hand-written stand-in.

const MEANS: [f64; 6] = [7.08, 7.12, 426.2, 14.28, 66.40, 3.97];
const STDS: [f64; 6] = [1.59, 1.58, 80.8, 3.31, 16.18, 0.78];

/// Mean imputation followed by standard scaling.
pub fn demo_transform() -> Preprocessor {
    Preprocessor {
        steps: vec![
            TransformStep::Impute {
                fill: MEANS.to_vec(),
            },
            TransformStep::StandardScale {
                mean: MEANS.to_vec(),
                scale: STDS.to_vec(),
            },
        ],
    }
}

fn leaf(not_potable: f64, potable: f64) -> TreeNode {
    TreeNode::Leaf(Leaf {
        value: vec![not_potable, potable],
    })
}

fn split(feature: usize, threshold: f64, left: TreeNode, right: TreeNode) -> TreeNode {
    TreeNode::Split(Split {
        feature,
        threshold,
        left: Box::new(left),
        right: Box::new(right),
    })
}

/// Three shallow trees over scaled pH, chloramines, trihalomethanes and turbidity.
pub fn demo_classifier() -> ClassifierModel {
    ClassifierModel::RandomForest {
        classes: vec![0.0, 1.0],
        trees: vec![
            split(0, -1.0, leaf(30.0, 5.0), split(0, 1.0, leaf(10.0, 20.0), leaf(25.0, 5.0))),
            split(1, 1.2, leaf(12.0, 18.0), leaf(20.0, 6.0)),
            split(
                5,
                1.5,
                split(4, 1.5, leaf(14.0, 16.0), leaf(20.0, 8.0)),
                leaf(22.0, 4.0),
            ),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{Feature, FeatureVector, Potability};
    use crate::data::predictor::ModelContext;

    fn context() -> ModelContext {
        ModelContext::new(Box::new(demo_transform()), Box::new(demo_classifier()))
    }

    #[test]
    fn demo_artifacts_validate() {
        assert!(demo_transform().validate().is_ok());
        assert!(demo_classifier().validate().is_ok());
    }

    #[test]
    fn defaults_are_potable() {
        assert_eq!(context().predict(&FeatureVector::defaults()), Potability::Potable);
    }

    #[test]
    fn acidic_water_is_not_potable() {
        let mut input = FeatureVector::defaults();
        input.set(Feature::Ph, 3.0);
        assert_eq!(context().predict(&input), Potability::NotPotable);
    }
}
