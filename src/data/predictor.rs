use super::artifact::{Classifier, Transformer};
use super::model::{FeatureVector, Potability};

// ---------------------------------------------------------------------------
// ModelContext – the loaded artifacts
// ---------------------------------------------------------------------------

/// Transform and classifier loaded once at startup. Read-only afterwards.
pub struct ModelContext {
    transformer: Box<dyn Transformer>,
    classifier: Box<dyn Classifier>,
}

impl std::fmt::Debug for ModelContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelContext").finish_non_exhaustive()
    }
}

impl ModelContext {
    pub fn new(transformer: Box<dyn Transformer>, classifier: Box<dyn Classifier>) -> Self {
        Self {
            transformer,
            classifier,
        }
    }

    /// Raw classifier output for a measurement vector.
    pub fn raw_output(&self, features: &FeatureVector) -> f64 {
        let transformed = self.transformer.transform(features);
        self.classifier.predict(&transformed)
    }

    /// Transform, classify and map the label to an outcome.
    pub fn predict(&self, features: &FeatureVector) -> Potability {
        let output = self.raw_output(features);
        log::debug!("predict {:?} -> {output}", features.0);
        Potability::from_output(output)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    struct Identity;

    impl Transformer for Identity {
        fn transform(&self, features: &FeatureVector) -> FeatureVector {
            *features
        }
    }

    /// Adds one to every feature.
    struct Shift;

    impl Transformer for Shift {
        fn transform(&self, features: &FeatureVector) -> FeatureVector {
            FeatureVector(features.0.map(|v| v + 1.0))
        }
    }

    struct Constant(f64);

    impl Classifier for Constant {
        fn predict(&self, _: &FeatureVector) -> f64 {
            self.0
        }
    }

    /// Records every vector it is asked to classify.
    struct Recorder {
        seen: Rc<RefCell<Vec<FeatureVector>>>,
        output: f64,
    }

    impl Classifier for Recorder {
        fn predict(&self, features: &FeatureVector) -> f64 {
            self.seen.borrow_mut().push(*features);
            self.output
        }
    }

    #[test]
    fn output_of_one_is_potable() {
        let ctx = ModelContext::new(Box::new(Identity), Box::new(Constant(1.0)));
        assert_eq!(ctx.predict(&FeatureVector::defaults()), Potability::Potable);
    }

    #[test]
    fn any_other_output_is_not_potable() {
        for r in [0.0, -1.0, 2.0, 0.5, f64::NAN] {
            let ctx = ModelContext::new(Box::new(Identity), Box::new(Constant(r)));
            assert_eq!(ctx.predict(&FeatureVector::defaults()), Potability::NotPotable);
        }
    }

    #[test]
    fn classifier_sees_transformed_vector() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let ctx = ModelContext::new(
            Box::new(Shift),
            Box::new(Recorder {
                seen: Rc::clone(&seen),
                output: 0.0,
            }),
        );
        ctx.predict(&FeatureVector::defaults());
        assert_eq!(
            seen.borrow().as_slice(),
            &[FeatureVector([8.0, 7.0, 401.0, 11.0, 61.0, 4.0])]
        );
    }

    #[test]
    fn repeated_predictions_agree() {
        let ctx = ModelContext::new(Box::new(Identity), Box::new(Constant(1.0)));
        let input = FeatureVector([8.2, 4.1, 350.0, 12.5, 70.0, 4.4]);
        let first = ctx.predict(&input);
        for _ in 0..5 {
            assert_eq!(ctx.predict(&input).message(), first.message());
        }
    }
}
