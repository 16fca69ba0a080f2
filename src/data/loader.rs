use std::path::Path;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;

use super::artifact::{ClassifierModel, Preprocessor};
use super::predictor::ModelContext;
use crate::config::ArtifactPaths;

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load both startup artifacts into a [`ModelContext`].
///
/// Any failure is final: there is no partially loaded context.
pub fn load_context(paths: &ArtifactPaths) -> Result<ModelContext> {
    let transform = load_transform(&paths.transform)?;
    let classifier = load_classifier(&paths.classifier)?;

    log::info!(
        "Loaded transform from {} ({} steps: {:?})",
        paths.transform.display(),
        transform.steps.len(),
        transform.steps.iter().map(|s| s.kind()).collect::<Vec<_>>()
    );
    log::info!(
        "Loaded {} classifier from {}",
        classifier.kind(),
        paths.classifier.display()
    );

    Ok(ModelContext::new(Box::new(transform), Box::new(classifier)))
}

// ---------------------------------------------------------------------------
// Per-artifact loaders
// ---------------------------------------------------------------------------

/// Expected JSON schema:
///
/// ```json
/// { "steps": [
///     { "kind": "impute", "fill": [7.08, 7.12, 426.2, 14.28, 66.4, 3.97] },
///     { "kind": "standard_scale", "mean": [...], "scale": [...] }
/// ] }
/// ```
pub fn load_transform(path: &Path) -> Result<Preprocessor> {
    let transform: Preprocessor = read_json(path, "transform")?;
    transform
        .validate()
        .with_context(|| format!("invalid transform artifact {}", path.display()))?;
    Ok(transform)
}

/// Expected JSON schema, one of:
///
/// ```json
/// { "kind": "logistic", "coef": [...6], "intercept": -0.3 }
/// { "kind": "decision_tree", "classes": [0, 1], "tree": { "split": {...} } }
/// { "kind": "random_forest", "classes": [0, 1], "trees": [ {...}, ... ] }
/// ```
pub fn load_classifier(path: &Path) -> Result<ClassifierModel> {
    let model: ClassifierModel = read_json(path, "classifier")?;
    model
        .validate()
        .with_context(|| format!("invalid classifier artifact {}", path.display()))?;
    Ok(model)
}

fn read_json<T: DeserializeOwned>(path: &Path, what: &str) -> Result<T> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {what} artifact {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("parsing {what} artifact {}", path.display()))
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;

    use super::*;
    use crate::data::demo::{demo_classifier, demo_transform};
    use crate::data::model::{FeatureVector, Potability};

    const TRANSFORM_JSON: &str = r#"{"steps": [
        {"kind": "impute", "fill": [7.0, 7.0, 420.0, 14.0, 66.0, 4.0]},
        {"kind": "standard_scale",
         "mean": [7.0, 6.0, 400.0, 10.0, 60.0, 3.0],
         "scale": [1.5, 1.5, 80.0, 3.3, 16.0, 0.8]}
    ]}"#;

    const CLASSIFIER_JSON: &str = r#"{
        "kind": "decision_tree",
        "classes": [0, 1],
        "tree": {"split": {"feature": 0, "threshold": 1.0,
                 "left": {"leaf": {"value": [2, 8]}},
                 "right": {"leaf": {"value": [9, 1]}}}}
    }"#;

    fn write(dir: &Path, name: &str, body: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, body).unwrap();
        path
    }

    fn paths(dir: &Path, transform: &str, classifier: &str) -> ArtifactPaths {
        ArtifactPaths {
            transform: write(dir, "transform.json", transform),
            classifier: write(dir, "classifier.json", classifier),
        }
    }

    #[test]
    fn loads_valid_pair() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = load_context(&paths(dir.path(), TRANSFORM_JSON, CLASSIFIER_JSON)).unwrap();
        assert_eq!(ctx.predict(&FeatureVector::defaults()), Potability::Potable);
    }

    #[test]
    fn demo_artifacts_round_trip_through_files() {
        let dir = tempfile::tempdir().unwrap();
        let transform = serde_json::to_string(&demo_transform()).unwrap();
        let classifier = serde_json::to_string(&demo_classifier()).unwrap();
        let paths = paths(dir.path(), &transform, &classifier);
        assert_eq!(load_transform(&paths.transform).unwrap().steps.len(), 2);
        assert_eq!(load_classifier(&paths.classifier).unwrap().kind(), "random_forest");

        let ctx = load_context(&paths).unwrap();
        assert_eq!(ctx.predict(&FeatureVector::defaults()), Potability::Potable);
    }

    #[test]
    fn missing_file_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let paths = ArtifactPaths {
            transform: write(dir.path(), "transform.json", TRANSFORM_JSON),
            classifier: dir.path().join("absent.json"),
        };
        let err = load_context(&paths).unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("reading classifier artifact"), "{msg}");
        assert!(msg.contains("absent.json"), "{msg}");
    }

    #[test]
    fn corrupt_json_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_context(&paths(dir.path(), "{\"steps\": [", CLASSIFIER_JSON)).unwrap_err();
        assert!(format!("{err:#}").contains("parsing transform artifact"));
    }

    #[test]
    fn swapped_artifacts_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_context(&paths(dir.path(), CLASSIFIER_JSON, TRANSFORM_JSON)).is_err());
    }

    #[test]
    fn structurally_invalid_classifier_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let bad = r#"{"kind": "logistic", "coef": [1, 2, 3], "intercept": 0}"#;
        let err = load_context(&paths(dir.path(), TRANSFORM_JSON, bad)).unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("invalid classifier artifact"), "{msg}");
        assert!(msg.contains("logistic.coef has 3 values, expected 6"), "{msg}");
    }
}
