use std::path::PathBuf;

// ---------------------------------------------------------------------------
// Artifact locations
// ---------------------------------------------------------------------------

/// Default file name of the fitted imputer/scaler.
pub const DEFAULT_TRANSFORM_PATH: &str = "water_imputer_model.json";

/// Default file name of the fitted potability classifier.
pub const DEFAULT_CLASSIFIER_PATH: &str = "water_potability_model.json";

/// Overrides [`DEFAULT_TRANSFORM_PATH`].
pub const TRANSFORM_ENV: &str = "WATER_QUALITY_TRANSFORM";

/// Overrides [`DEFAULT_CLASSIFIER_PATH`].
pub const CLASSIFIER_ENV: &str = "WATER_QUALITY_MODEL";

/// Where the two startup artifacts live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    pub transform: PathBuf,
    pub classifier: PathBuf,
}

impl Default for ArtifactPaths {
    fn default() -> Self {
        Self {
            transform: PathBuf::from(DEFAULT_TRANSFORM_PATH),
            classifier: PathBuf::from(DEFAULT_CLASSIFIER_PATH),
        }
    }
}

impl ArtifactPaths {
    /// Defaults, overridden by the environment where set.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var_os(key).map(PathBuf::from))
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<PathBuf>) -> Self {
        let defaults = Self::default();
        Self {
            transform: lookup(TRANSFORM_ENV)
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or(defaults.transform),
            classifier: lookup(CLASSIFIER_ENV)
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or(defaults.classifier),
        }
    }
}
