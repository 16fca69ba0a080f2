use std::fmt;

// ---------------------------------------------------------------------------
// Feature – one of the six water-chemistry measurements
// ---------------------------------------------------------------------------

/// Number of measurements the classifier was trained on.
pub const N_FEATURES: usize = 6;

/// A single water-chemistry measurement.
///
/// The declaration order is the column order the artifacts were fitted with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    Ph,
    Chloramines,
    Conductivity,
    OrganicCarbon,
    Trihalomethanes,
    Turbidity,
}

impl Feature {
    /// All features in feature-vector order.
    pub const ALL: [Feature; N_FEATURES] = [
        Feature::Ph,
        Feature::Chloramines,
        Feature::Conductivity,
        Feature::OrganicCarbon,
        Feature::Trihalomethanes,
        Feature::Turbidity,
    ];

    /// Position of this feature inside a [`FeatureVector`].
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Feature::Ph => "pH",
            Feature::Chloramines => "Chloramines",
            Feature::Conductivity => "Conductivity",
            Feature::OrganicCarbon => "Organic Carbon",
            Feature::Trihalomethanes => "Trihalomethanes",
            Feature::Turbidity => "Turbidity",
        }
    }

    /// Display unit, `None` for dimensionless pH.
    pub fn unit(self) -> Option<&'static str> {
        match self {
            Feature::Ph => None,
            Feature::Chloramines | Feature::OrganicCarbon => Some("ppm"),
            Feature::Conductivity => Some("μS/cm"),
            Feature::Trihalomethanes => Some("μg/L"),
            Feature::Turbidity => Some("NTU"),
        }
    }

    /// Inclusive range accepted by the input control.
    pub fn range(self) -> (f64, f64) {
        match self {
            Feature::Ph => (0.0, 14.0),
            Feature::Chloramines => (0.0, 15.0),
            Feature::Conductivity => (100.0, 1000.0),
            Feature::OrganicCarbon => (0.0, 30.0),
            Feature::Trihalomethanes => (0.0, 120.0),
            Feature::Turbidity => (0.0, 10.0),
        }
    }

    pub fn default_value(self) -> f64 {
        match self {
            Feature::Ph => 7.0,
            Feature::Chloramines => 6.0,
            Feature::Conductivity => 400.0,
            Feature::OrganicCarbon => 10.0,
            Feature::Trihalomethanes => 60.0,
            Feature::Turbidity => 3.0,
        }
    }

    /// Clamp `value` into this feature's range.
    pub fn clamp(self, value: f64) -> f64 {
        let (lo, hi) = self.range();
        value.clamp(lo, hi)
    }

    /// Slider label, e.g. `Chloramines (ppm)`.
    pub fn label(self) -> String {
        match self.unit() {
            Some(unit) => format!("{} ({unit})", self.name()),
            None => self.name().to_string(),
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

// ---------------------------------------------------------------------------
// FeatureVector – the classifier input
// ---------------------------------------------------------------------------

/// Six measurements in [`Feature::ALL`] order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector(pub [f64; N_FEATURES]);

impl FeatureVector {
    /// Vector holding every feature's default value.
    pub fn defaults() -> Self {
        FeatureVector(Feature::ALL.map(Feature::default_value))
    }

    pub fn get(&self, feature: Feature) -> f64 {
        self.0[feature.index()]
    }

    /// Set a feature, clamped to its range.
    pub fn set(&mut self, feature: Feature, value: f64) {
        self.0[feature.index()] = feature.clamp(value);
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }
}

impl Default for FeatureVector {
    fn default() -> Self {
        Self::defaults()
    }
}

// ---------------------------------------------------------------------------
// Potability – the user-facing outcome
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Potability {
    Potable,
    NotPotable,
}

impl Potability {
    /// Map a raw classifier output to an outcome.
    ///
    /// Only an exact `1` is potable. Any other value, NaN and out-of-domain
    /// labels included, reads as not potable.
    pub fn from_output(output: f64) -> Self {
        if output == 1.0 {
            Potability::Potable
        } else {
            Potability::NotPotable
        }
    }

    pub fn is_potable(self) -> bool {
        self == Potability::Potable
    }

    pub fn message(self) -> &'static str {
        match self {
            Potability::Potable => "✅ The water is POTABLE (Safe to Drink)",
            Potability::NotPotable => "🚫 The water is NOT POTABLE (Unsafe for Drinking)",
        }
    }
}

impl fmt::Display for Potability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}
