/// Data layer: measurements, artifacts, prediction and the river table.
///
/// Architecture:
/// ```text
///  water_imputer_model.json   water_potability_model.json
///        │                          │
///        ▼                          ▼
///   ┌──────────┐   Preprocessor / ClassifierModel
///   │  loader   │  parse + validate artifacts
///   └──────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │ ModelContext  │  FeatureVector → transform → predict → Potability
///   └──────────────┘
///
///   ┌──────────┐
///   │  rivers   │  static state → [River] table, map center
///   └──────────┘
/// ```

pub mod artifact;
pub mod demo;
pub mod loader;
pub mod model;
pub mod predictor;
pub mod rivers;
