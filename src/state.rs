use water_quality::data::model::{Feature, FeatureVector, Potability};
use water_quality::data::predictor::ModelContext;
use water_quality::data::rivers::{self, StateRivers, STATE_RIVERS};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Prediction,
    RiverMap,
}

/// The full UI state, independent of rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    /// Tab shown in the central panel.
    pub tab: Tab,

    /// Current slider values.
    pub inputs: FeatureVector,

    /// Outcome of the last "Predict" press, cleared on reset.
    pub last_prediction: Option<Potability>,

    /// Selected state in the river explorer.
    pub selected_state: &'static str,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            tab: Tab::default(),
            inputs: FeatureVector::defaults(),
            last_prediction: None,
            selected_state: STATE_RIVERS.first().map(|s| s.state).unwrap_or_default(),
        }
    }
}

impl AppState {
    /// Set one slider, clamped to the feature's range.
    pub fn set_input(&mut self, feature: Feature, value: f64) {
        self.inputs.set(feature, value);
    }

    /// Run the loaded model on the current inputs and remember the outcome.
    pub fn run_prediction(&mut self, model: &ModelContext) -> Potability {
        let outcome = model.predict(&self.inputs);
        self.last_prediction = Some(outcome);
        outcome
    }

    /// Restore every slider to its default and clear the outcome.
    pub fn reset_inputs(&mut self) {
        self.inputs = FeatureVector::defaults();
        self.last_prediction = None;
    }

    /// Change the explorer's state. Names outside the table are ignored.
    pub fn select_state(&mut self, state: &str) {
        if let Some(entry) = rivers::lookup(state) {
            self.selected_state = entry.state;
        }
    }

    /// Rivers of the selected state.
    pub fn selected_rivers(&self) -> Option<&'static StateRivers> {
        rivers::lookup(self.selected_state)
    }
}
