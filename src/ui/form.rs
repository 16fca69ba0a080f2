use eframe::egui::{self, Color32, RichText, Slider, Ui};

use water_quality::data::model::{Feature, Potability};
use water_quality::data::predictor::ModelContext;
use crate::state::AppState;

const SUCCESS_FILL: Color32 = Color32::from_rgb(0xd4, 0xed, 0xda);
const SUCCESS_TEXT: Color32 = Color32::from_rgb(0x15, 0x57, 0x24);
const ERROR_FILL: Color32 = Color32::from_rgb(0xf8, 0xd7, 0xda);
const ERROR_TEXT: Color32 = Color32::from_rgb(0x72, 0x1c, 0x24);

// ---------------------------------------------------------------------------
// Prediction tab
// ---------------------------------------------------------------------------

/// Render the six measurement sliders, the predict button and the outcome.
pub fn prediction_tab(ui: &mut Ui, state: &mut AppState, model: &ModelContext) {
    ui.heading("Predict if the water is potable based on these parameters:");
    ui.add_space(8.0);

    for feature in Feature::ALL {
        let (lo, hi) = feature.range();
        let mut value = state.inputs.get(feature);
        let slider = Slider::new(&mut value, lo..=hi).text(feature.label());
        if ui.add(slider).changed() {
            state.set_input(feature, value);
        }
    }

    ui.add_space(8.0);
    ui.horizontal(|ui: &mut Ui| {
        if ui.button("🔍 Predict Water Quality").clicked() {
            state.run_prediction(model);
        }
        if ui.button("Reset to defaults").clicked() {
            state.reset_inputs();
        }
    });

    if let Some(outcome) = state.last_prediction {
        ui.add_space(8.0);
        outcome_banner(ui, outcome);
    }
}

fn outcome_banner(ui: &mut Ui, outcome: Potability) {
    let (fill, text) = if outcome.is_potable() {
        (SUCCESS_FILL, SUCCESS_TEXT)
    } else {
        (ERROR_FILL, ERROR_TEXT)
    };
    egui::Frame::group(ui.style()).fill(fill).show(ui, |ui: &mut Ui| {
        ui.set_width(ui.available_width());
        ui.label(RichText::new(outcome.message()).color(text).strong());
    });
}
