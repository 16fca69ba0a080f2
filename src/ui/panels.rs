use eframe::egui::{self, Ui};

use crate::state::{AppState, Tab};

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the title and the tab switcher.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    ui.add_space(4.0);
    ui.heading("💧 Water Quality Predictor");
    ui.add_space(2.0);

    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.selectable_value(&mut state.tab, Tab::Prediction, "🧪 Water Quality Prediction");
        ui.selectable_value(&mut state.tab, Tab::RiverMap, "🗺 River Map Explorer");
    });
}
