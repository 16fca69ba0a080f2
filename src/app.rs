use eframe::egui;

use water_quality::data::predictor::ModelContext;
use crate::state::{AppState, Tab};
use crate::ui::{form, map, panels};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct WaterQualityApp {
    pub state: AppState,
    model: ModelContext,
}

impl WaterQualityApp {
    pub fn new(model: ModelContext) -> Self {
        Self {
            state: AppState::default(),
            model,
        }
    }
}

impl eframe::App for WaterQualityApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: title + tabs ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Central panel: active tab ----
        egui::CentralPanel::default().show(ctx, |ui| match self.state.tab {
            Tab::Prediction => form::prediction_tab(ui, &mut self.state, &self.model),
            Tab::RiverMap => map::river_tab(ui, &mut self.state),
        });
    }
}
