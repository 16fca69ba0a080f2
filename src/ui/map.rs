use eframe::egui::{self, Ui};
use egui_extras::{Column, TableBuilder};
use egui_plot::{Legend, MarkerShape, Plot, PlotPoints, Points};

use crate::color::river_colors;
use water_quality::data::rivers::{self, MapView, StateRivers};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// River map tab
// ---------------------------------------------------------------------------

/// Render the state selector, river list and map.
pub fn river_tab(ui: &mut Ui, state: &mut AppState) {
    ui.heading("📍 Select a state to see rivers and their locations on the map");
    ui.add_space(4.0);

    let current = state.selected_state;
    egui::ComboBox::from_label("Select State")
        .selected_text(current)
        .show_ui(ui, |ui: &mut Ui| {
            for name in rivers::state_names() {
                if ui.selectable_label(current == name, name).clicked() {
                    state.select_state(name);
                }
            }
        });
    ui.separator();

    let Some(entry) = state.selected_rivers() else {
        return;
    };

    ui.columns(2, |cols| {
        river_list(&mut cols[0], entry);
        river_map(&mut cols[1], entry);
    });
}

fn river_list(ui: &mut Ui, entry: &StateRivers) {
    ui.strong(format!("Rivers in {}:", entry.state));
    for name in entry.river_names() {
        ui.label(format!("• {name}"));
    }
    ui.add_space(8.0);

    TableBuilder::new(ui)
        .id_salt(("river_table", entry.state))
        .striped(true)
        .column(Column::auto().at_least(120.0))
        .column(Column::auto().at_least(80.0))
        .column(Column::remainder())
        .header(20.0, |mut header| {
            header.col(|ui| {
                ui.strong("River");
            });
            header.col(|ui| {
                ui.strong("Latitude");
            });
            header.col(|ui| {
                ui.strong("Longitude");
            });
        })
        .body(|mut body| {
            for river in entry.rivers {
                body.row(18.0, |mut row| {
                    row.col(|ui| {
                        ui.label(river.name);
                    });
                    row.col(|ui| {
                        ui.label(format!("{:.4}", river.lat));
                    });
                    row.col(|ui| {
                        ui.label(format!("{:.4}", river.lon));
                    });
                });
            }
        });
}

fn river_map(ui: &mut Ui, entry: &StateRivers) {
    let Some(view) = MapView::for_state(entry) else {
        ui.label("No rivers recorded");
        return;
    };
    let (min_lon, max_lon, min_lat, max_lat) = view.bounds();

    // Keyed on the state so the view resets to the new center on selection.
    Plot::new(("river_map", entry.state))
        .legend(Legend::default())
        .x_axis_label("Longitude")
        .y_axis_label("Latitude")
        .data_aspect(1.0)
        .include_x(min_lon)
        .include_x(max_lon)
        .include_y(min_lat)
        .include_y(max_lat)
        .label_formatter(|name, value| {
            if name.is_empty() {
                String::new()
            } else {
                format!("{name}\n{:.4}, {:.4}", value.y, value.x)
            }
        })
        .show(ui, |plot_ui| {
            let colors = river_colors(entry.rivers.len());
            for (river, color) in entry.rivers.iter().zip(colors) {
                let points = Points::new(PlotPoints::new(vec![[river.lon, river.lat]]))
                    .name(river.name)
                    .color(color)
                    .shape(MarkerShape::Circle)
                    .filled(true)
                    .radius(8.0);
                plot_ui.points(points);
            }
        });
}
