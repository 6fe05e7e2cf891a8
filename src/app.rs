use eframe::egui;

use crate::data::loader;
use crate::state::AppState;
use crate::ui::{charts, panels};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct ReelDeckApp {
    pub state: AppState,
}

impl Default for ReelDeckApp {
    fn default() -> Self {
        let mut state = AppState::default();

        // One-time load of the catalog next to the executable. A missing
        // file degrades to an empty dashboard with a warning, not a crash.
        match loader::load() {
            Ok(catalog) => state.set_catalog(catalog.clone()),
            Err(e) => {
                state.status_message = Some(format!(
                    "Catalog file not found. Please place '{}' next to the \
                     executable or use File → Open…",
                    loader::DATA_PATH
                ));
                log::warn!("{e}");
            }
        }

        Self { state }
    }
}

impl eframe::App for ReelDeckApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: metrics, charts, raw table ----
        egui::CentralPanel::default().show(ctx, |ui| {
            let loaded = self
                .state
                .catalog
                .as_ref()
                .is_some_and(|c| !c.is_empty());
            if !loaded {
                ui.centered_and_justified(|ui| {
                    ui.heading("Please provide the data file to load the dashboard.");
                });
                return;
            }

            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.heading("Key Metrics");
                panels::metrics_row(ui, &self.state);
                ui.separator();

                ui.heading("Content Analysis");
                charts::rating_chart(ui, &self.state.metrics, &self.state.rating_colors);
                ui.add_space(8.0);
                charts::country_chart(ui, &self.state.metrics, &self.state.country_colors);
                ui.add_space(8.0);
                charts::year_histogram(ui, &self.state.metrics);
                ui.separator();

                ui.checkbox(&mut self.state.show_raw_data, "Show raw data");
                if self.state.show_raw_data {
                    panels::raw_data_table(ui, &self.state);
                }
            });
        });
    }
}
