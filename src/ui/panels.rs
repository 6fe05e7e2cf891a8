use eframe::egui::{self, Color32, DragValue, RichText, ScrollArea, Ui};
use egui_extras::{Column, TableBuilder};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(catalog) = &state.catalog {
            ui.label(format!(
                "{} titles loaded, {} matching",
                catalog.len(),
                state.visible_indices.len()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    let Some(catalog) = &state.catalog else {
        ui.label("No catalog loaded.");
        return;
    };

    // Clone what we need so we can mutate state inside the loop.
    let types = catalog.types.clone();
    let countries = catalog.countries.clone();
    let year_span = catalog.year_span;

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            // ---- Content type ----
            ui.strong("Content type");
            for ty in &types {
                let mut checked = state.filters.types.contains(ty);
                if ui.checkbox(&mut checked, ty).changed() {
                    state.toggle_type(ty);
                }
            }
            ui.separator();

            // ---- Countries (collapsible, can be a long list) ----
            let header = format!(
                "Countries  ({}/{})",
                state.filters.countries.len(),
                countries.len()
            );
            egui::CollapsingHeader::new(RichText::new(header).strong())
                .id_salt("country_filter")
                .default_open(true)
                .show(ui, |ui: &mut Ui| {
                    ui.horizontal(|ui: &mut Ui| {
                        if ui.small_button("All").clicked() {
                            state.select_all_countries();
                        }
                        if ui.small_button("None").clicked() {
                            state.select_no_countries();
                        }
                    });

                    for country in &countries {
                        let mut checked = state.filters.countries.contains(country);
                        if ui.checkbox(&mut checked, country).changed() {
                            state.toggle_country(country);
                        }
                    }
                });
            ui.separator();

            // ---- Release year range ----
            ui.strong("Release year");
            if let Some((min_year, max_year)) = year_span {
                let (mut lo, mut hi) = state.filters.year_range;
                let mut changed = false;
                ui.horizontal(|ui: &mut Ui| {
                    ui.label("from");
                    changed |= ui
                        .add(DragValue::new(&mut lo).range(min_year..=hi))
                        .changed();
                    ui.label("to");
                    changed |= ui
                        .add(DragValue::new(&mut hi).range(lo..=max_year))
                        .changed();
                });
                if changed {
                    state.set_year_range(lo, hi);
                }
            }
            ui.separator();

            if ui.button("Reset filters").clicked() {
                state.reset_filters();
            }
        });
}

// ---------------------------------------------------------------------------
// Metrics row (central panel header)
// ---------------------------------------------------------------------------

/// Three headline numbers over the filtered view.
pub fn metrics_row(ui: &mut Ui, state: &AppState) {
    ui.columns(3, |cols: &mut [Ui]| {
        metric(&mut cols[0], "Total Titles", state.metrics.total);
        metric(
            &mut cols[1],
            "Countries Represented",
            state.metrics.distinct_countries,
        );
        metric(&mut cols[2], "Content Ratings", state.metrics.distinct_ratings);
    });
}

fn metric(ui: &mut Ui, label: &str, value: usize) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.label(label);
        ui.heading(value.to_string());
    });
}

// ---------------------------------------------------------------------------
// Raw data table
// ---------------------------------------------------------------------------

/// The filtered rows as a plain table, shown on demand.
pub fn raw_data_table(ui: &mut Ui, state: &AppState) {
    let Some(catalog) = &state.catalog else {
        return;
    };

    TableBuilder::new(ui)
        .striped(true)
        .column(Column::auto().at_least(40.0))
        .column(Column::auto().at_least(80.0))
        .column(Column::remainder())
        .column(Column::auto().at_least(80.0))
        .column(Column::auto().at_least(60.0))
        .header(20.0, |mut header| {
            for title in ["#", "Type", "Country", "Rating", "Year"] {
                header.col(|ui: &mut Ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|body| {
            body.rows(18.0, state.visible_indices.len(), |mut row| {
                let idx = state.visible_indices[row.index()];
                let t = &catalog.titles[idx];
                row.col(|ui: &mut Ui| {
                    ui.label(idx.to_string());
                });
                row.col(|ui: &mut Ui| {
                    ui.label(&t.title_type);
                });
                row.col(|ui: &mut Ui| {
                    ui.label(&t.country);
                });
                row.col(|ui: &mut Ui| {
                    ui.label(&t.rating);
                });
                row.col(|ui: &mut Ui| {
                    ui.label(t.release_year.to_string());
                });
            });
        });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

/// Let the user point the dashboard at a catalog CSV somewhere else, e.g.
/// when the default file next to the executable is absent.
pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open catalog data")
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        match crate::data::loader::read_catalog(&path) {
            Ok(catalog) => {
                log::info!("Loaded {} titles from {}", catalog.len(), path.display());
                state.set_catalog(catalog);
            }
            Err(e) => {
                log::error!("Failed to load catalog: {e:#}");
                state.status_message = Some(format!("Error: {e}"));
            }
        }
    }
}
