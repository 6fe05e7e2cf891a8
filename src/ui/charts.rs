use eframe::egui::Ui;
use egui_plot::{Bar, BarChart, GridMark, Plot};

use crate::color::CategoryColors;
use crate::data::summary::Metrics;

const CHART_HEIGHT: f32 = 220.0;

// ---------------------------------------------------------------------------
// Categorical bar charts (ratings, top countries)
// ---------------------------------------------------------------------------

/// Content-by-rating bar chart, one bar per rating in frequency order.
pub fn rating_chart(ui: &mut Ui, metrics: &Metrics, colors: &CategoryColors) {
    category_chart(ui, "rating_chart", "Content by Rating", &metrics.rating_counts, colors);
}

/// Top production countries, one bar per country in frequency order.
pub fn country_chart(ui: &mut Ui, metrics: &Metrics, colors: &CategoryColors) {
    category_chart(
        ui,
        "country_chart",
        "Top 10 Production Countries",
        &metrics.top_countries,
        colors,
    );
}

fn category_chart(
    ui: &mut Ui,
    id: &str,
    heading: &str,
    counts: &[(String, usize)],
    colors: &CategoryColors,
) {
    ui.strong(heading);

    let bars: Vec<Bar> = counts
        .iter()
        .enumerate()
        .map(|(i, (label, count))| {
            Bar::new(i as f64, *count as f64)
                .name(label)
                .fill(colors.color_for(label))
                .width(0.7)
        })
        .collect();

    let labels: Vec<String> = counts.iter().map(|(label, _)| label.clone()).collect();

    Plot::new(id)
        .height(CHART_HEIGHT)
        .y_axis_label("Titles")
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .allow_boxed_zoom(false)
        .x_axis_formatter(move |mark: GridMark, _range| category_label(&labels, mark))
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars));
        });
}

/// Axis formatter for categorical charts: label only the integer positions
/// that carry a bar, leave the rest of the grid unlabelled.
fn category_label(labels: &[String], mark: GridMark) -> String {
    let i = mark.value.round();
    if (mark.value - i).abs() > 1e-6 || i < 0.0 {
        return String::new();
    }
    labels.get(i as usize).cloned().unwrap_or_default()
}

// ---------------------------------------------------------------------------
// Release-year histogram
// ---------------------------------------------------------------------------

/// Releases by year: one bar per integer year across the full catalog span.
pub fn year_histogram(ui: &mut Ui, metrics: &Metrics) {
    ui.strong("Content Releases by Year");

    let start = metrics.year_start;
    let bars: Vec<Bar> = metrics
        .year_counts
        .iter()
        .enumerate()
        .map(|(i, &count)| {
            let year = start + i as i32;
            Bar::new(year as f64, count as f64).name(year.to_string())
        })
        .collect();

    Plot::new("year_histogram")
        .height(CHART_HEIGHT)
        .y_axis_label("Titles")
        .x_axis_label("Release year")
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .allow_boxed_zoom(false)
        .x_axis_formatter(|mark: GridMark, _range| {
            let year = mark.value;
            if (year - year.round()).abs() > 1e-6 {
                String::new()
            } else {
                format!("{}", year as i64)
            }
        })
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars));
        });
}
