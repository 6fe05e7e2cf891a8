use crate::color::CategoryColors;
use crate::data::filter::{filtered_indices, init_filter_state, FilterState};
use crate::data::model::Catalog;
use crate::data::summary::{summarize, Metrics};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
///
/// The catalog itself is immutable; everything else here is derived from it
/// plus the current filter selections and is rebuilt on every change.
#[derive(Default)]
pub struct AppState {
    /// Loaded catalog (None until the data file is available).
    pub catalog: Option<Catalog>,

    /// Current filter selections.
    pub filters: FilterState,

    /// Indices of titles passing the current filters (cached).
    pub visible_indices: Vec<usize>,

    /// Aggregates over the visible titles (cached).
    pub metrics: Metrics,

    /// Chart colours for rating categories, fixed per catalog.
    pub rating_colors: CategoryColors,

    /// Chart colours for countries, fixed per catalog.
    pub country_colors: CategoryColors,

    /// Whether the raw-table view is expanded.
    pub show_raw_data: bool,

    /// Status / warning message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    /// Ingest a newly loaded catalog: default filters, fresh colours, and
    /// an initial filter + summarize pass.
    pub fn set_catalog(&mut self, catalog: Catalog) {
        self.filters = init_filter_state(&catalog);
        self.rating_colors = CategoryColors::new(&catalog.ratings);
        self.country_colors = CategoryColors::new(&catalog.countries);
        self.catalog = Some(catalog);
        self.status_message = None;
        self.refilter();
    }

    /// Recompute `visible_indices` and `metrics` after a filter change.
    pub fn refilter(&mut self) {
        if let Some(catalog) = &self.catalog {
            self.visible_indices = filtered_indices(catalog, &self.filters);
            self.metrics = summarize(catalog, &self.visible_indices);
        }
    }

    /// Toggle a single content type in the type filter.
    pub fn toggle_type(&mut self, value: &str) {
        if !self.filters.types.remove(value) {
            self.filters.types.insert(value.to_string());
        }
        self.refilter();
    }

    /// Toggle a single country in the country filter.
    pub fn toggle_country(&mut self, value: &str) {
        if !self.filters.countries.remove(value) {
            self.filters.countries.insert(value.to_string());
        }
        self.refilter();
    }

    /// Select every observed country.
    pub fn select_all_countries(&mut self) {
        if let Some(catalog) = &self.catalog {
            self.filters.countries = catalog.countries.iter().cloned().collect();
            self.refilter();
        }
    }

    /// Deselect every country (hides all titles).
    pub fn select_no_countries(&mut self) {
        self.filters.countries.clear();
        self.refilter();
    }

    /// Clamp and apply a new year range.
    pub fn set_year_range(&mut self, lo: i32, hi: i32) {
        let span = self
            .catalog
            .as_ref()
            .and_then(|c| c.year_span)
            .unwrap_or((lo, hi));
        let lo = lo.clamp(span.0, span.1);
        let hi = hi.clamp(lo, span.1);
        self.filters.year_range = (lo, hi);
        self.refilter();
    }

    /// Restore the default selections for the loaded catalog.
    pub fn reset_filters(&mut self) {
        if let Some(catalog) = &self.catalog {
            self.filters = init_filter_state(catalog);
            self.refilter();
        }
    }
}
