use std::collections::BTreeSet;

use super::model::{Catalog, UNKNOWN_COUNTRY};

// ---------------------------------------------------------------------------
// Filter predicate: which values are selected per dimension
// ---------------------------------------------------------------------------

/// Countries pre-selected when a catalog is first loaded. Only those that
/// actually occur in the data end up in the initial selection.
pub const DEFAULT_COUNTRIES: [&str; 4] =
    ["United States", "India", "United Kingdom", UNKNOWN_COUNTRY];

/// The three user-controlled filter dimensions.
///
/// Set semantics are strict membership: an empty set selects nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    /// Allowed content types.
    pub types: BTreeSet<String>,
    /// Allowed countries.
    pub countries: BTreeSet<String>,
    /// Inclusive `(min, max)` bound on release year.
    pub year_range: (i32, i32),
}

/// Initialise a [`FilterState`] for a freshly loaded catalog: all types,
/// the default country subset, and the full observed year span.
pub fn init_filter_state(catalog: &Catalog) -> FilterState {
    FilterState {
        types: catalog.types.iter().cloned().collect(),
        countries: catalog
            .countries
            .iter()
            .filter(|c| DEFAULT_COUNTRIES.contains(&c.as_str()))
            .cloned()
            .collect(),
        year_range: catalog.year_span.unwrap_or((0, 0)),
    }
}

/// Return indices of titles passing all three filters, in source order.
///
/// A title passes when its type and country are members of the respective
/// selection sets and its release year falls inside `year_range`
/// (inclusive on both ends). A pure function of its inputs: an empty
/// intersection yields an empty vec, never an error.
pub fn filtered_indices(catalog: &Catalog, filters: &FilterState) -> Vec<usize> {
    let (lo, hi) = filters.year_range;
    catalog
        .titles
        .iter()
        .enumerate()
        .filter(|(_, t)| {
            filters.types.contains(&t.title_type)
                && filters.countries.contains(&t.country)
                && (lo..=hi).contains(&t.release_year)
        })
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::tests::title;

    fn sample_catalog() -> Catalog {
        Catalog::from_titles(vec![
            title("Movie", "United States", "TV-MA", 2020),
            title("TV Show", "India", "Not Rated", 2019),
            title("Movie", "United States", "TV-MA", 2018),
            title("Movie", "France", "PG", 2019),
        ])
    }

    fn select(values: &[&str]) -> BTreeSet<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn identity_filter_returns_every_row() {
        let catalog = sample_catalog();
        let filters = FilterState {
            types: catalog.types.iter().cloned().collect(),
            countries: catalog.countries.iter().cloned().collect(),
            year_range: catalog.year_span.unwrap(),
        };
        assert_eq!(filtered_indices(&catalog, &filters), vec![0, 1, 2, 3]);
    }

    #[test]
    fn all_three_predicates_are_anded() {
        let catalog = sample_catalog();
        let filters = FilterState {
            types: select(&["Movie"]),
            countries: select(&["United States"]),
            year_range: (2018, 2020),
        };

        let visible = filtered_indices(&catalog, &filters);
        assert_eq!(visible, vec![0, 2]);

        // Soundness: every returned row passes all three predicates.
        for &i in &visible {
            let t = &catalog.titles[i];
            assert!(filters.types.contains(&t.title_type));
            assert!(filters.countries.contains(&t.country));
            assert!((2018..=2020).contains(&t.release_year));
        }
        // Completeness: every passing row is returned.
        for (i, t) in catalog.titles.iter().enumerate() {
            let passes = filters.types.contains(&t.title_type)
                && filters.countries.contains(&t.country)
                && (2018..=2020).contains(&t.release_year);
            assert_eq!(passes, visible.contains(&i));
        }
    }

    #[test]
    fn empty_selection_set_excludes_everything() {
        let catalog = sample_catalog();
        let mut filters = init_filter_state(&catalog);
        filters.countries.clear();
        assert!(filtered_indices(&catalog, &filters).is_empty());
    }

    #[test]
    fn equal_year_bounds_select_a_single_year() {
        let catalog = sample_catalog();
        let filters = FilterState {
            types: catalog.types.iter().cloned().collect(),
            countries: catalog.countries.iter().cloned().collect(),
            year_range: (2019, 2019),
        };
        assert_eq!(filtered_indices(&catalog, &filters), vec![1, 3]);
    }

    #[test]
    fn defaults_keep_only_observed_default_countries() {
        let catalog = sample_catalog();
        let filters = init_filter_state(&catalog);

        assert_eq!(filters.types, select(&["Movie", "TV Show"]));
        // "United Kingdom" and "Unknown" are defaults but not in the data.
        assert_eq!(filters.countries, select(&["India", "United States"]));
        assert_eq!(filters.year_range, (2018, 2020));
    }
}
