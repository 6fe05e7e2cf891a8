use std::collections::HashMap;

use super::model::Catalog;

/// Number of entries kept in the country frequency table.
pub const TOP_COUNTRIES: usize = 10;

// ---------------------------------------------------------------------------
// Metrics – everything the dashboard derives from the filtered view
// ---------------------------------------------------------------------------

/// Aggregates over the currently visible rows. Purely derived: recomputed
/// from scratch on every filter change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Metrics {
    /// Number of visible titles.
    pub total: usize,
    /// Distinct countries among visible titles.
    pub distinct_countries: usize,
    /// Distinct ratings among visible titles.
    pub distinct_ratings: usize,
    /// Rating → count, descending by count, ties in first-seen row order.
    pub rating_counts: Vec<(String, usize)>,
    /// The [`TOP_COUNTRIES`] most frequent countries, same ordering rule.
    pub top_countries: Vec<(String, usize)>,
    /// First year covered by `year_counts`.
    pub year_start: i32,
    /// One bucket per integer year across the full source span (fixed from
    /// the unfiltered catalog, so bucket count is stable under filtering).
    pub year_counts: Vec<usize>,
}

/// Aggregate the visible subset of `catalog` into [`Metrics`].
///
/// `visible` holds row indices as produced by
/// [`filtered_indices`](super::filter::filtered_indices); passing every
/// index summarizes the whole catalog.
pub fn summarize(catalog: &Catalog, visible: &[usize]) -> Metrics {
    let ratings = frequency(visible.iter().map(|&i| catalog.titles[i].rating.as_str()));
    let mut countries = frequency(visible.iter().map(|&i| catalog.titles[i].country.as_str()));

    let distinct_countries = countries.len();
    countries.truncate(TOP_COUNTRIES);

    let (year_start, year_counts) = match catalog.year_span {
        None => (0, Vec::new()),
        Some((lo, hi)) => {
            let mut counts = vec![0usize; (hi - lo) as usize + 1];
            for &i in visible {
                counts[(catalog.titles[i].release_year - lo) as usize] += 1;
            }
            (lo, counts)
        }
    };

    Metrics {
        total: visible.len(),
        distinct_countries,
        distinct_ratings: ratings.len(),
        rating_counts: ratings,
        top_countries: countries,
        year_start,
        year_counts,
    }
}

/// Frequency table in descending count order. Ties keep first-seen order,
/// which a stable sort over the first-seen list guarantees.
fn frequency<'a>(values: impl Iterator<Item = &'a str>) -> Vec<(String, usize)> {
    let mut order: Vec<(String, usize)> = Vec::new();
    let mut slots: HashMap<String, usize> = HashMap::new();

    for value in values {
        match slots.get(value) {
            Some(&slot) => order[slot].1 += 1,
            None => {
                slots.insert(value.to_string(), order.len());
                order.push((value.to_string(), 1));
            }
        }
    }

    order.sort_by(|a, b| b.1.cmp(&a.1));
    order
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filter::{filtered_indices, FilterState};
    use crate::data::model::tests::title;
    use crate::data::model::Title;

    fn all_indices(catalog: &Catalog) -> Vec<usize> {
        (0..catalog.len()).collect()
    }

    #[test]
    fn counts_match_visible_rows() {
        let catalog = Catalog::from_titles(vec![
            title("Movie", "United States", "TV-MA", 2020),
            title("TV Show", "India", "Not Rated", 2019),
            title("Movie", "United States", "TV-MA", 2018),
        ]);
        let filters = FilterState {
            types: ["Movie".to_string()].into(),
            countries: ["United States".to_string()].into(),
            year_range: (2018, 2020),
        };

        let visible = filtered_indices(&catalog, &filters);
        let metrics = summarize(&catalog, &visible);

        assert_eq!(metrics.total, visible.len());
        assert_eq!(metrics.total, 2);
        assert_eq!(metrics.distinct_countries, 1);
        assert_eq!(metrics.distinct_ratings, 1);
        assert_eq!(metrics.rating_counts, vec![("TV-MA".to_string(), 2)]);
    }

    #[test]
    fn rating_counts_sort_descending_with_first_seen_ties() {
        let catalog = Catalog::from_titles(vec![
            title("Movie", "Spain", "PG", 2001),
            title("Movie", "Spain", "TV-MA", 2002),
            title("Movie", "Spain", "TV-MA", 2003),
            title("Movie", "Spain", "R", 2004),
        ]);

        let metrics = summarize(&catalog, &all_indices(&catalog));
        // PG and R tie at 1; PG appeared first.
        assert_eq!(
            metrics.rating_counts,
            vec![
                ("TV-MA".to_string(), 2),
                ("PG".to_string(), 1),
                ("R".to_string(), 1),
            ]
        );
    }

    #[test]
    fn country_table_is_capped_at_ten() {
        let titles: Vec<Title> = (0..15)
            .map(|i| title("Movie", &format!("Country {i:02}"), "PG", 2000))
            .collect();
        let catalog = Catalog::from_titles(titles);

        let metrics = summarize(&catalog, &all_indices(&catalog));
        assert_eq!(metrics.top_countries.len(), TOP_COUNTRIES);
        assert_eq!(metrics.distinct_countries, 15);
        // Descending by count throughout.
        for pair in metrics.top_countries.windows(2) {
            assert!(pair[0].1 >= pair[1].1);
        }
    }

    #[test]
    fn histogram_spans_the_unfiltered_year_range() {
        let catalog = Catalog::from_titles(vec![
            title("Movie", "Spain", "PG", 2000),
            title("Movie", "Spain", "PG", 2004),
            title("TV Show", "Spain", "PG", 2002),
        ]);

        // Filter down to a single year; bucket count must stay fixed.
        let metrics = summarize(&catalog, &[2]);
        assert_eq!(metrics.year_start, 2000);
        assert_eq!(metrics.year_counts, vec![0, 0, 1, 0, 0]);
    }

    #[test]
    fn summarize_is_stable_under_repeated_calls() {
        let catalog = Catalog::from_titles(vec![
            title("Movie", "United States", "TV-MA", 2020),
            title("TV Show", "India", "Not Rated", 2019),
        ]);
        let visible = all_indices(&catalog);
        assert_eq!(summarize(&catalog, &visible), summarize(&catalog, &visible));
    }

    #[test]
    fn empty_view_yields_zeroed_metrics() {
        let catalog = Catalog::from_titles(vec![
            title("Movie", "Spain", "PG", 2000),
            title("Movie", "Spain", "PG", 2001),
        ]);

        let metrics = summarize(&catalog, &[]);
        assert_eq!(metrics.total, 0);
        assert_eq!(metrics.distinct_countries, 0);
        assert!(metrics.rating_counts.is_empty());
        // Buckets still cover the source span.
        assert_eq!(metrics.year_counts, vec![0, 0]);
    }
}
