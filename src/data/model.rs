use std::collections::BTreeSet;

// ---------------------------------------------------------------------------
// Sentinels used when the source leaves a field blank
// ---------------------------------------------------------------------------

/// Fill value for a missing `country` cell.
pub const UNKNOWN_COUNTRY: &str = "Unknown";
/// Fill value for a missing `rating` cell.
pub const NOT_RATED: &str = "Not Rated";

// ---------------------------------------------------------------------------
// Title – one row of the catalog
// ---------------------------------------------------------------------------

/// A single catalog entry (one row of the source CSV).
///
/// After loading, `country` and `rating` are never empty: blank cells are
/// replaced with [`UNKNOWN_COUNTRY`] / [`NOT_RATED`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Title {
    /// Content type, e.g. "Movie" or "TV Show".
    pub title_type: String,
    /// Primary production country.
    pub country: String,
    /// Content rating, e.g. "TV-MA".
    pub rating: String,
    /// Release year.
    pub release_year: i32,
}

// ---------------------------------------------------------------------------
// Catalog – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed catalog with pre-computed column indices.
///
/// Immutable after construction: every user interaction derives filtered
/// views from it, nothing writes back.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    /// All titles (rows), in source-file order.
    pub titles: Vec<Title>,
    /// Sorted unique content types.
    pub types: Vec<String>,
    /// Sorted unique countries.
    pub countries: Vec<String>,
    /// Sorted unique ratings.
    pub ratings: Vec<String>,
    /// Observed `(min, max)` release year, `None` for an empty catalog.
    pub year_span: Option<(i32, i32)>,
}

impl Catalog {
    /// Build column indices from the loaded titles.
    pub fn from_titles(titles: Vec<Title>) -> Self {
        let mut types: BTreeSet<&str> = BTreeSet::new();
        let mut countries: BTreeSet<&str> = BTreeSet::new();
        let mut ratings: BTreeSet<&str> = BTreeSet::new();
        let mut year_span: Option<(i32, i32)> = None;

        for t in &titles {
            types.insert(&t.title_type);
            countries.insert(&t.country);
            ratings.insert(&t.rating);
            year_span = match year_span {
                None => Some((t.release_year, t.release_year)),
                Some((lo, hi)) => Some((lo.min(t.release_year), hi.max(t.release_year))),
            };
        }

        fn own(set: BTreeSet<&str>) -> Vec<String> {
            set.into_iter().map(str::to_string).collect()
        }

        Catalog {
            types: own(types),
            countries: own(countries),
            ratings: own(ratings),
            year_span,
            titles,
        }
    }

    /// Number of titles.
    pub fn len(&self) -> usize {
        self.titles.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }
}
