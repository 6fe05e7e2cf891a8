use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use serde::Deserialize;

use super::model::{Catalog, Title, NOT_RATED, UNKNOWN_COUNTRY};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Fixed relative path of the catalog file, matching the published dataset.
pub const DATA_PATH: &str = "netflix_titles.csv";

/// The single failure mode of the loader: the source file cannot be found
/// or read. Converted at the app boundary into an empty dashboard plus a
/// user-facing warning, never propagated further.
#[derive(Debug, thiserror::Error)]
#[error("catalog file '{}' is missing or unreadable", path.display())]
pub struct DataSourceMissing {
    /// Path that was attempted.
    pub path: PathBuf,
    #[source]
    source: csv::Error,
}

static CATALOG: OnceLock<Result<Catalog, DataSourceMissing>> = OnceLock::new();

/// Load the catalog from [`DATA_PATH`], reading the file at most once per
/// process. Repeated calls return the identical cached result.
pub fn load() -> &'static Result<Catalog, DataSourceMissing> {
    CATALOG.get_or_init(|| {
        let result = read_catalog(Path::new(DATA_PATH));
        match &result {
            Ok(catalog) => log::info!(
                "Loaded {} titles spanning {:?} from {DATA_PATH}",
                catalog.len(),
                catalog.year_span,
            ),
            Err(e) => log::warn!("{e}"),
        }
        result
    })
}

// ---------------------------------------------------------------------------
// CSV parsing
// ---------------------------------------------------------------------------

/// One raw CSV row. Only the four columns the dashboard uses are named;
/// any further columns in the file are ignored by serde.
#[derive(Debug, Deserialize)]
struct RawTitle {
    #[serde(rename = "type")]
    title_type: String,
    country: Option<String>,
    rating: Option<String>,
    release_year: i32,
}

/// Read a catalog CSV and normalize its nullable columns: blank `country`
/// becomes [`UNKNOWN_COUNTRY`], blank `rating` becomes [`NOT_RATED`].
pub fn read_catalog(path: &Path) -> Result<Catalog, DataSourceMissing> {
    let missing = |source: csv::Error| DataSourceMissing {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = csv::Reader::from_path(path).map_err(missing)?;
    let mut titles = Vec::new();

    for result in reader.deserialize::<RawTitle>() {
        let raw = result.map_err(missing)?;
        titles.push(Title {
            title_type: raw.title_type,
            country: fill_blank(raw.country, UNKNOWN_COUNTRY),
            rating: fill_blank(raw.rating, NOT_RATED),
            release_year: raw.release_year,
        });
    }

    Ok(Catalog::from_titles(titles))
}

fn fill_blank(value: Option<String>, sentinel: &str) -> String {
    match value {
        Some(s) if !s.trim().is_empty() => s,
        _ => sentinel.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn write_csv(dir: &tempfile::TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn loads_rows_in_file_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(
            &dir,
            "titles.csv",
            "type,country,rating,release_year\n\
             Movie,United States,TV-MA,2020\n\
             TV Show,India,TV-14,2019\n",
        );

        let catalog = read_catalog(&path).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.titles[0].title_type, "Movie");
        assert_eq!(catalog.titles[1].country, "India");
        assert_eq!(catalog.year_span, Some((2019, 2020)));
    }

    #[test]
    fn blank_country_and_rating_get_sentinels() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(
            &dir,
            "titles.csv",
            "type,country,rating,release_year\n\
             Movie,United States,TV-MA,2020\n\
             TV Show,,,2019\n",
        );

        let catalog = read_catalog(&path).unwrap();
        assert_eq!(catalog.titles[1].country, UNKNOWN_COUNTRY);
        assert_eq!(catalog.titles[1].rating, NOT_RATED);
        // No blank value ever survives loading.
        assert!(catalog
            .titles
            .iter()
            .all(|t| !t.country.is_empty() && !t.rating.is_empty()));
    }

    #[test]
    fn extra_columns_are_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(
            &dir,
            "titles.csv",
            "show_id,type,title,country,rating,release_year,duration\n\
             s1,Movie,Example,Spain,PG,2011,90 min\n",
        );

        let catalog = read_catalog(&path).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.titles[0].country, "Spain");
        assert_eq!(catalog.titles[0].release_year, 2011);
    }

    #[test]
    fn missing_file_reports_data_source_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nowhere.csv");

        let err = read_catalog(&path).unwrap_err();
        assert_eq!(err.path, path);
        assert!(err.to_string().contains("missing or unreadable"));
    }

    #[test]
    fn repeated_reads_are_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(
            &dir,
            "titles.csv",
            "type,country,rating,release_year\n\
             Movie,,TV-MA,2020\n",
        );

        let a = read_catalog(&path).unwrap();
        let b = read_catalog(&path).unwrap();
        assert_eq!(a.titles, b.titles);
    }

    #[test]
    fn process_cache_returns_same_reference() {
        // Whatever the first call produced, the second must observe the
        // identical cached value without re-reading the file.
        let first = load();
        let second = load();
        assert!(std::ptr::eq(first, second));
    }
}
