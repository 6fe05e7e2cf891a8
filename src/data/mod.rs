/// Data layer: core types, loading, filtering, and aggregation.
///
/// Architecture:
/// ```text
///  netflix_titles.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse + null-fill → Catalog (cached once per process)
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Catalog  │  Vec<Title>, unique-value indices, year span
///   └──────────┘
///        │
///        ├──────────────────┐
///        ▼                  ▼
///   ┌──────────┐      ┌──────────┐
///   │  filter   │      │ summary   │
///   │ selected  │─────▶│ counts,   │
///   │ indices   │      │ top-10,   │
///   └──────────┘      │ histogram │
///                      └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
pub mod summary;
