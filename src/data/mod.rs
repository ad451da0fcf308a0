/// Data layer: core types, loading, filtering and paging.
///
/// Architecture:
/// ```text
///  available_files.json ──► manifest   language → [csv locations]
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  fetch + parse every csv → ArticleCollection
///   └──────────┘
///        │
///        ▼
///   ┌──────────────────┐
///   │ ArticleCollection │  Vec<Article>, ILR level index
///   └──────────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  topic text + level → filtered indices
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ paginate  │  filtered indices → current page
///   └──────────┘
/// ```

pub mod error;
pub mod filter;
pub mod loader;
pub mod manifest;
pub mod model;
pub mod paginate;
pub mod source;
