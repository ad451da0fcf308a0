use std::collections::BTreeMap;

use csv::{ReaderBuilder, StringRecord};

use super::error::LoadError;
use super::manifest::Manifest;
use super::model::{Article, ArticleCollection};
use super::source::Fetcher;

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load every data file listed for `language` into one collection.
///
/// The manifest is fetched again on every call so edits to it are picked up
/// without restarting. Loading is all-or-nothing: the first file that fails
/// to fetch or parse aborts the whole load.
pub fn load_language(
    fetcher: &dyn Fetcher,
    manifest_location: &str,
    language: &str,
) -> Result<ArticleCollection, LoadError> {
    let manifest = Manifest::fetch(fetcher, manifest_location)?;

    let files = match manifest.resolved_files(language) {
        Some(Ok(files)) if !files.is_empty() => files,
        Some(Err(source)) => {
            return Err(LoadError::Fetch {
                location: manifest_location.to_string(),
                source,
            })
        }
        _ => return Err(LoadError::NotFound(language.to_string())),
    };

    let mut articles = Vec::new();
    for location in &files {
        let text = fetcher
            .fetch_text(location)
            .map_err(|source| LoadError::Fetch {
                location: location.clone(),
                source,
            })?;
        let rows = parse_articles(&text).map_err(|source| LoadError::Parse {
            location: location.clone(),
            source,
        })?;
        log::debug!("{location}: {} rows", rows.len());
        articles.extend(rows);
    }

    Ok(ArticleCollection::from_articles(language, articles))
}

// ---------------------------------------------------------------------------
// CSV parsing
// ---------------------------------------------------------------------------

/// CSV layout: header row with column names, one article per row.
///
/// Consumed columns: `title`, `summary`, `translated_summary` (or
/// `translated`), `ilr_quantized`, `link`, `id`. Rows shorter than the header
/// are accepted; their missing cells read as empty.
pub fn parse_articles(text: &str) -> Result<Vec<Article>, csv::Error> {
    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .from_reader(text.as_bytes());
    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim_start_matches('\u{feff}').to_string())
        .collect();

    log::debug!("Available fields: {headers:?}");

    reader
        .records()
        .map(|result| result.map(|record| normalize_row(&headers, &record)))
        .collect()
}

/// Turn one CSV row into an [`Article`], filling defaults for absent fields.
pub fn normalize_row(headers: &[String], record: &StringRecord) -> Article {
    let mut fields: BTreeMap<String, String> = headers
        .iter()
        .zip(record.iter())
        .map(|(h, v)| (h.clone(), v.to_string()))
        .collect();

    let mut take = |name: &str| fields.remove(name).unwrap_or_default();

    let title = take("title");
    let summary = take("summary");
    let translated_summary = first_non_empty(take("translated_summary"), take("translated"));
    let ilr_level = take("ilr_quantized");
    let link = take("link");
    let id = take("id");
    let id = if id.is_empty() {
        uuid::Uuid::new_v4().to_string()
    } else {
        id
    };

    Article {
        id,
        title,
        summary,
        translated_summary,
        ilr_level,
        link,
        extra: fields,
    }
}

fn first_non_empty(primary: String, fallback: String) -> String {
    if primary.is_empty() {
        fallback
    } else {
        primary
    }
}
