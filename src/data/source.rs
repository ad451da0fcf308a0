use std::path::Path;

use reqwest::Url;

use super::error::FetchError;

// ---------------------------------------------------------------------------
// Fetching raw text
// ---------------------------------------------------------------------------

/// Reads the text behind a location. Manifests and data files both go
/// through this so tests can swap in an in-memory source.
pub trait Fetcher: Send + Sync {
    fn fetch_text(&self, location: &str) -> Result<String, FetchError>;
}

/// Local files and `http(s)` URLs.
#[derive(Debug, Clone, Copy, Default)]
pub struct SourceFetcher;

impl Fetcher for SourceFetcher {
    fn fetch_text(&self, location: &str) -> Result<String, FetchError> {
        if is_url(location) {
            let response = reqwest::blocking::get(location)?.error_for_status()?;
            Ok(response.text()?)
        } else {
            Ok(std::fs::read_to_string(location)?)
        }
    }
}

pub fn is_url(location: &str) -> bool {
    location.starts_with("http://") || location.starts_with("https://")
}

/// Resolve a data-file location listed in a manifest against the manifest's
/// own location, the way a browser resolves a relative fetch.
///
/// * absolute URLs and absolute paths are returned unchanged
/// * a manifest URL is joined per RFC 3986
/// * a manifest path contributes its parent directory
pub fn resolve(manifest_location: &str, location: &str) -> Result<String, FetchError> {
    if is_url(location) {
        return Ok(location.to_string());
    }

    if is_url(manifest_location) {
        let base = Url::parse(manifest_location)
            .map_err(|e| FetchError::InvalidLocation(format!("{manifest_location}: {e}")))?;
        let joined = base
            .join(location)
            .map_err(|e| FetchError::InvalidLocation(format!("{location}: {e}")))?;
        return Ok(joined.to_string());
    }

    let path = Path::new(location);
    if path.is_absolute() {
        return Ok(location.to_string());
    }
    let resolved = match Path::new(manifest_location).parent() {
        Some(dir) => dir.join(path),
        None => path.to_path_buf(),
    };
    Ok(resolved.to_string_lossy().into_owned())
}

// ---------------------------------------------------------------------------
// In-memory source for tests
// ---------------------------------------------------------------------------

#[cfg(test)]
pub(crate) mod memory {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use super::{FetchError, Fetcher};

    /// Serves fixed documents and records every location requested.
    #[derive(Default)]
    pub struct MemoryFetcher {
        documents: HashMap<String, String>,
        pub requested: Mutex<Vec<String>>,
    }

    impl MemoryFetcher {
        pub fn with(mut self, location: &str, text: &str) -> Self {
            self.documents.insert(location.to_string(), text.to_string());
            self
        }
    }

    impl Fetcher for MemoryFetcher {
        fn fetch_text(&self, location: &str) -> Result<String, FetchError> {
            if let Ok(mut requested) = self.requested.lock() {
                requested.push(location.to_string());
            }
            self.documents.get(location).cloned().ok_or_else(|| {
                FetchError::Io(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("{location} not found"),
                ))
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_paths_resolve_against_manifest_directory() {
        let resolved = resolve("site/available_files.json", "data/fr.csv").unwrap();
        assert_eq!(Path::new(&resolved), Path::new("site/data/fr.csv"));

        let bare = resolve("available_files.json", "fr.csv").unwrap();
        assert_eq!(Path::new(&bare), Path::new("fr.csv"));
    }

    #[test]
    fn absolute_locations_are_untouched() {
        assert_eq!(
            resolve("https://example.org/a/available_files.json", "https://cdn.example.org/fr.csv")
                .unwrap(),
            "https://cdn.example.org/fr.csv"
        );
        #[cfg(unix)]
        assert_eq!(resolve("site/m.json", "/srv/fr.csv").unwrap(), "/srv/fr.csv");
    }

    #[test]
    fn relative_urls_join_manifest_url() {
        let resolved =
            resolve("https://example.org/reader/available_files.json", "csv/french_1.csv").unwrap();
        assert_eq!(resolved, "https://example.org/reader/csv/french_1.csv");

        let rooted = resolve("https://example.org/reader/available_files.json", "/fr.csv").unwrap();
        assert_eq!(rooted, "https://example.org/fr.csv");
    }

    #[test]
    fn reads_local_files() {
        let path = std::env::temp_dir().join(format!("ilr-browser-{}.txt", uuid::Uuid::new_v4()));
        std::fs::write(&path, "title\nhello\n").unwrap();
        let text = SourceFetcher.fetch_text(&path.to_string_lossy()).unwrap();
        assert_eq!(text, "title\nhello\n");
        std::fs::remove_file(&path).unwrap();

        assert!(matches!(
            SourceFetcher.fetch_text(&path.to_string_lossy()),
            Err(FetchError::Io(_))
        ));
    }
}
