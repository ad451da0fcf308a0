use serde::de::IgnoredAny;
use serde::Deserialize;
use serde_json::{Map, Value as JsonValue};

use super::error::{FetchError, ManifestError};
use super::source::{self, Fetcher};

// ---------------------------------------------------------------------------
// Manifest – language key → data file locations
// ---------------------------------------------------------------------------

/// One language entry of the manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageEntry {
    pub key: String,
    /// Data file locations in the order they are listed.
    pub files: Vec<String>,
}

/// Parsed manifest, languages in document order.
///
/// ```json
/// {
///   "french":  ["csv/french_1.csv", "csv/french_2.csv"],
///   "persian": ["csv/persian.csv"]
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    /// Where the manifest was read from; relative file locations resolve
    /// against it.
    pub location: String,
    pub languages: Vec<LanguageEntry>,
}

/// Value of one manifest key. Anything but a list of strings (`null`, a
/// number, a nested object) lists no files, so only that language fails.
#[derive(Deserialize)]
#[serde(untagged)]
enum FileList {
    Files(Vec<String>),
    Unusable(IgnoredAny),
}

impl FileList {
    fn into_files(self) -> Vec<String> {
        match self {
            FileList::Files(files) => files,
            FileList::Unusable(_) => Vec::new(),
        }
    }
}

impl Manifest {
    pub fn parse(location: &str, text: &str) -> Result<Self, ManifestError> {
        let parse_err = |source| ManifestError::Parse {
            location: location.to_string(),
            source,
        };

        let root: Map<String, JsonValue> = serde_json::from_str(text).map_err(parse_err)?;
        let languages = root
            .into_iter()
            .map(|(key, files)| {
                let files: FileList = serde_json::from_value(files).map_err(parse_err)?;
                Ok(LanguageEntry {
                    key,
                    files: files.into_files(),
                })
            })
            .collect::<Result<Vec<_>, ManifestError>>()?;

        Ok(Manifest {
            location: location.to_string(),
            languages,
        })
    }

    /// Fetch and parse the manifest at `location`.
    pub fn fetch(fetcher: &dyn Fetcher, location: &str) -> Result<Self, ManifestError> {
        let text = fetcher
            .fetch_text(location)
            .map_err(|source| ManifestError::Fetch {
                location: location.to_string(),
                source,
            })?;
        Self::parse(location, &text)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.languages.iter().map(|l| l.key.as_str())
    }

    /// Listed files for `language`, `None` when the key is absent.
    pub fn files(&self, language: &str) -> Option<&[String]> {
        self.languages
            .iter()
            .find(|l| l.key == language)
            .map(|l| l.files.as_slice())
    }

    /// File locations for `language` resolved against the manifest location.
    pub fn resolved_files(&self, language: &str) -> Option<Result<Vec<String>, FetchError>> {
        self.files(language).map(|files| {
            files
                .iter()
                .map(|f| source::resolve(&self.location, f))
                .collect()
        })
    }
}

/// Label for a language key: first letter upper-cased.
pub fn display_name(key: &str) -> String {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
