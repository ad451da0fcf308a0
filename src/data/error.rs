use thiserror::Error;

/// Failure to read raw text from a local path or URL.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid location: {0}")]
    InvalidLocation(String),
}

/// The manifest could not be fetched or is not a language → files object.
#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("reading manifest {location}: {source}")]
    Fetch {
        location: String,
        #[source]
        source: FetchError,
    },

    #[error("parsing manifest {location}: {source}")]
    Parse {
        location: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ManifestError {
    /// Manifest location the failure refers to.
    pub fn location(&self) -> &str {
        match self {
            ManifestError::Fetch { location, .. } | ManifestError::Parse { location, .. } => {
                location
            }
        }
    }
}

/// A language load failed; nothing from it was installed.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("no data files found for language: {0}")]
    NotFound(String),

    #[error(transparent)]
    Manifest(#[from] ManifestError),

    #[error("fetching {location}: {source}")]
    Fetch {
        location: String,
        #[source]
        source: FetchError,
    },

    #[error("parsing {location}: {source}")]
    Parse {
        location: String,
        #[source]
        source: csv::Error,
    },
}
