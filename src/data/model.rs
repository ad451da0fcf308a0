use std::collections::{BTreeMap, BTreeSet};

// ---------------------------------------------------------------------------
// Article – one normalized row of a data file
// ---------------------------------------------------------------------------

/// A single article entry. Every field is populated, absent source columns
/// become empty strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub id: String,
    pub title: String,
    /// Text in the original language.
    pub summary: String,
    /// English translation of `summary`.
    pub translated_summary: String,
    /// ILR proficiency level label (`ilr_quantized` column).
    pub ilr_level: String,
    /// External URL, empty when the source has none.
    pub link: String,
    /// Columns the browser does not interpret, kept verbatim.
    pub extra: BTreeMap<String, String>,
}

impl Article {
    /// Whether the title or summary contains Arabic-script characters and
    /// should be laid out right-to-left.
    pub fn is_rtl(&self) -> bool {
        self.title.chars().chain(self.summary.chars()).any(is_rtl_char)
    }

    pub fn has_link(&self) -> bool {
        !self.link.is_empty()
    }
}

fn is_rtl_char(c: char) -> bool {
    matches!(
        c,
        '\u{0600}'..='\u{06FF}'
            | '\u{0750}'..='\u{077F}'
            | '\u{08A0}'..='\u{08FF}'
            | '\u{FB50}'..='\u{FDFF}'
            | '\u{FE70}'..='\u{FEFF}'
    )
}

// ---------------------------------------------------------------------------
// ArticleCollection – everything loaded for one language
// ---------------------------------------------------------------------------

/// The full dataset of one language with its pre-computed level index.
#[derive(Debug, Clone)]
pub struct ArticleCollection {
    /// Manifest key the collection was loaded for.
    pub language: String,
    /// All articles, in file order then row order.
    pub articles: Vec<Article>,
    /// Sorted set of distinct ILR levels (may contain `""`).
    pub levels: BTreeSet<String>,
}

impl ArticleCollection {
    /// Build the level index from the loaded articles.
    pub fn from_articles(language: impl Into<String>, articles: Vec<Article>) -> Self {
        let levels = derive_levels(&articles);
        ArticleCollection {
            language: language.into(),
            articles,
            levels,
        }
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }
}

/// Distinct ILR levels present in `articles`, lexicographically ordered.
pub fn derive_levels(articles: &[Article]) -> BTreeSet<String> {
    articles.iter().map(|a| a.ilr_level.clone()).collect()
}

#[cfg(test)]
pub(crate) fn article(title: &str, ilr_level: &str) -> Article {
    Article {
        id: format!("id-{title}"),
        title: title.to_string(),
        summary: String::new(),
        translated_summary: String::new(),
        ilr_level: ilr_level.to_string(),
        link: String::new(),
        extra: BTreeMap::new(),
    }
}
