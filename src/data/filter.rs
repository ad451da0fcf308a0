use super::model::Article;

// ---------------------------------------------------------------------------
// Search criteria
// ---------------------------------------------------------------------------

/// Topic text plus optional ILR level restriction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    /// Free text, matched case-insensitively. Empty matches everything.
    pub text: String,
    /// Exact ILR level. `None` means "All Levels".
    pub level: Option<String>,
}

impl SearchQuery {
    pub fn new(text: impl Into<String>, level: Option<String>) -> Self {
        Self {
            text: text.into(),
            level,
        }
    }
}

/// Return indices of articles matching `query`, in source order.
///
/// An article passes when:
/// * the query text is empty, or `title`, `summary` or `translated_summary`
///   contains it ignoring case, and
/// * no level is selected, or its `ilr_level` equals the selected level.
pub fn filtered_indices(articles: &[Article], query: &SearchQuery) -> Vec<usize> {
    let needle = query.text.to_lowercase();
    let level = query.level.as_deref();

    articles
        .iter()
        .enumerate()
        .filter(|(_, a)| level.map_or(true, |l| a.ilr_level == l))
        .filter(|(_, a)| matches_text(a, &needle))
        .map(|(i, _)| i)
        .collect()
}

/// `needle` must already be lower-cased.
fn matches_text(article: &Article, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    [
        &article.title,
        &article.summary,
        &article.translated_summary,
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(needle))
}
