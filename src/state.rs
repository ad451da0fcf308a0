use std::time::{Duration, Instant};

use crate::color::LevelColors;
use crate::config::AppConfig;
use crate::data::error::{LoadError, ManifestError};
use crate::data::filter::{SearchQuery, filtered_indices};
use crate::data::manifest::Manifest;
use crate::data::model::{Article, ArticleCollection};
use crate::data::paginate::{Pagination, paginate};
use crate::debounce::Debouncer;
use crate::jobs::JobResult;
use crate::notify::{Notifications, Severity};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    pub config: AppConfig,

    /// Languages offered by the manifest (None until it has loaded).
    pub manifest: Option<Manifest>,

    /// Language picked in the selector; may still be loading.
    pub selected_language: Option<String>,

    /// Loaded dataset. Replaced only when a load succeeds.
    pub collection: Option<ArticleCollection>,

    /// Badge colour per ILR level of the loaded collection.
    pub level_colors: LevelColors,

    /// Topic text and level as currently entered in the inputs.
    pub query: SearchQuery,

    /// Indices of articles passing the last evaluated search.
    pub visible_indices: Vec<usize>,

    pub pagination: Pagination,

    /// Delays search evaluation while the user is typing.
    pub debouncer: Debouncer,

    pub notifications: Notifications,

    /// Whether the latest language load is still in flight.
    pub loading: bool,

    pub dark_mode: bool,

    /// Sequence number of the latest language load request.
    generation: u64,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            pagination: Pagination::new(config.page_size),
            debouncer: Debouncer::new(config.debounce),
            config,
            manifest: None,
            selected_language: None,
            collection: None,
            level_colors: LevelColors::default(),
            query: SearchQuery::default(),
            visible_indices: Vec::new(),
            notifications: Notifications::default(),
            loading: false,
            dark_mode: false,
            generation: 0,
        }
    }

    // -- Loading --------------------------------------------------------------

    /// Point the app at another manifest. The language list and selection
    /// are cleared until the new manifest arrives, and any language load
    /// still running against the old manifest becomes stale. The articles
    /// already shown stay until another language is loaded.
    pub fn set_manifest_location(&mut self, location: String) {
        self.config.manifest_location = location;
        self.manifest = None;
        self.selected_language = None;
        self.generation += 1;
        self.loading = false;
    }

    /// Install a fetched manifest, or report why it failed. Results for a
    /// location other than the current one are dropped.
    pub fn apply_manifest(&mut self, result: Result<Manifest, ManifestError>) {
        let location = match &result {
            Ok(manifest) => manifest.location.as_str(),
            Err(e) => e.location(),
        };
        if location != self.config.manifest_location {
            log::debug!(
                "Discarding manifest from {location}, current is {}",
                self.config.manifest_location
            );
            return;
        }

        match result {
            Ok(manifest) => {
                log::info!(
                    "Manifest {} lists {} languages",
                    manifest.location,
                    manifest.languages.len()
                );
                self.manifest = Some(manifest);
            }
            Err(e) => {
                log::error!("Error loading available languages: {e:#}");
                self.manifest = None;
                self.notifications.push(
                    "Failed to load available languages. Please try again later.",
                    Severity::Danger,
                );
            }
        }
    }

    /// Record a language selection and return the generation the load must
    /// report back with. Any load started earlier becomes stale.
    pub fn begin_language_load(&mut self, language: &str) -> u64 {
        self.generation += 1;
        self.selected_language = Some(language.to_string());
        self.loading = true;
        self.generation
    }

    /// Install the outcome of a language load.
    ///
    /// Returns `false` when the load was superseded by a newer selection; its
    /// result is dropped and the loading flag is left to the newer load.
    pub fn finish_language_load(
        &mut self,
        generation: u64,
        language: &str,
        result: Result<ArticleCollection, LoadError>,
    ) -> bool {
        if generation != self.generation {
            log::debug!(
                "Discarding stale load of {language} (generation {generation}, latest {})",
                self.generation
            );
            return false;
        }
        self.loading = false;

        match result {
            Ok(collection) => {
                log::info!(
                    "Loaded {} articles for {language} with levels {:?}",
                    collection.len(),
                    collection.levels
                );
                let message = format!("Loaded {} articles for {language}", collection.len());
                self.set_collection(collection);
                self.notifications.push(message, Severity::Success);
            }
            Err(e) => {
                log::error!("Error loading data for {language}: {e:#}");
                self.notifications.push(
                    "An error occurred while loading the data. Please try again.",
                    Severity::Danger,
                );
            }
        }
        true
    }

    pub fn apply(&mut self, result: JobResult) {
        match result {
            JobResult::Manifest(result) => self.apply_manifest(result),
            JobResult::Language {
                generation,
                language,
                result,
            } => {
                self.finish_language_load(generation, &language, result);
            }
        }
    }

    /// Ingest a newly loaded collection; the level selector is rebuilt so the
    /// level choice goes back to "All Levels".
    pub fn set_collection(&mut self, collection: ArticleCollection) {
        self.level_colors = LevelColors::new(&collection.levels);
        self.collection = Some(collection);
        self.query.level = None;
        self.search();
    }

    // -- Searching ------------------------------------------------------------

    /// Evaluate the current inputs now and go back to page 1.
    pub fn search(&mut self) {
        self.debouncer.cancel();
        self.visible_indices = match &self.collection {
            Some(collection) => filtered_indices(&collection.articles, &self.query),
            None => Vec::new(),
        };
        self.pagination.reset();
    }

    /// An input changed; search once the user has been idle long enough.
    pub fn input_changed(&mut self, now: Instant) {
        self.debouncer.schedule(now);
    }

    pub fn set_level(&mut self, level: Option<String>, now: Instant) {
        if self.query.level != level {
            self.query.level = level;
            self.input_changed(now);
        }
    }

    /// Run due timers. Returns `true` if a search was evaluated.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.notifications.expire(now);
        if self.debouncer.poll(now) {
            self.search();
            true
        } else {
            false
        }
    }

    /// How long the UI may sleep before a pending search or toast expiry.
    pub fn next_wakeup(&self, now: Instant) -> Option<Duration> {
        let toast = self
            .notifications
            .next_expiry()
            .map(|expiry| expiry.saturating_duration_since(now));
        match (self.debouncer.remaining(now), toast) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    // -- Paging ---------------------------------------------------------------

    pub fn change_page(&mut self, delta: isize) -> bool {
        self.pagination.change_page(delta, self.visible_indices.len())
    }

    pub fn total_pages(&self) -> usize {
        self.pagination.total_pages(self.visible_indices.len())
    }

    /// Articles on the current page, in filtered order.
    pub fn page_articles(&self) -> Vec<&Article> {
        let Some(collection) = &self.collection else {
            return Vec::new();
        };
        let (page, _) = paginate(
            &self.visible_indices,
            self.pagination.current_page(),
            self.pagination.page_size(),
        );
        page.iter()
            .filter_map(|&i| collection.articles.get(i))
            .collect()
    }

    // -- Misc -----------------------------------------------------------------

    pub fn language_keys(&self) -> Vec<String> {
        self.manifest
            .as_ref()
            .map(|m| m.keys().map(str::to_string).collect())
            .unwrap_or_default()
    }

    pub fn save_for_later(&mut self, article_id: &str) {
        self.notifications
            .push(format!("Article {article_id} saved for later"), Severity::Info);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::article;
    use crate::notify::Notification;

    fn collection(language: &str, n: usize) -> ArticleCollection {
        let articles = (0..n)
            .map(|i| article(&format!("{language} {i}"), if i % 2 == 0 { "2" } else { "3" }))
            .collect();
        ArticleCollection::from_articles(language, articles)
    }

    fn last_toast(state: &AppState) -> Option<&Notification> {
        state.notifications.iter().last()
    }

    #[test]
    fn successful_load_installs_collection_and_notifies() {
        let mut state = AppState::new(AppConfig::default());
        let generation = state.begin_language_load("french");
        assert!(state.loading);

        assert!(state.finish_language_load(generation, "french", Ok(collection("french", 120))));
        assert!(!state.loading);
        assert_eq!(state.visible_indices.len(), 120);
        assert_eq!(state.total_pages(), 3);
        assert_eq!(state.page_articles().len(), 50);

        let toast = last_toast(&state).unwrap();
        assert_eq!(toast.message, "Loaded 120 articles for french");
        assert_eq!(toast.severity, Severity::Success);
    }

    #[test]
    fn failed_load_keeps_previous_collection() {
        let mut state = AppState::new(AppConfig::default());
        let first = state.begin_language_load("french");
        state.finish_language_load(first, "french", Ok(collection("french", 3)));

        let second = state.begin_language_load("klingon");
        let applied = state.finish_language_load(
            second,
            "klingon",
            Err(LoadError::NotFound("klingon".into())),
        );
        assert!(applied);
        assert!(!state.loading);
        assert_eq!(state.collection.as_ref().unwrap().language, "french");
        assert_eq!(state.visible_indices.len(), 3);
        assert_eq!(last_toast(&state).unwrap().severity, Severity::Danger);
    }

    #[test]
    fn stale_completion_is_discarded() {
        let mut state = AppState::new(AppConfig::default());
        let slow = state.begin_language_load("french");
        let fast = state.begin_language_load("persian");

        assert!(state.finish_language_load(fast, "persian", Ok(collection("persian", 2))));
        assert!(!state.finish_language_load(slow, "french", Ok(collection("french", 9))));

        assert_eq!(state.collection.as_ref().unwrap().language, "persian");
        assert_eq!(state.selected_language.as_deref(), Some("persian"));
    }

    #[test]
    fn stale_completion_does_not_clear_loading() {
        let mut state = AppState::new(AppConfig::default());
        let slow = state.begin_language_load("french");
        let _latest = state.begin_language_load("persian");

        state.finish_language_load(slow, "french", Err(LoadError::NotFound("french".into())));
        assert!(state.loading);
        assert!(state.notifications.is_empty());
    }

    #[test]
    fn new_search_resets_page() {
        let mut state = AppState::new(AppConfig::default());
        state.set_collection(collection("french", 120));
        assert!(state.change_page(2));
        assert_eq!(state.pagination.current_page(), 3);
        assert!(!state.change_page(1));

        state.query.text = "french 1".to_string();
        state.search();
        assert_eq!(state.pagination.current_page(), 1);
        // "french 1", "french 10".."french 19", "french 100".."french 119"
        assert_eq!(state.visible_indices.len(), 1 + 10 + 20);
        assert_eq!(state.total_pages(), 1);
    }

    #[test]
    fn typing_is_debounced() {
        let mut state = AppState::new(AppConfig::default());
        state.set_collection(collection("french", 10));

        let start = Instant::now();
        state.query.text = "french 3".to_string();
        state.input_changed(start);
        assert!(!state.tick(start + Duration::from_millis(100)));
        assert_eq!(state.visible_indices.len(), 10);

        state.query.text = "french 4".to_string();
        state.input_changed(start + Duration::from_millis(200));
        assert!(!state.tick(start + Duration::from_millis(450)));
        assert!(state.tick(start + Duration::from_millis(500)));
        assert_eq!(state.visible_indices, vec![4]);
        assert!(!state.tick(start + Duration::from_millis(900)));
    }

    #[test]
    fn level_change_is_debounced_and_combined_with_text() {
        let mut state = AppState::new(AppConfig::default());
        state.set_collection(collection("french", 6));
        let now = Instant::now();

        state.set_level(Some("3".into()), now);
        assert!(state.debouncer.remaining(now).is_some());
        state.tick(now + Duration::from_millis(300));
        assert_eq!(state.visible_indices, vec![1, 3, 5]);

        // Explicit search skips the wait.
        state.query.text = "5".to_string();
        state.input_changed(now);
        state.search();
        assert_eq!(state.debouncer.remaining(now), None);
        assert_eq!(state.visible_indices, vec![5]);
    }

    #[test]
    fn new_collection_clears_level() {
        let mut state = AppState::new(AppConfig::default());
        state.set_collection(collection("french", 4));
        state.query.level = Some("3".into());
        state.search();
        assert_eq!(state.visible_indices.len(), 2);

        state.set_collection(collection("persian", 4));
        assert_eq!(state.query.level, None);
        assert_eq!(state.visible_indices.len(), 4);
    }

    #[test]
    fn manifest_failure_leaves_languages_empty() {
        let mut state = AppState::new(AppConfig::default());
        let err = Manifest::parse("available_files.json", "nope").unwrap_err();
        state.apply(JobResult::Manifest(Err(err)));
        assert!(state.language_keys().is_empty());
        let toast = last_toast(&state).unwrap();
        assert_eq!(
            toast.message,
            "Failed to load available languages. Please try again later."
        );
    }

    #[test]
    fn manifest_from_previous_location_is_dropped() {
        let mut state = AppState::new(AppConfig::default());
        state.set_manifest_location("b.json".to_string());

        let old = Manifest::parse("available_files.json", r#"{"french": ["fr.csv"]}"#).unwrap();
        state.apply(JobResult::Manifest(Ok(old)));
        assert!(state.manifest.is_none());

        let old_err = Manifest::parse("available_files.json", "nope").unwrap_err();
        state.apply(JobResult::Manifest(Err(old_err)));
        assert!(state.notifications.is_empty());

        let current = Manifest::parse("b.json", r#"{"persian": ["fa.csv"]}"#).unwrap();
        state.apply(JobResult::Manifest(Ok(current)));
        assert_eq!(state.language_keys(), vec!["persian"]);
    }

    #[test]
    fn switching_manifest_clears_selection_and_pending_load() {
        let mut state = AppState::new(AppConfig::default());
        let first = state.begin_language_load("french");
        state.finish_language_load(first, "french", Ok(collection("french", 3)));

        let pending = state.begin_language_load("german");
        state.set_manifest_location("b.json".to_string());
        assert_eq!(state.selected_language, None);
        assert!(!state.loading);

        assert!(!state.finish_language_load(pending, "german", Ok(collection("german", 5))));
        assert_eq!(state.collection.as_ref().unwrap().language, "french");
    }

    #[test]
    fn wakeup_follows_pending_search_and_toasts() {
        let mut state = AppState::new(AppConfig::default());
        let now = Instant::now();
        assert_eq!(state.next_wakeup(now), None);

        state.input_changed(now);
        assert_eq!(state.next_wakeup(now), Some(Duration::from_millis(300)));

        state.search();
        state.notifications.push_at("hello", Severity::Info, now);
        assert_eq!(state.next_wakeup(now), Some(crate::notify::TOAST_LIFETIME));

        state.input_changed(now);
        assert_eq!(state.next_wakeup(now), Some(Duration::from_millis(300)));
    }

    #[test]
    fn empty_state_has_one_empty_page() {
        let mut state = AppState::new(AppConfig::default());
        state.search();
        assert!(state.page_articles().is_empty());
        assert_eq!(state.total_pages(), 1);
        assert!(!state.change_page(1));
        assert!(!state.change_page(-1));
    }
}
