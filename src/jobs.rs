use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;

use eframe::egui;

use crate::data::error::{LoadError, ManifestError};
use crate::data::loader;
use crate::data::manifest::Manifest;
use crate::data::model::ArticleCollection;
use crate::data::source::Fetcher;

/// Outcome of a background fetch, delivered to the UI thread.
#[derive(Debug)]
pub enum JobResult {
    Manifest(Result<Manifest, ManifestError>),
    Language {
        generation: u64,
        language: String,
        result: Result<ArticleCollection, LoadError>,
    },
}

/// Runs manifest and dataset loads on worker threads so the UI never blocks.
/// Results arrive in completion order, not request order.
pub struct Jobs {
    fetcher: Arc<dyn Fetcher>,
    sender: Sender<JobResult>,
    receiver: Receiver<JobResult>,
}

impl Jobs {
    pub fn new(fetcher: Arc<dyn Fetcher>) -> Self {
        let (sender, receiver) = mpsc::channel();
        Self {
            fetcher,
            sender,
            receiver,
        }
    }

    pub fn fetch_manifest(&self, location: &str, ctx: &egui::Context) {
        let location = location.to_string();
        self.spawn(ctx, move |fetcher| {
            JobResult::Manifest(Manifest::fetch(fetcher, &location))
        });
    }

    pub fn load_language(
        &self,
        generation: u64,
        manifest_location: &str,
        language: &str,
        ctx: &egui::Context,
    ) {
        let manifest_location = manifest_location.to_string();
        let language = language.to_string();
        self.spawn(ctx, move |fetcher| {
            let result = loader::load_language(fetcher, &manifest_location, &language);
            JobResult::Language {
                generation,
                language,
                result,
            }
        });
    }

    /// Every result that has arrived since the last call.
    pub fn drain(&self) -> Vec<JobResult> {
        self.receiver.try_iter().collect()
    }

    fn spawn<F>(&self, ctx: &egui::Context, job: F)
    where
        F: FnOnce(&dyn Fetcher) -> JobResult + Send + 'static,
    {
        let fetcher = Arc::clone(&self.fetcher);
        let sender = self.sender.clone();
        let ctx = ctx.clone();

        std::thread::spawn(move || {
            let result = job(fetcher.as_ref());
            // The receiver only goes away when the app is shutting down.
            let _ = sender.send(result);
            ctx.request_repaint();
        });
    }

    #[cfg(test)]
    pub fn recv_timeout(&self, timeout: std::time::Duration) -> Option<JobResult> {
        self.receiver.recv_timeout(timeout).ok()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::data::source::memory::MemoryFetcher;

    const TIMEOUT: Duration = Duration::from_secs(5);

    fn jobs() -> Jobs {
        let fetcher = MemoryFetcher::default()
            .with("available_files.json", r#"{"french": ["fr.csv"]}"#)
            .with("fr.csv", "title,ilr_quantized\nMétéo,2\n");
        Jobs::new(Arc::new(fetcher))
    }

    #[test]
    fn manifest_result_is_delivered() {
        let jobs = jobs();
        jobs.fetch_manifest("available_files.json", &egui::Context::default());
        match jobs.recv_timeout(TIMEOUT) {
            Some(JobResult::Manifest(Ok(manifest))) => {
                assert_eq!(manifest.keys().collect::<Vec<_>>(), vec!["french"]);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn language_result_carries_generation() {
        let jobs = jobs();
        let ctx = egui::Context::default();
        jobs.load_language(7, "available_files.json", "french", &ctx);
        match jobs.recv_timeout(TIMEOUT) {
            Some(JobResult::Language {
                generation,
                language,
                result: Ok(collection),
            }) => {
                assert_eq!(generation, 7);
                assert_eq!(language, "french");
                assert_eq!(collection.len(), 1);
            }
            other => panic!("unexpected result: {other:?}"),
        }

        jobs.load_language(8, "available_files.json", "klingon", &ctx);
        assert!(matches!(
            jobs.recv_timeout(TIMEOUT),
            Some(JobResult::Language {
                generation: 8,
                result: Err(LoadError::NotFound(_)),
                ..
            })
        ));
        assert!(jobs.drain().is_empty());
    }
}
