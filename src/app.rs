use std::sync::Arc;
use std::time::Instant;

use eframe::egui;

use crate::config::AppConfig;
use crate::data::source::SourceFetcher;
use crate::jobs::Jobs;
use crate::state::AppState;
use crate::ui::{cards, overlay, panels};

const DARK_MODE_KEY: &str = "dark_mode";

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct IlrBrowserApp {
    pub state: AppState,
    jobs: Jobs,
}

impl IlrBrowserApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: AppConfig) -> Self {
        let mut state = AppState::new(config);
        if let Some(storage) = cc.storage {
            state.dark_mode = eframe::get_value(storage, DARK_MODE_KEY).unwrap_or(false);
        }
        panels::apply_theme(&cc.egui_ctx, state.dark_mode);

        let jobs = Jobs::new(Arc::new(SourceFetcher));
        jobs.fetch_manifest(&state.config.manifest_location, &cc.egui_ctx);

        Self { state, jobs }
    }
}

impl eframe::App for IlrBrowserApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for result in self.jobs.drain() {
            self.state.apply(result);
        }

        self.state.tick(Instant::now());

        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state, &self.jobs);
        });

        // ---- Bottom panel: pagination ----
        if self.state.collection.is_some() {
            egui::TopBottomPanel::bottom("pagination").show(ctx, |ui| {
                cards::pagination_bar(ui, &mut self.state);
            });
        }

        // ---- Left side panel: search ----
        egui::SidePanel::left("search_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: cards ----
        egui::CentralPanel::default().show(ctx, |ui| {
            cards::results(ui, &mut self.state);
        });

        if self.state.loading {
            overlay::loading_overlay(ctx);
        }
        overlay::toasts(ctx, &mut self.state.notifications);

        // Wake up again for a search armed this frame or the next toast expiry.
        if let Some(wait) = self.state.next_wakeup(Instant::now()) {
            ctx.request_repaint_after(wait);
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, DARK_MODE_KEY, &self.state.dark_mode);
    }
}
