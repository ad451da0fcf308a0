use std::time::Instant;

use eframe::egui::{self, Ui};

use crate::data::manifest::display_name;
use crate::jobs::Jobs;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – search widgets
// ---------------------------------------------------------------------------

/// Render the left search panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Search");
    ui.separator();

    if state.collection.is_none() {
        ui.label("Select a language to load articles.");
        return;
    }

    ui.strong("Topic");
    let topic = ui.add(
        egui::TextEdit::singleline(&mut state.query.text)
            .hint_text("e.g. weather")
            .desired_width(f32::INFINITY),
    );
    if topic.changed() {
        state.input_changed(Instant::now());
    }
    if topic.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
        state.search();
    }
    ui.add_space(6.0);

    ui.strong("ILR level");
    let levels: Vec<String> = state
        .collection
        .as_ref()
        .map(|c| c.levels.iter().cloned().collect())
        .unwrap_or_default();
    let current = state.query.level.clone();
    let selected_text = match &current {
        Some(level) => format!("ILR {level}"),
        None => "All Levels".to_string(),
    };
    egui::ComboBox::from_id_salt("ilr_level")
        .selected_text(selected_text)
        .width(ui.available_width())
        .show_ui(ui, |ui: &mut Ui| {
            if ui.selectable_label(current.is_none(), "All Levels").clicked() {
                state.set_level(None, Instant::now());
            }
            for level in levels {
                let is_selected = current.as_deref() == Some(level.as_str());
                let text = egui::RichText::new(format!("ILR {level}"))
                    .color(state.level_colors.color_for(&level));
                if ui.selectable_label(is_selected, text).clicked() {
                    state.set_level(Some(level), Instant::now());
                }
            }
        });
    ui.add_space(6.0);

    if ui.button("Search").clicked() {
        state.search();
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState, jobs: &Jobs) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open manifest…").clicked() {
                open_manifest_dialog(state, jobs, ui.ctx());
                ui.close_menu();
            }
            if ui.button("Reload languages").clicked() {
                jobs.fetch_manifest(&state.config.manifest_location, ui.ctx());
                ui.close_menu();
            }
        });

        ui.separator();
        language_selector(ui, state, jobs);
        ui.separator();

        if let Some(collection) = &state.collection {
            ui.label(format!(
                "{} articles loaded, {} matching",
                collection.len(),
                state.visible_indices.len()
            ));
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui: &mut Ui| {
            if ui.checkbox(&mut state.dark_mode, "Dark mode").changed() {
                apply_theme(ui.ctx(), state.dark_mode);
            }
        });
    });
}

fn language_selector(ui: &mut Ui, state: &mut AppState, jobs: &Jobs) {
    let keys = state.language_keys();
    let selected = state.selected_language.clone();
    let selected_text = selected
        .as_deref()
        .map(display_name)
        .unwrap_or_else(|| "Select language".to_string());

    egui::ComboBox::from_id_salt("language")
        .selected_text(selected_text)
        .show_ui(ui, |ui: &mut Ui| {
            if keys.is_empty() {
                ui.label("No languages available");
            }
            for key in &keys {
                let is_selected = selected.as_deref() == Some(key.as_str());
                if ui.selectable_label(is_selected, display_name(key)).clicked() && !is_selected {
                    let generation = state.begin_language_load(key);
                    jobs.load_language(generation, &state.config.manifest_location, key, ui.ctx());
                }
            }
        });
}

pub fn apply_theme(ctx: &egui::Context, dark_mode: bool) {
    ctx.set_visuals(if dark_mode {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_manifest_dialog(state: &mut AppState, jobs: &Jobs, ctx: &egui::Context) {
    let file = rfd::FileDialog::new()
        .set_title("Open article manifest")
        .add_filter("Manifest", &["json"])
        .pick_file();

    if let Some(path) = file {
        let location = path.to_string_lossy().into_owned();
        log::info!("Switching manifest to {location}");
        state.set_manifest_location(location);
        jobs.fetch_manifest(&state.config.manifest_location, ctx);
    }
}
