use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::color::LevelColors;
use crate::data::manifest::display_name;
use crate::data::model::Article;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Article cards (central panel)
// ---------------------------------------------------------------------------

/// Render the current page of results as two columns of cards.
pub fn results(ui: &mut Ui, state: &mut AppState) {
    let Some(collection) = &state.collection else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Select a language to browse articles");
        });
        return;
    };

    let language = display_name(&collection.language);
    let page = state.page_articles();
    if page.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.label("No results found. Try adjusting your search criteria.");
        });
        return;
    }

    let mut saved: Option<String> = None;
    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for pair in page.chunks(2) {
                ui.columns(2, |columns| {
                    for (column, article) in columns.iter_mut().zip(pair) {
                        if card(column, article, &language, &state.level_colors) {
                            saved = Some(article.id.clone());
                        }
                    }
                });
                ui.add_space(8.0);
            }
        });

    if let Some(id) = saved {
        state.save_for_later(&id);
    }
}

/// Draw one card. Returns `true` when "Save for Later" was clicked.
fn card(ui: &mut Ui, article: &Article, language: &str, colors: &LevelColors) -> bool {
    let rtl = article.is_rtl();
    let mut save_clicked = false;

    egui::Frame::group(ui.style()).show(ui, |ui: &mut Ui| {
        ui.set_width(ui.available_width());

        let level = if article.ilr_level.is_empty() {
            "N/A"
        } else {
            article.ilr_level.as_str()
        };
        ui.label(
            RichText::new(format!(" ILR {level} "))
                .color(Color32::WHITE)
                .background_color(colors.color_for(&article.ilr_level))
                .small(),
        );

        directional(ui, rtl, |ui| {
            ui.add(egui::Label::new(RichText::new(&article.title).heading()).wrap());
        });
        ui.label(RichText::new(language).weak());

        ui.add_space(6.0);
        ui.strong("Original Text");
        directional(ui, rtl, |ui| {
            ui.add(egui::Label::new(or_placeholder(&article.summary, "No summary available")).wrap());
        });

        ui.add_space(6.0);
        ui.strong("English Translation");
        ui.add(
            egui::Label::new(or_placeholder(
                &article.translated_summary,
                "No translated summary available",
            ))
            .wrap(),
        );

        ui.add_space(6.0);
        ui.horizontal(|ui: &mut Ui| {
            if article.has_link() {
                ui.hyperlink_to("Read Full Article", &article.link);
            }
            if ui.small_button("Save for Later").clicked() {
                save_clicked = true;
            }
        });
    });

    save_clicked
}

/// Right-align `add` for right-to-left scripts.
fn directional(ui: &mut Ui, rtl: bool, add: impl FnOnce(&mut Ui)) {
    if rtl {
        ui.with_layout(egui::Layout::top_down(egui::Align::Max), add);
    } else {
        add(ui);
    }
}

fn or_placeholder(text: &str, placeholder: &str) -> RichText {
    if text.is_empty() {
        RichText::new(placeholder).italics().weak()
    } else {
        RichText::new(text)
    }
}

// ---------------------------------------------------------------------------
// Pagination bar
// ---------------------------------------------------------------------------

pub fn pagination_bar(ui: &mut Ui, state: &mut AppState) {
    let len = state.visible_indices.len();
    ui.horizontal(|ui: &mut Ui| {
        if ui
            .add_enabled(state.pagination.has_previous(), egui::Button::new("Previous"))
            .clicked()
        {
            state.change_page(-1);
        }
        ui.label(format!(
            "Page {} of {}",
            state.pagination.current_page(),
            state.total_pages()
        ));
        if ui
            .add_enabled(state.pagination.has_next(len), egui::Button::new("Next"))
            .clicked()
        {
            state.change_page(1);
        }
    });
}
