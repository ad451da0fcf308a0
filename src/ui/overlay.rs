use eframe::egui::{self, Color32, RichText};

use crate::notify::{Notifications, Severity};

/// Dim the window and show a spinner while a language is loading.
pub fn loading_overlay(ctx: &egui::Context) {
    egui::Area::new(egui::Id::new("loading_backdrop"))
        .order(egui::Order::Foreground)
        .fixed_pos(egui::Pos2::ZERO)
        .show(ctx, |ui| {
            let screen = ui.ctx().screen_rect();
            ui.allocate_space(screen.size());
            ui.painter()
                .rect_filled(screen, 0.0, Color32::from_black_alpha(120));
        });

    egui::Area::new(egui::Id::new("loading_spinner"))
        .order(egui::Order::Tooltip)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add(egui::Spinner::new().size(32.0));
                ui.label(RichText::new("Loading articles…").color(Color32::WHITE));
            });
        });
}

fn severity_color(severity: Severity) -> Color32 {
    match severity {
        Severity::Info => Color32::from_rgb(13, 202, 240),
        Severity::Success => Color32::from_rgb(25, 135, 84),
        Severity::Danger => Color32::from_rgb(220, 53, 69),
    }
}

/// Stack of toasts in the bottom-right corner; each has a close button.
pub fn toasts(ctx: &egui::Context, notifications: &mut Notifications) {
    if notifications.is_empty() {
        return;
    }

    let mut dismissed = None;
    egui::Area::new(egui::Id::new("toasts"))
        .order(egui::Order::Tooltip)
        .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-12.0, -40.0))
        .show(ctx, |ui| {
            for (index, toast) in notifications.iter().enumerate() {
                egui::Frame::popup(ui.style())
                    .fill(severity_color(toast.severity))
                    .show(ui, |ui| {
                        ui.set_max_width(320.0);
                        ui.horizontal(|ui| {
                            ui.label(RichText::new(&toast.message).color(Color32::WHITE));
                            if ui.small_button("✕").clicked() {
                                dismissed = Some(index);
                            }
                        });
                    });
                ui.add_space(4.0);
            }
        });

    if let Some(index) = dismissed {
        notifications.dismiss(index);
    }
}
