//! Project cards on the home view

use eframe::egui::{self, Color32};
use neo_folio::i18n::Translation;
use neo_folio::models::Project;

use super::remote_image;
use crate::theme::ThemeConfig;

const MAX_TAGS: usize = 3;
const MAX_METRICS: usize = 2;
const COVER_HEIGHT: f32 = 200.0;

/// Returns the id of the clicked project, if any.
/// `scroll_here` brings the section header into view (hero "view projects").
pub fn show(
    ui: &mut egui::Ui,
    projects: &[Project],
    text: &Translation,
    theme: &ThemeConfig,
    scroll_here: bool,
) -> Option<String> {
    let header = ui.vertical(|ui| {
        ui.add_space(48.0);
        ui.label(egui::RichText::new(text.section_work_subtitle).monospace().size(11.0).color(theme.brand));
        ui.heading(egui::RichText::new(text.section_work_title).color(theme.text_strong));
    });
    if scroll_here {
        header.response.scroll_to_me(Some(egui::Align::TOP));
    }
    ui.add_space(16.0);

    let mut selected = None;
    for project in projects {
        if card(ui, project, theme).clicked() {
            selected = Some(project.id.clone());
        }
        ui.add_space(12.0);
    }
    selected
}

fn card(ui: &mut egui::Ui, project: &Project, theme: &ThemeConfig) -> egui::Response {
    let id = ui.make_persistent_id(("project_card", &project.id));
    let hovered = ui.ctx().read_response(id).is_some_and(|r| r.hovered());
    let fill = if hovered { theme.bg_card_hover } else { theme.bg_card };
    let stroke = if hovered { theme.brand } else { theme.border };

    let frame = egui::Frame::none()
        .fill(fill)
        .stroke(egui::Stroke::new(1.0, stroke))
        .rounding(8.0)
        .inner_margin(egui::Margin::same(20.0))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());

            let width = ui.available_width();
            remote_image::cover(ui, &project.image, width, COVER_HEIGHT, theme);
            ui.add_space(12.0);

            ui.horizontal_wrapped(|ui| {
                for tag in project.tags.iter().take(MAX_TAGS) {
                    tag_chip(ui, tag, theme);
                }
            });
            ui.add_space(8.0);
            ui.label(egui::RichText::new(&project.title).size(22.0).strong().color(theme.text_strong));
            ui.label(egui::RichText::new(&project.subtitle).color(theme.secondary));
            ui.add_space(6.0);
            ui.label(egui::RichText::new(&project.description).color(theme.text_normal));
            ui.add_space(10.0);

            ui.horizontal(|ui| {
                for metric in project.metrics.iter().take(MAX_METRICS) {
                    ui.vertical(|ui| {
                        ui.label(egui::RichText::new(&metric.value).size(20.0).monospace().color(theme.brand));
                        ui.label(egui::RichText::new(&metric.label).size(11.0).color(theme.text_muted));
                    });
                    ui.add_space(24.0);
                }
            });
        });

    ui.interact(frame.response.rect, id, egui::Sense::click())
        .on_hover_cursor(egui::CursorIcon::PointingHand)
}

pub fn tag_chip(ui: &mut egui::Ui, tag: &str, theme: &ThemeConfig) {
    egui::Frame::none()
        .fill(Color32::from_rgba_unmultiplied(34, 197, 94, 18))
        .stroke(egui::Stroke::new(1.0, theme.border))
        .rounding(4.0)
        .inner_margin(egui::Margin::symmetric(6.0, 2.0))
        .show(ui, |ui| {
            ui.label(egui::RichText::new(tag).monospace().size(10.0).color(theme.brand));
        });
}
