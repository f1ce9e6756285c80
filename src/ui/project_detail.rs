//! Project detail page: sidebar (TOC + stats) and the rendered regions

use eframe::egui::{self, Color32};
use neo_folio::i18n::Translation;
use neo_folio::render::{Anchor, CardRegion, ProjectPage, SectionRegion, TocEntry};

use super::project_list::tag_chip;
use super::remote_image;
use super::rich_text::{rich_label, rich_list};
use crate::theme::ThemeConfig;

const SIDEBAR_WIDTH: f32 = 220.0;
const HERO_IMAGE_HEIGHT: f32 = 360.0;

#[derive(Default)]
pub struct ProjectDetailView {
    /// 目录点击后，下一帧滚动到该锚点
    pending_anchor: Option<Anchor>,
}

impl ProjectDetailView {
    pub fn reset(&mut self) {
        self.pending_anchor = None;
    }

    /// Returns `true` when "Return" was clicked.
    pub fn show(&mut self, ui: &mut egui::Ui, page: &ProjectPage<'_>, text: &Translation, theme: &ThemeConfig) -> bool {
        let back = return_button(ui, text, theme);
        ui.add_space(12.0);

        ui.horizontal_wrapped(|ui| {
            for tag in page.tags {
                tag_chip(ui, tag, theme);
            }
        });
        ui.add_space(8.0);
        ui.label(egui::RichText::new(page.title).size(40.0).strong().color(theme.text_strong));
        ui.label(egui::RichText::new(page.subtitle).size(18.0).color(theme.secondary));
        ui.add_space(16.0);
        let width = ui.available_width();
        remote_image::cover(ui, page.image, width, HERO_IMAGE_HEIGHT, theme);
        ui.add_space(24.0);

        ui.horizontal_top(|ui| {
            ui.vertical(|ui| {
                ui.set_width(SIDEBAR_WIDTH);
                self.sidebar(ui, page, text, theme);
            });
            ui.add_space(24.0);
            ui.vertical(|ui| {
                self.body(ui, page, text, theme);
            });
        });

        back
    }

    fn sidebar(&mut self, ui: &mut egui::Ui, page: &ProjectPage<'_>, text: &Translation, theme: &ThemeConfig) {
        ui.label(egui::RichText::new(text.detail_toc).monospace().size(11.0).color(theme.brand));
        ui.add_space(4.0);
        for entry in &page.toc {
            let label = toc_label(entry, text);
            let link = egui::Label::new(egui::RichText::new(label).color(theme.text_normal))
                .truncate()
                .sense(egui::Sense::click());
            let resp = ui.add(link).on_hover_cursor(egui::CursorIcon::PointingHand);
            if resp.clicked() {
                self.pending_anchor = Some(entry.anchor);
            }
        }

        ui.add_space(20.0);
        ui.label(egui::RichText::new(text.detail_stats).monospace().size(11.0).color(theme.brand));
        ui.add_space(4.0);
        for metric in page.stats {
            ui.label(egui::RichText::new(&metric.value).size(22.0).monospace().color(theme.text_strong));
            ui.label(egui::RichText::new(&metric.label).size(11.0).color(theme.text_muted));
            ui.add_space(6.0);
        }
    }

    fn body(&mut self, ui: &mut egui::Ui, page: &ProjectPage<'_>, text: &Translation, theme: &ThemeConfig) {
        self.anchor_heading(ui, Anchor::Overview, text.detail_background, theme);
        rich_label(ui, &page.overview, theme.text_normal, theme.text_strong);
        ui.add_space(24.0);

        self.anchor_heading(ui, Anchor::Role, text.detail_role, theme);
        ui.label(egui::RichText::new(page.role).color(theme.text_normal));
        ui.add_space(24.0);

        for (idx, region) in page.sections.iter().enumerate() {
            self.anchor_heading(ui, Anchor::Section(idx), region.title(), theme);
            section(ui, idx, region, text, theme);
            ui.add_space(28.0);
        }

        self.anchor_heading(ui, Anchor::Outcome, text.detail_outcome, theme);
        egui::Frame::none()
            .fill(theme.bg_card)
            .stroke(egui::Stroke::new(1.0, theme.border))
            .rounding(8.0)
            .inner_margin(egui::Margin::same(16.0))
            .show(ui, |ui| {
                rich_label(ui, &page.outcome, theme.text_normal, theme.text_strong);
            });
    }

    fn anchor_heading(&mut self, ui: &mut egui::Ui, anchor: Anchor, title: &str, theme: &ThemeConfig) {
        let resp = ui.label(egui::RichText::new(title).size(22.0).strong().color(theme.text_strong));
        if self.pending_anchor == Some(anchor) {
            resp.scroll_to_me(Some(egui::Align::TOP));
            self.pending_anchor = None;
        }
        ui.add_space(6.0);
    }
}

fn toc_label<'a>(entry: &TocEntry<'a>, text: &'a Translation) -> &'a str {
    match entry.anchor {
        Anchor::Overview => text.detail_overview,
        Anchor::Role => text.detail_role,
        Anchor::Section(_) => entry.label.unwrap_or_default(),
        Anchor::Outcome => text.detail_outcome,
    }
}

fn return_button(ui: &mut egui::Ui, text: &Translation, theme: &ThemeConfig) -> bool {
    let button = egui::Button::new(egui::RichText::new(format!("← {}", text.detail_return)).monospace().color(theme.brand))
        .fill(Color32::TRANSPARENT)
        .stroke(egui::Stroke::new(1.0, theme.border));
    ui.add(button).clicked()
}

/// Unknown project id: nothing but the way back
pub fn show_not_found(ui: &mut egui::Ui, text: &Translation, theme: &ThemeConfig) -> bool {
    let back = return_button(ui, text, theme);
    if !text.detail_not_found.is_empty() {
        ui.label(egui::RichText::new(text.detail_not_found).color(theme.text_muted));
    }
    back
}

fn section(ui: &mut egui::Ui, idx: usize, region: &SectionRegion<'_>, text: &Translation, theme: &ThemeConfig) {
    match region {
        SectionRegion::Standard { body, items, .. } => {
            rich_label(ui, body, theme.text_normal, theme.text_strong);
            if !items.is_empty() {
                ui.add_space(8.0);
                rich_list(ui, items, theme.brand, theme.text_normal, theme.text_strong);
            }
        }
        SectionRegion::Split { body, outcomes, .. } => {
            ui.columns(2, |cols| {
                rich_label(&mut cols[0], body, theme.text_normal, theme.text_strong);
                egui::Frame::none()
                    .fill(theme.bg_card)
                    .stroke(egui::Stroke::new(1.0, theme.border))
                    .rounding(8.0)
                    .inner_margin(egui::Margin::same(14.0))
                    .show(&mut cols[1], |ui| {
                        ui.label(egui::RichText::new(text.detail_key_outcomes).monospace().size(11.0).color(theme.brand));
                        ui.add_space(6.0);
                        rich_list(ui, outcomes, theme.secondary, theme.text_normal, theme.text_strong);
                    });
            });
        }
        SectionRegion::GridCards { body, cards, .. } => {
            rich_label(ui, body, theme.text_normal, theme.text_strong);
            ui.add_space(10.0);
            for row in cards.chunks(2) {
                ui.columns(2, |cols| {
                    for (col, card) in cols.iter_mut().zip(row) {
                        grid_card(col, card, theme);
                    }
                });
                ui.add_space(8.0);
            }
        }
        SectionRegion::Terminal { body, code, .. } => {
            rich_label(ui, body, theme.text_normal, theme.text_strong);
            ui.add_space(10.0);
            egui::Frame::none()
                .fill(Color32::from_black_alpha(160))
                .stroke(egui::Stroke::new(1.0, theme.border))
                .rounding(8.0)
                .inner_margin(egui::Margin::same(14.0))
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.horizontal(|ui| {
                        for color in [Color32::from_rgb(239, 68, 68), Color32::from_rgb(234, 179, 8), theme.brand] {
                            let (dot, _) = ui.allocate_exact_size(egui::vec2(10.0, 10.0), egui::Sense::hover());
                            ui.painter().circle_filled(dot.center(), 5.0, color);
                        }
                    });
                    ui.add_space(8.0);
                    egui::ScrollArea::horizontal().id_salt(terminal_scroll_id(idx)).show(ui, |ui| {
                        ui.label(egui::RichText::new(*code).monospace().color(theme.text_normal));
                    });
                });
        }
    }
}

/// Each terminal block keeps its own horizontal scroll offset
fn terminal_scroll_id(section: usize) -> egui::Id {
    egui::Id::new(("terminal_code", section))
}

fn grid_card(ui: &mut egui::Ui, card: &CardRegion<'_>, theme: &ThemeConfig) {
    egui::Frame::none()
        .fill(theme.bg_card)
        .stroke(egui::Stroke::new(1.0, theme.border))
        .rounding(8.0)
        .inner_margin(egui::Margin::same(14.0))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(egui::RichText::new(format!("{:02}", card.number)).monospace().size(12.0).color(theme.brand));
            ui.label(egui::RichText::new(card.title).size(16.0).strong().color(theme.text_strong));
            ui.add_space(4.0);
            rich_label(ui, &card.body, theme.text_normal, theme.text_strong);
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use neo_folio::i18n::{EN_US, ZH_CN};

    #[test]
    fn test_toc_labels_localized() {
        let section = TocEntry { anchor: Anchor::Section(0), label: Some("Phase 1") };
        assert_eq!(toc_label(&section, &EN_US), "Phase 1");
        assert_eq!(toc_label(&section, &ZH_CN), "Phase 1");

        let overview = TocEntry { anchor: Anchor::Overview, label: None };
        assert_eq!(toc_label(&overview, &EN_US), "Overview");
        assert_eq!(toc_label(&overview, &ZH_CN), "概览");
    }

    #[test]
    fn test_terminal_scroll_ids_differ_per_section() {
        assert_eq!(terminal_scroll_id(3), terminal_scroll_id(3));
        assert_ne!(terminal_scroll_id(0), terminal_scroll_id(1));
    }
}
