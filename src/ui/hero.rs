//! Hero banner with digital rain and the decrypting title lines

use eframe::egui::{self, Color32};
use neo_folio::effects::{DecryptText, MatrixRain};
use neo_folio::i18n::Translation;
use neo_folio::models::Owner;

use crate::theme::ThemeConfig;

const HERO_HEIGHT: f32 = 460.0;
const GLYPH_SIZE: f32 = 14.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeroAction {
    ViewProjects,
    Contact,
}

/// One decrypting piece of the headline
struct TitlePart {
    decrypt: DecryptText,
    hovered: bool,
}

impl TitlePart {
    fn new(text: &str) -> Self {
        Self { decrypt: DecryptText::new(text), hovered: false }
    }
}

const TITLE_LEAD: usize = 0;
const TITLE_WORD: usize = 1;
const TITLE_TAIL: usize = 2;

pub struct Hero {
    rain: MatrixRain,
    /// hero_title_1, hero_title_clarity, hero_title_3
    titles: [TitlePart; 3],
}

fn title_sources(text: &Translation) -> [&'static str; 3] {
    [text.hero_title_1, text.hero_title_clarity, text.hero_title_3]
}

impl Hero {
    pub fn new(text: &Translation) -> Self {
        Self {
            rain: MatrixRain::new(0, 1),
            titles: title_sources(text).map(TitlePart::new),
        }
    }

    pub fn is_animating(&self) -> bool {
        self.rain.is_running() || self.titles.iter().any(|t| t.decrypt.is_running())
    }

    pub fn mount(&mut self, now: f64, effects: bool) {
        if effects {
            self.rain.start(now);
            for part in &mut self.titles {
                part.decrypt.start(now);
            }
        }
    }

    pub fn unmount(&mut self) {
        self.rain.stop();
        for part in &mut self.titles {
            part.decrypt.stop();
            part.hovered = false;
        }
    }

    /// 切换语言时重新解密; effects off shows the plain text
    fn sync_titles(&mut self, text: &Translation, now: f64, effects: bool) {
        for (part, source) in self.titles.iter_mut().zip(title_sources(text)) {
            part.decrypt.set_text(source, now);
            if !effects {
                part.decrypt.stop();
            }
        }
    }

    fn tick_titles(&mut self, now: f64) {
        for part in &mut self.titles {
            part.decrypt.tick(now);
        }
    }

    fn title_text(&self, idx: usize) -> &str {
        self.titles[idx].decrypt.text()
    }

    /// Decrypting label; entering it with the pointer replays the reveal
    fn title_label(&mut self, ui: &mut egui::Ui, idx: usize, rich: egui::RichText, now: f64, effects: bool) {
        let resp = ui.add(egui::Label::new(rich).sense(egui::Sense::hover()));
        let part = &mut self.titles[idx];
        let hovered = resp.hovered();
        if hovered && !part.hovered && effects {
            part.decrypt.start(now);
        }
        part.hovered = hovered;
    }

    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        text: &Translation,
        owner: &Owner,
        theme: &ThemeConfig,
        now: f64,
        effects: bool,
    ) -> Option<HeroAction> {
        self.sync_titles(text, now, effects);

        let width = ui.available_width();
        let (rect, _) = ui.allocate_exact_size(egui::vec2(width, HERO_HEIGHT), egui::Sense::hover());
        ui.painter().rect_filled(rect, 0.0, theme.bg);

        // 数字雨背景
        let columns = (rect.width() / GLYPH_SIZE).floor().max(0.0) as usize;
        let rows = (rect.height() / GLYPH_SIZE).floor().max(1.0) as u32;
        self.rain.resize(columns, rows);
        self.rain.tick(now);
        self.paint_rain(ui.painter(), rect, theme);

        self.tick_titles(now);

        let mut action = None;
        let inner = rect.shrink2(egui::vec2(48.0, 40.0));
        ui.allocate_new_ui(egui::UiBuilder::new().max_rect(inner), |ui| {
            ui.label(egui::RichText::new("SYS.VER.4.2.0  //  STATUS: STABLE").monospace().size(10.0).color(theme.brand.gamma_multiply(0.6)));
            ui.add_space(24.0);

            egui::Frame::none()
                .stroke(egui::Stroke::new(1.0, theme.border))
                .rounding(12.0)
                .inner_margin(egui::Margin::symmetric(10.0, 4.0))
                .show(ui, |ui| {
                    ui.label(egui::RichText::new(text.hero_badge).monospace().size(11.0).color(theme.brand));
                });
            ui.add_space(16.0);

            let title_size = 48.0;
            ui.horizontal_wrapped(|ui| {
                ui.spacing_mut().item_spacing.x = 0.0;
                let lead = egui::RichText::new(self.title_text(TITLE_LEAD)).size(title_size).color(theme.text_strong);
                self.title_label(ui, TITLE_LEAD, lead, now, effects);
                let word = egui::RichText::new(self.title_text(TITLE_WORD)).size(title_size).monospace().color(theme.brand);
                self.title_label(ui, TITLE_WORD, word, now, effects);
                ui.label(egui::RichText::new(text.hero_title_2).size(title_size).color(theme.text_strong));
            });
            let tail = egui::RichText::new(self.title_text(TITLE_TAIL)).size(title_size).color(theme.text_muted);
            self.title_label(ui, TITLE_TAIL, tail, now, effects);
            ui.add_space(16.0);

            ui.label(egui::RichText::new(text.hero_desc).size(17.0).color(theme.text_normal));
            ui.add_space(24.0);

            ui.horizontal(|ui| {
                let projects = egui::Button::new(egui::RichText::new(format!("{} →", text.btn_projects)).monospace().color(Color32::BLACK))
                    .fill(theme.brand)
                    .min_size(egui::vec2(160.0, 36.0));
                if ui.add(projects).clicked() {
                    action = Some(HeroAction::ViewProjects);
                }
                let contact = egui::Button::new(egui::RichText::new(text.btn_contact).monospace().color(theme.brand))
                    .fill(Color32::TRANSPARENT)
                    .stroke(egui::Stroke::new(1.0, theme.brand))
                    .min_size(egui::vec2(140.0, 36.0));
                if ui.add(contact).clicked() {
                    action = Some(HeroAction::Contact);
                }
            });
            ui.add_space(32.0);

            ui.horizontal(|ui| {
                hud_field(ui, theme, text.hero_location, &owner.location);
                ui.add_space(32.0);
                hud_field(ui, theme, text.hero_time, &format_clock(&chrono::Local::now()));
                ui.add_space(32.0);
                hud_field(ui, theme, text.hero_status, &owner.status);
            });
        });

        action
    }

    fn paint_rain(&self, painter: &egui::Painter, rect: egui::Rect, theme: &ThemeConfig) {
        let font = egui::FontId::monospace(GLYPH_SIZE);
        for glyph in self.rain.glyphs() {
            let pos = rect.left_top() + egui::vec2(glyph.column as f32 * GLYPH_SIZE, glyph.row as f32 * GLYPH_SIZE);
            if !rect.contains(pos) {
                continue;
            }
            let base = if glyph.bright { Color32::WHITE } else { theme.brand };
            let color = base.gamma_multiply((1.0 - glyph.age) * 0.35);
            painter.text(pos, egui::Align2::LEFT_TOP, glyph.ch, font.clone(), color);
        }
    }
}

fn hud_field(ui: &mut egui::Ui, theme: &ThemeConfig, label: &str, value: &str) {
    ui.vertical(|ui| {
        ui.label(egui::RichText::new(label).monospace().size(10.0).color(theme.text_muted));
        ui.label(egui::RichText::new(value).monospace().color(theme.text_strong));
    });
}

fn format_clock<Tz: chrono::TimeZone>(time: &chrono::DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    time.format("%H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, TimeZone};
    use neo_folio::i18n::{EN_US, ZH_CN};
    use pretty_assertions::assert_eq;

    fn texts(hero: &Hero) -> [&str; 3] {
        [hero.title_text(TITLE_LEAD), hero.title_text(TITLE_WORD), hero.title_text(TITLE_TAIL)]
    }

    #[test]
    fn test_mount_decrypts_every_title_line() {
        let mut hero = Hero::new(&EN_US);
        hero.mount(0.0, true);
        assert!(hero.titles.iter().all(|t| t.decrypt.is_running()));

        hero.tick_titles(10.0);
        assert_eq!(texts(&hero), ["Building ", "clarity", "complex data."]);
        assert!(hero.titles.iter().all(|t| !t.decrypt.is_running()));
    }

    #[test]
    fn test_language_switch_replays_all_lines() {
        let mut hero = Hero::new(&EN_US);
        hero.sync_titles(&ZH_CN, 1.0, true);
        assert!(hero.titles.iter().all(|t| t.decrypt.is_running()));

        hero.tick_titles(10.0);
        assert_eq!(texts(&hero), ["构建", "清晰", "复杂数据系统"]);
    }

    #[test]
    fn test_effects_off_shows_plain_titles() {
        let mut hero = Hero::new(&EN_US);
        hero.sync_titles(&ZH_CN, 1.0, false);
        assert!(!hero.is_animating());
        assert_eq!(texts(&hero), ["构建", "清晰", "复杂数据系统"]);
    }

    #[test]
    fn test_clock_uses_local_offset() {
        let shanghai = FixedOffset::east_opt(8 * 3600).unwrap();
        let time = shanghai.with_ymd_and_hms(2024, 3, 1, 9, 5, 0).unwrap();
        assert_eq!(format_clock(&time), "09:05");
        assert_eq!(format_clock(&time.with_timezone(&chrono::Utc)), "01:05");
    }
}
