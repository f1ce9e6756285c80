//! About page component

use eframe::egui::{self, Color32};
use neo_folio::effects::TypingText;
use neo_folio::i18n::{Language, Translation};
use neo_folio::models::AboutContent;
use neo_folio::ContentStore;

use crate::theme::ThemeConfig;

/// 段落逐个开始打字的延迟 (秒)，之后每段再晚 2.5 秒
const PARAGRAPH_DELAYS: [f64; 3] = [1.0, 2.5, 4.5];

fn paragraph_delay(index: usize) -> f64 {
    match PARAGRAPH_DELAYS.get(index) {
        Some(delay) => *delay,
        None => PARAGRAPH_DELAYS[2] + 2.5 * (index - 2) as f64,
    }
}

/// About page state
#[derive(Default)]
pub struct AboutView {
    intro: Option<TypingText>,
    paragraphs: Vec<TypingText>,
    /// 打字机当前对应的语言
    typed_lang: Option<Language>,
}

impl AboutView {
    pub fn is_animating(&self) -> bool {
        self.intro.as_ref().is_some_and(TypingText::is_running) || self.paragraphs.iter().any(TypingText::is_running)
    }

    pub fn mount(&mut self, content: &AboutContent, lang: Language, now: f64, effects: bool) {
        let mut intro = TypingText::new(&content.intro, 0.0);
        let mut paragraphs: Vec<TypingText> = content
            .paragraphs
            .iter()
            .enumerate()
            .map(|(i, p)| TypingText::new(p, paragraph_delay(i)))
            .collect();
        if effects {
            intro.start(now);
            paragraphs.iter_mut().for_each(|p| p.start(now));
        }
        self.intro = Some(intro);
        self.paragraphs = paragraphs;
        self.typed_lang = Some(lang);
    }

    pub fn unmount(&mut self) {
        if let Some(intro) = &mut self.intro {
            intro.stop();
        }
        self.paragraphs.iter_mut().for_each(TypingText::stop);
        self.typed_lang = None;
    }

    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        store: &ContentStore,
        lang: Language,
        text: &Translation,
        theme: &ThemeConfig,
        now: f64,
        effects: bool,
    ) {
        let content = store.about.get(lang);
        if self.typed_lang != Some(lang) {
            self.mount(content, lang, now, effects);
        }
        if let Some(intro) = &mut self.intro {
            intro.tick(now);
        }
        for p in &mut self.paragraphs {
            p.tick(now);
        }

        self.identity(ui, store, text, theme);
        ui.add_space(24.0);

        ui.label(egui::RichText::new(format!("> {}", text.about_decrypting)).monospace().size(11.0).color(theme.brand));
        ui.add_space(6.0);
        card(ui, theme, |ui| {
            let intro = typed(self.intro.as_ref(), &content.intro, effects);
            ui.label(egui::RichText::new(intro).size(22.0).strong().color(theme.text_strong));
            ui.add_space(12.0);
            for (typer, full) in self.paragraphs.iter().zip(&content.paragraphs) {
                let shown = typed(Some(typer), full, effects);
                ui.label(egui::RichText::new(shown).monospace().color(theme.brand.gamma_multiply(0.9)));
                ui.add_space(10.0);
            }
        });
        ui.add_space(28.0);

        section_label(ui, text.about_career, theme);
        for job in &store.experience {
            ui.horizontal_top(|ui| {
                let (dot, _) = ui.allocate_exact_size(egui::vec2(12.0, 18.0), egui::Sense::hover());
                ui.painter().circle_filled(dot.center(), 4.0, theme.brand);
                ui.vertical(|ui| {
                    ui.horizontal_wrapped(|ui| {
                        ui.label(egui::RichText::new(&job.role).strong().color(theme.text_strong));
                        ui.label(egui::RichText::new(format!("@ {}", job.company)).color(theme.secondary));
                        ui.label(egui::RichText::new(&job.period).monospace().size(11.0).color(theme.text_muted));
                    });
                    ui.label(egui::RichText::new(&job.description).color(theme.text_normal));
                });
            });
            ui.add_space(10.0);
        }
        ui.add_space(20.0);

        section_label(ui, text.about_modules, theme);
        for row in content.modules.chunks(3) {
            ui.columns(3, |cols| {
                for (col, module) in cols.iter_mut().zip(row) {
                    card(col, theme, |ui| {
                        ui.label(egui::RichText::new(&module.title).strong().color(theme.text_strong));
                        ui.label(egui::RichText::new(&module.content).size(13.0).color(theme.text_normal));
                    });
                }
            });
        }
        ui.add_space(28.0);

        section_label(ui, text.about_skills, theme);
        for skill in &store.skills {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(&skill.name).monospace().color(theme.text_normal));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(egui::RichText::new(format!("{}%", skill.level.min(100))).monospace().color(theme.brand));
                });
            });
            ui.add(
                egui::ProgressBar::new(skill.fraction())
                    .fill(theme.brand)
                    .desired_height(4.0),
            );
            ui.add_space(8.0);
        }
        ui.add_space(28.0);

        card(ui, theme, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new(text.about_contact_banner).monospace().size(11.0).color(theme.brand));
                ui.add_space(6.0);
                let email = &store.owner.email;
                ui.hyperlink_to(
                    egui::RichText::new(email).size(20.0).strong().color(theme.text_strong),
                    format!("mailto:{}", email),
                );
            });
        });
    }

    fn identity(&self, ui: &mut egui::Ui, store: &ContentStore, text: &Translation, theme: &ThemeConfig) {
        ui.horizontal(|ui| {
            let (avatar, _) = ui.allocate_exact_size(egui::vec2(64.0, 64.0), egui::Sense::hover());
            ui.painter().rect_filled(avatar, 8.0, theme.bg_card);
            ui.painter().rect_stroke(avatar, 8.0, egui::Stroke::new(1.0, theme.brand));
            let initial = store.owner.name.chars().next().unwrap_or('?');
            ui.painter().text(
                avatar.center(),
                egui::Align2::CENTER_CENTER,
                initial,
                egui::FontId::monospace(28.0),
                theme.brand,
            );
            ui.add_space(12.0);
            ui.vertical(|ui| {
                ui.label(egui::RichText::new(&store.owner.name).size(26.0).strong().color(theme.text_strong));
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new(format!("✔ {}", text.about_verified)).monospace().size(11.0).color(theme.brand));
                    ui.label(egui::RichText::new(format!("● {}", text.about_online)).monospace().size(11.0).color(theme.secondary));
                });
            });
        });
    }
}

/// Typed prefix while animating, the full text once done or with effects off
fn typed(typer: Option<&TypingText>, full: &str, effects: bool) -> String {
    match typer {
        Some(t) if effects => t.visible(),
        _ => full.to_string(),
    }
}

fn section_label(ui: &mut egui::Ui, label: &str, theme: &ThemeConfig) {
    ui.label(egui::RichText::new(label).monospace().size(12.0).color(theme.brand));
    ui.add_space(8.0);
}

fn card<R>(ui: &mut egui::Ui, theme: &ThemeConfig, add_contents: impl FnOnce(&mut egui::Ui) -> R) -> R {
    egui::Frame::none()
        .fill(Color32::from_black_alpha(100))
        .stroke(egui::Stroke::new(1.0, theme.border))
        .rounding(8.0)
        .inner_margin(egui::Margin::same(16.0))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            add_contents(ui)
        })
        .inner
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraph_delays_are_staggered() {
        let delays: Vec<f64> = (0..5).map(paragraph_delay).collect();
        assert_eq!(delays, vec![1.0, 2.5, 4.5, 7.0, 9.5]);
    }

    #[test]
    fn test_typed_without_effects_shows_everything() {
        let typer = TypingText::new("hello", 0.0);
        assert_eq!(typed(Some(&typer), "hello", false), "hello");
        assert_eq!(typed(Some(&typer), "hello", true), "");
        assert_eq!(typed(None, "hello", true), "hello");
    }

    #[test]
    fn test_mount_follows_language() {
        let store = ContentStore::builtin().unwrap();
        let mut view = AboutView::default();
        view.mount(store.about.get(Language::Zh), Language::Zh, 0.0, true);
        assert!(view.is_animating());
        assert_eq!(view.paragraphs.len(), store.about.zh.paragraphs.len());
        view.unmount();
        assert!(!view.is_animating());
        assert_eq!(view.typed_lang, None);
    }
}
