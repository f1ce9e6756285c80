//! Floating chat widget (toggle button + transcript window)

use std::sync::Arc;

use eframe::egui::{self, Color32};
use neo_folio::i18n::Translation;
use neo_folio::{ChatSession, InferenceGateway, Role};

use crate::theme::ThemeConfig;

#[derive(Default)]
pub struct ChatWidget {
    pub open: bool,
    focus_input: bool,
}

impl ChatWidget {
    pub fn show(
        &mut self,
        ctx: &egui::Context,
        session: &mut ChatSession,
        gateway: &Arc<InferenceGateway>,
        text: &Translation,
        theme: &ThemeConfig,
    ) {
        self.toggle_button(ctx, theme);
        if !self.open {
            return;
        }

        let mut open = self.open;
        egui::Window::new(egui::RichText::new(format!("◉ {}", text.chat_operator)).monospace().color(theme.brand))
            .id(egui::Id::new("chat_window"))
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .default_width(360.0)
            .anchor(egui::Align2::RIGHT_BOTTOM, [-24.0, -88.0])
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                ui.label(egui::RichText::new(format!("● {}", text.chat_connected)).monospace().size(10.0).color(theme.text_muted));
                ui.separator();

                egui::ScrollArea::vertical()
                    .id_salt("chat_transcript")
                    .max_height(360.0)
                    .stick_to_bottom(true)
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        for msg in session.messages() {
                            bubble(ui, msg.role, &msg.text, &msg.clock_label(), theme);
                        }
                        if session.is_awaiting() {
                            ui.horizontal(|ui| {
                                ui.spinner();
                                ui.label(egui::RichText::new(text.chat_loading).monospace().size(11.0).color(theme.brand));
                            });
                        }
                    });

                ui.separator();
                ui.horizontal(|ui| {
                    let send_width = 64.0;
                    let input = ui.add(
                        egui::TextEdit::singleline(&mut session.input)
                            .hint_text(text.chat_placeholder)
                            .desired_width(ui.available_width() - send_width),
                    );
                    if self.focus_input {
                        input.request_focus();
                        self.focus_input = false;
                    }
                    let enter = input.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

                    let send = ui.add_enabled(
                        session.can_submit(),
                        egui::Button::new(egui::RichText::new(text.chat_send).color(Color32::BLACK)).fill(theme.brand),
                    );
                    if (send.clicked() || enter) && submit(ctx, session, gateway) {
                        self.focus_input = true;
                    }
                });
            });
        self.open = open;
    }

    fn toggle_button(&mut self, ctx: &egui::Context, theme: &ThemeConfig) {
        egui::Area::new(egui::Id::new("chat_toggle"))
            .anchor(egui::Align2::RIGHT_BOTTOM, [-24.0, -24.0])
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                let label = if self.open { "✕" } else { "💬" };
                let button = egui::Button::new(egui::RichText::new(label).size(20.0).color(Color32::BLACK))
                    .fill(theme.brand)
                    .rounding(24.0)
                    .min_size(egui::vec2(48.0, 48.0));
                if ui.add(button).clicked() {
                    self.open = !self.open;
                    self.focus_input = self.open;
                }
            });
    }
}

/// Submit and wake the UI when the reply lands
fn submit(ctx: &egui::Context, session: &mut ChatSession, gateway: &Arc<InferenceGateway>) -> bool {
    let ctx = ctx.clone();
    session.submit_with_notify(gateway, move || ctx.request_repaint())
}

fn bubble(ui: &mut egui::Ui, role: Role, text: &str, clock: &str, theme: &ThemeConfig) {
    let (layout, fill, color) = match role {
        Role::User => (
            egui::Layout::top_down(egui::Align::Max),
            theme.brand.gamma_multiply(0.2),
            theme.text_strong,
        ),
        Role::Model => (egui::Layout::top_down(egui::Align::Min), theme.bg_card, theme.text_normal),
    };
    ui.with_layout(layout, |ui| {
        egui::Frame::none()
            .fill(fill)
            .stroke(egui::Stroke::new(1.0, theme.border))
            .rounding(6.0)
            .inner_margin(egui::Margin::symmetric(10.0, 6.0))
            .show(ui, |ui| {
                ui.set_max_width(260.0);
                ui.label(egui::RichText::new(text).color(color));
                ui.label(egui::RichText::new(clock).monospace().size(9.0).color(theme.text_muted));
            });
    });
    ui.add_space(6.0);
}
