use eframe::egui::{self, Color32};

/// 配色方案
#[derive(Clone, PartialEq)]
pub struct ThemeConfig {
    pub name: String,

    pub bg: Color32,
    pub bg_panel: Color32,
    pub bg_card: Color32,
    pub bg_card_hover: Color32,

    pub brand: Color32,
    pub secondary: Color32,
    pub border: Color32,

    pub text_normal: Color32,
    pub text_strong: Color32,
    pub text_muted: Color32,
}

impl ThemeConfig {
    /// 黑客帝国风：近黑底色 + 荧光绿
    pub fn neo() -> Self {
        Self {
            name: "Neo".to_string(),
            bg: Color32::from_rgb(1, 3, 1),
            bg_panel: Color32::from_rgb(6, 10, 7),
            bg_card: Color32::from_rgb(12, 17, 13),
            bg_card_hover: Color32::from_rgb(18, 28, 20),
            // tailwind green-500
            brand: Color32::from_rgb(34, 197, 94),
            secondary: Color32::from_rgb(6, 182, 212),
            border: Color32::from_rgba_unmultiplied(34, 197, 94, 50),
            text_normal: Color32::from_rgb(212, 212, 216),
            text_strong: Color32::WHITE,
            text_muted: Color32::from_rgb(113, 113, 122),
        }
    }

    pub fn apply(&self, ctx: &egui::Context) {
        tracing::debug!(theme = %self.name, "apply theme");
        let mut visuals = egui::Visuals::dark();

        visuals.window_fill = self.bg_panel;
        visuals.panel_fill = self.bg;
        visuals.faint_bg_color = self.bg_card;
        visuals.extreme_bg_color = self.bg_card;
        visuals.override_text_color = Some(self.text_normal);
        visuals.hyperlink_color = self.secondary;
        visuals.selection.bg_fill = self.brand;
        visuals.selection.stroke = egui::Stroke::new(1.0, Color32::BLACK);
        visuals.widgets.hovered.bg_stroke = egui::Stroke::new(1.0, self.brand);
        visuals.widgets.active.bg_stroke = egui::Stroke::new(1.0, self.brand);

        visuals.window_rounding = egui::Rounding::same(8.0);
        visuals.window_stroke = egui::Stroke::new(1.0, self.border);
        visuals.window_shadow = egui::epaint::Shadow {
            offset: egui::vec2(0.0, 4.0),
            blur: 16.0,
            spread: 0.0,
            color: Color32::from_rgba_unmultiplied(34, 197, 94, 25),
        };
        visuals.popup_shadow = visuals.window_shadow;

        ctx.set_visuals(visuals);

        let mut style = (*ctx.style()).clone();
        style.spacing.window_margin = egui::Margin::same(10.0);
        style.spacing.item_spacing = egui::vec2(8.0, 6.0);
        style.text_styles.insert(egui::TextStyle::Heading, egui::FontId::proportional(26.0));
        style.text_styles.insert(egui::TextStyle::Body, egui::FontId::proportional(15.0));
        style.text_styles.insert(egui::TextStyle::Monospace, egui::FontId::monospace(13.0));
        ctx.set_style(style);
    }
}

/// 系统 CJK 字体候选 (default_fonts 不含中文字形)
const CJK_FONT_CANDIDATES: &[&str] = &[
    "C:/Windows/Fonts/msyh.ttc",
    "C:/Windows/Fonts/simhei.ttf",
    "/System/Library/Fonts/PingFang.ttc",
    "/System/Library/Fonts/STHeiti Medium.ttc",
    "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/truetype/wqy/wqy-microhei.ttc",
];

/// Append the first CJK font found on this machine as a fallback for both
/// families. Without one, Chinese text renders as boxes.
pub fn install_fonts(ctx: &egui::Context) {
    let Some((path, bytes)) = CJK_FONT_CANDIDATES
        .iter()
        .find_map(|path| std::fs::read(path).ok().map(|bytes| (*path, bytes)))
    else {
        tracing::warn!("no CJK font found, Chinese text may not render");
        return;
    };
    tracing::debug!(path, "using CJK fallback font");

    let mut fonts = egui::FontDefinitions::default();
    fonts
        .font_data
        .insert("cjk".to_owned(), egui::FontData::from_owned(bytes));
    for family in [egui::FontFamily::Proportional, egui::FontFamily::Monospace] {
        fonts.families.entry(family).or_default().push("cjk".to_owned());
    }
    ctx.set_fonts(fonts);
}
