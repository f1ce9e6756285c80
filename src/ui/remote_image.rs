//! Remote images (project covers, gallery photos)
//!
//! Loading goes through the egui_extras loaders installed at startup. The
//! placeholder frame stays underneath while a URL is loading or has failed.

use eframe::egui;

use crate::theme::ThemeConfig;

/// Blank URLs render nothing
pub fn remote_image(url: &str) -> Option<egui::Image<'static>> {
    let url = url.trim();
    if url.is_empty() {
        return None;
    }
    Some(egui::Image::new(url.to_owned()))
}

/// Placeholder frame, then the image fitted inside it. `rect` must start at
/// the cursor; this allocates it.
pub fn show_in_rect(ui: &mut egui::Ui, rect: egui::Rect, url: &str, sense: egui::Sense, theme: &ThemeConfig) -> egui::Response {
    ui.painter().rect_filled(rect, 6.0, theme.bg_card);
    ui.painter().rect_stroke(rect, 6.0, egui::Stroke::new(1.0, theme.border));
    match remote_image(url) {
        Some(image) => ui.put(
            rect,
            image
                .fit_to_exact_size(rect.size())
                .rounding(6.0)
                .show_loading_spinner(true)
                .sense(sense),
        ),
        None => ui.allocate_rect(rect, sense),
    }
}

/// Next `size` rect at the cursor, not yet allocated
pub fn next_rect(ui: &egui::Ui, size: egui::Vec2) -> egui::Rect {
    egui::Rect::from_min_size(ui.available_rect_before_wrap().min, size)
}

/// `width` x `height` cover image at the cursor
pub fn cover(ui: &mut egui::Ui, url: &str, width: f32, height: f32, theme: &ThemeConfig) -> egui::Response {
    let rect = next_rect(ui, egui::vec2(width, height));
    show_in_rect(ui, rect, url, egui::Sense::hover(), theme)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_url_has_no_image() {
        assert!(remote_image("").is_none());
        assert!(remote_image("   ").is_none());
    }

    #[test]
    fn test_image_keeps_url() {
        let image = remote_image(" https://picsum.photos/800/600?random=1 ").unwrap();
        assert_eq!(image.uri(), Some("https://picsum.photos/800/600?random=1"));
    }
}
