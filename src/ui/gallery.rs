//! Photo gallery

use eframe::egui::{self, Color32};
use neo_folio::i18n::Translation;
use neo_folio::models::Photo;

use super::remote_image;
use crate::theme::ThemeConfig;

const COLUMNS: usize = 3;
const MAX_TILE_HEIGHT: f32 = 420.0;

pub fn show(ui: &mut egui::Ui, photos: &[Photo], text: &Translation, theme: &ThemeConfig) {
    ui.label(egui::RichText::new(text.section_visuals_subtitle).monospace().size(11.0).color(theme.brand));
    ui.heading(egui::RichText::new(text.section_visuals_title).color(theme.text_strong));
    ui.add_space(20.0);

    for row in photos.chunks(COLUMNS) {
        ui.columns(COLUMNS, |cols| {
            for (col, photo) in cols.iter_mut().zip(row) {
                tile(col, photo, theme);
            }
        });
        ui.add_space(12.0);
    }
}

/// Aspect-correct tile size; tall photos are capped and narrowed to match
fn tile_size(width: f32, photo: &Photo) -> egui::Vec2 {
    let ratio = photo.aspect_ratio();
    let height = width * ratio;
    if height > MAX_TILE_HEIGHT {
        egui::vec2(MAX_TILE_HEIGHT / ratio, MAX_TILE_HEIGHT)
    } else {
        egui::vec2(width, height)
    }
}

fn tile(ui: &mut egui::Ui, photo: &Photo, theme: &ThemeConfig) {
    let rect = remote_image::next_rect(ui, tile_size(ui.available_width(), photo));
    let resp = remote_image::show_in_rect(ui, rect, &photo.url, egui::Sense::click(), theme)
        .on_hover_cursor(egui::CursorIcon::PointingHand)
        .on_hover_text(&photo.url);

    // 取景框角标
    let painter = ui.painter();
    let corner = 14.0;
    let color = if resp.hovered() { theme.brand } else { theme.brand.gamma_multiply(0.7) };
    for (pos, dx, dy) in [
        (rect.left_top(), 1.0, 1.0),
        (rect.right_top(), -1.0, 1.0),
        (rect.left_bottom(), 1.0, -1.0),
        (rect.right_bottom(), -1.0, -1.0),
    ] {
        let inset = pos + egui::vec2(8.0 * dx, 8.0 * dy);
        let s = egui::Stroke::new(1.5, color);
        painter.line_segment([inset, inset + egui::vec2(corner * dx, 0.0)], s);
        painter.line_segment([inset, inset + egui::vec2(0.0, corner * dy)], s);
    }

    if resp.clicked() {
        ui.ctx().open_url(egui::OpenUrl::new_tab(&photo.url));
    }

    ui.add_space(4.0);
    ui.label(egui::RichText::new(&photo.title).strong().color(theme.text_strong));
    ui.label(egui::RichText::new(&photo.exif).monospace().size(10.0).color(Color32::from_gray(120)));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn photo(width: u32, height: u32) -> Photo {
        Photo {
            id: "ph".to_string(),
            url: "https://picsum.photos/600/400".to_string(),
            title: "t".to_string(),
            exif: String::new(),
            width,
            height,
        }
    }

    #[test]
    fn test_tile_follows_photo_ratio() {
        assert_eq!(tile_size(300.0, &photo(3, 2)), egui::vec2(300.0, 200.0));
    }

    #[test]
    fn test_tall_tile_is_capped_without_stretching() {
        let size = tile_size(400.0, &photo(1, 2));
        assert_eq!(size, egui::vec2(210.0, 420.0));
        assert!((size.y / size.x - 2.0).abs() < 1e-4);
    }
}
