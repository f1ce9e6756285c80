//! Rich text drawing - `**bold**` spans to a layout job

use eframe::egui::{self, text::LayoutJob, Color32, FontId, TextFormat};
use neo_folio::richtext::Span;

/// Emphasized spans get `strong`, everything else `normal`. egui's default
/// fonts have no bold face, so emphasis is carried by color alone.
pub fn layout_job(spans: &[Span<'_>], font: FontId, normal: Color32, strong: Color32, wrap_width: f32) -> LayoutJob {
    let mut job = LayoutJob::default();
    job.wrap.max_width = wrap_width;
    for span in spans {
        let color = if span.emphasized { strong } else { normal };
        job.append(span.text, 0.0, TextFormat::simple(font.clone(), color));
    }
    job
}

pub fn rich_label(ui: &mut egui::Ui, spans: &[Span<'_>], normal: Color32, strong: Color32) -> egui::Response {
    let font = egui::TextStyle::Body.resolve(ui.style());
    let job = layout_job(spans, font, normal, strong, ui.available_width());
    ui.label(job)
}

/// Bulleted list of rich items
pub fn rich_list(ui: &mut egui::Ui, items: &[Vec<Span<'_>>], bullet: Color32, normal: Color32, strong: Color32) {
    for item in items {
        ui.horizontal_top(|ui| {
            ui.label(egui::RichText::new("▸").color(bullet).monospace());
            rich_label(ui, item, normal, strong);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_job_sections_follow_spans() {
        let spans = neo_folio::richtext::parse("a **b** c");
        let job = layout_job(&spans, FontId::monospace(12.0), Color32::GRAY, Color32::WHITE, 100.0);
        assert_eq!(job.text, "a b c");
        assert_eq!(job.sections.len(), 3);
        assert_eq!(job.sections[1].format.color, Color32::WHITE);
        assert_eq!(job.sections[2].format.color, Color32::GRAY);
    }
}
