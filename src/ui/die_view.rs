use eframe::egui::{self, Pos2, Response, Sense, Stroke, StrokeKind, Ui};

use crate::color::DiePalette;
use crate::die::DieImage;

// ---------------------------------------------------------------------------
// Die face painting
// ---------------------------------------------------------------------------

/// Corner radius as a fraction of the die's side.
const CORNER_FRACTION: f32 = 0.14;
/// Pip radius as a fraction of the die's side.
const PIP_FRACTION: f32 = 0.09;

/// Paint `image` into a `size` × `size` square and return its response.
pub fn die_face(ui: &mut Ui, image: DieImage, size: f32, palette: &DiePalette) -> Response {
    let (rect, response) = ui.allocate_exact_size(egui::vec2(size, size), Sense::hover());

    if ui.is_rect_visible(rect) {
        let painter = ui.painter_at(rect);
        let corner = size * CORNER_FRACTION;
        let outline = Stroke::new((size * 0.025).max(1.0), palette.outline);

        painter.rect_filled(rect, corner, palette.body);
        painter.rect_stroke(rect, corner, outline, StrokeKind::Inside);

        let radius = size * PIP_FRACTION;
        for center in pip_centers(image, rect) {
            painter.circle_filled(center, radius, palette.pip);
        }
    }

    response
}

/// Screen positions of the pips of `image` laid out inside `rect`.
pub fn pip_centers(image: DieImage, rect: egui::Rect) -> impl Iterator<Item = Pos2> {
    image
        .pips()
        .iter()
        .map(move |&(fx, fy)| rect.min + egui::vec2(fx * rect.width(), fy * rect.height()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_pip_is_centered() {
        let rect = egui::Rect::from_min_size(egui::pos2(10.0, 20.0), egui::vec2(100.0, 100.0));
        let centers: Vec<Pos2> = pip_centers(DieImage::Face1, rect).collect();
        assert_eq!(centers, vec![egui::pos2(60.0, 70.0)]);
    }

    #[test]
    fn test_pips_stay_inside_rect() {
        let rect = egui::Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(64.0, 64.0));
        let radius = 64.0 * PIP_FRACTION;
        for image in [DieImage::Face4, DieImage::Face5, DieImage::Face6] {
            for c in pip_centers(image, rect) {
                assert!(rect.shrink(radius).contains(c), "{image}: {c:?}");
            }
        }
    }
}
