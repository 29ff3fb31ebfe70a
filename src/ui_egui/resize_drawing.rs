//! Resize handle drawing and preview rendering.
//!
//! Visual feedback for the block resize system: handle bars drawn on the
//! outer edges of a hovered block and translucent day overlays while an
//! edge is being dragged.

use egui::{Color32, Pos2, Rect, Stroke, Vec2};

use super::resize::{HandleRects, ResizeEdge, HANDLE_VISUAL_SIZE};

/// Overlay drawn on a day cell of the anchor's row during a resize.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PreviewMark {
    Addition,
    Removal,
}

const REMOVAL_COLOR: Color32 = Color32::from_rgb(220, 53, 69);

fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}

/// Draw resize handles on a block.
pub fn draw_handles(
    ui: &egui::Ui,
    handles: &HandleRects,
    hovered: Option<ResizeEdge>,
    color: Color32,
) {
    let painter = ui.painter();
    let draw_handle = |rect: Rect, edge: ResizeEdge| {
        let is_hovered = hovered == Some(edge);
        let center_y = rect.center().y;
        let (bar_x, center_x) = match edge {
            ResizeEdge::Left => (rect.left() + 2.0, rect.left() + HANDLE_VISUAL_SIZE / 2.0 + 1.0),
            ResizeEdge::Right => (
                rect.right() - 2.0,
                rect.right() - HANDLE_VISUAL_SIZE / 2.0 - 1.0,
            ),
        };
        let bar_height = rect.height().min(20.0);

        painter.line_segment(
            [
                Pos2::new(bar_x, center_y - bar_height / 2.0),
                Pos2::new(bar_x, center_y + bar_height / 2.0),
            ],
            Stroke::new(
                if is_hovered { 3.0 } else { 2.0 },
                if is_hovered {
                    Color32::WHITE
                } else {
                    with_alpha(Color32::WHITE, 180)
                },
            ),
        );

        let radius = if is_hovered {
            HANDLE_VISUAL_SIZE / 2.0 + 1.5
        } else {
            HANDLE_VISUAL_SIZE / 2.0
        };
        let center = Pos2::new(center_x, center_y);
        painter.circle_filled(center, radius, with_alpha(Color32::WHITE, 220));
        painter.circle_stroke(
            center,
            radius,
            Stroke::new(1.5, color.linear_multiply(0.8)),
        );
    };

    if let Some(rect) = handles.left {
        draw_handle(rect, ResizeEdge::Left);
    }
    if let Some(rect) = handles.right {
        draw_handle(rect, ResizeEdge::Right);
    }
}

/// Paint a preview overlay over one day cell.
///
/// Additions use a pale version of the chantier colour; removals are
/// hatched over in red.
pub fn draw_preview_cell(ui: &egui::Ui, cell_rect: Rect, mark: PreviewMark, chantier_color: Color32) {
    let painter = ui.painter();
    let rect = cell_rect.shrink2(Vec2::new(3.0, 4.0));

    match mark {
        PreviewMark::Addition => {
            painter.rect_filled(rect, 3.0, with_alpha(chantier_color, 60));
            painter.rect_stroke(rect, 3.0, Stroke::new(2.0, with_alpha(chantier_color, 140)));
            let bar = Rect::from_min_size(rect.min, Vec2::new(4.0, rect.height()));
            painter.rect_filled(bar, 2.0, with_alpha(chantier_color, 100));
        }
        PreviewMark::Removal => {
            painter.rect_filled(rect, 3.0, with_alpha(REMOVAL_COLOR, 70));
            painter.rect_stroke(rect, 3.0, Stroke::new(2.0, with_alpha(REMOVAL_COLOR, 180)));
            painter.line_segment(
                [rect.left_top(), rect.right_bottom()],
                Stroke::new(1.5, with_alpha(REMOVAL_COLOR, 160)),
            );
        }
    }
}
