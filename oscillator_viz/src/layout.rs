//! Screen layout of the plot panels
//!
//! Two panels share the top row and the superposition spans the bottom row,
//! matching the classic window arrangement. All rects are in egui points.

use crate::axis::Bounds;
use egui::{pos2, vec2, Pos2, Rect};

/// Gap between neighbouring panels
pub const PANEL_GAP: f32 = 12.0;

/// Space around the data area for title, ticks and labels
#[derive(Debug, Clone, Copy)]
pub struct Margins {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

pub const PLOT_MARGINS: Margins = Margins {
    left: 58.0,
    right: 14.0,
    top: 30.0,
    bottom: 42.0,
};

/// Outer rects for the full, half and superposition panels
pub fn plot_rects(area: Rect) -> [Rect; 3] {
    let area = area.shrink(PANEL_GAP / 2.0);
    let row_height = ((area.height() - PANEL_GAP) / 2.0).max(0.0);
    let col_width = ((area.width() - PANEL_GAP) / 2.0).max(0.0);

    let full = Rect::from_min_size(area.min, vec2(col_width, row_height));
    let half = Rect::from_min_size(
        pos2(area.min.x + col_width + PANEL_GAP, area.min.y),
        vec2(col_width, row_height),
    );
    let superposition = Rect::from_min_size(
        pos2(area.min.x, area.min.y + row_height + PANEL_GAP),
        vec2(area.width().max(0.0), row_height),
    );

    [full, half, superposition]
}

/// Data area inside an outer panel rect
pub fn data_rect(outer: Rect) -> Rect {
    let m = PLOT_MARGINS;
    let min = pos2(outer.min.x + m.left, outer.min.y + m.top);
    let max = pos2(
        (outer.max.x - m.right).max(min.x),
        (outer.max.y - m.bottom).max(min.y),
    );
    Rect::from_min_max(min, max)
}

/// Map a plot coordinate into the data rect (y grows upwards)
pub fn to_screen(rect: Rect, bounds: &Bounds, x: f64, y: f64) -> Pos2 {
    let tx = ((x - bounds.x_min) / (bounds.x_max - bounds.x_min)) as f32;
    let ty = ((y - bounds.y_min) / (bounds.y_max - bounds.y_min)) as f32;
    pos2(rect.min.x + tx * rect.width(), rect.max.y - ty * rect.height())
}

/// Convert a rect in points into a physical pixel viewport `(x, y, w, h)`,
/// clamped to the surface
pub fn to_viewport(rect: Rect, pixels_per_point: f32, surface: (u32, u32)) -> Option<[f32; 4]> {
    let (sw, sh) = (surface.0 as f32, surface.1 as f32);
    let x0 = (rect.min.x * pixels_per_point).clamp(0.0, sw);
    let y0 = (rect.min.y * pixels_per_point).clamp(0.0, sh);
    let x1 = (rect.max.x * pixels_per_point).clamp(0.0, sw);
    let y1 = (rect.max.y * pixels_per_point).clamp(0.0, sh);

    (x1 - x0 >= 1.0 && y1 - y0 >= 1.0).then(|| [x0, y0, x1 - x0, y1 - y0])
}
