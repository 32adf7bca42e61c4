//! Line geometry for the GPU
//!
//! Each panel is flattened into `LineList` vertex pairs already projected into
//! that panel's clip space, so the renderer only has to switch viewports
//! between draw calls.

use crate::plot::{Curve, HLine, LineStyle, Panel, PlotScene, AXIS_COLOR};
use common::{Camera2D, Vertex};
use glam::{Mat4, Vec3};
use std::ops::Range;

/// Segments drawn then skipped for a dashed curve, in samples
const DASH: (usize, usize) = (8, 5);
/// Segments drawn then skipped for a dotted line, in subdivisions
const DOT: (usize, usize) = (1, 1);
/// Subdivisions of a horizontal line before a pattern is applied
const HLINE_SUBDIVISIONS: usize = 160;

/// Vertices for the whole scene plus the slice belonging to each panel
#[derive(Debug, Clone, Default)]
pub struct SceneGeometry {
    pub vertices: Vec<Vertex>,
    pub ranges: [Range<u32>; 3],
}

impl SceneGeometry {
    pub fn build(scene: &PlotScene) -> Self {
        let mut vertices = Vec::new();
        let mut ranges: [Range<u32>; 3] = Default::default();

        for (range, panel) in ranges.iter_mut().zip(&scene.panels) {
            let start = vertices.len() as u32;
            vertices.extend(panel_vertices(panel));
            *range = start..vertices.len() as u32;
        }

        log::debug!("scene geometry: {} vertices", vertices.len());
        Self { vertices, ranges }
    }
}

struct Projector {
    view_proj: Mat4,
}

impl Projector {
    fn for_panel(panel: &Panel) -> Self {
        let b = panel.bounds;
        let camera = Camera2D::fit_bounds(b.x_min as f32, b.x_max as f32, b.y_min as f32, b.y_max as f32);
        Self {
            view_proj: camera.view_projection(),
        }
    }

    fn vertex(&self, x: f64, y: f64, color: [f32; 4]) -> Vertex {
        let p = self.view_proj.project_point3(Vec3::new(x as f32, y as f32, 0.0));
        Vertex::new([p.x, p.y, 0.0], color)
    }
}

fn pattern(style: LineStyle) -> Option<(usize, usize)> {
    match style {
        LineStyle::Solid => None,
        LineStyle::Dashed => Some(DASH),
        LineStyle::Dotted => Some(DOT),
    }
}

/// Whether segment `i` is drawn under `style`
fn segment_visible(style: LineStyle, i: usize) -> bool {
    match pattern(style) {
        None => true,
        Some((on, off)) => i % (on + off) < on,
    }
}

fn push_polyline(
    out: &mut Vec<Vertex>,
    proj: &Projector,
    x: &[f64],
    y: &[f64],
    color: [f32; 4],
    style: LineStyle,
) {
    let points: Vec<(f64, f64)> = x
        .iter()
        .zip(y)
        .map(|(a, b)| (*a, *b))
        .filter(|(a, b)| a.is_finite() && b.is_finite())
        .collect();

    for (i, pair) in points.windows(2).enumerate() {
        if !segment_visible(style, i) {
            continue;
        }
        out.push(proj.vertex(pair[0].0, pair[0].1, color));
        out.push(proj.vertex(pair[1].0, pair[1].1, color));
    }
}

fn push_curve(out: &mut Vec<Vertex>, proj: &Projector, curve: &Curve) {
    push_polyline(out, proj, &curve.x, &curve.y, curve.color, curve.style);
}

fn push_hline(out: &mut Vec<Vertex>, proj: &Projector, panel: &Panel, line: &HLine) {
    let b = panel.bounds;
    let count = if line.style == LineStyle::Solid { 2 } else { HLINE_SUBDIVISIONS + 1 };
    let xs = crate::wavefunction::linspace(b.x_min, b.x_max, count);
    let ys = vec![line.y; xs.len()];
    push_polyline(out, proj, &xs, &ys, line.color, line.style);
}

/// Clip-space `LineList` vertices for one panel
///
/// Reference lines go first so the curves draw over them.
pub fn panel_vertices(panel: &Panel) -> Vec<Vertex> {
    let proj = Projector::for_panel(panel);
    let mut out = Vec::new();

    for line in &panel.hlines {
        push_hline(&mut out, &proj, panel, line);
    }
    if let Some(x0) = panel.vline {
        let b = panel.bounds;
        push_polyline(&mut out, &proj, &[x0, x0], &[b.y_min, b.y_max], AXIS_COLOR, LineStyle::Solid);
    }
    for curve in &panel.curves {
        push_curve(&mut out, &proj, curve);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::VizConfig;
    use crate::plot::{compose_scene, PanelKind, ViewState};
    use crate::selection::StateSelection;

    fn scene(selection: StateSelection) -> PlotScene {
        compose_scene(ViewState { selection }, &VizConfig::default())
    }

    #[test]
    fn vertices_stay_in_clip_space() {
        let geometry = SceneGeometry::build(&scene(StateSelection::All));
        assert!(!geometry.vertices.is_empty());
        assert_eq!(geometry.vertices.len() % 2, 0);
        for v in &geometry.vertices {
            assert!(v.position[0] >= -1.0001 && v.position[0] <= 1.0001, "{:?}", v);
            assert!(v.position[1] >= -1.0001 && v.position[1] <= 1.0001, "{:?}", v);
        }
    }

    #[test]
    fn panel_ranges_are_contiguous() {
        let geometry = SceneGeometry::build(&scene(StateSelection::Single(2)));
        let [a, b, c] = &geometry.ranges;
        assert_eq!(a.start, 0);
        assert_eq!(a.end, b.start);
        assert_eq!(b.end, c.start);
        assert_eq!(c.end as usize, geometry.vertices.len());
        assert!(a.end > a.start && b.end > b.start && c.end > c.start);
    }

    #[test]
    fn solid_curve_uses_every_segment() {
        let scene = scene(StateSelection::Single(0));
        let panel = scene.panel(PanelKind::Half);
        let proj = Projector::for_panel(panel);
        let mut out = Vec::new();
        push_curve(&mut out, &proj, &panel.curves[1]);
        assert_eq!(out.len(), 2 * (500 - 1));
    }

    #[test]
    fn dashed_and_dotted_lines_have_gaps() {
        let scene = scene(StateSelection::Single(0));
        let panel = scene.panel(PanelKind::Superposition);
        let proj = Projector::for_panel(panel);

        let dashed = &panel.curves[2];
        assert_eq!(dashed.style, LineStyle::Dashed);
        let mut out = Vec::new();
        push_curve(&mut out, &proj, dashed);
        let segments = out.len() / 2;
        assert!(segments > 0 && segments < 499, "segments = {}", segments);

        let dotted = panel.hlines.iter().find(|h| h.style == LineStyle::Dotted).unwrap();
        let mut out = Vec::new();
        push_hline(&mut out, &proj, panel, dotted);
        assert_eq!(out.len() / 2, HLINE_SUBDIVISIONS / 2);
    }

    #[test]
    fn level_line_lands_at_its_height() {
        let scene = scene(StateSelection::Single(4));
        let panel = scene.panel(PanelKind::Full);
        let proj = Projector::for_panel(panel);
        let b = panel.bounds;
        let expected = (2.0 * (4.0 - b.y_min) / (b.y_max - b.y_min) - 1.0) as f32;
        let v = proj.vertex(0.0, 4.0, [1.0; 4]);
        assert!((v.position[1] - expected).abs() < 1e-4);
    }
}
