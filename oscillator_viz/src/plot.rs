//! Plot composition
//!
//! Turns a view state into the three panels shown by the application. The
//! result is plain data in plot coordinates; drawing happens elsewhere.

use crate::axis::Bounds;
use crate::config::{Domain, VizConfig};
use crate::selection::StateSelection;
use crate::wavefunction::{linspace, offset_by_level, potential_curve, Eigenstate};

/// Fraction of the y-span added above and below the data
const Y_PADDING: f64 = 0.05;

pub const POTENTIAL_LABEL: &str = "Potential (1/2 x²)";
pub const X_LABEL: &str = "x";
pub const Y_LABEL: &str = "ψ(x) + Energy Level";

/// Ten-color categorical palette for state curves
pub const PALETTE: [[f32; 4]; 10] = [
    [0.122, 0.467, 0.706, 1.0],
    [1.000, 0.498, 0.055, 1.0],
    [0.173, 0.627, 0.173, 1.0],
    [0.839, 0.153, 0.157, 1.0],
    [0.580, 0.404, 0.741, 1.0],
    [0.549, 0.337, 0.294, 1.0],
    [0.890, 0.467, 0.761, 1.0],
    [0.498, 0.498, 0.498, 1.0],
    [0.737, 0.741, 0.133, 1.0],
    [0.090, 0.745, 0.812, 1.0],
];

pub const POTENTIAL_COLOR: [f32; 4] = [0.92, 0.92, 0.92, 1.0];
pub const LEVEL_COLOR: [f32; 4] = [0.5, 0.5, 0.5, 0.8];
pub const AXIS_COLOR: [f32; 4] = [0.85, 0.85, 0.85, 0.6];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Solid,
    Dashed,
    Dotted,
}

/// A labelled polyline in plot coordinates
#[derive(Debug, Clone)]
pub struct Curve {
    pub label: String,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub color: [f32; 4],
    pub style: LineStyle,
}

/// Horizontal line spanning the panel width
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HLine {
    pub y: f64,
    pub color: [f32; 4],
    pub style: LineStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelKind {
    Full,
    Half,
    Superposition,
}

impl PanelKind {
    pub fn title(&self) -> &'static str {
        match self {
            PanelKind::Full => "Harmonic Oscillator with Potential",
            PanelKind::Half => "Half Harmonic Oscillator with Potential",
            PanelKind::Superposition => "Superposition of Full and Half Harmonic Oscillator",
        }
    }
}

/// One plot: curves, reference levels and the extent to show
#[derive(Debug, Clone)]
pub struct Panel {
    pub kind: PanelKind,
    pub bounds: Bounds,
    pub curves: Vec<Curve>,
    /// Dotted energy levels and the y = 0 axis
    pub hlines: Vec<HLine>,
    /// Vertical axis line at x = 0, if it lies inside the panel
    pub vline: Option<f64>,
}

impl Panel {
    pub fn title(&self) -> &'static str {
        self.kind.title()
    }
}

/// Explicit state handed to a redraw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewState {
    pub selection: StateSelection,
}

/// The three composed panels
#[derive(Debug, Clone)]
pub struct PlotScene {
    pub view: ViewState,
    pub panels: [Panel; 3],
}

impl PlotScene {
    pub fn panel(&self, kind: PanelKind) -> &Panel {
        match kind {
            PanelKind::Full => &self.panels[0],
            PanelKind::Half => &self.panels[1],
            PanelKind::Superposition => &self.panels[2],
        }
    }
}

/// Color for state `n`
pub fn state_color(n: u32) -> [f32; 4] {
    PALETTE[n as usize % PALETTE.len()]
}

/// Sampled wavefunction shifted by its level
fn stacked_state(state: &Eigenstate, grid: &[f64]) -> Vec<f64> {
    let mut y = state.sample(grid);
    offset_by_level(&mut y, state.n);
    y
}

struct PanelBuilder {
    kind: PanelKind,
    domain: Domain,
    curves: Vec<Curve>,
    levels: Vec<u32>,
}

impl PanelBuilder {
    fn new(kind: PanelKind, domain: Domain, grid: &[f64]) -> Self {
        let potential = Curve {
            label: POTENTIAL_LABEL.to_string(),
            x: grid.to_vec(),
            y: potential_curve(grid),
            color: POTENTIAL_COLOR,
            style: LineStyle::Solid,
        };
        Self {
            kind,
            domain,
            curves: vec![potential],
            levels: Vec::new(),
        }
    }

    fn curve(&mut self, label: String, x: &[f64], y: Vec<f64>, color: [f32; 4], style: LineStyle) {
        self.curves.push(Curve {
            label,
            x: x.to_vec(),
            y,
            color,
            style,
        });
    }

    fn level(&mut self, n: u32) {
        self.levels.push(n);
    }

    fn finish(self) -> Panel {
        let y_values = self.curves.iter().flat_map(|c| c.y.iter());
        let (lo, hi) = Bounds::y_extent(y_values).unwrap_or((0.0, 1.0));
        let lo = lo.min(0.0);
        let hi = self.levels.iter().fold(hi, |acc, &n| acc.max(n as f64));
        let bounds = Bounds::new(self.domain.start, self.domain.end, lo, hi).pad_y(Y_PADDING);

        let mut hlines: Vec<HLine> = self
            .levels
            .iter()
            .map(|&n| HLine {
                y: n as f64,
                color: LEVEL_COLOR,
                style: LineStyle::Dotted,
            })
            .collect();
        hlines.push(HLine {
            y: 0.0,
            color: AXIS_COLOR,
            style: LineStyle::Solid,
        });

        let vline = (self.domain.start <= 0.0 && self.domain.end >= 0.0).then_some(0.0);

        Panel {
            kind: self.kind,
            bounds,
            curves: self.curves,
            hlines,
            vline,
        }
    }
}

/// Compose all three panels for `view`
pub fn compose_scene(view: ViewState, config: &VizConfig) -> PlotScene {
    let full_grid = linspace(config.full_domain.start, config.full_domain.end, config.samples);
    let half_grid = linspace(config.half_domain.start, config.half_domain.end, config.samples);
    let states = view.selection.states(config.max_state);
    log::debug!(
        "composing {} state(s) on {} samples per domain",
        states.len(),
        config.samples
    );

    let mut full = PanelBuilder::new(PanelKind::Full, config.full_domain, &full_grid);
    let mut half = PanelBuilder::new(PanelKind::Half, config.half_domain, &half_grid);
    let mut superposition =
        PanelBuilder::new(PanelKind::Superposition, config.full_domain, &full_grid);

    for n in states {
        let state = Eigenstate::new(n);
        let color = state_color(n);
        let y_full = stacked_state(&state, &full_grid);
        let y_half = stacked_state(&state, &half_grid);

        full.curve(format!("State {}", n), &full_grid, y_full.clone(), color, LineStyle::Solid);
        full.level(n);

        half.curve(format!("State {}", n), &half_grid, y_half.clone(), color, LineStyle::Solid);
        half.level(n);

        superposition.curve(format!("Full State {}", n), &full_grid, y_full, color, LineStyle::Solid);
        superposition.curve(format!("Half State {}", n), &half_grid, y_half, color, LineStyle::Dashed);
        superposition.level(n);
    }

    PlotScene {
        view,
        panels: [full.finish(), half.finish(), superposition.finish()],
    }
}
