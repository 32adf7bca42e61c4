//! egui panels: state selector, program information, footer and the text
//! annotations drawn over the plots

use crate::axis::{format_tick, nice_ticks};
use crate::layout::{data_rect, to_screen};
use crate::plot::{LineStyle, Panel, PlotScene, X_LABEL, Y_LABEL};
use crate::selection::StateSelection;
use crate::wavefunction::energy;
use egui::{pos2, vec2, Align2, Color32, Context, FontFamily, FontId, Rect, RichText, Stroke};

const HEADING_COLOR: Color32 = Color32::from_rgb(100, 200, 255);
const SECTION_COLOR: Color32 = Color32::from_rgb(255, 200, 100);
const LABEL_COLOR: Color32 = Color32::from_rgb(210, 210, 220);
const FRAME_COLOR: Color32 = Color32::from_rgb(120, 120, 140);
const FORMULA_COLOR: Color32 = Color32::from_rgb(200, 220, 255);
const SYMBOL_COLOR: Color32 = Color32::from_rgb(150, 255, 150);

pub const DEVELOPER_NAME: &str = "Shashwata Nayak";
pub const REPOSITORY_URL: &str = "https://github.com/shashwatanayak";
pub const CONTACT_EMAIL: &str = "shashwata@versatilex.in";

/// Equation entry with label and formula
pub struct Equation {
    pub name: &'static str,
    pub formula: &'static str,
    pub description: &'static str,
}

pub const OSCILLATOR_EQUATIONS: &[Equation] = &[
    Equation {
        name: "Eigenfunctions",
        formula: "ψₙ(x) = Nₙ Hₙ(x) e^(-x²/2)",
        description: "Stationary states of the oscillator",
    },
    Equation {
        name: "Normalization",
        formula: "Nₙ = (2ⁿ n!)^(-1/2) π^(-1/4)",
        description: "Makes ∫|ψₙ|² dx = 1",
    },
    Equation {
        name: "Hermite Recurrence",
        formula: "Hₙ₊₁ = 2x Hₙ - 2n Hₙ₋₁",
        description: "H₀ = 1, H₁ = 2x",
    },
    Equation {
        name: "Energy Levels",
        formula: "Eₙ = ℏω(n + ½)",
        description: "Evenly spaced spectrum",
    },
    Equation {
        name: "Potential",
        formula: "V(x) = ½ x²",
        description: "Quadratic well (m = ω = ℏ = 1)",
    },
];

pub const OSCILLATOR_VARIABLES: &[(&str, &str)] = &[
    ("n", "Quantum state index"),
    ("x", "Position"),
    ("ψₙ", "Wavefunction of state n"),
    ("Hₙ", "Hermite polynomial"),
    ("Nₙ", "Normalization constant"),
    ("V(x)", "Potential energy"),
];

/// Energy of the drawn state, when exactly one state is drawn
pub fn energy_label(applied: StateSelection) -> Option<String> {
    match applied {
        StateSelection::All => None,
        StateSelection::Single(n) => Some(format!("E{} = {} ℏω", n, energy(n))),
    }
}

/// First "How to Use" line, naming the selectable range
pub fn usage_text(max_state: u32) -> String {
    format!("• Select a quantum state (0 to {}) from the dropdown menu.", max_state)
}

/// What the user asked for this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ControlResponse {
    pub calculate: bool,
}

/// Top bar with the state dropdown and the Calculate button
pub fn draw_control_bar(
    ctx: &Context,
    pending: &mut StateSelection,
    applied: StateSelection,
    max_state: u32,
    show_legend: &mut bool,
) -> ControlResponse {
    let mut response = ControlResponse::default();

    egui::TopBottomPanel::top("controls").show(ctx, |ui| {
        ui.add_space(4.0);
        ui.vertical_centered(|ui| {
            ui.heading(
                RichText::new("Quantum Harmonic Oscillator - Visualization Tool")
                    .strong()
                    .color(HEADING_COLOR),
            );
        });
        ui.add_space(4.0);
        ui.horizontal(|ui| {
            ui.label("Select State:");
            egui::ComboBox::from_id_source("state_selector")
                .selected_text(pending.to_string())
                .show_ui(ui, |ui| {
                    for option in StateSelection::options(max_state) {
                        ui.selectable_value(pending, option, option.to_string());
                    }
                });
            if ui.button("Calculate").clicked() {
                response.calculate = true;
            }
            ui.separator();
            ui.checkbox(show_legend, "Legend");
            ui.separator();
            ui.label(RichText::new(format!("Showing: {}", applied)).color(Color32::GRAY));
            if let Some(label) = energy_label(applied) {
                ui.label(RichText::new(label).color(FORMULA_COLOR));
            }
        });
        ui.add_space(4.0);
    });

    response
}

/// Right-hand "Program Information" sidebar
pub fn draw_info_sidebar(
    ctx: &Context,
    equations: &[Equation],
    variables: &[(&str, &str)],
    max_state: u32,
) {
    egui::SidePanel::right("info_panel")
        .min_width(280.0)
        .max_width(360.0)
        .resizable(true)
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.heading(RichText::new("Program Information").color(HEADING_COLOR));
                });
                ui.add_space(8.0);

                section(ui, "How to Use", |ui| {
                    ui.label(usage_text(max_state));
                    ui.label("• Click 'Calculate' (or press Enter) to generate the plots.");
                    ui.label(
                        RichText::new("Up/Down step the state, A selects all, L toggles the legend.")
                            .small()
                            .color(Color32::GRAY),
                    );
                });

                section(ui, "Features", |ui| {
                    ui.label("• The left plot shows the wavefunctions and energy levels of the Full Harmonic Oscillator.");
                    ui.label("• The right plot shows the wavefunctions and energy levels of the Half Harmonic Oscillator.");
                    ui.label("• The bottom plot shows the superposition of the Full and Half Harmonic Oscillator.");
                });

                ui.separator();
                section(ui, "Equations", |ui| {
                    egui::Grid::new("equations")
                        .num_columns(2)
                        .spacing([10.0, 8.0])
                        .show(ui, |ui| {
                            for eq in equations {
                                ui.label(RichText::new(eq.name).strong());
                                ui.vertical(|ui| {
                                    ui.label(RichText::new(eq.formula).font(FontId::monospace(15.0)).color(FORMULA_COLOR));
                                    ui.label(RichText::new(eq.description).small().color(Color32::GRAY));
                                });
                                ui.end_row();
                            }
                        });
                });

                ui.separator();
                section(ui, "Variables", |ui| {
                    egui::Grid::new("variables").num_columns(2).show(ui, |ui| {
                        for (symbol, meaning) in variables {
                            ui.label(RichText::new(*symbol).font(FontId::new(14.0, FontFamily::Monospace)).color(SYMBOL_COLOR));
                            ui.label(RichText::new(*meaning).color(Color32::LIGHT_GRAY));
                            ui.end_row();
                        }
                    });
                });
            });
        });
}

/// Colored heading followed by its contents
fn section(ui: &mut egui::Ui, title: &str, body: impl FnOnce(&mut egui::Ui)) {
    ui.label(RichText::new(title).strong().color(SECTION_COLOR));
    ui.add_space(4.0);
    body(ui);
    ui.add_space(8.0);
}

/// Bottom credits line with clickable links
pub fn draw_footer(ctx: &Context) {
    egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
        ui.horizontal_centered(|ui| {
            ui.label(RichText::new("This Program is Developed by").strong());
            ui.hyperlink_to(RichText::new(DEVELOPER_NAME).strong(), REPOSITORY_URL);
            ui.label(RichText::new("| GitHub Repository:").strong());
            ui.hyperlink_to(RichText::new("[Click Here]").strong(), REPOSITORY_URL);
            ui.label(RichText::new("| Contact:").strong());
            ui.hyperlink_to(
                RichText::new(CONTACT_EMAIL).strong(),
                format!("mailto:{}", CONTACT_EMAIL),
            );
        });
    });
}

/// Titles, frames, ticks, axis labels and the optional legend for each panel
pub fn draw_plot_annotations(ctx: &Context, scene: &PlotScene, rects: &[Rect; 3], show_legend: bool) {
    let painter = ctx.layer_painter(egui::LayerId::background());

    for (panel, outer) in scene.panels.iter().zip(rects) {
        let data = data_rect(*outer);
        if data.width() < 1.0 || data.height() < 1.0 {
            continue;
        }
        let text_font = FontId::proportional(12.0);

        painter.text(
            pos2(data.center().x, outer.min.y + 4.0),
            Align2::CENTER_TOP,
            panel.title(),
            FontId::proportional(15.0),
            Color32::WHITE,
        );
        painter.rect_stroke(data, 0.0, Stroke::new(1.0, FRAME_COLOR));

        draw_ticks(&painter, panel, data, &text_font);

        painter.text(
            pos2(data.center().x, outer.max.y - 2.0),
            Align2::CENTER_BOTTOM,
            X_LABEL,
            text_font.clone(),
            LABEL_COLOR,
        );
        painter.text(
            pos2(data.min.x, data.min.y - 2.0),
            Align2::LEFT_BOTTOM,
            Y_LABEL,
            text_font.clone(),
            LABEL_COLOR,
        );

        if show_legend {
            draw_legend(&painter, panel, data, &text_font);
        }
    }
}

fn draw_ticks(painter: &egui::Painter, panel: &Panel, data: Rect, font: &FontId) {
    let b = &panel.bounds;
    let tick = Stroke::new(1.0, FRAME_COLOR);

    let x_ticks = nice_ticks(b.x_min, b.x_max, ((data.width() / 70.0) as usize).max(2));
    let x_step = step_of(&x_ticks);
    for x in x_ticks {
        let p = to_screen(data, b, x, b.y_min);
        painter.line_segment([p, p + vec2(0.0, 4.0)], tick);
        painter.text(p + vec2(0.0, 6.0), Align2::CENTER_TOP, format_tick(x, x_step), font.clone(), LABEL_COLOR);
    }

    let y_ticks = nice_ticks(b.y_min, b.y_max, ((data.height() / 40.0) as usize).max(2));
    let y_step = step_of(&y_ticks);
    for y in y_ticks {
        let p = to_screen(data, b, b.x_min, y);
        painter.line_segment([p, p - vec2(4.0, 0.0)], tick);
        painter.text(p - vec2(6.0, 0.0), Align2::RIGHT_CENTER, format_tick(y, y_step), font.clone(), LABEL_COLOR);
    }
}

fn step_of(ticks: &[f64]) -> f64 {
    match ticks {
        [a, b, ..] => b - a,
        _ => 1.0,
    }
}

fn draw_legend(painter: &egui::Painter, panel: &Panel, data: Rect, font: &FontId) {
    let row = 15.0;
    let max_rows = ((data.height() - 8.0) / row).max(0.0) as usize;
    let mut pos = pos2(data.max.x - 130.0, data.min.y + 6.0);

    for curve in panel.curves.iter().take(max_rows) {
        let [r, g, b, a] = curve.color;
        let color = Color32::from_rgba_unmultiplied(
            (r * 255.0) as u8,
            (g * 255.0) as u8,
            (b * 255.0) as u8,
            (a * 255.0) as u8,
        );
        let swatch = [pos + vec2(0.0, row / 2.0), pos + vec2(18.0, row / 2.0)];
        match curve.style {
            LineStyle::Solid => {
                painter.line_segment(swatch, Stroke::new(2.0, color));
            }
            LineStyle::Dashed | LineStyle::Dotted => {
                painter.line_segment([swatch[0], swatch[0] + vec2(7.0, 0.0)], Stroke::new(2.0, color));
                painter.line_segment([swatch[1] - vec2(7.0, 0.0), swatch[1]], Stroke::new(2.0, color));
            }
        }
        painter.text(pos + vec2(24.0, row / 2.0), Align2::LEFT_CENTER, &curve.label, font.clone(), LABEL_COLOR);
        pos.y += row;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn energy_shown_for_single_state_only() {
        assert_eq!(energy_label(StateSelection::All), None);
        assert_eq!(energy_label(StateSelection::Single(0)).as_deref(), Some("E0 = 0.5 ℏω"));
        assert_eq!(energy_label(StateSelection::Single(7)).as_deref(), Some("E7 = 7.5 ℏω"));
    }

    #[test]
    fn usage_names_configured_range() {
        assert_eq!(usage_text(10), "• Select a quantum state (0 to 10) from the dropdown menu.");
        assert!(usage_text(60).contains("(0 to 60)"));
    }

    #[test]
    fn equation_table_is_complete() {
        let names: Vec<&str> = OSCILLATOR_EQUATIONS.iter().map(|eq| eq.name).collect();
        assert_eq!(
            names,
            ["Eigenfunctions", "Normalization", "Hermite Recurrence", "Energy Levels", "Potential"]
        );
        for eq in OSCILLATOR_EQUATIONS {
            assert!(!eq.formula.is_empty() && !eq.description.is_empty(), "{}", eq.name);
        }
        assert!(OSCILLATOR_VARIABLES.iter().any(|(symbol, _)| *symbol == "ψₙ"));
    }
}
