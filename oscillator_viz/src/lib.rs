//! Quantum Harmonic Oscillator Visualization
//!
//! Evaluates the oscillator eigenfunctions
//! `ψₙ(x) = (2ⁿ n!)^(-1/2) π^(-1/4) Hₙ(x) e^(-x²/2)` on a sampling grid and
//! draws them, stacked by energy level, over the potential well `V(x) = x²/2`
//! in three panels:
//!
//! - **Full oscillator**: x ∈ [-4, 4]
//! - **Half oscillator**: x ∈ [0, 4]
//! - **Superposition**: both of the above on one axis

pub mod hermite;
pub mod wavefunction;
pub mod selection;
pub mod config;
pub mod axis;
pub mod plot;
pub mod geometry;
pub mod layout;
pub mod assets;
pub mod renderer;
pub mod info_ui;

pub use config::{ConfigError, VizConfig};
pub use plot::{compose_scene, PlotScene, ViewState};
pub use selection::StateSelection;
pub use wavefunction::{evaluate, potential};
