//! Common utilities for the visualization crates
//!
//! This crate provides shared graphics setup, the orthographic plot camera and
//! the vertex type used by the line renderers.

pub mod graphics;
pub mod camera;

pub use graphics::*;
pub use camera::*;
