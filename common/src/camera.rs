//! Orthographic camera for 2D plots

use glam::{Mat4, Vec3};

/// 2D orthographic camera
///
/// `zoom` is the half-height of the visible region in world units and
/// `aspect_ratio` scales it horizontally, so the visible region is
/// `position ± (zoom * aspect_ratio, zoom)`.
#[derive(Debug, Clone)]
pub struct Camera2D {
    pub position: Vec3,
    pub zoom: f32,
    pub aspect_ratio: f32,
}

impl Camera2D {
    /// Camera whose visible region is exactly `[x_min, x_max] × [y_min, y_max]`.
    ///
    /// Degenerate extents are widened to a unit span so the projection stays
    /// invertible.
    pub fn fit_bounds(x_min: f32, x_max: f32, y_min: f32, y_max: f32) -> Self {
        let half_width = ((x_max - x_min) / 2.0).abs().max(0.5);
        let half_height = ((y_max - y_min) / 2.0).abs().max(0.5);

        Self {
            position: Vec3::new((x_min + x_max) / 2.0, (y_min + y_max) / 2.0, 0.0),
            zoom: half_height,
            aspect_ratio: half_width / half_height,
        }
    }

    /// Get the view-projection matrix
    pub fn view_projection(&self) -> Mat4 {
        let half_width = self.zoom * self.aspect_ratio;
        let half_height = self.zoom;

        let projection = Mat4::orthographic_rh(
            -half_width,
            half_width,
            -half_height,
            half_height,
            -1.0,
            1.0,
        );

        let view = Mat4::from_translation(-self.position);

        projection * view
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(camera: &Camera2D, x: f32, y: f32) -> Vec3 {
        camera.view_projection().project_point3(Vec3::new(x, y, 0.0))
    }

    #[test]
    fn fitted_bounds_map_to_clip_corners() {
        let camera = Camera2D::fit_bounds(-4.0, 4.0, -1.0, 11.0);

        let lo = project(&camera, -4.0, -1.0);
        let hi = project(&camera, 4.0, 11.0);
        let mid = project(&camera, 0.0, 5.0);

        assert!((lo.x + 1.0).abs() < 1e-5 && (lo.y + 1.0).abs() < 1e-5, "{:?}", lo);
        assert!((hi.x - 1.0).abs() < 1e-5 && (hi.y - 1.0).abs() < 1e-5, "{:?}", hi);
        assert!(mid.x.abs() < 1e-5 && mid.y.abs() < 1e-5, "{:?}", mid);
    }

    #[test]
    fn degenerate_bounds_are_widened() {
        let camera = Camera2D::fit_bounds(2.0, 2.0, 3.0, 3.0);
        let p = project(&camera, 2.0, 3.0);
        assert!(p.x.abs() < 1e-5 && p.y.abs() < 1e-5);
        assert!(camera.zoom > 0.0 && camera.aspect_ratio > 0.0);
    }
}
