use glam::Mat4;

use crate::config::ViewConfig;

/// Active projection, sticky until the other mode is selected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectionMode {
    #[default]
    Perspective,
    Orthographic,
}

impl ProjectionMode {
    /// Projection matrix for this mode.
    ///
    /// `zoom` is the vertical field of view in degrees and only affects
    /// perspective; the orthographic volume is a fixed symmetric box.
    pub fn matrix(self, zoom: f32, aspect: f32, config: &ViewConfig) -> Mat4 {
        match self {
            ProjectionMode::Perspective => {
                Mat4::perspective_rh(zoom.to_radians(), aspect, config.near, config.far)
            }
            ProjectionMode::Orthographic => {
                let e = config.ortho_half_extent;
                Mat4::orthographic_rh(-e, e, -e, e, config.near, config.far)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_perspective() {
        assert_eq!(ProjectionMode::default(), ProjectionMode::Perspective);
    }

    #[test]
    fn test_orthographic_ignores_zoom_and_aspect() {
        let config = ViewConfig::default();
        let expected = Mat4::orthographic_rh(-10.0, 10.0, -10.0, 10.0, 0.1, 100.0);
        for (zoom, aspect) in [(1.0, 1.0), (45.0, 1.25), (80.0, 2.0), (179.0, 0.5)] {
            assert_eq!(ProjectionMode::Orthographic.matrix(zoom, aspect, &config), expected);
        }
    }

    #[test]
    fn test_perspective_uses_zoom() {
        let config = ViewConfig::default();
        let narrow = ProjectionMode::Perspective.matrix(30.0, 1.25, &config);
        let wide = ProjectionMode::Perspective.matrix(80.0, 1.25, &config);
        assert_ne!(narrow, wide);
        assert_eq!(wide, Mat4::perspective_rh(80f32.to_radians(), 1.25, 0.1, 100.0));
    }
}
