//! Picture-in-picture viewport for the detection camera preview.

use courtsim_core::PipOptions;

/// Size and visibility of the secondary view.
///
/// The width is fixed; the height follows the lens aspect ratio rather than
/// the window's, so the preview shows exactly what the sensor would.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipViewport {
    enabled: bool,
    base_width: f32,
    height: f32,
}

impl PipViewport {
    pub fn new(options: &PipOptions, aspect_ratio: f32) -> Self {
        let mut viewport = Self {
            enabled: options.enabled,
            base_width: options.base_width,
            height: 0.0,
        };
        viewport.resize_for_aspect(aspect_ratio);
        viewport
    }

    /// Recomputes the height for a new aspect ratio.
    pub fn resize_for_aspect(&mut self, aspect_ratio: f32) {
        self.height = self.base_width / aspect_ratio;
    }

    pub fn width(&self) -> f32 {
        self.base_width
    }

    /// Display height; may be fractional.
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Pixel buffer size, truncated and at least one pixel on each side.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn pixel_size(&self) -> (u32, u32) {
        let to_px = |v: f32| if v.is_finite() { (v as u32).max(1) } else { 1 };
        (to_px(self.base_width), to_px(self.height))
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Flips visibility and returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.enabled = !self.enabled;
        self.enabled
    }
}

impl Default for PipViewport {
    fn default() -> Self {
        Self::new(&PipOptions::default(), 16.0 / 9.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_height_follows_aspect() {
        let mut viewport = PipViewport::new(&PipOptions::default(), 1.8);
        assert_eq!(viewport.width(), 320.0);
        assert!((viewport.height() - 177.777_78).abs() < 1e-3);
        assert_eq!(viewport.pixel_size(), (320, 177));

        viewport.resize_for_aspect(1.0);
        assert_eq!(viewport.pixel_size(), (320, 320));
    }

    #[test]
    fn test_default_is_widescreen_and_hidden() {
        let viewport = PipViewport::default();
        assert!(!viewport.is_enabled());
        assert_eq!(viewport.pixel_size(), (320, 180));
    }

    #[test]
    fn test_degenerate_aspect() {
        let mut viewport = PipViewport::default();
        viewport.resize_for_aspect(0.0);
        assert_eq!(viewport.pixel_size(), (320, 1));
        viewport.resize_for_aspect(1_000_000.0);
        assert_eq!(viewport.pixel_size().1, 1);
    }

    #[test]
    fn test_toggle() {
        let mut viewport = PipViewport::default();
        assert!(viewport.toggle());
        assert!(!viewport.toggle());
    }
}
