/// Window size in CSS pixels plus the device pixel ratio used for the canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub css_width: f64,
    pub css_height: f64,
    pub pixel_ratio: f64,
}

impl Viewport {
    /// `device_pixel_ratio` is capped at `max_pixel_ratio`; unusable values fall back to 1.
    pub fn new(css_width: f64, css_height: f64, device_pixel_ratio: f64, max_pixel_ratio: f64) -> Self {
        let dpr = if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
            device_pixel_ratio
        } else {
            1.0
        };
        Self {
            css_width: css_width.max(0.0),
            css_height: css_height.max(0.0),
            pixel_ratio: dpr.min(max_pixel_ratio.max(1.0)),
        }
    }

    /// Canvas backing store size in physical pixels, never zero.
    pub fn backing_size(&self) -> (u32, u32) {
        let w = (self.css_width * self.pixel_ratio).floor() as u32;
        let h = (self.css_height * self.pixel_ratio).floor() as u32;
        (w.max(1), h.max(1))
    }

    /// Width over height; a collapsed viewport reports 1.
    pub fn aspect(&self) -> f32 {
        if self.css_width > 0.0 && self.css_height > 0.0 {
            (self.css_width / self.css_height) as f32
        } else {
            1.0
        }
    }
}
