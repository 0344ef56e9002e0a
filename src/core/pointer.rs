use glam::Vec2;

/// Normalized pointer position, `[-1, 1]` on both axes with +y up.
#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct PointerTarget {
    pub x: f32,
    pub y: f32,
}

impl PointerTarget {
    /// Map viewport client coordinates to the normalized target.
    ///
    /// A zero-sized viewport maps to the center.
    pub fn from_client(client_x: f32, client_y: f32, width: f32, height: f32) -> Self {
        if width <= 0.0 || height <= 0.0 {
            return Self::default();
        }
        let x = (client_x / width - 0.5) * 2.0;
        let y = -(client_y / height - 0.5) * 2.0;
        Self {
            x: x.clamp(-1.0, 1.0),
            y: y.clamp(-1.0, 1.0),
        }
    }

    #[inline]
    pub fn as_vec2(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}
