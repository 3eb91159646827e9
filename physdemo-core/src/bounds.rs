use glam::Vec2;

pub const BOX_LEFT: f32 = -0.8;
pub const BOX_RIGHT: f32 = 0.8;
pub const BOX_TOP: f32 = 0.6;
pub const BOX_BOTTOM: f32 = -0.6;

/// Rectangular region shared by every demo that keeps bodies in a box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Bounds {
    pub const fn new(left: f32, right: f32, top: f32, bottom: f32) -> Self {
        Self {
            left,
            right,
            top,
            bottom,
        }
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.top - self.bottom
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(
            (self.left + self.right) * 0.5,
            (self.top + self.bottom) * 0.5,
        )
    }

    /// Check that a body with the given half extent lies fully inside
    pub fn contains(&self, pos: Vec2, half_extent: f32) -> bool {
        pos.x - half_extent >= self.left
            && pos.x + half_extent <= self.right
            && pos.y - half_extent >= self.bottom
            && pos.y + half_extent <= self.top
    }

    /// Clamp a position so a body with the given half extent stays inside
    pub fn clamp(&self, pos: &mut Vec2, half_extent: f32) {
        pos.x = pos.x.clamp(self.left + half_extent, self.right - half_extent);
        pos.y = pos.y.clamp(self.bottom + half_extent, self.top - half_extent);
    }

    /// Reflect-and-clamp a body against the walls.
    ///
    /// Each axis is handled independently: when the leading edge crosses a
    /// wall, the velocity component on that axis is negated and the position
    /// is clamped so the body sits just inside.
    pub fn reflect(&self, pos: &mut Vec2, vel: &mut Vec2, half_extent: f32) {
        if pos.x - half_extent < self.left {
            pos.x = self.left + half_extent;
            vel.x = -vel.x;
        } else if pos.x + half_extent > self.right {
            pos.x = self.right - half_extent;
            vel.x = -vel.x;
        }

        if pos.y - half_extent < self.bottom {
            pos.y = self.bottom + half_extent;
            vel.y = -vel.y;
        } else if pos.y + half_extent > self.top {
            pos.y = self.top - half_extent;
            vel.y = -vel.y;
        }
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::new(BOX_LEFT, BOX_RIGHT, BOX_TOP, BOX_BOTTOM)
    }
}
