//! 2D rectangles and bias alignment

/// Axis-aligned rectangle in frame-buffer coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub const fn right(self) -> f32 {
        self.x + self.w
    }

    pub const fn bottom(self) -> f32 {
        self.y + self.h
    }

    /// Center point of the rectangle
    pub const fn center(self) -> (f32, f32) {
        (self.x + self.w * 0.5, self.y + self.h * 0.5)
    }

    pub fn is_empty(self) -> bool {
        self.w <= 0.0 || self.h <= 0.0
    }

    /// Shrink the rectangle by the same amount on all sides
    pub fn inset(self, amount: f32) -> Self {
        self.inset_each(amount, amount, amount, amount)
    }

    /// Shrink the rectangle by per-side amounts
    ///
    /// Degenerate insets clamp the size at zero instead of producing a
    /// negative extent.
    pub fn inset_each(self, top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self {
            x: self.x + left,
            y: self.y + top,
            w: (self.w - left - right).max(0.0),
            h: (self.h - top - bottom).max(0.0),
        }
    }

    /// Check whether a point lies inside the rectangle
    pub fn contains(self, px: f32, py: f32) -> bool {
        px >= self.x && px < self.right() && py >= self.y && py < self.bottom()
    }
}

/// Place a box of the given size inside a container using bias alignment
///
/// Bias is a fraction of the free space along each axis in `[-1, 1]`:
/// -1 aligns to the top/left edge, 0 centers, 1 aligns to the
/// bottom/right edge.
pub fn bias_align(container: Rect, w: f32, h: f32, bias_x: f32, bias_y: f32) -> Rect {
    let free_x = container.w - w;
    let free_y = container.h - h;
    Rect {
        x: container.x + free_x * (bias_x + 1.0) * 0.5,
        y: container.y + free_y * (bias_y + 1.0) * 0.5,
        w,
        h,
    }
}
