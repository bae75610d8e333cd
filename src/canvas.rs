//! Software 2D canvas over an RGB frame buffer
//!
//! All primitives composite into the buffer with 8-bit alpha coverage.
//! Shapes are antialiased through signed-distance coverage; shadows use
//! a smoothstep falloff around the silhouette edge instead of a true
//! gaussian blur, which is indistinguishable at the blur radii used here
//! and needs no intermediate buffer.

use core::ops::Range;

use libm::{fabsf, sqrtf};

use crate::color::{Rgb, blend_colors, three_stop_gradient};
use crate::geometry::Rect;
use crate::math::{scale8, smoothstepf};

/// Drawing target wrapping a row-major pixel slice
pub struct Canvas<'a> {
    pixels: &'a mut [Rgb],
    width: usize,
    height: usize,
}

/// Signed distance from a point to a rounded rectangle outline
///
/// Negative inside, positive outside, zero on the edge. The corner
/// radius is capped at half the shorter side, so a radius of half the
/// side of a square yields a circle.
fn rounded_rect_distance(px: f32, py: f32, rect: Rect, radius: f32) -> f32 {
    let r = radius.min(rect.w * 0.5).min(rect.h * 0.5).max(0.0);
    let (cx, cy) = rect.center();
    let qx = fabsf(px - cx) - (rect.w * 0.5 - r);
    let qy = fabsf(py - cy) - (rect.h * 0.5 - r);
    let dx = qx.max(0.0);
    let dy = qy.max(0.0);
    sqrtf(dx * dx + dy * dy) + qx.max(qy).min(0.0) - r
}

/// Convert fractional coverage and an opacity into an 8-bit alpha
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn alpha8(coverage: f32, opacity: u8) -> u8 {
    scale8((coverage.clamp(0.0, 1.0) * 255.0) as u8, opacity)
}

/// Clip a fractional coordinate span to pixel indices
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn pixel_span(lo: f32, hi: f32, limit: usize) -> Range<usize> {
    if limit == 0 || hi <= 0.0 || lo >= hi {
        return 0..0;
    }
    let start = if lo <= 0.0 { 0 } else { lo as usize };
    let end = ((hi as usize) + 1).min(limit);
    if start >= end { 0..0 } else { start..end }
}

impl<'a> Canvas<'a> {
    /// Wrap a pixel slice as a drawing target
    ///
    /// If the slice is shorter than `width * height`, the visible height
    /// is reduced to the rows that fit.
    pub fn new(pixels: &'a mut [Rgb], width: usize, height: usize) -> Self {
        let height = if width == 0 {
            0
        } else {
            height.min(pixels.len() / width)
        };
        Self {
            pixels,
            width,
            height,
        }
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    /// Composite a single pixel with the given alpha
    fn blend_px(&mut self, x: usize, y: usize, color: Rgb, alpha: u8) {
        if alpha == 0 {
            return;
        }
        let index = y * self.width + x;
        if alpha == 255 {
            self.pixels[index] = color;
        } else {
            self.pixels[index] = blend_colors(self.pixels[index], color, alpha);
        }
    }

    /// Fill the whole buffer with a solid color
    pub fn fill(&mut self, color: Rgb) {
        for px in self.pixels.iter_mut() {
            *px = color;
        }
    }

    /// Fill an antialiased rounded rectangle
    pub fn fill_rounded_rect(&mut self, rect: Rect, radius: f32, color: Rgb, opacity: u8) {
        if rect.is_empty() || opacity == 0 {
            return;
        }
        for y in pixel_span(rect.y - 1.0, rect.bottom() + 1.0, self.height) {
            for x in pixel_span(rect.x - 1.0, rect.right() + 1.0, self.width) {
                #[allow(clippy::cast_precision_loss)]
                let d = rounded_rect_distance(x as f32 + 0.5, y as f32 + 0.5, rect, radius);
                let coverage = (0.5 - d).clamp(0.0, 1.0);
                self.blend_px(x, y, color, alpha8(coverage, opacity));
            }
        }
    }

    /// Fill a rounded rectangle with a vertical three-stop gradient
    ///
    /// Gradient stops are spread evenly over the rectangle height.
    pub fn fill_rounded_rect_gradient(
        &mut self,
        rect: Rect,
        radius: f32,
        stops: [Rgb; 3],
        opacity: u8,
    ) {
        if rect.is_empty() || opacity == 0 {
            return;
        }
        for y in pixel_span(rect.y - 1.0, rect.bottom() + 1.0, self.height) {
            #[allow(clippy::cast_precision_loss)]
            let t = (y as f32 + 0.5 - rect.y) / rect.h;
            let color = three_stop_gradient(stops, t);
            for x in pixel_span(rect.x - 1.0, rect.right() + 1.0, self.width) {
                #[allow(clippy::cast_precision_loss)]
                let d = rounded_rect_distance(x as f32 + 0.5, y as f32 + 0.5, rect, radius);
                let coverage = (0.5 - d).clamp(0.0, 1.0);
                self.blend_px(x, y, color, alpha8(coverage, opacity));
            }
        }
    }

    /// Stroke a rounded rectangle border
    ///
    /// The stroke occupies a band of the given width just inside the
    /// shape edge.
    pub fn stroke_rounded_rect(
        &mut self,
        rect: Rect,
        radius: f32,
        stroke_width: f32,
        color: Rgb,
        opacity: u8,
    ) {
        if rect.is_empty() || stroke_width <= 0.0 || opacity == 0 {
            return;
        }
        for y in pixel_span(rect.y - 1.0, rect.bottom() + 1.0, self.height) {
            for x in pixel_span(rect.x - 1.0, rect.right() + 1.0, self.width) {
                #[allow(clippy::cast_precision_loss)]
                let d = rounded_rect_distance(x as f32 + 0.5, y as f32 + 0.5, rect, radius);
                // Shape coverage minus coverage of the shape eroded by
                // the stroke width leaves just the border band.
                let outer = (0.5 - d).clamp(0.0, 1.0);
                let inner = (0.5 - (d + stroke_width)).clamp(0.0, 1.0);
                self.blend_px(x, y, color, alpha8(outer - inner, opacity));
            }
        }
    }

    /// Fill an antialiased circle
    pub fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, color: Rgb, opacity: u8) {
        let rect = Rect::new(cx - radius, cy - radius, radius * 2.0, radius * 2.0);
        self.fill_rounded_rect(rect, radius, color, opacity);
    }

    /// Paint a blurred shadow behind a rounded rectangle
    ///
    /// Draws only the blurred silhouette of the shape, offset by
    /// `(offset_x, offset_y)`; the shape itself is not filled. With a
    /// radius of half the side this doubles as a circular glow.
    pub fn shadow_rounded_rect(
        &mut self,
        rect: Rect,
        radius: f32,
        blur: f32,
        offset_x: f32,
        offset_y: f32,
        color: Rgb,
        opacity: u8,
    ) {
        if rect.is_empty() || opacity == 0 {
            return;
        }
        let shifted = Rect::new(rect.x + offset_x, rect.y + offset_y, rect.w, rect.h);
        let pad = blur.max(0.0) + 1.0;
        for y in pixel_span(shifted.y - pad, shifted.bottom() + pad, self.height) {
            for x in pixel_span(shifted.x - pad, shifted.right() + pad, self.width) {
                #[allow(clippy::cast_precision_loss)]
                let d = rounded_rect_distance(x as f32 + 0.5, y as f32 + 0.5, shifted, radius);
                let coverage = if blur > 0.0 {
                    1.0 - smoothstepf(-blur, blur, d)
                } else {
                    (0.5 - d).clamp(0.0, 1.0)
                };
                self.blend_px(x, y, color, alpha8(coverage, opacity));
            }
        }
    }
}
