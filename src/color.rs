//! Pixel color type and blending helpers

use smart_leds::RGB8;

use crate::math::blend8;

pub type Rgb = RGB8;

/// Blend two RGB colors
///
/// # Arguments
/// * `a` - First color
/// * `b` - Second color
/// * `amount_of_b` - Blend factor (0 = all a, 255 = all b)
#[inline]
pub fn blend_colors(a: Rgb, b: Rgb, amount_of_b: u8) -> Rgb {
    Rgb {
        r: blend8(a.r, b.r, amount_of_b),
        g: blend8(a.g, b.g, amount_of_b),
        b: blend8(a.b, b.b, amount_of_b),
    }
}

/// Create an RGB color from a u32 value (0xRRGGBB format)
pub const fn rgb_from_u32(color: u32) -> Rgb {
    Rgb {
        r: ((color >> 16) & 0xFF) as u8,
        g: ((color >> 8) & 0xFF) as u8,
        b: (color & 0xFF) as u8,
    }
}

/// Sample a three-stop linear gradient
///
/// The first half of the ramp interpolates `stops[0]` to `stops[1]`, the
/// second half `stops[1]` to `stops[2]`. `t` is clamped to `[0, 1]`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn three_stop_gradient(stops: [Rgb; 3], t: f32) -> Rgb {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        blend_colors(stops[0], stops[1], (t * 510.0) as u8)
    } else {
        blend_colors(stops[1], stops[2], ((t - 0.5) * 510.0) as u8)
    }
}
