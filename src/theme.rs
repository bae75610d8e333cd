//! Fixed visual constants of the switch
//!
//! The switch takes no external configuration; every color, size, and
//! timing lives here. Lengths are in frame-buffer pixels.

use embassy_time::Duration;

use crate::color::{Rgb, rgb_from_u32};

/// Full-bleed background behind the switch
pub const BACKGROUND: Rgb = rgb_from_u32(0x38_3838);

/// Side of the square area reserved for the outer frame
pub const FRAME_AREA: f32 = 300.0;
/// Margin between the reserved area and the drawn frame
pub const FRAME_MARGIN: f32 = 24.0;
/// Corner radius of the outer frame
pub const FRAME_CORNER: f32 = 40.0;
/// Outer frame fill
pub const FRAME_FILL: Rgb = rgb_from_u32(0x4E_4E4E);

/// Inset from the outer frame to the bezel
pub const BEZEL_INSET: f32 = 30.0;
/// Corner radius of the bezel
pub const BEZEL_CORNER: f32 = 20.0;
/// Bezel fill
pub const BEZEL_FILL: Rgb = rgb_from_u32(0x2D_2D2D);
/// Bezel border width
pub const BEZEL_BORDER_WIDTH: f32 = 2.0;
/// Bezel border color
pub const BEZEL_BORDER: Rgb = rgb_from_u32(0x00_0000);

/// Fixed left/right inset of the animated panel inside the bezel
pub const PANEL_SIDE_INSET: f32 = 2.0;
/// Corner radius of the panel
pub const PANEL_CORNER: f32 = 20.0;
/// Panel border width
pub const PANEL_BORDER_WIDTH: f32 = 1.0;
/// Panel border color
pub const PANEL_BORDER: Rgb = rgb_from_u32(0x6F_6F6F);
/// Panel drop shadow color
pub const PANEL_SHADOW: Rgb = rgb_from_u32(0x69_6969);
/// Panel drop shadow blur radius
pub const PANEL_SHADOW_BLUR: f32 = 15.0;

/// Panel gradient stops, top to bottom in the ON state
///
/// The OFF state renders the same stops in reverse order.
pub const PANEL_GRADIENT: [Rgb; 3] = [
    rgb_from_u32(0x69_6969),
    rgb_from_u32(0x48_4848),
    rgb_from_u32(0x3D_3D3D),
];

/// Panel top inset at rest, ON / OFF
pub const TOP_INSET_ON: f32 = 20.0;
pub const TOP_INSET_OFF: f32 = 0.0;
/// Panel bottom inset at rest, ON / OFF
pub const BOTTOM_INSET_ON: f32 = 0.0;
pub const BOTTOM_INSET_OFF: f32 = 20.0;

/// Indicator lamp diameter
pub const LAMP_SIZE: f32 = 8.0;
/// Horizontal bias of the lamp inside the bezel
pub const LAMP_BIAS_X: f32 = 0.8;
/// Vertical bias of the lamp at rest, ON / OFF
pub const LAMP_BIAS_ON: f32 = -0.6;
pub const LAMP_BIAS_OFF: f32 = -0.8;
/// Lamp fill when the switch is ON
pub const LAMP_ON: Rgb = rgb_from_u32(0x36_EA69);
/// Lamp fill when the switch is OFF
pub const LAMP_OFF: Rgb = rgb_from_u32(0xE8_4A36);
/// Blur radius of the lamp glow
pub const LAMP_GLOW_BLUR: f32 = 20.0;

/// Duration of the toggle transition
pub const TOGGLE_DURATION: Duration = Duration::from_millis(300);
