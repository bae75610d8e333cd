mod tests {
    use light_switch_composer::color::{Rgb, blend_colors, rgb_from_u32, three_stop_gradient};

    const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
    const BLUE: Rgb = Rgb { r: 0, g: 0, b: 255 };
    const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
    const WHITE: Rgb = Rgb {
        r: 255,
        g: 255,
        b: 255,
    };

    #[test]
    fn test_blend_colors() {
        assert_eq!(blend_colors(RED, BLUE, 0), RED);
        assert_eq!(blend_colors(RED, BLUE, 255), BLUE);
        assert_eq!(
            blend_colors(RED, BLUE, 128),
            Rgb {
                r: 127,
                g: 0,
                b: 128
            }
        );

        assert_eq!(
            blend_colors(BLACK, WHITE, 128),
            Rgb {
                r: 128,
                g: 128,
                b: 128
            }
        );
        assert_eq!(blend_colors(WHITE, BLACK, 255), BLACK);
        assert_eq!(blend_colors(WHITE, BLACK, 0), WHITE);
    }

    #[test]
    fn test_rgb_from_u32() {
        assert_eq!(rgb_from_u32(0x36_EA69), Rgb::new(0x36, 0xEA, 0x69));
        assert_eq!(rgb_from_u32(0x00_0000), BLACK);
        assert_eq!(rgb_from_u32(0xFF_FFFF), WHITE);
    }

    #[test]
    fn test_three_stop_gradient_stops() {
        let stops = [RED, WHITE, BLUE];
        assert_eq!(three_stop_gradient(stops, 0.0), RED);
        assert_eq!(three_stop_gradient(stops, 0.5), WHITE);
        assert_eq!(three_stop_gradient(stops, 1.0), BLUE);
    }

    #[test]
    fn test_three_stop_gradient_clamps() {
        let stops = [RED, WHITE, BLUE];
        assert_eq!(three_stop_gradient(stops, -1.0), RED);
        assert_eq!(three_stop_gradient(stops, 2.0), BLUE);
    }

    #[test]
    fn test_three_stop_gradient_midpoints() {
        let stops = [BLACK, WHITE, BLACK];
        let quarter = three_stop_gradient(stops, 0.25);
        assert!(quarter.r > 100 && quarter.r < 156);
        let three_quarter = three_stop_gradient(stops, 0.75);
        assert!(three_quarter.r > 100 && three_quarter.r < 156);
    }
}
