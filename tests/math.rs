mod tests {
    use embassy_time::Duration;
    use light_switch_composer::math::{
        blend8, ease_in_out_quad, ease_in_out_quadf, progress8, scale8, smoothstepf,
    };

    #[test]
    fn test_scale8() {
        assert_eq!(scale8(255, 128), 128);
        assert_eq!(scale8(0, 128), 0);
        assert_eq!(scale8(128, 128), 64);
        assert_eq!(scale8(128, 255), 128);
        assert_eq!(scale8(128, 0), 0);
    }

    #[test]
    fn test_blend8() {
        assert_eq!(blend8(255, 128, 128), 191);
        assert_eq!(blend8(0, 128, 255), 128);
        assert_eq!(blend8(255, 0, 128), 127);
        assert_eq!(blend8(255, 128, 0), 255);
    }

    #[test]
    fn test_progress8() {
        assert_eq!(
            progress8(Duration::from_millis(0), Duration::from_millis(100)),
            0
        );
        assert_eq!(
            progress8(Duration::from_millis(50), Duration::from_millis(100)),
            127
        );
        assert_eq!(
            progress8(Duration::from_millis(100), Duration::from_millis(100)),
            255
        );
        assert_eq!(
            progress8(Duration::from_millis(10), Duration::from_millis(0)),
            0
        );
    }

    #[test]
    fn test_ease_in_out_quad_endpoints() {
        assert_eq!(ease_in_out_quad(0), 0);
        assert_eq!(ease_in_out_quad(255), 255);
        // Accelerates below the diagonal in the first half,
        // decelerates above it in the second.
        assert!(ease_in_out_quad(64) < 64);
        assert!(ease_in_out_quad(192) > 192);
    }

    #[test]
    fn test_ease_in_out_quadf() {
        assert_eq!(ease_in_out_quadf(0.0), 0.0);
        assert_eq!(ease_in_out_quadf(1.0), 1.0);
        assert!((ease_in_out_quadf(0.5) - 0.5).abs() < 1e-6);
        assert!((ease_in_out_quadf(0.25) - 0.125).abs() < 1e-6);

        // Clamped outside the unit interval
        assert_eq!(ease_in_out_quadf(-1.0), 0.0);
        assert_eq!(ease_in_out_quadf(2.0), 1.0);

        // Monotonic
        let mut prev = 0.0;
        for i in 1..=20 {
            let v = ease_in_out_quadf(i as f32 / 20.0);
            assert!(v >= prev);
            prev = v;
        }
    }

    #[test]
    fn test_smoothstepf() {
        assert_eq!(smoothstepf(0.0, 1.0, -0.5), 0.0);
        assert_eq!(smoothstepf(0.0, 1.0, 0.0), 0.0);
        assert_eq!(smoothstepf(0.0, 1.0, 1.0), 1.0);
        assert_eq!(smoothstepf(0.0, 1.0, 1.5), 1.0);
        assert!((smoothstepf(0.0, 1.0, 0.5) - 0.5).abs() < 1e-6);
        assert!((smoothstepf(-10.0, 10.0, 0.0) - 0.5).abs() < 1e-6);
    }
}
