mod tests {
    use light_switch_composer::geometry::Rect;
    use light_switch_composer::layout::SwitchLayout;
    use light_switch_composer::model::SwitchValues;

    const ON_REST: SwitchValues = SwitchValues {
        top_inset: 20.0,
        bottom_inset: 0.0,
        lamp_bias: -0.6,
        fade: 1.0,
    };

    const OFF_REST: SwitchValues = SwitchValues {
        top_inset: 0.0,
        bottom_inset: 20.0,
        lamp_bias: -0.8,
        fade: 0.0,
    };

    #[test]
    fn test_bezel_is_centered_and_fixed() {
        let bezel = SwitchLayout::bezel_for(300, 300);
        assert_eq!(bezel, Rect::new(54.0, 54.0, 192.0, 192.0));

        // The bezel does not depend on animated values
        let layout_on = SwitchLayout::compute(300, 300, &ON_REST);
        let layout_off = SwitchLayout::compute(300, 300, &OFF_REST);
        assert_eq!(layout_on.bezel, bezel);
        assert_eq!(layout_off.bezel, bezel);
        assert_eq!(layout_on.frame, layout_off.frame);
    }

    #[test]
    fn test_frame_rect() {
        let layout = SwitchLayout::compute(300, 300, &ON_REST);
        assert_eq!(layout.frame, Rect::new(24.0, 24.0, 252.0, 252.0));
    }

    #[test]
    fn test_panel_follows_insets() {
        let on = SwitchLayout::compute(300, 300, &ON_REST);
        assert_eq!(on.panel, Rect::new(56.0, 74.0, 188.0, 172.0));

        let off = SwitchLayout::compute(300, 300, &OFF_REST);
        assert_eq!(off.panel, Rect::new(56.0, 54.0, 188.0, 172.0));
    }

    #[test]
    fn test_lamp_position() {
        let on = SwitchLayout::compute(300, 300, &ON_REST);
        assert!((on.lamp.x - 219.6).abs() < 1e-3);
        assert!((on.lamp.y - 90.8).abs() < 1e-3);
        assert_eq!(on.lamp.w, 8.0);

        let off = SwitchLayout::compute(300, 300, &OFF_REST);
        assert!((off.lamp.y - 72.4).abs() < 1e-3);
        // Horizontal bias is fixed; only the vertical bias animates
        assert!((off.lamp.x - on.lamp.x).abs() < 1e-6);
    }

    #[test]
    fn test_degenerate_insets_clamp_panel() {
        let values = SwitchValues {
            top_inset: 150.0,
            bottom_inset: 150.0,
            lamp_bias: -0.6,
            fade: 1.0,
        };
        let layout = SwitchLayout::compute(300, 300, &values);
        assert_eq!(layout.panel.h, 0.0);
        assert!(layout.panel.is_empty());
    }
}
