mod tests {
    use embassy_time::{Duration, Instant};
    use light_switch_composer::{
        FrameScheduler, Rgb, Surface, SwitchConfig, SwitchRenderer, TapChannel,
    };

    const W: usize = 64;
    const H: usize = 64;
    const TAPS: usize = 4;

    struct CheckedSurface;

    impl Surface for CheckedSurface {
        fn present(&mut self, frame: &[Rgb], width: usize, height: usize) {
            assert_eq!(frame.len(), W * H);
            assert_eq!(width, W);
            assert_eq!(height, H);
        }
    }

    fn scheduler(
        channel: &'static TapChannel<TAPS>,
        frame_ms: u64,
    ) -> FrameScheduler<'static, CheckedSurface, W, H, TAPS> {
        let renderer =
            SwitchRenderer::<W, H, TAPS>::new(channel.receiver(), &SwitchConfig::default());
        FrameScheduler::with_frame_duration(renderer, CheckedSurface, Duration::from_millis(frame_ms))
    }

    #[test]
    fn test_tick_presents_and_paces() {
        static CHANNEL: TapChannel<TAPS> = TapChannel::new();
        let mut scheduler = scheduler(&CHANNEL, 20);

        let result = scheduler.tick(Instant::from_millis(0));
        assert_eq!(result.next_deadline, Instant::from_millis(20));
        assert_eq!(result.sleep_duration, Duration::from_millis(20));

        let result = scheduler.tick(Instant::from_millis(20));
        assert_eq!(result.next_deadline, Instant::from_millis(40));
        assert_eq!(result.sleep_duration, Duration::from_millis(20));

        assert!(scheduler.renderer().is_on());
    }

    #[test]
    fn test_no_sleep_when_behind_schedule() {
        static CHANNEL: TapChannel<TAPS> = TapChannel::new();
        let mut scheduler = scheduler(&CHANNEL, 20);

        scheduler.tick(Instant::from_millis(0));
        // Slightly late, but within the drift budget: no sleep, the
        // deadline advances normally so we can catch up.
        let result = scheduler.tick(Instant::from_millis(45));
        assert_eq!(result.sleep_duration, Duration::from_millis(0));
        assert_eq!(result.next_deadline, Instant::from_millis(40));
    }

    #[test]
    fn test_drift_reset_after_stall() {
        static CHANNEL: TapChannel<TAPS> = TapChannel::new();
        let mut scheduler = scheduler(&CHANNEL, 20);

        scheduler.tick(Instant::from_millis(0));
        // A long stall resets the timeline instead of bursting to
        // catch up on the backlog.
        let result = scheduler.tick(Instant::from_millis(1000));
        assert_eq!(result.next_deadline, Instant::from_millis(1020));
        assert_eq!(result.sleep_duration, Duration::from_millis(20));
    }
}
