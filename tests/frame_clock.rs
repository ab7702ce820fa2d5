mod tests {
    use led_curtain_composer::{
        ClockState, ConfigChange, Configuration, Duration, FrameClock, GridShape, GridSink,
        Instant, IntensityGrid, IntentChannel, PROFILE_A, PROFILE_B, PatternId, Profile, Rgb,
    };
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[derive(Default)]
    struct RecordingSink {
        published: usize,
        shape: GridShape,
        lit: usize,
        color: Rgb,
    }

    impl GridSink<8, 64> for RecordingSink {
        fn publish(&mut self, grid: &IntensityGrid<8, 64>, color: Rgb) {
            self.published += 1;
            self.shape = grid.shape();
            self.lit = grid.lit_count();
            self.color = color;
        }
    }

    type Channel = IntentChannel<4>;
    type Clock<'a> = FrameClock<'a, RecordingSink, SmallRng, 8, 64, 4>;

    fn clock(channel: &Channel, profile: Profile) -> Clock<'_> {
        Clock::new(
            RecordingSink::default(),
            channel.receiver(),
            profile,
            SmallRng::seed_from_u64(0),
        )
    }

    fn at(ms: u64) -> Instant {
        Instant::from_millis(ms)
    }

    fn assert_frame(clock: &Clock<'_>, expected: f64) {
        let frame = clock.frame_counter();
        assert!((frame - expected).abs() < 1e-9, "expected {expected}, got {frame}");
    }

    #[test]
    fn test_stopped_clock_never_publishes() {
        let channel = Channel::new();
        let mut clock = clock(&channel, PROFILE_A);
        assert_eq!(clock.state(), ClockState::Stopped);
        assert_eq!(clock.token(), None);

        let token = clock.start(at(0));
        clock.stop();
        assert!(clock.tick(token, at(16)).is_none());
        assert_eq!(clock.sink().published, 0);
        assert_frame(&clock, 0.0);
    }

    #[test]
    fn test_tick_advances_and_publishes() {
        let channel = Channel::new();
        let mut clock = clock(&channel, PROFILE_A);
        let token = clock.start(at(0));

        let result = clock.tick(token, at(0)).unwrap();
        assert_eq!(result.next, token);
        assert!((result.frame - 0.15).abs() < 1e-9);
        assert_frame(&clock, 0.15);

        let sink = clock.sink();
        assert_eq!(sink.published, 1);
        assert_eq!(sink.shape, GridShape::new(5, 40));
        assert_eq!(sink.color, Rgb::new(255, 255, 255));
        assert!(sink.lit > 0);
    }

    #[test]
    fn test_pause_freezes_and_play_resumes() {
        let channel = Channel::new();
        let mut clock = clock(&channel, PROFILE_A);
        let token = clock.start(at(0));
        clock.tick(token, at(0)).unwrap();
        clock.tick(token, at(16)).unwrap();

        clock.pause();
        for ms in [32, 48, 64] {
            assert!(clock.tick(token, at(ms)).is_none());
        }
        assert_frame(&clock, 0.3);
        assert_eq!(clock.sink().published, 2);

        let resumed = clock.play(at(100));
        assert_ne!(resumed, token);
        assert!(!clock.accepts(token));
        assert!(clock.tick(token, at(100)).is_none());
        clock.tick(resumed, at(100)).unwrap();
        assert_frame(&clock, 0.45);
    }

    #[test]
    fn test_start_while_running_keeps_token() {
        let channel = Channel::new();
        let mut clock = clock(&channel, PROFILE_A);
        let token = clock.start(at(0));
        assert_eq!(clock.start(at(5)), token);
        assert_eq!(clock.token(), Some(token));
    }

    #[test]
    fn test_toggle() {
        let channel = Channel::new();
        let mut clock = clock(&channel, PROFILE_A);
        let token = clock.toggle(at(0)).unwrap();
        assert!(clock.is_running());
        assert_eq!(clock.toggle(at(1)), None);
        assert_eq!(clock.state(), ClockState::Stopped);
        assert!(!clock.accepts(token));
    }

    #[test]
    fn test_pause_intent_cancels_tick() {
        let channel = Channel::new();
        let sender = channel.sender();
        let mut clock = clock(&channel, PROFILE_A);
        let token = clock.start(at(0));

        sender.pause().unwrap();
        assert!(clock.tick(token, at(0)).is_none());
        assert_eq!(clock.sink().published, 0);
        assert!(!clock.is_running());

        sender.play().unwrap();
        let resumed = clock.poll(at(50)).unwrap();
        clock.tick(resumed, at(50)).unwrap();
        assert_eq!(clock.sink().published, 1);
    }

    #[test]
    fn test_play_intent_starts_idle_clock() {
        let channel = Channel::new();
        let sender = channel.sender();
        let mut clock = clock(&channel, PROFILE_A);
        assert_eq!(clock.poll(at(0)), None);
        assert_eq!(clock.sink().published, 0);

        sender
            .configure(ConfigChange::default().with_height(4.0))
            .unwrap();
        assert_eq!(clock.poll(at(5)), None);
        assert_eq!(clock.configuration().height_m, 4.0);
        assert_frame(&clock, 0.0);

        sender.play().unwrap();
        let token = clock.poll(at(10)).unwrap();
        clock.tick(token, at(10)).unwrap();
        assert_eq!(clock.sink().published, 1);
        assert_frame(&clock, 0.15);
    }

    #[test]
    fn test_poll_without_intents() {
        let channel = Channel::new();
        let mut clock = clock(&channel, PROFILE_A);
        assert_eq!(clock.poll(at(0)), None);

        let token = clock.start(at(0));
        assert_eq!(clock.poll(at(1)), Some(token));
    }

    #[test]
    fn test_configure_intent_applies_next_tick() {
        let channel = Channel::new();
        let sender = channel.sender();
        let mut clock = clock(&channel, PROFILE_A);
        let token = clock.start(at(0));
        clock.tick(token, at(0)).unwrap();

        let purple = Rgb::new(136, 0, 255);
        sender
            .configure(
                ConfigChange::default()
                    .with_strip_count(3)
                    .with_pattern(Some(PatternId::Heartbeat))
                    .with_color(purple),
            )
            .unwrap();
        assert_eq!(clock.sink().shape, GridShape::new(5, 40));

        clock.tick(token, at(16)).unwrap();
        let sink = clock.sink();
        assert_eq!(sink.shape, GridShape::new(3, 40));
        assert_eq!(sink.color, purple);
        assert_eq!(clock.configuration().pattern, Some(PatternId::Heartbeat));
    }

    #[test]
    fn test_reshape_keeps_frame_without_reset() {
        let channel = Channel::new();
        let mut clock = clock(&channel, PROFILE_A);
        let token = clock.start(at(0));
        for ms in [0, 16, 32] {
            clock.tick(token, at(ms)).unwrap();
        }

        clock.configure(&ConfigChange::default().with_strip_count(3));
        assert_frame(&clock, 0.45);
        clock.tick(token, at(48)).unwrap();
        assert_frame(&clock, 0.6);
    }

    #[test]
    fn test_reshape_resets_frame() {
        let channel = Channel::new();
        let mut clock = clock(&channel, PROFILE_B);
        let token = clock.start(at(0));
        for ms in [0, 16, 32] {
            clock.tick(token, at(ms)).unwrap();
        }
        assert_eq!(clock.sink().shape, GridShape::new(5, 60));

        // Same strip count is not a reshape
        clock.configure(&ConfigChange::default().with_strip_count(5));
        assert_frame(&clock, 0.45);

        clock.configure(&ConfigChange::default().with_strip_count(3));
        assert_frame(&clock, 0.0);
        clock.tick(token, at(48)).unwrap();
        assert_frame(&clock, 0.15);
    }

    #[test]
    fn test_zero_speed_freezes_frame() {
        let channel = Channel::new();
        let mut clock = clock(&channel, PROFILE_A);
        let token = clock.start(at(0));
        clock.tick(token, at(0)).unwrap();

        clock.configure(&ConfigChange::default().with_speed(0.0));
        for ms in [16, 32, 48] {
            clock.tick(token, at(ms)).unwrap();
        }
        assert_frame(&clock, 0.15);
        assert_eq!(clock.sink().published, 4);
    }

    #[test]
    fn test_unknown_pattern_publishes_dark() {
        let channel = Channel::new();
        let mut config = Configuration::default();
        config.set_pattern_name("plasma");
        let mut clock = clock(&channel, PROFILE_A).with_configuration(config);

        let token = clock.start(at(0));
        clock.tick(token, at(0)).unwrap();
        assert_eq!(clock.sink().published, 1);
        assert_eq!(clock.sink().lit, 0);
    }

    #[test]
    fn test_frame_pacing() {
        let channel = Channel::new();
        let mut clock = clock(&channel, PROFILE_A).with_frame_duration(Duration::from_millis(10));
        let token = clock.start(at(0));

        let result = clock.tick(token, at(0)).unwrap();
        assert_eq!(result.next_deadline, at(10));
        assert_eq!(result.sleep_duration, Duration::from_millis(10));

        let result = clock.tick(token, at(4)).unwrap();
        assert_eq!(result.next_deadline, at(20));
        assert_eq!(result.sleep_duration, Duration::from_millis(16));

        let result = clock.tick(token, at(25)).unwrap();
        assert_eq!(result.next_deadline, at(30));
        assert_eq!(result.sleep_duration, Duration::from_millis(5));

        // Far behind: skip the backlog instead of bursting
        let result = clock.tick(token, at(100)).unwrap();
        assert_eq!(result.next_deadline, at(110));
        assert_eq!(result.sleep_duration, Duration::from_millis(10));
    }
}
