#[cfg(test)]
mod tests {
    use crate::config::{HeaderConfig, validate_density};
    use crate::error::ConfigError;
    use crate::hide::*;
    use crate::insets::*;
    use crate::parallax::*;
    use crate::screen::*;
    use crate::scroller::*;
    use crate::snackbar::SnackbarTimer;
    use crate::toolbar::*;
    use crate::transition::*;
    use canopy_core::{
        AnimationSpec, Clock, Density, Dp, Easing, FrameScheduler, LayoutContext, ManualClock,
        Scope, Size,
    };
    use std::cell::Cell;
    use std::rc::Rc;
    use web_time::{Duration, Instant};

    const FRAME: Duration = Duration::from_millis(16);

    fn mount(scope: &Scope, scheduler: &FrameScheduler) -> CollapsingHeader {
        CollapsingHeader::mount(
            scope,
            scheduler.clone(),
            HeaderConfig::default(),
            LayoutContext::default(),
            HeaderCallbacks::default(),
        )
        .expect("default config is valid")
    }

    #[test]
    fn test_threshold_sweep() {
        let reference = ReferencePosition::At(500.0);
        for offset in 0..=1000 {
            let state = resolve(offset as f32, reference, 150.0);
            if offset <= 650 {
                assert_eq!(state, ToolbarState::Hidden, "offset {offset}");
            } else {
                assert_eq!(state, ToolbarState::Shown, "offset {offset}");
            }
        }
    }

    #[test]
    fn test_threshold_trace() {
        let trace = [0.0, 500.0, 650.0, 650.5, 651.0, 1000.0]
            .iter()
            .map(|o| resolve(*o, ReferencePosition::At(500.0), 150.0).to_string())
            .collect::<Vec<_>>()
            .join(" ");
        insta::assert_snapshot!(trace, @"HIDDEN HIDDEN HIDDEN SHOWN SHOWN SHOWN");
    }

    #[test]
    fn test_unset_reference_is_always_hidden() {
        for offset in [0.0, 1.0, 650.0, 1e6, f32::MAX] {
            assert_eq!(
                resolve(offset, ReferencePosition::Unset, 150.0),
                ToolbarState::Hidden
            );
        }
    }

    #[test]
    fn test_no_hysteresis_near_threshold() {
        let reference = ReferencePosition::At(500.0);
        let states: Vec<_> = [650.0, 651.0, 650.0, 651.0]
            .iter()
            .map(|o| resolve(*o, reference, 150.0))
            .collect();
        assert_eq!(
            states,
            vec![
                ToolbarState::Hidden,
                ToolbarState::Shown,
                ToolbarState::Hidden,
                ToolbarState::Shown
            ]
        );
    }

    #[test]
    fn test_reference_is_captured_once() {
        let mut capture = LayoutReferenceCapture::new();
        assert_eq!(capture.position(), ReferencePosition::Unset);
        assert!(!capture.on_first_layout(f32::NAN));
        assert!(capture.on_first_layout(512.0));
        assert!(!capture.on_first_layout(80.0));
        assert_eq!(capture.position(), ReferencePosition::At(512.0));
        assert_eq!(capture.position().value(), Some(512.0));
    }

    #[test]
    fn test_scroll_tracker_follows_surface() {
        let tracker = ScrollTracker::new();
        let notified = Rc::new(Cell::new(0));
        let n = notified.clone();
        tracker.subscribe(move |_| n.set(n.get() + 1));

        assert!(tracker.set_offset(300.0));
        assert!(!tracker.set_offset(300.0));
        assert!(!tracker.set_offset(f32::NAN));
        assert_eq!(tracker.offset(), 300.0);
        assert_eq!(notified.get(), 1);

        // Scrolling back up is just a smaller offset.
        tracker.set_offset(120.0);
        assert_eq!(tracker.offset(), 120.0);
    }

    #[test]
    fn test_scroll_by_clamps_to_extents() {
        let tracker = ScrollTracker::new();
        assert_eq!(tracker.scroll_by(-50.0), -50.0);
        assert_eq!(tracker.offset(), 0.0);

        tracker.set_extents(800.0, 2000.0);
        assert_eq!(tracker.max_offset(), Some(1200.0));
        assert_eq!(tracker.scroll_by(1000.0), 0.0);
        assert_eq!(tracker.scroll_by(500.0), 300.0);
        assert_eq!(tracker.offset(), 1200.0);

        // Shrinking content pulls the offset back in.
        tracker.set_extents(800.0, 1000.0);
        assert_eq!(tracker.offset(), 200.0);
    }

    #[test]
    fn test_parallax_is_exact_and_monotonic() {
        let mut last = f32::MIN;
        for offset in 0..=2000 {
            let p = parallax_offset(offset as f32, 2.0);
            assert_eq!(p, offset as f32 / 2.0);
            assert!(p >= last);
            last = p;
        }
        assert_eq!(parallax_offset(300.0, 2.0), 150.0);
    }

    #[test]
    fn test_fab_offset_scenario() {
        assert_eq!(fab_offset(Dp(278.0), Dp(150.0), Dp(56.0)), Dp(400.0));
        for (h, p, d) in [(0.0, 0.0, 56.0), (278.0, 0.0, 40.0), (100.0, 33.5, 1.0)] {
            assert_eq!(fab_offset(Dp(h), Dp(p), Dp(d)), Dp(h + p - d / 2.0));
        }
    }

    fn fab_inputs() -> FabInputs {
        FabInputs {
            image_height_px: Some(278.0),
            parallax: Dp(150.0),
            diameter: Dp(56.0),
            end_padding: Dp(8.0),
            is_added: false,
            toolbar_state: ToolbarState::Hidden,
            alpha: 1.0,
        }
    }

    #[test]
    fn test_fab_visibility_rules() {
        let density = Density::default();
        let placed = place_fab(fab_inputs(), density).expect("fab is shown");
        assert_eq!(placed.top, Dp(400.0));
        assert_eq!(placed.end_padding, Dp(8.0));

        let unmeasured = FabInputs {
            image_height_px: None,
            ..fab_inputs()
        };
        assert_eq!(place_fab(unmeasured, density), None);

        let zero = FabInputs {
            image_height_px: Some(0.0),
            ..fab_inputs()
        };
        assert_eq!(place_fab(zero, density), None);

        let added = FabInputs {
            is_added: true,
            ..fab_inputs()
        };
        assert_eq!(place_fab(added, density), None);

        let collapsed = FabInputs {
            toolbar_state: ToolbarState::Shown,
            ..fab_inputs()
        };
        assert_eq!(place_fab(collapsed, density), None);
    }

    #[test]
    fn test_fab_converts_measured_height_to_dp() {
        let density = Density { scale: 2.0 };
        let inputs = FabInputs {
            image_height_px: Some(556.0),
            parallax: parallax_offset_dp(300.0, 2.0, density),
            ..fab_inputs()
        };
        let placed = place_fab(inputs, density).expect("fab is shown");
        assert_eq!(placed.top, Dp(278.0 + 75.0 - 28.0));
    }

    #[test]
    fn test_placeholder_round_trip() {
        let mut slot = MeasuredPlaceholder::new();
        let s = Size::new(411.0, 278.0);

        assert_eq!(slot.render(false, || "image"), Placeholder::Content("image"));
        assert!(slot.on_measured(s));

        assert_eq!(slot.render(true, || "image"), Placeholder::Spacer(s));
        assert!(!slot.on_measured(Size::ZERO));
        assert_eq!(slot.measured_size(), s);

        assert!(slot.render(false, || "image").is_content());
        assert!(!slot.on_measured(s));
        assert_eq!(slot.render(true, || "image").spacer_size(), Some(s));
    }

    #[test]
    fn test_placeholder_hidden_first_is_zero_sized() {
        let mut slot = MeasuredPlaceholder::new();
        let built = Cell::new(false);
        let rendered = slot.render(true, || built.set(true));
        assert_eq!(rendered, Placeholder::Spacer(Size::ZERO));
        assert!(!built.get());
        assert!(slot.is_hidden());
    }

    fn sample_until_settled(
        animator: &mut TransitionAnimator,
        clock: &ManualClock,
        frames: usize,
    ) -> Vec<TransitionAlphas> {
        let mut samples = Vec::new();
        for _ in 0..frames {
            let now = clock.advance(FRAME);
            animator.tick(now);
            samples.push(animator.alphas());
        }
        samples
    }

    #[test]
    fn test_transition_flip_mid_animation_settles_hidden() {
        let clock = ManualClock::new(Instant::now());
        let mut animator =
            TransitionAnimator::new(ToolbarState::Hidden, HeaderConfig::default().transition);
        assert_eq!(
            animator.alphas(),
            TransitionAlphas::for_state(ToolbarState::Hidden)
        );

        assert!(animator.set_state(ToolbarState::Shown, clock.now()));
        let before_flip = sample_until_settled(&mut animator, &clock, 6);
        let mid = *before_flip.last().expect("sampled");
        assert!(mid.bar > 0.0 && mid.bar < 1.0);

        assert!(animator.set_state(ToolbarState::Hidden, clock.now()));
        assert!(!animator.set_state(ToolbarState::Hidden, clock.now()));
        animator.tick(clock.now());
        assert!((animator.alphas().bar - mid.bar).abs() < 1e-5, "retarget jumped");

        let after_flip = sample_until_settled(&mut animator, &clock, 30);
        for a in before_flip.iter().chain(after_flip.iter()) {
            assert!((0.0..=1.0).contains(&a.header));
            assert!((0.0..=1.0).contains(&a.bar));
            assert!((a.header + a.bar - 1.0).abs() < 1e-4);
        }
        assert!(!animator.is_animating());
        assert_eq!(
            animator.alphas(),
            TransitionAlphas::for_state(ToolbarState::Hidden)
        );
    }

    #[test]
    fn test_bouncy_spring_stays_in_unit_range() {
        let clock = ManualClock::new(Instant::now());
        let spec = AnimationSpec::spring(0.3, 400.0, Duration::from_millis(800));
        let mut animator = TransitionAnimator::new(ToolbarState::Hidden, spec);
        animator.set_state(ToolbarState::Shown, clock.now());

        for a in sample_until_settled(&mut animator, &clock, 60) {
            assert!((0.0..=1.0).contains(&a.header));
            assert!((0.0..=1.0).contains(&a.bar));
        }
        assert_eq!(
            animator.alphas(),
            TransitionAlphas::for_state(ToolbarState::Shown)
        );
    }

    #[test]
    fn test_stalled_clock_freezes_alphas() {
        let t0 = Instant::now();
        let mut animator = TransitionAnimator::new(
            ToolbarState::Hidden,
            AnimationSpec::tween(Duration::from_millis(250), Easing::Linear),
        );
        animator.set_state(ToolbarState::Shown, t0);
        animator.tick(t0 + Duration::from_millis(125));
        let frozen = animator.alphas();
        assert!((frozen.bar - 0.5).abs() < 1e-3);
        // No further ticks: the last sampled value stays.
        assert_eq!(animator.alphas(), frozen);
    }

    #[test]
    fn test_insets_padding_selected_sides() {
        let insets = SystemBarInsets {
            left: 0.0,
            top: 48.0,
            right: 12.0,
            bottom: 96.0,
        };
        let density = Density { scale: 2.0 };

        let bar = insets.padding(Sides::LEFT | Sides::TOP | Sides::RIGHT, density);
        assert_eq!(bar.top, 24.0);
        assert_eq!(bar.right, 6.0);
        assert_eq!(bar.bottom, 0.0);

        let none = insets.padding(Sides::empty(), density);
        assert_eq!(none, canopy_core::PaddingValues::default());
    }

    #[test]
    fn test_config_validation() {
        assert_eq!(HeaderConfig::default().validate(), Ok(()));
        assert_eq!(
            HeaderConfig::default().with_spring_transition().validate(),
            Ok(())
        );

        let bad = |f: fn(&mut HeaderConfig)| {
            let mut c = HeaderConfig::default();
            f(&mut c);
            c.validate()
        };
        assert_eq!(
            bad(|c| c.parallax_factor = 1.0),
            Err(ConfigError::ParallaxFactor(1.0))
        );
        assert!(matches!(
            bad(|c| c.parallax_factor = f32::INFINITY),
            Err(ConfigError::ParallaxFactor(_))
        ));
        assert_eq!(
            bad(|c| c.threshold_offset = -1.0),
            Err(ConfigError::ThresholdOffset(-1.0))
        );
        assert_eq!(
            bad(|c| c.fab_diameter = Dp(0.0)),
            Err(ConfigError::FabDiameter(0.0))
        );
        assert_eq!(
            bad(|c| c.header_height = Dp(-4.0)),
            Err(ConfigError::HeaderHeight(-4.0))
        );
        assert_eq!(
            bad(|c| c.transition.duration = Duration::ZERO),
            Err(ConfigError::ZeroTransition)
        );
        assert_eq!(
            bad(|c| c.transition = AnimationSpec::spring(0.0, 200.0, Duration::from_millis(600))),
            Err(ConfigError::Spring {
                damping_ratio: 0.0,
                stiffness: 200.0
            })
        );
        assert_eq!(
            bad(|c| c.transition = AnimationSpec::spring(1.0, -5.0, Duration::from_millis(600))),
            Err(ConfigError::Spring {
                damping_ratio: 1.0,
                stiffness: -5.0
            })
        );
        assert!(matches!(
            bad(|c| c.transition = AnimationSpec::spring(f32::NAN, 200.0, Duration::from_millis(600))),
            Err(ConfigError::Spring { .. })
        ));
        assert_eq!(
            validate_density(Density { scale: 0.0 }),
            Err(ConfigError::Density(0.0))
        );
    }

    #[test]
    fn test_mount_rejects_invalid_config() {
        let scope = Scope::new();
        let config = HeaderConfig {
            parallax_factor: 0.5,
            ..HeaderConfig::default()
        };
        let result = CollapsingHeader::mount(
            &scope,
            FrameScheduler::new(),
            config,
            LayoutContext::default(),
            HeaderCallbacks::default(),
        );
        let err = result.err().expect("invalid factor is rejected");
        assert_eq!(err, ConfigError::ParallaxFactor(0.5));
        assert!(err.to_string().contains("greater than 1"));
    }

    #[test]
    fn test_screen_initial_frame() {
        let scope = Scope::new();
        let scheduler = FrameScheduler::new();
        let mut header = mount(&scope, &scheduler);

        let frame = header.frame(Instant::now());
        assert_eq!(frame.toolbar_state, ToolbarState::Hidden);
        assert_eq!(frame.alphas, TransitionAlphas::for_state(ToolbarState::Hidden));
        assert!(frame.title.is_content());
        assert!(frame.image.is_content());
        // Image not measured yet.
        assert_eq!(frame.fab(), None);
        assert!(matches!(frame.variant, HeaderVariant::Actions { alpha, .. } if alpha == 1.0));
        assert!(scheduler.is_empty());
    }

    #[test]
    fn test_screen_fab_tracks_image_bottom() {
        let scope = Scope::new();
        let scheduler = FrameScheduler::new();
        let mut header = mount(&scope, &scheduler);
        let t0 = Instant::now();

        header.on_title_layout(500.0);
        header.on_image_measured(278.0);
        header.on_scroll(300.0);
        let frame = header.frame(t0);
        assert_eq!(frame.parallax, Dp(150.0));
        let fab = frame.fab().expect("fab visible over the image");
        assert_eq!(fab.top, Dp(400.0));
        assert_eq!(fab.alpha, 1.0);
        let image = frame.image.content().expect("image shown");
        assert_eq!(image.top_padding, Dp(150.0));
        assert_eq!(image.height, Dp(278.0));

        header.set_added(true);
        assert_eq!(header.frame(t0).fab(), None);
    }

    #[test]
    fn test_screen_fab_lags_one_frame_behind_image_height() {
        let scope = Scope::new();
        let scheduler = FrameScheduler::new();
        let mut header = mount(&scope, &scheduler);
        let t0 = Instant::now();

        header.on_image_measured(278.0);
        header.on_scroll(100.0);
        assert_eq!(header.frame(t0).fab().map(|f| f.top), Some(Dp(300.0)));

        // Layout of this frame yields a taller image; the frame drawn before
        // the callback still uses the old height.
        header.on_scroll(120.0);
        assert_eq!(header.frame(t0).fab().map(|f| f.top), Some(Dp(310.0)));
        header.on_image_measured(300.0);
        assert_eq!(header.frame(t0).fab().map(|f| f.top), Some(Dp(332.0)));
    }

    #[test]
    fn test_screen_collapses_and_crossfades() {
        let scope = Scope::new();
        let scheduler = FrameScheduler::new();
        let mut header = mount(&scope, &scheduler);
        let clock = ManualClock::new(Instant::now());

        header.on_title_layout(500.0);
        header.on_image_measured(278.0);
        header.on_header_measured(Size::new(411.0, 278.0));
        header.on_title_measured(Size::new(120.0, 32.0));
        header.frame(clock.now());

        header.on_scroll(651.0);
        let frame = header.frame(clock.now());
        assert_eq!(frame.toolbar_state, ToolbarState::Shown);
        assert!(frame.animating);
        assert_eq!(frame.fab(), None);
        assert_eq!(frame.image, Placeholder::Spacer(Size::new(411.0, 278.0)));
        assert_eq!(frame.title, Placeholder::Spacer(Size::new(120.0, 32.0)));
        assert!(matches!(frame.variant, HeaderVariant::Bar { .. }));
        assert_eq!(scheduler.len(), 1);

        scheduler.tick(clock.advance(Duration::from_millis(100)));
        let mid = header.frame(clock.now());
        assert!(mid.alphas.bar > 0.0 && mid.alphas.bar < 1.0);
        assert_eq!(mid.variant.alpha(), mid.alphas.bar);

        assert!(!scheduler.tick(clock.advance(Duration::from_millis(200))));
        let settled = header.frame(clock.now());
        assert_eq!(settled.alphas, TransitionAlphas::for_state(ToolbarState::Shown));
        assert!(!settled.animating);
        assert!(scheduler.is_empty());
    }

    #[test]
    fn test_screen_flip_back_reuses_running_task() {
        let scope = Scope::new();
        let scheduler = FrameScheduler::new();
        let mut header = mount(&scope, &scheduler);
        let clock = ManualClock::new(Instant::now());

        header.on_title_layout(500.0);
        header.on_scroll(700.0);
        header.frame(clock.now());
        scheduler.tick(clock.advance(FRAME * 5));

        header.on_scroll(600.0);
        let frame = header.frame(clock.now());
        assert_eq!(frame.toolbar_state, ToolbarState::Hidden);
        assert_eq!(scheduler.len(), 1);

        for _ in 0..30 {
            scheduler.tick(clock.advance(FRAME));
        }
        let settled = header.frame(clock.now());
        assert_eq!(settled.alphas, TransitionAlphas::for_state(ToolbarState::Hidden));
        assert!(scheduler.is_empty());
    }

    #[test]
    fn test_unmount_stops_sampling() {
        let scope = Scope::new();
        let scheduler = FrameScheduler::new();
        let mut header = mount(&scope, &scheduler);
        let clock = ManualClock::new(Instant::now());

        header.on_title_layout(500.0);
        header.on_scroll(800.0);
        header.frame(clock.now());
        scheduler.tick(clock.advance(Duration::from_millis(100)));
        let frozen = header.alphas();
        assert!(frozen.bar > 0.0 && frozen.bar < 1.0);
        assert_eq!(scheduler.len(), 1);

        scope.dispose();
        assert!(!header.is_mounted());
        assert!(scheduler.is_empty());

        scheduler.tick(clock.advance(Duration::from_millis(500)));
        let frame = header.frame(clock.now());
        assert_eq!(frame.toolbar_state, ToolbarState::Shown);
        assert_eq!(frame.alphas, frozen);
        assert!(!frame.animating);
    }

    #[test]
    fn test_flip_after_unmount_settles_immediately() {
        let scope = Scope::new();
        let scheduler = FrameScheduler::new();
        let mut header = mount(&scope, &scheduler);
        let t0 = Instant::now();

        header.on_title_layout(500.0);
        header.on_header_measured(Size::new(411.0, 278.0));
        header.frame(t0);
        scope.dispose();

        header.on_scroll(800.0);
        for now in [t0, t0 + Duration::from_secs(60)] {
            let frame = header.frame(now);
            assert_eq!(frame.toolbar_state, ToolbarState::Shown);
            assert!(!frame.animating);
            assert_eq!(frame.alphas, TransitionAlphas::for_state(ToolbarState::Shown));
            assert!(matches!(frame.variant, HeaderVariant::Bar { alpha, .. } if alpha == 1.0));
        }
        assert!(scheduler.is_empty());

        header.on_scroll(0.0);
        let frame = header.frame(t0 + Duration::from_secs(61));
        assert!(!frame.animating);
        assert_eq!(frame.alphas, TransitionAlphas::for_state(ToolbarState::Hidden));
        assert_eq!(frame.image.content().map(|i| i.alpha), Some(1.0));
        assert!(scheduler.is_empty());
    }

    #[test]
    fn test_snap_to_state_leaves_nothing_to_sample() {
        let t0 = Instant::now();
        let mut animator =
            TransitionAnimator::new(ToolbarState::Hidden, HeaderConfig::default().transition);
        animator.set_state(ToolbarState::Shown, t0);
        animator.tick(t0 + Duration::from_millis(60));
        assert!(animator.is_animating());

        animator.snap_to_state(ToolbarState::Hidden);
        assert!(!animator.is_animating());
        assert_eq!(animator.state(), ToolbarState::Hidden);
        assert!(!animator.tick(t0 + Duration::from_millis(120)));
        assert_eq!(
            animator.alphas(),
            TransitionAlphas::for_state(ToolbarState::Hidden)
        );
    }

    #[test]
    fn test_dropping_header_cancels_tasks() {
        let scope = Scope::new();
        let scheduler = FrameScheduler::new();
        {
            let mut header = mount(&scope, &scheduler);
            header.on_title_layout(500.0);
            header.on_scroll(800.0);
            header.frame(Instant::now());
            header.show_snackbar(Instant::now());
            assert_eq!(scheduler.len(), 2);
        }
        assert!(scheduler.is_empty());
        scope.dispose();
    }

    #[test]
    fn test_screen_insets_padding() {
        let scope = Scope::new();
        let scheduler = FrameScheduler::new();
        let mut header = mount(&scope, &scheduler);
        header.set_insets(SystemBarInsets {
            left: 4.0,
            top: 24.0,
            right: 4.0,
            bottom: 48.0,
        });

        let frame = header.frame(Instant::now());
        let HeaderVariant::Actions { padding, .. } = frame.variant else {
            panic!("expected the floating actions");
        };
        assert_eq!(padding.top, 24.0 + 16.0);
        assert_eq!(padding.bottom, 48.0);

        header.on_title_layout(500.0);
        header.on_scroll(900.0);
        let frame = header.frame(Instant::now());
        let HeaderVariant::Bar { padding, .. } = frame.variant else {
            panic!("expected the compact bar");
        };
        assert_eq!(padding.top, 24.0);
        assert_eq!(padding.left, 4.0);
        assert_eq!(padding.bottom, 0.0);
    }

    #[test]
    fn test_callbacks_pass_through() {
        let clicks = Rc::new(Cell::new((0, 0, 0)));
        let (a, b, c) = (clicks.clone(), clicks.clone(), clicks.clone());
        let callbacks = HeaderCallbacks::new(
            move || a.set((a.get().0 + 1, a.get().1, a.get().2)),
            move || b.set((b.get().0, b.get().1 + 1, b.get().2)),
            move || c.set((c.get().0, c.get().1, c.get().2 + 1)),
        );
        let scope = Scope::new();
        let header = CollapsingHeader::mount(
            &scope,
            FrameScheduler::new(),
            HeaderConfig::default(),
            LayoutContext::default(),
            callbacks,
        )
        .expect("valid");

        header.click_fab();
        header.click_share();
        header.click_share();
        header.click_back();
        assert_eq!(clicks.get(), (1, 1, 2));
    }

    fn counting_timer(scheduler: &FrameScheduler) -> (SnackbarTimer, Rc<Cell<u32>>) {
        let dismissed = Rc::new(Cell::new(0));
        let d = dismissed.clone();
        let timer = SnackbarTimer::new(
            scheduler.clone(),
            Duration::from_millis(5000),
            Rc::new(move || d.set(d.get() + 1)),
        );
        (timer, dismissed)
    }

    #[test]
    fn test_snackbar_auto_dismisses_once() {
        let scheduler = FrameScheduler::new();
        let (timer, dismissed) = counting_timer(&scheduler);
        let t0 = Instant::now();

        timer.show(t0);
        assert!(timer.is_showing());
        scheduler.tick(t0 + Duration::from_millis(4999));
        assert_eq!(dismissed.get(), 0);

        scheduler.tick(t0 + Duration::from_millis(5000));
        scheduler.tick(t0 + Duration::from_millis(9000));
        assert_eq!(dismissed.get(), 1);
        assert!(!timer.is_showing());
    }

    #[test]
    fn test_snackbar_show_again_restarts() {
        let scheduler = FrameScheduler::new();
        let (timer, dismissed) = counting_timer(&scheduler);
        let t0 = Instant::now();

        timer.show(t0);
        timer.show(t0 + Duration::from_millis(3000));
        assert_eq!(scheduler.len(), 1);

        scheduler.tick(t0 + Duration::from_millis(5000));
        assert_eq!(dismissed.get(), 0);
        scheduler.tick(t0 + Duration::from_millis(8000));
        assert_eq!(dismissed.get(), 1);
    }

    #[test]
    fn test_snackbar_explicit_dismiss() {
        let scheduler = FrameScheduler::new();
        let (timer, dismissed) = counting_timer(&scheduler);
        let t0 = Instant::now();

        timer.dismiss();
        assert_eq!(dismissed.get(), 0);

        timer.show(t0);
        timer.dismiss();
        timer.dismiss();
        assert_eq!(dismissed.get(), 1);
        scheduler.tick(t0 + Duration::from_millis(6000));
        assert_eq!(dismissed.get(), 1);
        assert!(scheduler.is_empty());
    }

    #[test]
    fn test_snackbar_never_fires_after_unmount() {
        let dismissed = Rc::new(Cell::new(0));
        let d = dismissed.clone();
        let callbacks = HeaderCallbacks::default().on_dismiss_snackbar(move || d.set(d.get() + 1));
        let scope = Scope::new();
        let scheduler = FrameScheduler::new();
        let header = CollapsingHeader::mount(
            &scope,
            scheduler.clone(),
            HeaderConfig::default(),
            LayoutContext::default(),
            callbacks,
        )
        .expect("valid");
        let t0 = Instant::now();

        header.show_snackbar(t0);
        assert!(header.snackbar_visible());
        scope.dispose();
        scheduler.tick(t0 + Duration::from_secs(10));
        assert_eq!(dismissed.get(), 0);
        assert!(!header.snackbar_visible());

        header.show_snackbar(t0);
        assert!(scheduler.is_empty());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_config_from_partial_json() {
        let config: HeaderConfig =
            serde_json::from_str(r#"{ "threshold_offset": 96.0, "parallax_factor": 3.0 }"#)
                .expect("partial config parses");
        assert_eq!(config.threshold_offset, 96.0);
        assert_eq!(config.parallax_factor, 3.0);
        assert_eq!(config.fab_diameter, Dp(56.0));
        assert_eq!(config.validate(), Ok(()));
    }
}
