//! Mount, settle and resize behaviour of a whole section.

mod common;

use common::{
    DESKTOP, PHONE, TABLET, init_logging, settled, settled_sim, visible,
};
use peekreel_core::contracts::{ScrollBehavior, TrackSurface};
use peekreel_core::testing::{AutoplayPolicy, SectionHarness, SimSection};
use peekreel_core::{
    CarouselError, PhaseKind, ResponsiveMode, RuntimeConfig, SectionController,
};

#[test]
fn desktop_section_settles_on_the_anchor_card() {
    let harness = settled(7, DESKTOP);

    assert_eq!(harness.controller().start_card(), 1);
    assert_eq!(harness.section().playing_cards(), vec![1]);
    let video = harness.section().cards()[1].video.unwrap();
    assert!(video.muted, "settle autoplay must start muted");
    assert_eq!(harness.section().cards()[1].play_pressed, Some(true));
    assert_eq!(harness.section().cards()[1].mute_pressed, Some(true));
    assert!(harness.controller().phase().is_interactive());
    harness.assert_invariants();
}

#[test]
fn anchor_card_is_centered_on_mount() {
    init_logging();
    let harness = SectionHarness::mount(SimSection::new(7, DESKTOP)).unwrap();

    let first = harness.section().scroll_log()[0];
    assert_eq!(first.behavior, ScrollBehavior::Instant);
    assert_eq!(
        harness.controller().visible_range(),
        visible(0, 2)
    );
    // nothing plays before the settle delay
    assert!(harness.section().playing_cards().is_empty());
    assert_eq!(harness.controller().phase().kind(), PhaseKind::Settling);
}

#[test]
fn settle_autoplay_waits_for_frame_and_grace_delay() {
    init_logging();
    let mut harness = SectionHarness::mount(SimSection::new(7, DESKTOP)).unwrap();
    assert_eq!(harness.section().pending_frames(), 1);
    assert_eq!(harness.section().pending_timers(), 0);

    harness.step();
    assert_eq!(harness.section().pending_timers(), 1);
    assert!(harness.section().play_requests().is_empty());

    harness.step();
    assert_eq!(harness.section().clock_ms(), 80);
    assert_eq!(harness.section().play_requests(), &[1]);
}

#[test]
fn grace_delay_is_configurable() {
    init_logging();
    let config = RuntimeConfig::from_json(r#"{"autoplayGraceMs": 250}"#).unwrap();
    let mut harness =
        SectionHarness::mount_with(SimSection::new(7, DESKTOP), config).unwrap();
    harness.settle();
    assert_eq!(harness.section().clock_ms(), 250);
    assert_eq!(harness.section().playing_cards(), vec![1]);
}

#[test]
fn disabled_settle_autoplay_goes_straight_to_interactive() {
    init_logging();
    let config = RuntimeConfig {
        autoplay_on_settle: Some(false),
        ..Default::default()
    };
    let mut harness =
        SectionHarness::mount_with(SimSection::new(7, DESKTOP), config).unwrap();
    assert!(harness.controller().phase().is_interactive());
    assert_eq!(harness.section().pending_frames(), 0);

    harness.settle();
    assert!(harness.section().playing_cards().is_empty());
}

#[test]
fn phone_and_tablet_start_on_first_card() {
    for width in [PHONE, TABLET] {
        let harness = settled(7, width);
        assert_eq!(harness.controller().start_card(), 0, "width {width}");
        assert_eq!(harness.section().playing_cards(), vec![0], "width {width}");
        harness.assert_invariants();
    }
}

#[test]
fn short_desktop_sections_clamp_the_start_card() {
    let harness = settled(2, DESKTOP);
    assert_eq!(harness.controller().start_card(), 0);
    assert_eq!(harness.section().playing_cards(), vec![0]);
}

#[test]
fn blocked_autoplay_leaves_the_toggle_released() {
    let harness =
        settled_sim(SimSection::new(7, DESKTOP).with_policy(AutoplayPolicy::BlockAll));

    assert_eq!(harness.section().play_requests(), &[1]);
    assert!(harness.section().playing_cards().is_empty());
    assert_eq!(harness.section().cards()[1].play_pressed, Some(false));
    assert!(harness.controller().phase().is_interactive());
    harness.assert_invariants();
}

#[test]
fn anchor_without_video_skips_autoplay() {
    let harness = settled_sim(SimSection::new(7, DESKTOP).without_video(1));
    assert!(harness.section().play_requests().is_empty());
    assert!(harness.controller().phase().is_interactive());
}

#[test]
fn mount_rejects_sections_without_track_or_cards() {
    init_logging();
    let missing = SectionController::mount(
        SimSection::new(7, DESKTOP).without_track(),
        RuntimeConfig::default(),
    );
    assert!(matches!(missing, Err(CarouselError::MissingTrack)));

    let empty = SectionController::mount(
        SimSection::new(0, DESKTOP),
        RuntimeConfig::default(),
    );
    assert!(matches!(empty, Err(CarouselError::EmptySection)));
}

#[test]
fn resize_to_phone_reanchors_on_first_card() {
    let mut harness = settled(7, DESKTOP);
    assert_eq!(harness.section().playing_cards(), vec![1]);

    harness.resize_to(PHONE);
    harness.settle();

    assert_eq!(harness.controller().visible_range(), visible(0, 0));
    assert_eq!(harness.section().playing_cards(), vec![0]);
    assert_eq!(harness.section().cards()[1].play_pressed, Some(false));
    harness.assert_invariants();
}

#[test]
fn resize_to_desktop_plays_the_middle_visible_card() {
    let mut harness = settled(7, PHONE);
    harness.tap(0.75);
    harness.settle();
    harness.tap(0.75);
    harness.settle();
    assert_eq!(harness.controller().visible_range(), visible(2, 2));

    harness.resize_to(DESKTOP);
    harness.settle();

    let range = harness.controller().visible_range().unwrap();
    assert_eq!(harness.section().playing_cards(), vec![range.first + 1]);
    harness.assert_invariants();
}

#[test]
fn resize_burst_is_coalesced_into_one_recompute() {
    let mut harness = settled(7, DESKTOP);
    let scrolls_before = harness.section().scroll_log().len();

    harness.resize_to(1100.0);
    harness.resize_to(900.0);
    harness.resize_to(PHONE);
    assert_eq!(harness.section().pending_frames(), 1);

    harness.settle();
    let snaps: Vec<_> = harness.section().scroll_log()[scrolls_before..]
        .iter()
        .filter(|call| call.behavior == ScrollBehavior::Instant)
        .collect();
    assert_eq!(snaps.len(), 1);
    assert_eq!(harness.section().playing_cards(), vec![0]);
}

#[test]
fn resize_without_autoplay_only_snaps() {
    init_logging();
    let config = RuntimeConfig {
        autoplay_on_resize: Some(false),
        ..Default::default()
    };
    let mut harness =
        SectionHarness::mount_with(SimSection::new(7, DESKTOP), config).unwrap();
    harness.settle();
    let requests = harness.section().play_requests().len();

    harness.resize_to(PHONE);
    harness.settle();
    assert_eq!(harness.section().play_requests().len(), requests);
    assert_eq!(harness.section().playing_cards(), vec![1]);
}

#[test]
fn resize_between_breakpoints_keeps_scroll_in_bounds() {
    let mut harness = settled(7, DESKTOP);
    for width in [320.0, 2560.0, 451.0, 1024.0] {
        harness.resize_to(width);
        harness.settle();
        let track = harness.section().track().unwrap();
        assert!(harness.section().scroll_left() <= track.max_scroll());
        assert!(harness.section().scroll_left() >= 0.0);
        harness.assert_invariants();
    }
}

#[test]
fn snapshot_describes_the_settled_section() {
    let harness = settled(7, DESKTOP);
    let snapshot = harness.controller().snapshot();

    assert_eq!(snapshot.phase, PhaseKind::Interactive);
    assert_eq!(snapshot.mode, ResponsiveMode::Grouped);
    assert!(snapshot.desktop);
    assert_eq!(snapshot.card_count, 7);
    assert_eq!(snapshot.visible, visible(0, 2));
    assert_eq!(snapshot.playing, vec![1]);

    let json = snapshot.to_json();
    assert!(json.contains(r#""phase":"interactive""#), "{json}");
    assert!(json.contains(r#""playing":[1]"#), "{json}");
}
