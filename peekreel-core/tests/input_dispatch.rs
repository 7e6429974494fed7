//! Clicks, taps and wheel input against settled sections.

mod common;

use common::{DESKTOP, PHONE, TABLET, approx, settled, visible};
use peekreel_core::carousel::scroll_to_card;
use peekreel_core::contracts::{
    ClickInput, ClickTarget, MediaSurface, Propagation, ScrollBehavior,
    TrackSurface,
};
use peekreel_core::testing::SimSection;

#[test]
fn play_toggle_on_rightmost_card_reveals_the_next_one() {
    let mut harness = settled(7, DESKTOP);
    assert_eq!(harness.controller().visible_range(), visible(0, 2));

    harness.click_card(2, ClickTarget::PlayToggle);
    harness.settle();

    let range = harness.controller().visible_range().unwrap();
    assert!(range.contains(3), "{range:?}");
    assert_eq!(harness.section().playing_cards(), vec![2]);
    let last_scroll = harness.section().scroll_log().last().unwrap();
    assert_eq!(last_scroll.behavior, ScrollBehavior::Smooth);
    harness.assert_invariants();
}

#[test]
fn play_toggle_on_leftmost_card_reveals_the_previous_one() {
    let mut harness = settled(7, DESKTOP);
    harness.wheel(0.0, 100.0);
    harness.wheel(0.0, 100.0);
    let range = harness.controller().visible_range().unwrap();
    assert!(range.first > 0);

    harness.click_card(range.first, ClickTarget::MuteToggle);
    harness.settle();
    assert!(harness.controller().visible_range().unwrap().contains(range.first - 1));
}

#[test]
fn middle_card_toggle_does_not_scroll() {
    let mut harness = settled(7, DESKTOP);
    let scrolls = harness.section().scroll_log().len();

    harness.click_card(1, ClickTarget::PlayToggle);
    harness.settle();

    assert_eq!(harness.section().scroll_log().len(), scrolls);
    assert!(harness.section().playing_cards().is_empty());
}

#[test]
fn edge_paging_needs_desktop_and_more_than_three_cards() {
    let mut short = settled(3, DESKTOP);
    let scrolls = short.section().scroll_log().len();
    short.click_card(2, ClickTarget::PlayToggle);
    short.settle();
    assert_eq!(short.section().scroll_log().len(), scrolls);

    let mut tablet = settled(7, TABLET);
    let scrolls = tablet.section().scroll_log().len();
    tablet.click_card(2, ClickTarget::PlayToggle);
    tablet.settle();
    assert_eq!(tablet.section().scroll_log().len(), scrolls);
    assert_eq!(tablet.section().playing_cards(), vec![2]);
}

#[test]
fn mute_toggle_never_changes_playback() {
    let mut harness = settled(7, DESKTOP);
    let before = harness.section().media(1).unwrap();

    harness.click_card(1, ClickTarget::MuteToggle);
    harness.settle();

    let after = harness.section().media(1).unwrap();
    assert_eq!(after.paused, before.paused);
    assert_eq!(after.muted, !before.muted);
    assert_eq!(harness.section().cards()[1].mute_pressed, Some(false));
    harness.assert_invariants();
}

#[test]
fn play_toggle_never_changes_muted() {
    let mut harness = settled(7, DESKTOP);

    harness.click_card(1, ClickTarget::PlayToggle);
    harness.settle();
    let paused = harness.section().media(1).unwrap();
    assert!(paused.paused);
    assert!(paused.muted);

    harness.click_card(1, ClickTarget::PlayToggle);
    harness.settle();
    let resumed = harness.section().media(1).unwrap();
    assert!(!resumed.paused);
    assert!(resumed.muted);
    harness.assert_invariants();
}

#[test]
fn toggle_on_card_without_video_is_ignored() {
    let mut harness = common::settled_sim(SimSection::new(7, DESKTOP).without_video(0));
    harness.click_card(0, ClickTarget::PlayToggle);
    harness.settle();
    assert_eq!(harness.section().playing_cards(), vec![1]);
}

#[test]
fn click_outside_any_card_is_ignored() {
    let mut harness = settled(7, PHONE);
    let scrolls = harness.section().scroll_log().len();
    let propagation = harness.click(ClickInput {
        card: None,
        target: ClickTarget::Body,
        client_x: 300.0,
    });
    assert_eq!(propagation, Propagation::Continue);
    assert_eq!(harness.section().scroll_log().len(), scrolls);
}

#[test]
fn wheel_pages_forward_on_desktop() {
    let mut harness = settled(7, DESKTOP);

    let propagation = harness.wheel(0.0, 100.0);

    assert!(propagation.should_prevent_default());
    let range = harness.controller().visible_range().unwrap();
    assert!(range.contains(3), "{range:?}");
    assert!(range.first > 0);
}

#[test]
fn wheel_pages_backward_and_stops_at_the_start() {
    let mut harness = settled(7, DESKTOP);
    harness.wheel(0.0, 100.0);
    harness.wheel(0.0, -100.0);
    assert_eq!(harness.controller().visible_range().unwrap().first, 0);

    assert!(harness.wheel(0.0, -100.0).should_prevent_default());
    assert_eq!(harness.section().scroll_left(), 0.0);
}

#[test]
fn wheel_stops_at_the_last_card() {
    let mut harness = settled(7, DESKTOP);
    for _ in 0..10 {
        harness.wheel(0.0, 120.0);
    }
    let track = harness.section().track().unwrap();
    assert!(approx(harness.section().scroll_left(), track.max_scroll()));
    assert_eq!(harness.controller().visible_range().unwrap().last, 6);
}

#[test]
fn wheel_is_left_alone_below_desktop() {
    let mut harness = settled(7, 500.0);
    let scrolls = harness.section().scroll_log().len();

    assert_eq!(harness.wheel(0.0, 100.0), Propagation::Continue);
    assert_eq!(harness.section().scroll_log().len(), scrolls);
}

#[test]
fn horizontal_wheel_keeps_native_scrolling() {
    let mut harness = settled(7, DESKTOP);
    let scrolls = harness.section().scroll_log().len();

    assert_eq!(harness.wheel(80.0, 10.0), Propagation::Continue);
    assert_eq!(harness.section().scroll_log().len(), scrolls);
}

#[test]
fn wheel_never_starts_playback() {
    let mut harness = settled(7, DESKTOP);
    let requests = harness.section().play_requests().len();
    harness.wheel(0.0, 100.0);
    harness.settle();
    assert_eq!(harness.section().play_requests().len(), requests);
}

#[test]
fn tap_right_half_pages_forward_and_plays() {
    let mut harness = settled(7, PHONE);

    harness.tap(0.75);
    harness.settle();

    assert_eq!(harness.controller().visible_range(), visible(1, 1));
    assert_eq!(harness.section().playing_cards(), vec![1]);
    assert!(harness.section().cards()[1].video.unwrap().muted);
    harness.assert_invariants();
}

#[test]
fn tap_left_half_pages_backward() {
    let mut harness = settled(7, PHONE);
    harness.tap(0.75);
    harness.tap(0.75);
    harness.settle();

    harness.tap(0.25);
    harness.settle();

    assert_eq!(harness.controller().visible_range(), visible(1, 1));
    assert_eq!(harness.section().playing_cards(), vec![1]);
}

#[test]
fn tap_at_the_ends_stays_put() {
    let mut harness = settled(3, PHONE);
    harness.tap(0.25);
    harness.settle();
    assert_eq!(harness.controller().visible_range(), visible(0, 0));
    assert_eq!(harness.section().playing_cards(), vec![0]);

    for _ in 0..5 {
        harness.tap(0.9);
    }
    harness.settle();
    assert_eq!(harness.controller().visible_range(), visible(2, 2));
    assert_eq!(harness.section().playing_cards(), vec![2]);
}

#[test]
fn body_clicks_do_nothing_outside_single_mode() {
    for width in [TABLET, DESKTOP] {
        let mut harness = settled(7, width);
        let scrolls = harness.section().scroll_log().len();
        harness.tap(0.75);
        harness.settle();
        assert_eq!(harness.section().scroll_log().len(), scrolls, "width {width}");
    }
}

#[test]
fn scrolled_card_is_reported_visible() {
    for width in [320.0, PHONE, 451.0, TABLET, DESKTOP, 1920.0] {
        for cards in [1, 2, 3, 7, 12] {
            let mut sim = SimSection::new(cards, width);
            for index in 0..cards {
                scroll_to_card(&mut sim, index, ScrollBehavior::Instant).unwrap();
                let range = peekreel_core::carousel::visible_range(
                    &sim,
                    peekreel_core::per_view(width),
                )
                .unwrap();
                assert!(
                    range.contains(index),
                    "card {index} of {cards} at {width}px: {range:?}"
                );
            }
        }
    }
}
