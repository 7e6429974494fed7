//! Headless section host
//!
//! `SimSection` lays cards out the way the carousel stylesheet does (three
//! per view in grouped mode, one card with peeking neighbours in single
//! mode), models the browser's autoplay policy and delivers media
//! notifications, frames and timeouts asynchronously through
//! [`SimSection::next_event`].

use std::collections::VecDeque;
use std::time::Duration;

use peekreel_contracts::prelude::*;

use crate::breakpoint::is_single;
use crate::input::SectionEvent;

/// Horizontal page margin on each side of the track.
pub const PAGE_MARGIN: f64 = 24.0;
/// Default inter-card gap.
pub const DEFAULT_GAP: f64 = 16.0;
/// Share of the track a single-mode card occupies.
pub const PEEK_RATIO: f64 = 0.82;

/// Which playback requests the simulated browser grants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AutoplayPolicy {
    /// Every request plays.
    AllowAll,
    /// Muted playback always; audible playback only inside a user gesture.
    #[default]
    MutedOrGesture,
    /// Every request is refused.
    BlockAll,
}

/// One simulated card.
#[derive(Debug, Clone, PartialEq)]
pub struct SimCard {
    /// `None` for cards without video.
    pub video: Option<MediaState>,
    /// Whether the card has a play toggle.
    pub play_toggle: bool,
    /// Whether the card has a mute toggle.
    pub mute_toggle: bool,
    /// Last value written to the play toggle, `None` when never written.
    pub play_pressed: Option<bool>,
    /// Last value written to the mute toggle.
    pub mute_pressed: Option<bool>,
}

impl SimCard {
    fn with_video() -> Self {
        Self {
            video: Some(MediaState::idle()),
            play_toggle: true,
            mute_toggle: true,
            play_pressed: None,
            mute_pressed: None,
        }
    }
}

/// A scroll applied to the track.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollCall {
    /// Target scroll offset.
    pub left: f64,
    /// Smooth or instant.
    pub behavior: ScrollBehavior,
}

/// In-memory [`SectionSurface`] with a virtual clock.
#[derive(Debug, Clone)]
pub struct SimSection {
    viewport_width: f64,
    gap: f64,
    has_track: bool,
    scroll_left: f64,
    cards: Vec<SimCard>,
    policy: AutoplayPolicy,
    user_gesture: bool,
    clock_ms: u64,
    next_token: u64,
    media_queue: VecDeque<(usize, MediaEvent)>,
    frames: VecDeque<FrameToken>,
    timers: Vec<(u64, TimerToken)>,
    scroll_log: Vec<ScrollCall>,
    play_requests: Vec<usize>,
}

impl SimSection {
    /// `card_count` cards, each with a video and both toggles.
    pub fn new(card_count: usize, viewport_width: f64) -> Self {
        Self {
            viewport_width,
            gap: DEFAULT_GAP,
            has_track: true,
            scroll_left: 0.0,
            cards: (0..card_count).map(|_| SimCard::with_video()).collect(),
            policy: AutoplayPolicy::default(),
            user_gesture: false,
            clock_ms: 0,
            next_token: 0,
            media_queue: VecDeque::new(),
            frames: VecDeque::new(),
            timers: Vec::new(),
            scroll_log: Vec::new(),
            play_requests: Vec::new(),
        }
    }

    /// Builder for the autoplay policy.
    pub fn with_policy(mut self, policy: AutoplayPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Use `gap` between cards instead of [`DEFAULT_GAP`].
    pub fn with_gap(mut self, gap: f64) -> Self {
        self.gap = gap;
        self
    }

    /// Strip the video (and its toggles) from `card`.
    pub fn without_video(mut self, card: usize) -> Self {
        if let Some(c) = self.cards.get_mut(card) {
            c.video = None;
            c.play_toggle = false;
            c.mute_toggle = false;
        }
        self
    }

    /// Drop the track, as if the markup lacked one.
    pub fn without_track(mut self) -> Self {
        self.has_track = false;
        self
    }

    /// Change the viewport width. Layout reflows immediately and the
    /// browser clamps the scroll offset; no resize event is delivered.
    pub fn set_viewport_width(&mut self, width: f64) {
        self.viewport_width = width;
        let max = self.track_metrics().max_scroll();
        self.scroll_left = self.scroll_left.clamp(0.0, max);
    }

    /// Mark subsequent play requests as user-initiated.
    pub fn set_user_gesture(&mut self, active: bool) {
        self.user_gesture = active;
    }

    /// Change the autoplay policy.
    pub fn set_policy(&mut self, policy: AutoplayPolicy) {
        self.policy = policy;
    }

    /// Simulate a video finishing on its own.
    pub fn end_playback(&mut self, card: usize) {
        if let Some(video) = video_of(&mut self.cards, card) {
            if !video.paused {
                video.paused = true;
                self.media_queue.push_back((card, MediaEvent::Ended));
            }
        }
    }

    /// Simulated cards in index order.
    pub fn cards(&self) -> &[SimCard] {
        &self.cards
    }

    /// Current track offset.
    pub fn scroll_left(&self) -> f64 {
        self.scroll_left
    }

    /// Every scroll applied so far, oldest first.
    pub fn scroll_log(&self) -> &[ScrollCall] {
        &self.scroll_log
    }

    /// Cards passed to `request_play`, in order.
    pub fn play_requests(&self) -> &[usize] {
        &self.play_requests
    }

    /// Virtual time elapsed.
    pub fn clock_ms(&self) -> u64 {
        self.clock_ms
    }

    /// Frame requests not yet delivered.
    pub fn pending_frames(&self) -> usize {
        self.frames.len()
    }

    /// Timeouts not yet delivered.
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// Cards whose video is currently not paused.
    pub fn playing_cards(&self) -> Vec<usize> {
        self.cards
            .iter()
            .enumerate()
            .filter(|(_, c)| c.video.is_some_and(|v| v.is_playing()))
            .map(|(i, _)| i)
            .collect()
    }

    /// Client width of the track.
    pub fn client_width(&self) -> f64 {
        (self.viewport_width - 2.0 * PAGE_MARGIN).max(0.0)
    }

    /// Width of one card in the current mode.
    pub fn card_width(&self) -> f64 {
        let client = self.client_width();
        if is_single(self.viewport_width) {
            client * PEEK_RATIO
        } else {
            ((client - 2.0 * self.gap) / 3.0).max(0.0)
        }
    }

    /// Horizontal viewport coordinate of the middle of `card`.
    pub fn card_center_x(&self, card: usize) -> f64 {
        let step = self.card_width() + self.gap;
        PAGE_MARGIN + card as f64 * step - self.scroll_left + self.card_width() / 2.0
    }

    /// Next asynchronous event in host order: media notifications, then
    /// render frames, then the earliest timeout (advancing the clock).
    pub fn next_event(&mut self) -> Option<SectionEvent> {
        if let Some((card, event)) = self.media_queue.pop_front() {
            return Some(SectionEvent::Media { card, event });
        }
        if let Some(token) = self.frames.pop_front() {
            return Some(SectionEvent::FrameReady(token));
        }
        let earliest = self
            .timers
            .iter()
            .enumerate()
            .min_by_key(|(_, (due, token))| (*due, *token))
            .map(|(i, _)| i)?;
        let (due, token) = self.timers.remove(earliest);
        self.clock_ms = self.clock_ms.max(due);
        Some(SectionEvent::TimerElapsed(token))
    }

    fn track_metrics(&self) -> TrackMetrics {
        let client = self.client_width();
        let n = self.cards.len() as f64;
        let content = if self.cards.is_empty() {
            0.0
        } else {
            n * self.card_width() + (n - 1.0) * self.gap
        };
        TrackMetrics {
            scroll_left: self.scroll_left,
            client_width: client,
            scroll_width: content.max(client),
            offset_left: PAGE_MARGIN,
            gap: self.gap,
            rect_left: PAGE_MARGIN,
            rect_width: client,
        }
    }

    fn allows(&self, state: MediaState) -> bool {
        match self.policy {
            AutoplayPolicy::AllowAll => true,
            AutoplayPolicy::MutedOrGesture => state.muted || self.user_gesture,
            AutoplayPolicy::BlockAll => false,
        }
    }

    fn token(&mut self) -> u64 {
        self.next_token += 1;
        self.next_token
    }
}

fn video_of(cards: &mut [SimCard], card: usize) -> Option<&mut MediaState> {
    cards.get_mut(card).and_then(|c| c.video.as_mut())
}

impl TrackSurface for SimSection {
    fn viewport_width(&self) -> f64 {
        self.viewport_width
    }

    fn card_count(&self) -> usize {
        self.cards.len()
    }

    fn track(&self) -> Option<TrackMetrics> {
        self.has_track.then(|| self.track_metrics())
    }

    fn card(&self, index: usize) -> Option<CardMetrics> {
        if index >= self.cards.len() {
            return None;
        }
        let width = self.card_width();
        Some(CardMetrics {
            offset_left: PAGE_MARGIN + index as f64 * (width + self.gap),
            width,
        })
    }

    fn scroll_track_to(&mut self, left: f64, behavior: ScrollBehavior) {
        let max = self.track_metrics().max_scroll();
        self.scroll_left = left.clamp(0.0, max);
        self.scroll_log.push(ScrollCall { left, behavior });
    }
}

impl MediaSurface for SimSection {
    fn media(&self, card: usize) -> Option<MediaState> {
        self.cards.get(card).and_then(|c| c.video)
    }

    fn pause(&mut self, card: usize) {
        if let Some(video) = video_of(&mut self.cards, card) {
            if !video.paused {
                video.paused = true;
                self.media_queue.push_back((card, MediaEvent::Pause));
            }
        }
    }

    fn set_muted(&mut self, card: usize, muted: bool) {
        if let Some(video) = video_of(&mut self.cards, card) {
            if video.muted != muted {
                video.muted = muted;
                self.media_queue.push_back((card, MediaEvent::VolumeChange));
            }
        }
    }

    fn request_play(&mut self, card: usize) {
        self.play_requests.push(card);
        let Some(state) = self.media(card) else {
            return;
        };
        if state.is_playing() {
            return;
        }
        if self.allows(state) {
            if let Some(video) = video_of(&mut self.cards, card) {
                video.paused = false;
            }
            self.media_queue.push_back((card, MediaEvent::Play));
        } else {
            self.media_queue.push_back((card, MediaEvent::PlayRejected));
        }
    }
}

impl ToggleSurface for SimSection {
    fn has_toggle(&self, card: usize, kind: ToggleKind) -> bool {
        self.cards.get(card).is_some_and(|c| match kind {
            ToggleKind::Play => c.play_toggle,
            ToggleKind::Mute => c.mute_toggle,
        })
    }

    fn set_pressed(&mut self, card: usize, kind: ToggleKind, pressed: bool) {
        let Some(c) = self.cards.get_mut(card) else {
            return;
        };
        match kind {
            ToggleKind::Play if c.play_toggle => c.play_pressed = Some(pressed),
            ToggleKind::Mute if c.mute_toggle => c.mute_pressed = Some(pressed),
            _ => {}
        }
    }
}

impl FrameScheduler for SimSection {
    fn request_frame(&mut self) -> FrameToken {
        let token = FrameToken(self.token());
        self.frames.push_back(token);
        token
    }

    fn cancel_frame(&mut self, token: FrameToken) {
        self.frames.retain(|t| *t != token);
    }

    fn set_timeout(&mut self, delay: Duration) -> TimerToken {
        let token = TimerToken(self.token());
        let due = self.clock_ms + delay.as_millis() as u64;
        self.timers.push((due, token));
        token
    }
}
