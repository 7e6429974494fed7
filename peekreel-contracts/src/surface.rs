//! Host surfaces.
//!
//! A host exposes one carousel section through these traits. Cards are
//! addressed by their zero-based index; a card owns at most one video and at
//! most one toggle of each [`ToggleKind`]. Reads reflect the live page and must
//! never be cached by implementors.

use std::time::Duration;

use crate::geometry::{CardMetrics, ScrollBehavior, TrackMetrics};
use crate::media::{MediaState, ToggleKind};
use crate::schedule::{FrameToken, TimerToken};

/// Layout reads and scrolling.
pub trait TrackSurface {
    /// Current viewport (window) width.
    fn viewport_width(&self) -> f64;

    /// Number of cards discovered in the track.
    fn card_count(&self) -> usize;

    /// Track geometry, or `None` when the section has no track.
    fn track(&self) -> Option<TrackMetrics>;

    /// Geometry of one card, or `None` when it does not exist.
    fn card(&self, index: usize) -> Option<CardMetrics>;

    /// Scroll the track horizontally to `left`.
    fn scroll_track_to(&mut self, left: f64, behavior: ScrollBehavior);
}

/// Playback commands.
///
/// Commands only request changes. Resulting notifications arrive later as
/// [`MediaEvent`](crate::MediaEvent)s for the same card.
pub trait MediaSurface {
    /// State of the card's video, `None` when the card has no video.
    fn media(&self, card: usize) -> Option<MediaState>;

    /// Pause the card's video. No-op without one.
    fn pause(&mut self, card: usize);

    /// Set the muted flag on the card's video.
    fn set_muted(&mut self, card: usize, muted: bool);

    /// Ask the video to start. Fire-and-forget: a refusal is reported as
    /// [`MediaEvent::PlayRejected`](crate::MediaEvent::PlayRejected).
    fn request_play(&mut self, card: usize);
}

/// One-way writes to toggle controls.
pub trait ToggleSurface {
    /// Whether the card carries a `kind` control.
    fn has_toggle(&self, card: usize, kind: ToggleKind) -> bool;

    /// Reflect `pressed` on the control. Hosts never read this back.
    fn set_pressed(&mut self, card: usize, kind: ToggleKind, pressed: bool);
}

/// Deferred callbacks. Elapsed tokens are handed back to the controller.
pub trait FrameScheduler {
    /// Run once before the next render pass.
    fn request_frame(&mut self) -> FrameToken;

    /// Drop a frame request that has not fired yet.
    fn cancel_frame(&mut self, token: FrameToken);

    /// Run once after `delay`.
    fn set_timeout(&mut self, delay: Duration) -> TimerToken;
}

/// Everything a section controller needs from its host.
pub trait SectionSurface:
    TrackSurface + MediaSurface + ToggleSurface + FrameScheduler
{
}

impl<T> SectionSurface for T where
    T: TrackSurface + MediaSurface + ToggleSurface + FrameScheduler
{
}
