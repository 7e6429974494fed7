//! Section events

use peekreel_contracts::{
    ClickInput, FrameToken, MediaEvent, TimerToken, WheelInput,
};

/// Everything a section controller reacts to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SectionEvent {
    /// Click delegated from the track.
    Click(ClickInput),
    /// Wheel input on the track.
    Wheel(WheelInput),
    /// Window resized.
    Resize,
    /// Notification from a card's video.
    Media {
        /// Card whose video emitted the event.
        card: usize,
        /// What happened.
        event: MediaEvent,
    },
    /// A requested render frame is running.
    FrameReady(FrameToken),
    /// A requested timeout elapsed.
    TimerElapsed(TimerToken),
}

/// Paging direction along the track.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Toward card 0.
    Backward,
    /// Toward the last card.
    Forward,
}

impl Direction {
    /// Forward for positive deltas, backward otherwise.
    pub fn from_delta(delta: f64) -> Self {
        if delta > 0.0 {
            Direction::Forward
        } else {
            Direction::Backward
        }
    }
}
