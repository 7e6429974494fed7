//! Media state, media notifications and toggle controls.

/// Observable state of one video element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MediaState {
    /// Playback is not running.
    pub paused: bool,
    /// Audio is muted.
    pub muted: bool,
}

impl MediaState {
    /// A video that has not started yet.
    pub const fn idle() -> Self {
        Self {
            paused: true,
            muted: false,
        }
    }

    /// Not paused.
    pub const fn is_playing(&self) -> bool {
        !self.paused
    }
}

/// Notifications a video emits after its state changed.
///
/// Hosts deliver these asynchronously, never from inside the call that
/// caused them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MediaEvent {
    /// Playback started.
    Play,
    /// Playback paused.
    Pause,
    /// Playback reached the end.
    Ended,
    /// Volume or muted flag changed.
    VolumeChange,
    /// A playback request was refused (e.g. autoplay policy).
    PlayRejected,
}

/// The two toggle controls a card may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ToggleKind {
    /// Play/pause.
    Play,
    /// Mute/unmute.
    Mute,
}

impl ToggleKind {
    /// Pressed state this toggle should show for `state`.
    pub const fn pressed_for(self, state: MediaState) -> bool {
        match self {
            ToggleKind::Play => !state.paused,
            ToggleKind::Mute => state.muted,
        }
    }
}
