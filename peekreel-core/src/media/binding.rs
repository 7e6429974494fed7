//! Observer registration between a video and its toggle controls

use peekreel_contracts::{
    MediaEvent, MediaState, MediaSurface, ToggleKind, ToggleSurface,
};

/// A toggle control subscribed to its card's video.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleSubscriber {
    /// Which control this subscriber drives.
    pub kind: ToggleKind,
}

impl ToggleSubscriber {
    /// Pressed state to display after `event`, `None` when the event does not
    /// concern this toggle.
    pub fn on_event(&self, event: MediaEvent, state: MediaState) -> Option<bool> {
        match (self.kind, event) {
            (ToggleKind::Play, MediaEvent::Pause | MediaEvent::Ended) => {
                Some(false)
            }
            (ToggleKind::Play, MediaEvent::PlayRejected) => {
                Some(self.kind.pressed_for(state))
            }
            (ToggleKind::Mute, MediaEvent::VolumeChange) => Some(state.muted),
            _ => None,
        }
    }
}

/// One card's video and the toggles observing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaBinding {
    card: usize,
    subscribers: Vec<ToggleSubscriber>,
}

impl MediaBinding {
    /// Register the toggles present on `card`. `None` when the card has no
    /// video.
    pub fn discover<S>(surface: &S, card: usize) -> Option<Self>
    where
        S: MediaSurface + ToggleSurface + ?Sized,
    {
        surface.media(card)?;
        let subscribers = [ToggleKind::Play, ToggleKind::Mute]
            .into_iter()
            .filter(|kind| surface.has_toggle(card, *kind))
            .map(|kind| ToggleSubscriber { kind })
            .collect();
        Some(Self { card, subscribers })
    }

    /// Index of the bound card.
    pub fn card(&self) -> usize {
        self.card
    }

    /// Toggle subscribers, play before mute.
    pub fn subscribers(&self) -> &[ToggleSubscriber] {
        &self.subscribers
    }

    /// Whether a `kind` subscriber is bound.
    pub fn has_toggle(&self, kind: ToggleKind) -> bool {
        self.subscribers.iter().any(|sub| sub.kind == kind)
    }

    /// Push the video's current state to every subscriber that cares about
    /// `event`.
    pub fn notify<S>(&self, surface: &mut S, event: MediaEvent)
    where
        S: MediaSurface + ToggleSurface + ?Sized,
    {
        let Some(state) = surface.media(self.card) else {
            return;
        };
        for sub in &self.subscribers {
            if let Some(pressed) = sub.on_event(event, state) {
                surface.set_pressed(self.card, sub.kind, pressed);
            }
        }
    }
}
