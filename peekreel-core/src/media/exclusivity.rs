//! Single-active-video enforcement for one section

use peekreel_contracts::{MediaEvent, MediaSurface, ToggleKind, ToggleSurface};

use super::binding::MediaBinding;
use crate::error::{CarouselError, Result};

/// Audio handling when playback starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartMode {
    /// Mute first. Unattended starts need this to pass autoplay policies.
    Muted,
    /// Leave the muted flag alone (explicit user request).
    AsIs,
}

/// The section's exclusivity service.
///
/// Invariant: at most one video in the section is unpaused. [`start`] is the
/// only path that requests playback, and it pauses every other video before
/// doing so.
///
/// [`start`]: MediaExclusivity::start
#[derive(Debug, Clone, Default)]
pub struct MediaExclusivity {
    bindings: Vec<MediaBinding>,
    /// Cards carrying a play toggle, with or without a video.
    play_toggles: Vec<usize>,
}

impl MediaExclusivity {
    /// Discover videos and toggles for every card of the section.
    pub fn bind<S>(surface: &S, card_count: usize) -> Self
    where
        S: MediaSurface + ToggleSurface + ?Sized,
    {
        let bindings: Vec<MediaBinding> = (0..card_count)
            .filter_map(|card| MediaBinding::discover(surface, card))
            .collect();
        let play_toggles = (0..card_count)
            .filter(|card| surface.has_toggle(*card, ToggleKind::Play))
            .collect();
        log::debug!(
            "bound {} videos across {card_count} cards",
            bindings.len()
        );
        Self {
            bindings,
            play_toggles,
        }
    }

    /// Bindings in card order, videoless cards skipped.
    pub fn bindings(&self) -> &[MediaBinding] {
        &self.bindings
    }

    /// Binding of `card`, if it has a video.
    pub fn binding(&self, card: usize) -> Option<&MediaBinding> {
        self.bindings.iter().find(|b| b.card() == card)
    }

    /// Pause every video except `except`, then resync all play toggles to
    /// the actual paused state of the video on their card.
    pub fn pause_all_except<S>(&self, surface: &mut S, except: Option<usize>)
    where
        S: MediaSurface + ToggleSurface + ?Sized,
    {
        for binding in &self.bindings {
            let card = binding.card();
            if Some(card) == except {
                continue;
            }
            if surface.media(card).is_some_and(|state| state.is_playing()) {
                surface.pause(card);
            }
        }

        self.sync_play_toggles(surface);
    }

    /// Set every play toggle to the actual state of its card's video.
    pub fn sync_play_toggles<S>(&self, surface: &mut S)
    where
        S: MediaSurface + ToggleSurface + ?Sized,
    {
        for &card in &self.play_toggles {
            let pressed = surface.media(card).is_some_and(|s| s.is_playing());
            surface.set_pressed(card, ToggleKind::Play, pressed);
        }
    }

    /// Start `card`'s video after pausing all others.
    ///
    /// The play request is fire-and-forget. The play toggle is marked pressed
    /// right away; a refusal comes back as [`MediaEvent::PlayRejected`] and
    /// the subscriber resets it.
    pub fn start<S>(&self, surface: &mut S, card: usize, mode: StartMode) -> Result<()>
    where
        S: MediaSurface + ToggleSurface + ?Sized,
    {
        let binding = self.binding(card).ok_or(CarouselError::NoVideo(card))?;
        if mode == StartMode::Muted {
            surface.set_muted(card, true);
        }
        self.pause_all_except(surface, Some(card));
        surface.request_play(card);
        if binding.has_toggle(ToggleKind::Play) {
            surface.set_pressed(card, ToggleKind::Play, true);
        }
        log::debug!("requested playback of card {card} ({mode:?})");
        Ok(())
    }

    /// Play when paused, pause when playing.
    pub fn toggle_play<S>(&self, surface: &mut S, card: usize) -> Result<()>
    where
        S: MediaSurface + ToggleSurface + ?Sized,
    {
        let state = surface.media(card).ok_or(CarouselError::NoVideo(card))?;
        if state.paused {
            self.start(surface, card, StartMode::AsIs)
        } else {
            surface.pause(card);
            surface.set_pressed(card, ToggleKind::Play, false);
            Ok(())
        }
    }

    /// Flip the muted flag. Never touches playback.
    pub fn toggle_mute<S>(&self, surface: &mut S, card: usize) -> Result<()>
    where
        S: MediaSurface + ToggleSurface + ?Sized,
    {
        let state = surface.media(card).ok_or(CarouselError::NoVideo(card))?;
        let muted = !state.muted;
        surface.set_muted(card, muted);
        surface.set_pressed(card, ToggleKind::Mute, muted);
        Ok(())
    }

    /// Media notification listener.
    ///
    /// `Play` re-runs exclusivity with the new video as the survivor, unless
    /// that video was paused again before the notification arrived; then
    /// only the toggles are resynced. Everything else is forwarded to the
    /// card's subscribers.
    pub fn on_media_event<S>(&self, surface: &mut S, card: usize, event: MediaEvent)
    where
        S: MediaSurface + ToggleSurface + ?Sized,
    {
        let Some(binding) = self.binding(card) else {
            log::trace!("{event:?} from unbound card {card}");
            return;
        };
        if event == MediaEvent::Play {
            if surface.media(card).is_some_and(|s| s.is_playing()) {
                self.pause_all_except(surface, Some(card));
            } else {
                self.sync_play_toggles(surface);
            }
        }
        binding.notify(surface, event);
    }

    /// Cards whose video is currently unpaused.
    pub fn playing<S>(&self, surface: &S) -> Vec<usize>
    where
        S: MediaSurface + ?Sized,
    {
        self.bindings
            .iter()
            .map(MediaBinding::card)
            .filter(|&card| surface.media(card).is_some_and(|s| s.is_playing()))
            .collect()
    }
}
