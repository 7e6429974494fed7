//! SectionController: wires geometry, exclusivity and input for one section

use peekreel_contracts::{Propagation, ScrollBehavior, SectionSurface};

use super::phase::{SectionPhase, SettleStage};
use super::snapshot::SectionSnapshot;
use crate::breakpoint::{ResponsiveMode, is_desktop, per_view};
use crate::carousel::{VisibleRange, scroll_to_card, visible_range};
use crate::error::{CarouselError, Result};
use crate::infra::RuntimeConfig;
use crate::input::dispatcher;
use crate::input::{ResizeCoalescer, SectionEvent};
use crate::media::MediaExclusivity;
use peekreel_contracts::{FrameToken, TimerToken};

/// Card the section starts on: the anchor of the first three on desktop,
/// the first card everywhere else.
pub fn start_index(width: f64, len: usize, anchor_offset: usize) -> usize {
    if is_desktop(width) {
        anchor_offset.min(len.saturating_sub(2))
    } else {
        0
    }
}

/// Owns one section's state and its host surface.
///
/// The host forwards every [`SectionEvent`] to [`handle`](Self::handle);
/// nothing changes between events.
#[derive(Debug)]
pub struct SectionController<S> {
    surface: S,
    config: RuntimeConfig,
    media: MediaExclusivity,
    phase: SectionPhase,
    start_card: usize,
    resize: ResizeCoalescer,
}

impl<S: SectionSurface> SectionController<S> {
    /// Run the initializing phase and schedule the settle autoplay.
    ///
    /// Fails when the section has no track or no cards; hosts skip such
    /// sections.
    pub fn mount(surface: S, config: RuntimeConfig) -> Result<Self> {
        if surface.track().is_none() {
            return Err(CarouselError::MissingTrack);
        }
        let len = surface.card_count();
        if len == 0 {
            return Err(CarouselError::EmptySection);
        }

        let start_card =
            start_index(surface.viewport_width(), len, config.anchor_offset());
        let mut controller = Self {
            surface,
            config,
            media: MediaExclusivity::default(),
            phase: SectionPhase::Initializing,
            start_card,
            resize: ResizeCoalescer::new(),
        };
        controller.initialize();
        Ok(controller)
    }

    fn initialize(&mut self) {
        let len = self.surface.card_count();
        if let Err(err) =
            scroll_to_card(&mut self.surface, self.start_card, ScrollBehavior::Instant)
        {
            log::debug!("initial scroll skipped: {err}");
        }
        self.media = MediaExclusivity::bind(&self.surface, len);

        self.phase = if self.config.autoplay_on_settle() {
            let frame = self.surface.request_frame();
            SectionPhase::Settling(SettleStage::AwaitingFrame(frame))
        } else {
            SectionPhase::Interactive
        };
        log::debug!(
            "section mounted: {len} cards, start card {}, {:?}",
            self.start_card,
            self.phase.kind()
        );
    }

    /// Route one event. Handlers never fail; errors degrade to no-ops.
    pub fn handle(&mut self, event: SectionEvent) -> Propagation {
        match event {
            SectionEvent::Click(click) => {
                if let Err(err) =
                    dispatcher::on_click(&mut self.surface, &self.media, click)
                {
                    log::debug!("click ignored: {err}");
                }
                Propagation::Continue
            }
            SectionEvent::Wheel(wheel) => {
                dispatcher::on_wheel(&mut self.surface, wheel)
            }
            SectionEvent::Resize => {
                let token = self.resize.schedule(&mut self.surface);
                log::trace!("resize coalesced into {token}");
                Propagation::Continue
            }
            SectionEvent::Media { card, event } => {
                self.media.on_media_event(&mut self.surface, card, event);
                Propagation::Continue
            }
            SectionEvent::FrameReady(token) => {
                self.on_frame(token);
                Propagation::Continue
            }
            SectionEvent::TimerElapsed(token) => {
                self.on_timer(token);
                Propagation::Continue
            }
        }
    }

    fn on_frame(&mut self, token: FrameToken) {
        if self.phase == SectionPhase::Settling(SettleStage::AwaitingFrame(token)) {
            let timer = self.surface.set_timeout(self.config.autoplay_grace());
            self.phase = SectionPhase::Settling(SettleStage::AwaitingGrace(timer));
            return;
        }

        if self.resize.settle(token) {
            if let Err(err) = dispatcher::on_resize_settled(
                &mut self.surface,
                &self.media,
                &self.config,
            ) {
                log::debug!("resize settle skipped: {err}");
            }
        } else {
            log::trace!("stale {token}");
        }
    }

    fn on_timer(&mut self, token: TimerToken) {
        if self.phase != SectionPhase::Settling(SettleStage::AwaitingGrace(token)) {
            log::trace!("stale {token}");
            return;
        }
        if let Err(err) =
            dispatcher::autoplay(&mut self.surface, &self.media, self.start_card)
        {
            log::debug!("settle autoplay skipped: {err}");
        }
        self.phase = SectionPhase::Interactive;
        log::debug!("section interactive");
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> SectionPhase {
        self.phase
    }

    /// Card the section scrolled to on mount.
    pub fn start_card(&self) -> usize {
        self.start_card
    }

    /// Effective configuration.
    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    /// Playback bookkeeping for this section.
    pub fn media(&self) -> &MediaExclusivity {
        &self.media
    }

    /// The host this controller drives.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Direct host access. Hosts use this to update their own bookkeeping,
    /// never to change media state behind the controller's back.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Visible range for the current viewport width, computed fresh.
    pub fn visible_range(&self) -> Option<VisibleRange> {
        visible_range(&self.surface, per_view(self.surface.viewport_width())).ok()
    }

    /// Capture the current state for diagnostics.
    pub fn snapshot(&self) -> SectionSnapshot {
        let width = self.surface.viewport_width();
        SectionSnapshot {
            phase: self.phase.kind(),
            mode: ResponsiveMode::from_width(width),
            desktop: is_desktop(width),
            card_count: self.surface.card_count(),
            start_card: self.start_card,
            visible: self.visible_range(),
            playing: self.media.playing(&self.surface),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn desktop_starts_on_second_card() {
        assert_eq!(start_index(1200.0, 7, 1), 1);
        assert_eq!(start_index(1024.0, 3, 1), 1);
    }

    #[test]
    fn desktop_start_clamps_for_short_sections() {
        assert_eq!(start_index(1200.0, 2, 1), 0);
        assert_eq!(start_index(1200.0, 1, 1), 0);
        assert_eq!(start_index(1200.0, 4, 5), 2);
    }

    #[test]
    fn non_desktop_starts_on_first_card() {
        assert_eq!(start_index(1023.0, 7, 1), 0);
        assert_eq!(start_index(400.0, 7, 1), 0);
    }
}
