//! Section harness
//!
//! Drives a [`SectionController`] over a [`SimSection`] the way a page would:
//! input events arrive one at a time and asynchronous work (media
//! notifications, frames, timeouts) is pumped in between.

use peekreel_contracts::{ClickInput, ClickTarget, Propagation, WheelInput};

use super::sim::SimSection;
use crate::error::Result;
use crate::infra::RuntimeConfig;
use crate::input::SectionEvent;
use crate::section::SectionController;

/// Upper bound on events processed by one `settle` call.
const MAX_SETTLE_EVENTS: usize = 10_000;

/// A mounted [`SimSection`] and the controller driving it.
#[derive(Debug)]
pub struct SectionHarness {
    controller: SectionController<SimSection>,
}

impl SectionHarness {
    /// Mount with the default configuration.
    pub fn mount(section: SimSection) -> Result<Self> {
        Self::mount_with(section, RuntimeConfig::default())
    }

    /// Mount with `config` overrides.
    pub fn mount_with(section: SimSection, config: RuntimeConfig) -> Result<Self> {
        Ok(Self {
            controller: SectionController::mount(section, config)?,
        })
    }

    /// The controller under test.
    pub fn controller(&self) -> &SectionController<SimSection> {
        &self.controller
    }

    /// The simulated host.
    pub fn section(&self) -> &SimSection {
        self.controller.surface()
    }

    /// Mutable host, for flipping policy or gestures mid-test.
    pub fn section_mut(&mut self) -> &mut SimSection {
        self.controller.surface_mut()
    }

    /// Deliver the next pending asynchronous event, if any.
    pub fn step(&mut self) -> Option<SectionEvent> {
        let event = self.controller.surface_mut().next_event()?;
        self.controller.handle(event);
        Some(event)
    }

    /// Pump until nothing is pending. Returns the number of events handled.
    pub fn settle(&mut self) -> usize {
        let mut handled = 0;
        while self.step().is_some() {
            handled += 1;
            assert!(
                handled < MAX_SETTLE_EVENTS,
                "section never settled (event loop)"
            );
        }
        handled
    }

    /// Click inside a user gesture.
    pub fn click(&mut self, click: ClickInput) -> Propagation {
        self.section_mut().set_user_gesture(true);
        let propagation = self.controller.handle(SectionEvent::Click(click));
        self.section_mut().set_user_gesture(false);
        propagation
    }

    /// Click the center of a toggle (or the body) of `card`.
    pub fn click_card(&mut self, card: usize, target: ClickTarget) -> Propagation {
        let x = self.section().card_center_x(card);
        self.click(ClickInput::on_card(card, target, x))
    }

    /// Tap the body of the card under the pointer at `fraction` of the
    /// track width (0.0 = left edge, 1.0 = right edge).
    pub fn tap(&mut self, fraction: f64) -> Propagation {
        let x = super::sim::PAGE_MARGIN + self.section().client_width() * fraction;
        let card = self.controller.visible_range().map(|r| r.first);
        self.click(ClickInput {
            card,
            target: ClickTarget::Body,
            client_x: x,
        })
    }

    /// Deliver a wheel event and pump the resulting work.
    pub fn wheel(&mut self, delta_x: f64, delta_y: f64) -> Propagation {
        self.controller
            .handle(SectionEvent::Wheel(WheelInput { delta_x, delta_y }))
    }

    /// Change the viewport width and fire one resize event. Does not settle.
    pub fn resize_to(&mut self, width: f64) {
        self.section_mut().set_viewport_width(width);
        self.controller.handle(SectionEvent::Resize);
    }

    /// Panic unless the section is in a consistent state: at most one video
    /// playing, and every toggle showing its video's actual state.
    pub fn assert_invariants(&self) {
        let section = self.section();
        let playing = section.playing_cards();
        assert!(playing.len() <= 1, "more than one video playing: {playing:?}");

        for (index, card) in section.cards().iter().enumerate() {
            let Some(video) = card.video else {
                continue;
            };
            if card.play_toggle {
                assert_eq!(
                    card.play_pressed.unwrap_or(false),
                    video.is_playing(),
                    "play toggle of card {index} out of sync"
                );
            }
            if card.mute_toggle {
                assert_eq!(
                    card.mute_pressed.unwrap_or(false),
                    video.muted,
                    "mute toggle of card {index} out of sync"
                );
            }
        }
    }
}
