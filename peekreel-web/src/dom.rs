//! `SectionSurface` over live DOM elements
//!
//! Every read goes to the element; nothing about layout is cached. Frames and
//! timeouts are scheduled through gloo and report back to the owning
//! controller by token.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::{Rc, Weak};
use std::time::Duration;

use gloo::render::{AnimationFrame, request_animation_frame};
use gloo::timers::callback::Timeout;
use peekreel_contracts::prelude::*;
use peekreel_core::{SectionController, SectionEvent};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::{Element, HtmlElement, HtmlVideoElement, ScrollToOptions, Window};

use crate::selectors;

/// The controller of one section, filled in once mounting succeeds.
pub type ControllerSlot = RefCell<Option<SectionController<DomSection>>>;

/// One card's elements.
#[derive(Debug, Clone)]
pub struct DomCard {
    /// The card itself.
    pub element: HtmlElement,
    /// The card's video, if any.
    pub video: Option<HtmlVideoElement>,
    /// Play toggle control.
    pub play: Option<Element>,
    /// Mute toggle control.
    pub mute: Option<Element>,
}

impl DomCard {
    fn discover(element: HtmlElement) -> Self {
        let find = |selector: &str| element.query_selector(selector).ok().flatten();
        Self {
            video: find(selectors::VIDEO).and_then(|el| el.dyn_into().ok()),
            play: find(selectors::PLAY_TOGGLE),
            mute: find(selectors::MUTE_TOGGLE),
            element,
        }
    }

    fn declared_index(&self) -> Option<usize> {
        self.element
            .get_attribute(selectors::CARD_INDEX_ATTR)
            .and_then(|raw| raw.trim().parse().ok())
    }
}

/// A section's markup, read live on every call.
pub struct DomSection {
    window: Window,
    track: Option<HtmlElement>,
    cards: Vec<DomCard>,
    slot: Weak<ControllerSlot>,
    next_token: u64,
    frames: HashMap<FrameToken, AnimationFrame>,
    timers: HashMap<TimerToken, Timeout>,
}

impl fmt::Debug for DomSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DomSection")
            .field("cards", &self.cards.len())
            .field("has_track", &self.track.is_some())
            .field("pending_frames", &self.frames.len())
            .field("pending_timers", &self.timers.len())
            .finish_non_exhaustive()
    }
}

impl DomSection {
    /// Collect the track and cards below `section`. A section without a
    /// track yields a surface with no cards; mounting it fails.
    pub fn discover(
        window: Window,
        section: &Element,
        slot: Weak<ControllerSlot>,
    ) -> Self {
        let track = section
            .query_selector(selectors::TRACK)
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlElement>().ok());

        let mut cards = Vec::new();
        if let Some(track) = &track {
            if let Ok(list) = track.query_selector_all(selectors::CARD) {
                let elements = (0..list.length())
                    .filter_map(|i| list.item(i))
                    .filter_map(|node| node.dyn_into::<HtmlElement>().ok());
                cards.extend(elements.map(DomCard::discover));
            }
        }
        // cards are addressed by `data-index`; document order breaks ties
        cards.sort_by_key(|card| card.declared_index().unwrap_or(usize::MAX));

        Self {
            window,
            track,
            cards,
            slot,
            next_token: 0,
            frames: HashMap::new(),
            timers: HashMap::new(),
        }
    }

    /// The scrolling track element.
    pub fn track_element(&self) -> Option<&HtmlElement> {
        self.track.as_ref()
    }

    /// Cards in `data-index` order.
    pub fn cards(&self) -> &[DomCard] {
        &self.cards
    }

    /// Index of the card containing `target`.
    pub fn card_of(&self, target: &Element) -> Option<usize> {
        let card = target.closest(selectors::CARD).ok().flatten()?;
        self.cards.iter().position(|c| *c.element == card)
    }

    /// Resolve a click on `target` into the card it landed on and the
    /// control (if any) it hit.
    pub fn click_input(&self, target: &Element, client_x: f64) -> ClickInput {
        let within = |selector: &str| {
            target.closest(selector).ok().flatten().is_some()
        };
        let kind = if within(selectors::PLAY_TOGGLE) {
            ClickTarget::PlayToggle
        } else if within(selectors::MUTE_TOGGLE) {
            ClickTarget::MuteToggle
        } else {
            ClickTarget::Body
        };
        ClickInput {
            card: self.card_of(target),
            target: kind,
            client_x,
        }
    }

    /// The card's video element, if it has one.
    pub fn video(&self, card: usize) -> Option<&HtmlVideoElement> {
        self.cards.get(card).and_then(|c| c.video.as_ref())
    }

    /// Forget the handle of a frame that has just fired.
    pub fn frame_fired(&mut self, token: FrameToken) {
        self.frames.remove(&token);
    }

    /// Forget the handle of a timeout that has just fired.
    pub fn timer_fired(&mut self, token: TimerToken) {
        self.timers.remove(&token);
    }

    fn token(&mut self) -> u64 {
        self.next_token += 1;
        self.next_token
    }

    fn toggle(&self, card: usize, kind: ToggleKind) -> Option<&Element> {
        let card = self.cards.get(card)?;
        match kind {
            ToggleKind::Play => card.play.as_ref(),
            ToggleKind::Mute => card.mute.as_ref(),
        }
    }

    fn gap(&self, track: &HtmlElement) -> f64 {
        self.window
            .get_computed_style(track)
            .ok()
            .flatten()
            .and_then(|style| style.get_property_value("gap").ok())
            .map_or(0.0, |gap| selectors::parse_px(&gap))
    }
}

/// Hand `event` to the controller in `slot`, if it is still mounted and not
/// already busy.
pub fn dispatch(slot: &Weak<ControllerSlot>, event: SectionEvent) -> Propagation {
    let Some(slot) = slot.upgrade() else {
        return Propagation::Continue;
    };
    let Ok(mut guard) = slot.try_borrow_mut() else {
        log::warn!("re-entrant {event:?} dropped");
        return Propagation::Continue;
    };
    let Some(controller) = guard.as_mut() else {
        return Propagation::Continue;
    };
    match event {
        SectionEvent::FrameReady(token) => controller.surface_mut().frame_fired(token),
        SectionEvent::TimerElapsed(token) => controller.surface_mut().timer_fired(token),
        _ => {}
    }
    controller.handle(event)
}

/// Report a refused play request on the next microtask.
fn reject_later(slot: Weak<ControllerSlot>, card: usize) {
    spawn_local(async move {
        dispatch(
            &slot,
            SectionEvent::Media {
                card,
                event: MediaEvent::PlayRejected,
            },
        );
    });
}

impl TrackSurface for DomSection {
    fn viewport_width(&self) -> f64 {
        self.window
            .inner_width()
            .ok()
            .and_then(|width| width.as_f64())
            .unwrap_or(0.0)
    }

    fn card_count(&self) -> usize {
        self.cards.len()
    }

    fn track(&self) -> Option<TrackMetrics> {
        let track = self.track.as_ref()?;
        let rect = track.get_bounding_client_rect();
        Some(TrackMetrics {
            scroll_left: f64::from(track.scroll_left()),
            client_width: f64::from(track.client_width()),
            scroll_width: f64::from(track.scroll_width()),
            offset_left: f64::from(track.offset_left()),
            gap: self.gap(track),
            rect_left: rect.left(),
            rect_width: rect.width(),
        })
    }

    fn card(&self, index: usize) -> Option<CardMetrics> {
        let card = &self.cards.get(index)?.element;
        Some(CardMetrics {
            offset_left: f64::from(card.offset_left()),
            // layout width; transforms must not change the stride
            width: f64::from(card.offset_width()),
        })
    }

    fn scroll_track_to(&mut self, left: f64, behavior: ScrollBehavior) {
        let Some(track) = &self.track else {
            return;
        };
        let options = ScrollToOptions::new();
        options.set_left(left);
        options.set_behavior(match behavior {
            ScrollBehavior::Smooth => web_sys::ScrollBehavior::Smooth,
            ScrollBehavior::Instant => web_sys::ScrollBehavior::Instant,
        });
        track.scroll_to_with_scroll_to_options(&options);
    }
}

impl MediaSurface for DomSection {
    fn media(&self, card: usize) -> Option<MediaState> {
        let video = self.video(card)?;
        Some(MediaState {
            paused: video.paused(),
            muted: video.muted(),
        })
    }

    fn pause(&mut self, card: usize) {
        if let Some(video) = self.video(card) {
            if let Err(err) = video.pause() {
                log::debug!("pause of card {card} failed: {err:?}");
            }
        }
    }

    fn set_muted(&mut self, card: usize, muted: bool) {
        if let Some(video) = self.video(card) {
            video.set_muted(muted);
        }
    }

    fn request_play(&mut self, card: usize) {
        let Some(video) = self.video(card) else {
            return;
        };
        let promise: js_sys::Promise = match video.play() {
            Ok(promise) => promise,
            Err(err) => {
                log::debug!("play of card {card} threw: {err:?}");
                reject_later(self.slot.clone(), card);
                return;
            }
        };
        let slot = self.slot.clone();
        spawn_local(async move {
            if let Err(err) = JsFuture::from(promise).await {
                log::debug!("play of card {card} rejected: {err:?}");
                dispatch(
                    &slot,
                    SectionEvent::Media {
                        card,
                        event: MediaEvent::PlayRejected,
                    },
                );
            }
        });
    }
}

impl ToggleSurface for DomSection {
    fn has_toggle(&self, card: usize, kind: ToggleKind) -> bool {
        self.toggle(card, kind).is_some()
    }

    fn set_pressed(&mut self, card: usize, kind: ToggleKind, pressed: bool) {
        if let Some(toggle) = self.toggle(card, kind) {
            let value = if pressed { "true" } else { "false" };
            if let Err(err) = toggle.set_attribute(selectors::PRESSED_ATTR, value) {
                log::debug!("{kind:?} toggle of card {card} not updated: {err:?}");
            }
        }
    }
}

impl FrameScheduler for DomSection {
    fn request_frame(&mut self) -> FrameToken {
        let token = FrameToken(self.token());
        let slot = self.slot.clone();
        let handle = request_animation_frame(move |_| {
            dispatch(&slot, SectionEvent::FrameReady(token));
        });
        self.frames.insert(token, handle);
        token
    }

    fn cancel_frame(&mut self, token: FrameToken) {
        // dropping the handle cancels the request
        self.frames.remove(&token);
    }

    fn set_timeout(&mut self, delay: Duration) -> TimerToken {
        let token = TimerToken(self.token());
        let slot = self.slot.clone();
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        let handle = Timeout::new(millis, move || {
            dispatch(&slot, SectionEvent::TimerElapsed(token));
        });
        self.timers.insert(token, handle);
        token
    }
}

/// Strong owner of a mounted section's controller.
pub fn new_slot() -> Rc<ControllerSlot> {
    Rc::new(RefCell::new(None))
}
