//! Event listener wiring for one mounted section
//!
//! Listeners translate DOM events into [`SectionEvent`]s and hand them to
//! [`dispatch`]. Dropping the returned handles detaches everything.

use std::rc::Weak;

use gloo::events::{EventListener, EventListenerOptions};
use peekreel_contracts::{ClickInput, MediaEvent, WheelInput};
use peekreel_core::SectionEvent;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, MouseEvent, WheelEvent, Window};

use crate::dom::{ControllerSlot, DomSection, dispatch};

const MEDIA_EVENTS: [(&str, MediaEvent); 4] = [
    ("play", MediaEvent::Play),
    ("pause", MediaEvent::Pause),
    ("ended", MediaEvent::Ended),
    ("volumechange", MediaEvent::VolumeChange),
];

/// Attach click, wheel, resize and media listeners for `section`.
pub fn bind(
    window: &Window,
    section: &DomSection,
    slot: Weak<ControllerSlot>,
) -> Vec<EventListener> {
    let mut listeners = Vec::new();

    if let Some(track) = section.track_element() {
        let click_slot = slot.clone();
        listeners.push(EventListener::new(track, "click", move |event| {
            if let Some(click) = resolve_click(&click_slot, event) {
                dispatch(&click_slot, SectionEvent::Click(click));
            }
        }));

        let wheel_slot = slot.clone();
        listeners.push(EventListener::new_with_options(
            track,
            "wheel",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                let Some(wheel) = event.dyn_ref::<WheelEvent>() else {
                    return;
                };
                let input = WheelInput {
                    delta_x: wheel.delta_x(),
                    delta_y: wheel.delta_y(),
                };
                let propagation =
                    dispatch(&wheel_slot, SectionEvent::Wheel(input));
                if propagation.should_prevent_default() {
                    event.prevent_default();
                }
            },
        ));
    }

    let resize_slot = slot.clone();
    listeners.push(EventListener::new(window, "resize", move |_| {
        dispatch(&resize_slot, SectionEvent::Resize);
    }));

    for (card, dom_card) in section.cards().iter().enumerate() {
        let Some(video) = &dom_card.video else {
            continue;
        };
        for (name, media_event) in MEDIA_EVENTS {
            let media_slot = slot.clone();
            listeners.push(EventListener::new(video, name, move |_| {
                dispatch(
                    &media_slot,
                    SectionEvent::Media {
                        card,
                        event: media_event,
                    },
                );
            }));
        }
    }

    log::debug!("bound {} listeners", listeners.len());
    listeners
}

/// Classify a delegated track click. `None` when the section is gone or busy.
fn resolve_click(slot: &Weak<ControllerSlot>, event: &Event) -> Option<ClickInput> {
    let target = event.target()?.dyn_into::<Element>().ok()?;
    let client_x = event
        .dyn_ref::<MouseEvent>()
        .map_or(0.0, |mouse| f64::from(mouse.client_x()));

    let slot = slot.upgrade()?;
    let guard = slot.try_borrow().ok()?;
    let section = guard.as_ref()?.surface();
    Some(section.click_input(&target, client_x))
}
