//! # peekreel-web
//!
//! Browser host for `peekreel-core`. On page-ready every
//! `[data-bb-section]` element is mounted with its own
//! [`SectionController`](peekreel_core::SectionController) driving a
//! [`DomSection`]. Sections without a track or cards are skipped.

pub mod dom;
pub mod listeners;
pub mod logger;
pub mod ready;
pub mod selectors;

use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use peekreel_core::{CarouselError, RuntimeConfig, SectionController};
use wasm_bindgen::prelude::*;
use web_sys::{Element, Window};

pub use dom::{ControllerSlot, DomCard, DomSection};

/// A mounted section: its controller and the listeners feeding it.
/// Dropping it detaches the listeners and unmounts the controller.
#[derive(Debug)]
pub struct MountedSection {
    slot: Rc<ControllerSlot>,
    _listeners: Vec<EventListener>,
}

impl MountedSection {
    /// The slot holding this section's controller.
    pub fn slot(&self) -> &Rc<ControllerSlot> {
        &self.slot
    }
}

thread_local! {
    static SECTIONS: RefCell<Vec<MountedSection>> = const { RefCell::new(Vec::new()) };
}

/// Module entry point: install the panic hook and logger, then mount every
/// section once the page is ready.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    logger::init();
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    let doc = document.clone();
    ready::on_ready(&document, move || mount_all(&window, &doc));
}

fn mount_all(window: &Window, document: &web_sys::Document) {
    let Ok(list) = document.query_selector_all(selectors::SECTION) else {
        return;
    };
    let mut mounted = Vec::new();
    for i in 0..list.length() {
        let Some(section) = list.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };
        match mount_section(window, &section) {
            Ok(section) => mounted.push(section),
            Err(err) => log::debug!("section {i} skipped: {err}"),
        }
    }
    log::info!("mounted {} carousel sections", mounted.len());
    SECTIONS.with(|sections| sections.borrow_mut().extend(mounted));
}

/// Mount one `[data-bb-section]` element. Fails when the section has no
/// track or no cards.
pub fn mount_section(
    window: &Window,
    element: &Element,
) -> Result<MountedSection, CarouselError> {
    let config = section_config(element);
    let slot = dom::new_slot();
    let surface = DomSection::discover(window.clone(), element, Rc::downgrade(&slot));
    let listeners = listeners::bind(window, &surface, Rc::downgrade(&slot));

    let controller = SectionController::mount(surface, config)?;
    *slot.borrow_mut() = Some(controller);
    Ok(MountedSection {
        slot,
        _listeners: listeners,
    })
}

/// Overrides from `data-bb-config`, defaults when absent or malformed.
fn section_config(element: &Element) -> RuntimeConfig {
    let Some(raw) = element.get_attribute(selectors::CONFIG_ATTR) else {
        return RuntimeConfig::default();
    };
    RuntimeConfig::from_json(&raw).unwrap_or_else(|err| {
        log::warn!("ignoring {}: {err}", selectors::CONFIG_ATTR);
        RuntimeConfig::default()
    })
}

/// JSON snapshots of every mounted section, for debugging from the console.
#[wasm_bindgen(js_name = peekreelSnapshots)]
pub fn snapshots() -> String {
    SECTIONS.with(|sections| {
        let parts: Vec<String> = sections
            .borrow()
            .iter()
            .filter_map(|section| {
                let guard = section.slot.try_borrow().ok()?;
                guard.as_ref().map(|controller| controller.snapshot().to_json())
            })
            .collect();
        format!("[{}]", parts.join(","))
    })
}
