//! Page-ready detection

use gloo::events::EventListener;
use web_sys::Document;

/// Run `action` once the document has been parsed: immediately when it
/// already has, on `DOMContentLoaded` otherwise.
pub fn on_ready<F>(document: &Document, action: F)
where
    F: FnOnce() + 'static,
{
    if document.ready_state() != "loading" {
        action();
        return;
    }
    EventListener::once(document, "DOMContentLoaded", move |_| action()).forget();
}
