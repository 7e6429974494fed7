//! Carousel geometry: which cards are visible and where to scroll.
//!
//! Both halves read live geometry from the host on every call. The visible
//! range is never stored; it is the single source of truth for "where the
//! carousel is".

pub mod positioner;
pub mod range;

pub use positioner::{scroll_target, scroll_to_card};
pub use range::{VisibleRange, step_width, visible_range};
