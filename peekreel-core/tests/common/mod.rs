//! Shared fixtures for section integration tests

#![allow(dead_code)]

use peekreel_core::VisibleRange;
use peekreel_core::testing::{SectionHarness, SimSection};

pub const DESKTOP: f64 = 1200.0;
pub const TABLET: f64 = 800.0;
pub const PHONE: f64 = 400.0;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Mount and settle a section of `cards` video cards at `width`.
pub fn settled(cards: usize, width: f64) -> SectionHarness {
    settled_sim(SimSection::new(cards, width))
}

pub fn settled_sim(sim: SimSection) -> SectionHarness {
    init_logging();
    let mut harness = SectionHarness::mount(sim).expect("section mounts");
    harness.settle();
    harness
}

/// Absolute difference below a tenth of a pixel.
pub fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 0.1
}

pub fn visible(first: usize, last: usize) -> Option<VisibleRange> {
    Some(VisibleRange { first, last })
}
