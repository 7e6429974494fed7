//! Test support: a headless section host and a harness that drives a
//! controller against it.

pub mod harness;
pub mod sim;

pub use harness::SectionHarness;
pub use sim::{AutoplayPolicy, ScrollCall, SimCard, SimSection};
