//! Section controller: one carousel instance from mount to page unload.

pub mod controller;
pub mod phase;
pub mod snapshot;

pub use controller::{SectionController, start_index};
pub use phase::{PhaseKind, SectionPhase, SettleStage};
pub use snapshot::SectionSnapshot;
