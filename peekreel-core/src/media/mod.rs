//! Media exclusivity and toggle synchronization.
//!
//! Every playback start in a section goes through [`MediaExclusivity`], which
//! pauses the other videos first. Toggle controls are observers of their
//! video: media notifications decide what they show.

pub mod binding;
pub mod exclusivity;

pub use binding::{MediaBinding, ToggleSubscriber};
pub use exclusivity::{MediaExclusivity, StartMode};
