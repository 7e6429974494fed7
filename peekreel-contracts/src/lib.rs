//! Trait surfaces and value types describing how the peekreel controller
//! talks to the page that hosts a carousel section.

pub mod geometry;
pub mod input;
pub mod media;
pub mod schedule;
pub mod surface;

pub use geometry::{CardMetrics, ScrollBehavior, TrackMetrics};
pub use input::{ClickInput, ClickTarget, Propagation, WheelInput};
pub use media::{MediaEvent, MediaState, ToggleKind};
pub use schedule::{FrameToken, TimerToken};
pub use surface::{
    FrameScheduler, MediaSurface, SectionSurface, ToggleSurface, TrackSurface,
};

/// Frequently used imports for controller and host crates.
pub mod prelude {
    pub use super::geometry::{CardMetrics, ScrollBehavior, TrackMetrics};
    pub use super::input::{ClickInput, ClickTarget, Propagation, WheelInput};
    pub use super::media::{MediaEvent, MediaState, ToggleKind};
    pub use super::schedule::{FrameToken, TimerToken};
    pub use super::surface::{
        FrameScheduler, MediaSurface, SectionSurface, ToggleSurface,
        TrackSurface,
    };
}
