//! # peekreel-core
//!
//! Controller for horizontally scrolling "peek" carousels of video cards.
//!
//! One [`SectionController`] owns one carousel section. The host (a browser
//! binding, or [`testing::SimSection`] in tests) implements the
//! [`SectionSurface`](peekreel_contracts::SectionSurface) traits and forwards
//! every input, media notification, render frame and timeout as a
//! [`SectionEvent`]. The controller answers by scrolling the track, issuing
//! playback commands and writing toggle state back through the same surface.
//!
//! ## Behaviour
//!
//! - Viewports at or below 450px show one card with peeking neighbours; wider
//!   viewports show three. Desktop widths (1024px and up) add wheel paging
//!   and edge paging on toggle clicks.
//! - At most one video per section plays at any time. Every playback start
//!   goes through [`media::MediaExclusivity`].
//! - Toggle controls mirror media notifications, never commands.
//!
//! ## Modules
//!
//! - [`breakpoint`]: viewport width classification
//! - [`carousel`]: visible range and centered scrolling
//! - [`media`]: exclusivity and toggle observers
//! - [`input`]: click, wheel and resize dispatch
//! - [`section`]: the controller and its lifecycle phases
//! - [`infra`]: constants and [`RuntimeConfig`]
//! - [`testing`]: headless host and harness

pub mod breakpoint;
pub mod carousel;
pub mod error;
pub mod infra;
pub mod input;
pub mod media;
pub mod section;
pub mod testing;

pub use peekreel_contracts as contracts;

pub use breakpoint::{ResponsiveMode, is_desktop, is_single, per_view};
pub use carousel::VisibleRange;
pub use error::{CarouselError, Result};
pub use infra::RuntimeConfig;
pub use input::SectionEvent;
pub use section::{PhaseKind, SectionController, SectionPhase, SectionSnapshot};
