//! Carousel constants
//!
//! Breakpoints and per-view counts are fixed. The autoplay values are
//! defaults that [`RuntimeConfig`](super::RuntimeConfig) may override.

/// Viewport breakpoints in CSS pixels.
pub mod breakpoints {
    /// Desktop starts at this width (inclusive).
    pub const DESKTOP_MIN_WIDTH: f64 = 1024.0;
    /// Single-card peek mode up to this width (inclusive).
    pub const SINGLE_MAX_WIDTH: f64 = 450.0;
}

/// Card counts per responsive mode.
pub mod layout {
    /// Cards visible at once in single (peek) mode.
    pub const SINGLE_PER_VIEW: usize = 1;
    /// Cards visible at once in grouped mode.
    pub const GROUPED_PER_VIEW: usize = 3;
    /// Desktop edge paging only applies to sections with more cards than this.
    pub const EDGE_PAGING_MIN_CARDS: usize = 3;
    /// Floor for the card stride so range math never divides by zero.
    pub const MIN_STEP: f64 = 1.0;
}

/// Autoplay timing and anchoring defaults.
pub mod autoplay {
    /// Grace delay after the first render pass before the settle autoplay (ms).
    pub const GRACE_DELAY_MS: u64 = 80;
    /// Offset from the first visible card to the desktop anchor card
    /// ("middle of the first three").
    pub const ANCHOR_OFFSET: usize = 1;
    /// Run the autoplay attempt once the section settles.
    pub const ON_SETTLE: bool = true;
    /// Re-assert autoplay after a resize burst settles.
    pub const ON_RESIZE: bool = true;
}
