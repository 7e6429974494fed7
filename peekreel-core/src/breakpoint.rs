//! Viewport width classification.
//!
//! Every call re-evaluates the width it is given; callers read the live
//! viewport width from the host each time instead of caching a mode.

use serde::Serialize;

use crate::infra::constants::{breakpoints, layout};

/// Card grouping for a viewport width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ResponsiveMode {
    /// One card fully visible, neighbours peeking at the edges.
    Single,
    /// Three cards per view.
    Grouped,
}

impl ResponsiveMode {
    /// Mode for a viewport `width` in CSS pixels.
    pub fn from_width(width: f64) -> Self {
        if is_single(width) {
            ResponsiveMode::Single
        } else {
            ResponsiveMode::Grouped
        }
    }

    /// Cards visible at once.
    pub const fn per_view(self) -> usize {
        match self {
            ResponsiveMode::Single => layout::SINGLE_PER_VIEW,
            ResponsiveMode::Grouped => layout::GROUPED_PER_VIEW,
        }
    }
}

/// Desktop widths enable edge paging and wheel paging.
pub fn is_desktop(width: f64) -> bool {
    width >= breakpoints::DESKTOP_MIN_WIDTH
}

/// Single-card peek layout at `width`.
pub fn is_single(width: f64) -> bool {
    width <= breakpoints::SINGLE_MAX_WIDTH
}

/// Cards per view: 1 in single mode, 3 otherwise.
pub fn per_view(width: f64) -> usize {
    ResponsiveMode::from_width(width).per_view()
}
