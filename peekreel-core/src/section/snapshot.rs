//! Diagnostic captures of a section

use serde::Serialize;

use super::phase::PhaseKind;
use crate::breakpoint::ResponsiveMode;
use crate::carousel::VisibleRange;

/// Point-in-time description of a section, for logs and tests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionSnapshot {
    /// Lifecycle phase.
    pub phase: PhaseKind,
    /// Layout mode at capture time.
    pub mode: ResponsiveMode,
    /// Viewport at or above the desktop breakpoint.
    pub desktop: bool,
    /// Cards in the section.
    pub card_count: usize,
    /// Card scrolled to on mount.
    pub start_card: usize,
    /// `None` when the track can no longer be measured.
    pub visible: Option<VisibleRange>,
    /// Cards whose video is unpaused. Never more than one.
    pub playing: Vec<usize>,
}

impl SectionSnapshot {
    /// Serialize for the console. Falls back to `{}`.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}
