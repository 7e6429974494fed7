//! Section lifecycle

use peekreel_contracts::{FrameToken, TimerToken};
use serde::Serialize;

/// `Initializing → Settling → Interactive`. Interactive is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionPhase {
    /// Initial scroll and listener binding.
    Initializing,
    /// Waiting for layout to stabilize before the first autoplay.
    Settling(SettleStage),
    /// Purely reactive to input.
    Interactive,
}

/// The two waits of the settling phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettleStage {
    /// One render pass.
    AwaitingFrame(FrameToken),
    /// The autoplay grace delay.
    AwaitingGrace(TimerToken),
}

/// Token-free view of [`SectionPhase`] for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PhaseKind {
    /// See [`SectionPhase::Initializing`].
    Initializing,
    /// See [`SectionPhase::Settling`].
    Settling,
    /// See [`SectionPhase::Interactive`].
    Interactive,
}

impl SectionPhase {
    /// Drop the token.
    pub fn kind(&self) -> PhaseKind {
        match self {
            SectionPhase::Initializing => PhaseKind::Initializing,
            SectionPhase::Settling(_) => PhaseKind::Settling,
            SectionPhase::Interactive => PhaseKind::Interactive,
        }
    }

    /// Settling finished.
    pub fn is_interactive(&self) -> bool {
        matches!(self, SectionPhase::Interactive)
    }
}
