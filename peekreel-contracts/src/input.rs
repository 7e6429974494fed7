//! Input events as the controller sees them, already resolved against the
//! markup contract by the host.

/// What part of a card a click landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ClickTarget {
    /// Inside the card's play toggle.
    PlayToggle,
    /// Inside the card's mute toggle.
    MuteToggle,
    /// Anywhere else in the card.
    Body,
}

/// A click delegated from the track.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClickInput {
    /// Index of the card containing the click target, if any.
    pub card: Option<usize>,
    /// The control the click landed on.
    pub target: ClickTarget,
    /// Horizontal pointer position in viewport coordinates.
    pub client_x: f64,
}

impl ClickInput {
    /// Click inside card `card`.
    pub fn on_card(card: usize, target: ClickTarget, client_x: f64) -> Self {
        Self {
            card: Some(card),
            target,
            client_x,
        }
    }
}

/// Wheel deltas reported on the track.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WheelInput {
    /// Horizontal delta in pixels.
    pub delta_x: f64,
    /// Vertical delta in pixels.
    pub delta_y: f64,
}

impl WheelInput {
    /// True when vertical motion dominates.
    pub fn is_vertical(&self) -> bool {
        self.delta_y.abs() > self.delta_x.abs()
    }
}

/// Whether the host should still run the browser's default action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Propagation {
    /// Let the browser handle the event.
    #[default]
    Continue,
    /// The controller consumed the event.
    PreventDefault,
}

impl Propagation {
    /// True when the host must call `preventDefault`.
    pub fn should_prevent_default(self) -> bool {
        matches!(self, Propagation::PreventDefault)
    }
}
