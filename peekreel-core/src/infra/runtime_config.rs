//! Runtime configuration for tunable carousel constants
//!
//! Fields are `None` by default and fall back to the compiled constants in
//! [`constants::autoplay`]. Breakpoints and per-view counts are not
//! overridable.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::Result;
use crate::infra::constants::autoplay;

/// Optional overrides for autoplay tuning.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RuntimeConfig {
    /// Grace delay before the settle autoplay (ms)
    pub autoplay_grace_ms: Option<u64>,
    /// Offset from the first visible card to the desktop anchor
    pub anchor_offset: Option<usize>,
    /// Whether the settle autoplay runs at all
    pub autoplay_on_settle: Option<bool>,
    /// Whether resize re-asserts autoplay
    pub autoplay_on_resize: Option<bool>,
}

impl RuntimeConfig {
    /// Parse overrides from a JSON object. Unknown keys are ignored.
    pub fn from_json(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(trimmed)?)
    }

    /// Delay between the first frame and the settle autoplay.
    pub fn autoplay_grace(&self) -> Duration {
        Duration::from_millis(
            self.autoplay_grace_ms.unwrap_or(autoplay::GRACE_DELAY_MS),
        )
    }

    /// Offset of the desktop anchor card from the first visible card.
    pub fn anchor_offset(&self) -> usize {
        self.anchor_offset.unwrap_or(autoplay::ANCHOR_OFFSET)
    }

    /// Run the autoplay attempt once the section settles.
    pub fn autoplay_on_settle(&self) -> bool {
        self.autoplay_on_settle.unwrap_or(autoplay::ON_SETTLE)
    }

    /// Re-assert autoplay after a resize burst settles.
    pub fn autoplay_on_resize(&self) -> bool {
        self.autoplay_on_resize.unwrap_or(autoplay::ON_RESIZE)
    }
}
