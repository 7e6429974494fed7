//! Resize coalescing
//!
//! A single-slot queue: each resize cancels the pending frame request and
//! schedules a new one, so only the last resize of a burst is acted upon.

use peekreel_contracts::{FrameScheduler, FrameToken};

/// At most one pending resize settle frame.
#[derive(Debug, Default, Clone)]
pub struct ResizeCoalescer {
    pending: Option<FrameToken>,
}

impl ResizeCoalescer {
    /// No resize pending.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace any pending recomputation with one on the next frame.
    pub fn schedule<S>(&mut self, scheduler: &mut S) -> FrameToken
    where
        S: FrameScheduler + ?Sized,
    {
        if let Some(stale) = self.pending.take() {
            scheduler.cancel_frame(stale);
        }
        let token = scheduler.request_frame();
        self.pending = Some(token);
        token
    }

    /// Consume the pending slot when `token` is the one it holds.
    pub fn settle(&mut self, token: FrameToken) -> bool {
        if self.pending == Some(token) {
            self.pending = None;
            true
        } else {
            false
        }
    }

    /// The frame currently awaited, if any.
    pub fn pending(&self) -> Option<FrameToken> {
        self.pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[derive(Default)]
    struct Frames {
        next: u64,
        live: Vec<FrameToken>,
    }

    impl FrameScheduler for Frames {
        fn request_frame(&mut self) -> FrameToken {
            self.next += 1;
            let token = FrameToken(self.next);
            self.live.push(token);
            token
        }

        fn cancel_frame(&mut self, token: FrameToken) {
            self.live.retain(|t| *t != token);
        }

        fn set_timeout(&mut self, _delay: Duration) -> peekreel_contracts::TimerToken {
            unreachable!("resize never uses timers")
        }
    }

    #[test]
    fn burst_keeps_only_the_last_request() {
        let mut frames = Frames::default();
        let mut coalescer = ResizeCoalescer::new();

        coalescer.schedule(&mut frames);
        coalescer.schedule(&mut frames);
        let last = coalescer.schedule(&mut frames);

        assert_eq!(frames.live, vec![last]);
        assert!(!coalescer.settle(FrameToken(1)));
        assert!(coalescer.settle(last));
        assert_eq!(coalescer.pending(), None);
        assert!(!coalescer.settle(last));
    }
}
