//! Fire-once timer handles.
//!
//! The engine never sleeps. It asks the host to arm platform timers by
//! emitting [`TimerRequest`] effects, each carrying a generation-stamped
//! [`TimerHandle`]. When a timer fires, the host passes the handle back;
//! a handle that was cancelled, superseded, or outlived its engine is
//! rejected, which makes raced callbacks harmless.

use crate::Generation;
use serde::{Deserialize, Serialize};

/// What a timer drives when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerKind {
    /// Advances to the next slide
    Autoplay,
    /// Releases the transition lock
    Unlock,
}

/// A handle identifying one armed timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimerHandle {
    /// Which timer this is
    pub kind: TimerKind,
    /// Monotonic stamp distinguishing live handles from stale ones
    pub generation: Generation,
}

/// A request for the host to arm a fire-once platform timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimerRequest {
    /// Handle to pass back when the timer fires
    pub handle: TimerHandle,
    /// Delay until firing, in milliseconds
    pub delay_ms: u64,
}

/// Engine-private timer bookkeeping.
///
/// Invariant: at most one live handle per kind. Arming a kind supersedes
/// its previous handle; a superseded or cleared handle never validates.
#[derive(Debug, Clone, Default)]
pub(crate) struct TimerSlots {
    next_generation: Generation,
    autoplay: Option<Generation>,
    unlock: Option<Generation>,
}

impl TimerSlots {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Arm a timer of `kind`, superseding any live handle of that kind.
    pub(crate) fn arm(&mut self, kind: TimerKind, delay_ms: u64) -> TimerRequest {
        self.next_generation += 1;
        let generation = self.next_generation;
        *self.slot_mut(kind) = Some(generation);
        TimerRequest {
            handle: TimerHandle { kind, generation },
            delay_ms,
        }
    }

    /// Cancel the live handle of `kind`, returning it so the host can be
    /// told which platform timer to clear.
    pub(crate) fn clear(&mut self, kind: TimerKind) -> Option<TimerHandle> {
        self.slot_mut(kind)
            .take()
            .map(|generation| TimerHandle { kind, generation })
    }

    /// Accept a fired handle. True exactly once per live handle.
    pub(crate) fn accept(&mut self, handle: TimerHandle) -> bool {
        let slot = self.slot_mut(handle.kind);
        if *slot == Some(handle.generation) {
            *slot = None;
            true
        } else {
            false
        }
    }

    pub(crate) fn is_armed(&self, kind: TimerKind) -> bool {
        match kind {
            TimerKind::Autoplay => self.autoplay.is_some(),
            TimerKind::Unlock => self.unlock.is_some(),
        }
    }

    fn slot_mut(&mut self, kind: TimerKind) -> &mut Option<Generation> {
        match kind {
            TimerKind::Autoplay => &mut self.autoplay,
            TimerKind::Unlock => &mut self.unlock,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handle_fires_exactly_once() {
        let mut slots = TimerSlots::new();
        let request = slots.arm(TimerKind::Autoplay, 5_000);

        assert!(slots.is_armed(TimerKind::Autoplay));
        assert!(slots.accept(request.handle));
        assert!(!slots.accept(request.handle)); // already consumed
        assert!(!slots.is_armed(TimerKind::Autoplay));
    }

    #[test]
    fn superseded_handle_is_stale() {
        let mut slots = TimerSlots::new();
        let first = slots.arm(TimerKind::Unlock, 700);
        let second = slots.arm(TimerKind::Unlock, 700);

        assert!(!slots.accept(first.handle));
        assert!(slots.accept(second.handle));
    }

    #[test]
    fn cleared_handle_is_stale() {
        let mut slots = TimerSlots::new();
        let request = slots.arm(TimerKind::Autoplay, 5_000);

        let cancelled = slots.clear(TimerKind::Autoplay);
        assert_eq!(cancelled, Some(request.handle));
        assert!(!slots.accept(request.handle));
    }

    #[test]
    fn clear_without_live_handle() {
        let mut slots = TimerSlots::new();
        assert_eq!(slots.clear(TimerKind::Unlock), None);
    }

    #[test]
    fn kinds_are_independent() {
        let mut slots = TimerSlots::new();
        let autoplay = slots.arm(TimerKind::Autoplay, 5_000);
        let unlock = slots.arm(TimerKind::Unlock, 700);

        assert!(slots.accept(unlock.handle));
        assert!(slots.is_armed(TimerKind::Autoplay));
        assert!(slots.accept(autoplay.handle));
    }

    #[test]
    fn generations_are_monotonic() {
        let mut slots = TimerSlots::new();
        let first = slots.arm(TimerKind::Autoplay, 1);
        let second = slots.arm(TimerKind::Unlock, 1);
        let third = slots.arm(TimerKind::Autoplay, 1);

        assert!(first.handle.generation < second.handle.generation);
        assert!(second.handle.generation < third.handle.generation);
    }

    #[test]
    fn serialization_roundtrip() {
        let request = TimerRequest {
            handle: TimerHandle {
                kind: TimerKind::Unlock,
                generation: 42,
            },
            delay_ms: 700,
        };

        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("\"kind\":\"unlock\""));
        assert!(json.contains("delayMs"));

        let parsed: TimerRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(request, parsed);
    }
}
