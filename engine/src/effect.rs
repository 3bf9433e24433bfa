//! Engine-to-host messages.
//!
//! Operations never perform side effects themselves. They return effects
//! describing what the host must do, in order: re-render from a snapshot,
//! arm a platform timer, or clear one.

use crate::{CarouselState, TimerHandle, TimerRequest};
use serde::{Deserialize, Serialize};

/// One instruction for the host.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Effect {
    /// Re-render from this snapshot
    Publish(CarouselState),
    /// Arm a fire-once platform timer; pass the handle back on fire
    Schedule(TimerRequest),
    /// Clear the platform timer identified by this handle
    Cancel(TimerHandle),
}

impl Effect {
    /// The published snapshot, if this is a publish effect.
    pub fn state(&self) -> Option<&CarouselState> {
        match self {
            Effect::Publish(state) => Some(state),
            _ => None,
        }
    }

    /// The timer request, if this is a schedule effect.
    pub fn request(&self) -> Option<&TimerRequest> {
        match self {
            Effect::Schedule(request) => Some(request),
            _ => None,
        }
    }

    /// The cancelled handle, if this is a cancel effect.
    pub fn cancelled(&self) -> Option<&TimerHandle> {
        match self {
            Effect::Cancel(handle) => Some(handle),
            _ => None,
        }
    }

    pub fn is_publish(&self) -> bool {
        matches!(self, Effect::Publish(_))
    }
}
