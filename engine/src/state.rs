//! Carousel state snapshots.
//!
//! The engine never hands out references into its internals. Every accepted
//! change produces a fresh [`CarouselState`] value and the host renders
//! purely from it.

use serde::{Deserialize, Serialize};

/// Direction of the last committed transition.
///
/// Hosts use this to pick the animation shape (slide left vs right).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Toward higher indices
    Next,
    /// Toward lower indices
    Prev,
    /// No transition has been committed yet
    #[default]
    None,
}

impl Direction {
    /// Parse from the wire form used across the FFI boundary.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "next" => Some(Direction::Next),
            "prev" => Some(Direction::Prev),
            "none" => Some(Direction::None),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Next => "next",
            Direction::Prev => "prev",
            Direction::None => "none",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A point-in-time snapshot of the carousel.
///
/// Invariants: `active_index < slide_count` and `progress` in `[0, 100]`,
/// both guaranteed by the engine's normalization.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarouselState {
    /// Currently showing slide, 0-indexed
    pub active_index: usize,
    /// Direction of the last committed transition
    pub direction: Direction,
    /// True while the transition lock is held
    pub is_transitioning: bool,
    /// Continuous position in `[0, 100]`, used by drag-style carousels
    pub progress: f64,
}

impl CarouselState {
    /// The state every engine starts in.
    pub fn initial() -> Self {
        Self {
            active_index: 0,
            direction: Direction::None,
            is_transitioning: false,
            progress: 0.0,
        }
    }

    /// Whether a discrete transition may be accepted right now.
    pub fn is_idle(&self) -> bool {
        !self.is_transitioning
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state() {
        let state = CarouselState::initial();
        assert_eq!(state.active_index, 0);
        assert_eq!(state.direction, Direction::None);
        assert!(!state.is_transitioning);
        assert_eq!(state.progress, 0.0);
        assert!(state.is_idle());
    }

    #[test]
    fn direction_parse() {
        assert_eq!(Direction::parse("next"), Some(Direction::Next));
        assert_eq!(Direction::parse("prev"), Some(Direction::Prev));
        assert_eq!(Direction::parse("none"), Some(Direction::None));
        assert_eq!(Direction::parse("sideways"), None);
        assert_eq!(Direction::parse(""), None);
    }

    #[test]
    fn direction_display() {
        assert_eq!(Direction::Next.to_string(), "next");
        assert_eq!(Direction::Prev.to_string(), "prev");
        assert_eq!(Direction::None.to_string(), "none");
    }

    #[test]
    fn serialization_roundtrip() {
        let state = CarouselState {
            active_index: 3,
            direction: Direction::Prev,
            is_transitioning: true,
            progress: 75.0,
        };

        let json = serde_json::to_string(&state).unwrap();
        let parsed: CarouselState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, parsed);
    }

    #[test]
    fn serialization_format() {
        let state = CarouselState::initial();
        let json = serde_json::to_string(&state).unwrap();
        assert!(json.contains("activeIndex")); // camelCase
        assert!(json.contains("isTransitioning"));
        assert!(json.contains("\"direction\":\"none\""));
    }
}
