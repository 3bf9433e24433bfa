//! Carousel configuration.
//!
//! Configuration is supplied once at engine construction and is read-only
//! for the engine's lifetime. The sensitivity defaults are starting points
//! tuned for typical desktop wheel/pointer input, not a compatibility
//! contract.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Default wheel delta scaling (raw wheel units to progress percent).
pub const DEFAULT_WHEEL_SENSITIVITY: f64 = 0.02;

/// Default drag delta scaling (pixels to progress percent).
pub const DEFAULT_DRAG_SENSITIVITY: f64 = 0.1;

/// Default progress step applied per swipe gesture unit.
pub const DEFAULT_SWIPE_STEP: f64 = 20.0;

/// Default transition lockout window in milliseconds.
pub const DEFAULT_TRANSITION_DURATION_MS: u64 = 700;

/// Where a raw input delta came from. Selects the sensitivity constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputSource {
    Wheel,
    Drag,
    /// A completed swipe gesture; its delta is counted in gesture units
    /// (typically ±1), scaled by the configured swipe step.
    Swipe,
}

impl InputSource {
    /// Parse from the wire form used across the FFI boundary.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "wheel" => Some(InputSource::Wheel),
            "drag" => Some(InputSource::Drag),
            "swipe" => Some(InputSource::Swipe),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            InputSource::Wheel => "wheel",
            InputSource::Drag => "drag",
            InputSource::Swipe => "swipe",
        }
    }
}

impl std::fmt::Display for InputSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Configuration for one carousel engine instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarouselConfig {
    /// Number of slides in the deck
    pub slide_count: usize,
    /// Autoplay interval in milliseconds; `None` disables autoplay
    #[serde(default)]
    pub autoplay_interval_ms: Option<u64>,
    /// Transition lockout window in milliseconds
    #[serde(default = "default_transition_duration")]
    pub transition_duration_ms: u64,
    /// Wheel delta scaling
    #[serde(default = "default_wheel_sensitivity")]
    pub wheel_sensitivity: f64,
    /// Drag delta scaling
    #[serde(default = "default_drag_sensitivity")]
    pub drag_sensitivity: f64,
    /// Progress step per swipe gesture unit
    #[serde(default = "default_swipe_step")]
    pub swipe_step: f64,
    /// Whether index arithmetic wraps around
    #[serde(rename = "loop", default = "default_loop")]
    pub loop_around: bool,
}

fn default_transition_duration() -> u64 {
    DEFAULT_TRANSITION_DURATION_MS
}

fn default_wheel_sensitivity() -> f64 {
    DEFAULT_WHEEL_SENSITIVITY
}

fn default_drag_sensitivity() -> f64 {
    DEFAULT_DRAG_SENSITIVITY
}

fn default_swipe_step() -> f64 {
    DEFAULT_SWIPE_STEP
}

fn default_loop() -> bool {
    true
}

impl CarouselConfig {
    /// Create a config with defaults: looping, no autoplay.
    pub fn new(slide_count: usize) -> Self {
        Self {
            slide_count,
            autoplay_interval_ms: None,
            transition_duration_ms: DEFAULT_TRANSITION_DURATION_MS,
            wheel_sensitivity: DEFAULT_WHEEL_SENSITIVITY,
            drag_sensitivity: DEFAULT_DRAG_SENSITIVITY,
            swipe_step: DEFAULT_SWIPE_STEP,
            loop_around: true,
        }
    }

    /// Enable autoplay with the given interval.
    pub fn with_autoplay_interval(mut self, interval_ms: u64) -> Self {
        self.autoplay_interval_ms = Some(interval_ms);
        self
    }

    pub fn with_transition_duration(mut self, duration_ms: u64) -> Self {
        self.transition_duration_ms = duration_ms;
        self
    }

    pub fn with_wheel_sensitivity(mut self, sensitivity: f64) -> Self {
        self.wheel_sensitivity = sensitivity;
        self
    }

    pub fn with_drag_sensitivity(mut self, sensitivity: f64) -> Self {
        self.drag_sensitivity = sensitivity;
        self
    }

    pub fn with_swipe_step(mut self, step: f64) -> Self {
        self.swipe_step = step;
        self
    }

    /// Switch between wrap-around and clamped index arithmetic.
    pub fn with_loop(mut self, loop_around: bool) -> Self {
        self.loop_around = loop_around;
        self
    }

    /// Whether autoplay is configured at all.
    pub fn autoplay_enabled(&self) -> bool {
        self.autoplay_interval_ms.is_some()
    }

    /// The delta scaling for an input source.
    pub fn sensitivity(&self, source: InputSource) -> f64 {
        match source {
            InputSource::Wheel => self.wheel_sensitivity,
            InputSource::Drag => self.drag_sensitivity,
            InputSource::Swipe => self.swipe_step,
        }
    }

    /// Validate construction-time invariants.
    pub fn validate(&self) -> Result<()> {
        if self.slide_count == 0 {
            return Err(Error::NoSlides);
        }
        if self.transition_duration_ms == 0 {
            return Err(Error::ZeroTransitionDuration);
        }
        Ok(())
    }
}
