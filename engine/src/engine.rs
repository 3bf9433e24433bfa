//! CarouselEngine - the single authority for slide state.
//!
//! The engine decides what slide is showing and whether it may change right
//! now. It owns the transition lock, autoplay intent, and the mapping from
//! raw input deltas to progress.
//!
//! # Contract
//!
//! 1. Every operation mutates internal state and returns the effects the
//!    host must apply, in order; an empty vector means nothing was accepted
//! 2. Discrete transitions hold a lock for the configured duration; at most
//!    one is ever in flight
//! 3. Continuous drag updates never engage the lock and are ignored while
//!    one is held
//! 4. Timers exist only as request/handle values; a stale handle passed
//!    back after cancel, supersede, or dispose produces zero effects

use crate::progress;
use crate::timer::TimerSlots;
use crate::{
    error::Result, CarouselConfig, CarouselState, Direction, Effect, InputSource, TimerHandle,
    TimerKind,
};

/// The carousel interaction engine.
///
/// Created from a validated [`CarouselConfig`], driven by host input
/// events, observed through the [`Effect`]s it returns.
#[derive(Debug, Clone)]
pub struct CarouselEngine {
    config: CarouselConfig,
    state: CarouselState,
    timers: TimerSlots,
    /// Host visibility signal; autoplay only runs while in view
    view_active: bool,
    /// Autoplay intent, independent of whether a timer is currently live
    autoplay_requested: bool,
    disposed: bool,
}

impl CarouselEngine {
    /// Create an engine. Fails fast on an invalid config.
    pub fn new(config: CarouselConfig) -> Result<Self> {
        config.validate()?;
        let autoplay_requested = config.autoplay_enabled();
        Ok(Self {
            config,
            state: CarouselState::initial(),
            timers: TimerSlots::new(),
            view_active: false,
            autoplay_requested,
            disposed: false,
        })
    }

    /// Current state snapshot.
    pub fn state(&self) -> &CarouselState {
        &self.state
    }

    /// Engine configuration.
    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Request a transition to an explicit slide index.
    ///
    /// Out-of-range indices are wrapped or clamped per the config, never
    /// rejected. Ignored while a transition is in flight. A target equal to
    /// the current index produces no effects; there is nothing to animate.
    pub fn go_to(&mut self, index: i64, direction: Option<Direction>) -> Vec<Effect> {
        if self.disposed || self.state.is_transitioning {
            return Vec::new();
        }
        let count = self.config.slide_count;
        let target = if self.config.loop_around {
            progress::wrap_index(index, count)
        } else {
            progress::clamp_index(index, count)
        };
        if target == self.state.active_index {
            return Vec::new();
        }

        let direction = direction
            .unwrap_or_else(|| progress::infer_direction(self.state.active_index, target, count));

        let mut effects = Vec::new();
        if let Some(handle) = self.timers.clear(TimerKind::Autoplay) {
            effects.push(Effect::Cancel(handle));
        }

        self.state = CarouselState {
            active_index: target,
            direction,
            is_transitioning: true,
            progress: progress::progress_from_index(target, count),
        };
        effects.push(Effect::Publish(self.state));

        let request = self
            .timers
            .arm(TimerKind::Unlock, self.config.transition_duration_ms);
        effects.push(Effect::Schedule(request));
        effects
    }

    /// Advance one slide forward.
    pub fn next(&mut self) -> Vec<Effect> {
        self.go_to(self.state.active_index as i64 + 1, Some(Direction::Next))
    }

    /// Step one slide back.
    pub fn prev(&mut self) -> Vec<Effect> {
        self.go_to(self.state.active_index as i64 - 1, Some(Direction::Prev))
    }

    /// Continuous drag path: set progress directly.
    ///
    /// Updates `progress` and the derived index without engaging the
    /// transition lock. Ignored while a discrete transition is in flight.
    pub fn go_to_progress(&mut self, progress_value: f64) -> Vec<Effect> {
        if self.disposed || self.state.is_transitioning {
            return Vec::new();
        }
        let count = self.config.slide_count;
        let clamped = progress::clamp_progress(progress_value);
        let index = progress::index_from_progress(clamped, count);

        let direction = if index == self.state.active_index {
            self.state.direction
        } else {
            progress::infer_direction(self.state.active_index, index, count)
        };

        let next_state = CarouselState {
            active_index: index,
            direction,
            is_transitioning: false,
            progress: clamped,
        };
        if next_state == self.state {
            return Vec::new();
        }
        self.state = next_state;
        vec![Effect::Publish(self.state)]
    }

    /// Scale a raw input delta by its source sensitivity and apply it to
    /// the current progress.
    pub fn apply_delta(&mut self, delta: f64, source: InputSource) -> Vec<Effect> {
        if self.disposed || self.state.is_transitioning {
            return Vec::new();
        }
        let scaled = delta * self.config.sensitivity(source);
        self.go_to_progress(self.state.progress + scaled)
    }

    /// Request autoplay. Arms the timer when autoplay is configured, the
    /// view is active, and no timer is already live. Idempotent.
    pub fn start_autoplay(&mut self) -> Vec<Effect> {
        if self.disposed {
            return Vec::new();
        }
        self.autoplay_requested = true;
        self.arm_autoplay().into_iter().collect()
    }

    /// Withdraw the autoplay request and cancel a live timer. Idempotent.
    pub fn stop_autoplay(&mut self) -> Vec<Effect> {
        if self.disposed {
            return Vec::new();
        }
        self.autoplay_requested = false;
        self.timers
            .clear(TimerKind::Autoplay)
            .map(Effect::Cancel)
            .into_iter()
            .collect()
    }

    /// Host visibility signal, e.g. from an intersection observer.
    ///
    /// Becoming active arms autoplay (when configured and requested);
    /// becoming inactive cancels it. Same-value calls are no-ops.
    pub fn set_view_active(&mut self, active: bool) -> Vec<Effect> {
        if self.disposed || self.view_active == active {
            return Vec::new();
        }
        self.view_active = active;
        if active {
            self.arm_autoplay().into_iter().collect()
        } else {
            self.timers
                .clear(TimerKind::Autoplay)
                .map(Effect::Cancel)
                .into_iter()
                .collect()
        }
    }

    /// Host callback for a fired platform timer.
    ///
    /// Stale handles produce zero effects and zero state mutation.
    pub fn handle_timer(&mut self, handle: TimerHandle) -> Vec<Effect> {
        if self.disposed || !self.timers.accept(handle) {
            return Vec::new();
        }
        match handle.kind {
            TimerKind::Unlock => self.finish_transition(),
            TimerKind::Autoplay => self.advance_autoplay(),
        }
    }

    /// Cancel everything and mark the engine dead. Safe to call from any
    /// state, any number of times. Never publishes.
    pub fn dispose(&mut self) -> Vec<Effect> {
        if self.disposed {
            return Vec::new();
        }
        self.disposed = true;
        let mut effects = Vec::new();
        if let Some(handle) = self.timers.clear(TimerKind::Autoplay) {
            effects.push(Effect::Cancel(handle));
        }
        if let Some(handle) = self.timers.clear(TimerKind::Unlock) {
            effects.push(Effect::Cancel(handle));
        }
        effects
    }

    fn finish_transition(&mut self) -> Vec<Effect> {
        self.state = CarouselState {
            is_transitioning: false,
            ..self.state
        };
        let mut effects = vec![Effect::Publish(self.state)];
        if let Some(effect) = self.arm_autoplay() {
            effects.push(effect);
        }
        effects
    }

    fn advance_autoplay(&mut self) -> Vec<Effect> {
        let effects = self.go_to(self.state.active_index as i64 + 1, Some(Direction::Next));
        if effects.is_empty() {
            // Clamped deck parked on its last slide: keep ticking so a
            // later user interaction does not leave autoplay dead.
            return self.arm_autoplay().into_iter().collect();
        }
        effects
    }

    /// Arm the autoplay timer when every precondition holds:
    /// configured, requested, in view, idle, and not already armed.
    fn arm_autoplay(&mut self) -> Option<Effect> {
        let interval = self.config.autoplay_interval_ms?;
        if !self.autoplay_requested
            || !self.view_active
            || self.state.is_transitioning
            || self.timers.is_armed(TimerKind::Autoplay)
        {
            return None;
        }
        Some(Effect::Schedule(self.timers.arm(TimerKind::Autoplay, interval)))
    }
}
