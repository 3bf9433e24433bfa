//! Deterministic timer driving for a carousel engine.
//!
//! The engine emits timer requests as data; something still has to keep a
//! table of what is armed and fire handles back when their time comes. In
//! a browser shell that table is `setTimeout`/`clearTimeout`. This module
//! is the rendering-agnostic equivalent: the host supplies `now` and the
//! driver fires due handles in deterministic order, which also makes every
//! timing scenario reproducible in tests.

use crate::error::{Result, ShellError};
use revolve_engine::{
    CarouselConfig, CarouselEngine, CarouselState, Effect, Error, TimerHandle, Timestamp,
};
use tracing::{debug, trace};

#[derive(Debug, Clone, Copy)]
struct PendingTimer {
    handle: TimerHandle,
    due_at: Timestamp,
}

/// A table of armed fire-once timers with absolute due times.
#[derive(Debug, Default)]
pub struct TimerDriver {
    pending: Vec<PendingTimer>,
}

impl TimerDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume the timer effects of one engine call, arming and clearing
    /// entries relative to `now`. Publish effects are ignored.
    pub fn apply(&mut self, effects: &[Effect], now: Timestamp) {
        for effect in effects {
            match effect {
                Effect::Schedule(request) => {
                    let due_at = now + request.delay_ms;
                    trace!(?request.handle, due_at, "arming timer");
                    self.pending.push(PendingTimer {
                        handle: request.handle,
                        due_at,
                    });
                }
                Effect::Cancel(handle) => {
                    trace!(?handle, "clearing timer");
                    self.pending.retain(|p| p.handle != *handle);
                }
                Effect::Publish(_) => {}
            }
        }
    }

    /// Drain every handle due at or before `now`, earliest first.
    pub fn due(&mut self, now: Timestamp) -> Vec<TimerHandle> {
        let mut fired = Vec::new();
        self.pending.retain(|p| {
            if p.due_at <= now {
                fired.push(*p);
                false
            } else {
                true
            }
        });
        fired.sort_by_key(|p| p.due_at);
        fired.iter().map(|p| p.handle).collect()
    }

    /// The earliest pending due time, if any timer is armed.
    pub fn next_due(&self) -> Option<Timestamp> {
        self.pending.iter().map(|p| p.due_at).min()
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }
}

/// Binds an engine, a timer driver, and a render callback into one
/// host loop.
///
/// Operations forward to the engine; published snapshots go to the render
/// callback and timer effects go to the driver, synchronously and in
/// effect order. [`CarouselHost::advance_to`] moves simulated (or real)
/// time forward, firing due timers back into the engine until quiescent.
pub struct CarouselHost<F: FnMut(&CarouselState)> {
    engine: CarouselEngine,
    driver: TimerDriver,
    render: F,
    now: Timestamp,
}

impl<F: FnMut(&CarouselState)> CarouselHost<F> {
    /// Create a host at time zero. Fails fast on an invalid config.
    pub fn new(config: CarouselConfig, render: F) -> std::result::Result<Self, Error> {
        Ok(Self {
            engine: CarouselEngine::new(config)?,
            driver: TimerDriver::new(),
            render,
            now: 0,
        })
    }

    pub fn state(&self) -> &CarouselState {
        self.engine.state()
    }

    pub fn now(&self) -> Timestamp {
        self.now
    }

    pub fn pending_timers(&self) -> usize {
        self.driver.pending_count()
    }

    pub fn go_to(&mut self, index: i64, direction: Option<revolve_engine::Direction>) {
        let effects = self.engine.go_to(index, direction);
        self.route(effects);
    }

    pub fn next(&mut self) {
        let effects = self.engine.next();
        self.route(effects);
    }

    pub fn prev(&mut self) {
        let effects = self.engine.prev();
        self.route(effects);
    }

    pub fn go_to_progress(&mut self, progress: f64) {
        let effects = self.engine.go_to_progress(progress);
        self.route(effects);
    }

    pub fn apply_delta(&mut self, delta: f64, source: revolve_engine::InputSource) {
        let effects = self.engine.apply_delta(delta, source);
        self.route(effects);
    }

    pub fn start_autoplay(&mut self) {
        let effects = self.engine.start_autoplay();
        self.route(effects);
    }

    pub fn stop_autoplay(&mut self) {
        let effects = self.engine.stop_autoplay();
        self.route(effects);
    }

    pub fn set_view_active(&mut self, active: bool) {
        let effects = self.engine.set_view_active(active);
        self.route(effects);
    }

    pub fn dispose(&mut self) {
        let effects = self.engine.dispose();
        self.route(effects);
    }

    /// Advance the host clock to `now`, firing due timers into the engine
    /// in due order. Timers armed by a firing (unlock rearming autoplay,
    /// autoplay scheduling its unlock) are measured from the moment their
    /// predecessor fired, not from `now`.
    pub fn advance_to(&mut self, now: Timestamp) -> Result<()> {
        if now < self.now {
            return Err(ShellError::TimeWentBackwards {
                last: self.now,
                now,
            });
        }
        loop {
            let Some(due_at) = self.driver.next_due() else { break };
            if due_at > now {
                break;
            }
            self.now = due_at;
            for handle in self.driver.due(due_at) {
                debug!(?handle, at = due_at, "timer fired");
                let effects = self.engine.handle_timer(handle);
                self.route(effects);
            }
        }
        self.now = now;
        Ok(())
    }

    /// Advance the host clock by `delta_ms`.
    pub fn advance_by(&mut self, delta_ms: u64) -> Result<()> {
        self.advance_to(self.now + delta_ms)
    }

    fn route(&mut self, effects: Vec<Effect>) {
        for effect in &effects {
            if let Effect::Publish(state) = effect {
                (self.render)(state);
            }
        }
        self.driver.apply(&effects, self.now);
    }
}
