//! # Revolve Engine
//!
//! A deterministic interaction engine for carousel-style UI components.
//!
//! This crate provides the core logic shared by discrete sliders, drag
//! galleries, autoplay image rotators, and testimonial tickers: one engine
//! type that owns the active index, the transition lock, autoplay
//! scheduling, and the mapping from raw input deltas to progress.
//!
//! ## Design Principles
//!
//! - **No IO**: Engine has no knowledge of the DOM, timers, or platform
//! - **Deterministic**: Same call sequence always produces the same effects
//! - **Testable**: Pure logic, no mocks needed
//! - **Portable**: Runs anywhere Rust runs (native, WASM, embedded)
//!
//! ## Core Concepts
//!
//! ### State
//!
//! The carousel is rendered purely from [`CarouselState`] snapshots:
//! active index, last transition direction, transition-lock flag, and a
//! continuous progress value in `[0, 100]`.
//!
//! ### Effects
//!
//! Operations do not touch the platform. Each one returns [`Effect`]s
//! telling the host what to do: re-render from a snapshot, arm a
//! fire-once timer, or clear one. An empty vector means the input was not
//! accepted (lock held, redundant call, disposed engine).
//!
//! ### Timers
//!
//! The engine requests timers as data ([`TimerRequest`]) and receives
//! fires as data ([`TimerHandle`]). Handles carry a generation stamp, so a
//! callback racing a cancel or [`CarouselEngine::dispose`] is rejected
//! instead of corrupting state.
//!
//! ### Progress mapping
//!
//! The [`progress`] module holds the pure arithmetic: wrap-around and
//! clamped index normalization, the progress/index mapping used by drag
//! carousels, and shortest-circular-path direction inference.
//!
//! ## Quick Start
//!
//! ```rust
//! use revolve_engine::{CarouselConfig, CarouselEngine, Effect, InputSource};
//!
//! // 1. Configure a five-slide looping carousel with autoplay
//! let config = CarouselConfig::new(5)
//!     .with_autoplay_interval(5_000)
//!     .with_transition_duration(700);
//!
//! // 2. Create the engine
//! let mut engine = CarouselEngine::new(config).unwrap();
//!
//! // 3. The host signals visibility; the engine asks for an autoplay timer
//! let effects = engine.set_view_active(true);
//! assert!(matches!(effects[0], Effect::Schedule(_)));
//!
//! // 4. Forward input events; render from published snapshots
//! let effects = engine.next();
//! let snapshot = effects.iter().find_map(Effect::state).unwrap();
//! assert_eq!(snapshot.active_index, 1);
//! assert!(snapshot.is_transitioning);
//!
//! // 5. Continuous input maps through per-source sensitivity
//! # let effects = engine.next(); // still locked: ignored
//! # assert!(effects.is_empty());
//! let _ = engine.apply_delta(-240.0, InputSource::Wheel);
//! ```
//!
//! ## FFI
//!
//! The [`ffi`] module provides C-compatible functions for use from other
//! languages (JS/WASM shells, Swift, Kotlin, etc.). All data is exchanged
//! as JSON strings.

pub mod config;
pub mod effect;
pub mod engine;
pub mod error;
pub mod ffi;
pub mod progress;
pub mod state;
pub mod timer;

// Re-export main types at crate root
pub use config::{CarouselConfig, InputSource};
pub use effect::Effect;
pub use engine::CarouselEngine;
pub use error::Error;
pub use state::{CarouselState, Direction};
pub use timer::{TimerHandle, TimerKind, TimerRequest};

/// Type aliases for clarity
pub type Generation = u64;
pub type Timestamp = u64;
