//! # Revolve Shell
//!
//! Host-side glue for the Revolve carousel engine.
//!
//! The engine is pure: it returns effects and expects the host to arm
//! timers, clear them, and re-render. This crate is that host, minus the
//! rendering technology:
//!
//! - [`TimerDriver`] and [`CarouselHost`] keep the armed-timer table and
//!   fire due handles back into the engine against a host-supplied clock,
//!   so timing behavior is deterministic and testable
//! - [`ScrollLock`] is the reference-counted page lock shared by overlays
//!   (video lightbox, mobile menu)
//! - [`tilt`] holds the stateless pointer-to-transform math for hover
//!   tilt and parallax effects
//!
//! A browser shell maps these one-to-one onto `setTimeout`, body overflow
//! toggling, and CSS transforms.

pub mod driver;
pub mod error;
pub mod scroll_lock;
pub mod tilt;

pub use driver::{CarouselHost, TimerDriver};
pub use error::ShellError;
pub use scroll_lock::ScrollLock;
pub use tilt::{parallax_offset, tilt_transform, TiltConfig, TiltTransform};
