//! # Signals, scopes and frames
//!
//! Canopy's core is the small set of primitives the header engine is built
//! from. Everything here is single-threaded and driven by the host's frame
//! loop:
//!
//! - `Signal<T>`: observable value with synchronous subscribers.
//! - `Scope`: lifetime of a screen instance; disposers run on teardown.
//! - `AnimatedValue<T>`: value animated toward a target, sampled with an
//!   explicit frame time.
//! - `FrameScheduler`: per-frame and delayed tasks with cancellable handles.
//!
//! ## Signals
//!
//! ```rust
//! use canopy_core::*;
//!
//! let offset = signal(0.0f32);
//! offset.set(120.0);
//! offset.update(|v| *v += 30.0);
//! assert_eq!(offset.get(), 150.0);
//! ```
//!
//! ## Scopes and cleanup
//!
//! Work that must stop when a screen goes away registers a disposer on the
//! screen's `Scope`; `Scope::dispose` runs them, children first:
//!
//! ```rust
//! use canopy_core::*;
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let scope = Scope::new();
//! let stopped = Rc::new(Cell::new(false));
//! let s = stopped.clone();
//! scope.child().add_disposer(move || s.set(true));
//! scope.dispose();
//! assert!(stopped.get());
//! ```
//!
//! ## Time
//!
//! Nothing reads a global clock. Hosts pass `Instant`s taken from a `Clock`
//! (`SystemClock`, or `ManualClock` in tests) into `FrameScheduler::tick` and
//! `AnimatedValue::update`.

pub mod animation;
pub mod frame;
pub mod geometry;
pub mod scope;
pub mod signal;
pub mod units;

pub use animation::*;
pub use frame::*;
pub use geometry::*;
pub use scope::*;
pub use signal::*;
pub use units::*;
