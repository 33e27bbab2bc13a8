//! # Runtime primitives
//!
//! Shoji keeps its domain crates free of platform types by funneling
//! everything through a small runtime layer:
//!
//! - `Signal<T>` — observable, reactive value whose subscriptions return a
//!   [`Dispose`] handle.
//! - `Animated<T>` — a value tweened toward a target on externally driven
//!   ticks, timed by an injected [`Clock`].
//! - `PanSample` / `ScrollChange` — the raw interaction samples a host
//!   forwards into the core.
//!
//! ## Signals
//!
//! ```rust
//! use shoji_core::signal;
//!
//! let offset = signal(0.0_f32);
//! let sub = offset.subscribe(|v| println!("offset is now {v}"));
//! offset.set(12.0);
//! sub.run(); // unsubscribe; later writes are no longer delivered
//! ```
//!
//! ## Driving animations
//!
//! Nothing in shoji owns a run loop. An [`Animated`] value is advanced by
//! calling `tick` with the current instant; hosts use [`SystemClock`] and
//! tests drive a [`ManualClock`] deterministically:
//!
//! ```rust
//! use shoji_core::{Animated, AnimationSpec, Clock, Easing, ManualClock};
//! use web_time::Duration;
//!
//! let clock = ManualClock::new();
//! let mut y = Animated::new(0.0_f32);
//! y.animate_to(10.0, AnimationSpec::tween(Duration::from_millis(100), Easing::Linear), clock.now());
//!
//! clock.advance(Duration::from_millis(50));
//! assert!(y.tick(clock.now()));
//! assert!((*y.get() - 5.0).abs() < 1e-4);
//! ```

pub mod animation;
pub mod dispose;
pub mod geometry;
pub mod input;
pub mod signal;

pub use animation::*;
pub use dispose::*;
pub use geometry::*;
pub use input::*;
pub use signal::*;
