//! # Pan-modal sheet interaction core
//!
//! A sheet slides up from the bottom edge of a container, rests at one of
//! two detents (short form and long form), tracks a continuous pan gesture
//! with rubber-band resistance and velocity-aware snapping, and hands
//! scrolling control back and forth with an embedded scrollable.
//!
//! This crate is the interaction machinery only: it owns positions,
//! anchors, and the decision tables. Rendering, corner chrome and the
//! platform transition are host concerns that consume the observable state
//! exposed here ([`SheetController::frame_signal`],
//! [`SheetController::dim_signal`]).
//!
//! There are three moving pieces:
//!
//! - [`SheetController`] — owns the sheet frame and presentation state,
//!   runs snaps on an injected clock, and recomputes anchors on layout
//!   passes.
//! - The pan interpreter ([`SheetController::handle_pan`]) — converts raw
//!   pan samples into position updates and release decisions.
//! - The scroll coordinator ([`ContentScrollState`] +
//!   [`SheetController::set_scrollable`]) — arbitrates between sheet drag
//!   and embedded scrolling, including the top-bounce momentum hand-off.
//!
//! ```rust
//! use shoji_core::{PanSample, Size};
//! use shoji_sheet::{HeightPolicy, LayoutEnv, SheetConfig, SheetController, SheetHooks};
//!
//! let config = SheetConfig {
//!     short_form_height: HeightPolicy::ContentHeight(300.0),
//!     long_form_height: HeightPolicy::ContentHeight(600.0),
//!     ..Default::default()
//! };
//! let sheet = SheetController::new(config, SheetHooks::default());
//!
//! sheet.set_environment(LayoutEnv {
//!     container: Size::new(400.0, 1000.0),
//!     ..Default::default()
//! });
//! sheet.present(false);
//!
//! sheet.handle_pan(PanSample::began());
//! sheet.handle_pan(PanSample::changed(-24.0));
//! assert_eq!(sheet.position(), 676.0);
//!
//! // A fast upward flick snaps to long form; the host's run loop then
//! // drives `sheet.tick()` until the spring settles.
//! sheet.handle_pan(PanSample::ended(-400.0));
//! assert!(sheet.is_animating());
//! ```

pub mod config;
pub mod dim;
mod gesture;
pub mod layout;
pub mod presentation;
pub mod scroll;

pub use config::{SheetConfig, SheetHooks};
pub use dim::{dim_for_position, DimState};
pub use layout::{compute_anchors, Anchors, HeightPolicy, LayoutEnv};
pub use presentation::{PresentationState, SheetController};
pub use scroll::ContentScrollState;
