//! Frame pipeline.
//!
//! Ties the style resolver and the layout solver into one per-frame call,
//! and supplies the terminal viewport the root lays out into.

pub mod frame;
pub mod terminal;

pub use frame::{FrameLayout, FrameOptions, compute_frame};
pub use terminal::{DEFAULT_VIEWPORT, detect_viewport};
