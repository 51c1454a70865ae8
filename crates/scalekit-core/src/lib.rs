//! # ScaleKit Core
//!
//! Core types and utilities for ScaleKit.
//! Provides axis scopes, scale formatting and parsing, error types and the
//! shared-handle aliases used by the editor crate.

pub mod axis;
pub mod error;
pub mod format;
pub mod types;

pub use axis::{AxisScope, ScaleAxis};
pub use error::{Error, InputError, Result};
pub use format::{contains_digit, format_scale, parse_scale_input, shortcut_label};
pub use types::{shared, Shared};
