//! # ScaleKit
//!
//! Extends a level editor's scale control with:
//! - Numeric text inputs for the linked, X and Y scale
//! - Preset shortcut buttons per slider row
//! - Layout switching between the linked and per-axis sliders
//! - An object-batch scaling mode that rescales each selected object around
//!   the group pivot without touching the editor's own scale state
//!
//! ## Architecture
//!
//! 1. **scalekit-core** - Axis scopes, number formatting and parsing, errors
//! 2. **scalekit-settings** - Settings file, defaults and validation
//! 3. **scalekit-editor** - Host traits, scale control logic, sandbox host
//! 4. **scalekit** - Command-line driver over the sandbox host

pub mod driver;

pub use scalekit_core::{
    format_scale, parse_scale_input, shortcut_label, AxisScope, Error, InputError, Result,
    ScaleAxis,
};
pub use scalekit_editor::{
    ApplyOutcome, EditorHost, LayoutPlan, SandboxEditor, SandboxScaleWidget, SandboxWidgets,
    ScaleApplier, ScaleControl, ScaleMode, ScaleWidget, WidgetFactory,
};
pub use scalekit_settings::{Config, ScaleSettings, SettingsPersistence};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output on stderr, keeping stdout for command results
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
