//! Widget construction specs
//!
//! Describes every widget the scale control adds to the host widget. The
//! host's [`WidgetFactory`](crate::host::WidgetFactory) turns a spec into a
//! real widget; coordinates are in the scale widget's local space.

use glam::Vec2;
use scalekit_core::ScaleAxis;

/// Placeholder shown in an empty input
pub const INPUT_PLACEHOLDER: &str = "1.00";
/// Characters accepted by the inputs
pub const INPUT_FILTER: &str = "1234567890.-";
pub const INPUT_WIDTH: f32 = 50.0;
pub const INPUT_SCALE: f32 = 0.55;

pub const LABEL_SCALE: f32 = 0.6;
pub const LABEL_ANCHOR: Vec2 = Vec2::new(0.0, 0.5);
pub const LABEL_FONT: &str = "bigFont.fnt";

pub const MENU_GAP: f32 = 3.0;
pub const MENU_SIZE: Vec2 = Vec2::new(248.75, 49.0);
pub const MENU_SCALE: f32 = 0.4;

/// Text input to create
#[derive(Debug, Clone, PartialEq)]
pub struct TextInputSpec {
    pub id: &'static str,
    /// Axis the committed text is applied to
    pub axis: ScaleAxis,
    pub placeholder: &'static str,
    pub width: f32,
    pub scale: f32,
    pub filter: &'static str,
    pub max_characters: usize,
    pub position: Vec2,
}

impl TextInputSpec {
    /// Input for `axis` at its default position
    pub fn for_axis(axis: ScaleAxis, max_characters: usize) -> Self {
        let (id, position) = match axis {
            ScaleAxis::Xy => ("scale-default-input", Vec2::new(35.0, 28.5)),
            ScaleAxis::X => ("scale-x-input", Vec2::new(42.0, 28.5)),
            ScaleAxis::Y => ("scale-y-input", Vec2::new(42.0, 88.5)),
        };
        Self {
            id,
            axis,
            placeholder: INPUT_PLACEHOLDER,
            width: INPUT_WIDTH,
            scale: INPUT_SCALE,
            filter: INPUT_FILTER,
            max_characters,
            position,
        }
    }
}

/// Caption label to create
#[derive(Debug, Clone, PartialEq)]
pub struct LabelSpec {
    pub id: &'static str,
    pub text: &'static str,
    pub font: &'static str,
    pub scale: f32,
    pub anchor: Vec2,
    pub position: Vec2,
}

impl LabelSpec {
    /// Caption for the input of `axis`
    pub fn for_axis(axis: ScaleAxis) -> Self {
        let (id, text, position) = match axis {
            ScaleAxis::Xy => ("scale-default-label", "Scale: ", Vec2::new(-49.0, 30.0)),
            ScaleAxis::X => ("scale-x-label", "ScaleX: ", Vec2::new(-56.0, 30.0)),
            ScaleAxis::Y => ("scale-y-label", "ScaleY: ", Vec2::new(-56.0, 90.0)),
        };
        Self {
            id,
            text,
            font: LABEL_FONT,
            scale: LABEL_SCALE,
            anchor: LABEL_ANCHOR,
            position,
        }
    }
}

/// Shortcut row to create
#[derive(Debug, Clone, PartialEq)]
pub struct MenuSpec {
    pub id: &'static str,
    /// Axis the row's buttons apply to
    pub axis: ScaleAxis,
    pub gap: f32,
    pub content_size: Vec2,
    pub scale: f32,
}

impl MenuSpec {
    pub fn for_axis(axis: ScaleAxis) -> Self {
        let id = match axis {
            ScaleAxis::Xy => "default-shortcuts-menu",
            ScaleAxis::X => "x-shortcuts-menu",
            ScaleAxis::Y => "y-shortcuts-menu",
        };
        Self {
            id,
            axis,
            gap: MENU_GAP,
            content_size: MENU_SIZE,
            scale: MENU_SCALE,
        }
    }
}

/// Host id of the `index`-th shortcut button (1-based)
pub fn shortcut_button_id(index: usize) -> String {
    format!("shortcut-{}", index)
}
