//! Host interfaces
//!
//! The scale control never owns the editor, the selected objects or the
//! scale widget it extends. The host hands them in for the duration of one
//! callback through the traits below. Widgets the control creates itself
//! (text inputs, labels, shortcut rows) come from a [`WidgetFactory`] and are
//! kept for the control's lifetime.

use crate::widgets::{LabelSpec, MenuSpec, TextInputSpec};
use glam::Vec2;
use scalekit_core::ScaleAxis;

/// Host identifier of an editor object
pub type ObjectId = u64;

/// Host identifier of a shortcut button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ButtonId(pub u64);

/// An editor object whose transform can be rescaled
///
/// Objects keep two scales per axis: the stored magnitude the editor uses
/// for its own bookkeeping, and the rendered scale that carries the flip
/// sign.
pub trait ScalableObject {
    fn position(&self) -> Vec2;
    fn set_position(&mut self, position: Vec2);

    /// Stored X scale magnitude
    fn scale_x(&self) -> f32;
    /// Stored Y scale magnitude
    fn scale_y(&self) -> f32;
    fn set_scale_x(&mut self, scale: f32);
    fn set_scale_y(&mut self, scale: f32);

    fn is_flip_x(&self) -> bool;
    fn is_flip_y(&self) -> bool;

    /// Scale actually drawn on screen, negative when flipped
    fn set_rendered_scale_x(&mut self, scale: f32);
    fn set_rendered_scale_y(&mut self, scale: f32);
}

/// Editor services the scale control calls into
pub trait EditorHost {
    /// Native combined scale change for the selection
    fn scale_xy_changed(&mut self, x: f32, y: f32, locked: bool);
    /// Native X-only scale change
    fn scale_x_changed(&mut self, x: f32, locked: bool);
    /// Native Y-only scale change
    fn scale_y_changed(&mut self, y: f32, locked: bool);

    /// Currently selected objects, fetched fresh on every call
    fn selected_objects(&self) -> Vec<ObjectId>;
    /// Pivot of a selection; bounding box center when `use_bounds_center`
    fn group_center(&self, selection: &[ObjectId], use_bounds_center: bool) -> Vec2;

    fn object(&self, id: ObjectId) -> Option<&dyn ScalableObject>;
    fn object_mut(&mut self, id: ObjectId) -> Option<&mut dyn ScalableObject>;

    /// Refresh hooks after objects were changed directly
    fn update_buttons(&mut self);
    fn update_delete_buttons(&mut self);
    fn update_object_info_label(&mut self);
}

/// The host's scale control widget
///
/// Owns the authoritative scale state (`value_x`, `value_y`), the three
/// sliders and the lock button.
pub trait ScaleWidget {
    fn value_x(&self) -> f32;
    fn value_y(&self) -> f32;
    fn set_value_x(&mut self, value: f32);
    fn set_value_y(&mut self, value: f32);

    /// Live values produced by an ongoing slider drag
    fn changed_value_x(&self) -> f32;
    fn changed_value_y(&self) -> f32;

    /// Whether positions stay fixed while scaling
    fn is_scale_locked(&self) -> bool;

    /// Normalized slider position
    fn slider_value(&self, slider: ScaleAxis) -> f32;
    fn set_slider_value(&mut self, slider: ScaleAxis, value: f32);
    /// Map a scale to a normalized slider position
    fn value_from_scale(&self, scale: f32) -> f32;

    /// True while the combined X/Y slider is shown
    fn is_linked_label_visible(&self) -> bool;

    fn set_lock_anchor_position(&mut self, position: Vec2);
    fn set_slider_y_position(&mut self, position: Vec2);
    /// Hide the host's own scale labels, replaced by the text inputs
    fn hide_native_labels(&mut self);
}

/// Any widget the control can show, hide or move
pub trait UiNode {
    fn set_visible(&mut self, visible: bool);
    fn is_visible(&self) -> bool;
    fn set_position(&mut self, position: Vec2);
}

/// Text input showing a scale
pub trait TextInput: UiNode {
    fn set_text(&mut self, text: &str);
}

/// Row of shortcut buttons
pub trait ShortcutMenu: UiNode {
    /// Add a button and return the handle presses will report
    fn add_button(&mut self, id: &str, label: &str) -> ButtonId;
    /// Re-run the row layout after buttons were added
    fn update_layout(&mut self);
}

/// Creates the widgets the scale control adds to the host widget
pub trait WidgetFactory {
    fn create_text_input(&mut self, spec: &TextInputSpec) -> Box<dyn TextInput>;
    fn create_label(&mut self, spec: &LabelSpec) -> Box<dyn UiNode>;
    fn create_shortcut_menu(&mut self, spec: &MenuSpec) -> Box<dyn ShortcutMenu>;
}
