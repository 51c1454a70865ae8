//! # ScaleKit Editor
//!
//! Scale control logic for a level editor's scale widget: numeric inputs
//! next to the sliders, preset shortcut buttons, layout switching between
//! the linked and per-axis sliders, and an object-batch scaling mode that
//! rescales every selected object around the group pivot.
//!
//! The host editor is reached only through the traits in [`host`]; the
//! [`sandbox`] module implements them in memory.

pub mod applier;
pub mod control;
pub mod host;
pub mod sandbox;
pub mod shortcuts;
pub mod sync;
pub mod visibility;
pub mod widgets;

pub use applier::{ApplyOutcome, ScaleApplier, ScaleMode};
pub use control::ScaleControl;
pub use host::{
    ButtonId, EditorHost, ObjectId, ScalableObject, ScaleWidget, ShortcutMenu, TextInput, UiNode,
    WidgetFactory,
};
pub use sandbox::{EditorEvent, SandboxEditor, SandboxObject, SandboxScaleWidget, SandboxWidgets};
pub use shortcuts::{row_alignment, ShortcutBinding, ShortcutPreset, ShortcutRegistry};
pub use sync::{DisplayMirror, DragTracker};
pub use visibility::{Element, ElementLayout, LayoutPlan, VisibilityController};
pub use widgets::{LabelSpec, MenuSpec, TextInputSpec};
