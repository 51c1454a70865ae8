//! Scale application
//!
//! Turns a requested scale into editor changes. Two models exist:
//!
//! - **Native**: the selection is one logical object and the host's own
//!   per-axis scale state is updated through its change notifications.
//! - **Object batch**: every selected object is rescaled on its own around
//!   the group pivot, leaving the host's scale bookkeeping alone. Relative
//!   spacing inside the group is kept unless the host's scale lock is on.

use crate::host::{EditorHost, ScaleWidget};
use glam::Vec2;
use scalekit_core::ScaleAxis;
use tracing::debug;

/// How scales are applied to the selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaleMode {
    /// Through the host's scale bookkeeping
    Native,
    /// Directly on each selected object's transform
    ObjectBatch,
}

/// Summary of one apply
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ApplyOutcome {
    /// New scale state written to the host widget
    Native { value_x: f32, value_y: f32 },
    /// Factor applied to each of `objects` selected objects
    Batch { multiplier: f32, objects: usize },
}

/// Applies requested scales to the current selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScaleApplier {
    mode: ScaleMode,
}

impl ScaleApplier {
    pub fn new(mode: ScaleMode) -> Self {
        Self { mode }
    }

    /// Applier for the `scale-hack` setting
    pub fn from_scale_hack(scale_hack: bool) -> Self {
        Self::new(if scale_hack {
            ScaleMode::ObjectBatch
        } else {
            ScaleMode::Native
        })
    }

    pub fn mode(&self) -> ScaleMode {
        self.mode
    }

    /// Apply `requested` on `axis`
    ///
    /// A requested scale of exactly zero is treated as 1.
    pub fn apply_scale(
        &self,
        requested: f32,
        axis: ScaleAxis,
        editor: &mut dyn EditorHost,
        widget: &mut dyn ScaleWidget,
    ) -> ApplyOutcome {
        let scale = if requested == 0.0 { 1.0 } else { requested };

        let outcome = match self.mode {
            ScaleMode::Native => apply_native(scale, axis, editor, widget),
            ScaleMode::ObjectBatch => apply_batch(scale, axis, editor, widget.is_scale_locked()),
        };
        debug!(%axis, requested, ?outcome, "Applied scale");
        outcome
    }
}

fn apply_native(
    scale: f32,
    axis: ScaleAxis,
    editor: &mut dyn EditorHost,
    widget: &mut dyn ScaleWidget,
) -> ApplyOutcome {
    let locked = widget.is_scale_locked();

    match axis {
        ScaleAxis::Xy => {
            let (value_x, value_y) = (widget.value_x(), widget.value_y());
            let mut current = value_x.max(value_y);
            if current == 0.0 {
                current = 1.0;
            }
            let new_x = scale * (value_x / current);
            let new_y = scale * (value_y / current);

            editor.scale_xy_changed(new_x, new_y, locked);
            let slider = widget.value_from_scale(scale);
            widget.set_slider_value(ScaleAxis::Xy, slider);
            widget.set_value_x(new_x);
            widget.set_value_y(new_y);
        }
        ScaleAxis::X => {
            editor.scale_x_changed(scale, locked);
            let slider = widget.value_from_scale(scale);
            widget.set_slider_value(ScaleAxis::X, slider);
            widget.set_value_x(scale);
        }
        ScaleAxis::Y => {
            editor.scale_y_changed(scale, locked);
            let slider = widget.value_from_scale(scale);
            widget.set_slider_value(ScaleAxis::Y, slider);
            widget.set_value_y(scale);
        }
    }

    ApplyOutcome::Native {
        value_x: widget.value_x(),
        value_y: widget.value_y(),
    }
}

fn apply_batch(
    scale: f32,
    axis: ScaleAxis,
    editor: &mut dyn EditorHost,
    locked: bool,
) -> ApplyOutcome {
    let selection = editor.selected_objects();
    let pivot = editor.group_center(&selection, true);

    let host: &dyn EditorHost = &*editor;
    let mut scale_x = f32::NEG_INFINITY;
    let mut scale_y = f32::NEG_INFINITY;
    for obj in selection.iter().filter_map(|&id| host.object(id)) {
        scale_x = scale_x.max(obj.scale_x());
        scale_y = scale_y.max(obj.scale_y());
    }

    let multiplier = match axis {
        ScaleAxis::Xy => scale / scale_x.max(scale_y),
        ScaleAxis::X => scale / scale_x,
        ScaleAxis::Y => scale / scale_y,
    };

    let mut objects = 0;
    for &id in &selection {
        let Some(obj) = editor.object_mut(id) else {
            continue;
        };
        let position = obj.position();
        let offset = position - pivot;

        if !locked {
            let moved = match axis {
                ScaleAxis::Xy => pivot + offset * multiplier,
                ScaleAxis::X => Vec2::new(pivot.x + offset.x * multiplier, position.y),
                ScaleAxis::Y => Vec2::new(position.x, pivot.y + offset.y * multiplier),
            };
            obj.set_position(moved);
        }

        if matches!(axis, ScaleAxis::Xy | ScaleAxis::X) {
            let stored = obj.scale_x() * multiplier;
            obj.set_rendered_scale_x(stored * flip_sign(obj.is_flip_x()));
            obj.set_scale_x(stored);
        }
        if matches!(axis, ScaleAxis::Xy | ScaleAxis::Y) {
            let stored = obj.scale_y() * multiplier;
            obj.set_rendered_scale_y(stored * flip_sign(obj.is_flip_y()));
            obj.set_scale_y(stored);
        }
        objects += 1;
    }

    editor.update_buttons();
    editor.update_delete_buttons();
    editor.update_object_info_label();

    ApplyOutcome::Batch {
        multiplier,
        objects,
    }
}

fn flip_sign(flipped: bool) -> f32 {
    if flipped {
        -1.0
    } else {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sandbox::{EditorEvent, SandboxEditor, SandboxObject, SandboxScaleWidget};

    fn native() -> ScaleApplier {
        ScaleApplier::from_scale_hack(false)
    }

    fn batch() -> ScaleApplier {
        ScaleApplier::from_scale_hack(true)
    }

    #[test]
    fn test_native_xy_keeps_aspect_ratio() {
        let mut editor = SandboxEditor::new();
        let mut widget = SandboxScaleWidget::new();
        widget.load(2.0, 4.0);

        let outcome = native().apply_scale(6.0, ScaleAxis::Xy, &mut editor, &mut widget);

        assert_eq!(
            outcome,
            ApplyOutcome::Native {
                value_x: 3.0,
                value_y: 6.0
            }
        );
        assert_eq!(
            editor.events(),
            &[EditorEvent::ScaleXyChanged {
                x: 3.0,
                y: 6.0,
                locked: false
            }]
        );
        assert_eq!(widget.sliders[0], 1.0);
    }

    #[test]
    fn test_native_zero_is_one() {
        let mut editor_a = SandboxEditor::new();
        let mut widget_a = SandboxScaleWidget::new();
        widget_a.load(1.0, 2.0);
        let zero = native().apply_scale(0.0, ScaleAxis::Xy, &mut editor_a, &mut widget_a);

        let mut editor_b = SandboxEditor::new();
        let mut widget_b = SandboxScaleWidget::new();
        widget_b.load(1.0, 2.0);
        let one = native().apply_scale(1.0, ScaleAxis::Xy, &mut editor_b, &mut widget_b);

        assert_eq!(zero, one);
        assert_eq!(editor_a.events(), editor_b.events());
        assert_eq!(widget_a, widget_b);
    }

    #[test]
    fn test_native_xy_with_zero_state() {
        let mut editor = SandboxEditor::new();
        let mut widget = SandboxScaleWidget::new();
        widget.load(0.0, 0.0);

        let outcome = native().apply_scale(2.0, ScaleAxis::Xy, &mut editor, &mut widget);
        assert_eq!(
            outcome,
            ApplyOutcome::Native {
                value_x: 0.0,
                value_y: 0.0
            }
        );
    }

    #[test]
    fn test_native_single_axis() {
        let mut editor = SandboxEditor::new();
        let mut widget = SandboxScaleWidget::new();
        widget.load(1.0, 1.0);
        widget.locked = true;

        native().apply_scale(1.25, ScaleAxis::X, &mut editor, &mut widget);
        assert_eq!(widget.value_x, 1.25);
        assert_eq!(widget.value_y, 1.0);
        assert_eq!(widget.sliders[1], 0.5);

        native().apply_scale(2.0, ScaleAxis::Y, &mut editor, &mut widget);
        assert_eq!(widget.value_y, 2.0);
        assert_eq!(
            editor.events(),
            &[
                EditorEvent::ScaleXChanged {
                    x: 1.25,
                    locked: true
                },
                EditorEvent::ScaleYChanged { y: 2.0, locked: true },
            ]
        );
    }

    #[test]
    fn test_batch_single_object_x() {
        let mut editor = SandboxEditor::new();
        let id = editor.add_object(
            SandboxObject::new(0, Vec2::new(3.0, 7.0), Vec2::splat(4.0)).with_scale(2.0, 1.5),
        );
        editor.select(&[id]);
        let mut widget = SandboxScaleWidget::new();

        let outcome = batch().apply_scale(3.0, ScaleAxis::X, &mut editor, &mut widget);

        assert_eq!(
            outcome,
            ApplyOutcome::Batch {
                multiplier: 1.5,
                objects: 1
            }
        );
        let obj = editor.get(id).unwrap();
        assert_eq!(obj.position, Vec2::new(3.0, 7.0));
        assert_eq!(obj.scale_x, 3.0);
        assert_eq!(obj.scale_y, 1.5);
        assert_eq!(obj.rendered_scale_x, 3.0);
        assert_eq!(widget, SandboxScaleWidget::new());
    }

    #[test]
    fn test_batch_preserves_flip() {
        let mut editor = SandboxEditor::new();
        let id = editor.add_object(
            SandboxObject::new(0, Vec2::ZERO, Vec2::ONE)
                .with_scale(1.0, 1.0)
                .with_flip(true, false),
        );
        editor.select(&[id]);
        let mut widget = SandboxScaleWidget::new();

        batch().apply_scale(2.0, ScaleAxis::Xy, &mut editor, &mut widget);

        let obj = editor.get(id).unwrap();
        assert_eq!(obj.scale_x, 2.0);
        assert_eq!(obj.rendered_scale_x, -2.0);
        assert_eq!(obj.rendered_scale_y, 2.0);
    }

    #[test]
    fn test_batch_spreads_group_around_pivot() {
        let mut editor = SandboxEditor::new();
        let a = editor.add_object(SandboxObject::new(0, Vec2::new(-10.0, 0.0), Vec2::splat(2.0)));
        let b = editor.add_object(
            SandboxObject::new(0, Vec2::new(10.0, 0.0), Vec2::splat(2.0)).with_scale(2.0, 2.0),
        );
        editor.select_all();
        let mut widget = SandboxScaleWidget::new();

        let outcome = batch().apply_scale(4.0, ScaleAxis::Xy, &mut editor, &mut widget);

        assert_eq!(
            outcome,
            ApplyOutcome::Batch {
                multiplier: 2.0,
                objects: 2
            }
        );
        // Bounds span -11..12 on X, so the pivot sits at 0.5.
        assert_eq!(editor.get(a).unwrap().position, Vec2::new(-20.5, 0.0));
        assert_eq!(editor.get(b).unwrap().position, Vec2::new(19.5, 0.0));
        assert_eq!(editor.get(a).unwrap().scale_x, 2.0);
        assert_eq!(editor.get(b).unwrap().scale_x, 4.0);
    }

    #[test]
    fn test_batch_locked_keeps_positions() {
        let mut editor = SandboxEditor::new();
        let a = editor.add_object(SandboxObject::new(0, Vec2::new(-4.0, 2.0), Vec2::ONE));
        let b = editor.add_object(SandboxObject::new(0, Vec2::new(4.0, -2.0), Vec2::ONE));
        editor.select_all();
        let mut widget = SandboxScaleWidget::new();
        widget.locked = true;

        batch().apply_scale(3.0, ScaleAxis::Y, &mut editor, &mut widget);

        assert_eq!(editor.get(a).unwrap().position, Vec2::new(-4.0, 2.0));
        assert_eq!(editor.get(b).unwrap().position, Vec2::new(4.0, -2.0));
        assert_eq!(editor.get(a).unwrap().scale_y, 3.0);
        assert_eq!(editor.get(a).unwrap().scale_x, 1.0);
    }

    #[test]
    fn test_batch_y_only_moves_y() {
        let mut editor = SandboxEditor::new();
        let a = editor.add_object(SandboxObject::new(0, Vec2::new(-4.0, 2.0), Vec2::ONE));
        let b = editor.add_object(SandboxObject::new(0, Vec2::new(4.0, -2.0), Vec2::ONE));
        editor.select_all();
        let mut widget = SandboxScaleWidget::new();

        batch().apply_scale(2.0, ScaleAxis::Y, &mut editor, &mut widget);

        assert_eq!(editor.get(a).unwrap().position, Vec2::new(-4.0, 4.0));
        assert_eq!(editor.get(b).unwrap().position, Vec2::new(4.0, -4.0));
    }

    #[test]
    fn test_batch_y_preserves_flip_in_group() {
        let mut editor = SandboxEditor::new();
        let a = editor.add_object(
            SandboxObject::new(0, Vec2::ZERO, Vec2::splat(2.0))
                .with_scale(2.0, 2.0)
                .with_flip(false, true),
        );
        let b = editor.add_object(
            SandboxObject::new(0, Vec2::new(4.0, 4.0), Vec2::splat(2.0))
                .with_scale(3.0, 1.0)
                .with_flip(false, true),
        );
        editor.select_all();
        let mut widget = SandboxScaleWidget::new();

        let outcome = batch().apply_scale(4.0, ScaleAxis::Y, &mut editor, &mut widget);

        assert_eq!(
            outcome,
            ApplyOutcome::Batch {
                multiplier: 2.0,
                objects: 2
            }
        );

        // Bounds span -2..7 by -2..5, so the pivot sits at (2.5, 1.5).
        let obj_a = editor.get(a).unwrap();
        assert_eq!(obj_a.position, Vec2::new(0.0, -1.5));
        assert_eq!(obj_a.scale_y, 4.0);
        assert_eq!(obj_a.rendered_scale_y, -4.0);
        assert_eq!(obj_a.scale_x, 2.0);
        assert_eq!(obj_a.rendered_scale_x, 2.0);

        let obj_b = editor.get(b).unwrap();
        assert_eq!(obj_b.position, Vec2::new(4.0, 6.5));
        assert_eq!(obj_b.scale_y, 2.0);
        assert_eq!(obj_b.rendered_scale_y, -2.0);
    }

    #[test]
    fn test_batch_zero_is_one() {
        let mut editor = SandboxEditor::new();
        let id = editor.add_object(SandboxObject::new(0, Vec2::ZERO, Vec2::ONE).with_scale(2.0, 2.0));
        editor.select(&[id]);
        let mut widget = SandboxScaleWidget::new();

        let outcome = batch().apply_scale(0.0, ScaleAxis::Xy, &mut editor, &mut widget);

        assert_eq!(
            outcome,
            ApplyOutcome::Batch {
                multiplier: 0.5,
                objects: 1
            }
        );
        assert_eq!(editor.get(id).unwrap().scale_x, 1.0);
    }

    #[test]
    fn test_batch_empty_selection_still_refreshes() {
        let mut editor = SandboxEditor::new();
        editor.add_object(SandboxObject::new(0, Vec2::ZERO, Vec2::ONE));
        let mut widget = SandboxScaleWidget::new();

        let outcome = batch().apply_scale(2.0, ScaleAxis::X, &mut editor, &mut widget);

        assert!(matches!(outcome, ApplyOutcome::Batch { objects: 0, .. }));
        assert_eq!(
            editor.events(),
            &[
                EditorEvent::ButtonsUpdated,
                EditorEvent::DeleteButtonsUpdated,
                EditorEvent::ObjectInfoUpdated,
            ]
        );
    }
}
