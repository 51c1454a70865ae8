//! Scale control integration tests against the sandbox host

use glam::Vec2;
use scalekit_core::ScaleAxis;
use scalekit_editor::{
    ApplyOutcome, EditorEvent, SandboxEditor, SandboxObject, SandboxScaleWidget, SandboxWidgets,
    ScaleControl, ScaleMode,
};
use scalekit_settings::ScaleSettings;

type Scene = (ScaleControl, SandboxWidgets, SandboxScaleWidget, SandboxEditor);

fn scene(settings: ScaleSettings) -> Scene {
    let mut widgets = SandboxWidgets::new();
    let mut widget = SandboxScaleWidget::new();
    let control = ScaleControl::new(settings, &mut widgets, &mut widget);

    let mut editor = SandboxEditor::new();
    editor.add_object(SandboxObject::new(0, Vec2::new(0.0, 0.0), Vec2::splat(2.0)));
    editor.add_object(SandboxObject::new(0, Vec2::new(10.0, 0.0), Vec2::splat(2.0)));
    editor.select_all();

    (control, widgets, widget, editor)
}

#[test]
fn test_native_text_workflow() {
    let (mut control, widgets, mut widget, mut editor) = scene(ScaleSettings::default());
    assert_eq!(control.applier().mode(), ScaleMode::Native);

    widget.load(2.0, 4.0);
    control.on_values_loaded(&mut widget);
    assert_eq!(widgets.state("scale-default-input").unwrap().text, "4");

    // Linked commit keeps the aspect ratio
    let outcome = control.on_text_committed(ScaleAxis::Xy, "6", &mut editor, &mut widget);
    assert_eq!(
        outcome,
        Some(ApplyOutcome::Native {
            value_x: 3.0,
            value_y: 6.0
        })
    );
    assert_eq!(
        editor.events(),
        &[EditorEvent::ScaleXyChanged {
            x: 3.0,
            y: 6.0,
            locked: false
        }]
    );

    // Committing text does not rewrite the inputs
    assert_eq!(widgets.state("scale-default-input").unwrap().text, "4");

    // Objects are left to the host in native mode
    assert_eq!(editor.get(1).unwrap().scale_x, 1.0);
}

#[test]
fn test_native_zero_means_one() {
    let (mut control, _widgets, mut widget, mut editor) = scene(ScaleSettings::default());
    widget.load(2.0, 4.0);

    control.on_text_committed(ScaleAxis::Xy, "0", &mut editor, &mut widget);
    let zero = (widget.value_x, widget.value_y);

    widget.load(2.0, 4.0);
    control.on_text_committed(ScaleAxis::Xy, "1", &mut editor, &mut widget);
    assert_eq!(zero, (widget.value_x, widget.value_y));
    assert_eq!(zero, (0.5, 1.0));
}

#[test]
fn test_batch_group_workflow() {
    let settings = ScaleSettings {
        scale_hack: true,
        ..Default::default()
    };
    let (mut control, _widgets, mut widget, mut editor) = scene(settings);
    assert_eq!(control.applier().mode(), ScaleMode::ObjectBatch);

    let outcome = control.on_text_committed(ScaleAxis::Xy, "2", &mut editor, &mut widget);
    assert_eq!(
        outcome,
        Some(ApplyOutcome::Batch {
            multiplier: 2.0,
            objects: 2
        })
    );
    assert_eq!(editor.get(1).unwrap().position, Vec2::new(-5.0, 0.0));
    assert_eq!(editor.get(2).unwrap().position, Vec2::new(15.0, 0.0));
    assert_eq!(editor.get(2).unwrap().scale_y, 2.0);

    // The group keeps its pivot on a second apply
    let outcome = control.on_text_committed(ScaleAxis::X, "3", &mut editor, &mut widget);
    assert_eq!(
        outcome,
        Some(ApplyOutcome::Batch {
            multiplier: 1.5,
            objects: 2
        })
    );
    assert_eq!(editor.get(1).unwrap().position, Vec2::new(-10.0, 0.0));
    assert_eq!(editor.get(2).unwrap().position, Vec2::new(20.0, 0.0));
    assert_eq!(editor.get(1).unwrap().scale_x, 3.0);
    assert_eq!(editor.get(1).unwrap().scale_y, 2.0);

    // Host scale state is untouched in batch mode
    assert_eq!((widget.value_x, widget.value_y), (1.0, 1.0));
    assert!(!editor.events().iter().any(|e| matches!(
        e,
        EditorEvent::ScaleXyChanged { .. } | EditorEvent::ScaleXChanged { .. }
    )));
}

#[test]
fn test_batch_shortcut_respects_lock() {
    let settings = ScaleSettings {
        scale_hack: true,
        ..Default::default()
    };
    let (mut control, widgets, mut widget, mut editor) = scene(settings);
    widget.locked = true;

    let row = widgets.state("default-shortcuts-menu").unwrap();
    let (button, id, label) = row.buttons[4].clone();
    assert_eq!((id.as_str(), label.as_str()), ("shortcut-5", "3"));

    control.on_shortcut_pressed(button, &mut editor, &mut widget);

    assert_eq!(editor.get(1).unwrap().position, Vec2::new(0.0, 0.0));
    assert_eq!(editor.get(2).unwrap().position, Vec2::new(10.0, 0.0));
    assert_eq!(editor.get(2).unwrap().scale_x, 3.0);
    assert_eq!(widgets.state("scale-default-input").unwrap().text, "3");
    assert_eq!(
        &editor.events()[editor.events().len() - 3..],
        &[
            EditorEvent::ButtonsUpdated,
            EditorEvent::DeleteButtonsUpdated,
            EditorEvent::ObjectInfoUpdated,
        ]
    );
}

#[test]
fn test_selection_is_fetched_per_apply() {
    let settings = ScaleSettings {
        scale_hack: true,
        ..Default::default()
    };
    let (mut control, _widgets, mut widget, mut editor) = scene(settings);

    editor.select(&[2]);
    control.on_text_committed(ScaleAxis::Y, "0.5", &mut editor, &mut widget);

    assert_eq!(editor.get(1).unwrap().scale_y, 1.0);
    assert_eq!(editor.get(2).unwrap().scale_y, 0.5);
    assert_eq!(editor.get(2).unwrap().position, Vec2::new(10.0, 0.0));
}

#[test]
fn test_disabled_features_create_no_widgets() {
    let settings = ScaleSettings {
        scale_input_enabled: false,
        shortcuts_enabled: false,
        ..Default::default()
    };
    let (mut control, widgets, mut widget, mut editor) = scene(settings);

    assert_eq!(widgets.ids().count(), 0);
    assert!(control.shortcuts().is_empty());

    // Text commits still apply even without visible inputs
    let outcome = control.on_text_committed(ScaleAxis::X, "1.25", &mut editor, &mut widget);
    assert!(outcome.is_some());
    control.on_values_loaded(&mut widget);
}
