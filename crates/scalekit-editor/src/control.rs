//! The scale control
//!
//! [`ScaleControl`] wires the pieces together and exposes one entry point per
//! host callback. It owns the widgets it created and borrows the editor and
//! the host scale widget for the duration of each call.

use crate::applier::{ApplyOutcome, ScaleApplier};
use crate::host::{ButtonId, EditorHost, ScaleWidget, UiNode, WidgetFactory};
use crate::shortcuts::ShortcutRegistry;
use crate::sync::{DisplayMirror, DragTracker};
use crate::visibility::{Element, LayoutPlan, VisibilityController};
use scalekit_core::{parse_scale_input, AxisScope, ScaleAxis};
use scalekit_settings::ScaleSettings;
use tracing::debug;

type Node = dyn UiNode + 'static;

/// Scale control extension attached to one host scale widget
#[derive(Debug)]
pub struct ScaleControl {
    settings: ScaleSettings,
    applier: ScaleApplier,
    mirror: DisplayMirror,
    shortcuts: ShortcutRegistry,
    visibility: VisibilityController,
    drag: DragTracker,
}

impl ScaleControl {
    /// Build the added widgets for `settings`
    ///
    /// Hides the host's own scale labels when text inputs replace them.
    pub fn new(
        settings: ScaleSettings,
        factory: &mut dyn WidgetFactory,
        widget: &mut dyn ScaleWidget,
    ) -> Self {
        let mirror = DisplayMirror::build(&settings, factory);
        if mirror.is_enabled() {
            widget.hide_native_labels();
        }
        let shortcuts = ShortcutRegistry::build(&settings, factory);
        let visibility = VisibilityController::from_settings(&settings, shortcuts.alignment());

        debug!(
            inputs = mirror.is_enabled(),
            shortcuts = shortcuts.len(),
            scale_hack = settings.scale_hack,
            "Scale control ready"
        );

        Self {
            applier: ScaleApplier::from_scale_hack(settings.scale_hack),
            settings,
            mirror,
            shortcuts,
            visibility,
            drag: DragTracker::new(),
        }
    }

    pub fn settings(&self) -> &ScaleSettings {
        &self.settings
    }

    pub fn applier(&self) -> ScaleApplier {
        self.applier
    }

    pub fn shortcuts(&self) -> &ShortcutRegistry {
        &self.shortcuts
    }

    /// Text committed in the input for `axis`
    ///
    /// Input without digits, or without a leading number, is dropped. The
    /// inputs are left as typed.
    pub fn on_text_committed(
        &mut self,
        axis: ScaleAxis,
        text: &str,
        editor: &mut dyn EditorHost,
        widget: &mut dyn ScaleWidget,
    ) -> Option<ApplyOutcome> {
        match parse_scale_input(text) {
            Ok(value) => Some(self.apply_scale(value, axis, editor, widget)),
            Err(err) => {
                debug!(%axis, text, %err, "Dropped scale input");
                None
            }
        }
    }

    /// Shortcut button pressed
    ///
    /// Buttons the control did not create are ignored.
    pub fn on_shortcut_pressed(
        &mut self,
        button: ButtonId,
        editor: &mut dyn EditorHost,
        widget: &mut dyn ScaleWidget,
    ) -> Option<ApplyOutcome> {
        let binding = self.shortcuts.binding(button)?;
        let outcome = self.apply_scale(binding.value, binding.scope, editor, widget);
        self.sync_displays(binding.value, binding.value, binding.scope.into());
        Some(outcome)
    }

    /// Slider moved during a drag
    pub fn on_touch_moved(&mut self, widget: &dyn ScaleWidget) -> usize {
        self.drag.track(widget, &mut self.mirror)
    }

    /// Host loaded new values, e.g. after the selection changed
    pub fn on_values_loaded(&mut self, widget: &mut dyn ScaleWidget) {
        if self.settings.scale_input_enabled {
            self.sync_displays(widget.value_x(), widget.value_y(), AxisScope::All);
        }
        if self.settings.scale_input_enabled || self.settings.shortcuts_enabled {
            self.update_visibility(widget);
        }
    }

    pub fn apply_scale(
        &self,
        requested: f32,
        axis: ScaleAxis,
        editor: &mut dyn EditorHost,
        widget: &mut dyn ScaleWidget,
    ) -> ApplyOutcome {
        self.applier.apply_scale(requested, axis, editor, widget)
    }

    pub fn sync_displays(&mut self, scale_x: f32, scale_y: f32, scope: AxisScope) {
        self.mirror.sync_displays(scale_x, scale_y, scope);
    }

    /// Re-derive the layout and apply it to the existing widgets
    pub fn update_visibility(&mut self, widget: &mut dyn ScaleWidget) -> LayoutPlan {
        let plan = self.visibility.plan(widget.is_linked_label_visible());

        for (element, layout) in plan.iter() {
            let Some(node) = self.node_mut(element) else {
                continue;
            };
            node.set_visible(layout.visible);
            if let Some(position) = layout.position {
                node.set_position(position);
            }
        }

        if let Some(anchor) = plan.lock_anchor {
            widget.set_lock_anchor_position(anchor);
        }
        if let Some(position) = plan.slider_y {
            widget.set_slider_y_position(position);
        }
        plan
    }

    fn node_mut(&mut self, element: Element) -> Option<&mut Node> {
        let mirror = &mut self.mirror;
        let shortcuts = &mut self.shortcuts;
        match element {
            Element::DefaultLabel => mirror.default_label.as_deref_mut(),
            Element::XLabel => mirror.x_label.as_deref_mut(),
            Element::YLabel => mirror.y_label.as_deref_mut(),
            Element::DefaultInput => mirror.default_input.as_deref_mut().map(|n| n as &mut Node),
            Element::XInput => mirror.x_input.as_deref_mut().map(|n| n as &mut Node),
            Element::YInput => mirror.y_input.as_deref_mut().map(|n| n as &mut Node),
            Element::DefaultRow => shortcuts.menu_mut(ScaleAxis::Xy).map(|n| n as &mut Node),
            Element::XRow => shortcuts.menu_mut(ScaleAxis::X).map(|n| n as &mut Node),
            Element::YRow => shortcuts.menu_mut(ScaleAxis::Y).map(|n| n as &mut Node),
        }
    }
}
