//! In-memory host
//!
//! A small editor, scale widget and widget factory implementing the host
//! traits without any real UI. Used by the command-line driver and by tests,
//! which keep [`Shared`] handles to the created widgets to observe what the
//! scale control did to them.

use crate::host::{
    ButtonId, EditorHost, ObjectId, ScalableObject, ScaleWidget, ShortcutMenu, TextInput, UiNode,
    WidgetFactory,
};
use crate::widgets::{LabelSpec, MenuSpec, TextInputSpec};
use glam::Vec2;
use scalekit_core::{shared, ScaleAxis, Shared};
use std::collections::BTreeMap;

/// Object in the sandbox editor
#[derive(Debug, Clone, PartialEq)]
pub struct SandboxObject {
    pub id: ObjectId,
    pub position: Vec2,
    /// Unscaled size, used for bounds
    pub size: Vec2,
    pub scale_x: f32,
    pub scale_y: f32,
    pub flip_x: bool,
    pub flip_y: bool,
    pub rendered_scale_x: f32,
    pub rendered_scale_y: f32,
}

impl SandboxObject {
    pub fn new(id: ObjectId, position: Vec2, size: Vec2) -> Self {
        Self {
            id,
            position,
            size,
            scale_x: 1.0,
            scale_y: 1.0,
            flip_x: false,
            flip_y: false,
            rendered_scale_x: 1.0,
            rendered_scale_y: 1.0,
        }
    }

    pub fn with_scale(mut self, scale_x: f32, scale_y: f32) -> Self {
        self.scale_x = scale_x;
        self.scale_y = scale_y;
        self.sync_rendered();
        self
    }

    pub fn with_flip(mut self, flip_x: bool, flip_y: bool) -> Self {
        self.flip_x = flip_x;
        self.flip_y = flip_y;
        self.sync_rendered();
        self
    }

    fn sync_rendered(&mut self) {
        self.rendered_scale_x = if self.flip_x { -self.scale_x } else { self.scale_x };
        self.rendered_scale_y = if self.flip_y { -self.scale_y } else { self.scale_y };
    }

    /// Axis-aligned bounds as (min, max)
    pub fn bounds(&self) -> (Vec2, Vec2) {
        let half = Vec2::new(
            self.size.x * self.scale_x.abs(),
            self.size.y * self.scale_y.abs(),
        ) / 2.0;
        (self.position - half, self.position + half)
    }
}

impl ScalableObject for SandboxObject {
    fn position(&self) -> Vec2 {
        self.position
    }

    fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    fn scale_x(&self) -> f32 {
        self.scale_x
    }

    fn scale_y(&self) -> f32 {
        self.scale_y
    }

    fn set_scale_x(&mut self, scale: f32) {
        self.scale_x = scale;
    }

    fn set_scale_y(&mut self, scale: f32) {
        self.scale_y = scale;
    }

    fn is_flip_x(&self) -> bool {
        self.flip_x
    }

    fn is_flip_y(&self) -> bool {
        self.flip_y
    }

    fn set_rendered_scale_x(&mut self, scale: f32) {
        self.rendered_scale_x = scale;
    }

    fn set_rendered_scale_y(&mut self, scale: f32) {
        self.rendered_scale_y = scale;
    }
}

/// Call the scale control made into the sandbox editor
#[derive(Debug, Clone, PartialEq)]
pub enum EditorEvent {
    ScaleXyChanged { x: f32, y: f32, locked: bool },
    ScaleXChanged { x: f32, locked: bool },
    ScaleYChanged { y: f32, locked: bool },
    ButtonsUpdated,
    DeleteButtonsUpdated,
    ObjectInfoUpdated,
}

/// Sandbox editor holding objects and a selection
#[derive(Debug, Clone, Default)]
pub struct SandboxEditor {
    objects: BTreeMap<ObjectId, SandboxObject>,
    selection: Vec<ObjectId>,
    next_id: ObjectId,
    events: Vec<EditorEvent>,
}

impl SandboxEditor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an object, assigning it a fresh id
    pub fn add_object(&mut self, mut object: SandboxObject) -> ObjectId {
        self.next_id += 1;
        object.id = self.next_id;
        self.objects.insert(object.id, object);
        self.next_id
    }

    /// Replace the selection; unknown ids are skipped
    pub fn select(&mut self, ids: &[ObjectId]) {
        self.selection = ids
            .iter()
            .copied()
            .filter(|id| self.objects.contains_key(id))
            .collect();
    }

    pub fn select_all(&mut self) {
        self.selection = self.objects.keys().copied().collect();
    }

    pub fn get(&self, id: ObjectId) -> Option<&SandboxObject> {
        self.objects.get(&id)
    }

    pub fn objects(&self) -> impl Iterator<Item = &SandboxObject> {
        self.objects.values()
    }

    pub fn selection(&self) -> &[ObjectId] {
        &self.selection
    }

    pub fn events(&self) -> &[EditorEvent] {
        &self.events
    }
}

impl EditorHost for SandboxEditor {
    fn scale_xy_changed(&mut self, x: f32, y: f32, locked: bool) {
        self.events.push(EditorEvent::ScaleXyChanged { x, y, locked });
    }

    fn scale_x_changed(&mut self, x: f32, locked: bool) {
        self.events.push(EditorEvent::ScaleXChanged { x, locked });
    }

    fn scale_y_changed(&mut self, y: f32, locked: bool) {
        self.events.push(EditorEvent::ScaleYChanged { y, locked });
    }

    fn selected_objects(&self) -> Vec<ObjectId> {
        self.selection.clone()
    }

    fn group_center(&self, selection: &[ObjectId], use_bounds_center: bool) -> Vec2 {
        let objects: Vec<&SandboxObject> = selection
            .iter()
            .filter_map(|id| self.objects.get(id))
            .collect();
        if objects.is_empty() {
            return Vec2::ZERO;
        }

        if use_bounds_center {
            let mut min = Vec2::splat(f32::INFINITY);
            let mut max = Vec2::splat(f32::NEG_INFINITY);
            for obj in &objects {
                let (lo, hi) = obj.bounds();
                min = min.min(lo);
                max = max.max(hi);
            }
            (min + max) / 2.0
        } else {
            let sum: Vec2 = objects.iter().map(|o| o.position).sum();
            sum / objects.len() as f32
        }
    }

    fn object(&self, id: ObjectId) -> Option<&dyn ScalableObject> {
        self.objects.get(&id).map(|o| o as &dyn ScalableObject)
    }

    fn object_mut(&mut self, id: ObjectId) -> Option<&mut dyn ScalableObject> {
        self.objects
            .get_mut(&id)
            .map(|o| o as &mut dyn ScalableObject)
    }

    fn update_buttons(&mut self) {
        self.events.push(EditorEvent::ButtonsUpdated);
    }

    fn update_delete_buttons(&mut self) {
        self.events.push(EditorEvent::DeleteButtonsUpdated);
    }

    fn update_object_info_label(&mut self) {
        self.events.push(EditorEvent::ObjectInfoUpdated);
    }
}

/// Slider range of the sandbox scale widget
pub const SANDBOX_MIN_SCALE: f32 = 0.5;
pub const SANDBOX_MAX_SCALE: f32 = 2.0;

/// Sandbox scale widget
#[derive(Debug, Clone, PartialEq)]
pub struct SandboxScaleWidget {
    pub value_x: f32,
    pub value_y: f32,
    pub changed_value_x: f32,
    pub changed_value_y: f32,
    pub locked: bool,
    /// Slider positions in (linked, X, Y) order
    pub sliders: [f32; 3],
    pub linked_label_visible: bool,
    pub lock_anchor: Option<Vec2>,
    pub slider_y_position: Option<Vec2>,
    pub native_labels_hidden: bool,
}

impl Default for SandboxScaleWidget {
    fn default() -> Self {
        Self {
            value_x: 1.0,
            value_y: 1.0,
            changed_value_x: 1.0,
            changed_value_y: 1.0,
            locked: false,
            sliders: [0.0; 3],
            linked_label_visible: true,
            lock_anchor: None,
            slider_y_position: None,
            native_labels_hidden: false,
        }
    }
}

impl SandboxScaleWidget {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load new scale values, as the host does when the selection changes
    pub fn load(&mut self, value_x: f32, value_y: f32) {
        self.value_x = value_x;
        self.value_y = value_y;
        self.changed_value_x = value_x;
        self.changed_value_y = value_y;
        let linked = self.value_from_scale(value_x.max(value_y));
        self.sliders = [
            linked,
            self.value_from_scale(value_x),
            self.value_from_scale(value_y),
        ];
    }

    /// Move one slider to `scale`, as a drag gesture would
    pub fn drag(&mut self, slider: ScaleAxis, scale: f32) {
        let position = self.value_from_scale(scale);
        self.set_slider_value(slider, position);
        match slider {
            ScaleAxis::Xy => {
                self.changed_value_x = scale;
                self.changed_value_y = scale;
            }
            ScaleAxis::X => self.changed_value_x = scale,
            ScaleAxis::Y => self.changed_value_y = scale,
        }
    }

    fn slider_index(slider: ScaleAxis) -> usize {
        match slider {
            ScaleAxis::Xy => 0,
            ScaleAxis::X => 1,
            ScaleAxis::Y => 2,
        }
    }
}

impl ScaleWidget for SandboxScaleWidget {
    fn value_x(&self) -> f32 {
        self.value_x
    }

    fn value_y(&self) -> f32 {
        self.value_y
    }

    fn set_value_x(&mut self, value: f32) {
        self.value_x = value;
    }

    fn set_value_y(&mut self, value: f32) {
        self.value_y = value;
    }

    fn changed_value_x(&self) -> f32 {
        self.changed_value_x
    }

    fn changed_value_y(&self) -> f32 {
        self.changed_value_y
    }

    fn is_scale_locked(&self) -> bool {
        self.locked
    }

    fn slider_value(&self, slider: ScaleAxis) -> f32 {
        self.sliders[Self::slider_index(slider)]
    }

    fn set_slider_value(&mut self, slider: ScaleAxis, value: f32) {
        self.sliders[Self::slider_index(slider)] = value;
    }

    fn value_from_scale(&self, scale: f32) -> f32 {
        ((scale - SANDBOX_MIN_SCALE) / (SANDBOX_MAX_SCALE - SANDBOX_MIN_SCALE)).clamp(0.0, 1.0)
    }

    fn is_linked_label_visible(&self) -> bool {
        self.linked_label_visible
    }

    fn set_lock_anchor_position(&mut self, position: Vec2) {
        self.lock_anchor = Some(position);
    }

    fn set_slider_y_position(&mut self, position: Vec2) {
        self.slider_y_position = Some(position);
    }

    fn hide_native_labels(&mut self) {
        self.native_labels_hidden = true;
    }
}

/// Observable state of a sandbox widget
#[derive(Debug, Clone, PartialEq)]
pub struct NodeState {
    pub id: String,
    pub visible: bool,
    pub position: Vec2,
    pub text: String,
    /// Placeholder shown while a text input is empty
    pub placeholder: String,
    /// Characters a text input accepts, empty for anything
    pub filter: String,
    pub max_characters: Option<usize>,
    /// Every text written, oldest first
    pub text_history: Vec<String>,
    /// Buttons of a shortcut row as (handle, id, label)
    pub buttons: Vec<(ButtonId, String, String)>,
    pub layout_passes: usize,
}

impl NodeState {
    fn new(id: &str, position: Vec2, text: &str) -> Self {
        Self {
            id: id.to_string(),
            visible: true,
            position,
            text: text.to_string(),
            placeholder: String::new(),
            filter: String::new(),
            max_characters: None,
            text_history: Vec::new(),
            buttons: Vec::new(),
            layout_passes: 0,
        }
    }
}

/// Widget handle backed by a [`NodeState`]
#[derive(Debug, Clone)]
pub struct SandboxNode {
    state: Shared<NodeState>,
    next_button: Shared<u64>,
}

impl UiNode for SandboxNode {
    fn set_visible(&mut self, visible: bool) {
        self.state.borrow_mut().visible = visible;
    }

    fn is_visible(&self) -> bool {
        self.state.borrow().visible
    }

    fn set_position(&mut self, position: Vec2) {
        self.state.borrow_mut().position = position;
    }
}

impl TextInput for SandboxNode {
    fn set_text(&mut self, text: &str) {
        let mut state = self.state.borrow_mut();
        state.text = text.to_string();
        state.text_history.push(text.to_string());
    }
}

impl ShortcutMenu for SandboxNode {
    fn add_button(&mut self, id: &str, label: &str) -> ButtonId {
        let mut counter = self.next_button.borrow_mut();
        *counter += 1;
        let button = ButtonId(*counter);
        self.state
            .borrow_mut()
            .buttons
            .push((button, id.to_string(), label.to_string()));
        button
    }

    fn update_layout(&mut self) {
        self.state.borrow_mut().layout_passes += 1;
    }
}

/// Factory recording every widget it creates, keyed by widget id
#[derive(Debug, Clone, Default)]
pub struct SandboxWidgets {
    nodes: BTreeMap<String, Shared<NodeState>>,
    next_button: Shared<u64>,
}

impl SandboxWidgets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the widget created with `id`
    pub fn state(&self, id: &str) -> Option<NodeState> {
        self.nodes.get(id).map(|n| n.borrow().clone())
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.nodes.keys().map(String::as_str)
    }

    fn register(&mut self, state: NodeState) -> SandboxNode {
        let handle = shared(state);
        let id = handle.borrow().id.clone();
        self.nodes.insert(id, handle.clone());
        SandboxNode {
            state: handle,
            next_button: self.next_button.clone(),
        }
    }
}

impl WidgetFactory for SandboxWidgets {
    fn create_text_input(&mut self, spec: &TextInputSpec) -> Box<dyn TextInput> {
        let mut state = NodeState::new(spec.id, spec.position, "");
        state.placeholder = spec.placeholder.to_string();
        state.filter = spec.filter.to_string();
        state.max_characters = Some(spec.max_characters);
        Box::new(self.register(state))
    }

    fn create_label(&mut self, spec: &LabelSpec) -> Box<dyn UiNode> {
        Box::new(self.register(NodeState::new(spec.id, spec.position, spec.text)))
    }

    fn create_shortcut_menu(&mut self, spec: &MenuSpec) -> Box<dyn ShortcutMenu> {
        Box::new(self.register(NodeState::new(spec.id, Vec2::ZERO, "")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_center_of_group() {
        let mut editor = SandboxEditor::new();
        let a = editor.add_object(SandboxObject::new(0, Vec2::new(0.0, 0.0), Vec2::splat(2.0)));
        let b = editor.add_object(SandboxObject::new(0, Vec2::new(10.0, 4.0), Vec2::splat(2.0)));

        let center = editor.group_center(&[a, b], true);
        assert_eq!(center, Vec2::new(5.0, 2.0));

        let average = editor.group_center(&[a, b], false);
        assert_eq!(average, Vec2::new(5.0, 2.0));
    }

    #[test]
    fn test_bounds_use_scale_magnitude() {
        let obj = SandboxObject::new(1, Vec2::ZERO, Vec2::splat(2.0))
            .with_scale(2.0, 1.0)
            .with_flip(true, false);
        let (min, max) = obj.bounds();
        assert_eq!(min, Vec2::new(-2.0, -1.0));
        assert_eq!(max, Vec2::new(2.0, 1.0));
        assert_eq!(obj.rendered_scale_x, -2.0);
    }

    #[test]
    fn test_select_skips_unknown_ids() {
        let mut editor = SandboxEditor::new();
        let a = editor.add_object(SandboxObject::new(0, Vec2::ZERO, Vec2::ONE));
        editor.select(&[a, 99]);
        assert_eq!(editor.selection(), &[a]);
        assert_eq!(editor.group_center(&[], true), Vec2::ZERO);
    }

    #[test]
    fn test_slider_mapping_is_clamped() {
        let widget = SandboxScaleWidget::new();
        assert_eq!(widget.value_from_scale(0.5), 0.0);
        assert_eq!(widget.value_from_scale(2.0), 1.0);
        assert_eq!(widget.value_from_scale(1.25), 0.5);
        assert_eq!(widget.value_from_scale(10.0), 1.0);
    }

    #[test]
    fn test_factory_keeps_handles() {
        let mut widgets = SandboxWidgets::new();
        let mut input = widgets.create_text_input(&TextInputSpec::for_axis(ScaleAxis::X, 6));
        input.set_text("1.5");
        input.set_visible(false);

        let state = widgets.state("scale-x-input").unwrap();
        assert_eq!(state.text, "1.5");
        assert!(!state.visible);

        let mut menu = widgets.create_shortcut_menu(&MenuSpec::for_axis(ScaleAxis::Xy));
        let first = menu.add_button("shortcut-1", "0.5");
        let second = menu.add_button("shortcut-2", "1");
        assert_ne!(first, second);
        assert_eq!(widgets.state("default-shortcuts-menu").unwrap().buttons.len(), 2);
    }
}
