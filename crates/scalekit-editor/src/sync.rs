//! Display synchronization
//!
//! Keeps the text inputs in step with the authoritative scale state held by
//! the host widget, both after explicit applies and while a slider is being
//! dragged.

use crate::host::{ScaleWidget, TextInput, UiNode, WidgetFactory};
use crate::widgets::{LabelSpec, TextInputSpec};
use scalekit_core::{format_scale, AxisScope, ScaleAxis};
use scalekit_settings::ScaleSettings;
use tracing::trace;

/// Text inputs and captions mirroring the scale state
///
/// Every slot is optional: with inputs disabled nothing is created and all
/// updates are no-ops.
pub struct DisplayMirror {
    rounding: i32,
    pub(crate) default_input: Option<Box<dyn TextInput>>,
    pub(crate) x_input: Option<Box<dyn TextInput>>,
    pub(crate) y_input: Option<Box<dyn TextInput>>,
    pub(crate) default_label: Option<Box<dyn UiNode>>,
    pub(crate) x_label: Option<Box<dyn UiNode>>,
    pub(crate) y_label: Option<Box<dyn UiNode>>,
}

impl std::fmt::Debug for DisplayMirror {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DisplayMirror")
            .field("rounding", &self.rounding)
            .field("enabled", &self.is_enabled())
            .finish()
    }
}

impl DisplayMirror {
    /// Mirror without any widgets
    pub fn disabled(rounding: i32) -> Self {
        Self {
            rounding,
            default_input: None,
            x_input: None,
            y_input: None,
            default_label: None,
            x_label: None,
            y_label: None,
        }
    }

    /// Create inputs and captions if `scale-input-enabled` is set
    pub fn build(settings: &ScaleSettings, factory: &mut dyn WidgetFactory) -> Self {
        let mut mirror = Self::disabled(settings.rounding());
        if !settings.scale_input_enabled {
            return mirror;
        }

        let max_characters = settings.max_characters.max(1) as usize;
        let mut input =
            |axis| factory.create_text_input(&TextInputSpec::for_axis(axis, max_characters));
        mirror.default_input = Some(input(ScaleAxis::Xy));
        mirror.x_input = Some(input(ScaleAxis::X));
        mirror.y_input = Some(input(ScaleAxis::Y));

        mirror.default_label = Some(factory.create_label(&LabelSpec::for_axis(ScaleAxis::Xy)));
        mirror.x_label = Some(factory.create_label(&LabelSpec::for_axis(ScaleAxis::X)));
        mirror.y_label = Some(factory.create_label(&LabelSpec::for_axis(ScaleAxis::Y)));
        mirror
    }

    pub fn is_enabled(&self) -> bool {
        self.default_input.is_some() || self.x_input.is_some() || self.y_input.is_some()
    }

    pub fn rounding(&self) -> i32 {
        self.rounding
    }

    /// Write the scale pair into the inputs selected by `scope`
    ///
    /// The default input shows the larger of the two values.
    pub fn sync_displays(&mut self, scale_x: f32, scale_y: f32, scope: AxisScope) {
        if scope.includes_xy() {
            if let Some(input) = self.default_input.as_mut() {
                input.set_text(&format_scale(scale_x.max(scale_y), self.rounding));
            }
        }
        if scope.includes_x() {
            if let Some(input) = self.x_input.as_mut() {
                input.set_text(&format_scale(scale_x, self.rounding));
            }
        }
        if scope.includes_y() {
            if let Some(input) = self.y_input.as_mut() {
                input.set_text(&format_scale(scale_y, self.rounding));
            }
        }
    }
}

/// Tracks slider positions across one drag gesture
///
/// Each touch-move compares the linked, X and Y slider positions with the
/// previous sample and refreshes only the inputs whose slider moved.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DragTracker {
    last_xy: f32,
    last_x: f32,
    last_y: f32,
}

impl DragTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sample the sliders and return the axes that moved, in slider order
    ///
    /// All three samples are replaced regardless of which moved.
    pub fn sample(&mut self, widget: &dyn ScaleWidget) -> Vec<ScaleAxis> {
        let current = [
            widget.slider_value(ScaleAxis::Xy),
            widget.slider_value(ScaleAxis::X),
            widget.slider_value(ScaleAxis::Y),
        ];
        let previous = [self.last_xy, self.last_x, self.last_y];

        let moved: Vec<ScaleAxis> = ScaleAxis::ALL
            .iter()
            .zip(current.iter().zip(previous.iter()))
            .filter(|(_, (now, before))| now != before)
            .map(|(axis, _)| *axis)
            .collect();

        [self.last_xy, self.last_x, self.last_y] = current;
        moved
    }

    /// Sample the sliders and refresh the inputs of every moved axis
    ///
    /// Uses the widget's live drag values rather than its committed state.
    pub fn track(&mut self, widget: &dyn ScaleWidget, mirror: &mut DisplayMirror) -> usize {
        let moved = self.sample(widget);
        for &axis in &moved {
            trace!(%axis, "Slider moved");
            mirror.sync_displays(widget.changed_value_x(), widget.changed_value_y(), axis.into());
        }
        moved.len()
    }

    /// Last samples in (linked, X, Y) order
    pub fn last_samples(&self) -> [f32; 3] {
        [self.last_xy, self.last_x, self.last_y]
    }
}
