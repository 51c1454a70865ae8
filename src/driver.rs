//! Command-line session
//!
//! Drives a [`ScaleControl`] attached to the sandbox host from line-based
//! commands, standing in for the editor's touch and keyboard callbacks:
//!
//! ```text
//! xy 1.5          commit text in the linked input
//! x 2 / y 0.5     commit text in the X or Y input
//! press 3 [x]     press the third shortcut of a row (default: linked row)
//! drag y 1.25     move a slider, as one touch-move
//! select 1 3      replace the selection
//! link off        switch the host to the per-axis sliders
//! show            print the current state
//! quit
//! ```

use glam::Vec2;
use scalekit_core::{parse_scale_input, Error, Result, ScaleAxis};
use scalekit_editor::{
    MenuSpec, ObjectId, SandboxEditor, SandboxObject, SandboxScaleWidget, SandboxWidgets,
    ScaleControl, TextInputSpec,
};
use scalekit_settings::ScaleSettings;
use std::fmt::Write as _;
use std::str::FromStr;
use tracing::info;

/// One driver command
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Text committed in the input for `axis`
    Commit { axis: ScaleAxis, text: String },
    /// 1-based shortcut button in the row for `row`
    Press { index: usize, row: ScaleAxis },
    Drag { slider: ScaleAxis, scale: f32 },
    Select(Vec<ObjectId>),
    Link(bool),
    Show,
    Quit,
}

impl FromStr for Command {
    type Err = Error;

    fn from_str(line: &str) -> Result<Self> {
        let mut words = line.split_whitespace();
        let Some(name) = words.next() else {
            return Err(Error::other("empty command"));
        };
        let args: Vec<&str> = words.collect();

        match (name, args.as_slice()) {
            ("xy" | "x" | "y", [text]) => Ok(Command::Commit {
                axis: parse_axis(name)?,
                text: text.to_string(),
            }),
            ("press", [index]) => Ok(Command::Press {
                index: parse_index(index)?,
                row: ScaleAxis::Xy,
            }),
            ("press", [index, row]) => Ok(Command::Press {
                index: parse_index(index)?,
                row: parse_axis(row)?,
            }),
            ("drag", [slider, scale]) => Ok(Command::Drag {
                slider: parse_axis(slider)?,
                scale: parse_scale_input(scale)?,
            }),
            ("select", ids) => ids
                .iter()
                .map(|id| {
                    id.parse::<ObjectId>()
                        .map_err(|_| Error::other(format!("invalid object id '{}'", id)))
                })
                .collect::<Result<Vec<_>>>()
                .map(Command::Select),
            ("link", ["on"]) => Ok(Command::Link(true)),
            ("link", ["off"]) => Ok(Command::Link(false)),
            ("show", []) => Ok(Command::Show),
            ("quit" | "exit", []) => Ok(Command::Quit),
            _ => Err(Error::other(format!("unrecognized command '{}'", line.trim()))),
        }
    }
}

fn parse_axis(word: &str) -> Result<ScaleAxis> {
    word.parse::<ScaleAxis>()
        .map_err(|_| Error::other(format!("expected xy, x or y, got '{}'", word)))
}

fn parse_index(word: &str) -> Result<usize> {
    match word.parse::<usize>() {
        Ok(index) if index > 0 => Ok(index),
        _ => Err(Error::other(format!("invalid shortcut number '{}'", word))),
    }
}

/// Sandbox scene with a scale control attached
pub struct Session {
    control: ScaleControl,
    editor: SandboxEditor,
    widget: SandboxScaleWidget,
    widgets: SandboxWidgets,
}

impl Session {
    /// Scene of three objects, all selected
    pub fn new(settings: ScaleSettings) -> Self {
        let mut editor = SandboxEditor::new();
        let size = Vec2::splat(30.0);
        editor.add_object(SandboxObject::new(0, Vec2::new(0.0, 0.0), size));
        editor.add_object(SandboxObject::new(0, Vec2::new(60.0, 0.0), size).with_scale(1.5, 1.5));
        editor.add_object(SandboxObject::new(0, Vec2::new(30.0, 45.0), size).with_flip(true, false));
        editor.select_all();

        let mut widgets = SandboxWidgets::new();
        let mut widget = SandboxScaleWidget::new();
        let control = ScaleControl::new(settings, &mut widgets, &mut widget);

        let mut session = Self {
            control,
            editor,
            widget,
            widgets,
        };
        session.load_selection();
        session
    }

    pub fn editor(&self) -> &SandboxEditor {
        &self.editor
    }

    pub fn widget(&self) -> &SandboxScaleWidget {
        &self.widget
    }

    pub fn widgets(&self) -> &SandboxWidgets {
        &self.widgets
    }

    /// Run one command; returns `false` once the session should end
    pub fn execute(&mut self, command: &Command) -> Result<bool> {
        match command {
            Command::Commit { axis, text } => {
                self.control
                    .on_text_committed(*axis, text, &mut self.editor, &mut self.widget);
            }
            Command::Press { index, row } => {
                let menu = MenuSpec::for_axis(*row).id;
                let button = self
                    .widgets
                    .state(menu)
                    .and_then(|state| state.buttons.get(index - 1).map(|(button, _, _)| *button))
                    .ok_or_else(|| Error::other(format!("no shortcut {} in {}", index, menu)))?;
                self.control
                    .on_shortcut_pressed(button, &mut self.editor, &mut self.widget);
            }
            Command::Drag { slider, scale } => {
                self.widget.drag(*slider, *scale);
                self.control.on_touch_moved(&self.widget);
            }
            Command::Select(ids) => {
                self.editor.select(ids);
                self.load_selection();
            }
            Command::Link(linked) => {
                self.widget.linked_label_visible = *linked;
                self.control.update_visibility(&mut self.widget);
            }
            Command::Show => {}
            Command::Quit => return Ok(false),
        }
        Ok(true)
    }

    /// Load the selection's scale into the widget, as the host does after a
    /// selection change
    fn load_selection(&mut self) {
        let (value_x, value_y) = match self.editor.selection() {
            [id] => self
                .editor
                .get(*id)
                .map_or((1.0, 1.0), |obj| (obj.scale_x, obj.scale_y)),
            _ => (1.0, 1.0),
        };
        self.widget.load(value_x, value_y);
        self.control.on_values_loaded(&mut self.widget);
        info!(
            selected = self.editor.selection().len(),
            value_x, value_y, "Loaded selection"
        );
    }

    /// Human-readable state of the scene
    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "scale x={} y={} linked={} locked={}",
            self.widget.value_x,
            self.widget.value_y,
            self.widget.linked_label_visible,
            self.widget.locked,
        );

        for axis in ScaleAxis::ALL {
            let id = TextInputSpec::for_axis(axis, 1).id;
            if let Some(state) = self.widgets.state(id) {
                let shown = if state.visible { "shown" } else { "hidden" };
                let _ = writeln!(out, "  {:<20} {:>8} {}", id, state.text, shown);
            }
        }

        for obj in self.editor.objects() {
            let marker = if self.editor.selection().contains(&obj.id) {
                '*'
            } else {
                ' '
            };
            let _ = writeln!(
                out,
                "{} #{} pos=({}, {}) scale=({}, {}) rendered=({}, {})",
                marker,
                obj.id,
                obj.position.x,
                obj.position.y,
                obj.scale_x,
                obj.scale_y,
                obj.rendered_scale_x,
                obj.rendered_scale_y,
            );
        }
        out
    }
}
