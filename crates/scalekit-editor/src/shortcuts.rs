//! Shortcut buttons
//!
//! Preset scale values shown as one-press buttons. Each enabled row (the
//! linked row, and the X and Y rows when per-axis shortcuts are on) gets one
//! button per preset. Presses come back from the host as a [`ButtonId`],
//! which the registry maps to the value and axis the button was built for.

use crate::host::{ButtonId, ShortcutMenu, WidgetFactory};
use crate::widgets::{shortcut_button_id, MenuSpec};
use scalekit_core::{parse_scale_input, shortcut_label, ScaleAxis};
use scalekit_settings::{ScaleSettings, MAX_SHORTCUTS};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// Horizontal offset of a shortcut row, by number of buttons
const ROW_ALIGNMENT: [f32; MAX_SHORTCUTS] = [40.2, 30.35, 20.2, 10.35, 0.0];

/// A configured preset
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShortcutPreset {
    pub value: f32,
    /// 1-based button position
    pub index: usize,
}

/// What a shortcut button applies
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShortcutBinding {
    pub value: f32,
    pub scope: ScaleAxis,
}

/// Presets enabled by `settings`, in button order
pub fn presets(settings: &ScaleSettings) -> Vec<ShortcutPreset> {
    settings
        .active_shortcuts()
        .into_iter()
        .enumerate()
        .map(|(i, value)| ShortcutPreset {
            value,
            index: i + 1,
        })
        .collect()
}

/// Row offset for `amount` buttons
pub fn row_alignment(amount: usize) -> f32 {
    match amount {
        0 => 0.0,
        n => ROW_ALIGNMENT[n.min(MAX_SHORTCUTS) - 1],
    }
}

/// Shortcut rows and the bindings of their buttons
pub struct ShortcutRegistry {
    bindings: HashMap<ButtonId, ShortcutBinding>,
    pub(crate) default_menu: Option<Box<dyn ShortcutMenu>>,
    pub(crate) x_menu: Option<Box<dyn ShortcutMenu>>,
    pub(crate) y_menu: Option<Box<dyn ShortcutMenu>>,
    alignment: f32,
}

impl std::fmt::Debug for ShortcutRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShortcutRegistry")
            .field("bindings", &self.bindings)
            .field("alignment", &self.alignment)
            .finish()
    }
}

impl ShortcutRegistry {
    /// Registry with no rows
    pub fn empty() -> Self {
        Self {
            bindings: HashMap::new(),
            default_menu: None,
            x_menu: None,
            y_menu: None,
            alignment: 0.0,
        }
    }

    /// Create the rows and buttons for `settings`
    ///
    /// Nothing is created when shortcuts are disabled. The X and Y rows only
    /// exist with `x-y-shortcuts-enabled`.
    pub fn build(settings: &ScaleSettings, factory: &mut dyn WidgetFactory) -> Self {
        let mut registry = Self::empty();
        if !settings.shortcuts_enabled {
            return registry;
        }

        let presets = presets(settings);
        registry.alignment = row_alignment(presets.len());

        let mut rows = vec![ScaleAxis::Xy];
        if settings.xy_shortcuts_enabled {
            rows.extend([ScaleAxis::X, ScaleAxis::Y]);
        }

        for axis in rows {
            let mut menu = factory.create_shortcut_menu(&MenuSpec::for_axis(axis));
            for preset in &presets {
                let label = shortcut_label(preset.value);
                let button = menu.add_button(&shortcut_button_id(preset.index), &label);
                // A press applies the number shown on the button.
                let value = parse_scale_input(&label).unwrap_or(1.0);
                registry
                    .bindings
                    .insert(button, ShortcutBinding { value, scope: axis });
            }
            menu.update_layout();

            match axis {
                ScaleAxis::Xy => registry.default_menu = Some(menu),
                ScaleAxis::X => registry.x_menu = Some(menu),
                ScaleAxis::Y => registry.y_menu = Some(menu),
            }
        }

        debug!(
            buttons = registry.bindings.len(),
            alignment = registry.alignment,
            "Built shortcut rows"
        );
        registry
    }

    /// Binding of a pressed button, `None` for buttons this registry did not create
    pub fn binding(&self, button: ButtonId) -> Option<ShortcutBinding> {
        self.bindings.get(&button).copied()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Row offset used when positioning the rows
    pub fn alignment(&self) -> f32 {
        self.alignment
    }

    /// Row for `axis`, if it was created
    pub fn menu_mut(&mut self, axis: ScaleAxis) -> Option<&mut (dyn ShortcutMenu + 'static)> {
        match axis {
            ScaleAxis::Xy => self.default_menu.as_deref_mut(),
            ScaleAxis::X => self.x_menu.as_deref_mut(),
            ScaleAxis::Y => self.y_menu.as_deref_mut(),
        }
    }
}
