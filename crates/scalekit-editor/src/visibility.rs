//! Layout of the added widgets
//!
//! The host shows either the linked X/Y slider or the two per-axis sliders.
//! Which one is active decides which inputs, captions and shortcut rows are
//! visible and where the rows and the lock button sit. The layout is derived
//! from scratch as a [`LayoutPlan`] and then applied to whatever widgets
//! exist.

use glam::Vec2;
use scalekit_core::ScaleAxis;
use scalekit_settings::ScaleSettings;
use std::fmt;
use tracing::debug;

const LINKED_ROW_Y: f32 = 60.0;
const LINKED_LOCK_ANCHOR: Vec2 = Vec2::new(0.0, 90.0);

const UNSPLIT_DEFAULT_ROW_Y: f32 = 120.0;
const UNSPLIT_LOCK_ANCHOR: Vec2 = Vec2::new(0.0, 150.0);

const SPLIT_X_ROW_Y: f32 = 60.0;
const SPLIT_Y_ROW_Y: f32 = 150.0;
const SPLIT_LOCK_ANCHOR: Vec2 = Vec2::new(0.0, 180.0);
const SPLIT_SLIDER_Y: Vec2 = Vec2::new(0.0, 90.0);
const SPLIT_Y_LABEL: Vec2 = Vec2::new(-56.0, 120.0);
const SPLIT_Y_INPUT: Vec2 = Vec2::new(42.0, 118.5);

/// A widget added by the scale control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Element {
    DefaultLabel,
    DefaultInput,
    DefaultRow,
    XLabel,
    XInput,
    XRow,
    YLabel,
    YInput,
    YRow,
}

impl Element {
    pub const ALL: [Element; 9] = [
        Element::DefaultLabel,
        Element::DefaultInput,
        Element::DefaultRow,
        Element::XLabel,
        Element::XInput,
        Element::XRow,
        Element::YLabel,
        Element::YInput,
        Element::YRow,
    ];

    /// Axis whose slider the element belongs to
    pub fn axis(self) -> ScaleAxis {
        match self {
            Element::DefaultLabel | Element::DefaultInput | Element::DefaultRow => ScaleAxis::Xy,
            Element::XLabel | Element::XInput | Element::XRow => ScaleAxis::X,
            Element::YLabel | Element::YInput | Element::YRow => ScaleAxis::Y,
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Element::DefaultLabel => "default-label",
            Element::DefaultInput => "default-input",
            Element::DefaultRow => "default-row",
            Element::XLabel => "x-label",
            Element::XInput => "x-input",
            Element::XRow => "x-row",
            Element::YLabel => "y-label",
            Element::YInput => "y-input",
            Element::YRow => "y-row",
        };
        f.write_str(name)
    }
}

/// Visibility and optional new position of one element
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ElementLayout {
    pub visible: bool,
    /// `None` leaves the element where it is
    pub position: Option<Vec2>,
}

/// Derived layout for every added widget plus the host's lock button and Y
/// slider
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LayoutPlan {
    elements: [ElementLayout; 9],
    pub lock_anchor: Option<Vec2>,
    pub slider_y: Option<Vec2>,
}

impl LayoutPlan {
    pub fn get(&self, element: Element) -> ElementLayout {
        self.elements[element.index()]
    }

    pub fn is_visible(&self, element: Element) -> bool {
        self.get(element).visible
    }

    pub fn position(&self, element: Element) -> Option<Vec2> {
        self.get(element).position
    }

    fn show(&mut self, element: Element, visible: bool) {
        self.elements[element.index()].visible = visible;
    }

    fn place(&mut self, element: Element, position: Vec2) {
        self.elements[element.index()].position = Some(position);
    }

    /// Elements with their layout, in [`Element::ALL`] order
    pub fn iter(&self) -> impl Iterator<Item = (Element, ElementLayout)> + '_ {
        Element::ALL.iter().map(|&e| (e, self.get(e)))
    }
}

/// Derives the layout for the active slider mode
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibilityController {
    shortcuts_enabled: bool,
    xy_shortcuts_enabled: bool,
    alignment: f32,
}

impl VisibilityController {
    pub fn new(shortcuts_enabled: bool, xy_shortcuts_enabled: bool, alignment: f32) -> Self {
        Self {
            shortcuts_enabled,
            xy_shortcuts_enabled,
            alignment,
        }
    }

    pub fn from_settings(settings: &ScaleSettings, alignment: f32) -> Self {
        Self::new(
            settings.shortcuts_enabled,
            settings.xy_shortcuts_enabled,
            alignment,
        )
    }

    /// Whether the X and Y rows are laid out beside their own sliders
    pub fn axis_splitting(&self) -> bool {
        self.shortcuts_enabled && self.xy_shortcuts_enabled
    }

    /// Layout for the linked slider (`linked_active`) or the per-axis sliders
    pub fn plan(&self, linked_active: bool) -> LayoutPlan {
        let mut plan = LayoutPlan::default();
        for element in Element::ALL {
            let linked = element.axis() == ScaleAxis::Xy;
            plan.show(element, linked == linked_active);
        }

        if linked_active {
            plan.lock_anchor = Some(LINKED_LOCK_ANCHOR);
            plan.place(Element::DefaultRow, Vec2::new(self.alignment, LINKED_ROW_Y));
        } else if !self.xy_shortcuts_enabled {
            plan.place(
                Element::DefaultRow,
                Vec2::new(self.alignment, UNSPLIT_DEFAULT_ROW_Y),
            );
            plan.lock_anchor = Some(UNSPLIT_LOCK_ANCHOR);
        } else if self.shortcuts_enabled {
            plan.place(Element::XRow, Vec2::new(self.alignment, SPLIT_X_ROW_Y));
            plan.lock_anchor = Some(SPLIT_LOCK_ANCHOR);
            plan.slider_y = Some(SPLIT_SLIDER_Y);
            plan.place(Element::YLabel, SPLIT_Y_LABEL);
            plan.place(Element::YInput, SPLIT_Y_INPUT);
            plan.place(Element::YRow, Vec2::new(self.alignment, SPLIT_Y_ROW_Y));
        }

        debug!(linked_active, splitting = self.axis_splitting(), "Derived layout");
        plan
    }
}
