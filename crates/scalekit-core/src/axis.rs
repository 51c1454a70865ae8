//! Axis scopes
//!
//! Which axis or axes a scale operation targets. `AxisScope` is the wider
//! type used for display refreshes; `ScaleAxis` is the subset that can
//! actually be applied to an editor selection.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Scope of a display refresh
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisScope {
    /// Linked X/Y (the default field)
    Xy,
    /// X axis only
    X,
    /// Y axis only
    Y,
    /// Every field, used when new values are loaded
    All,
}

impl AxisScope {
    /// Whether a refresh with this scope touches the default field
    pub fn includes_xy(self) -> bool {
        matches!(self, Self::Xy | Self::All)
    }

    /// Whether a refresh with this scope touches the X field
    pub fn includes_x(self) -> bool {
        matches!(self, Self::X | Self::All)
    }

    /// Whether a refresh with this scope touches the Y field
    pub fn includes_y(self) -> bool {
        matches!(self, Self::Y | Self::All)
    }
}

impl fmt::Display for AxisScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Xy => write!(f, "xy"),
            Self::X => write!(f, "x"),
            Self::Y => write!(f, "y"),
            Self::All => write!(f, "all"),
        }
    }
}

impl FromStr for AxisScope {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "xy" | "default" => Ok(Self::Xy),
            "x" => Ok(Self::X),
            "y" => Ok(Self::Y),
            "all" => Ok(Self::All),
            _ => Err(format!("Unknown axis scope: {}", s)),
        }
    }
}

/// Axis a scale can be applied to
///
/// Never `All`: the conversion from [`AxisScope`] fails for it, so the apply
/// path cannot receive a refresh-only scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScaleAxis {
    /// Linked X/Y
    Xy,
    /// X axis only
    X,
    /// Y axis only
    Y,
}

impl ScaleAxis {
    /// All applicable axes in slider order (linked, X, Y)
    pub const ALL: [ScaleAxis; 3] = [ScaleAxis::Xy, ScaleAxis::X, ScaleAxis::Y];

    /// Widen into a display scope
    pub fn scope(self) -> AxisScope {
        self.into()
    }
}

impl From<ScaleAxis> for AxisScope {
    fn from(axis: ScaleAxis) -> Self {
        match axis {
            ScaleAxis::Xy => AxisScope::Xy,
            ScaleAxis::X => AxisScope::X,
            ScaleAxis::Y => AxisScope::Y,
        }
    }
}

impl TryFrom<AxisScope> for ScaleAxis {
    type Error = AxisScope;

    fn try_from(scope: AxisScope) -> Result<Self, Self::Error> {
        match scope {
            AxisScope::Xy => Ok(ScaleAxis::Xy),
            AxisScope::X => Ok(ScaleAxis::X),
            AxisScope::Y => Ok(ScaleAxis::Y),
            AxisScope::All => Err(scope),
        }
    }
}

impl fmt::Display for ScaleAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.scope(), f)
    }
}

impl FromStr for ScaleAxis {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let scope: AxisScope = s.parse()?;
        ScaleAxis::try_from(scope).map_err(|_| format!("Scope '{}' cannot be applied", s))
    }
}
