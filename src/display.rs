//! Display geometry and refresh rate types, plus the predicate that pairs a
//! legacy display device with an active display config path.
//!
//! The legacy enumeration (`EnumDisplayDevices`) and the display config
//! tables (`QueryDisplayConfig`) share no common key. A device and a path are
//! considered the same physical display when the path is active and its source
//! mode sits at the same desktop position with the same resolution as the
//! device's current mode.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A point in virtual desktop coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Position {
    /// Left coordinate.
    pub x: i32,
    /// Top coordinate.
    pub y: i32,
}

impl Position {
    /// Create a new position.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A size in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Resolution {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Resolution {
    /// Create a new resolution.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Placement of the rendering surface that feeds a display path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SourceMode {
    /// Position in the virtual desktop.
    pub position: Position,
    /// Source resolution.
    pub resolution: Resolution,
}

/// A device found by index through the legacy per-adapter enumeration.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LegacyDevice {
    /// Index the device was found at.
    pub index: u32,
    /// Device name, e.g. `\\.\DISPLAY1`.
    pub name: String,
}

/// The current mode of a legacy display device.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LegacyMode {
    /// Name of the device this mode belongs to.
    pub device_name: String,
    /// Position in the virtual desktop.
    pub position: Position,
    /// Current resolution.
    pub resolution: Resolution,
}

impl LegacyMode {
    /// Geometry of this mode in the same shape as a config source mode.
    pub fn source_mode(&self) -> SourceMode {
        SourceMode {
            position: self.position,
            resolution: self.resolution,
        }
    }
}

/// A rational refresh rate as reported for the target end of a path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RefreshRate {
    /// Numerator.
    pub numerator: u32,
    /// Denominator.
    pub denominator: u32,
}

impl RefreshRate {
    /// Create a new rational rate.
    pub const fn new(numerator: u32, denominator: u32) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    /// The rate in Hz, or `None` when the denominator is zero.
    ///
    /// Both parts are widened to `f64` before dividing, so the result is the
    /// exact quotient of the two reported integers.
    pub fn hz(&self) -> Option<f64> {
        if self.denominator == 0 {
            None
        } else {
            Some(self.numerator as f64 / self.denominator as f64)
        }
    }
}

/// Entry in the active display path table.
pub trait PathEntry {
    /// Index of this path's source mode in the mode table.
    fn source_mode_index(&self) -> usize;

    /// Whether the path is flagged active.
    fn is_active(&self) -> bool;

    /// Refresh rate of the path's target.
    fn target_refresh_rate(&self) -> RefreshRate;
}

/// Entry in the display mode table.
pub trait ModeEntry {
    /// Source geometry, or `None` if this entry does not describe a source.
    fn source_mode(&self) -> Option<SourceMode>;
}

/// Returns true if `path`, whose source mode resolved to `source`, is the same
/// physical display as the legacy `mode`.
///
/// All four coordinates must be equal: x, y, width and height. A path whose
/// source mode could not be resolved never matches.
pub fn is_same_display<P: PathEntry + ?Sized>(
    mode: &LegacyMode,
    path: &P,
    source: Option<&SourceMode>,
) -> bool {
    match source {
        Some(source) => path.is_active() && *source == mode.source_mode(),
        None => false,
    }
}
