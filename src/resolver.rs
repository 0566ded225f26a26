//! Refresh rate resolution for a monitor index.
//!
//! [`RefreshRateResolver`] bridges the legacy per-adapter enumeration and the
//! display config tables. The monitor index is looked up in the legacy
//! enumeration, its current mode is read, and the active path whose source has
//! the same position and resolution supplies the rational refresh rate.
//!
//! The legacy mode and the config tables come from separate platform queries.
//! Nothing makes the pair atomic: if the display topology changes between the
//! two, the result can be [`Error::NoMatch`] or the rate of whichever display
//! now occupies the old geometry.

use crate::config::{BufferSizes, ConfigTables, allocate_table};
use crate::display::{LegacyDevice, LegacyMode, ModeEntry, PathEntry};
use crate::error::{Error, Result};
use crate::platform::NativeDisplayConfig;

/// Value returned across the C boundary when no rate could be determined.
pub const UNKNOWN_REFRESH_RATE: f64 = -1.0;

/// Platform services a [`RefreshRateResolver`] queries.
///
/// Implemented by the native backend; tests substitute their own.
pub trait DisplayConfigApi {
    /// Path table entry type.
    type Path: PathEntry + Default + Clone;
    /// Mode table entry type.
    type Mode: ModeEntry + Default + Clone;

    /// Look up the device at `index` in the legacy enumeration.
    ///
    /// Fails with [`Error::MonitorNotFound`] past the last device.
    fn legacy_device(&self, index: u32) -> Result<LegacyDevice>;

    /// Read the current mode of a legacy device.
    fn current_mode(&self, device: &LegacyDevice) -> Result<LegacyMode>;

    /// Probe the entry counts needed to hold the active path and mode tables.
    fn buffer_sizes(&self) -> Result<BufferSizes>;

    /// Allocate the path table.
    fn allocate_paths(&self, len: u32) -> Result<Vec<Self::Path>> {
        allocate_table("path", len)
    }

    /// Allocate the mode table.
    fn allocate_modes(&self, len: u32) -> Result<Vec<Self::Mode>> {
        allocate_table("mode", len)
    }

    /// Fill both tables with the active paths of the current topology,
    /// truncating them to the counts actually written.
    fn query_active(&self, tables: &mut ConfigTables<Self::Path, Self::Mode>) -> Result<()>;
}

/// Resolves the refresh rate of the display at a legacy monitor index.
#[derive(Debug, Clone)]
pub struct RefreshRateResolver<A = NativeDisplayConfig> {
    api: A,
}

impl RefreshRateResolver<NativeDisplayConfig> {
    /// Create a resolver over the platform's display config API.
    pub fn native() -> Self {
        Self::new(NativeDisplayConfig)
    }
}

impl Default for RefreshRateResolver<NativeDisplayConfig> {
    fn default() -> Self {
        Self::native()
    }
}

impl<A: DisplayConfigApi> RefreshRateResolver<A> {
    /// Create a resolver over the given API.
    pub fn new(api: A) -> Self {
        Self { api }
    }

    /// The underlying API.
    pub fn api(&self) -> &A {
        &self.api
    }

    /// Refresh rate in Hz of the display at `monitor_index`.
    ///
    /// The first active path, in table order, whose source position and
    /// resolution equal the monitor's current mode wins. The rate is the exact
    /// quotient of the path's numerator and denominator.
    pub fn resolve(&self, monitor_index: u32) -> Result<f64> {
        let device = self.api.legacy_device(monitor_index)?;
        let mode = self.api.current_mode(&device)?;

        let sizes = self.api.buffer_sizes()?;
        log::debug!(
            "display config needs {} paths and {} modes",
            sizes.paths,
            sizes.modes
        );

        let paths = self.api.allocate_paths(sizes.paths)?;
        let modes = self.api.allocate_modes(sizes.modes)?;
        let mut tables = ConfigTables::new(paths, modes);
        self.api.query_active(&mut tables)?;

        let (path_index, path) = tables
            .find_match(&mode)
            .ok_or(Error::NoMatch(monitor_index.into()))?;
        let rate = path.target_refresh_rate();
        let hz = rate.hz().ok_or(Error::InvalidRefreshRate {
            numerator: rate.numerator,
            denominator: rate.denominator,
        })?;

        log::debug!(
            "monitor {} ({}) matched path {}: {}/{} = {} Hz",
            device.index,
            device.name,
            path_index,
            rate.numerator,
            rate.denominator,
            hz
        );
        Ok(hz)
    }

    /// Like [`resolve`](Self::resolve), but returns [`UNKNOWN_REFRESH_RATE`]
    /// on any failure, including a negative index.
    pub fn resolve_or_sentinel(&self, monitor_index: i32) -> f64 {
        let result = u32::try_from(monitor_index)
            .map_err(|_| Error::MonitorNotFound(monitor_index.into()))
            .and_then(|index| self.resolve(index));

        match result {
            Ok(hz) => hz,
            Err(e) => {
                log::debug!("refresh rate unavailable for monitor {monitor_index}: {e}");
                UNKNOWN_REFRESH_RATE
            }
        }
    }

}

/// Refresh rate in Hz of the display at `monitor_index`, using the platform's
/// display config API.
pub fn refresh_rate(monitor_index: u32) -> Result<f64> {
    RefreshRateResolver::native().resolve(monitor_index)
}
