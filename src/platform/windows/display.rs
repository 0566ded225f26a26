//! Windows display config queries.

use crate::config::{BufferSizes, ConfigTables};
use crate::display::{
    LegacyDevice, LegacyMode, ModeEntry, PathEntry, Position, RefreshRate, Resolution, SourceMode,
};
use crate::error::{Error, Result};
use crate::resolver::DisplayConfigApi;
use std::mem::{MaybeUninit, size_of};
use windows::Win32::Devices::Display::{
    DISPLAYCONFIG_MODE_INFO, DISPLAYCONFIG_MODE_INFO_TYPE_SOURCE, DISPLAYCONFIG_PATH_ACTIVE,
    DISPLAYCONFIG_PATH_INFO, GetDisplayConfigBufferSizes, QDC_ONLY_ACTIVE_PATHS,
    QueryDisplayConfig,
};
use windows::Win32::Foundation::ERROR_SUCCESS;
use windows::Win32::Graphics::Gdi::{
    DEVMODEW, DISPLAY_DEVICEW, ENUM_CURRENT_SETTINGS, EnumDisplayDevicesW, EnumDisplaySettingsW,
};
use windows::core::PCWSTR;

/// Display config API of the running Windows session.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeDisplayConfig;

impl DisplayConfigApi for NativeDisplayConfig {
    type Path = DISPLAYCONFIG_PATH_INFO;
    type Mode = DISPLAYCONFIG_MODE_INFO;

    fn legacy_device(&self, index: u32) -> Result<LegacyDevice> {
        let mut device = unsafe { MaybeUninit::<DISPLAY_DEVICEW>::zeroed().assume_init() };
        device.cb = size_of::<DISPLAY_DEVICEW>() as u32;

        let ok = unsafe { EnumDisplayDevicesW(PCWSTR::null(), index, &mut device, 0) };
        if !ok.as_bool() {
            log::debug!("EnumDisplayDevicesW found no device at index {index}");
            return Err(Error::MonitorNotFound(index.into()));
        }

        Ok(LegacyDevice {
            index,
            name: wide_to_string(&device.DeviceName),
        })
    }

    fn current_mode(&self, device: &LegacyDevice) -> Result<LegacyMode> {
        let mut devmode = unsafe { MaybeUninit::<DEVMODEW>::zeroed().assume_init() };
        devmode.dmSize = size_of::<DEVMODEW>() as u16;

        let name: Vec<u16> = device
            .name
            .encode_utf16()
            .chain(std::iter::once(0))
            .collect();
        let ok =
            unsafe { EnumDisplaySettingsW(PCWSTR(name.as_ptr()), ENUM_CURRENT_SETTINGS, &mut devmode) };
        if !ok.as_bool() {
            log::debug!("EnumDisplaySettingsW failed for {}", device.name);
            return Err(Error::ModeUnavailable(device.name.clone()));
        }

        // SAFETY: for display devices the position member of the union is the
        // one EnumDisplaySettingsW fills in.
        let position = unsafe { devmode.Anonymous1.Anonymous2.dmPosition };
        Ok(LegacyMode {
            device_name: device.name.clone(),
            position: Position::new(position.x, position.y),
            resolution: Resolution::new(devmode.dmPelsWidth, devmode.dmPelsHeight),
        })
    }

    fn buffer_sizes(&self) -> Result<BufferSizes> {
        let mut sizes = BufferSizes::default();
        let status = unsafe {
            GetDisplayConfigBufferSizes(QDC_ONLY_ACTIVE_PATHS, &mut sizes.paths, &mut sizes.modes)
        };
        if status != ERROR_SUCCESS {
            log::warn!("GetDisplayConfigBufferSizes failed with status {}", status.0);
            return Err(Error::ProbeFailed(status.0));
        }
        Ok(sizes)
    }

    fn query_active(
        &self,
        tables: &mut ConfigTables<DISPLAYCONFIG_PATH_INFO, DISPLAYCONFIG_MODE_INFO>,
    ) -> Result<()> {
        let (paths, modes) = tables.tables_mut();
        let mut path_count = paths.len() as u32;
        let mut mode_count = modes.len() as u32;

        let status = unsafe {
            QueryDisplayConfig(
                QDC_ONLY_ACTIVE_PATHS,
                &mut path_count,
                paths.as_mut_ptr(),
                &mut mode_count,
                modes.as_mut_ptr(),
                None,
            )
        };
        if status != ERROR_SUCCESS {
            log::warn!("QueryDisplayConfig failed with status {}", status.0);
            return Err(Error::QueryFailed(status.0));
        }

        tables.truncate(path_count as usize, mode_count as usize);
        Ok(())
    }
}

impl PathEntry for DISPLAYCONFIG_PATH_INFO {
    fn source_mode_index(&self) -> usize {
        // SAFETY: without QDC_VIRTUAL_MODE_AWARE the union holds a plain mode
        // index; DISPLAYCONFIG_PATH_MODE_IDX_INVALID falls outside any table.
        unsafe { self.sourceInfo.Anonymous.modeInfoIdx as usize }
    }

    fn is_active(&self) -> bool {
        (self.flags & DISPLAYCONFIG_PATH_ACTIVE) != 0
    }

    fn target_refresh_rate(&self) -> RefreshRate {
        let rate = self.targetInfo.refreshRate;
        RefreshRate::new(rate.Numerator, rate.Denominator)
    }
}

impl ModeEntry for DISPLAYCONFIG_MODE_INFO {
    fn source_mode(&self) -> Option<SourceMode> {
        if self.infoType != DISPLAYCONFIG_MODE_INFO_TYPE_SOURCE {
            return None;
        }
        // SAFETY: infoType says the union holds a source mode.
        let source = unsafe { self.Anonymous.sourceMode };
        Some(SourceMode {
            position: Position::new(source.position.x, source.position.y),
            resolution: Resolution::new(source.width, source.height),
        })
    }
}

fn wide_to_string(buffer: &[u16]) -> String {
    let len = buffer.iter().position(|&c| c == 0).unwrap_or(buffer.len());
    String::from_utf16_lossy(&buffer[..len])
}
