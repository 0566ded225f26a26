//! Platform-specific implementations.

#[cfg(target_os = "windows")]
mod windows;
#[cfg(target_os = "windows")]
pub use windows::*;

// The display config API only exists on Windows; elsewhere every query fails.
#[cfg(not(target_os = "windows"))]
mod stub {
    use crate::config::{BufferSizes, ConfigMode, ConfigPath, ConfigTables};
    use crate::display::{LegacyDevice, LegacyMode};
    use crate::error::{Error, Result};
    use crate::resolver::DisplayConfigApi;

    /// Placeholder backend for platforms without a display config API.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct NativeDisplayConfig;

    impl DisplayConfigApi for NativeDisplayConfig {
        type Path = ConfigPath;
        type Mode = ConfigMode;

        fn legacy_device(&self, _index: u32) -> Result<LegacyDevice> {
            Err(not_supported())
        }

        fn current_mode(&self, _device: &LegacyDevice) -> Result<LegacyMode> {
            Err(not_supported())
        }

        fn buffer_sizes(&self) -> Result<BufferSizes> {
            Err(not_supported())
        }

        fn query_active(&self, _tables: &mut ConfigTables<ConfigPath, ConfigMode>) -> Result<()> {
            Err(not_supported())
        }
    }

    fn not_supported() -> Error {
        Error::NotSupported("display config queries require Windows".into())
    }
}

#[cfg(not(target_os = "windows"))]
pub use stub::*;
