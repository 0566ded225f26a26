//! C ABI exports for hosts that load this crate as a DLL.
//!
//! Every failure is reported as
//! [`UNKNOWN_REFRESH_RATE`](crate::resolver::UNKNOWN_REFRESH_RATE) (`-1.0`);
//! the host cannot tell the causes apart.

use crate::resolver::RefreshRateResolver;

/// Current refresh rate in Hz of the display at `monitor_idx` in the legacy
/// display device enumeration, or `-1.0` if it cannot be determined.
#[allow(non_snake_case)]
#[unsafe(no_mangle)]
pub extern "C" fn W7GetRefreshRate(monitor_idx: i32) -> f64 {
    RefreshRateResolver::native().resolve_or_sentinel(monitor_idx)
}

#[cfg(target_os = "windows")]
mod entry {
    use std::ffi::c_void;
    use windows::Win32::Foundation::{BOOL, HINSTANCE};

    /// Library attach/detach hook. Nothing to set up or tear down.
    #[allow(non_snake_case)]
    #[unsafe(no_mangle)]
    pub extern "system" fn DllMain(_module: HINSTANCE, _reason: u32, _reserved: *mut c_void) -> BOOL {
        BOOL(1)
    }
}
