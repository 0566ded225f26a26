//! # vsync-rate
//!
//! Query the refresh rate a display is actually running at, for renderers
//! that pace playback to the display's vertical refresh.
//!
//! The legacy `EnumDisplaySettings` frequency is a rounded integer and is
//! unreliable on multi-monitor and high-resolution setups. This crate reads the
//! exact rational rate from the display config API (`QueryDisplayConfig`)
//! instead, finding the path that belongs to a legacy monitor index by
//! matching its desktop position and resolution.
//!
//! ## Quick Start
//!
//! ```no_run
//! use vsync_rate::refresh_rate;
//!
//! match refresh_rate(0) {
//!     Ok(hz) => println!("monitor 0 runs at {hz:.3} Hz"),
//!     Err(e) => println!("refresh rate unavailable: {e}"),
//! }
//! ```
//!
//! ## Testing Without a Display
//!
//! [`RefreshRateResolver`] is generic over [`DisplayConfigApi`], so the
//! platform queries can be replaced with scripted tables.
//!
//! ## Feature Flags
//!
//! - `ffi` (default): export `W7GetRefreshRate` and `DllMain` for native hosts
//! - `serde`: `Serialize`/`Deserialize` for the geometry and table types

pub mod config;
pub mod display;
pub mod error;
#[cfg(feature = "ffi")]
pub mod ffi;
pub mod resolver;

mod platform;

// Re-exports
pub use config::{BufferSizes, ConfigMode, ConfigPath, ConfigTables};
pub use display::{
    LegacyDevice, LegacyMode, ModeEntry, PathEntry, Position, RefreshRate, Resolution, SourceMode,
    is_same_display,
};
pub use error::{Error, Result};
pub use platform::NativeDisplayConfig;
pub use resolver::{DisplayConfigApi, RefreshRateResolver, UNKNOWN_REFRESH_RATE, refresh_rate};
