//! Windows platform implementation.

mod display;

pub use display::NativeDisplayConfig;
