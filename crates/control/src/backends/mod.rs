//! Control backend implementations.

pub mod null;

#[cfg(target_os = "linux")]
pub mod uinput;

pub use null::NullBackend;

#[cfg(target_os = "linux")]
pub use uinput::UinputBackend;
