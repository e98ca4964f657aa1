//! Operating system abstraction layer
//!
//! This module provides the platform entropy facility behind
//! [`OsEntropy`](crate::source::OsEntropy).
//!
//! Platform-specific implementations are selected at compile time using
//! conditional compilation. Each submodule exposes the same `sys_random`
//! function with the semantics of a single [`std::io::Read::read`] call:
//! one request to the platform, returning the number of bytes written or
//! the platform error. Nothing is retried here; the seed factory decides
//! what a short read means.

#[cfg(target_os = "macos")]
mod macos;

#[cfg(target_os = "macos")]
pub(crate) use macos::*;

#[cfg(target_os = "linux")]
mod linux;

#[cfg(target_os = "linux")]
pub(crate) use linux::*;

#[cfg(target_os = "windows")]
mod windows;

#[cfg(target_os = "windows")]
pub(crate) use windows::*;

#[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
pub(crate) fn sys_random(_buf: &mut [u8]) -> std::io::Result<usize> {
    Err(std::io::Error::new(
        std::io::ErrorKind::Unsupported,
        "no entropy source on this platform",
    ))
}
