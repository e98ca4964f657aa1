//! Linux entropy via the `getrandom` system call.

use std::io;

use libc::{c_void, getrandom};

/// Requests `buf.len()` bytes from the kernel entropy pool.
///
/// Issues exactly one `getrandom` call. The kernel may return fewer bytes
/// than requested (large buffers, signal interruption); the count is
/// reported as-is.
///
/// # Errors
/// The OS error reported by `getrandom`, including `EINTR`.
pub(crate) fn sys_random(buf: &mut [u8]) -> io::Result<usize> {
    let ret = unsafe { getrandom(buf.as_mut_ptr() as *mut c_void, buf.len(), 0) };

    if ret < 0 {
        return Err(io::Error::last_os_error());
    }

    Ok(ret as usize)
}
