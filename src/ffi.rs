//! C ABI over the JSON boundary.
//!
//! Strings returned by this module are owned by Rust and must be released
//! with [`u_dispatch_free_string`].

use std::ffi::{CStr, CString};

use libc::c_char;

use crate::request::{error_json, schedule_json};

/// Plans a JSON request and returns the JSON response.
///
/// On invalid input the response is `{"error": "Bad request: ..."}`.
/// Returns null only if `request` is null.
///
/// # Safety
///
/// `request` must be null or point to a NUL-terminated string that stays
/// valid for the duration of the call.
#[no_mangle]
pub unsafe extern "C" fn u_dispatch_schedule_json(request: *const c_char) -> *mut c_char {
    if request.is_null() {
        return std::ptr::null_mut();
    }
    let body = CStr::from_ptr(request).to_string_lossy();
    let response = schedule_json(&body).unwrap_or_else(|e| error_json(&e));
    // JSON output never contains interior NUL bytes.
    CString::new(response).map_or(std::ptr::null_mut(), CString::into_raw)
}

/// Releases a string returned by [`u_dispatch_schedule_json`].
///
/// # Safety
///
/// `ptr` must be null or a pointer previously returned by this library and
/// not yet freed.
#[no_mangle]
pub unsafe extern "C" fn u_dispatch_free_string(ptr: *mut c_char) {
    if !ptr.is_null() {
        drop(CString::from_raw(ptr));
    }
}
