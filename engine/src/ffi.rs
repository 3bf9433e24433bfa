//! FFI layer for non-Rust UI shells.
//!
//! This module provides C-compatible functions that can be called from a
//! JS/WASM bridge or mobile runtime. All data crosses the boundary as JSON
//! strings.
//!
//! # Memory Management
//!
//! - Strings returned by `revolve_*` functions are allocated by Rust
//! - Caller must free them with `revolve_string_free`
//! - Engine pointers must be freed with `revolve_engine_free`
//!
//! # Error Handling
//!
//! Operation functions return JSON with either:
//! - `{"ok": <effects or state>}` on success
//! - `{"error": "<message>"}` on failure

use crate::{CarouselConfig, CarouselEngine, Direction, InputSource, TimerHandle};
use std::ffi::{c_char, CStr, CString};
use std::ptr;

/// Result wrapper for FFI responses.
#[derive(serde::Serialize)]
#[serde(untagged)]
enum FfiResult<T: serde::Serialize> {
    Ok { ok: T },
    Err { error: String },
}

impl<T: serde::Serialize> FfiResult<T> {
    fn ok(value: T) -> Self {
        FfiResult::Ok { ok: value }
    }

    fn err(message: impl Into<String>) -> Self {
        FfiResult::Err {
            error: message.into(),
        }
    }

    fn to_json(&self) -> String {
        serde_json::to_string(self)
            .unwrap_or_else(|e| format!(r#"{{"error":"serialization failed: {}"}}"#, e))
    }
}

/// Convert a Rust string to a C string pointer.
/// Caller must free with `revolve_string_free`.
fn to_c_string(s: String) -> *mut c_char {
    match CString::new(s) {
        Ok(cs) => cs.into_raw(),
        Err(_) => {
            // String contained null bytes - return error JSON
            let error = CString::new(r#"{"error":"string contained null bytes"}"#).unwrap();
            error.into_raw()
        }
    }
}

/// Convert a C string pointer to a Rust string.
/// Returns None if pointer is null or invalid UTF-8.
unsafe fn from_c_string(ptr: *const c_char) -> Option<String> {
    if ptr.is_null() {
        return None;
    }
    CStr::from_ptr(ptr).to_str().ok().map(|s| s.to_string())
}

// ============================================================================
// Engine Lifecycle
// ============================================================================

/// Create a new engine.
///
/// # Arguments
/// - `config_json`: JSON string of CarouselConfig (camelCase fields;
///   omitted fields take their defaults)
///
/// # Returns
/// Pointer to CarouselEngine, or null on failure (bad JSON or a config
/// rejected by validation).
///
/// # Safety
/// - `config_json` must be a valid null-terminated C string or null
/// - Caller must free the returned pointer with `revolve_engine_free`
#[no_mangle]
pub unsafe extern "C" fn revolve_engine_new(config_json: *const c_char) -> *mut CarouselEngine {
    let config_str = match from_c_string(config_json) {
        Some(s) => s,
        None => return ptr::null_mut(),
    };

    let config: CarouselConfig = match serde_json::from_str(&config_str) {
        Ok(c) => c,
        Err(_) => return ptr::null_mut(),
    };

    match CarouselEngine::new(config) {
        Ok(engine) => Box::into_raw(Box::new(engine)),
        Err(_) => ptr::null_mut(),
    }
}

/// Free an engine.
///
/// # Safety
/// - `engine` must be a valid pointer from `revolve_engine_new`
/// - Must not be called twice on the same pointer
#[no_mangle]
pub unsafe extern "C" fn revolve_engine_free(engine: *mut CarouselEngine) {
    if !engine.is_null() {
        drop(Box::from_raw(engine));
    }
}

/// Free a string allocated by the engine.
///
/// # Safety
/// - `s` must be a valid pointer from a `revolve_*` function
/// - Must not be called twice on the same pointer
#[no_mangle]
pub unsafe extern "C" fn revolve_string_free(s: *mut c_char) {
    if !s.is_null() {
        drop(CString::from_raw(s));
    }
}

// ============================================================================
// Engine Operations
// ============================================================================

unsafe fn with_engine(
    engine: *mut CarouselEngine,
    f: impl FnOnce(&mut CarouselEngine) -> String,
) -> *mut c_char {
    match engine.as_mut() {
        Some(engine) => to_c_string(f(engine)),
        None => to_c_string(FfiResult::<()>::err("null engine pointer").to_json()),
    }
}

/// Current state snapshot.
///
/// # Returns
/// JSON string: `{"ok": CarouselState}`
///
/// # Safety
/// - `engine` must be a valid pointer from `revolve_engine_new` or null
/// - Caller must free the returned string with `revolve_string_free`
#[no_mangle]
pub unsafe extern "C" fn revolve_engine_state(engine: *mut CarouselEngine) -> *mut c_char {
    with_engine(engine, |engine| FfiResult::ok(*engine.state()).to_json())
}

/// Request a transition to an explicit slide index.
///
/// # Arguments
/// - `index`: target index; out-of-range values are wrapped or clamped
/// - `direction`: `"next"`, `"prev"`, or null to infer
///
/// # Returns
/// JSON string: `{"ok": [Effect]}` or `{"error": "message"}`
///
/// # Safety
/// - `engine` must be a valid pointer from `revolve_engine_new` or null
/// - `direction` must be a valid null-terminated C string or null
/// - Caller must free the returned string with `revolve_string_free`
#[no_mangle]
pub unsafe extern "C" fn revolve_engine_go_to(
    engine: *mut CarouselEngine,
    index: i64,
    direction: *const c_char,
) -> *mut c_char {
    let direction = match from_c_string(direction) {
        Some(s) => match Direction::parse(&s) {
            Some(d) => Some(d),
            None => {
                return to_c_string(
                    FfiResult::<()>::err(format!("unknown direction: {}", s)).to_json(),
                )
            }
        },
        None => None,
    };

    with_engine(engine, |engine| {
        FfiResult::ok(engine.go_to(index, direction)).to_json()
    })
}

/// Advance one slide forward.
///
/// # Safety
/// - `engine` must be a valid pointer from `revolve_engine_new` or null
/// - Caller must free the returned string with `revolve_string_free`
#[no_mangle]
pub unsafe extern "C" fn revolve_engine_next(engine: *mut CarouselEngine) -> *mut c_char {
    with_engine(engine, |engine| FfiResult::ok(engine.next()).to_json())
}

/// Step one slide back.
///
/// # Safety
/// - `engine` must be a valid pointer from `revolve_engine_new` or null
/// - Caller must free the returned string with `revolve_string_free`
#[no_mangle]
pub unsafe extern "C" fn revolve_engine_prev(engine: *mut CarouselEngine) -> *mut c_char {
    with_engine(engine, |engine| FfiResult::ok(engine.prev()).to_json())
}

/// Set progress directly (continuous drag path).
///
/// # Safety
/// - `engine` must be a valid pointer from `revolve_engine_new` or null
/// - Caller must free the returned string with `revolve_string_free`
#[no_mangle]
pub unsafe extern "C" fn revolve_engine_go_to_progress(
    engine: *mut CarouselEngine,
    progress: f64,
) -> *mut c_char {
    with_engine(engine, |engine| {
        FfiResult::ok(engine.go_to_progress(progress)).to_json()
    })
}

/// Apply a raw input delta.
///
/// # Arguments
/// - `delta`: raw delta in source units (wheel units, pixels, gesture units)
/// - `source`: `"wheel"`, `"drag"`, or `"swipe"`
///
/// # Safety
/// - `engine` must be a valid pointer from `revolve_engine_new` or null
/// - `source` must be a valid null-terminated C string or null
/// - Caller must free the returned string with `revolve_string_free`
#[no_mangle]
pub unsafe extern "C" fn revolve_engine_apply_delta(
    engine: *mut CarouselEngine,
    delta: f64,
    source: *const c_char,
) -> *mut c_char {
    let source = match from_c_string(source).as_deref().and_then(InputSource::parse) {
        Some(s) => s,
        None => return to_c_string(FfiResult::<()>::err("unknown input source").to_json()),
    };

    with_engine(engine, |engine| {
        FfiResult::ok(engine.apply_delta(delta, source)).to_json()
    })
}

/// Request autoplay.
///
/// # Safety
/// - `engine` must be a valid pointer from `revolve_engine_new` or null
/// - Caller must free the returned string with `revolve_string_free`
#[no_mangle]
pub unsafe extern "C" fn revolve_engine_start_autoplay(
    engine: *mut CarouselEngine,
) -> *mut c_char {
    with_engine(engine, |engine| {
        FfiResult::ok(engine.start_autoplay()).to_json()
    })
}

/// Stop autoplay.
///
/// # Safety
/// - `engine` must be a valid pointer from `revolve_engine_new` or null
/// - Caller must free the returned string with `revolve_string_free`
#[no_mangle]
pub unsafe extern "C" fn revolve_engine_stop_autoplay(engine: *mut CarouselEngine) -> *mut c_char {
    with_engine(engine, |engine| {
        FfiResult::ok(engine.stop_autoplay()).to_json()
    })
}

/// Host visibility signal.
///
/// # Safety
/// - `engine` must be a valid pointer from `revolve_engine_new` or null
/// - Caller must free the returned string with `revolve_string_free`
#[no_mangle]
pub unsafe extern "C" fn revolve_engine_set_view_active(
    engine: *mut CarouselEngine,
    active: bool,
) -> *mut c_char {
    with_engine(engine, |engine| {
        FfiResult::ok(engine.set_view_active(active)).to_json()
    })
}

/// Host callback for a fired platform timer.
///
/// # Arguments
/// - `handle_json`: JSON string of the TimerHandle carried by the
///   scheduling effect
///
/// # Safety
/// - `engine` must be a valid pointer from `revolve_engine_new` or null
/// - `handle_json` must be a valid null-terminated C string or null
/// - Caller must free the returned string with `revolve_string_free`
#[no_mangle]
pub unsafe extern "C" fn revolve_engine_handle_timer(
    engine: *mut CarouselEngine,
    handle_json: *const c_char,
) -> *mut c_char {
    let handle_str = match from_c_string(handle_json) {
        Some(s) => s,
        None => return to_c_string(FfiResult::<()>::err("invalid timer handle JSON").to_json()),
    };

    let handle: TimerHandle = match serde_json::from_str(&handle_str) {
        Ok(h) => h,
        Err(e) => {
            return to_c_string(FfiResult::<()>::err(format!("parse error: {}", e)).to_json())
        }
    };

    with_engine(engine, |engine| {
        FfiResult::ok(engine.handle_timer(handle)).to_json()
    })
}

/// Cancel all timers and mark the engine dead.
///
/// # Safety
/// - `engine` must be a valid pointer from `revolve_engine_new` or null
/// - Caller must free the returned string with `revolve_string_free`
#[no_mangle]
pub unsafe extern "C" fn revolve_engine_dispose(engine: *mut CarouselEngine) -> *mut c_char {
    with_engine(engine, |engine| FfiResult::ok(engine.dispose()).to_json())
}
