//! C-ABI wrapper around `archives-core`.
//!
//! # Overview
//! Exposes the film archive's build/parse pair through `extern "C"`
//! functions so a mobile host can build the `AllFilms` request, execute it
//! with its own HTTP stack, and hand the response back for decoding without
//! linking to Rust's async runtime.
//!
//! # Design
//! - Every `extern "C"` function wraps its body in `catch_unwind` so panics
//!   never cross the FFI boundary.
//! - `build_*` / `parse_*` mirror the core `FilmClient` 1:1.
//! - A single `FfiArchivesResult` envelope with `FfiDataTag` + `void* data`
//!   conveys success payloads and errors uniformly.
//! - The C caller owns all returned pointers and must call the matching
//!   `archives_free_*` function to release them.

pub mod types;

use std::ffi::{CStr, CString};
use std::os::raw::c_char;
use std::panic::catch_unwind;

use archives_core::HttpResponse;

use types::*;

// ---------------------------------------------------------------------------
// Client lifecycle
// ---------------------------------------------------------------------------

/// Create a new `FilmClient` bound to `base_url`.
///
/// Returns null if `base_url` is null, not valid UTF-8, not an absolute
/// http(s) URL, or if an internal panic occurs.
/// The caller must free the returned pointer with `archives_client_free`.
#[unsafe(no_mangle)]
pub extern "C" fn archives_client_new(base_url: *const c_char) -> *mut FfiFilmClient {
    catch_unwind(|| {
        if base_url.is_null() {
            return std::ptr::null_mut();
        }
        let Ok(url) = unsafe { CStr::from_ptr(base_url) }.to_str() else {
            return std::ptr::null_mut();
        };
        match archives_core::FilmClient::new(url) {
            Ok(client) => Box::into_raw(Box::new(FfiFilmClient { inner: client })),
            Err(_) => std::ptr::null_mut(),
        }
    })
    .unwrap_or(std::ptr::null_mut())
}

/// Free a `FilmClient` created by `archives_client_new`. Safe to call with null.
#[unsafe(no_mangle)]
pub extern "C" fn archives_client_free(client: *mut FfiFilmClient) {
    if !client.is_null() {
        let _ = catch_unwind(|| {
            drop(unsafe { Box::from_raw(client) });
        });
    }
}

// ---------------------------------------------------------------------------
// Build request functions
// ---------------------------------------------------------------------------

/// Build the `AllFilms` GraphQL request.
///
/// Returns null if `client` is null or the body cannot be serialized.
/// The caller must free the returned pointer with `archives_free_request`.
#[unsafe(no_mangle)]
pub extern "C" fn archives_build_all_films(client: *const FfiFilmClient) -> *mut FfiHttpRequest {
    catch_unwind(|| {
        if client.is_null() {
            return std::ptr::null_mut();
        }
        let client = unsafe { &*client };
        match client.inner.build_all_films() {
            Ok(req) => FfiHttpRequest::from_core(req),
            Err(_) => std::ptr::null_mut(),
        }
    })
    .unwrap_or(std::ptr::null_mut())
}

// ---------------------------------------------------------------------------
// Parse response functions
// ---------------------------------------------------------------------------

/// Convert an `FfiHttpResponse` to a core `HttpResponse`. A null body is
/// treated as empty.
fn ffi_response_to_core(resp: &FfiHttpResponse) -> HttpResponse {
    let body = if resp.body.is_null() {
        Vec::new()
    } else {
        unsafe { CStr::from_ptr(resp.body) }.to_bytes().to_vec()
    };
    HttpResponse {
        status: resp.status,
        headers: Vec::new(),
        body,
    }
}

/// Parse the response to an `AllFilms` request.
///
/// Returns a result with `data_tag = FilmList` on success.
#[unsafe(no_mangle)]
pub extern "C" fn archives_parse_all_films(
    client: *const FfiFilmClient,
    response: *const FfiHttpResponse,
) -> *mut FfiArchivesResult {
    catch_unwind(|| {
        if client.is_null() {
            return FfiArchivesResult::null_arg("client");
        }
        if response.is_null() {
            return FfiArchivesResult::null_arg("response");
        }
        let client = unsafe { &*client };
        let resp = unsafe { &*response };
        match client.inner.parse_all_films(ffi_response_to_core(resp)) {
            Ok(payload) => FfiArchivesResult::ok_film_list(payload.into_films()),
            Err(e) => FfiArchivesResult::from_error(e),
        }
    })
    .unwrap_or_else(|_| FfiArchivesResult::panic("panic in archives_parse_all_films"))
}

/// Check only the status of a response whose payload is not needed.
///
/// Returns a result with `data_tag = None` on success.
#[unsafe(no_mangle)]
pub extern "C" fn archives_parse_empty(
    client: *const FfiFilmClient,
    response: *const FfiHttpResponse,
) -> *mut FfiArchivesResult {
    catch_unwind(|| {
        if client.is_null() {
            return FfiArchivesResult::null_arg("client");
        }
        if response.is_null() {
            return FfiArchivesResult::null_arg("response");
        }
        let client = unsafe { &*client };
        let resp = unsafe { &*response };
        match client.inner.parse_empty(ffi_response_to_core(resp)) {
            Ok(()) => FfiArchivesResult::ok_empty(),
            Err(e) => FfiArchivesResult::from_error(e),
        }
    })
    .unwrap_or_else(|_| FfiArchivesResult::panic("panic in archives_parse_empty"))
}

// ---------------------------------------------------------------------------
// Free functions
// ---------------------------------------------------------------------------

fn free_c_string(s: *mut c_char) {
    if !s.is_null() {
        drop(unsafe { CString::from_raw(s) });
    }
}

/// Free an `FfiHttpRequest` returned by any `archives_build_*` function.
/// Safe to call with null.
#[unsafe(no_mangle)]
pub extern "C" fn archives_free_request(req: *mut FfiHttpRequest) {
    if req.is_null() {
        return;
    }
    let _ = catch_unwind(|| {
        let req = unsafe { Box::from_raw(req) };
        free_c_string(req.url);
        free_c_string(req.body);
        if !req.headers.is_null() {
            let headers = unsafe { from_raw_slice(req.headers, req.headers_len) };
            for h in headers.iter() {
                free_c_string(h.key);
                free_c_string(h.value);
            }
        }
    });
}

/// Free an `FfiArchivesResult` returned by any `archives_parse_*` function.
/// Safe to call with null. Uses `data_tag` to determine what `data` points to.
#[unsafe(no_mangle)]
pub extern "C" fn archives_free_result(result: *mut FfiArchivesResult) {
    if result.is_null() {
        return;
    }
    let _ = catch_unwind(|| {
        let result = unsafe { Box::from_raw(result) };
        free_c_string(result.error_message);
        if result.data.is_null() {
            return;
        }
        match result.data_tag {
            FfiDataTag::FilmList => {
                let list = unsafe { Box::from_raw(result.data as *mut FfiFilmList) };
                if !list.items.is_null() {
                    let films = unsafe { from_raw_slice(list.items, list.len) };
                    for film in films.iter() {
                        free_ffi_film_fields(film);
                    }
                }
            }
            FfiDataTag::None => {}
        }
    });
}

/// Free the owned fields of an `FfiFilm` (but not the struct itself).
fn free_ffi_film_fields(film: &FfiFilm) {
    free_c_string(film.id);
    free_c_string(film.director);
    free_c_string(film.title);
    if !film.characters.is_null() {
        let characters = unsafe { from_raw_slice(film.characters, film.characters_len) };
        for c in characters.iter() {
            free_c_string(c.id);
            free_c_string(c.name);
            free_c_string(c.birth_year);
            free_c_string(c.eye_color);
            free_c_string(c.hair_color);
            free_c_string(c.homeworld);
        }
    }
}

/// Free a C string allocated by this library. Safe to call with null.
#[unsafe(no_mangle)]
pub extern "C" fn archives_free_string(s: *mut c_char) {
    if !s.is_null() {
        let _ = catch_unwind(|| free_c_string(s));
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
