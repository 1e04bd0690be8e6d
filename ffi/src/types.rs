//! `#[repr(C)]` types for the FFI boundary.
//!
//! # Design
//! Each type mirrors a core type but uses C-compatible representations:
//! `*mut c_char` instead of `String`, pointer + length instead of `Vec`, and
//! tagged enums with explicit discriminants. Conversion functions live here
//! to keep `lib.rs` focused on the `extern "C"` surface.

use std::ffi::CString;
use std::os::raw::c_char;

use archives_core::{ApiError, Character, Film, HttpMethod, HttpRequest};

/// Opaque handle to a `FilmClient`. C callers receive a pointer to this
/// and pass it back into every FFI function.
pub struct FfiFilmClient {
    pub(crate) inner: archives_core::FilmClient,
}

/// Convert to an owned C string, dropping interior NUL bytes.
pub(crate) fn to_c_string(s: impl Into<Vec<u8>>) -> *mut c_char {
    let c = CString::new(s).unwrap_or_else(|err| {
        let mut bytes = err.into_vec();
        bytes.retain(|&b| b != 0);
        CString::new(bytes).unwrap_or_default()
    });
    c.into_raw()
}

/// Leak `items` as a pointer + length pair. Empty vectors become null.
pub(crate) fn into_raw_slice<T>(items: Vec<T>) -> (*mut T, u32) {
    let len = items.len() as u32;
    if items.is_empty() {
        return (std::ptr::null_mut(), 0);
    }
    (Box::into_raw(items.into_boxed_slice()) as *mut T, len)
}

/// Reclaim a slice leaked by `into_raw_slice`.
///
/// # Safety
/// `ptr` and `len` must come from the same `into_raw_slice` call.
pub(crate) unsafe fn from_raw_slice<T>(ptr: *mut T, len: u32) -> Box<[T]> {
    unsafe { Box::from_raw(std::ptr::slice_from_raw_parts_mut(ptr, len as usize)) }
}

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// HTTP method as a C enum.
#[repr(C)]
pub enum FfiHttpMethod {
    Get = 0,
    Post = 1,
}

impl From<HttpMethod> for FfiHttpMethod {
    fn from(m: HttpMethod) -> Self {
        match m {
            HttpMethod::Get => FfiHttpMethod::Get,
            HttpMethod::Post => FfiHttpMethod::Post,
        }
    }
}

/// A single HTTP header as a key-value pair of C strings.
#[repr(C)]
pub struct FfiHeader {
    pub key: *mut c_char,
    pub value: *mut c_char,
}

/// An HTTP request described as C-compatible plain data.
///
/// Built by `archives_build_*` functions. The C caller executes the request
/// and passes the response back through `archives_parse_*`.
#[repr(C)]
pub struct FfiHttpRequest {
    pub method: FfiHttpMethod,
    pub url: *mut c_char,
    pub headers: *mut FfiHeader,
    pub headers_len: u32,
    pub body: *mut c_char,
}

impl FfiHttpRequest {
    /// Convert a core `HttpRequest` into a heap-allocated `FfiHttpRequest`.
    pub(crate) fn from_core(req: HttpRequest) -> *mut Self {
        let headers: Vec<FfiHeader> = req
            .headers
            .into_iter()
            .map(|(k, v)| FfiHeader {
                key: to_c_string(k),
                value: to_c_string(v),
            })
            .collect();
        let (headers, headers_len) = into_raw_slice(headers);

        Box::into_raw(Box::new(FfiHttpRequest {
            method: req.method.into(),
            url: to_c_string(req.url),
            headers,
            headers_len,
            body: to_c_string(req.body),
        }))
    }
}

// ---------------------------------------------------------------------------
// Response input (caller-provided, not heap-allocated by us)
// ---------------------------------------------------------------------------

/// An HTTP response described as C-compatible plain data.
///
/// The C caller constructs this on the stack after executing an HTTP request,
/// then passes a pointer to an `archives_parse_*` function. The FFI layer
/// reads but does not free these fields.
#[repr(C)]
pub struct FfiHttpResponse {
    pub status: u16,
    pub body: *const c_char,
}

// ---------------------------------------------------------------------------
// Result types
// ---------------------------------------------------------------------------

/// Error codes returned in `FfiArchivesResult`.
#[repr(C)]
pub enum FfiErrorCode {
    Ok = 0,
    InvalidBaseUrl = 1,
    Build = 2,
    Transport = 3,
    Status = 4,
    Decode = 5,
    Panic = 6,
    NullArg = 7,
}

/// Tag that tells `archives_free_result` what `FfiArchivesResult::data` points to.
#[repr(C)]
pub enum FfiDataTag {
    None = 0,
    FilmList = 1,
}

/// A character appearing in a film. `homeworld` is the planet name.
#[repr(C)]
pub struct FfiCharacter {
    pub id: *mut c_char,
    pub name: *mut c_char,
    pub birth_year: *mut c_char,
    pub eye_color: *mut c_char,
    pub hair_color: *mut c_char,
    pub homeworld: *mut c_char,
}

impl FfiCharacter {
    fn from_core(c: Character) -> Self {
        FfiCharacter {
            id: to_c_string(c.id),
            name: to_c_string(c.name),
            birth_year: to_c_string(c.birth_year),
            eye_color: to_c_string(c.eye_color),
            hair_color: to_c_string(c.hair_color),
            homeworld: to_c_string(c.homeworld.name),
        }
    }
}

/// A film exposed to C. `release_date` is seconds since the Unix epoch.
#[repr(C)]
pub struct FfiFilm {
    pub id: *mut c_char,
    pub director: *mut c_char,
    pub episode_id: i32,
    pub title: *mut c_char,
    pub release_date: i64,
    pub characters: *mut FfiCharacter,
    pub characters_len: u32,
}

impl FfiFilm {
    fn from_core(film: Film) -> Self {
        let characters: Vec<FfiCharacter> = film
            .character_connection
            .characters
            .into_iter()
            .map(FfiCharacter::from_core)
            .collect();
        let (characters, characters_len) = into_raw_slice(characters);
        FfiFilm {
            id: to_c_string(film.id),
            director: to_c_string(film.director),
            episode_id: film.episode_id,
            title: to_c_string(film.title),
            release_date: film.release_date.timestamp(),
            characters,
            characters_len,
        }
    }
}

/// A list of films exposed to C.
#[repr(C)]
pub struct FfiFilmList {
    pub items: *mut FfiFilm,
    pub len: u32,
}

/// Result envelope for all parse operations.
///
/// On success `error_code` is `Ok`, `error_message` is null, and `data`
/// points to the parsed payload (tagged by `data_tag`).
/// On failure `error_code` describes the category, `error_message` is a
/// human-readable C string, and `data` is null.
#[repr(C)]
pub struct FfiArchivesResult {
    pub error_code: FfiErrorCode,
    pub error_message: *mut c_char,
    pub http_status: u16,
    pub data_tag: FfiDataTag,
    pub data: *mut std::ffi::c_void,
}

impl FfiArchivesResult {
    /// Build a success result carrying an `FfiFilmList`.
    pub(crate) fn ok_film_list(films: Vec<Film>) -> *mut Self {
        let films: Vec<FfiFilm> = films.into_iter().map(FfiFilm::from_core).collect();
        let (items, len) = into_raw_slice(films);
        let list = Box::new(FfiFilmList { items, len });
        Box::into_raw(Box::new(FfiArchivesResult {
            error_code: FfiErrorCode::Ok,
            error_message: std::ptr::null_mut(),
            http_status: 0,
            data_tag: FfiDataTag::FilmList,
            data: Box::into_raw(list) as *mut std::ffi::c_void,
        }))
    }

    /// Build a success result with no data payload.
    pub(crate) fn ok_empty() -> *mut Self {
        Box::into_raw(Box::new(FfiArchivesResult {
            error_code: FfiErrorCode::Ok,
            error_message: std::ptr::null_mut(),
            http_status: 0,
            data_tag: FfiDataTag::None,
            data: std::ptr::null_mut(),
        }))
    }

    /// Build an error result from an `ApiError`.
    pub(crate) fn from_error(err: ApiError) -> *mut Self {
        let (error_code, http_status) = match &err {
            ApiError::InvalidBaseUrl(_) => (FfiErrorCode::InvalidBaseUrl, 0),
            ApiError::Build(_) => (FfiErrorCode::Build, 0),
            ApiError::Transport { .. } => (FfiErrorCode::Transport, 0),
            ApiError::Status { status, .. } => (FfiErrorCode::Status, *status),
            ApiError::Decode(_) => (FfiErrorCode::Decode, 0),
        };
        Self::error(error_code, http_status, err.to_string())
    }

    /// Build an error result for a null argument.
    pub(crate) fn null_arg(name: &str) -> *mut Self {
        Self::error(FfiErrorCode::NullArg, 0, format!("null argument: {name}"))
    }

    /// Build an error result for a caught panic.
    pub(crate) fn panic(msg: &str) -> *mut Self {
        Self::error(FfiErrorCode::Panic, 0, msg.to_string())
    }

    fn error(error_code: FfiErrorCode, http_status: u16, msg: String) -> *mut Self {
        Box::into_raw(Box::new(FfiArchivesResult {
            error_code,
            error_message: to_c_string(msg),
            http_status,
            data_tag: FfiDataTag::None,
            data: std::ptr::null_mut(),
        }))
    }
}
