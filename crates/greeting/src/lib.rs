//! Native greeting library for HSCIDE
//!
//! Exports a single C-ABI function, [`get_hello_world`], so that hosts written
//! in other languages can load this crate as a shared library and read the
//! greeting without linking against Rust.
//!
//! # Building
//!
//! ```bash
//! cargo build --release -p hscide-greeting
//! ```
//!
//! This produces a shared library at:
//! - macOS: `target/release/libhscide.dylib`
//! - Linux: `target/release/libhscide.so`
//! - Windows: `target/release/hscide.dll`

use std::ffi::{CStr, c_char};

/// Exported symbol name of [`get_hello_world`]
pub const GREETING_SYMBOL: &str = "get_hello_world";

const GREETING_LITERAL: &CStr = c"Hello World!";

/// The greeting, null-terminated, in read-only static storage.
static GREETING: &CStr = GREETING_LITERAL;

// Same bytes as GREETING, minus the terminator
const GREETING_TEXT: &str = match std::str::from_utf8(GREETING_LITERAL.to_bytes()) {
    Ok(text) => text,
    Err(_) => panic!("greeting must be valid UTF-8"),
};

const _: () = assert!(GREETING_TEXT.len() + 1 == GREETING_LITERAL.to_bytes_with_nul().len());

/// The greeting as a Rust string slice (no terminator).
pub fn greeting() -> &'static str {
    GREETING_TEXT
}

/// The greeting backed by the same storage [`get_hello_world`] hands out.
pub fn greeting_cstr() -> &'static CStr {
    GREETING
}

/// C-ABI accessor for the greeting.
///
/// Returns a non-null pointer to the bytes `Hello World!\0`. Every call returns
/// the same address.
///
/// # Caller obligations
///
/// The pointed-to data is read-only and owned by this library. Callers must
/// not write through it or free it. It stays valid for the lifetime of the
/// process, or until the shared library is unloaded when it was opened
/// dynamically.
#[unsafe(no_mangle)]
pub extern "C" fn get_hello_world() -> *const c_char {
    GREETING.as_ptr()
}
