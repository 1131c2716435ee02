//! Dynamic library loading for the native greeting library

use crate::error::BridgeError;
use hscide::GREETING_SYMBOL;
use libloading::{Library, Symbol};
use std::ffi::{CStr, c_char};
use std::path::{Path, PathBuf};
use tracing::debug;

type GreetingFn = unsafe extern "C" fn() -> *const c_char;

/// Platform file name of the native greeting library
pub fn default_library_name() -> &'static str {
    if cfg!(target_os = "windows") {
        "hscide.dll"
    } else if cfg!(target_os = "macos") {
        "libhscide.dylib"
    } else {
        "libhscide.so"
    }
}

/// A loaded native greeting library
///
/// The library handle is kept alongside the resolved function pointer; the
/// pointer is only valid while `_library` is alive.
pub struct GreetingLibrary {
    path: PathBuf,
    get_hello_world: GreetingFn,
    _library: Library,
}

impl GreetingLibrary {
    /// Load the library at `path` and resolve `get_hello_world`
    ///
    /// # Errors
    ///
    /// - `BridgeError::LibraryNotFound` if `path` does not exist
    /// - `BridgeError::Load` if the file is not a loadable library
    /// - `BridgeError::MissingSymbol` if the export is absent
    pub fn open(path: &Path) -> Result<Self, BridgeError> {
        if !path.exists() {
            return Err(BridgeError::LibraryNotFound {
                path: path.to_path_buf(),
            });
        }

        // Safety: only the native greeting library is expected at this path.
        // Loading runs its initializers, which the greeting library does not define.
        let library = unsafe {
            Library::new(path).map_err(|source| BridgeError::Load {
                path: path.to_path_buf(),
                source,
            })?
        };

        // Safety: the export takes no arguments and returns a C string pointer.
        // The signature must match exactly.
        let get_hello_world = unsafe {
            let symbol: Symbol<GreetingFn> =
                library
                    .get(GREETING_SYMBOL.as_bytes())
                    .map_err(|source| BridgeError::MissingSymbol {
                        symbol: GREETING_SYMBOL,
                        path: path.to_path_buf(),
                        source,
                    })?;
            *symbol
        };

        debug!("Loaded native greeting library from {}", path.display());

        Ok(Self {
            path: path.to_path_buf(),
            get_hello_world,
            _library: library,
        })
    }

    /// Path the library was loaded from
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Call the native `get_hello_world` and copy the result into a `String`
    pub fn get_hello_world(&self) -> Result<String, BridgeError> {
        // Safety: the function pointer was resolved from `_library`, which is still loaded
        let ptr = unsafe { (self.get_hello_world)() };
        if ptr.is_null() {
            return Err(BridgeError::NullPointer);
        }

        // Safety: non-null, and the library contract promises a null-terminated
        // string that outlives this call
        let text = unsafe { CStr::from_ptr(ptr) };
        Ok(text.to_str()?.to_owned())
    }
}

impl std::fmt::Debug for GreetingLibrary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GreetingLibrary")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}
