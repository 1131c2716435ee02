//! Integration tests for the exported C-ABI greeting

use hscide::{GREETING_SYMBOL, get_hello_world, greeting};
use std::ffi::{CStr, c_char};
use std::path::PathBuf;
use std::process::Command;
use std::thread;

/// Helper to build the greeting cdylib into a scratch target directory
fn build_greeting_library() -> Result<PathBuf, Box<dyn std::error::Error>> {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let target_dir = PathBuf::from(env!("CARGO_TARGET_TMPDIR")).join("hscide-cdylib");
    let cargo = std::env::var("CARGO").unwrap_or_else(|_| "cargo".to_string());

    let output = Command::new(cargo)
        .arg("build")
        .arg("--manifest-path")
        .arg(manifest_dir.join("Cargo.toml"))
        .arg("--target-dir")
        .arg(&target_dir)
        .output()?;

    if !output.status.success() {
        return Err(format!(
            "Failed to build greeting library: {}",
            String::from_utf8_lossy(&output.stderr)
        )
        .into());
    }

    let lib_name = format!(
        "{}hscide{}",
        std::env::consts::DLL_PREFIX,
        std::env::consts::DLL_SUFFIX
    );
    let lib_path = target_dir.join("debug").join(lib_name);

    if !lib_path.exists() {
        return Err(format!("Built library not found at {}", lib_path.display()).into());
    }

    Ok(lib_path)
}

#[test]
fn test_concurrent_readers_see_complete_greeting() {
    let handles: Vec<_> = (0..100)
        .map(|_| {
            thread::spawn(|| {
                for _ in 0..1000 {
                    // Safety: get_hello_world returns a static null-terminated literal
                    let text = unsafe { CStr::from_ptr(get_hello_world()) };
                    assert_eq!(text.to_bytes(), b"Hello World!");
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("reader thread panicked");
    }
}

#[test]
fn test_greeting_has_no_surrounding_whitespace() {
    let text = greeting();
    assert_eq!(text, text.trim());
    assert!(text.starts_with('H'));
    assert!(text.ends_with('!'));
}

#[test]
fn test_cdylib_exports_get_hello_world() {
    let lib_path = build_greeting_library().expect("Failed to build greeting library");

    unsafe {
        let lib = libloading::Library::new(&lib_path).expect("Failed to load library");

        let symbol: libloading::Symbol<unsafe extern "C" fn() -> *const c_char> = lib
            .get(GREETING_SYMBOL.as_bytes())
            .expect("Library should export get_hello_world");

        let first = symbol();
        let second = symbol();
        assert!(!first.is_null(), "Greeting pointer should not be null");
        assert_eq!(first, second, "Repeated calls should share storage");
        assert_eq!(CStr::from_ptr(first).to_str().unwrap(), "Hello World!");
    }
}
