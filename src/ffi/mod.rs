#![allow(dead_code)]
//! Foreign Function Interface (FFI) bootstrap module.
//! Exposes the wizard core to Swift/Kotlin/C# hosts via a stable C ABI.
//! This file defines the shared version identifiers, error codes, and
//! helper functions that all bindings can rely on; the session API
//! surface lands with the first host integration.

use std::ffi::CString;
use std::os::raw::c_char;
use std::sync::OnceLock;

/// Semantic version of the Rust core (mirrors `Cargo.toml`).
pub const CORE_VERSION: &str = env!("CARGO_PKG_VERSION");
/// Semantic version of the FFI surface. Bumps when ABI/contract changes.
pub const FFI_VERSION: &str = "0.1.0";

/// Error categories surfaced across the FFI boundary.
#[repr(i32)]
#[derive(Debug, Clone, Copy)]
pub enum FfiErrorCategory {
    Ok = 0,
    UnknownField = 1,
    InvalidValue = 2,
    UnknownFund = 3,
    Serialization = 4,
    Internal = 5,
}

impl From<FfiErrorCategory> for i32 {
    fn from(value: FfiErrorCategory) -> Self {
        value as i32
    }
}

/// Returns the core (Rust) semantic version as a C string.
#[no_mangle]
pub extern "C" fn ffi_core_version() -> *const c_char {
    static CORE: OnceLock<CString> = OnceLock::new();
    CORE.get_or_init(|| CString::new(CORE_VERSION).expect("static core version"))
        .as_ptr()
}

/// Returns the FFI interface semantic version as a C string.
#[no_mangle]
pub extern "C" fn ffi_version() -> *const c_char {
    static FFI: OnceLock<CString> = OnceLock::new();
    FFI.get_or_init(|| CString::new(FFI_VERSION).expect("static ffi version"))
        .as_ptr()
}

/// Maps boundary errors into FFI categories.
pub fn classify_error(err: &crate::errors::WizardError) -> FfiErrorCategory {
    use crate::errors::WizardError;
    match err {
        WizardError::UnknownField(_) => FfiErrorCategory::UnknownField,
        WizardError::InvalidValue { .. } => FfiErrorCategory::InvalidValue,
        WizardError::UnknownFund(_) => FfiErrorCategory::UnknownFund,
        WizardError::Serde(_) => FfiErrorCategory::Serialization,
    }
}

/// Opaque handle wrapping a wizard session for host bindings.
#[repr(C)]
pub struct SessionHandle {
    _private: [u8; 0],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exposes_versions() {
        assert!(!ffi_core_version().is_null());
        assert!(!ffi_version().is_null());
    }

    #[test]
    fn classifies_errors() {
        let err = crate::errors::WizardError::UnknownFund("frontier-credit".into());
        assert!(matches!(classify_error(&err), FfiErrorCategory::UnknownFund));
    }
}
