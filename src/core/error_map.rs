/*!
Translation between engine status codes and [`ErrorKind`].

The table is built at compile time and never changes. Each entry pairs an
optional engine code with a kind and its description. Entries without an
engine code only exist to give library-internal kinds a description.
*/

use crate::core::crypto::engine::status::*;
use crate::core::error::{ErrorKind, Result};

/// One row of the error map
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorMapEntry {
    /// Engine status code, `None` when the kind has no engine equivalent
    pub backend_code: Option<i32>,
    /// Library error kind
    pub kind: ErrorKind,
    /// Human-readable description
    pub description: &'static str,
}

impl ErrorMapEntry {
    const fn mapped(code: i32, kind: ErrorKind, description: &'static str) -> Self {
        Self { backend_code: Some(code), kind, description }
    }

    const fn unmapped(kind: ErrorKind, description: &'static str) -> Self {
        Self { backend_code: None, kind, description }
    }
}

/// The error map. At most one entry per concrete engine code.
pub static ERROR_MAP: [ErrorMapEntry; 26] = [
    ErrorMapEntry::mapped(CRYPT_OK, ErrorKind::Success, "Successful"),
    ErrorMapEntry::mapped(CRYPT_ERROR, ErrorKind::Unknown, "Generic Error"),
    ErrorMapEntry::mapped(CRYPT_NOP, ErrorKind::Nop, "Non-fatal 'no-operation' requested."),
    ErrorMapEntry::mapped(CRYPT_INVALID_ARG, ErrorKind::BadParams, "Invalid argument provided."),
    ErrorMapEntry::mapped(CRYPT_MEM, ErrorKind::OutOfMemory, "Out of memory"),
    ErrorMapEntry::mapped(CRYPT_BUFFER_OVERFLOW, ErrorKind::BufferTooSmall, "Not enough space for output"),
    ErrorMapEntry::unmapped(ErrorKind::UserAbort, "User Abort"),
    ErrorMapEntry::unmapped(ErrorKind::UnknownRequest, "Unknown Request"),
    ErrorMapEntry::unmapped(ErrorKind::FeatureIncomplete, "Feature incomplete"),
    ErrorMapEntry::unmapped(ErrorKind::FeatureNotAvailable, "Feature not available"),
    ErrorMapEntry::unmapped(ErrorKind::ResourceUnavailable, "Resource not available"),
    ErrorMapEntry::unmapped(ErrorKind::NotConnected, "Not connected"),
    ErrorMapEntry::unmapped(ErrorKind::NotInitialized, "Not Initialized"),
    ErrorMapEntry::mapped(CRYPT_INVALID_PACKET, ErrorKind::CorruptData, "Corrupt Data"),
    ErrorMapEntry::mapped(CRYPT_FAIL_TESTVECTOR, ErrorKind::SelfTestFailed, "Self Test Failed"),
    ErrorMapEntry::unmapped(ErrorKind::BadIntegrity, "Bad Integrity"),
    ErrorMapEntry::mapped(CRYPT_INVALID_HASH, ErrorKind::BadHashId, "Invalid hash specified"),
    ErrorMapEntry::mapped(CRYPT_INVALID_CIPHER, ErrorKind::BadCipherId, "Invalid cipher specified"),
    ErrorMapEntry::mapped(CRYPT_INVALID_PRNG, ErrorKind::BadPrngId, "Invalid PRNG specified"),
    ErrorMapEntry::unmapped(ErrorKind::SecretsMismatch, "Shared Secret Mismatch"),
    ErrorMapEntry::unmapped(ErrorKind::KeyNotFound, "Key Not Found"),
    ErrorMapEntry::unmapped(ErrorKind::ProtocolError, "Protocol Error"),
    ErrorMapEntry::unmapped(ErrorKind::KeyLocked, "Key Locked"),
    ErrorMapEntry::unmapped(ErrorKind::KeyExpired, "Key Expired"),
    ErrorMapEntry::unmapped(ErrorKind::Other, "Other Error"),
    ErrorMapEntry::unmapped(ErrorKind::NotEnoughShares, "Not enough shares to recombine secret"),
];

/// Map a raw engine status code to an [`ErrorKind`].
///
/// Codes absent from the table map to `ErrorKind::Unknown`.
pub fn map_backend_code(code: i32) -> ErrorKind {
    ERROR_MAP
        .iter()
        .find(|entry| entry.backend_code == Some(code))
        .map(|entry| entry.kind)
        .unwrap_or(ErrorKind::Unknown)
}

/// Map a raw engine status code straight to a `Result`
pub fn check_status(code: i32) -> Result<()> {
    map_backend_code(code).into_result()
}

/// Registered description for a kind
pub fn description(kind: ErrorKind) -> Option<&'static str> {
    ERROR_MAP
        .iter()
        .find(|entry| entry.kind == kind)
        .map(|entry| entry.description)
}

/// Write the description of `kind` into `out` as a NUL-terminated string.
///
/// Returns the number of bytes written, terminator included. If the
/// description plus its terminator does not fit, returns `BufferTooSmall`
/// and `out` is left untouched; a kind with no entry yields `Unknown`.
pub fn describe(kind: ErrorKind, out: &mut [u8]) -> Result<usize> {
    let msg = description(kind).ok_or(ErrorKind::Unknown)?;
    let needed = msg.len() + 1;
    if needed > out.len() {
        return Err(ErrorKind::BufferTooSmall);
    }

    out[..msg.len()].copy_from_slice(msg.as_bytes());
    out[msg.len()] = 0;
    Ok(needed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_kind_has_one_description() {
        for kind in ErrorKind::ALL {
            let count = ERROR_MAP.iter().filter(|e| e.kind == kind).count();
            assert_eq!(count, 1, "{:?}", kind);
        }
    }

    #[test]
    fn test_concrete_codes_are_unique() {
        let codes: Vec<i32> = ERROR_MAP.iter().filter_map(|e| e.backend_code).collect();
        for (i, code) in codes.iter().enumerate() {
            assert!(!codes[i + 1..].contains(code), "duplicate code {}", code);
        }
    }

    #[test]
    fn test_unmapped_codes_fall_back_to_unknown() {
        assert_eq!(map_backend_code(CRYPT_INVALID_KEYSIZE), ErrorKind::Unknown);
        assert_eq!(map_backend_code(-1), ErrorKind::Unknown);
        assert_eq!(map_backend_code(i32::MAX), ErrorKind::Unknown);
    }

    #[test]
    fn test_check_status() {
        assert_eq!(check_status(CRYPT_OK), Ok(()));
        assert_eq!(check_status(CRYPT_MEM), Err(ErrorKind::OutOfMemory));
    }

    #[test]
    fn test_describe_exact_fit() {
        let msg = "Key Expired";
        let mut buf = vec![0xAAu8; msg.len() + 1];
        assert_eq!(describe(ErrorKind::KeyExpired, &mut buf), Ok(msg.len() + 1));
        assert_eq!(&buf[..msg.len()], msg.as_bytes());
        assert_eq!(buf[msg.len()], 0);
    }

    #[test]
    fn test_describe_one_short() {
        let mut buf = vec![0xAAu8; "Key Expired".len()];
        assert_eq!(describe(ErrorKind::KeyExpired, &mut buf), Err(ErrorKind::BufferTooSmall));
        assert!(buf.iter().all(|&b| b == 0xAA));
    }
}
