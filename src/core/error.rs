/*!
Error handling for the crypto facade.

Every fallible operation in this crate reports through [`ErrorKind`], whether
the failure came from the primitive engine or from a local validation check.
*/

use std::fmt;
use std::error::Error as StdError;

use crate::core::error_map;

/// Result type for facade operations
pub type Result<T> = std::result::Result<T, ErrorKind>;

/// Closed set of outcomes reported by the facade.
///
/// `Success` exists so engine status codes can be mapped totally; it never
/// appears on the `Err` side of a [`Result`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-support", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorKind {
    /// Operation completed
    Success,
    /// Generic or unrecognized failure
    Unknown,
    /// Non-fatal no-operation
    Nop,
    /// Invalid argument
    BadParams,
    /// Allocation failed
    OutOfMemory,
    /// Output buffer too small
    BufferTooSmall,
    UserAbort,
    UnknownRequest,
    /// Feature incomplete
    FeatureIncomplete,
    FeatureNotAvailable,
    ResourceUnavailable,
    NotConnected,
    /// Engine not initialized
    NotInitialized,
    CorruptData,
    SelfTestFailed,
    BadIntegrity,
    /// Hash id not known to the engine
    BadHashId,
    /// Cipher id not known to the engine
    BadCipherId,
    /// PRNG id not known to the engine
    BadPrngId,
    SecretsMismatch,
    KeyNotFound,
    ProtocolError,
    KeyLocked,
    KeyExpired,
    Other,
    /// Not enough shares to recombine a split secret
    NotEnoughShares,
}

impl ErrorKind {
    /// Every kind, in error map order
    pub const ALL: [ErrorKind; 26] = [
        ErrorKind::Success,
        ErrorKind::Unknown,
        ErrorKind::Nop,
        ErrorKind::BadParams,
        ErrorKind::OutOfMemory,
        ErrorKind::BufferTooSmall,
        ErrorKind::UserAbort,
        ErrorKind::UnknownRequest,
        ErrorKind::FeatureIncomplete,
        ErrorKind::FeatureNotAvailable,
        ErrorKind::ResourceUnavailable,
        ErrorKind::NotConnected,
        ErrorKind::NotInitialized,
        ErrorKind::CorruptData,
        ErrorKind::SelfTestFailed,
        ErrorKind::BadIntegrity,
        ErrorKind::BadHashId,
        ErrorKind::BadCipherId,
        ErrorKind::BadPrngId,
        ErrorKind::SecretsMismatch,
        ErrorKind::KeyNotFound,
        ErrorKind::ProtocolError,
        ErrorKind::KeyLocked,
        ErrorKind::KeyExpired,
        ErrorKind::Other,
        ErrorKind::NotEnoughShares,
    ];

    /// Check if this kind represents success
    pub fn is_success(self) -> bool {
        self == ErrorKind::Success
    }

    /// Convert into a `Result`, with `Success` becoming `Ok(())`
    pub fn into_result(self) -> Result<()> {
        if self.is_success() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match error_map::description(*self) {
            Some(msg) => f.write_str(msg),
            None => write!(f, "{:?}", self),
        }
    }
}

impl StdError for ErrorKind {}
