//! Core components of the facade.
//!
//! This module contains the error taxonomy, the engine status translation,
//! and the crypto registry built on top of them.

// Algorithm registry and derived utilities
pub mod crypto;

// Error handling
pub mod error;

// Engine status to error kind translation
pub mod error_map;

// Re-exports for convenience
pub use self::error::{ErrorKind, Result};
pub use self::error_map::{check_status, describe, description, map_backend_code, ErrorMapEntry, ERROR_MAP};
