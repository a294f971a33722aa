/*!
Core types for the facade.

Algorithm identifiers and the facade configuration.
*/

pub mod algorithms;
pub mod config;

// Re-export core types for easier access
pub use algorithms::{key_size_bits, key_size_bytes, CipherAlgorithm, HashAlgorithm};
pub use config::{FacadeConfig, DEFAULT_PASSPHRASE_BITS};
