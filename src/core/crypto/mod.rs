/*!
Algorithm registry and utilities built on the primitive engine.

This module provides the algorithm identifiers, the engine binding, the
initialization sequence, and random byte and passphrase generation.
*/

// Algorithm identifiers and configuration
pub mod types;

// Engine descriptors
pub mod descriptors;

// Primitive engine binding
pub mod engine;

// Initialization sequence
pub mod init;

// Random bytes and passphrases
pub mod random;

// Re-export frequently used items
pub use descriptors::{cipher_descriptor_for, descriptor_for, CipherDescriptor, HashDescriptor, MathProvider, PrngDescriptor};
pub use engine::{default_engine, PrimitiveEngine, SoftwareEngine};
pub use init::{engine_state, initialize, initialize_engine, initialize_with_config, is_initialized, EngineState};
pub use random::{
    default_passphrase, fill_random, fill_random_from, random_bytes, random_bytes_from,
    random_passphrase, random_passphrase_from,
};
pub use types::{key_size_bits, key_size_bytes, CipherAlgorithm, FacadeConfig, HashAlgorithm};
