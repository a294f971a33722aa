/*!
Binding to the primitive engine.

The engine performs the actual cryptography. The facade only registers
descriptors with it and reads from its secure random source; every call
returns a raw status code that goes through the error map.
*/

pub mod software;
pub mod status;

use crate::core::crypto::descriptors::{CipherDescriptor, HashDescriptor, MathProvider, PrngDescriptor};

pub use software::{default_engine, SoftwareEngine, TABLE_SIZE};

/// Operations the facade invokes on a primitive engine.
///
/// Registration methods return a raw engine status code, see [`status`].
pub trait PrimitiveEngine: Send + Sync {
    /// Select the big-number provider used by public-key math
    fn select_math_provider(&self, provider: MathProvider) -> i32;

    /// Register a PRNG descriptor
    fn register_prng(&self, descriptor: &'static PrngDescriptor) -> i32;

    /// Register a hash descriptor
    fn register_hash(&self, descriptor: &'static HashDescriptor) -> i32;

    /// Register a cipher descriptor
    fn register_cipher(&self, descriptor: &'static CipherDescriptor) -> i32;

    /// Fill `buf` from the secure random source, returning the number of bytes written
    fn secure_random(&self, buf: &mut [u8]) -> usize;
}
