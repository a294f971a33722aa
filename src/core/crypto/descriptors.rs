/*!
Engine descriptors for every supported algorithm.

A descriptor is the handle the engine uses to identify one concrete
implementation. The facade only passes them around; it never looks inside
beyond the name and sizes.
*/

use crate::core::crypto::types::algorithms::{CipherAlgorithm, HashAlgorithm};

/// Descriptor for a hash implementation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashDescriptor {
    /// Name the engine registers the hash under
    pub name: &'static str,
    /// Digest size in bytes
    pub digest_size: usize,
    /// Input block size in bytes
    pub block_size: usize,
}

/// Descriptor for a block cipher implementation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CipherDescriptor {
    pub name: &'static str,
    /// Smallest accepted key in bytes
    pub min_key_length: usize,
    /// Largest accepted key in bytes
    pub max_key_length: usize,
    pub block_length: usize,
    pub default_rounds: usize,
}

/// Descriptor for a pseudo-random number generator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrngDescriptor {
    pub name: &'static str,
    /// Size of the exported state in bytes, zero if the PRNG has none
    pub export_size: usize,
}

/// Big-number providers the engine can be pointed at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde-support", derive(serde::Serialize, serde::Deserialize))]
pub enum MathProvider {
    #[default]
    TomMath,
    TomsFastMath,
    Gmp,
}

impl MathProvider {
    /// Get the name of the provider as a string
    pub fn name(self) -> &'static str {
        match self {
            MathProvider::TomMath => "LibTomMath",
            MathProvider::TomsFastMath => "TomsFastMath",
            MathProvider::Gmp => "GNU MP",
        }
    }
}

const fn hash(name: &'static str, digest_size: usize, block_size: usize) -> HashDescriptor {
    HashDescriptor { name, digest_size, block_size }
}

pub static MD5_DESC: HashDescriptor = hash("md5", 16, 64);
pub static SHA1_DESC: HashDescriptor = hash("sha1", 20, 64);
pub static SHA224_DESC: HashDescriptor = hash("sha224", 28, 64);
pub static SHA256_DESC: HashDescriptor = hash("sha256", 32, 64);
pub static SHA384_DESC: HashDescriptor = hash("sha384", 48, 128);
pub static SHA512_DESC: HashDescriptor = hash("sha512", 64, 128);
pub static SHA512_256_DESC: HashDescriptor = hash("sha512-256", 32, 128);
pub static SKEIN256_DESC: HashDescriptor = hash("skein256", 32, 32);
pub static SKEIN512_DESC: HashDescriptor = hash("skein512", 64, 64);
pub static SKEIN1024_DESC: HashDescriptor = hash("skein1024", 128, 128);

pub static AES_DESC: CipherDescriptor = CipherDescriptor {
    name: "aes",
    min_key_length: 16,
    max_key_length: 32,
    block_length: 16,
    default_rounds: 10,
};

pub static TWOFISH_DESC: CipherDescriptor = CipherDescriptor {
    name: "twofish",
    min_key_length: 16,
    max_key_length: 32,
    block_length: 16,
    default_rounds: 16,
};

/// System PRNG backed by the engine's secure random source
pub static SPRNG_DESC: PrngDescriptor = PrngDescriptor {
    name: "sprng",
    export_size: 0,
};

/// Hashes registered at initialization, in registration order
pub static REGISTERED_HASHES: [&HashDescriptor; 10] = [
    &MD5_DESC,
    &SHA1_DESC,
    &SHA256_DESC,
    &SHA384_DESC,
    &SHA512_DESC,
    &SHA224_DESC,
    &SKEIN256_DESC,
    &SKEIN512_DESC,
    &SKEIN1024_DESC,
    &SHA512_256_DESC,
];

/// Ciphers registered at initialization, in registration order
pub static REGISTERED_CIPHERS: [&CipherDescriptor; 2] = [&AES_DESC, &TWOFISH_DESC];

impl HashAlgorithm {
    /// Engine descriptor for this algorithm
    pub fn descriptor(self) -> &'static HashDescriptor {
        match self {
            HashAlgorithm::Md5 => &MD5_DESC,
            HashAlgorithm::Sha1 => &SHA1_DESC,
            HashAlgorithm::Sha224 => &SHA224_DESC,
            HashAlgorithm::Sha256 => &SHA256_DESC,
            HashAlgorithm::Sha384 => &SHA384_DESC,
            HashAlgorithm::Sha512_256 => &SHA512_256_DESC,
            HashAlgorithm::Sha512 => &SHA512_DESC,
            HashAlgorithm::Skein256 => &SKEIN256_DESC,
            HashAlgorithm::Skein512 => &SKEIN512_DESC,
            HashAlgorithm::Skein1024 => &SKEIN1024_DESC,
        }
    }
}

/// Look up the engine descriptor for a raw hash id.
///
/// Ids outside the supported set return `None`.
pub fn descriptor_for(hash_id: u32) -> Option<&'static HashDescriptor> {
    HashAlgorithm::try_from(hash_id).ok().map(HashAlgorithm::descriptor)
}

/// Engine descriptor for a cipher, if the engine registers one for it.
///
/// Threefish is a tweakable cipher and has no block cipher descriptor.
pub fn cipher_descriptor_for(algorithm: CipherAlgorithm) -> Option<&'static CipherDescriptor> {
    match algorithm {
        CipherAlgorithm::Aes128 | CipherAlgorithm::Aes192 | CipherAlgorithm::Aes256 => Some(&AES_DESC),
        CipherAlgorithm::Twofish256 => Some(&TWOFISH_DESC),
        CipherAlgorithm::Threefish256
        | CipherAlgorithm::Threefish512
        | CipherAlgorithm::Threefish1024 => None,
    }
}
