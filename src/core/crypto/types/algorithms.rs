/*!
Algorithm identifiers.

Both enums are closed: numeric ids outside the set do not convert, and the
lookups that accept raw ids treat them as unsupported.
*/

use crate::core::error::ErrorKind;

/// Supported hash algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-support", derive(serde::Serialize, serde::Deserialize))]
#[repr(u32)]
pub enum HashAlgorithm {
    Md5 = 1,
    Sha1 = 2,
    Sha224 = 3,
    Sha256 = 4,
    Sha384 = 5,
    Sha512 = 6,
    Skein256 = 7,
    Skein512 = 8,
    Skein1024 = 9,
    /// SHA-512 truncated to 256 bits
    Sha512_256 = 10,
}

impl HashAlgorithm {
    /// Every supported hash algorithm
    pub const ALL: [HashAlgorithm; 10] = [
        HashAlgorithm::Md5,
        HashAlgorithm::Sha1,
        HashAlgorithm::Sha224,
        HashAlgorithm::Sha256,
        HashAlgorithm::Sha384,
        HashAlgorithm::Sha512,
        HashAlgorithm::Skein256,
        HashAlgorithm::Skein512,
        HashAlgorithm::Skein1024,
        HashAlgorithm::Sha512_256,
    ];

    /// Numeric id of the algorithm
    pub fn id(self) -> u32 {
        self as u32
    }

    /// Get the name of the algorithm as a string
    pub fn name(self) -> &'static str {
        match self {
            HashAlgorithm::Md5 => "MD5",
            HashAlgorithm::Sha1 => "SHA-1",
            HashAlgorithm::Sha224 => "SHA-224",
            HashAlgorithm::Sha256 => "SHA-256",
            HashAlgorithm::Sha384 => "SHA-384",
            HashAlgorithm::Sha512 => "SHA-512",
            HashAlgorithm::Skein256 => "Skein-256",
            HashAlgorithm::Skein512 => "Skein-512",
            HashAlgorithm::Skein1024 => "Skein-1024",
            HashAlgorithm::Sha512_256 => "SHA-512/256",
        }
    }

    /// Digest size in bytes
    pub fn digest_size(self) -> usize {
        self.descriptor().digest_size
    }
}

impl TryFrom<u32> for HashAlgorithm {
    type Error = ErrorKind;

    fn try_from(id: u32) -> Result<Self, Self::Error> {
        HashAlgorithm::ALL
            .into_iter()
            .find(|alg| alg.id() == id)
            .ok_or(ErrorKind::BadHashId)
    }
}

/// Supported cipher algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-support", derive(serde::Serialize, serde::Deserialize))]
#[repr(u32)]
pub enum CipherAlgorithm {
    Aes128 = 1,
    Aes192 = 2,
    Aes256 = 3,
    /// Twofish with a 256-bit key
    Twofish256 = 4,
    /// Threefish wide-block variants
    Threefish256 = 5,
    Threefish512 = 6,
    Threefish1024 = 7,
}

impl CipherAlgorithm {
    /// Every supported cipher algorithm
    pub const ALL: [CipherAlgorithm; 7] = [
        CipherAlgorithm::Aes128,
        CipherAlgorithm::Aes192,
        CipherAlgorithm::Aes256,
        CipherAlgorithm::Twofish256,
        CipherAlgorithm::Threefish256,
        CipherAlgorithm::Threefish512,
        CipherAlgorithm::Threefish1024,
    ];

    /// Numeric id of the algorithm
    pub fn id(self) -> u32 {
        self as u32
    }

    /// Get the name of the algorithm as a string
    pub fn name(self) -> &'static str {
        match self {
            CipherAlgorithm::Aes128 => "AES-128",
            CipherAlgorithm::Aes192 => "AES-192",
            CipherAlgorithm::Aes256 => "AES-256",
            CipherAlgorithm::Twofish256 => "Twofish-256",
            CipherAlgorithm::Threefish256 => "Threefish-256",
            CipherAlgorithm::Threefish512 => "Threefish-512",
            CipherAlgorithm::Threefish1024 => "Threefish-1024",
        }
    }

    /// Key size in bits
    pub fn key_size_bits(self) -> usize {
        match self {
            CipherAlgorithm::Aes128 => 128,
            CipherAlgorithm::Aes192 => 192,
            CipherAlgorithm::Aes256 => 256,
            CipherAlgorithm::Twofish256 => 256,
            CipherAlgorithm::Threefish256 => 256,
            CipherAlgorithm::Threefish512 => 512,
            CipherAlgorithm::Threefish1024 => 1024,
        }
    }

    /// Key size in bytes
    pub fn key_size_bytes(self) -> usize {
        self.key_size_bits() >> 3
    }
}

impl TryFrom<u32> for CipherAlgorithm {
    type Error = ErrorKind;

    fn try_from(id: u32) -> Result<Self, Self::Error> {
        CipherAlgorithm::ALL
            .into_iter()
            .find(|alg| alg.id() == id)
            .ok_or(ErrorKind::BadCipherId)
    }
}

/// Key size in bits for a raw cipher id.
///
/// Ids outside the supported set yield `ResourceUnavailable`.
pub fn key_size_bits(cipher_id: u32) -> Result<usize, ErrorKind> {
    CipherAlgorithm::try_from(cipher_id)
        .map(CipherAlgorithm::key_size_bits)
        .map_err(|_| ErrorKind::ResourceUnavailable)
}

/// Key size in bytes for a raw cipher id
pub fn key_size_bytes(cipher_id: u32) -> Result<usize, ErrorKind> {
    key_size_bits(cipher_id).map(|bits| bits >> 3)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_id_roundtrip() {
        for alg in HashAlgorithm::ALL {
            assert_eq!(HashAlgorithm::try_from(alg.id()), Ok(alg));
        }
        assert_eq!(HashAlgorithm::try_from(0), Err(ErrorKind::BadHashId));
        assert_eq!(HashAlgorithm::try_from(11), Err(ErrorKind::BadHashId));
    }

    #[test]
    fn test_cipher_key_sizes() {
        assert_eq!(CipherAlgorithm::Aes192.key_size_bits(), 192);
        assert_eq!(CipherAlgorithm::Threefish1024.key_size_bytes(), 128);
        assert_eq!(CipherAlgorithm::try_from(8), Err(ErrorKind::BadCipherId));
    }

    #[test]
    fn test_key_size_for_raw_ids() {
        assert_eq!(key_size_bits(CipherAlgorithm::Twofish256.id()), Ok(256));
        assert_eq!(key_size_bytes(CipherAlgorithm::Aes128.id()), Ok(16));
        assert_eq!(key_size_bits(0), Err(ErrorKind::ResourceUnavailable));
        assert_eq!(key_size_bytes(99), Err(ErrorKind::ResourceUnavailable));
    }

    #[test]
    fn test_digest_sizes() {
        assert_eq!(HashAlgorithm::Sha512_256.digest_size(), 32);
        assert_eq!(HashAlgorithm::Skein1024.digest_size(), 128);
        assert_eq!(HashAlgorithm::Md5.digest_size(), 16);
    }
}
