/*!
Raw status codes returned by the primitive engine.

These follow the libtomcrypt `CRYPT_*` numbering. Only the codes the error
map knows about translate into a specific [`ErrorKind`](crate::ErrorKind);
everything else maps to `Unknown`.
*/

/// Result OK
pub const CRYPT_OK: i32 = 0;
/// Generic error
pub const CRYPT_ERROR: i32 = 1;
/// Not a failure but no operation was performed
pub const CRYPT_NOP: i32 = 2;
/// Invalid key size given
pub const CRYPT_INVALID_KEYSIZE: i32 = 3;
/// Invalid number of rounds
pub const CRYPT_INVALID_ROUNDS: i32 = 4;
/// Algorithm failed its test vectors
pub const CRYPT_FAIL_TESTVECTOR: i32 = 5;
/// Not enough space for output
pub const CRYPT_BUFFER_OVERFLOW: i32 = 6;
/// Invalid input packet
pub const CRYPT_INVALID_PACKET: i32 = 7;
/// Invalid number of bits for a PRNG
pub const CRYPT_INVALID_PRNGSIZE: i32 = 8;
/// Could not read enough from the PRNG
pub const CRYPT_ERROR_READPRNG: i32 = 9;
/// Invalid cipher specified
pub const CRYPT_INVALID_CIPHER: i32 = 10;
/// Invalid hash specified
pub const CRYPT_INVALID_HASH: i32 = 11;
/// Invalid PRNG specified
pub const CRYPT_INVALID_PRNG: i32 = 12;
/// Out of memory
pub const CRYPT_MEM: i32 = 13;
/// Not equivalent types of PK keys
pub const CRYPT_PK_TYPE_MISMATCH: i32 = 14;
/// Requires a private PK key
pub const CRYPT_PK_NOT_PRIVATE: i32 = 15;
/// Generic invalid argument
pub const CRYPT_INVALID_ARG: i32 = 16;
/// File not found
pub const CRYPT_FILE_NOTFOUND: i32 = 17;
