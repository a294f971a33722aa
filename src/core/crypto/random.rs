/*!
Random bytes and passphrases from the engine's secure random source.

The `_from` variants take an explicit engine; the others use the
process-wide engine. Callers must serialize access if their engine's random
source is not thread-safe (the OS source used by `SoftwareEngine` is).
*/

use zeroize::{Zeroize, Zeroizing};

use crate::core::crypto::engine::{default_engine, PrimitiveEngine};
use crate::core::crypto::types::config::FacadeConfig;
use crate::core::error::{ErrorKind, Result};

/// Fill `buf` from `engine`'s secure random source.
///
/// A short read wipes `buf` and returns `ResourceUnavailable`.
pub fn fill_random_from<E: PrimitiveEngine + ?Sized>(engine: &E, buf: &mut [u8]) -> Result<()> {
    let count = engine.secure_random(buf);
    if count != buf.len() {
        log::warn!("secure random source returned {} of {} bytes", count, buf.len());
        buf.zeroize();
        return Err(ErrorKind::ResourceUnavailable);
    }
    Ok(())
}

/// Fill `buf` from the process-wide engine
pub fn fill_random(buf: &mut [u8]) -> Result<()> {
    fill_random_from(default_engine(), buf)
}

/// Draw `count` random bytes from `engine`
pub fn random_bytes_from<E: PrimitiveEngine + ?Sized>(engine: &E, count: usize) -> Result<Zeroizing<Vec<u8>>> {
    let mut bytes = Zeroizing::new(vec![0u8; count]);
    fill_random_from(engine, &mut bytes)?;
    Ok(bytes)
}

/// Draw `count` random bytes from the process-wide engine
pub fn random_bytes(count: usize) -> Result<Zeroizing<Vec<u8>>> {
    random_bytes_from(default_engine(), count)
}

/// Generate an uppercase hex passphrase carrying `bits / 8` random bytes.
///
/// The intermediate random bytes are wiped before returning on every path.
pub fn random_passphrase_from<E: PrimitiveEngine + ?Sized>(engine: &E, bits: usize) -> Result<Zeroizing<String>> {
    let mut bytes = random_bytes_from(engine, bits / 8)?;
    let passphrase = Zeroizing::new(hex::encode_upper(&*bytes));
    bytes.zeroize();
    Ok(passphrase)
}

/// Generate a passphrase from the process-wide engine
pub fn random_passphrase(bits: usize) -> Result<Zeroizing<String>> {
    random_passphrase_from(default_engine(), bits)
}

/// Generate a passphrase with the strength set in `config`
pub fn default_passphrase(config: &FacadeConfig) -> Result<Zeroizing<String>> {
    config.validate()?;
    random_passphrase(config.passphrase_bits)
}
