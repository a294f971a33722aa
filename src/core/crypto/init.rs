/*!
One-time engine initialization.

Selects the math provider, then registers the PRNG, every supported hash and
every supported cipher, in that order. The sequence stops at the first
failing step; registrations already made stay in place.

# Preconditions

`initialize` must run before any other facade operation, and callers must
serialize it themselves. Running it again is only safe if the engine
tolerates repeated registration, which [`SoftwareEngine`] does.

[`SoftwareEngine`]: crate::core::crypto::engine::SoftwareEngine
*/

use std::sync::atomic::{AtomicBool, Ordering};

use crate::core::crypto::descriptors::{MathProvider, REGISTERED_CIPHERS, REGISTERED_HASHES, SPRNG_DESC};
use crate::core::crypto::engine::{default_engine, PrimitiveEngine};
use crate::core::crypto::types::config::FacadeConfig;
use crate::core::error::Result;
use crate::core::error_map::check_status;

static INITIALIZED: AtomicBool = AtomicBool::new(false);

/// Registration state of the process-wide engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    Uninitialized,
    Initialized,
}

/// Current registration state of the process-wide engine
pub fn engine_state() -> EngineState {
    if INITIALIZED.load(Ordering::Acquire) {
        EngineState::Initialized
    } else {
        EngineState::Uninitialized
    }
}

/// Check if the process-wide engine has been initialized
pub fn is_initialized() -> bool {
    engine_state() == EngineState::Initialized
}

/// Run the registration sequence against `engine`.
///
/// Does not touch the process-wide registration state.
pub fn initialize_engine<E: PrimitiveEngine + ?Sized>(engine: &E, provider: MathProvider) -> Result<()> {
    check_status(engine.select_math_provider(provider))
        .inspect_err(|e| log::warn!("selecting math provider {} failed: {}", provider.name(), e))?;

    check_status(engine.register_prng(&SPRNG_DESC))
        .inspect_err(|e| log::warn!("registering prng '{}' failed: {}", SPRNG_DESC.name, e))?;
    log::debug!("registered prng '{}'", SPRNG_DESC.name);

    for desc in REGISTERED_HASHES {
        check_status(engine.register_hash(desc))
            .inspect_err(|e| log::warn!("registering hash '{}' failed: {}", desc.name, e))?;
        log::debug!("registered hash '{}'", desc.name);
    }

    for desc in REGISTERED_CIPHERS {
        check_status(engine.register_cipher(desc))
            .inspect_err(|e| log::warn!("registering cipher '{}' failed: {}", desc.name, e))?;
        log::debug!("registered cipher '{}'", desc.name);
    }

    Ok(())
}

/// Initialize the process-wide engine with the given configuration
pub fn initialize_with_config(config: &FacadeConfig) -> Result<()> {
    config.validate()?;
    initialize_engine(default_engine(), config.math_provider)?;

    INITIALIZED.store(true, Ordering::Release);
    log::info!(
        "engine initialized: {} hashes, {} ciphers, math provider {}",
        REGISTERED_HASHES.len(),
        REGISTERED_CIPHERS.len(),
        config.math_provider.name()
    );
    Ok(())
}

/// Initialize the process-wide engine with the default configuration
pub fn initialize() -> Result<()> {
    initialize_with_config(&FacadeConfig::default())
}
