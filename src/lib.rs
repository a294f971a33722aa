/*!
# Crypto Facade

A thin layer over a cryptographic primitives engine.

## Overview

This library does not implement any cryptography itself. It provides:

- One-time registration of the supported PRNG, hash and cipher descriptors
- Translation of the engine's numeric status codes into [`ErrorKind`]
- Human-readable descriptions for every [`ErrorKind`]
- Hash descriptor and cipher key size lookup
- Random bytes and hex passphrases from the engine's secure random source

## Usage

```
use cryptofacade::{describe, initialize, key_size_bits, random_passphrase, CipherAlgorithm, ErrorKind};

initialize()?;

assert_eq!(key_size_bits(CipherAlgorithm::Aes256.id())?, 256);

let phrase = random_passphrase(128)?;
assert_eq!(phrase.len(), 32);

let mut buf = [0u8; 64];
let written = describe(ErrorKind::BadParams, &mut buf)?;
assert_eq!(&buf[..written - 1], b"Invalid argument provided.");
# Ok::<(), ErrorKind>(())
```

`initialize` must run once, before anything else, and callers are
responsible for serializing it.
*/

// Core facade components
pub mod core;

// Re-export commonly used types for convenience
pub use crate::core::error::{ErrorKind, Result};
pub use crate::core::error_map::{check_status, describe, description, map_backend_code, ErrorMapEntry, ERROR_MAP};
pub use crate::core::crypto::engine::status;

// Re-export registry and utilities
pub use crate::core::crypto::{
    cipher_descriptor_for, default_engine, default_passphrase, descriptor_for, engine_state,
    fill_random, fill_random_from, initialize, initialize_engine, initialize_with_config,
    is_initialized, key_size_bits, key_size_bytes, random_bytes, random_bytes_from,
    random_passphrase, random_passphrase_from, CipherAlgorithm, CipherDescriptor, EngineState,
    FacadeConfig, HashAlgorithm, HashDescriptor, MathProvider, PrimitiveEngine, PrngDescriptor,
    SoftwareEngine,
};
