/*!
In-process primitive engine.

Keeps fixed-size descriptor tables the way the backend's global registry
does, and draws randomness from the operating system.
*/

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use once_cell::sync::Lazy;
use rand::rngs::OsRng;
use rand::TryRngCore;

use super::status::{CRYPT_INVALID_ARG, CRYPT_MEM, CRYPT_OK};
use super::PrimitiveEngine;
use crate::core::crypto::descriptors::{CipherDescriptor, HashDescriptor, MathProvider, PrngDescriptor};

/// Slots per descriptor table
pub const TABLE_SIZE: usize = 32;

/// Descriptor tables held by the engine
#[derive(Debug, Default)]
struct Tables {
    math: Option<MathProvider>,
    prngs: Vec<&'static PrngDescriptor>,
    hashes: Vec<&'static HashDescriptor>,
    ciphers: Vec<&'static CipherDescriptor>,
}

/// Engine that keeps its registry in memory
#[derive(Debug, Default)]
pub struct SoftwareEngine {
    tables: RwLock<Tables>,
}

/// Insert into a bounded table, treating an equal descriptor as already present
fn register<T: PartialEq>(table: &mut Vec<&'static T>, name: &str, descriptor: &'static T) -> i32 {
    if name.is_empty() {
        return CRYPT_INVALID_ARG;
    }
    if table.iter().any(|d| *d == descriptor) {
        log::debug!("descriptor '{}' already registered", name);
        return CRYPT_OK;
    }
    if table.len() >= TABLE_SIZE {
        return CRYPT_MEM;
    }

    table.push(descriptor);
    CRYPT_OK
}

impl SoftwareEngine {
    /// Create an engine with empty tables
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, Tables> {
        self.tables.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Tables> {
        self.tables.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Currently selected math provider
    pub fn math_provider(&self) -> Option<MathProvider> {
        self.read().math
    }

    /// Find a registered hash by name
    pub fn find_hash(&self, name: &str) -> Option<&'static HashDescriptor> {
        self.read().hashes.iter().copied().find(|d| d.name == name)
    }

    /// Find a registered cipher by name
    pub fn find_cipher(&self, name: &str) -> Option<&'static CipherDescriptor> {
        self.read().ciphers.iter().copied().find(|d| d.name == name)
    }

    /// Find a registered PRNG by name
    pub fn find_prng(&self, name: &str) -> Option<&'static PrngDescriptor> {
        self.read().prngs.iter().copied().find(|d| d.name == name)
    }

    // List registered descriptors

    pub fn list_hashes(&self) -> Vec<&'static str> {
        self.read().hashes.iter().map(|d| d.name).collect()
    }

    pub fn list_ciphers(&self) -> Vec<&'static str> {
        self.read().ciphers.iter().map(|d| d.name).collect()
    }

    pub fn list_prngs(&self) -> Vec<&'static str> {
        self.read().prngs.iter().map(|d| d.name).collect()
    }
}

impl PrimitiveEngine for SoftwareEngine {
    fn select_math_provider(&self, provider: MathProvider) -> i32 {
        self.write().math = Some(provider);
        CRYPT_OK
    }

    fn register_prng(&self, descriptor: &'static PrngDescriptor) -> i32 {
        register(&mut self.write().prngs, descriptor.name, descriptor)
    }

    fn register_hash(&self, descriptor: &'static HashDescriptor) -> i32 {
        register(&mut self.write().hashes, descriptor.name, descriptor)
    }

    fn register_cipher(&self, descriptor: &'static CipherDescriptor) -> i32 {
        register(&mut self.write().ciphers, descriptor.name, descriptor)
    }

    fn secure_random(&self, buf: &mut [u8]) -> usize {
        match OsRng.try_fill_bytes(buf) {
            Ok(()) => buf.len(),
            Err(e) => {
                log::warn!("OS random source failed: {}", e);
                0
            }
        }
    }
}

// Process-wide engine instance
static DEFAULT_ENGINE: Lazy<SoftwareEngine> = Lazy::new(SoftwareEngine::new);

/// Get the process-wide engine
pub fn default_engine() -> &'static SoftwareEngine {
    &DEFAULT_ENGINE
}
