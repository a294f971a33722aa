/*!
Facade configuration.

Selects the engine's math provider and the default passphrase strength.
*/

use crate::core::crypto::descriptors::MathProvider;
use crate::core::error::{ErrorKind, Result};

/// Default passphrase strength in bits
pub const DEFAULT_PASSPHRASE_BITS: usize = 128;

/// Configuration applied at initialization
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde-support", derive(serde::Serialize, serde::Deserialize))]
pub struct FacadeConfig {
    /// Big-number provider selected before any registration
    pub math_provider: MathProvider,
    /// Strength of passphrases produced by `default_passphrase`
    pub passphrase_bits: usize,
}

impl Default for FacadeConfig {
    fn default() -> Self {
        Self {
            math_provider: MathProvider::default(),
            passphrase_bits: DEFAULT_PASSPHRASE_BITS,
        }
    }
}

impl FacadeConfig {
    /// Create a new configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different math provider
    pub fn with_math_provider(mut self, provider: MathProvider) -> Self {
        self.math_provider = provider;
        self
    }

    /// Use a different passphrase strength
    pub fn with_passphrase_bits(mut self, bits: usize) -> Self {
        self.passphrase_bits = bits;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.passphrase_bits == 0 || self.passphrase_bits % 8 != 0 {
            return Err(ErrorKind::BadParams);
        }
        Ok(())
    }
}
