//! Configuration system for the simulator.
//!
//! This module defines the configuration structures used to parameterize a
//! simulation run. It provides:
//! 1. **Defaults:** Baseline architecture constants (memory size, register count).
//! 2. **Structures:** Hierarchical config for general, memory and register settings.
//! 3. **Validation:** Rejection of configurations the CPU cannot be built from.
//!
//! Configuration is supplied as JSON (`Config::from_json`) or built with
//! `Config::default()`. Every field is optional in JSON.

use serde::Deserialize;
use thiserror::Error;

/// Default configuration constants for the simulator.
mod defaults {
    /// Memory capacity in 32-bit words.
    pub const MEMORY_CAPACITY: usize = 256;

    /// Number of general-purpose registers.
    pub const REGISTER_COUNT: usize = 8;

    /// Largest supported register file.
    pub const MAX_REGISTERS: usize = 32;

    /// Largest supported memory: 16 Mi words (64 MiB of backing storage).
    pub const MAX_CAPACITY: usize = 1 << 24;
}

/// Errors raised while reading or validating a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The JSON document could not be parsed.
    #[error("invalid configuration JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Memory capacity of zero or beyond the supported maximum.
    #[error("memory capacity must be between 1 and {max} words, got {capacity}")]
    Capacity {
        /// Requested capacity.
        capacity: usize,
        /// Largest accepted capacity.
        max: usize,
    },

    /// Register count of zero or beyond the supported maximum.
    #[error("register count must be between 1 and {max}, got {count}")]
    RegisterCount {
        /// Requested register count.
        count: usize,
        /// Largest accepted count.
        max: usize,
    },
}

/// Root configuration structure.
///
/// # Examples
///
/// ```
/// use isasim_core::config::Config;
///
/// let json = r#"{
///     "general": { "trace_instructions": true, "clock_hz": 2 },
///     "memory": { "capacity": 1024 },
///     "registers": { "count": 16, "zero_register": true }
/// }"#;
///
/// let config = Config::from_json(json).unwrap();
/// assert!(config.general.trace_instructions);
/// assert_eq!(config.general.clock_hz, Some(2));
/// assert_eq!(config.memory.capacity, 1024);
/// assert_eq!(config.registers.count, 16);
/// assert!(config.registers.zero_register);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// General simulation settings
    #[serde(default)]
    pub general: GeneralConfig,
    /// Main memory configuration
    #[serde(default)]
    pub memory: MemoryConfig,
    /// Register file configuration
    #[serde(default)]
    pub registers: RegisterConfig,
}

impl Config {
    /// Parses and validates a JSON configuration.
    ///
    /// # Errors
    ///
    /// `ConfigError::Json` on malformed input, otherwise any error from `validate`.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that a CPU can be built from this configuration.
    ///
    /// # Errors
    ///
    /// `ConfigError::Capacity` or `ConfigError::RegisterCount` for out-of-range values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let capacity = self.memory.capacity;
        if capacity == 0 || capacity > defaults::MAX_CAPACITY {
            return Err(ConfigError::Capacity {
                capacity,
                max: defaults::MAX_CAPACITY,
            });
        }
        let count = self.registers.count;
        if count == 0 || count > defaults::MAX_REGISTERS {
            return Err(ConfigError::RegisterCount {
                count,
                max: defaults::MAX_REGISTERS,
            });
        }
        Ok(())
    }
}

/// General simulation settings and options.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeneralConfig {
    /// Log every retired instruction at debug level
    #[serde(default)]
    pub trace_instructions: bool,

    /// Cycle pacing in instructions per second; `None` runs at full speed
    #[serde(default)]
    pub clock_hz: Option<u32>,
}

/// Main memory configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct MemoryConfig {
    /// Capacity in 32-bit words
    #[serde(default = "MemoryConfig::default_capacity")]
    pub capacity: usize,
}

impl MemoryConfig {
    /// Returns the default memory capacity in words.
    fn default_capacity() -> usize {
        defaults::MEMORY_CAPACITY
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            capacity: defaults::MEMORY_CAPACITY,
        }
    }
}

/// Register file configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterConfig {
    /// Number of general-purpose registers
    #[serde(default = "RegisterConfig::default_count")]
    pub count: usize,

    /// Hard-wire `r0` to zero (writes discarded, reads zero)
    #[serde(default)]
    pub zero_register: bool,
}

impl RegisterConfig {
    /// Returns the default register count.
    fn default_count() -> usize {
        defaults::REGISTER_COUNT
    }
}

impl Default for RegisterConfig {
    fn default() -> Self {
        Self {
            count: defaults::REGISTER_COUNT,
            zero_register: false,
        }
    }
}
