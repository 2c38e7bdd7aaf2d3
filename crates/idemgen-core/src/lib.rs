//! Core types for the idemgen record generator.
//!
//! This crate provides the foundational types shared by the generator and
//! by anything that consumes its output:
//!
//! - [`GeneratorConfig`] - Immutable configuration, loadable from YAML or JSON
//! - [`FrequencyBucket`] - Profile recurrence tiers
//! - [`DistortionRates`] - Name corruption probabilities
//! - [`Profile`] - Synthetic identity derived from a profile id
//! - [`RawRecord`] - One generated record, addressed by its index
//!
//! # Architecture
//!
//! ```text
//! idemgen-core (this crate)
//!    │
//!    └─── idemgen-generator  (derives profiles and records from the config)
//! ```
//!
//! # Example
//!
//! ```rust
//! use idemgen_core::GeneratorConfig;
//!
//! let config = GeneratorConfig::from_yaml(r#"
//! profileSpaceSize: 1000
//! distortions:
//!   swapFirstLast: 0.1
//!   transliterate: 0.0
//!   typo: 0.0
//! "#).unwrap();
//!
//! config.validate().unwrap();
//! assert_eq!(config.profile_space_size, 1000);
//! ```

pub mod schema;
pub mod values;

// Re-exports for convenience
pub use schema::{
    ConfigError, DateSpread, DistortionRates, FrequencyBucket, GeneratorConfig, LocaleConfig,
    Pools, WeightedPool,
};
pub use values::{Profile, RawRecord};
