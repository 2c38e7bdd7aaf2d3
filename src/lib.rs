//! idemgen: deterministic synthetic records addressable by index.
//!
//! Given only a record index, idemgen computes a complete synthetic record
//! (a person-like identity attached to a purchase-like event) without
//! storing anything. The same index always yields the same record, so record
//! spaces of 10^12 profiles can be treated as arrays computed on demand.
//!
//! This crate re-exports the public surface of the workspace:
//!
//! - [`idemgen_core`] - configuration, profiles and records
//! - [`idemgen_generator`] - the [`IdempotentGenerator`] and its building blocks
//!
//! # Example
//!
//! ```rust
//! use idemgen::{GeneratorConfig, IdempotentGenerator};
//!
//! let config = GeneratorConfig::default().with_profile_space_size(1_000_000);
//! let generator = IdempotentGenerator::new(config).unwrap();
//!
//! let records: Vec<_> = generator
//!     .iterate(0, 10)
//!     .collect::<Result<_, _>>()
//!     .unwrap();
//! assert_eq!(records.len(), 10);
//! assert_eq!(records[3], generator.record_by_index(3).unwrap());
//! ```

pub use idemgen_core::{
    ConfigError, DateSpread, DistortionRates, FrequencyBucket, GeneratorConfig, LocaleConfig,
    Pools, Profile, RawRecord, WeightedPool,
};
pub use idemgen_generator::{
    GeneratorError, IdempotentGenerator, RecordIter, RecordRng, SplitMix64,
};
