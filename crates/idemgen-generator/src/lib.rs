//! Deterministic record generator for idemgen.
//!
//! This crate provides the [`IdempotentGenerator`], which computes a complete
//! synthetic record from nothing but its index. There is no stored state and
//! no shared random stream: every derivation seeds a fresh generator from a
//! hash of a tagged key, so the same index always yields the same record, in
//! any order and from any thread.
//!
//! # Architecture
//!
//! ```text
//! index ──hash──▶ profile id ──classify──▶ bucket ──▶ variant index
//!                     │                                   │
//!                     ▼                                   ▼
//!              profile synthesis ─────────────────▶ distortion
//!                                                         │
//! index ──▶ city / channel / POS, amount, timestamp ──────┤
//!                                                         ▼
//!                                                     RawRecord
//! ```
//!
//! # Example
//!
//! ```rust
//! use idemgen_core::GeneratorConfig;
//! use idemgen_generator::IdempotentGenerator;
//!
//! let generator = IdempotentGenerator::new(GeneratorConfig::default()).unwrap();
//!
//! let record = generator.record_by_index(42).unwrap();
//! assert_eq!(record, generator.record_by_index(42).unwrap());
//!
//! let profile = generator.profile_by_id(record.profile_id).unwrap();
//! assert_eq!(profile.profile_id, record.profile_id);
//!
//! for record in generator.iterate(0, 3) {
//!     println!("{:?}", record.unwrap());
//! }
//! ```
//!
//! # Seeds
//!
//! | Derivation | Seed |
//! |---|---|
//! | profile id | `fnv1a64(index as 8 LE bytes) % profile_space_size` |
//! | bucket | `fnv1a64(profile_id as 8 LE bytes)` |
//! | variant | `fnv1a64((index ^ 0xA5A5A5A5A5A5A5A5) as 8 LE bytes)` |
//! | profile | `fnv1a64("profile:{id}")` |
//! | email `i` | `fnv1a64("email:{id}") + i` |
//! | distortion | `fnv1a64("rec:{index}") + variant` |
//! | city, channel, POS | `fnv1a64("np:{index}")` |
//! | amount | `fnv1a64("amt:{index}")` |
//! | timestamp | `fnv1a64("time:{index}") % span_ms` (no generator) |

pub mod bucket;
pub mod generator;
pub mod generators;
pub mod hash;
pub mod rng;
pub mod sampler;

// Re-exports for convenience
pub use generator::{GeneratorError, IdempotentGenerator, RecordIter};
pub use rng::{RecordRng, SplitMix64};
