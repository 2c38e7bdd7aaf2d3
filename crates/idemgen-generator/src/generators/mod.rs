//! Field generators for profiles and records.
//!
//! Each generator derives its own seed from a tagged key and builds a
//! throwaway [`SplitMix64`](crate::rng::SplitMix64), so generators never
//! share random state and can run in any order.
//!
//! - [`profile`] - profile synthesis keyed by profile id
//! - [`distort`] - name distortion keyed by record seed and variant
//! - [`event`] - city, channel, point of sale keyed by record index
//! - [`numeric`] - purchase amount keyed by record index
//! - [`timestamp`] - event time keyed by record index

pub mod distort;
pub mod event;
pub mod numeric;
pub mod profile;
pub mod timestamp;

pub use distort::{distort, DistortedFields};
pub use event::{event_fields, EventFields};
pub use numeric::amount_for_index;
pub use profile::synthesize;
pub use timestamp::timestamp_for_index;
