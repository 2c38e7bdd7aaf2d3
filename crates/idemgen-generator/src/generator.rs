//! Record assembler: the public surface of the generator.

use crate::bucket::{classify, variant_for_index};
use crate::generators::{
    amount_for_index, distort, event_fields, synthesize, timestamp_for_index,
};
use crate::hash::{hash_u64, tagged_seed, SeedTag};
use idemgen_core::{ConfigError, FrequencyBucket, GeneratorConfig, Profile, RawRecord};
use std::iter::FusedIterator;
use tracing::{debug, trace};

/// Error type for generator operations.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A required value pool was empty at draw time
    #[error("Value pool is empty: {0}")]
    EmptyPool(&'static str),
}

/// Stateless generator producing deterministic records by index.
///
/// The generator holds only its validated configuration. Every call
/// derives fresh seeds from its arguments, so `record_by_index` and
/// `profile_by_id` can be called concurrently from any number of threads
/// and in any order, always returning identical results for identical
/// arguments.
#[derive(Debug, Clone)]
pub struct IdempotentGenerator {
    /// Validated configuration, never mutated
    config: GeneratorConfig,
}

impl IdempotentGenerator {
    /// Create a new generator, validating the configuration.
    pub fn new(config: GeneratorConfig) -> Result<Self, GeneratorError> {
        config.validate()?;
        debug!(
            "Created generator: {} profiles, {} buckets, distortions swap={} transliterate={} typo={}",
            config.profile_space_size,
            config.buckets.len(),
            config.distortions.swap_first_last,
            config.distortions.transliterate,
            config.distortions.typo
        );
        Ok(Self { config })
    }

    /// Get a reference to the configuration.
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Profile the record at `index` belongs to.
    pub fn profile_id_for_index(&self, index: u64) -> u64 {
        hash_u64(index) % self.config.profile_space_size
    }

    /// Frequency bucket of a profile.
    pub fn bucket_for_profile(&self, profile_id: u64) -> Result<&FrequencyBucket, GeneratorError> {
        classify(profile_id, &self.config.buckets)
            .ok_or(GeneratorError::Config(ConfigError::NoBuckets))
    }

    /// Build the profile with the given id.
    pub fn profile_by_id(&self, profile_id: u64) -> Result<Profile, GeneratorError> {
        synthesize(profile_id, &self.config)
    }

    /// Build the record at `index`.
    pub fn record_by_index(&self, index: u64) -> Result<RawRecord, GeneratorError> {
        let profile_id = self.profile_id_for_index(index);
        let bucket = self.bucket_for_profile(profile_id)?;
        let variant_index = variant_for_index(index, bucket.repeat_multiplier);

        let profile = synthesize(profile_id, &self.config)?;
        let identity = distort(
            &profile,
            variant_index,
            &self.config.distortions,
            tagged_seed(SeedTag::Record, index),
        );
        let event = event_fields(index, &self.config.pools)?;
        let amount = amount_for_index(index);
        let timestamp = timestamp_for_index(index, &self.config.date_spread)?;

        trace!(
            "Assembled record {} (profile {}, variant {}/{})",
            index,
            profile_id,
            variant_index,
            bucket.repeat_multiplier
        );

        Ok(RawRecord {
            record_index: index,
            profile_id,
            variant_index,
            first_name: identity.first_name,
            last_name: identity.last_name,
            email: identity.email,
            phone: identity.phone,
            login: identity.login,
            point_of_sale: event.point_of_sale,
            city: event.city,
            channel: event.channel,
            amount,
            timestamp,
        })
    }

    /// Lazily generate the records for `[start, start + count)`.
    ///
    /// The range end saturates at `u64::MAX`. The iterator is `Clone`, so a
    /// range can be replayed, and it shares nothing with other iterators.
    pub fn iterate(&self, start: u64, count: u64) -> RecordIter<'_> {
        RecordIter {
            generator: self,
            next: start,
            end: start.saturating_add(count),
        }
    }
}

/// Iterator over the records of a contiguous index range.
#[derive(Debug, Clone)]
pub struct RecordIter<'a> {
    generator: &'a IdempotentGenerator,
    next: u64,
    end: u64,
}

impl RecordIter<'_> {
    /// Number of records not yet produced.
    pub fn remaining(&self) -> u64 {
        self.end - self.next
    }
}

impl Iterator for RecordIter<'_> {
    type Item = Result<RawRecord, GeneratorError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.end {
            return None;
        }

        let index = self.next;
        self.next += 1;
        Some(self.generator.record_by_index(index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::try_from(self.remaining()).unwrap_or(usize::MAX);
        (remaining, Some(remaining))
    }
}

impl DoubleEndedIterator for RecordIter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.next >= self.end {
            return None;
        }

        self.end -= 1;
        Some(self.generator.record_by_index(self.end))
    }
}

impl ExactSizeIterator for RecordIter<'_> {}

impl FusedIterator for RecordIter<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use idemgen_core::{DistortionRates, FrequencyBucket};

    fn test_generator() -> IdempotentGenerator {
        IdempotentGenerator::new(GeneratorConfig::default()).unwrap()
    }

    #[test]
    fn test_generate_single_record() {
        let generator = test_generator();
        let record = generator.record_by_index(0).unwrap();

        assert_eq!(record.record_index, 0);
        assert_eq!(record.profile_id, generator.profile_id_for_index(0));
        assert!(record.profile_id < generator.config().profile_space_size);
        assert!(!record.first_name.is_empty());
        assert!(record.email.contains('@'));
        assert!(record.phone.starts_with('+'));
        assert!(record.amount > 0.0);
    }

    #[test]
    fn test_deterministic_generation() {
        let gen1 = test_generator();
        let gen2 = test_generator();

        for index in [0, 1, 1_000_000, u64::MAX] {
            assert_eq!(
                gen1.record_by_index(index).unwrap(),
                gen2.record_by_index(index).unwrap()
            );
        }
    }

    #[test]
    fn test_variant_bounded_by_bucket() {
        let generator = test_generator();
        for index in 0..2000 {
            let record = generator.record_by_index(index).unwrap();
            let bucket = generator.bucket_for_profile(record.profile_id).unwrap();
            assert!(record.variant_index < bucket.repeat_multiplier.max(1));
        }
    }

    #[test]
    fn test_iterate_matches_record_by_index() {
        let generator = test_generator();
        let records: Vec<_> = generator
            .iterate(10, 5)
            .collect::<Result<_, _>>()
            .unwrap();

        assert_eq!(records.len(), 5);
        for (i, record) in records.iter().enumerate() {
            let index = 10 + i as u64;
            assert_eq!(record.record_index, index);
            assert_eq!(record, &generator.record_by_index(index).unwrap());
        }
    }

    #[test]
    fn test_iterate_is_restartable() {
        let generator = test_generator();
        let iter = generator.iterate(100, 3);
        let replay = iter.clone();

        let first: Vec<_> = iter.map(Result::unwrap).collect();
        let second: Vec<_> = replay.map(Result::unwrap).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_iterate_size_and_reverse() {
        let generator = test_generator();
        let mut iter = generator.iterate(0, 4);
        assert_eq!(iter.len(), 4);

        let last = iter.next_back().unwrap().unwrap();
        assert_eq!(last.record_index, 3);
        assert_eq!(iter.len(), 3);

        let indices: Vec<_> = iter.rev().map(|r| r.unwrap().record_index).collect();
        assert_eq!(indices, vec![2, 1, 0]);
    }

    #[test]
    fn test_iterate_empty_and_saturating() {
        let generator = test_generator();
        assert_eq!(generator.iterate(5, 0).count(), 0);

        let iter = generator.iterate(u64::MAX - 1, 10);
        assert_eq!(iter.remaining(), 1);
        let records: Vec<_> = iter.map(Result::unwrap).collect();
        assert_eq!(records[0].record_index, u64::MAX - 1);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = GeneratorConfig::default().with_profile_space_size(0);
        assert!(matches!(
            IdempotentGenerator::new(config),
            Err(GeneratorError::Config(ConfigError::ZeroProfileSpace))
        ));

        let config = GeneratorConfig::default().with_buckets(vec![FrequencyBucket::new(0, 2)]);
        assert!(matches!(
            IdempotentGenerator::new(config),
            Err(GeneratorError::Config(ConfigError::ZeroBucketWeight))
        ));
    }

    #[test]
    fn test_disabled_distortions_keep_profile_names() {
        let config = GeneratorConfig::default().with_distortions(DistortionRates::DISABLED);
        let generator = IdempotentGenerator::new(config).unwrap();

        for index in 0..200 {
            let record = generator.record_by_index(index).unwrap();
            let profile = generator.profile_by_id(record.profile_id).unwrap();
            assert!(!record.is_distorted_from(&profile));
            assert!(profile.emails.contains(&record.email));
            assert!(profile.phones.contains(&record.phone));
            assert!(profile.logins.contains(&record.login));
        }
    }
}
