//! Frequency bucket classification and variant selection.
//!
//! A profile's bucket depends only on its id, so every record that maps to
//! the same profile sees the same recurrence tier.

use crate::hash::hash_u64;
use crate::rng::{RecordRng, SplitMix64};
use crate::sampler::weighted_index;
use idemgen_core::FrequencyBucket;

/// Mask applied to the record index before hashing it for the variant draw.
pub const VARIANT_MASK: u64 = 0xA5A5_A5A5_A5A5_A5A5;

/// Select the frequency bucket for a profile, proportionally to bucket weights.
///
/// Returns `None` only for an empty bucket list.
pub fn classify(profile_id: u64, buckets: &[FrequencyBucket]) -> Option<&FrequencyBucket> {
    let mut rng = SplitMix64::new(hash_u64(profile_id));
    weighted_index(&mut rng, buckets.iter().map(|b| b.weight)).and_then(|i| buckets.get(i))
}

/// Variant shown by the record at `index`, in `[0, repeat_multiplier)`.
///
/// Multipliers of 0 or 1 always give variant 0 without drawing.
pub fn variant_for_index(index: u64, repeat_multiplier: u32) -> u32 {
    if repeat_multiplier <= 1 {
        return 0;
    }
    let mut rng = SplitMix64::new(hash_u64(index ^ VARIANT_MASK));
    rng.next_below(repeat_multiplier as usize) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_buckets() -> Vec<FrequencyBucket> {
        vec![
            FrequencyBucket::new(90, 1),
            FrequencyBucket::new(8, 3),
            FrequencyBucket::new(2, 10),
        ]
    }

    #[test]
    fn test_classify_is_stable() {
        let buckets = default_buckets();
        for profile_id in 0..1000 {
            let first = classify(profile_id, &buckets).unwrap();
            let second = classify(profile_id, &buckets).unwrap();
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_classify_single_bucket() {
        let buckets = vec![FrequencyBucket::new(1, 5)];
        for profile_id in [0, 1, u64::MAX] {
            assert_eq!(classify(profile_id, &buckets), Some(&buckets[0]));
        }
    }

    #[test]
    fn test_classify_empty() {
        assert_eq!(classify(1, &[]), None);
    }

    #[test]
    fn test_classify_distribution() {
        let buckets = default_buckets();
        let mut counts = [0u32; 3];
        for profile_id in 0..20_000u64 {
            let bucket = classify(profile_id, &buckets).unwrap();
            let i = buckets.iter().position(|b| b == bucket).unwrap();
            counts[i] += 1;
        }
        // Expected 18000 / 1600 / 400.
        assert!((17_600..18_400).contains(&counts[0]), "{counts:?}");
        assert!((1_350..1_850).contains(&counts[1]), "{counts:?}");
        assert!((280..520).contains(&counts[2]), "{counts:?}");
    }

    #[test]
    fn test_variant_for_index_bounds() {
        for index in 0..5000u64 {
            assert_eq!(variant_for_index(index, 0), 0);
            assert_eq!(variant_for_index(index, 1), 0);
            assert!(variant_for_index(index, 3) < 3);
            assert!(variant_for_index(index, 10) < 10);
        }
    }

    #[test]
    fn test_variant_for_index_covers_range() {
        let mut seen = [false; 10];
        for index in 0..1000u64 {
            seen[variant_for_index(index, 10) as usize] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }
}
