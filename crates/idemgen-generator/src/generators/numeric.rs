//! Purchase amount generator.
//!
//! Amounts follow a log-normal-like distribution: a standard normal variate
//! is approximated by the Irwin-Hall sum of 12 uniforms minus 6, scaled by
//! [`AMOUNT_LOG_SIGMA`], shifted by [`AMOUNT_LOG_MEAN`] and exponentiated.
//! The result is right-skewed with a median near `e^3` (about 20.09) and is
//! bounded to roughly `[2.46, 164.02]`.

use crate::hash::{tagged_seed, SeedTag};
use crate::rng::{RecordRng, SplitMix64};

/// Mean of the amount's logarithm.
pub const AMOUNT_LOG_MEAN: f64 = 3.0;

/// Standard deviation of the amount's logarithm.
pub const AMOUNT_LOG_SIGMA: f64 = 0.35;

const IRWIN_HALL_TERMS: usize = 12;

/// Amount for the record at `index`, rounded to cents.
pub fn amount_for_index(index: u64) -> f64 {
    let mut rng = SplitMix64::new(tagged_seed(SeedTag::Amount, index));
    let normal = approx_standard_normal(&mut rng);
    round_cents((normal * AMOUNT_LOG_SIGMA + AMOUNT_LOG_MEAN).exp())
}

/// Sum of 12 unit draws minus 6: mean 0, variance 1, support `[-6, 6]`.
pub fn approx_standard_normal<R: RecordRng + ?Sized>(rng: &mut R) -> f64 {
    let mut sum = 0.0;
    for _ in 0..IRWIN_HALL_TERMS {
        sum += rng.next_unit();
    }
    sum - 6.0
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::tests::ScriptedRng;

    #[test]
    fn test_amount_is_deterministic() {
        for index in 0..100 {
            assert_eq!(amount_for_index(index), amount_for_index(index));
        }
    }

    #[test]
    fn test_amount_bounds_and_cents() {
        let min = (AMOUNT_LOG_MEAN - 6.0 * AMOUNT_LOG_SIGMA).exp() - 0.01;
        let max = (AMOUNT_LOG_MEAN + 6.0 * AMOUNT_LOG_SIGMA).exp() + 0.01;
        for index in 0..5000 {
            let amount = amount_for_index(index);
            assert!(amount >= min && amount <= max, "{amount}");
            assert_eq!(round_cents(amount), amount);
        }
    }

    #[test]
    fn test_amount_median_near_e_cubed() {
        let mut amounts: Vec<f64> = (0..2001).map(amount_for_index).collect();
        amounts.sort_by(|a, b| a.total_cmp(b));
        let median = amounts[1000];
        assert!((18.0..22.5).contains(&median), "{median}");
    }

    #[test]
    fn test_approx_standard_normal_midpoint() {
        let mut rng = ScriptedRng::new(&[0.5]);
        assert_eq!(approx_standard_normal(&mut rng), 0.0);
        assert_eq!(rng.consumed(), IRWIN_HALL_TERMS);
    }

    #[test]
    fn test_round_cents() {
        assert_eq!(round_cents(20.085_536), 20.09);
        assert_eq!(round_cents(2.0), 2.0);
    }
}
