//! Uniform and weighted selection from value pools.

use crate::rng::RecordRng;
use idemgen_core::WeightedPool;

/// Pick an index proportionally to `weights`.
///
/// Draws `r = next_unit() * sum(weights)` and walks the weights, subtracting
/// each one from `r`; the first index where `r <= 0` wins. If rounding keeps
/// `r` positive past the end, the last index is returned. Returns `None`
/// only when `weights` is empty.
///
/// A draw of exactly 0.0 picks index 0 even when its weight is zero.
pub fn weighted_index<R, I>(rng: &mut R, weights: I) -> Option<usize>
where
    R: RecordRng + ?Sized,
    I: IntoIterator<Item = u32>,
    I::IntoIter: Clone,
{
    let weights = weights.into_iter();
    let (count, total) = weights
        .clone()
        .fold((0usize, 0u64), |(n, sum), w| (n + 1, sum + u64::from(w)));
    if count == 0 {
        return None;
    }

    let mut r = rng.next_unit() * total as f64;
    for (i, w) in weights.enumerate() {
        r -= f64::from(w);
        if r <= 0.0 {
            return Some(i);
        }
    }
    Some(count - 1)
}

/// Pick one value, uniformly when `weights` is `None` or empty, otherwise
/// proportionally to the parallel `weights`.
///
/// Returns `None` for an empty `values` slice instead of indexing out of range.
pub fn pick<'a, R, T>(rng: &mut R, values: &'a [T], weights: Option<&[u32]>) -> Option<&'a T>
where
    R: RecordRng + ?Sized,
{
    if values.is_empty() {
        return None;
    }

    match weights {
        Some(weights) if !weights.is_empty() => {
            weighted_index(rng, weights.iter().copied()).and_then(|i| values.get(i))
        }
        _ => values.get(rng.next_below(values.len())),
    }
}

/// Pick one value from a configured pool.
pub fn pick_from_pool<'a, R>(rng: &mut R, pool: &'a WeightedPool) -> Option<&'a str>
where
    R: RecordRng + ?Sized,
{
    pick(rng, &pool.values, pool.weights.as_deref()).map(String::as_str)
}
