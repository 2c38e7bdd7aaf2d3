//! City, channel and point-of-sale generator.

use crate::generator::GeneratorError;
use crate::hash::{tagged_seed, SeedTag};
use crate::rng::SplitMix64;
use crate::sampler::pick_from_pool;
use idemgen_core::Pools;

/// Event fields that do not depend on the profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventFields {
    pub city: String,
    pub channel: String,
    pub point_of_sale: String,
}

/// Event fields for the record at `index`, drawn in the order city,
/// channel, point of sale.
pub fn event_fields(index: u64, pools: &Pools) -> Result<EventFields, GeneratorError> {
    let mut rng = SplitMix64::new(tagged_seed(SeedTag::NonProfile, index));

    let city = pick_from_pool(&mut rng, &pools.cities).ok_or(GeneratorError::EmptyPool("cities"))?;
    let channel =
        pick_from_pool(&mut rng, &pools.channels).ok_or(GeneratorError::EmptyPool("channels"))?;
    let point_of_sale = pick_from_pool(&mut rng, &pools.points_of_sale)
        .ok_or(GeneratorError::EmptyPool("pointsOfSale"))?;

    Ok(EventFields {
        city: city.to_string(),
        channel: channel.to_string(),
        point_of_sale: point_of_sale.to_string(),
    })
}
