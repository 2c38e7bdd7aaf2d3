//! Profile synthesis.
//!
//! A profile is rebuilt from scratch by every record that maps to it, so the
//! draw order below is part of the output contract: moving a draw changes
//! every profile.

use crate::generator::GeneratorError;
use crate::hash::{tagged_seed, SeedTag};
use crate::rng::{RecordRng, SplitMix64};
use crate::sampler::pick_from_pool;
use idemgen_core::{GeneratorConfig, Profile};
use rand::RngCore;

/// Email domains, sampled uniformly.
pub const EMAIL_DOMAINS: [&str; 5] = [
    "gmail.com",
    "mail.ru",
    "yahoo.com",
    "outlook.com",
    "yandex.ru",
];

const PRIMARY_COUNTRY_CODE: &str = "+7";
const SECONDARY_COUNTRY_CODE: &str = "+48";

const MAX_PHONES: usize = 3;
const MAX_EMAILS: usize = 5;
const MAX_LOGINS: usize = 2;

/// Build the profile for `profile_id`.
pub fn synthesize(profile_id: u64, config: &GeneratorConfig) -> Result<Profile, GeneratorError> {
    let mut rng = SplitMix64::new(tagged_seed(SeedTag::Profile, profile_id));

    let first_name = pick_from_pool(&mut rng, &config.pools.first_names)
        .ok_or(GeneratorError::EmptyPool("firstNames"))?
        .to_string();
    let last_name = pick_from_pool(&mut rng, &config.pools.last_names)
        .ok_or(GeneratorError::EmptyPool("lastNames"))?
        .to_string();

    let locale = if rng.chance(config.locales.secondary_probability) {
        config.locales.secondary.clone()
    } else {
        config.locales.primary.clone()
    };

    let phone_count = 1 + rng.next_below(MAX_PHONES);
    let email_count = 1 + rng.next_below(MAX_EMAILS);
    let login_count = 1 + rng.next_below(MAX_LOGINS);

    let phones = (0..phone_count).map(|_| phone_number(&mut rng)).collect();
    let emails = (0..email_count)
        .map(|i| email_address(profile_id, i as u64, &first_name, &last_name))
        .collect();
    let logins = (0..login_count)
        .map(|_| login_name(&mut rng, &first_name, &last_name))
        .collect();

    Ok(Profile {
        profile_id,
        first_name,
        last_name,
        phones,
        emails,
        logins,
        locale,
    })
}

/// Nine-digit national number, then the country-code draw.
fn phone_number<R: RecordRng + ?Sized>(rng: &mut R) -> String {
    let national = rng.next_u64() % 1_000_000_000;
    let country_code = if rng.chance(0.5) {
        SECONDARY_COUNTRY_CODE
    } else {
        PRIMARY_COUNTRY_CODE
    };
    format!("{country_code}{national:09}")
}

/// Email number `ordinal` of a profile.
///
/// Each email has its own generator, so changing the email count never
/// changes the emails already produced.
fn email_address(profile_id: u64, ordinal: u64, first_name: &str, last_name: &str) -> String {
    let seed = tagged_seed(SeedTag::Email, profile_id).wrapping_add(ordinal);
    let mut rng = SplitMix64::new(seed);

    let local = email_local_part(first_name, last_name);
    let salt = rng.next_u64() % 10_000;
    let domain = EMAIL_DOMAINS[rng.next_below(EMAIL_DOMAINS.len())];
    format!("{local}{salt:04}@{domain}")
}

/// `first.last`, lower-cased, keeping only `a-z`, `а-я`, `.` and `-`.
pub fn email_local_part(first_name: &str, last_name: &str) -> String {
    format!("{first_name}.{last_name}")
        .to_lowercase()
        .chars()
        .filter(|&c| c.is_ascii_lowercase() || ('а'..='я').contains(&c) || c == '.' || c == '-')
        .collect()
}

fn login_name<R: RecordRng + ?Sized>(rng: &mut R, first_name: &str, last_name: &str) -> String {
    let number = rng.next_u64() % 10_000;
    let login = match first_name.chars().next() {
        Some(initial) => format!("{initial}{last_name}{number:04}"),
        None => format!("u{last_name}{number:04}"),
    };
    login.to_lowercase()
}
