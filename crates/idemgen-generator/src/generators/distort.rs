//! Name distortion and per-record identity field selection.
//!
//! Models real-world data noise: a record may show its profile's names
//! swapped, transliterated to Latin, or with a single-character typo. The
//! gates are applied in a fixed order from one generator seeded by the
//! record seed plus the variant index, so a given `(record, variant)` pair
//! always shows the same noise.

use crate::rng::{RecordRng, SplitMix64};
use crate::sampler::pick;
use idemgen_core::{DistortionRates, Profile};

/// Email used when a profile has no emails.
pub const FALLBACK_EMAIL: &str = "default@example.com";
/// Phone used when a profile has no phones.
pub const FALLBACK_PHONE: &str = "+7000000000";
/// Login used when a profile has no logins.
pub const FALLBACK_LOGIN: &str = "defaultuser";

const TYPO_ALPHABET: &[u8; 26] = b"abcdefghijklmnopqrstuvwxyz";

/// Identity fields of one record after distortion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistortedFields {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub login: String,
}

/// Kinds of single-character typo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypoKind {
    Delete,
    Insert,
    Replace,
}

impl TypoKind {
    /// All kinds, in draw order.
    pub const ALL: [TypoKind; 3] = [TypoKind::Delete, TypoKind::Insert, TypoKind::Replace];
}

/// Apply the distortion gates to `profile` and pick its email, phone and login.
pub fn distort(
    profile: &Profile,
    variant_index: u32,
    rates: &DistortionRates,
    record_seed: u64,
) -> DistortedFields {
    let mut rng = SplitMix64::new(record_seed.wrapping_add(u64::from(variant_index)));

    let mut first_name = profile.first_name.clone();
    let mut last_name = profile.last_name.clone();

    if rng.chance(clamp01(rates.swap_first_last)) {
        std::mem::swap(&mut first_name, &mut last_name);
    }
    if rng.chance(clamp01(rates.transliterate)) {
        first_name = transliterate(&first_name);
        last_name = transliterate(&last_name);
    }
    if rng.chance(clamp01(rates.typo)) {
        first_name = random_typo(&mut rng, &first_name);
    }
    if rng.chance(clamp01(rates.typo)) {
        last_name = random_typo(&mut rng, &last_name);
    }

    let email = pick(&mut rng, &profile.emails, None).map_or(FALLBACK_EMAIL, String::as_str);
    let phone = pick(&mut rng, &profile.phones, None).map_or(FALLBACK_PHONE, String::as_str);
    let login = pick(&mut rng, &profile.logins, None).map_or(FALLBACK_LOGIN, String::as_str);

    DistortedFields {
        first_name,
        last_name,
        email: email.to_string(),
        phone: phone.to_string(),
        login: login.to_string(),
    }
}

fn clamp01(p: f64) -> f64 {
    p.clamp(0.0, 1.0)
}

/// Inject one typo into `s`.
///
/// Strings of two characters or fewer are returned unchanged without
/// drawing. Positions count characters, so multi-byte text is never split.
pub fn random_typo<R: RecordRng + ?Sized>(rng: &mut R, s: &str) -> String {
    let mut chars: Vec<char> = s.chars().collect();
    let len = chars.len();
    if len <= 2 {
        return s.to_string();
    }

    match TypoKind::ALL[rng.next_below(TypoKind::ALL.len())] {
        TypoKind::Delete => {
            let i = rng.next_below(len);
            chars.remove(i);
        }
        TypoKind::Insert => {
            let i = rng.next_below(len + 1);
            chars.insert(i, random_letter(rng));
        }
        TypoKind::Replace => {
            let i = rng.next_below(len);
            chars[i] = random_letter(rng);
        }
    }
    chars.into_iter().collect()
}

fn random_letter<R: RecordRng + ?Sized>(rng: &mut R) -> char {
    char::from(TYPO_ALPHABET[rng.next_below(TYPO_ALPHABET.len())])
}

/// Transliterate Cyrillic text to a Latin approximation.
///
/// Characters without a mapping pass through unchanged.
pub fn transliterate(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match cyrillic_to_latin(c) {
            Some(latin) => out.push_str(latin),
            None => out.push(c),
        }
    }
    out
}

fn cyrillic_to_latin(c: char) -> Option<&'static str> {
    let latin = match c {
        'А' => "A",
        'Б' => "B",
        'В' => "V",
        'Г' => "G",
        'Д' => "D",
        'Е' | 'Ё' | 'Э' => "E",
        'Ж' => "Zh",
        'З' => "Z",
        'И' => "I",
        'Й' | 'Ы' => "Y",
        'К' => "K",
        'Л' => "L",
        'М' => "M",
        'Н' => "N",
        'О' => "O",
        'П' => "P",
        'Р' => "R",
        'С' => "S",
        'Т' => "T",
        'У' => "U",
        'Ф' => "F",
        'Х' => "Kh",
        'Ц' => "Ts",
        'Ч' => "Ch",
        'Ш' => "Sh",
        'Щ' => "Sch",
        'Ъ' | 'Ь' => "",
        'Ю' => "Yu",
        'Я' => "Ya",
        'а' => "a",
        'б' => "b",
        'в' => "v",
        'г' => "g",
        'д' => "d",
        'е' | 'ё' | 'э' => "e",
        'ж' => "zh",
        'з' => "z",
        'и' => "i",
        'й' | 'ы' => "y",
        'к' => "k",
        'л' => "l",
        'м' => "m",
        'н' => "n",
        'о' => "o",
        'п' => "p",
        'р' => "r",
        'с' => "s",
        'т' => "t",
        'у' => "u",
        'ф' => "f",
        'х' => "kh",
        'ц' => "ts",
        'ч' => "ch",
        'ш' => "sh",
        'щ' => "sch",
        'ъ' | 'ь' => "",
        'ю' => "yu",
        'я' => "ya",
        _ => return None,
    };
    Some(latin)
}
