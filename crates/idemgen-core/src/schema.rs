//! Generator configuration for idemgen.
//!
//! The configuration is the only input besides the record index: every
//! record is a pure function of `(index, GeneratorConfig)`. It is usually
//! built once at process start, either from [`GeneratorConfig::default`],
//! the builder methods, or a YAML/JSON file, and never mutated afterwards.
//!
//! ## Sections
//!
//! - `profileSpaceSize` - number of distinct synthetic profiles
//! - `buckets` - frequency buckets controlling how often a profile repeats
//! - `distortions` - probabilities of the name corruptions
//! - `dateSpread` - half-open range for event timestamps
//! - `pools` - weighted value pools for names and event fields
//! - `locales` - primary/secondary locale split

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

// ============================================================================
// Error Types
// ============================================================================

/// Error type for configuration loading and validation.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Error reading config file
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    /// Error parsing YAML
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// Error parsing JSON
    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Profile space must contain at least one profile
    #[error("Profile space size must be positive")]
    ZeroProfileSpace,

    /// At least one frequency bucket is required
    #[error("At least one frequency bucket is required")]
    NoBuckets,

    /// Bucket weights must not all be zero
    #[error("Frequency bucket weights sum to zero")]
    ZeroBucketWeight,

    /// A bucket must allow at least one variant
    #[error("Frequency bucket {index} has a repeat multiplier of zero")]
    ZeroRepeatMultiplier { index: usize },

    /// A required value pool is empty
    #[error("Value pool '{pool}' is empty")]
    EmptyPool { pool: &'static str },

    /// Weights given for a pool do not line up with its values
    #[error("Value pool '{pool}' has {values} values but {weights} weights")]
    PoolWeightsMismatch {
        pool: &'static str,
        values: usize,
        weights: usize,
    },

    /// Weights given for a pool sum to zero
    #[error("Value pool '{pool}' weights sum to zero")]
    ZeroPoolWeight { pool: &'static str },

    /// Date range is inverted or empty
    #[error("Date range is empty or inverted: {start} .. {end}")]
    InvalidDateRange {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },

    /// Probability is not a number
    #[error("Probability '{name}' is not a number: {value}")]
    InvalidProbability { name: &'static str, value: f64 },
}

// ============================================================================
// Configuration Sections
// ============================================================================

/// One tier of profile recurrence.
///
/// Buckets are selected proportionally to `weight`; `repeat_multiplier`
/// bounds how many distinct field variants a profile in the bucket produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrequencyBucket {
    /// Relative selection weight
    pub weight: u32,

    /// Number of distinct variants a profile in this bucket may produce
    pub repeat_multiplier: u32,
}

impl FrequencyBucket {
    /// Create a new frequency bucket.
    pub const fn new(weight: u32, repeat_multiplier: u32) -> Self {
        Self {
            weight,
            repeat_multiplier,
        }
    }
}

/// Probabilities of the independent name distortions.
///
/// Values outside `[0, 1]` are clamped when applied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistortionRates {
    /// Probability of swapping first and last name
    #[serde(default)]
    pub swap_first_last: f64,

    /// Probability of transliterating both names to Latin
    #[serde(default)]
    pub transliterate: f64,

    /// Probability of a typo, drawn separately for each name
    #[serde(default)]
    pub typo: f64,
}

impl DistortionRates {
    /// Rates that leave every name untouched.
    pub const DISABLED: Self = Self {
        swap_first_last: 0.0,
        transliterate: 0.0,
        typo: 0.0,
    };

    /// Create a new set of distortion rates.
    pub const fn new(swap_first_last: f64, transliterate: f64, typo: f64) -> Self {
        Self {
            swap_first_last,
            transliterate,
            typo,
        }
    }
}

impl Default for DistortionRates {
    fn default() -> Self {
        Self::new(0.03, 0.08, 0.05)
    }
}

/// Half-open timestamp range `[start, end)` for event timestamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateSpread {
    /// Inclusive lower bound
    pub start: DateTime<Utc>,

    /// Exclusive upper bound
    pub end: DateTime<Utc>,
}

impl DateSpread {
    /// Create a new date spread.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// Width of the range in milliseconds, `None` when empty or inverted.
    pub fn span_millis(&self) -> Option<u64> {
        let span = self.end.timestamp_millis() - self.start.timestamp_millis();
        u64::try_from(span).ok().filter(|&span| span > 0)
    }
}

impl Default for DateSpread {
    fn default() -> Self {
        // 2024-01-01T00:00:00Z .. 2026-01-01T00:00:00Z
        Self {
            start: DateTime::from_timestamp(1_704_067_200, 0).unwrap_or_default(),
            end: DateTime::from_timestamp(1_767_225_600, 0).unwrap_or_default(),
        }
    }
}

/// A pool of string values, sampled uniformly or by weight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightedPool {
    /// Candidate values
    pub values: Vec<String>,

    /// Optional per-value weights, parallel to `values`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weights: Option<Vec<u32>>,
}

impl WeightedPool {
    /// Create a pool sampled uniformly.
    pub fn uniform<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            values: values.into_iter().map(Into::into).collect(),
            weights: None,
        }
    }

    /// Create a pool sampled proportionally to `weights`.
    pub fn weighted<I, S>(values: I, weights: Vec<u32>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            values: values.into_iter().map(Into::into).collect(),
            weights: Some(weights),
        }
    }

    /// Number of values in the pool.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the pool has no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn validate(&self, pool: &'static str) -> Result<(), ConfigError> {
        if self.values.is_empty() {
            return Err(ConfigError::EmptyPool { pool });
        }
        if let Some(weights) = &self.weights {
            if weights.len() != self.values.len() {
                return Err(ConfigError::PoolWeightsMismatch {
                    pool,
                    values: self.values.len(),
                    weights: weights.len(),
                });
            }
            if weights.iter().all(|&w| w == 0) {
                return Err(ConfigError::ZeroPoolWeight { pool });
            }
        }
        Ok(())
    }
}

/// Value pools for names and event fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pools {
    /// First names
    pub first_names: WeightedPool,

    /// Last names
    pub last_names: WeightedPool,

    /// Event cities
    pub cities: WeightedPool,

    /// Event channels
    pub channels: WeightedPool,

    /// Points of sale
    pub points_of_sale: WeightedPool,
}

impl Pools {
    fn validate(&self) -> Result<(), ConfigError> {
        self.first_names.validate("firstNames")?;
        self.last_names.validate("lastNames")?;
        self.cities.validate("cities")?;
        self.channels.validate("channels")?;
        self.points_of_sale.validate("pointsOfSale")?;
        Ok(())
    }
}

impl Default for Pools {
    fn default() -> Self {
        Self {
            first_names: WeightedPool::weighted(
                [
                    "Анна", "Мария", "Иван", "Алексей", "София", "Дмитрий", "Елена", "Сергей",
                    "Павел", "Ольга",
                ],
                vec![8, 7, 7, 6, 6, 6, 5, 5, 4, 4],
            ),
            last_names: WeightedPool::uniform([
                "Иванов", "Петров", "Сидоров", "Смирнов", "Кузнецов", "Попов", "Соколов",
                "Лебедев", "Семенов", "Козлов",
            ]),
            cities: WeightedPool::uniform([
                "Москва",
                "Санкт-Петербург",
                "Новосибирск",
                "Екатеринбург",
                "Казань",
                "Минск",
                "Алматы",
            ]),
            channels: WeightedPool::uniform(["web", "mobile", "offline", "callcenter"]),
            points_of_sale: WeightedPool::uniform([
                "store-001",
                "store-002",
                "kiosk-01",
                "partner-az",
            ]),
        }
    }
}

/// Locale assignment for synthesized profiles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocaleConfig {
    /// Locale assigned by default
    pub primary: String,

    /// Locale assigned with `secondary_probability`
    pub secondary: String,

    /// Probability of the secondary locale
    pub secondary_probability: f64,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            primary: "ru".to_string(),
            secondary: "en".to_string(),
            secondary_probability: 0.3,
        }
    }
}

fn default_profile_space_size() -> u64 {
    1_000_000_000_000
}

fn default_buckets() -> Vec<FrequencyBucket> {
    vec![
        FrequencyBucket::new(90, 1),
        FrequencyBucket::new(8, 3),
        FrequencyBucket::new(2, 10),
    ]
}

// ============================================================================
// Generator Configuration
// ============================================================================

/// Full, immutable generator configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratorConfig {
    /// Number of distinct profiles; profile ids lie in `[0, profile_space_size)`
    #[serde(default = "default_profile_space_size")]
    pub profile_space_size: u64,

    /// Frequency buckets
    #[serde(default = "default_buckets")]
    pub buckets: Vec<FrequencyBucket>,

    /// Distortion probabilities
    #[serde(default)]
    pub distortions: DistortionRates,

    /// Timestamp range
    #[serde(default)]
    pub date_spread: DateSpread,

    /// Value pools
    #[serde(default)]
    pub pools: Pools,

    /// Locale split
    #[serde(default)]
    pub locales: LocaleConfig,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            profile_space_size: default_profile_space_size(),
            buckets: default_buckets(),
            distortions: DistortionRates::default(),
            date_spread: DateSpread::default(),
            pools: Pools::default(),
            locales: LocaleConfig::default(),
        }
    }
}

impl GeneratorConfig {
    /// Load configuration from a file.
    ///
    /// Files ending in `.json` are parsed as JSON, everything else as YAML.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let config = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json(&content)?,
            _ => Self::from_yaml(&content)?,
        };
        info!(
            "Loaded generator config from '{}' ({} profiles, {} buckets)",
            path.display(),
            config.profile_space_size,
            config.buckets.len()
        );
        Ok(config)
    }

    /// Parse configuration from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Parse configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Set the profile space size.
    pub fn with_profile_space_size(mut self, size: u64) -> Self {
        self.profile_space_size = size;
        self
    }

    /// Set the frequency buckets.
    pub fn with_buckets(mut self, buckets: Vec<FrequencyBucket>) -> Self {
        self.buckets = buckets;
        self
    }

    /// Set the distortion rates.
    pub fn with_distortions(mut self, distortions: DistortionRates) -> Self {
        self.distortions = distortions;
        self
    }

    /// Set the timestamp range.
    pub fn with_date_spread(mut self, date_spread: DateSpread) -> Self {
        self.date_spread = date_spread;
        self
    }

    /// Set the value pools.
    pub fn with_pools(mut self, pools: Pools) -> Self {
        self.pools = pools;
        self
    }

    /// Set the locale split.
    pub fn with_locales(mut self, locales: LocaleConfig) -> Self {
        self.locales = locales;
        self
    }

    /// Check the configuration for errors that would make generation
    /// impossible or ill-defined.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.profile_space_size == 0 {
            return Err(ConfigError::ZeroProfileSpace);
        }

        if self.buckets.is_empty() {
            return Err(ConfigError::NoBuckets);
        }
        if self.buckets.iter().all(|b| b.weight == 0) {
            return Err(ConfigError::ZeroBucketWeight);
        }
        if let Some(index) = self.buckets.iter().position(|b| b.repeat_multiplier == 0) {
            return Err(ConfigError::ZeroRepeatMultiplier { index });
        }

        let probabilities = [
            ("swapFirstLast", self.distortions.swap_first_last),
            ("transliterate", self.distortions.transliterate),
            ("typo", self.distortions.typo),
            ("secondaryProbability", self.locales.secondary_probability),
        ];
        if let Some(&(name, value)) = probabilities.iter().find(|(_, v)| v.is_nan()) {
            return Err(ConfigError::InvalidProbability { name, value });
        }

        if self.date_spread.span_millis().is_none() {
            return Err(ConfigError::InvalidDateRange {
                start: self.date_spread.start,
                end: self.date_spread.end,
            });
        }

        self.pools.validate()
    }
}

// ============================================================================
// Tests
// ============================================================================
