//! Generated values: synthetic profiles and the raw records built from them.
//!
//! Neither type has a lifecycle of its own. A [`Profile`] is recomputed from
//! its id whenever it is needed, and a [`RawRecord`] from its index.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A synthetic identity, fully determined by its id and the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    /// Profile identifier in `[0, profile_space_size)`
    pub profile_id: u64,
    pub first_name: String,
    pub last_name: String,
    /// Phone numbers with country-code prefix
    pub phones: Vec<String>,
    pub emails: Vec<String>,
    pub logins: Vec<String>,
    pub locale: String,
}

/// One generated record: a (possibly distorted) identity attached to an event.
///
/// The record is identified by `record_index`; the same index and
/// configuration always produce an identical record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawRecord {
    /// Index this record was generated for
    pub record_index: u64,

    /// Profile the index maps to
    pub profile_id: u64,

    /// Which of the profile's variants this record shows
    pub variant_index: u32,

    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub login: String,
    pub point_of_sale: String,
    pub city: String,
    pub channel: String,

    /// Purchase amount, rounded to cents
    pub amount: f64,

    /// Event time, millisecond precision, UTC
    pub timestamp: DateTime<Utc>,
}

impl RawRecord {
    /// Whether the record's names differ from the profile's canonical names.
    pub fn is_distorted_from(&self, profile: &Profile) -> bool {
        self.first_name != profile.first_name || self.last_name != profile.last_name
    }
}
