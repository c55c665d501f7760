use crate::ephemeris::NatalInput;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

const UNTITLED_LABEL: &str = "Untitled profile";
const RANDOM_SUFFIX_LEN: usize = 6;

/// A saved natal input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileRecord {
    pub id: String,
    pub label: String,
    pub input: NatalInput,
    pub created_at: DateTime<Utc>,
}

impl ProfileRecord {
    /// New record with a fresh id and the current time
    pub fn from_input(input: NatalInput) -> Self {
        let created_at = Utc::now();
        let label = if input.name.trim().is_empty() {
            UNTITLED_LABEL.to_string()
        } else {
            input.name.clone()
        };
        Self {
            id: generate_profile_id(created_at),
            label,
            input,
            created_at,
        }
    }
}

/// `<base36 epoch millis>-<random suffix>`. Unique in practice, not secure.
pub fn generate_profile_id(now: DateTime<Utc>) -> String {
    let millis = u64::try_from(now.timestamp_millis()).unwrap_or(0);
    let random = Uuid::new_v4().simple().to_string();
    format!("{}-{}", to_base36(millis), &random[..RANDOM_SUFFIX_LEN])
}

fn to_base36(mut value: u64) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if value == 0 {
        return "0".to_string();
    }
    let mut out = Vec::new();
    while value > 0 {
        out.push(DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    out.reverse();
    String::from_utf8_lossy(&out).into_owned()
}
