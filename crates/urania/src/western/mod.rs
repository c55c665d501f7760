//! Western (tropical) zodiac utilities.

pub mod angles;
pub mod zodiac;

pub use angles::{angle_difference, normalize_degrees};
pub use zodiac::{
    degree_within_sign, dodecatemoria, sign_from_longitude, sign_index, DegreeParts, ZodiacSign,
    DEGREES_PER_SIGN, SIGN_ORDER,
};
