//! Sign, degree and dodecatemoria decomposition of ecliptic longitudes.

use super::angles::normalize_degrees;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const DEGREES_PER_SIGN: f64 = 30.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

/// Signs in zodiacal order, starting at 0° Aries
pub const SIGN_ORDER: [ZodiacSign; 12] = [
    ZodiacSign::Aries,
    ZodiacSign::Taurus,
    ZodiacSign::Gemini,
    ZodiacSign::Cancer,
    ZodiacSign::Leo,
    ZodiacSign::Virgo,
    ZodiacSign::Libra,
    ZodiacSign::Scorpio,
    ZodiacSign::Sagittarius,
    ZodiacSign::Capricorn,
    ZodiacSign::Aquarius,
    ZodiacSign::Pisces,
];

impl ZodiacSign {
    pub fn from_index(index: usize) -> Self {
        SIGN_ORDER[index % SIGN_ORDER.len()]
    }

    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn name(&self) -> &'static str {
        match self {
            ZodiacSign::Aries => "Aries",
            ZodiacSign::Taurus => "Taurus",
            ZodiacSign::Gemini => "Gemini",
            ZodiacSign::Cancer => "Cancer",
            ZodiacSign::Leo => "Leo",
            ZodiacSign::Virgo => "Virgo",
            ZodiacSign::Libra => "Libra",
            ZodiacSign::Scorpio => "Scorpio",
            ZodiacSign::Sagittarius => "Sagittarius",
            ZodiacSign::Capricorn => "Capricorn",
            ZodiacSign::Aquarius => "Aquarius",
            ZodiacSign::Pisces => "Pisces",
        }
    }
}

impl fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Get sign index (0-11) from longitude
pub fn sign_index(longitude: f64) -> usize {
    let normalized = normalize_degrees(longitude);
    ((normalized / DEGREES_PER_SIGN).floor() as usize) % SIGN_ORDER.len()
}

pub fn sign_from_longitude(longitude: f64) -> ZodiacSign {
    ZodiacSign::from_index(sign_index(longitude))
}

/// Degrees past the start of the sign, in [0, 30)
pub fn degree_within_sign(longitude: f64) -> f64 {
    normalize_degrees(longitude) % DEGREES_PER_SIGN
}

/// Dodecatemoria of a position given its sign and degree within that sign.
///
/// Each sign is cut into twelve 2.5° segments; the segment number is composed
/// with the sign index as `(sign * 12 + segment) mod 12`.
pub fn dodecatemoria(sign: ZodiacSign, degree_within_sign: f64) -> ZodiacSign {
    let segment = ((degree_within_sign / DEGREES_PER_SIGN) * 12.0).floor() as usize;
    let absolute = sign.index() * 12 + segment;
    ZodiacSign::from_index(absolute % SIGN_ORDER.len())
}

/// Sign, whole degree and rounded arc-minutes of a longitude.
///
/// A minute count that rounds up to 60 is carried into the degree, and a
/// degree that reaches 30 is carried into the following sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DegreeParts {
    pub sign: ZodiacSign,
    pub sign_degree: u32,
    pub minutes: u32,
}

impl DegreeParts {
    pub fn from_longitude(longitude: f64) -> Self {
        let mut index = sign_index(longitude);
        let within = degree_within_sign(longitude);
        let whole = within.floor();
        let mut sign_degree = whole as u32;
        let mut minutes = ((within - whole) * 60.0).round() as u32;

        if minutes >= 60 {
            minutes -= 60;
            sign_degree += 1;
        }
        if sign_degree >= 30 {
            sign_degree -= 30;
            index = (index + 1) % SIGN_ORDER.len();
        }

        Self {
            sign: ZodiacSign::from_index(index),
            sign_degree,
            minutes,
        }
    }
}
