//! Natal chart engine.
//!
//! Turns a birth date, clock time, UTC offset and location into body positions,
//! equal house cusps and aspects using a mean-motion linear orbital model.

pub mod aspects;
pub mod catalog;
pub mod chart;
pub mod ephemeris;
pub mod error;
pub mod profiles;
pub mod western;

pub use aspects::{Aspect, AspectCalculator, AspectKind};
pub use catalog::{CelestialBody, CelestialCategory, BASE_BODIES};
pub use chart::{calculate_chart, ChartBody, ChartCalculator, ChartData};
pub use ephemeris::{default_natal_input, HouseSystem, NatalInput};
pub use error::ChartError;
pub use profiles::{
    JsonFileProfileStore, MemoryProfileStore, ProfileRecord, ProfileRepository, StoreError,
};
pub use western::ZodiacSign;
