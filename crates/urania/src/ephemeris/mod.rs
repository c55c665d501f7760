pub mod houses;
pub mod orbits;
pub mod points;
pub mod sidereal;
pub mod time;
pub mod types;

pub use houses::{assign_house, build_equal_houses, HouseCusp, HOUSE_COUNT, MIDHEAVEN_CUSP};
pub use orbits::{BodySource, OrbitalRate, RateBody, SyntheticPoint, FALLBACK_ORBIT};
pub use points::PointContext;
pub use sidereal::{ascendant, local_sidereal_degrees};
pub use time::{parse_timezone_offset, to_julian_day, J2000};
pub use types::{default_natal_input, GeoLocation, HouseSystem, NatalInput};
