pub mod calculator;
pub mod types;

pub use calculator::AspectCalculator;
pub use types::{
    Aspect, AspectCore, AspectDefinition, AspectKind, AspectObjectRef, ASPECT_DEFINITIONS,
};
