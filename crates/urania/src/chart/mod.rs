pub mod calculator;
pub mod data;

pub use calculator::{apparent_retrograde, calculate_chart, ChartCalculator};
pub use data::{BodyPosition, ChartBody, ChartData, ChartMetadata};
