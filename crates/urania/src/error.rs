use thiserror::Error;

/// Errors that can occur during chart calculation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChartError {
    #[error("Invalid date/time {date} {time} {timezone}: {message}")]
    InvalidDateTime {
        date: String,
        time: String,
        timezone: String,
        message: String,
    },
    #[error("No orbital rate entry for body: {body_id}")]
    MissingCatalogEntry { body_id: String },
}
