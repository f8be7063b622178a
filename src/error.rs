#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("{sensor} sensor unavailable: {reason}")]
    SensorUnavailable {
        sensor: &'static str,
        reason: String,
    },

    #[error("particulate sensor read timed out")]
    ReadTimeout,
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn unavailable(sensor: &'static str, reason: impl ToString) -> Self {
        Error::SensorUnavailable {
            sensor,
            reason: reason.to_string(),
        }
    }
}
