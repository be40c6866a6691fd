use thiserror::Error;

/// Why a response could not be turned into forecast records.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractionError {
    #[error("response has no `{section}` section")]
    MissingRequiredSection { section: &'static str },

    #[error("field `{field}` is malformed: {reason}")]
    MalformedField { field: String, reason: String },
}

impl ExtractionError {
    pub fn missing_section(section: &'static str) -> Self {
        Self::MissingRequiredSection { section }
    }

    pub fn malformed<F: Into<String>, R: Into<String>>(field: F, reason: R) -> Self {
        Self::MalformedField { field: field.into(), reason: reason.into() }
    }
}

/// Outcome of a failed lookup.
#[derive(Debug, Error)]
pub enum ForecastError {
    /// Network error, timeout, non-success status or an undecodable body.
    #[error("failed to fetch weather data: {0}")]
    FetchFailed(String),

    #[error(transparent)]
    Extraction(#[from] ExtractionError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    MissingRequiredSection,
    MalformedField,
    FetchFailed,
}

impl ForecastError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ForecastError::FetchFailed(_) => ErrorKind::FetchFailed,
            ForecastError::Extraction(ExtractionError::MissingRequiredSection { .. }) => {
                ErrorKind::MissingRequiredSection
            }
            ForecastError::Extraction(ExtractionError::MalformedField { .. }) => {
                ErrorKind::MalformedField
            }
        }
    }

    pub fn detail(&self) -> String {
        match self {
            ForecastError::FetchFailed(detail) => detail.clone(),
            ForecastError::Extraction(err) => err.to_string(),
        }
    }
}

impl From<anyhow::Error> for ForecastError {
    fn from(err: anyhow::Error) -> Self {
        ForecastError::FetchFailed(format!("{err:#}"))
    }
}
