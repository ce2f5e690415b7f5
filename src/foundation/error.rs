pub type PlotResult<T> = Result<T, PlotError>;

#[derive(thiserror::Error, Debug)]
pub enum PlotError {
    #[error("invalid unit: {0}")]
    InvalidUnit(String),

    #[error("invalid area: {0}")]
    InvalidArea(String),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("render error: {0}")]
    Render(String),

    #[error("serialization error: {0}")]
    Serde(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PlotError {
    pub fn invalid_unit(tag: impl Into<String>) -> Self {
        Self::InvalidUnit(tag.into())
    }

    pub fn invalid_area(msg: impl Into<String>) -> Self {
        Self::InvalidArea(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Whether this error came from user input and should be surfaced as an alert.
    pub fn is_user_input(&self) -> bool {
        matches!(self, Self::InvalidUnit(_) | Self::InvalidArea(_))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
