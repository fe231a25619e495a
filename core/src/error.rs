use crate::types::Year;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EvoError {
    #[error("Malformed bounds: min {min} > max {max}")]
    MalformedBounds { min: Year, max: Year },

    #[error("Malformed position: lat {lat}, lng {lng}")]
    MalformedPosition { lat: f64, lng: f64 },

    #[error("Playback step size must be positive, got {0}")]
    InvalidStepSize(i32),

    #[error("Playback tick interval must be positive, got {0}ms")]
    InvalidTickInterval(u32),

    #[error("Word is required")]
    EmptyWord,

    #[error("Member '{member_id}' is not in group '{group}'")]
    UnknownMember { member_id: String, group: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type EvoResult<T> = Result<T, EvoError>;
