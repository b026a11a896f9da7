//! Text generation parameters

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Parameters for one generator call
///
/// `max_length` bounds the whole output, echoed prompt included.
/// Only the first returned sequence is ever used, so `num_sequences`
/// is always 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationParams {
    pub max_length: u32,
    pub num_sequences: u32,
}

impl GenerationParams {
    pub const DEFAULT_MAX_LENGTH: u32 = 150;

    pub fn new(max_length: u32) -> Result<Self, DomainError> {
        if max_length == 0 {
            return Err(DomainError::InvalidParams(
                "max_length must be greater than zero".to_string(),
            ));
        }
        Ok(Self {
            max_length,
            num_sequences: 1,
        })
    }
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            max_length: Self::DEFAULT_MAX_LENGTH,
            num_sequences: 1,
        }
    }
}
