//! Resource request status enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use opshub_core::AppError;

/// Review status of a resource request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RequestStatus {
    /// Awaiting review.
    Pending,
    /// Approved for fulfilment.
    Approved,
}

impl RequestStatus {
    /// Return the status as its display string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Approved => "Approved",
        }
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RequestStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "approved" => Ok(Self::Approved),
            _ => Err(AppError::validation(format!(
                "Invalid request status: '{s}'. Expected one of: Pending, Approved"
            ))),
        }
    }
}
