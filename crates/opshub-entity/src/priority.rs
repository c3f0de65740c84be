//! Priority enumeration shared by events and resource requests.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use opshub_core::AppError;

/// Severity levels, ordered Critical > High > Medium > Low.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    /// Immediate threat to life or infrastructure.
    Critical,
    /// Urgent, response required promptly.
    High,
    /// Routine urgency.
    Medium,
    /// Can wait.
    Low,
}

impl Priority {
    /// Return the severity rank (higher = more severe).
    pub fn rank(&self) -> u8 {
        match self {
            Self::Critical => 4,
            Self::High => 3,
            Self::Medium => 2,
            Self::Low => 1,
        }
    }

    /// Return the priority as its display string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Critical => "Critical",
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

impl Default for Priority {
    fn default() -> Self {
        Self::Medium
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Priority {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "critical" => Ok(Self::Critical),
            "high" => Ok(Self::High),
            "medium" => Ok(Self::Medium),
            "low" => Ok(Self::Low),
            _ => Err(AppError::validation(format!(
                "Invalid priority: '{s}'. Expected one of: Critical, High, Medium, Low"
            ))),
        }
    }
}
