//! Event lifecycle status enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use opshub_core::AppError;

/// Lifecycle status of a significant event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventStatus {
    /// The event is ongoing and response teams are engaged.
    Active,
    /// The event has been closed out.
    Resolved,
}

impl EventStatus {
    /// Return the status as its display string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Resolved => "Resolved",
        }
    }
}

impl Default for EventStatus {
    fn default() -> Self {
        Self::Active
    }
}

impl fmt::Display for EventStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for EventStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(Self::Active),
            "resolved" => Ok(Self::Resolved),
            _ => Err(AppError::validation(format!(
                "Invalid event status: '{s}'. Expected one of: Active, Resolved"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!("active".parse::<EventStatus>().unwrap(), EventStatus::Active);
        assert_eq!(
            "Resolved".parse::<EventStatus>().unwrap(),
            EventStatus::Resolved
        );
        assert!("closed".parse::<EventStatus>().is_err());
    }

    #[test]
    fn test_serde_uses_display_names() {
        let json = serde_json::to_string(&EventStatus::Active).unwrap();
        assert_eq!(json, "\"Active\"");
    }
}
