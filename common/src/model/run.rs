use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// A single running session. Unlike orders and tutorials, the identifier is
/// caller-supplied rather than generated on insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Run {
    pub id: i32,
    pub title: String,
    pub started_on: DateTime<Utc>,
    pub completed_on: DateTime<Utc>,
    /// Distance covered in miles, must be positive.
    pub miles: i32,
    pub location: Location,
}

impl Run {
    /// Total duration of the run.
    pub fn duration(&self) -> Duration {
        self.completed_on - self.started_on
    }

    /// Average pace in minutes per mile, or `None` for a non-positive
    /// distance (which validation rejects anyway).
    pub fn avg_pace(&self) -> Option<i64> {
        if self.miles <= 0 {
            return None;
        }
        Some(self.duration().num_minutes() / i64::from(self.miles))
    }
}

/// Where a run took place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Location {
    Indoor,
    Outdoor,
}

impl Location {
    /// Stable text code used in the database `location` column and in the
    /// `/api/runs/search` query parameter.
    pub fn as_code(&self) -> &'static str {
        match self {
            Self::Indoor => "INDOOR",
            Self::Outdoor => "OUTDOOR",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "INDOOR" => Some(Self::Indoor),
            "OUTDOOR" => Some(Self::Outdoor),
            _ => None,
        }
    }
}
