//! Field types shared across the dashboard model.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::db::DashboardError;

/// Task lifecycle status.
///
/// The set is closed: every task is always in exactly one of these three
/// states, and all three are mutually reachable. Raw strings from the CLI or
/// other untyped input go through [`FromStr`], which rejects anything outside
/// the set without touching any task.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    #[serde(alias = "Pending")]
    Pending,
    #[serde(alias = "InProgress")]
    InProgress,
    #[serde(alias = "Completed")]
    Completed,
}

impl Status {
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Pending => "pending",
            Status::InProgress => "in-progress",
            Status::Completed => "completed",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pending" => Ok(Status::Pending),
            "in-progress" | "in_progress" => Ok(Status::InProgress),
            "completed" => Ok(Status::Completed),
            _ => Err(DashboardError::InvalidStatus(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_three_statuses() {
        assert_eq!("pending".parse::<Status>().unwrap(), Status::Pending);
        assert_eq!("in-progress".parse::<Status>().unwrap(), Status::InProgress);
        assert_eq!("Completed".parse::<Status>().unwrap(), Status::Completed);
    }

    #[test]
    fn rejects_anything_outside_the_set() {
        assert!("cancelled".parse::<Status>().is_err());
        assert!("".parse::<Status>().is_err());
        assert!("done".parse::<Status>().is_err());
    }
}
