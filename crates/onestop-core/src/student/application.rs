//! University application domain model.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle status of one application.
///
/// Serializes as the display strings the store contract uses
/// (`"Under Review"` with a space).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApplicationStatus {
    Applied,
    #[serde(rename = "Under Review")]
    UnderReview,
    Submitted,
    Accepted,
    Rejected,
}

impl ApplicationStatus {
    /// All statuses, in lifecycle order.
    pub const ALL: [ApplicationStatus; 5] = [
        ApplicationStatus::Applied,
        ApplicationStatus::UnderReview,
        ApplicationStatus::Submitted,
        ApplicationStatus::Accepted,
        ApplicationStatus::Rejected,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::Applied => "Applied",
            ApplicationStatus::UnderReview => "Under Review",
            ApplicationStatus::Submitted => "Submitted",
            ApplicationStatus::Accepted => "Accepted",
            ApplicationStatus::Rejected => "Rejected",
        }
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApplicationStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown application status: {}", s))
    }
}

/// A record of one student's submission to one university.
///
/// `id` and `university_id` are immutable identity once created; only
/// `status` is mutated afterward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    /// Unique application identifier (`app_<random>`)
    pub id: String,
    /// Catalog id of the university applied to
    pub university_id: String,
    /// University display name at time of application
    pub university_name: String,
    /// Course applied for
    pub course: String,
    /// Application date (`YYYY-MM-DD`)
    pub applied_date: String,
    /// Current status
    pub status: ApplicationStatus,
    /// Application fee in rupees
    pub fee: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serializes_with_space() {
        let json = serde_json::to_string(&ApplicationStatus::UnderReview).unwrap();
        assert_eq!(json, "\"Under Review\"");
        let back: ApplicationStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ApplicationStatus::UnderReview);
    }

    #[test]
    fn test_status_from_str() {
        assert_eq!(
            "under review".parse::<ApplicationStatus>().unwrap(),
            ApplicationStatus::UnderReview
        );
        assert!("Enrolled".parse::<ApplicationStatus>().is_err());
    }

    #[test]
    fn test_application_serializes_camel_case() {
        let app = Application {
            id: "app_000000001".to_string(),
            university_id: "1".to_string(),
            university_name: "IIT Delhi".to_string(),
            course: "B.Tech".to_string(),
            applied_date: "2024-01-15".to_string(),
            status: ApplicationStatus::Applied,
            fee: 2500,
        };
        let json = serde_json::to_value(&app).unwrap();
        assert_eq!(json["universityId"], "1");
        assert_eq!(json["appliedDate"], "2024-01-15");
        assert_eq!(json["status"], "Applied");
    }
}
