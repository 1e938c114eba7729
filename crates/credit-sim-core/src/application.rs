//! Loan application records and the admin listing filter.
//!
//! Pure data plumbing: typed records for the application pipeline and a
//! filter predicate over them. No persistence and no status transitions
//! live here.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::Money;

/// Where an application stands in the review pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    Pending,
    #[serde(rename = "in progress")]
    InProgress,
    Accepted,
    Refused,
}

impl std::fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Pending => "pending",
            Self::InProgress => "in progress",
            Self::Accepted => "accepted",
            Self::Refused => "refused",
        };
        write!(f, "{}", s)
    }
}

impl std::str::FromStr for ApplicationStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "in progress" | "in-progress" => Ok(Self::InProgress),
            "accepted" => Ok(Self::Accepted),
            "refused" => Ok(Self::Refused),
            other => Err(format!("Unknown application status: {other}")),
        }
    }
}

/// A submitted loan application, as stored by the reference-data service.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanApplication {
    pub id: String,
    pub full_name: String,
    pub email: String,
    pub credit_type_id: String,
    pub status: ApplicationStatus,
    pub monthly_income: Money,
    pub created_at: DateTime<Utc>,
}

/// Admin listing filter: free-text search plus an exact status match.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationFilter {
    /// Case-insensitive substring matched against full name or email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ApplicationStatus>,
}

impl ApplicationFilter {
    /// An empty or absent search matches every record.
    pub fn matches(&self, application: &LoanApplication) -> bool {
        let matches_search = match self.search.as_deref() {
            None | Some("") => true,
            Some(needle) => {
                let needle = needle.to_lowercase();
                application.full_name.to_lowercase().contains(&needle)
                    || application.email.to_lowercase().contains(&needle)
            }
        };

        let matches_status = match self.status {
            None => true,
            Some(status) => application.status == status,
        };

        matches_search && matches_status
    }
}

/// Filter applications, preserving the input order.
pub fn filter_applications<'a>(
    applications: &'a [LoanApplication],
    filter: &ApplicationFilter,
) -> Vec<&'a LoanApplication> {
    applications
        .iter()
        .filter(|app| filter.matches(app))
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
