//! Scholarship applications and renewals

use chrono::{Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Review status shared by applications and renewals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "application_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    Pending,
    #[sqlx(rename = "under review")]
    #[serde(rename = "under review")]
    UnderReview,
    Approved,
    Rejected,
}

#[derive(Debug, Error)]
#[error("Unknown application status: '{0}'")]
pub struct UnknownStatus(pub String);

impl ApplicationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "pending",
            ApplicationStatus::UnderReview => "under review",
            ApplicationStatus::Approved => "approved",
            ApplicationStatus::Rejected => "rejected",
        }
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Case-insensitive; `under_review` is accepted for `under review`.
impl FromStr for ApplicationStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', " ").as_str() {
            "pending" => Ok(ApplicationStatus::Pending),
            "under review" => Ok(ApplicationStatus::UnderReview),
            "approved" => Ok(ApplicationStatus::Approved),
            "rejected" => Ok(ApplicationStatus::Rejected),
            _ => Err(UnknownStatus(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "application_type", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ApplicationType {
    New,
    Renewal,
}

/// Scholarship application
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Application {
    #[serde(rename = "app_id")]
    #[sqlx(rename = "application_id")]
    pub id: i64,
    #[sqlx(rename = "user_id")]
    pub student_id: i64,
    pub student_name: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(rename = "type")]
    #[sqlx(rename = "application_type")]
    pub kind: ApplicationType,
    pub status: ApplicationStatus,
    pub year_applied: i32,
    #[serde(rename = "date")]
    pub submission_date: NaiveDate,
    pub archived: bool,
}

/// Renewal of an existing application
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Renewal {
    #[serde(rename = "renewal_id")]
    #[sqlx(rename = "renewal_id")]
    pub id: i64,
    pub application_id: i64,
    #[sqlx(rename = "user_id")]
    pub student_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub status: ApplicationStatus,
    #[serde(rename = "date")]
    pub submission_date: NaiveDate,
    pub archived: bool,
}

/// Fields of a new application, derived from the submitted student name
#[derive(Debug, Clone)]
pub struct NewApplication {
    pub student_id: i64,
    pub student_name: String,
    pub first_name: String,
    pub last_name: String,
    pub year_applied: i32,
    pub submission_date: NaiveDate,
}

impl NewApplication {
    pub fn new(student_id: i64, student_name: &str) -> Self {
        let (first_name, last_name) = split_name(student_name);
        let today = Utc::now().date_naive();
        Self {
            student_id,
            student_name: student_name.trim().to_string(),
            first_name,
            last_name,
            year_applied: today.year(),
            submission_date: today,
        }
    }
}

/// Fields of a new renewal
#[derive(Debug, Clone)]
pub struct NewRenewal {
    pub application_id: i64,
    pub student_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub submission_date: NaiveDate,
}

impl NewRenewal {
    pub fn new(application_id: i64, student_id: i64, student_name: &str) -> Self {
        let (first_name, last_name) = split_name(student_name);
        Self {
            application_id,
            student_id,
            first_name,
            last_name,
            submission_date: Utc::now().date_naive(),
        }
    }
}

/// Splits a full name into first and last name.
///
/// The first whitespace-separated token is the first name. The last token is
/// the last name when there is more than one token; otherwise it is empty.
/// Middle names are dropped.
pub fn split_name(full_name: &str) -> (String, String) {
    let mut parts = full_name.split_whitespace();
    let first = parts.next().unwrap_or_default().to_string();
    let last = parts.last().unwrap_or_default().to_string();
    (first, last)
}

/// Number of entries per status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub total: i64,
    pub pending: i64,
    pub under_review: i64,
    pub approved: i64,
    pub rejected: i64,
}

impl StatusCounts {
    pub fn add(&mut self, status: ApplicationStatus, count: i64) {
        self.total += count;
        match status {
            ApplicationStatus::Pending => self.pending += count,
            ApplicationStatus::UnderReview => self.under_review += count,
            ApplicationStatus::Approved => self.approved += count,
            ApplicationStatus::Rejected => self.rejected += count,
        }
    }

    pub fn tally<I>(statuses: I) -> Self
    where
        I: IntoIterator<Item = ApplicationStatus>,
    {
        let mut counts = Self::default();
        for status in statuses {
            counts.add(status, 1);
        }
        counts
    }
}
