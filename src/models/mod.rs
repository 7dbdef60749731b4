//! Data models for the scholarship dashboard

use serde::{Deserialize, Serialize};
use std::fmt;

pub mod application;
pub use application::*;

/// Account holder able to sign in
#[derive(Debug, Clone, Serialize)]
pub struct User {
    #[serde(rename = "user_id")]
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    #[serde(rename = "user_type")]
    pub role: UserRole,
}

/// User roles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Student,
    Mayor,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::Student => "student",
            UserRole::Mayor => "mayor",
        }
    }

    /// Password assigned when an account is created without one
    pub fn default_password(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin123",
            UserRole::Student => "student123",
            UserRole::Mayor => "mayor123",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Scholar on the roster
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub course: String,
    pub year: i32,
}

/// Fields accepted when adding a student
#[derive(Debug, Clone)]
pub struct NewStudent {
    pub name: String,
    pub email: String,
    pub course: String,
    pub year: i32,
}

/// Disbursed scholarship
#[derive(Debug, Clone, Serialize)]
pub struct ScholarshipRecord {
    pub record_id: i64,
    pub student_id: i64,
    pub student_name: String,
    pub scholarship_type: String,
    pub amount: i64,
    pub semester: String,
}

/// User profile, merged with roster details when the user is also a student
#[derive(Debug, Clone, Serialize)]
pub struct Profile {
    pub user_id: i64,
    pub name: String,
    pub email: String,
    pub user_type: UserRole,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
}

impl Profile {
    pub fn new(user: &User, student: Option<&Student>) -> Self {
        Self {
            user_id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            user_type: user.role,
            course: student.map(|s| s.course.clone()),
            year: student.map(|s| s.year),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_serialization_hides_password() {
        let user = User {
            id: 7,
            name: "Ana Cruz".to_string(),
            email: "ana@example.com".to_string(),
            password_hash: "$2b$04$hash".to_string(),
            role: UserRole::Mayor,
        };

        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["user_id"], 7);
        assert_eq!(json["user_type"], "mayor");
        assert!(json.get("password_hash").is_none());
    }

    #[test]
    fn test_profile_merges_student_details() {
        let user = User {
            id: 2,
            name: "Jane Smith".to_string(),
            email: "jane@example.com".to_string(),
            password_hash: String::new(),
            role: UserRole::Student,
        };
        let student = Student {
            id: 2,
            name: "Jane Smith".to_string(),
            email: "jane@example.com".to_string(),
            course: "Engineering".to_string(),
            year: 3,
        };

        let json = serde_json::to_value(Profile::new(&user, Some(&student))).unwrap();
        assert_eq!(json["course"], "Engineering");
        assert_eq!(json["year"], 3);

        let json = serde_json::to_value(Profile::new(&user, None)).unwrap();
        assert!(json.get("course").is_none());
    }
}
