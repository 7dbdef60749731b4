//! Demo data loaded into the in-memory stores at startup

use chrono::NaiveDate;

use crate::models::{
    split_name, Application, ApplicationStatus, ApplicationType, ScholarshipRecord, Student, User,
    UserRole,
};

/// Initial contents for the stores
#[derive(Debug, Clone, Default)]
pub struct SeedData {
    pub users: Vec<User>,
    pub students: Vec<Student>,
    pub applications: Vec<Application>,
    pub records: Vec<ScholarshipRecord>,
}

impl SeedData {
    /// Demo dashboard fixtures. Every account uses its role's default password.
    pub fn demo(bcrypt_cost: u32) -> Result<Self, bcrypt::BcryptError> {
        let accounts = [
            (1, "John Doe", "john@example.com", UserRole::Admin),
            (2, "Jane Smith", "jane@example.com", UserRole::Student),
            (3, "Carlos Perez", "carlos@example.com", UserRole::Student),
            (4, "Mayor Johnson", "mayor@example.com", UserRole::Mayor),
        ];

        let mut users = Vec::with_capacity(accounts.len());
        for (id, name, email, role) in accounts {
            users.push(User {
                id,
                name: name.to_string(),
                email: email.to_string(),
                password_hash: bcrypt::hash(role.default_password(), bcrypt_cost)?,
                role,
            });
        }

        let students = vec![
            student(1, "Jane Smith", "jane@example.com", "Computer Science", 2),
            student(2, "Carlos Perez", "carlos@example.com", "Engineering", 3),
            student(3, "Maria Lopez", "maria@example.com", "Business", 1),
        ];

        let applications = vec![
            application(
                1,
                2,
                "Jane Smith",
                ApplicationStatus::Pending,
                ApplicationType::New,
                (2024, 12, 1),
            ),
            application(
                2,
                3,
                "Carlos Perez",
                ApplicationStatus::Approved,
                ApplicationType::Renewal,
                (2024, 11, 28),
            ),
            application(
                3,
                1,
                "Maria Lopez",
                ApplicationStatus::UnderReview,
                ApplicationType::New,
                (2024, 12, 5),
            ),
        ];

        let records = vec![
            record(1, 2, "Jane Smith", "Academic", 10_000, "1st Semester 2024"),
            record(2, 3, "Carlos Perez", "Financial Aid", 15_000, "1st Semester 2024"),
        ];

        Ok(Self {
            users,
            students,
            applications,
            records,
        })
    }
}

fn student(id: i64, name: &str, email: &str, course: &str, year: i32) -> Student {
    Student {
        id,
        name: name.to_string(),
        email: email.to_string(),
        course: course.to_string(),
        year,
    }
}

fn application(
    id: i64,
    student_id: i64,
    student_name: &str,
    status: ApplicationStatus,
    kind: ApplicationType,
    (year, month, day): (i32, u32, u32),
) -> Application {
    let (first_name, last_name) = split_name(student_name);
    let submission_date = NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default();
    Application {
        id,
        student_id,
        student_name: student_name.to_string(),
        first_name,
        last_name,
        kind,
        status,
        year_applied: year,
        submission_date,
        archived: false,
    }
}

fn record(
    record_id: i64,
    student_id: i64,
    student_name: &str,
    scholarship_type: &str,
    amount: i64,
    semester: &str,
) -> ScholarshipRecord {
    ScholarshipRecord {
        record_id,
        student_id,
        student_name: student_name.to_string(),
        scholarship_type: scholarship_type.to_string(),
        amount,
        semester: semester.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_accounts_use_role_passwords() {
        let seed = SeedData::demo(4).unwrap();
        assert_eq!(seed.users.len(), 4);

        for user in &seed.users {
            assert!(bcrypt::verify(user.role.default_password(), &user.password_hash).unwrap());
        }

        let emails: std::collections::HashSet<_> = seed.users.iter().map(|u| &u.email).collect();
        assert_eq!(emails.len(), seed.users.len());
    }

    #[test]
    fn test_demo_has_one_pending_application() {
        let seed = SeedData::demo(4).unwrap();
        let pending = seed
            .applications
            .iter()
            .filter(|a| a.status == ApplicationStatus::Pending)
            .count();
        assert_eq!(pending, 1);
    }
}
