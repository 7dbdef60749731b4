//! API handlers for the scholarship dashboard

pub mod admin;
pub mod applications;
pub mod auth;
pub mod extract;
pub mod mayor;
pub mod renewals;
pub mod students;
pub mod system;

pub use extract::{IdPath, JsonBody};

// Re-export AuthenticatedUser from middleware for handler use
pub use crate::middleware::AuthenticatedUser;

/// Treats absent, empty and whitespace-only strings alike
pub(crate) fn present(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_present() {
        assert_eq!(present(Some(" a ".to_string())), Some("a".to_string()));
        assert_eq!(present(Some("   ".to_string())), None);
        assert_eq!(present(None), None);
    }
}
