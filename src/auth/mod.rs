//! Authentication for the scholarship dashboard
//!
//! - Email/password login against the identity store
//! - Signed, time-limited session tokens

mod jwt;

pub use jwt::{Claims, TokenError, TokenService};
