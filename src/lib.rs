//! Scholarship Dashboard Backend Library
//!
//! REST backend for a scholarship-management dashboard: login and session
//! tokens, admin and mayor views, the student roster, scholarship
//! applications, renewals and the renewal window.

pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod seed;
pub mod state;
pub mod store;
