//! Environment-driven configuration.
//!
//! - [`cors`]: allowed CORS origins
//! - [`database`]: PostgreSQL pool initialization
//! - [`jwt`]: token secret and expiry

pub mod cors;
pub mod database;
pub mod jwt;
