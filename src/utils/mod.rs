//! Shared utilities.
//!
//! - [`errors`]: application error type and HTTP mapping
//! - [`jwt`]: access token creation and verification
//! - [`password`]: credential hashing and verification

pub mod errors;
pub mod jwt;
pub mod password;
