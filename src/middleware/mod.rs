//! Request extractors running before the core is invoked.

pub mod auth;
