pub mod assignments;
pub mod auth;
pub mod courses;
pub mod publications;
pub mod users;
