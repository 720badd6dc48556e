//! Courses module: CRUD + enrolled students

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
