//! Student aggregate
//!
//! Contains the Student entity, its input/patch types and the repository interface.

pub mod model;
pub mod repository;

pub use model::{NewStudent, Student, StudentPatch};
pub use repository::StudentRepository;
