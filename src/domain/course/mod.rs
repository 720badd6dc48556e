//! Course aggregate

pub mod model;
pub mod repository;

pub use model::{Course, CoursePatch, NewCourse};
pub use repository::CourseRepository;
