//! Enrollment join entity
//!
//! Links one Student to one Course. Owned by neither side: it exists only
//! while both endpoints exist and at most once per pair.

pub mod model;
pub mod repository;

pub use model::{normalize_course_ids, Enrollment};
pub use repository::EnrollmentRepository;
