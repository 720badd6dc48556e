pub mod courses;
pub mod enrollments;
pub mod health;
pub mod request_id;
pub mod students;
