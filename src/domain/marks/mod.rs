//! Marks aggregation over flat `(student_id, course_id, marks)` rows.

pub mod model;

pub use model::{
    average, course_summary, maximum, student_report, CourseSummary, MarkRecord, StudentReport,
};
