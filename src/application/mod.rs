//! Application layer - use cases on top of the domain repositories

pub mod services;

pub use services::{EnrollmentService, MarksReport, MarksReportService, ReportTarget};
