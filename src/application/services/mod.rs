pub mod enrollment;
pub mod marks_report;

pub use enrollment::EnrollmentService;
pub use marks_report::{MarksReport, MarksReportService, ReportTarget};
