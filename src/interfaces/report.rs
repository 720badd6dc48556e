//! Plain-text rendering of marks reports

use std::fmt::Write;

use crate::application::{MarksReport, MarksReportService, ReportTarget};
use crate::domain::{CourseSummary, DomainError, DomainResult, StudentReport};

/// What the terminal gets for one report request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportOutput {
    /// Rendered table, printed to stdout
    Table(String),
    /// The id is not in the sheet
    InvalidInput,
}

impl ReportOutput {
    /// Process exit status for this outcome
    pub fn exit_status(&self) -> u8 {
        match self {
            Self::Table(_) => 0,
            Self::InvalidInput => 1,
        }
    }
}

/// Run a report and decide what to show. Unknown ids become `InvalidInput`;
/// any other error is passed through.
pub fn produce(service: &MarksReportService, target: ReportTarget) -> DomainResult<ReportOutput> {
    match service.report(target) {
        Ok(report) => Ok(ReportOutput::Table(render(&report))),
        Err(DomainError::NotFound { .. }) => Ok(ReportOutput::InvalidInput),
        Err(e) => Err(e),
    }
}

pub fn render(report: &MarksReport) -> String {
    match report {
        MarksReport::Student(r) => render_student(r),
        MarksReport::Course(s) => render_course(s),
    }
}

/// Table of the student's rows followed by the total.
pub fn render_student(report: &StudentReport) -> String {
    let mut out = String::from("Student Details\n");
    let _ = writeln!(out, "{:<12} {:<12} {:>6}", "Student id", "Course id", "Marks");
    for row in &report.rows {
        let _ = writeln!(
            out,
            "{:<12} {:<12} {:>6}",
            row.student_id, row.course_id, row.marks
        );
    }
    let _ = writeln!(out, "{:<25} {:>6}", "Total Marks", report.total_marks);
    out
}

pub fn render_course(summary: &CourseSummary) -> String {
    let mut out = String::from("Course Details\n");
    let _ = writeln!(out, "{:<16} {:>8}", "Average Marks", format!("{:.2}", summary.average));
    let _ = writeln!(out, "{:<16} {:>8}", "Maximum Marks", summary.maximum);
    let _ = writeln!(out, "{:<16} {:>8}", "Entries", summary.entries);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MarkRecord;

    #[test]
    fn student_table_lists_rows_and_total() {
        let report = StudentReport {
            student_id: 1001,
            rows: vec![MarkRecord::new(1001, 2001, 56), MarkRecord::new(1001, 2002, 44)],
            total_marks: 100,
        };
        let text = render(&MarksReport::Student(report));

        assert!(text.starts_with("Student Details\n"));
        assert_eq!(text.lines().count(), 5);
        assert!(text.contains("2002"));
        assert!(text.lines().last().unwrap().ends_with("100"));
    }

    #[test]
    fn student_total_beyond_u32_is_printed_in_full() {
        let report = StudentReport {
            student_id: 1,
            rows: vec![MarkRecord::new(1, 10, u32::MAX), MarkRecord::new(1, 11, u32::MAX)],
            total_marks: 2 * u64::from(u32::MAX),
        };
        let text = render_student(&report);
        assert!(text.lines().last().unwrap().ends_with("8589934590"));
    }

    fn service() -> MarksReportService {
        MarksReportService::new(vec![
            MarkRecord::new(1001, 2001, 70),
            MarkRecord::new(1002, 2001, 80),
        ])
    }

    #[test]
    fn known_id_prints_table_and_exits_zero() {
        let output = produce(&service(), ReportTarget::Course(2001)).unwrap();
        assert!(matches!(&output, ReportOutput::Table(text) if text.starts_with("Course Details")));
        assert_eq!(output.exit_status(), 0);
    }

    #[test]
    fn unknown_id_is_invalid_input_and_exits_nonzero() {
        for target in [ReportTarget::Student(9999), ReportTarget::Course(9999)] {
            let output = produce(&service(), target).unwrap();
            assert_eq!(output, ReportOutput::InvalidInput);
            assert_eq!(output.exit_status(), 1);
        }
    }

    #[test]
    fn empty_sheet_is_invalid_input() {
        let empty = MarksReportService::new(Vec::new());
        let output = produce(&empty, ReportTarget::Student(1001)).unwrap();
        assert_eq!(output.exit_status(), 1);
    }

    #[test]
    fn course_summary_shows_two_decimals() {
        let summary = CourseSummary {
            course_id: 2001,
            entries: 2,
            average: 1.5,
            maximum: 2,
            marks: vec![1, 2],
        };
        let text = render_course(&summary);

        assert!(text.contains("1.50"));
        assert!(text.contains("Maximum Marks"));
    }
}
