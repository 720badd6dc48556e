//! Marks report service
//!
//! Holds one loaded marks sheet and answers student / course report queries
//! against it.

use std::path::Path;

use crate::domain::marks::{course_summary, student_report};
use crate::domain::{CourseSummary, DomainResult, MarkRecord, StudentReport};
use crate::infrastructure::marks_sheet::load_marks;
use crate::shared::errors::AppError;

/// What a report is about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportTarget {
    Student(u32),
    Course(u32),
}

impl ReportTarget {
    /// Exactly one of the two ids must be given.
    pub fn from_selection(student: Option<u32>, course: Option<u32>) -> Option<Self> {
        match (student, course) {
            (Some(id), None) => Some(Self::Student(id)),
            (None, Some(id)) => Some(Self::Course(id)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum MarksReport {
    Student(StudentReport),
    Course(CourseSummary),
}

pub struct MarksReportService {
    rows: Vec<MarkRecord>,
}

impl MarksReportService {
    pub fn new(rows: Vec<MarkRecord>) -> Self {
        Self { rows }
    }

    pub fn load(path: &Path) -> Result<Self, AppError> {
        Ok(Self::new(load_marks(path)?))
    }

    /// Build a report; ids absent from the sheet fail with `NotFound`.
    pub fn report(&self, target: ReportTarget) -> DomainResult<MarksReport> {
        match target {
            ReportTarget::Student(id) => student_report(&self.rows, id).map(MarksReport::Student),
            ReportTarget::Course(id) => course_summary(&self.rows, id).map(MarksReport::Course),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DomainError;

    fn service() -> MarksReportService {
        MarksReportService::new(vec![
            MarkRecord::new(1, 10, 70),
            MarkRecord::new(2, 10, 80),
            MarkRecord::new(3, 10, 90),
        ])
    }

    #[test]
    fn course_report() {
        let MarksReport::Course(summary) = service().report(ReportTarget::Course(10)).unwrap()
        else {
            panic!("expected course report");
        };
        assert_eq!(summary.average, 80.0);
        assert_eq!(summary.maximum, 90);
    }

    #[test]
    fn student_report() {
        let report = service().report(ReportTarget::Student(2)).unwrap();
        assert!(matches!(report, MarksReport::Student(r) if r.total_marks == 80));
    }

    #[test]
    fn selection_needs_exactly_one_id() {
        assert_eq!(
            ReportTarget::from_selection(Some(1), None),
            Some(ReportTarget::Student(1))
        );
        assert_eq!(
            ReportTarget::from_selection(None, Some(10)),
            Some(ReportTarget::Course(10))
        );
        assert_eq!(ReportTarget::from_selection(Some(1), Some(10)), None);
        assert_eq!(ReportTarget::from_selection(None, None), None);
    }

    #[test]
    fn unknown_ids_are_not_found() {
        assert!(matches!(
            service().report(ReportTarget::Course(11)),
            Err(DomainError::NotFound { .. })
        ));
        assert!(matches!(
            service().report(ReportTarget::Student(4)),
            Err(DomainError::NotFound { .. })
        ));
    }
}
