//! Marks records and the course / student aggregates computed from them

use crate::domain::{DomainError, DomainResult};

/// One row of a marks sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkRecord {
    pub student_id: u32,
    pub course_id: u32,
    pub marks: u32,
}

impl MarkRecord {
    pub fn new(student_id: u32, course_id: u32, marks: u32) -> Self {
        Self {
            student_id,
            course_id,
            marks,
        }
    }
}

/// Average marks for a course; `0.0` when no row matches.
pub fn average(rows: &[MarkRecord], course_id: u32) -> f64 {
    let (total, count) = rows
        .iter()
        .filter(|r| r.course_id == course_id)
        .fold((0u64, 0u64), |(total, count), r| {
            (total + u64::from(r.marks), count + 1)
        });

    if count == 0 {
        0.0
    } else {
        total as f64 / count as f64
    }
}

/// Highest marks for a course; `None` when no row matches.
pub fn maximum(rows: &[MarkRecord], course_id: u32) -> Option<u32> {
    rows.iter()
        .filter(|r| r.course_id == course_id)
        .map(|r| r.marks)
        .max()
}

/// Average and maximum marks of one course
#[derive(Debug, Clone, PartialEq)]
pub struct CourseSummary {
    pub course_id: u32,
    pub entries: usize,
    pub average: f64,
    pub maximum: u32,
    /// Every matching mark, in sheet order
    pub marks: Vec<u32>,
}

/// Summarise a course that must appear in the sheet.
pub fn course_summary(rows: &[MarkRecord], course_id: u32) -> DomainResult<CourseSummary> {
    let marks: Vec<u32> = rows
        .iter()
        .filter(|r| r.course_id == course_id)
        .map(|r| r.marks)
        .collect();

    let Some(maximum) = maximum(rows, course_id) else {
        return Err(DomainError::not_found("Course", "course_id", course_id));
    };

    Ok(CourseSummary {
        course_id,
        entries: marks.len(),
        average: average(rows, course_id),
        maximum,
        marks,
    })
}

/// All rows of one student plus their total marks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentReport {
    pub student_id: u32,
    pub rows: Vec<MarkRecord>,
    pub total_marks: u64,
}

/// Collect the rows of a student that must appear in the sheet.
pub fn student_report(rows: &[MarkRecord], student_id: u32) -> DomainResult<StudentReport> {
    let rows: Vec<MarkRecord> = rows
        .iter()
        .filter(|r| r.student_id == student_id)
        .copied()
        .collect();

    if rows.is_empty() {
        return Err(DomainError::not_found("Student", "student_id", student_id));
    }

    let total_marks = rows.iter().map(|r| u64::from(r.marks)).sum();
    Ok(StudentReport {
        student_id,
        rows,
        total_marks,
    })
}

// ── Tests ──────────────────────────────────────────────────────
