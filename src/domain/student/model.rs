//! Student domain entity

use crate::domain::DomainResult;
use crate::shared::validations::{optional_text, require_text};

/// A registered student
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    /// Surrogate key assigned by the store
    pub student_id: i32,
    /// Institutional roll number (unique)
    pub roll_number: String,
    pub first_name: String,
    pub last_name: Option<String>,
}

/// Fields for a student that has not been stored yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStudent {
    pub roll_number: String,
    pub first_name: String,
    pub last_name: Option<String>,
}

impl NewStudent {
    pub fn new(roll_number: impl Into<String>, first_name: impl Into<String>) -> Self {
        Self {
            roll_number: roll_number.into(),
            first_name: first_name.into(),
            last_name: None,
        }
    }

    pub fn with_last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = Some(last_name.into());
        self
    }

    /// Trim all fields and reject empty required ones
    pub fn validated(self) -> DomainResult<Self> {
        Ok(Self {
            roll_number: require_text("roll_number", &self.roll_number)?,
            first_name: require_text("first_name", &self.first_name)?,
            last_name: optional_text(self.last_name.as_deref()),
        })
    }
}

/// Partial update of a student.
///
/// `None` keeps the stored value. For `last_name`, a blank string clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentPatch {
    pub roll_number: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl Student {
    /// Apply a patch, validating every field that it touches
    pub fn apply(&self, patch: StudentPatch) -> DomainResult<Student> {
        let roll_number = match patch.roll_number {
            Some(v) => require_text("roll_number", &v)?,
            None => self.roll_number.clone(),
        };
        let first_name = match patch.first_name {
            Some(v) => require_text("first_name", &v)?,
            None => self.first_name.clone(),
        };
        let last_name = match patch.last_name {
            Some(v) => optional_text(Some(&v)),
            None => self.last_name.clone(),
        };

        Ok(Student {
            student_id: self.student_id,
            roll_number,
            first_name,
            last_name,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DomainError;

    fn ann() -> Student {
        Student {
            student_id: 1,
            roll_number: "R1".into(),
            first_name: "Ann".into(),
            last_name: Some("Lee".into()),
        }
    }

    #[test]
    fn validated_trims_fields() {
        let s = NewStudent::new(" R1 ", " Ann ")
            .with_last_name("  ")
            .validated()
            .unwrap();
        assert_eq!(s.roll_number, "R1");
        assert_eq!(s.first_name, "Ann");
        assert_eq!(s.last_name, None);
    }

    #[test]
    fn validated_requires_roll_number() {
        let err = NewStudent::new("", "Ann").validated().unwrap_err();
        assert!(matches!(err, DomainError::Validation(msg) if msg.contains("roll_number")));
    }

    #[test]
    fn validated_requires_first_name() {
        let err = NewStudent::new("R1", " ").validated().unwrap_err();
        assert!(matches!(err, DomainError::Validation(msg) if msg.contains("first_name")));
    }

    #[test]
    fn empty_patch_keeps_everything() {
        let s = ann();
        assert_eq!(s.apply(StudentPatch::default()).unwrap(), s);
    }

    #[test]
    fn patch_clears_last_name_with_blank() {
        let patch = StudentPatch {
            last_name: Some("".into()),
            ..Default::default()
        };
        assert_eq!(ann().apply(patch).unwrap().last_name, None);
    }

    #[test]
    fn patch_rejects_blank_first_name() {
        let patch = StudentPatch {
            first_name: Some("  ".into()),
            ..Default::default()
        };
        assert!(matches!(ann().apply(patch), Err(DomainError::Validation(_))));
    }
}
