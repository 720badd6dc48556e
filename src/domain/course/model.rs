//! Course domain entity

use crate::domain::DomainResult;
use crate::shared::validations::{optional_text, require_text};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    pub course_id: i32,
    /// Catalogue code, e.g. "MA101" (unique)
    pub course_code: String,
    pub course_name: String,
    pub course_description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCourse {
    pub course_code: String,
    pub course_name: String,
    pub course_description: Option<String>,
}

impl NewCourse {
    pub fn new(course_code: impl Into<String>, course_name: impl Into<String>) -> Self {
        Self {
            course_code: course_code.into(),
            course_name: course_name.into(),
            course_description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.course_description = Some(description.into());
        self
    }

    pub fn validated(self) -> DomainResult<Self> {
        Ok(Self {
            course_code: require_text("course_code", &self.course_code)?,
            course_name: require_text("course_name", &self.course_name)?,
            course_description: optional_text(self.course_description.as_deref()),
        })
    }
}

/// Partial update of a course; a blank description clears it
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoursePatch {
    pub course_code: Option<String>,
    pub course_name: Option<String>,
    pub course_description: Option<String>,
}

impl Course {
    pub fn apply(&self, patch: CoursePatch) -> DomainResult<Course> {
        let course_code = match patch.course_code {
            Some(v) => require_text("course_code", &v)?,
            None => self.course_code.clone(),
        };
        let course_name = match patch.course_name {
            Some(v) => require_text("course_name", &v)?,
            None => self.course_name.clone(),
        };
        let course_description = match patch.course_description {
            Some(v) => optional_text(Some(&v)),
            None => self.course_description.clone(),
        };

        Ok(Course {
            course_id: self.course_id,
            course_code,
            course_name,
            course_description,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DomainError;

    #[test]
    fn validated_requires_code_and_name() {
        assert!(matches!(
            NewCourse::new(" ", "Algebra").validated(),
            Err(DomainError::Validation(msg)) if msg.contains("course_code")
        ));
        assert!(matches!(
            NewCourse::new("C1", "").validated(),
            Err(DomainError::Validation(msg)) if msg.contains("course_name")
        ));
    }

    #[test]
    fn patch_updates_code_and_keeps_rest() {
        let course = Course {
            course_id: 3,
            course_code: "C1".into(),
            course_name: "Algebra".into(),
            course_description: Some("Linear".into()),
        };
        let patch = CoursePatch {
            course_code: Some(" C2 ".into()),
            ..Default::default()
        };
        let updated = course.apply(patch).unwrap();
        assert_eq!(updated.course_code, "C2");
        assert_eq!(updated.course_name, "Algebra");
        assert_eq!(updated.course_description.as_deref(), Some("Linear"));
        assert_eq!(updated.course_id, 3);
    }
}
