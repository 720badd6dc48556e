use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Not found: {entity} with {field}={value}")]
    NotFound {
        entity: &'static str,
        field: &'static str,
        value: String,
    },

    #[error("Validation: {0}")]
    Validation(String),

    #[error("Already exists: {entity} with {field}={value}")]
    DuplicateKey {
        entity: &'static str,
        field: &'static str,
        value: String,
    },

    #[error("Student {student_id} is already enrolled in course {course_id}")]
    AlreadyEnrolled { student_id: i32, course_id: i32 },

    #[error("Student {student_id} is not enrolled in course {course_id}")]
    NotEnrolled { student_id: i32, course_id: i32 },

    #[error("Storage error: {0}")]
    Storage(String),
}

impl DomainError {
    pub fn not_found(entity: &'static str, field: &'static str, value: impl ToString) -> Self {
        Self::NotFound {
            entity,
            field,
            value: value.to_string(),
        }
    }

    pub fn duplicate(entity: &'static str, field: &'static str, value: impl ToString) -> Self {
        Self::DuplicateKey {
            entity,
            field,
            value: value.to_string(),
        }
    }

    /// Whether the caller can fix the request (everything except storage failures).
    pub fn is_caller_error(&self) -> bool {
        !matches!(self, DomainError::Storage(_))
    }
}

#[derive(Debug, Error)]
pub enum InfraError {
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Infra(#[from] InfraError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_names_entity_and_key() {
        let err = DomainError::not_found("Student", "student_id", 7);
        assert_eq!(err.to_string(), "Not found: Student with student_id=7");
    }

    #[test]
    fn duplicate_message_names_unique_field() {
        let err = DomainError::duplicate("Course", "course_code", "C1");
        assert_eq!(err.to_string(), "Already exists: Course with course_code=C1");
    }

    #[test]
    fn storage_errors_are_not_caller_errors() {
        assert!(!DomainError::Storage("disk full".into()).is_caller_error());
        assert!(DomainError::Validation("x".into()).is_caller_error());
        assert!(DomainError::NotEnrolled {
            student_id: 1,
            course_id: 2
        }
        .is_caller_error());
    }
}
