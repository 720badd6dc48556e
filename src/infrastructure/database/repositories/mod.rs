//! Database repository implementations
//!
//! Per-aggregate SeaORM repositories + unified RepositoryProvider.

pub mod course_repository;
pub mod enrollment_repository;
pub mod repository_provider;
pub mod student_repository;

pub use repository_provider::SeaOrmRepositoryProvider;

use sea_orm::{DbErr, SqlErr};

use crate::domain::DomainError;

pub(crate) fn db_err(e: DbErr) -> DomainError {
    DomainError::Storage(format!("Database error: {}", e))
}

pub(crate) fn is_unique_violation(e: &DbErr) -> bool {
    matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}

pub(crate) fn is_foreign_key_violation(e: &DbErr) -> bool {
    matches!(e.sql_err(), Some(SqlErr::ForeignKeyConstraintViolation(_)))
}

/// Translate a write failure, reporting unique index hits as `DuplicateKey`.
pub(crate) fn unique_err(
    e: DbErr,
    entity: &'static str,
    field: &'static str,
    value: &str,
) -> DomainError {
    if is_unique_violation(&e) {
        DomainError::duplicate(entity, field, value)
    } else {
        db_err(e)
    }
}
