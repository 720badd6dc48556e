//! Health check handler
//!
//! Counts the rows of the three roster tables. A successful count shows the
//! database is reachable and migrated; the numbers come along for free.

use std::sync::Arc;
use std::time::Instant;

use axum::{extract::State, http::StatusCode, Json};
use chrono::{DateTime, Utc};
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, PaginatorTrait};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::infrastructure::database::entities::{Course, Enrollment, Student};

/// Health check state
#[derive(Clone)]
pub struct HealthState {
    pub db: DatabaseConnection,
    pub started_at: Arc<Instant>,
}

impl HealthState {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            started_at: Arc::new(Instant::now()),
        }
    }
}

/// Roster service health
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Always `roster-service`
    pub service: String,
    /// `ok` or `unavailable`
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub checked_at: DateTime<Utc>,
    pub store: StoreHealth,
    /// Absent when the store could not be read
    pub records: Option<RecordCounts>,
}

/// Whether the record store answered
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StoreHealth {
    pub reachable: bool,
    pub latency_ms: Option<u64>,
    pub error: Option<String>,
}

/// Rows stored per table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RecordCounts {
    pub students: u64,
    pub courses: u64,
    pub enrollments: u64,
}

async fn count_records(db: &DatabaseConnection) -> Result<RecordCounts, DbErr> {
    Ok(RecordCounts {
        students: Student::find().count(db).await?,
        courses: Course::find().count(db).await?,
        enrollments: Enrollment::find().count(db).await?,
    })
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Record store readable", body = HealthResponse),
        (status = 503, description = "Record store unreachable or not migrated", body = HealthResponse)
    )
)]
pub async fn health_check(State(state): State<HealthState>) -> (StatusCode, Json<HealthResponse>) {
    let started = Instant::now();
    let (http_status, store, records) = match count_records(&state.db).await {
        Ok(counts) => (
            StatusCode::OK,
            StoreHealth {
                reachable: true,
                latency_ms: Some(started.elapsed().as_millis() as u64),
                error: None,
            },
            Some(counts),
        ),
        Err(e) => {
            tracing::warn!("Health check could not read the record store: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                StoreHealth {
                    reachable: false,
                    latency_ms: None,
                    error: Some(e.to_string()),
                },
                None,
            )
        }
    };

    let status = if store.reachable { "ok" } else { "unavailable" };

    (
        http_status,
        Json(HealthResponse {
            service: "roster-service".to_string(),
            status: status.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            uptime_seconds: state.started_at.elapsed().as_secs(),
            checked_at: Utc::now(),
            store,
            records,
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::Database;

    #[tokio::test]
    async fn unmigrated_store_is_unavailable() {
        let db = Database::connect("sqlite::memory:").await.unwrap();
        let (status, Json(body)) = health_check(State(HealthState::new(db))).await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body.status, "unavailable");
        assert_eq!(body.service, "roster-service");
        assert!(!body.store.reachable);
        assert!(body.store.error.is_some());
        assert!(body.records.is_none());
    }
}
