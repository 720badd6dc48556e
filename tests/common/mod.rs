#![allow(dead_code)]

use std::sync::Arc;

use roster::application::EnrollmentService;
use roster::domain::{Course, NewCourse, NewStudent, RepositoryProvider, Student};
use roster::infrastructure::database::migrator::Migrator;
use roster::{init_database, DatabaseConfig, SeaOrmRepositoryProvider};
use sea_orm::DatabaseConnection;
use sea_orm_migration::MigratorTrait;

pub struct TestDb {
    pub db: DatabaseConnection,
    pub repos: Arc<dyn RepositoryProvider>,
    pub service: Arc<EnrollmentService>,
}

/// Fresh, migrated in-memory database per test.
pub async fn setup() -> TestDb {
    let db = init_database(&DatabaseConfig::in_memory()).await.unwrap();
    Migrator::up(&db, None).await.unwrap();

    let repos: Arc<dyn RepositoryProvider> = Arc::new(SeaOrmRepositoryProvider::new(db.clone()));
    let service = Arc::new(EnrollmentService::new(repos.clone()));
    TestDb { db, repos, service }
}

pub async fn student(t: &TestDb, roll: &str, first: &str) -> Student {
    t.repos
        .students()
        .create(NewStudent::new(roll, first))
        .await
        .unwrap()
}

pub async fn course(t: &TestDb, code: &str, name: &str) -> Course {
    t.repos
        .courses()
        .create(NewCourse::new(code, name))
        .await
        .unwrap()
}
