//! Infrastructure layer - external concerns

pub mod database;
pub mod marks_sheet;

pub use database::repositories::SeaOrmRepositoryProvider;
pub use database::{init_database, DatabaseConfig};
pub use marks_sheet::{load_marks, read_marks};
