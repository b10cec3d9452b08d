//! Shared test utilities.
//!
//! Helpers for setting up in-memory databases and building sections with sensible defaults.

use crate::{
    api,
    core::SectionService,
    db::SectionRepository,
    entities::NewSection,
    errors::Result,
};
use sea_orm::DatabaseConnection;

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Repository over a fresh in-memory database.
pub async fn setup_test_repository() -> Result<SectionRepository> {
    Ok(SectionRepository::new(setup_test_db().await?))
}

/// Service over a fresh in-memory database.
pub async fn setup_test_service() -> Result<SectionService> {
    Ok(SectionService::new(setup_test_repository().await?))
}

/// Full HTTP router over a fresh in-memory database, CORS open.
pub async fn setup_test_router() -> Result<axum::Router> {
    Ok(api::router(setup_test_service().await?, &[]))
}

/// Full HTTP router over an existing connection, e.g. a `MockDatabase` that fails queries.
pub fn router_over(db: DatabaseConnection) -> axum::Router {
    api::router(SectionService::new(SectionRepository::new(db)), &[])
}

/// Builds a section with the given number.
///
/// # Defaults
/// * temperatures: current 24, minimum 20
/// * capacities: current 50, minimum 30, maximum 60
/// * `warehouse_id` and `product_type_id`: 1
#[must_use]
pub const fn sample_new_section(section_number: i64) -> NewSection {
    NewSection {
        section_number,
        current_temperature: 24,
        minimum_temperature: 20,
        current_capacity: 50,
        minimum_capacity: 30,
        maximum_capacity: 60,
        warehouse_id: 1,
        product_type_id: 1,
    }
}
