//! Section storage - single-statement queries against the `sections` table.
//!
//! The repository owns the connection it was constructed with; there is no global handle.
//! It reports what the database did (rows found, rows affected) and leaves the
//! interpretation of "nothing matched" to the service layer.

use crate::{
    entities::{NewSection, Section, section},
    errors::Result,
};
use sea_orm::{ActiveValue::NotSet, PaginatorTrait, Set, prelude::*};
use tracing::{debug, instrument};

/// Storage access for sections.
#[derive(Debug)]
pub struct SectionRepository {
    db: DatabaseConnection,
}

impl SectionRepository {
    /// Creates a repository over the given connection.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Returns every stored section in whatever order the database yields them.
    #[instrument(skip(self))]
    pub async fn list_all(&self) -> Result<Vec<section::Model>> {
        Section::find().all(&self.db).await.map_err(Into::into)
    }

    /// Looks a section up by id, `None` when no row matches.
    #[instrument(skip(self))]
    pub async fn get_by_id(&self, id: i64) -> Result<Option<section::Model>> {
        Section::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(Into::into)
    }

    /// Reports whether any section uses `section_number`.
    #[instrument(skip(self))]
    pub async fn exists_by_section_number(&self, section_number: i64) -> Result<bool> {
        let count = Section::find()
            .filter(section::Column::SectionNumber.eq(section_number))
            .count(&self.db)
            .await?;
        Ok(count > 0)
    }

    /// Inserts a new row and returns the id the database assigned.
    #[instrument(skip(self))]
    pub async fn insert(&self, new_section: &NewSection) -> Result<i64> {
        let active = section::ActiveModel {
            id: NotSet,
            section_number: Set(new_section.section_number),
            current_temperature: Set(new_section.current_temperature),
            minimum_temperature: Set(new_section.minimum_temperature),
            current_capacity: Set(new_section.current_capacity),
            minimum_capacity: Set(new_section.minimum_capacity),
            maximum_capacity: Set(new_section.maximum_capacity),
            warehouse_id: Set(new_section.warehouse_id),
            product_type_id: Set(new_section.product_type_id),
        };

        let result = Section::insert(active).exec(&self.db).await?;
        debug!(id = result.last_insert_id, "Inserted section");
        Ok(result.last_insert_id)
    }

    /// Overwrites every column of the row identified by `model.id`.
    ///
    /// Returns the number of rows affected; an unknown id affects zero rows and is not an error.
    #[instrument(skip(self))]
    pub async fn update(&self, model: &section::Model) -> Result<u64> {
        let active = section::ActiveModel {
            id: NotSet,
            section_number: Set(model.section_number),
            current_temperature: Set(model.current_temperature),
            minimum_temperature: Set(model.minimum_temperature),
            current_capacity: Set(model.current_capacity),
            minimum_capacity: Set(model.minimum_capacity),
            maximum_capacity: Set(model.maximum_capacity),
            warehouse_id: Set(model.warehouse_id),
            product_type_id: Set(model.product_type_id),
        };

        let result = Section::update_many()
            .set(active)
            .filter(section::Column::Id.eq(model.id))
            .exec(&self.db)
            .await?;
        Ok(result.rows_affected)
    }

    /// Removes the row with `id`, returning the number of rows deleted.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> Result<u64> {
        let result = Section::delete_by_id(id).exec(&self.db).await?;
        Ok(result.rows_affected)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::errors::Error;
    use crate::test_utils::*;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase};

    #[tokio::test]
    async fn test_insert_then_get_by_id() -> Result<()> {
        let repo = setup_test_repository().await?;

        let id = repo.insert(&sample_new_section(1)).await?;
        let stored = repo.get_by_id(id).await?.unwrap();

        assert_eq!(stored.id, id);
        assert_eq!(stored.section_number, 1);
        assert_eq!(stored.current_temperature, 24);
        assert_eq!(stored.minimum_temperature, 20);
        assert_eq!(stored.current_capacity, 50);
        assert_eq!(stored.minimum_capacity, 30);
        assert_eq!(stored.maximum_capacity, 60);
        assert_eq!(stored.warehouse_id, 1);
        assert_eq!(stored.product_type_id, 1);
        Ok(())
    }

    #[tokio::test]
    async fn test_get_by_id_missing_is_none() -> Result<()> {
        let repo = setup_test_repository().await?;
        assert!(repo.get_by_id(42).await?.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn test_list_all() -> Result<()> {
        let repo = setup_test_repository().await?;
        assert!(repo.list_all().await?.is_empty());

        for number in 1..=3 {
            repo.insert(&sample_new_section(number)).await?;
        }

        let sections = repo.list_all().await?;
        assert_eq!(sections.len(), 3);
        let mut numbers: Vec<i64> = sections.iter().map(|s| s.section_number).collect();
        numbers.sort_unstable();
        assert_eq!(numbers, vec![1, 2, 3]);
        Ok(())
    }

    #[tokio::test]
    async fn test_exists_by_section_number() -> Result<()> {
        let repo = setup_test_repository().await?;
        assert!(!repo.exists_by_section_number(9).await?);

        repo.insert(&sample_new_section(9)).await?;
        assert!(repo.exists_by_section_number(9).await?);
        assert!(!repo.exists_by_section_number(10).await?);
        Ok(())
    }

    #[tokio::test]
    async fn test_update_overwrites_all_columns() -> Result<()> {
        let repo = setup_test_repository().await?;
        let id = repo.insert(&sample_new_section(3)).await?;

        let replacement = section::Model {
            id,
            section_number: 3,
            current_temperature: 25,
            minimum_temperature: 16,
            current_capacity: 54,
            minimum_capacity: 35,
            maximum_capacity: 66,
            warehouse_id: 45,
            product_type_id: 35,
        };

        let affected = repo.update(&replacement).await?;
        assert_eq!(affected, 1);
        assert_eq!(repo.get_by_id(id).await?.unwrap(), replacement);
        Ok(())
    }

    #[tokio::test]
    async fn test_update_unknown_id_affects_nothing() -> Result<()> {
        let repo = setup_test_repository().await?;
        let ghost = section::Model {
            id: 99,
            section_number: 1,
            current_temperature: 0,
            minimum_temperature: 0,
            current_capacity: 0,
            minimum_capacity: 0,
            maximum_capacity: 0,
            warehouse_id: 1,
            product_type_id: 1,
        };

        assert_eq!(repo.update(&ghost).await?, 0);
        assert!(repo.list_all().await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_delete_removes_row() -> Result<()> {
        let repo = setup_test_repository().await?;
        let id = repo.insert(&sample_new_section(4)).await?;

        assert_eq!(repo.delete(id).await?, 1);
        assert!(repo.get_by_id(id).await?.is_none());
        assert_eq!(repo.delete(id).await?, 0);
        Ok(())
    }

    #[tokio::test]
    async fn test_duplicate_section_number_rejected_by_schema() -> Result<()> {
        let repo = setup_test_repository().await?;
        repo.insert(&sample_new_section(5)).await?;

        let result = repo.insert(&sample_new_section(5)).await;
        assert!(matches!(result, Err(Error::Database(_))));
        Ok(())
    }

    #[tokio::test]
    async fn test_query_failure_surfaces_database_error() {
        let db = MockDatabase::new(DatabaseBackend::Sqlite)
            .append_query_errors([DbErr::Custom("connection lost".to_string())])
            .into_connection();
        let repo = SectionRepository::new(db);

        let result = repo.list_all().await;
        assert!(matches!(result, Err(Error::Database(_))));
    }
}
