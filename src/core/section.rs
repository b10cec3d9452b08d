//! Section business logic - uniqueness rule on create and partial-update merging.
//!
//! The service owns a [`SectionRepository`] handed to it at construction. It turns
//! "no row" answers from storage into [`Error::SectionNotFound`] and enforces that
//! section numbers stay unique, both on create and when an update changes the number.

use crate::{
    db::SectionRepository,
    entities::{NewSection, section},
    errors::{Error, Result},
};
use sea_orm::SqlErr;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

/// Partial update for a section. `None` fields keep their stored value.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionPatch {
    /// New section number
    #[serde(default, alias = "sectionNumber")]
    pub section_number: Option<i64>,
    /// New current temperature
    #[serde(default, alias = "currentTemperature")]
    pub current_temperature: Option<i64>,
    /// New minimum temperature
    #[serde(default, alias = "minimumTemperature")]
    pub minimum_temperature: Option<i64>,
    /// New current capacity
    #[serde(default, alias = "currentCapacity")]
    pub current_capacity: Option<i64>,
    /// New minimum capacity
    #[serde(default, alias = "minimumCapacity")]
    pub minimum_capacity: Option<i64>,
    /// New maximum capacity
    #[serde(default, alias = "maximumCapacity")]
    pub maximum_capacity: Option<i64>,
    /// New warehouse reference
    #[serde(default, alias = "warehouseId")]
    pub warehouse_id: Option<i64>,
    /// New product type reference
    #[serde(default, alias = "productTypeId")]
    pub product_type_id: Option<i64>,
}

impl SectionPatch {
    /// Overlays every present field onto `current`. The id is never touched.
    #[must_use]
    pub fn apply_to(&self, current: section::Model) -> section::Model {
        section::Model {
            id: current.id,
            section_number: self.section_number.unwrap_or(current.section_number),
            current_temperature: self
                .current_temperature
                .unwrap_or(current.current_temperature),
            minimum_temperature: self
                .minimum_temperature
                .unwrap_or(current.minimum_temperature),
            current_capacity: self.current_capacity.unwrap_or(current.current_capacity),
            minimum_capacity: self.minimum_capacity.unwrap_or(current.minimum_capacity),
            maximum_capacity: self.maximum_capacity.unwrap_or(current.maximum_capacity),
            warehouse_id: self.warehouse_id.unwrap_or(current.warehouse_id),
            product_type_id: self.product_type_id.unwrap_or(current.product_type_id),
        }
    }

    /// True when no field is present.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.section_number.is_none()
            && self.current_temperature.is_none()
            && self.minimum_temperature.is_none()
            && self.current_capacity.is_none()
            && self.minimum_capacity.is_none()
            && self.maximum_capacity.is_none()
            && self.warehouse_id.is_none()
            && self.product_type_id.is_none()
    }
}

/// A unique-index violation from the database means a concurrent writer took the number.
fn map_unique_violation(err: Error, section_number: i64) -> Error {
    match err {
        Error::Database(ref db_err)
            if matches!(db_err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) =>
        {
            Error::DuplicateSectionNumber { section_number }
        }
        other => other,
    }
}

/// Business operations on sections.
#[derive(Debug)]
pub struct SectionService {
    repository: SectionRepository,
}

impl SectionService {
    /// Creates a service over the given repository.
    #[must_use]
    pub const fn new(repository: SectionRepository) -> Self {
        Self { repository }
    }

    /// Lists every section.
    ///
    /// # Errors
    /// Returns an error if the database query fails.
    #[instrument(skip(self))]
    pub async fn list_all(&self) -> Result<Vec<section::Model>> {
        self.repository.list_all().await
    }

    /// Fetches one section by id.
    ///
    /// # Errors
    /// Returns [`Error::SectionNotFound`] when no section has this id, or a database error.
    #[instrument(skip(self))]
    pub async fn get_by_id(&self, id: i64) -> Result<section::Model> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(Error::SectionNotFound { id })
    }

    /// Stores a new section and returns it as persisted, id included.
    ///
    /// # Errors
    /// Returns [`Error::DuplicateSectionNumber`] when the number is taken, or a database error.
    #[instrument(skip(self))]
    pub async fn create(&self, new_section: NewSection) -> Result<section::Model> {
        let section_number = new_section.section_number;
        if self
            .repository
            .exists_by_section_number(section_number)
            .await?
        {
            warn!(section_number, "Rejected duplicate section number");
            return Err(Error::DuplicateSectionNumber { section_number });
        }

        let id = self
            .repository
            .insert(&new_section)
            .await
            .map_err(|e| map_unique_violation(e, section_number))?;
        info!(id, section_number, "Created section");

        self.get_by_id(id).await
    }

    /// Merges `patch` onto the stored section and persists the result.
    ///
    /// # Errors
    /// Returns [`Error::SectionNotFound`] for an unknown id, [`Error::DuplicateSectionNumber`]
    /// when the patch moves the section onto a number another section uses, or a database error.
    #[instrument(skip(self))]
    pub async fn update(&self, id: i64, patch: &SectionPatch) -> Result<section::Model> {
        let current = self.get_by_id(id).await?;
        let previous_number = current.section_number;
        let merged = patch.apply_to(current);

        if merged.section_number != previous_number
            && self
                .repository
                .exists_by_section_number(merged.section_number)
                .await?
        {
            warn!(
                id,
                section_number = merged.section_number,
                "Rejected update onto an existing section number"
            );
            return Err(Error::DuplicateSectionNumber {
                section_number: merged.section_number,
            });
        }

        self.repository
            .update(&merged)
            .await
            .map_err(|e| map_unique_violation(e, merged.section_number))?;
        info!(id, "Updated section");

        Ok(merged)
    }

    /// Deletes the section with `id`.
    ///
    /// # Errors
    /// Returns [`Error::SectionNotFound`] when no section has this id, or a database error.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> Result<()> {
        self.get_by_id(id).await?;

        if self.repository.delete(id).await? == 0 {
            // Removed by someone else between the lookup and the delete.
            return Err(Error::SectionNotFound { id });
        }
        info!(id, "Deleted section");
        Ok(())
    }
}
