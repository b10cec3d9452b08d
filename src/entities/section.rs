//! Section entity - A storage slot inside a warehouse.
//!
//! Each section carries its business number, temperature readings and capacity bounds,
//! plus references to the warehouse it lives in and the product type it stores.
//! Neither the temperature pair nor the capacity triple is cross-checked by the service.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Section database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "sections")]
pub struct Model {
    /// Unique identifier, assigned by the database on insert
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Business number of the section, unique across all sections
    #[sea_orm(unique)]
    pub section_number: i64,
    /// Current temperature in degrees
    pub current_temperature: i64,
    /// Minimum temperature in degrees
    pub minimum_temperature: i64,
    /// Current capacity in units
    pub current_capacity: i64,
    /// Minimum capacity in units
    pub minimum_capacity: i64,
    /// Maximum capacity in units
    pub maximum_capacity: i64,
    /// Warehouse holding this section (not modeled here)
    pub warehouse_id: i64,
    /// Product type stored in this section (not modeled here)
    pub product_type_id: i64,
}

/// Sections have no modeled relations
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Field values for a section that has not been stored yet.
///
/// Mirrors [`Model`] without the database-assigned `id`. Every field is required when
/// deserializing; the camelCase spellings are accepted as aliases.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewSection {
    /// Business number of the section
    #[serde(alias = "sectionNumber")]
    pub section_number: i64,
    /// Current temperature in degrees
    #[serde(alias = "currentTemperature")]
    pub current_temperature: i64,
    /// Minimum temperature in degrees
    #[serde(alias = "minimumTemperature")]
    pub minimum_temperature: i64,
    /// Current capacity in units
    #[serde(alias = "currentCapacity")]
    pub current_capacity: i64,
    /// Minimum capacity in units
    #[serde(alias = "minimumCapacity")]
    pub minimum_capacity: i64,
    /// Maximum capacity in units
    #[serde(alias = "maximumCapacity")]
    pub maximum_capacity: i64,
    /// Warehouse holding this section
    #[serde(alias = "warehouseId")]
    pub warehouse_id: i64,
    /// Product type stored in this section
    #[serde(alias = "productTypeId")]
    pub product_type_id: i64,
}
