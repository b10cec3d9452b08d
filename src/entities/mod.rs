//! Entity module - Contains the SeaORM entity definitions for the database.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod section;

pub use section::{
    Column as SectionColumn, Entity as Section, Model as SectionModel, NewSection,
};
