//! SeaORM entity models for the customers database.

pub mod prelude;

pub mod owner;
pub mod pet;
pub mod pet_type;
