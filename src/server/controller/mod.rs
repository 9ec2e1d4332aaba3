//! HTTP request handlers.
//!
//! Controllers convert request DTOs to operation parameters, call the service layer,
//! and convert the resulting domain models back to DTOs.

pub mod owner;
pub mod pet;
