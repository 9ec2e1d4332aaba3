//! Serializable DTOs shared by the HTTP API and the remote service clients.

pub mod api;
pub mod insurance;
pub mod nutrition;
pub mod owner;
pub mod pet;
