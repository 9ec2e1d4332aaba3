pub use super::owner::Entity as Owner;
pub use super::pet::Entity as Pet;
pub use super::pet_type::Entity as PetType;
