use crate::server::{
    data::pet::PetRepository,
    model::pet::{CreatePetParams, UpdatePetParams},
};
use chrono::NaiveDate;
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find_page_by_name_prefix;
mod get_with_owner_and_type;
mod update;
