use crate::server::{
    data::owner::OwnerRepository,
    model::owner::{OwnerFields, UpdateOwnerParams},
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find_page_by_first_name_prefix;
mod get_all;
mod update;

fn fields(first_name: &str, last_name: &str) -> OwnerFields {
    OwnerFields {
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        address: "638 Cardinal Ave.".to_string(),
        city: "Sun Prairie".to_string(),
        telephone: "6085551749".to_string(),
    }
}
