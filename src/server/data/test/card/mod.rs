use crate::server::{
    data::card::CardRepository,
    model::card::{CreateCardParam, UpdateCardParam},
};
use entity::prelude::*;
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;

mod create;
mod delete;
mod get_all;

fn create_param(pack_id: Option<Uuid>, name: &str) -> CreateCardParam {
    CreateCardParam {
        pack_id,
        name: name.to_string(),
        card_number: None,
        rarity: None,
        card_type: None,
        description: None,
        image_url: None,
    }
}
