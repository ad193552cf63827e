use crate::server::{
    data::deck::DeckRepository,
    model::deck::{CreateDeckParam, UpdateDeckParam},
};
use entity::prelude::*;
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;

mod create;
mod delete;
mod update;
