use crate::server::{
    data::reservation::ReservationRepository, model::reservation::CreateReservationParam,
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find;
