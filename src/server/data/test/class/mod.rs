use crate::server::{
    data::class::ClassRepository,
    model::class::{CreateClassParam, SeatDecrement},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod take_seat;
