use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::user::{Role, SignInParam},
};
use test_utils::{builder::TestBuilder, factory};

mod get_all_paginated;
mod set_role;
mod sign_in;
