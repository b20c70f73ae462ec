use crate::server::{
    data::payment::PaymentRepository,
    model::{payment::CreatePaymentParam, reservation::Reservation},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_by_student;

fn param(email: &str, amount: i64) -> CreatePaymentParam {
    CreatePaymentParam {
        student_email: email.to_string(),
        amount,
        currency: "inr".to_string(),
        transaction_id: Some("pi_test".to_string()),
    }
}
