use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        payment::{CreatePaymentIntentDto, PaymentDto, PaymentIntentDto, SettlePaymentDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Capability},
        model::payment::SettleParam,
        service::{payment::PaymentService, settlement::SettlementService},
        state::AppState,
    },
};

pub static PAYMENT_TAG: &str = "payment";

/// POST /api/create-payment-intent - Create a processor intent for the caller's reservations
///
/// The charged amount is the sum of the reservation price snapshots.
#[utoipa::path(
    post,
    path = "/api/create-payment-intent",
    tag = PAYMENT_TAG,
    request_body = CreatePaymentIntentDto,
    responses(
        (status = 200, description = "Intent created", body = PaymentIntentDto),
        (status = 400, description = "No reservations or nothing to pay", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "A reservation belongs to another student", body = ErrorDto),
        (status = 404, description = "Reservation not found", body = ErrorDto),
        (status = 502, description = "Payment processor failure", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn create_payment_intent(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreatePaymentIntentDto>,
) -> Result<impl IntoResponse, AppError> {
    let payer = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let intent = PaymentService::new(&state.db, state.payment_gateway.as_ref())
        .create_intent(&payer, &payload.reservation_ids, &state.currency)
        .await?;

    Ok((
        StatusCode::OK,
        Json(PaymentIntentDto {
            client_secret: intent.client_secret,
            amount: intent.amount,
            currency: intent.currency,
        }),
    ))
}

/// POST /api/payments - Settle reservations into a payment
#[utoipa::path(
    post,
    path = "/api/payments",
    tag = PAYMENT_TAG,
    request_body = SettlePaymentDto,
    responses(
        (status = 201, description = "Payment recorded", body = PaymentDto),
        (status = 400, description = "Empty or duplicated reservation ids", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "A reservation belongs to another student", body = ErrorDto),
        (status = 404, description = "Reservation or class not found", body = ErrorDto),
        (status = 409, description = "Class sold out", body = ErrorDto),
        (status = 422, description = "Amount differs from the reserved total", body = ErrorDto),
        (status = 503, description = "Transient store error, retry unchanged", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn settle_payment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<SettlePaymentDto>,
) -> Result<impl IntoResponse, AppError> {
    let payer = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let payment = SettlementService::new(&state.db)
        .settle(SettleParam {
            payer_email: payer.email,
            reservation_ids: payload.reservation_ids,
            amount: payload.amount,
            currency: payload.currency,
            transaction_id: payload.transaction_id,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(payment.into_dto())))
}

/// GET /api/payments/{email} - The caller's payment history, newest first
#[utoipa::path(
    get,
    path = "/api/payments/{email}",
    tag = PAYMENT_TAG,
    params(("email" = String, Path, description = "Caller's own email")),
    responses(
        (status = 200, description = "Payments, newest first", body = Vec<PaymentDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Email differs from the token identity", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_payment_history(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(email): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let student = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Capability::SelfOnly(email)])
        .await?;

    let payments = PaymentService::new(&state.db, state.payment_gateway.as_ref())
        .history(&student.email)
        .await?;

    let payments_dto: Vec<_> = payments.into_iter().map(|p| p.into_dto()).collect();

    Ok((StatusCode::OK, Json(payments_dto)))
}
