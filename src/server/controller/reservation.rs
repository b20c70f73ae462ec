use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        reservation::{ReservationDto, ReservationQuery, SelectClassDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Capability},
        model::reservation::SelectClassParam,
        service::reservation::ReservationService,
        state::AppState,
    },
};

pub static RESERVATION_TAG: &str = "reservation";

/// GET /api/selected-classes?email= - The caller's selected classes
#[utoipa::path(
    get,
    path = "/api/selected-classes",
    tag = RESERVATION_TAG,
    params(ReservationQuery),
    responses(
        (status = 200, description = "Caller's reservations", body = Vec<ReservationDto>),
        (status = 400, description = "Missing email", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Email differs from the token identity", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_selected_classes(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<ReservationQuery>,
) -> Result<impl IntoResponse, AppError> {
    let guard = AuthGuard::new(&state.db, &state.tokens, &headers);

    let Some(email) = query.email else {
        // Anonymous callers get 401 before the missing parameter is reported.
        guard.require(&[]).await?;
        return Err(AppError::BadRequest("email is required".to_string()));
    };

    let student = guard.require(&[Capability::SelfOnly(email)]).await?;

    let reservations = ReservationService::new(&state.db)
        .list_for(&student.email)
        .await?;

    let reservations_dto: Vec<_> = reservations.into_iter().map(|r| r.into_dto()).collect();

    Ok((StatusCode::OK, Json(reservations_dto)))
}

/// POST /api/selected-classes - Select a class
#[utoipa::path(
    post,
    path = "/api/selected-classes",
    tag = RESERVATION_TAG,
    request_body = SelectClassDto,
    responses(
        (status = 201, description = "Reservation created", body = ReservationDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Class not found", body = ErrorDto),
        (status = 409, description = "Class already selected", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn select_class(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<SelectClassDto>,
) -> Result<impl IntoResponse, AppError> {
    let student = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let reservation = ReservationService::new(&state.db)
        .select(SelectClassParam {
            student_email: student.email,
            class_id: payload.class_id,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(reservation.into_dto())))
}

/// DELETE /api/selected-classes/{id} - Withdraw one of the caller's reservations
#[utoipa::path(
    delete,
    path = "/api/selected-classes/{id}",
    tag = RESERVATION_TAG,
    params(("id" = i32, Path, description = "Reservation ID")),
    responses(
        (status = 204, description = "Reservation withdrawn"),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "No such reservation owned by the caller", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn withdraw_class(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let student = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    ReservationService::new(&state.db)
        .withdraw(&student, id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
