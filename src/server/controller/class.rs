use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        class::{ClassDto, CreateClassDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Capability},
        model::class::CreateClassParam,
        service::class::ClassService,
        state::AppState,
    },
};

pub static CLASS_TAG: &str = "class";

/// POST /api/classes - Publish a class owned by the calling instructor
#[utoipa::path(
    post,
    path = "/api/classes",
    tag = CLASS_TAG,
    request_body = CreateClassDto,
    responses(
        (status = 201, description = "Class created", body = ClassDto),
        (status = 400, description = "Invalid capacity, price or title", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an instructor", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn create_class(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateClassDto>,
) -> Result<impl IntoResponse, AppError> {
    let instructor = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Capability::Instructor])
        .await?;

    let class = ClassService::new(&state.db)
        .create(CreateClassParam::from_dto(&instructor, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(class.into_dto())))
}

/// DELETE /api/classes/{id} - Delete a class and its open reservations
#[utoipa::path(
    delete,
    path = "/api/classes/{id}",
    tag = CLASS_TAG,
    params(("id" = i32, Path, description = "Class ID")),
    responses(
        (status = 204, description = "Class deleted"),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Class not found", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn delete_class(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Capability::Admin])
        .await?;

    ClassService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/my-classes/{email} - Classes published by the calling instructor
#[utoipa::path(
    get,
    path = "/api/my-classes/{email}",
    tag = CLASS_TAG,
    params(("email" = String, Path, description = "Caller's own email")),
    responses(
        (status = 200, description = "Instructor's classes, newest first", body = Vec<ClassDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Not an instructor or not the caller's email", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_my_classes(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(email): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let instructor = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Capability::Instructor, Capability::SelfOnly(email)])
        .await?;

    let classes = ClassService::new(&state.db)
        .get_by_instructor(&instructor.email)
        .await?;

    let classes_dto: Vec<_> = classes.into_iter().map(|c| c.into_dto()).collect();

    Ok((StatusCode::OK, Json(classes_dto)))
}
