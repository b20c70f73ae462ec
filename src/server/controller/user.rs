use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        user::{
            AdminStatusDto, InstructorStatusDto, PaginatedUsersDto, SignInDto, SignInResultDto,
            UserDto,
        },
    },
    server::{
        controller::param::PaginationParam,
        error::AppError,
        middleware::auth::{AuthGuard, Capability},
        model::user::{GetAllUsersParam, Role, SetRoleParam, SignInParam},
        service::user::UserService,
        state::AppState,
    },
};

pub static USER_TAG: &str = "user";

/// POST /api/users - Record the caller's first sign-in
///
/// Idempotent: an existing user is returned unchanged with `created: false`.
#[utoipa::path(
    post,
    path = "/api/users",
    tag = USER_TAG,
    request_body = SignInDto,
    responses(
        (status = 201, description = "User created", body = SignInResultDto),
        (status = 200, description = "User already existed", body = SignInResultDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Body email differs from the token identity", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn sign_in(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<SignInDto>,
) -> Result<impl IntoResponse, AppError> {
    let identity = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Capability::SelfOnly(payload.email)])
        .await?;

    let (user, created) = UserService::new(&state.db)
        .sign_in(SignInParam {
            email: identity.email,
            name: payload.name,
        })
        .await?;

    let status = if created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };

    Ok((
        status,
        Json(SignInResultDto {
            created,
            user: user.into_dto(),
        }),
    ))
}

/// GET /api/users - List all users
#[utoipa::path(
    get,
    path = "/api/users",
    tag = USER_TAG,
    params(PaginationParam),
    responses(
        (status = 200, description = "Users for the requested page", body = PaginatedUsersDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_all_users(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(pagination): Query<PaginationParam>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Capability::Admin])
        .await?;

    let users = UserService::new(&state.db)
        .get_all_users(GetAllUsersParam {
            page: pagination.page,
            per_page: pagination.entries,
        })
        .await?;

    Ok((StatusCode::OK, Json(users.into_dto())))
}

/// GET /api/users/admin/{email} - Whether the caller is an admin
#[utoipa::path(
    get,
    path = "/api/users/admin/{email}",
    tag = USER_TAG,
    params(("email" = String, Path, description = "Caller's own email")),
    responses(
        (status = 200, description = "Admin status", body = AdminStatusDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Email differs from the token identity", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn is_admin(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(email): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let identity = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Capability::SelfOnly(email)])
        .await?;

    let admin = UserService::new(&state.db)
        .has_role(&identity.email, Role::Admin)
        .await?;

    Ok((StatusCode::OK, Json(AdminStatusDto { admin })))
}

/// GET /api/users/instructor/{email} - Whether the caller is an instructor
#[utoipa::path(
    get,
    path = "/api/users/instructor/{email}",
    tag = USER_TAG,
    params(("email" = String, Path, description = "Caller's own email")),
    responses(
        (status = 200, description = "Instructor status", body = InstructorStatusDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Email differs from the token identity", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn is_instructor(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(email): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let identity = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Capability::SelfOnly(email)])
        .await?;

    let instructor = UserService::new(&state.db)
        .has_role(&identity.email, Role::Instructor)
        .await?;

    Ok((StatusCode::OK, Json(InstructorStatusDto { instructor })))
}

/// PATCH /api/users/admin/{id} - Elevate a user to admin
#[utoipa::path(
    patch,
    path = "/api/users/admin/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "Updated user", body = UserDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn make_admin(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    set_role(state, headers, id, Role::Admin).await
}

/// PATCH /api/users/instructor/{id} - Elevate a user to instructor
#[utoipa::path(
    patch,
    path = "/api/users/instructor/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "Updated user", body = UserDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn make_instructor(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    set_role(state, headers, id, Role::Instructor).await
}

async fn set_role(
    state: AppState,
    headers: HeaderMap,
    user_id: i32,
    role: Role,
) -> Result<(StatusCode, Json<UserDto>), AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Capability::Admin])
        .await?;

    let user = UserService::new(&state.db)
        .set_role(SetRoleParam { user_id, role })
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}
