use axum::{
    routing::{delete, get, post},
    Router,
};
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{auth, class, payment, reservation, user},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Enrollment API"),
    paths(
        auth::issue_token,
        user::sign_in,
        user::get_all_users,
        user::is_admin,
        user::is_instructor,
        user::make_admin,
        user::make_instructor,
        class::create_class,
        class::delete_class,
        class::get_my_classes,
        reservation::get_selected_classes,
        reservation::select_class,
        reservation::withdraw_class,
        payment::create_payment_intent,
        payment::settle_payment,
        payment::get_payment_history,
    ),
    modifiers(&BearerSecurity),
    tags(
        (name = "auth", description = "Identity tokens"),
        (name = "user", description = "Users and roles"),
        (name = "class", description = "Classes and seat capacity"),
        (name = "reservation", description = "Selected classes awaiting payment"),
        (name = "payment", description = "Payment intents, settlement and history"),
    )
)]
pub struct ApiDoc;

struct BearerSecurity;

impl Modify for BearerSecurity {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(auth::liveness))
        .route("/api/jwt", post(auth::issue_token))
        .route("/api/users", post(user::sign_in).get(user::get_all_users))
        // GET takes the caller's email, PATCH the target user id.
        .route(
            "/api/users/admin/{user}",
            get(user::is_admin).patch(user::make_admin),
        )
        .route(
            "/api/users/instructor/{user}",
            get(user::is_instructor).patch(user::make_instructor),
        )
        .route("/api/classes", post(class::create_class))
        .route("/api/classes/{id}", delete(class::delete_class))
        .route("/api/my-classes/{email}", get(class::get_my_classes))
        .route(
            "/api/selected-classes",
            get(reservation::get_selected_classes).post(reservation::select_class),
        )
        .route(
            "/api/selected-classes/{id}",
            delete(reservation::withdraw_class),
        )
        .route(
            "/api/create-payment-intent",
            post(payment::create_payment_intent),
        )
        .route("/api/payments", post(payment::settle_payment))
        .route("/api/payments/{email}", get(payment::get_payment_history))
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", ApiDoc::openapi()))
}
