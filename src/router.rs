//! HTTP routing and OpenAPI documentation configuration.
//!
//! The JSON API endpoints are registered through utoipa so their OpenAPI
//! specifications are collected into a single document, with Swagger UI served
//! at `/api/docs`. The HTML pages and form endpoints are plain Axum routes
//! merged alongside.

use axum::{routing::get, Router};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::{controller, model::app::AppState};

/// Builds the application's HTTP router with all pages, API endpoints, and
/// Swagger UI documentation.
///
/// # Registered Endpoints
/// - `GET /api/auth/user` - Get current principal
/// - `GET /api/rooms` - Room catalog with units, thumbnails, and active promos
/// - `POST /api/rooms` - Create a room type (admin)
/// - `POST /api/rooms/{id}/units` - Add a physical unit to a room type (admin)
/// - `GET /api/reservations` - The calling customer's reservations
/// - `POST /api/reservations` - Book a stay
/// - `POST /api/reservations/{id}/payments` - Record a payment
/// - `GET /api/reviews` - Recent reviews
/// - `POST /api/reviews` - Leave a review
///
/// Page and form routes (`/`, `/signup`, `/login`, `/logout`, the dashboards,
/// and the static content pages) are served outside the OpenAPI document.
///
/// The OpenAPI specification is available at `/api/docs/openapi.json` and
/// interactive documentation at `/api/docs`.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Veranda", description = "Veranda hotel API"), tags(
        (name = controller::auth::AUTH_TAG, description = "Authentication API routes"),
        (name = controller::room::ROOMS_TAG, description = "Room catalog API routes"),
        (name = controller::reservation::RESERVATIONS_TAG, description = "Reservation and payment API routes"),
        (name = controller::review::REVIEWS_TAG, description = "Review API routes"),
    ))]
    struct ApiDoc;

    let (api_routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::auth::get_user))
        .routes(routes!(controller::room::list_rooms))
        .routes(routes!(controller::room::create_room_type))
        .routes(routes!(controller::room::create_room_unit))
        .routes(routes!(controller::reservation::list_reservations))
        .routes(routes!(controller::reservation::create_reservation))
        .routes(routes!(controller::reservation::record_payment))
        .routes(routes!(controller::review::list_reviews))
        .routes(routes!(controller::review::create_review))
        .split_for_parts();

    let pages = Router::new()
        .route("/", get(controller::pages::index))
        .route(
            "/signup",
            get(controller::auth::signup_page).post(controller::auth::signup),
        )
        .route(
            "/login",
            get(controller::auth::login_page).post(controller::auth::login),
        )
        .route("/logout", get(controller::auth::logout))
        .route("/dashboard", get(controller::dashboard::dashboard))
        .route(
            "/admin_dashboard",
            get(controller::dashboard::admin_dashboard),
        )
        .route(
            "/receptionist_dashboard",
            get(controller::dashboard::receptionist_dashboard),
        )
        .route("/gallery", get(controller::pages::gallery))
        .route("/about_us", get(controller::pages::about_us))
        .route("/forgot_password", get(controller::pages::forgot_password))
        .route("/book_now", get(controller::pages::book_now))
        .route("/rooms", get(controller::pages::rooms))
        .route("/add_room", get(controller::pages::add_room))
        .route("/make_room", get(controller::pages::make_room));

    api_routes
        .merge(pages)
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
