//! Review API endpoints.

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    data::review::ReviewRepository,
    error::Error,
    model::{
        api::{ErrorDto, ReviewDto},
        app::AppState,
        session::principal::Principal,
    },
};

/// OpenAPI tag for review endpoints.
pub static REVIEWS_TAG: &str = "reviews";

/// How many reviews the listing endpoint returns.
const RECENT_REVIEW_LIMIT: u64 = 20;

/// Request body for leaving a review.
#[derive(Deserialize, utoipa::ToSchema)]
pub struct CreateReviewRequest {
    /// Star rating.
    pub rating: i32,
    /// Free-form comment.
    pub comment: Option<String>,
}

/// List recent reviews
#[utoipa::path(
    get,
    path = "/api/reviews",
    tag = REVIEWS_TAG,
    responses(
        (status = 200, description = "Most recent reviews", body = Vec<ReviewDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_reviews(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let reviews = ReviewRepository::new(&state.db)
        .list_recent(RECENT_REVIEW_LIMIT)
        .await?
        .into_iter()
        .map(|r| ReviewDto {
            id: r.id,
            rating: r.rating,
            comment: r.comment,
            review_date: r.review_date,
        })
        .collect::<Vec<_>>();

    Ok(Json(reviews))
}

/// Leave a review as the calling customer
#[utoipa::path(
    post,
    path = "/api/reviews",
    tag = REVIEWS_TAG,
    request_body = CreateReviewRequest,
    responses(
        (status = 201, description = "Review created", body = ReviewDto),
        (status = 403, description = "Caller is not a customer", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_review(
    State(state): State<AppState>,
    session: Session,
    Json(body): Json<CreateReviewRequest>,
) -> Result<impl IntoResponse, Error> {
    let principal = Principal::require(&session).await?;

    let Principal::Customer { id: customer_id } = principal else {
        return Ok((
            StatusCode::FORBIDDEN,
            Json(ErrorDto {
                error: "Customers only".to_string(),
            }),
        )
            .into_response());
    };

    let review = ReviewRepository::new(&state.db)
        .create(customer_id, body.rating, body.comment)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ReviewDto {
            id: review.id,
            rating: review.rating,
            comment: review.comment,
            review_date: review.review_date,
        }),
    )
        .into_response())
}
