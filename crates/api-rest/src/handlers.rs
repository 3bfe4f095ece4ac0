//! HTTP handlers.
//!
//! Handlers translate between requests and the core crate: decode, validate, call the store or
//! the summary assembler, and envelope the result. They never hold the store lock across an
//! `.await`.

use crate::error::ApiError;
use crate::extract::read_json;
use crate::AppState;
use api_shared::{ErrorBody, HealthRes};
use article_core::{Article, ArticleDate, ArticleInput, TagSummary};
use axum::body::Body;
use axum::extract::{Path as AxumPath, State};
use axum::http::{header, HeaderMap, HeaderValue, StatusCode};
use axum::response::Json;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const API_BASE_PATH: &str = "/v1";

/// `{"article": ...}`
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ArticleEnvelope {
    pub article: Article,
}

/// `{"tag_summary": ...}`
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TagSummaryEnvelope {
    pub tag_summary: TagSummary,
}

#[utoipa::path(
    get,
    path = "/v1/healthcheck",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint
///
/// Reports the service as available, with its environment and version.
pub async fn healthcheck(State(state): State<AppState>) -> Json<HealthRes> {
    Json(state.health.check_health())
}

#[utoipa::path(
    post,
    path = "/v1/articles",
    request_body = ArticleInput,
    responses(
        (status = 201, description = "Article created", body = ArticleEnvelope),
        (status = 400, description = "Malformed request body", body = ErrorBody),
        (status = 422, description = "Validation failed", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    )
)]
/// Create a new article
///
/// Decodes the body, validates every field, and stores the article under its client-supplied id.
/// Responds with the stored article and a `Location` header pointing at it.
///
/// # Errors
/// - `400` if the body is not a single well-formed JSON object of the expected shape, or the
///   date is not `YYYY-MM-DD`.
/// - `422` with a field-to-message map if validation fails; nothing is stored.
/// - `500` if the id is already taken.
pub async fn create_article(
    State(state): State<AppState>,
    body: Body,
) -> Result<(StatusCode, HeaderMap, Json<ArticleEnvelope>), ApiError> {
    let input: ArticleInput = read_json(body, state.cfg.max_body_bytes()).await?;
    let article = input.validated().map_err(ApiError::FailedValidation)?;

    state.store.insert(&article)?;
    tracing::info!(id = article.id, "article created");

    let mut headers = HeaderMap::new();
    let location = format!("{API_BASE_PATH}/articles/{}", article.id);
    headers.insert(
        header::LOCATION,
        HeaderValue::from_str(&location).map_err(|e| ApiError::Internal(e.to_string()))?,
    );

    Ok((
        StatusCode::CREATED,
        headers,
        Json(ArticleEnvelope { article }),
    ))
}

#[utoipa::path(
    get,
    path = "/v1/articles/{id}",
    params(("id" = i64, Path, description = "Article id (positive integer)")),
    responses(
        (status = 200, description = "Article found", body = ArticleEnvelope),
        (status = 404, description = "No such article", body = ErrorBody)
    )
)]
/// Retrieve an article by id
///
/// Ids that are not positive integers are treated like absent ones.
pub async fn show_article(
    State(state): State<AppState>,
    AxumPath(id): AxumPath<String>,
) -> Result<Json<ArticleEnvelope>, ApiError> {
    let id = parse_id(&id).ok_or(ApiError::NotFound)?;
    let article = state.store.get(id)?;
    Ok(Json(ArticleEnvelope { article }))
}

#[utoipa::path(
    get,
    path = "/v1/tags/{tag_name}/{date}",
    params(
        ("tag_name" = String, Path, description = "Tag to summarise (case-sensitive)"),
        ("date" = String, Path, description = "Date in YYYYMMDD form")
    ),
    responses(
        (status = 200, description = "Tag summary", body = TagSummaryEnvelope),
        (status = 404, description = "Bad date or no matching articles", body = ErrorBody)
    )
)]
/// Summarise the articles carrying a tag on a given day
///
/// Lists up to ten matching article ids, newest (highest id) first, together with the total
/// number of matches and the other tags found on them.
pub async fn tag_summary(
    State(state): State<AppState>,
    AxumPath((tag_name, date)): AxumPath<(String, String)>,
) -> Result<Json<TagSummaryEnvelope>, ApiError> {
    let date = ArticleDate::parse_path_segment(&date).map_err(|_| ApiError::NotFound)?;
    let tag_summary = TagSummary::assemble(&state.store, &tag_name, date)?;
    Ok(Json(TagSummaryEnvelope { tag_summary }))
}

/// Parses a path id, accepting only positive integers.
fn parse_id(raw: &str) -> Option<i64> {
    raw.parse::<i64>().ok().filter(|id| *id >= 1)
}
