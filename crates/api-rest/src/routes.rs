//! Route table and middleware stack.

use crate::error::{panic_response, ApiError};
use crate::handlers::{self, ArticleEnvelope, TagSummaryEnvelope};
use crate::AppState;
use api_shared::{ErrorBody, ErrorDetail, HealthRes, SystemInfo};
use article_core::{Article, ArticleInput, TagSummary};
use axum::{
    http::Method,
    response::Response,
    routing::{get, post},
    Router,
};
use std::any::Any;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::healthcheck,
        handlers::create_article,
        handlers::show_article,
        handlers::tag_summary,
    ),
    components(schemas(
        HealthRes,
        SystemInfo,
        ErrorBody,
        ErrorDetail,
        Article,
        ArticleInput,
        ArticleEnvelope,
        TagSummary,
        TagSummaryEnvelope,
    ))
)]
struct ApiDoc;

/// Builds the full application router around `state`.
pub fn router(state: AppState) -> Router {
    with_middleware(api_routes(), state)
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/v1/healthcheck",
            get(handlers::healthcheck).fallback(method_not_allowed),
        )
        .route(
            "/v1/articles",
            post(handlers::create_article).fallback(method_not_allowed),
        )
        .route(
            "/v1/articles/:id",
            get(handlers::show_article).fallback(method_not_allowed),
        )
        .route(
            "/v1/tags/:tag_name/:date",
            get(handlers::tag_summary).fallback(method_not_allowed),
        )
}

fn with_middleware(routes: Router<AppState>, state: AppState) -> Router {
    routes
        .fallback(not_found)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn not_found() -> ApiError {
    ApiError::NotFound
}

/// Answers a known path requested with a method it does not serve.
async fn method_not_allowed(method: Method) -> ApiError {
    ApiError::MethodNotAllowed(method)
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic payload"
    };
    panic_response(detail)
}
