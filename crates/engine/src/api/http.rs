//! HTTP routes.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use storysmith_domain::{
    CreativityLevel, GeneratedStory, StoryField, StoryRequest, ValidationError, STORY_THEMES,
};

use crate::app::App;
use crate::use_cases::StoryError;

/// Create all HTTP routes.
pub fn routes() -> Router<Arc<App>> {
    Router::new()
        .route("/", get(home))
        .route("/health", get(health))
        .route("/themes", get(themes))
        .route("/generate", post(generate_story))
}

/// Routes with state, request tracing, and optional CORS applied.
pub fn router(app: Arc<App>, cors_allowed_origins: Option<&str>) -> Router {
    let mut router = routes()
        .with_state(app)
        .layer(TraceLayer::new_for_http());

    if let Some(cors) = cors_allowed_origins.and_then(build_cors_layer) {
        router = router.layer(cors);
    }

    router
}

#[derive(Debug, Serialize)]
struct MessageResponse {
    message: &'static str,
}

async fn home() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Welcome to AI Story Generator API",
    })
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    message: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK",
        message: "API is running successfully",
    })
}

// =============================================================================
// Form options
// =============================================================================

#[derive(Debug, Serialize)]
struct CreativityOption {
    level: CreativityLevel,
    label: &'static str,
    description: &'static str,
    temperature: f64,
}

#[derive(Debug, Serialize)]
struct ThemesResponse {
    themes: Vec<&'static str>,
    creativity_levels: Vec<CreativityOption>,
}

async fn themes() -> Json<ThemesResponse> {
    Json(ThemesResponse {
        themes: STORY_THEMES.to_vec(),
        creativity_levels: CreativityLevel::ALL
            .into_iter()
            .map(|level| CreativityOption {
                level,
                label: level.label(),
                description: level.description(),
                temperature: level.temperature(),
            })
            .collect(),
    })
}

// =============================================================================
// Story generation
// =============================================================================

async fn generate_story(
    State(app): State<Arc<App>>,
    payload: Result<Json<StoryRequest>, JsonRejection>,
) -> Result<Json<GeneratedStory>, ApiError> {
    let Json(request) = payload?;
    let story = app.use_cases.story.generate.execute(request).await?;
    Ok(Json(story))
}

// =============================================================================
// CORS
// =============================================================================

/// Build a CORS layer from `*` or a comma-separated origin list.
///
/// Returns `None` when no usable origin is given.
pub fn build_cors_layer(allowed_origins: &str) -> Option<CorsLayer> {
    let allowed_origins = allowed_origins.trim();
    if allowed_origins.is_empty() {
        return None;
    }

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([axum::http::header::CONTENT_TYPE]);

    if allowed_origins == "*" {
        return Some(cors.allow_origin(Any));
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .filter_map(|s| HeaderValue::from_str(s).ok())
        .collect();

    if origins.is_empty() {
        return None;
    }

    Some(cors.allow_origin(origins))
}

// =============================================================================
// Errors
// =============================================================================

#[derive(Debug)]
pub enum ApiError {
    /// A required field is empty or missing.
    BadRequest {
        detail: String,
        field: Option<StoryField>,
    },
    /// A value is present but out of bounds.
    Unprocessable(String),
    /// The body could not be parsed as a story request.
    Rejected { status: StatusCode, detail: String },
    /// The generation provider failed.
    Internal(String),
}

#[derive(Debug, Serialize)]
struct DetailBody {
    detail: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    field: Option<StoryField>,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest { detail, field } => {
                (StatusCode::BAD_REQUEST, Json(DetailBody { detail, field })).into_response()
            }
            ApiError::Unprocessable(detail) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(DetailBody {
                    detail,
                    field: None,
                }),
            )
                .into_response(),
            ApiError::Rejected { status, detail } => (
                status,
                Json(DetailBody {
                    detail,
                    field: None,
                }),
            )
                .into_response(),
            ApiError::Internal(message) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorBody {
                    error: format!("Internal server error: {message}"),
                }),
            )
                .into_response(),
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        if e.is_out_of_range() {
            return ApiError::Unprocessable(e.to_string());
        }
        ApiError::BadRequest {
            detail: e.to_string(),
            field: e.field(),
        }
    }
}

impl From<StoryError> for ApiError {
    fn from(e: StoryError) -> Self {
        match e {
            StoryError::Validation(e) => e.into(),
            StoryError::ExternalService(_) => ApiError::Internal(e.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Rejected {
            status: rejection.status(),
            detail: rejection.body_text(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::{LlmError, LlmResponse, MockLlmPort};
    use axum::body::Body;
    use axum::http::Request;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn app_with(llm: MockLlmPort) -> Router {
        routes().with_state(Arc::new(App::new(Arc::new(llm))))
    }

    fn no_calls() -> MockLlmPort {
        let mut llm = MockLlmPort::new();
        llm.expect_generate().times(0);
        llm
    }

    fn valid_body() -> Value {
        json!({
            "char_name": "Mitten",
            "char_type": "Cat",
            "char_persona": "Friendly, curious, adventurous",
            "char_location": "Andromeda Galaxy",
            "story_length": 50,
            "story_premise": ["Love", "Adventure"],
            "temperature": 0.95
        })
    }

    async fn post_generate(router: Router, body: String) -> (StatusCode, Value) {
        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/generate")
                    .header("content-type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    async fn get_json(router: Router, uri: &str) -> (StatusCode, Value) {
        let response = router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_home_and_health() {
        let (status, body) = get_json(app_with(no_calls()), "/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"message": "Welcome to AI Story Generator API"}));

        let (status, body) = get_json(app_with(no_calls()), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({"status": "OK", "message": "API is running successfully"})
        );
    }

    #[tokio::test]
    async fn test_themes_lists_catalog_and_levels() {
        let (status, body) = get_json(app_with(no_calls()), "/themes").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["themes"].as_array().map(Vec::len), Some(12));
        assert_eq!(body["themes"][0], "Love");
        assert_eq!(body["creativity_levels"][4]["label"], "Very High");
        assert_eq!(body["creativity_levels"][4]["level"], "very_high");
        assert_eq!(body["creativity_levels"][4]["temperature"], json!(0.95));
    }

    #[tokio::test]
    async fn test_generate_success() {
        let mut llm = MockLlmPort::new();
        llm.expect_generate()
            .withf(|req| req.temperature == Some(0.95))
            .times(1)
            .returning(|_| Ok(LlmResponse::text("Once upon a time...")));

        let (status, body) = post_generate(app_with(llm), valid_body().to_string()).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "response": "Once upon a time...",
                "metadata": {
                    "character": "Mitten",
                    "length": "50 sentences",
                    "premises": ["Love", "Adventure"],
                    "temperature": 0.95
                }
            })
        );
    }

    #[tokio::test]
    async fn test_generate_accepts_single_string_premise() {
        let mut llm = MockLlmPort::new();
        llm.expect_generate()
            .withf(|req| req.messages[0].content.contains("- Story Theme(s): Mystery\n"))
            .times(1)
            .returning(|_| Ok(LlmResponse::text("A mystery.")));

        let mut body = valid_body();
        body["story_premise"] = json!("Mystery");
        let (status, body) = post_generate(app_with(llm), body.to_string()).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["metadata"]["premises"], "Mystery");
    }

    #[tokio::test]
    async fn test_generate_defaults_temperature() {
        let mut llm = MockLlmPort::new();
        llm.expect_generate()
            .withf(|req| req.temperature == Some(0.7))
            .times(1)
            .returning(|_| Ok(LlmResponse::text("ok")));

        let mut body = valid_body();
        body.as_object_mut().unwrap().remove("temperature");
        let (status, body) = post_generate(app_with(llm), body.to_string()).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["metadata"]["temperature"], json!(0.7));
    }

    #[tokio::test]
    async fn test_temperature_reaches_provider_and_metadata_unchanged() {
        let mut llm = MockLlmPort::new();
        llm.expect_generate()
            .withf(|req| req.temperature == Some(0.123456789))
            .times(1)
            .returning(|_| Ok(LlmResponse::text("ok")));

        let mut body = valid_body();
        body["temperature"] = json!(0.123456789);
        let (status, body) = post_generate(app_with(llm), body.to_string()).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["metadata"]["temperature"], json!(0.123456789));
    }

    #[tokio::test]
    async fn test_missing_content_type_is_unsupported_media_type() {
        let response = app_with(no_calls())
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/generate")
                    .body(Body::from(valid_body().to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
        assert!(body["detail"].is_string());
    }

    #[tokio::test]
    async fn test_blank_premise_in_list_is_passed_through() {
        let mut llm = MockLlmPort::new();
        llm.expect_generate()
            .withf(|req| req.messages[0].content.contains("- Story Theme(s): , Love\n"))
            .times(1)
            .returning(|_| Ok(LlmResponse::text("ok")));

        let mut body = valid_body();
        body["story_premise"] = json!(["", "Love"]);
        let (status, body) = post_generate(app_with(llm), body.to_string()).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["metadata"]["premises"], json!(["", "Love"]));
    }

    #[tokio::test]
    async fn test_blank_field_is_bad_request_naming_field() {
        let mut body = valid_body();
        body["char_persona"] = json!("   ");
        let (status, body) = post_generate(app_with(no_calls()), body.to_string()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["detail"], "Character persona cannot be empty");
        assert_eq!(body["field"], "char_persona");
    }

    #[tokio::test]
    async fn test_empty_premises_is_bad_request() {
        let mut body = valid_body();
        body["story_premise"] = json!([]);
        let (status, body) = post_generate(app_with(no_calls()), body.to_string()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["detail"], "At least one story premise must be selected");
        assert_eq!(body["field"], "story_premise");
    }

    #[tokio::test]
    async fn test_length_out_of_range_is_unprocessable() {
        let mut body = valid_body();
        body["story_length"] = json!(501);
        let (status, body) = post_generate(app_with(no_calls()), body.to_string()).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            body["detail"],
            "Story length must be between 10 and 500 sentences (got 501)"
        );
        assert!(body.get("field").is_none());
    }

    #[tokio::test]
    async fn test_temperature_out_of_range_is_unprocessable() {
        let mut body = valid_body();
        body["temperature"] = json!(1.5);
        let (status, _) = post_generate(app_with(no_calls()), body.to_string()).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_missing_field_is_rejected_with_detail() {
        let mut body = valid_body();
        body.as_object_mut().unwrap().remove("char_name");
        let (status, body) = post_generate(app_with(no_calls()), body.to_string()).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body["detail"].as_str().unwrap().contains("char_name"));
    }

    #[tokio::test]
    async fn test_malformed_json_is_rejected() {
        let (status, body) = post_generate(app_with(no_calls()), "{not json".to_string()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["detail"].is_string());
    }

    #[tokio::test]
    async fn test_provider_failure_is_internal_error_without_story() {
        let mut llm = MockLlmPort::new();
        llm.expect_generate()
            .times(1)
            .returning(|_| Err(LlmError::RequestFailed("network unreachable".into())));

        let (status, body) = post_generate(app_with(llm), valid_body().to_string()).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body,
            json!({"error": "Internal server error: network unreachable"})
        );
    }

    #[test]
    fn test_cors_layer_from_origins() {
        assert!(build_cors_layer("*").is_some());
        assert!(build_cors_layer("http://localhost:8501, https://storysmith.app").is_some());
        assert!(build_cors_layer("  ").is_none());
        assert!(build_cors_layer(" , ").is_none());
    }
}
