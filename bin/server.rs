// Artist Marketplace - Web Server
// JSON API over one in-memory Marketplace (no persistence)

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use clap::Parser;
use serde::Serialize;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tower_http::cors::CorsLayer;
use artist_marketplace::{
    logging, Artist, ArtistCatalog, DashboardStats, FilterOptions, FilterSpec, Marketplace,
    MarketplaceError, OnboardingForm, QueryParams, QuoteRequest, QuoteRequestInput, Submission,
    SubmissionInput,
};

#[derive(Parser)]
#[command(name = "marketplace-server", version, about = "Artist marketplace JSON API")]
struct ServerConfig {
    /// Address to listen on
    #[arg(long, env = "MARKETPLACE_BIND", default_value = "0.0.0.0:3000")]
    bind: String,

    /// JSON file with the artist catalog (built-in seed artists if omitted)
    #[arg(long, env = "MARKETPLACE_CATALOG")]
    catalog: Option<PathBuf>,

    /// Base log level (RUST_LOG overrides)
    #[arg(long, env = "MARKETPLACE_LOG_LEVEL", default_value = "info")]
    log_level: String,
}

/// Shared application state
#[derive(Clone)]
struct AppState {
    market: Arc<Mutex<Marketplace>>,
}

/// API Response wrapper
#[derive(Serialize)]
struct ApiResponse<T> {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    fields: Vec<FieldProblem>,
}

#[derive(Serialize)]
struct FieldProblem {
    field: &'static str,
    message: String,
}

impl<T> ApiResponse<T> {
    fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            fields: Vec::new(),
        }
    }
}

/// Maps library errors onto HTTP status + envelope
struct ApiError(MarketplaceError);

impl From<MarketplaceError> for ApiError {
    fn from(err: MarketplaceError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = if self.0.is_invalid_input() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::NOT_FOUND
        };

        let body = ApiResponse::<()> {
            success: false,
            data: None,
            error: Some(self.0.to_string()),
            fields: self
                .0
                .field_errors()
                .iter()
                .map(|e| FieldProblem {
                    field: e.field(),
                    message: e.to_string(),
                })
                .collect(),
        };

        (status, Json(body)).into_response()
    }
}

/// Listing page payload
#[derive(Serialize)]
struct ListingResponse {
    summary: String,
    total: usize,
    artists: Vec<Artist>,
}

// ============================================================================
// API Handlers
// ============================================================================

/// GET /api/health - Health check
async fn health_check() -> impl IntoResponse {
    Json(ApiResponse::ok("OK"))
}

/// GET /api/artists - Filtered, sorted listing
async fn list_artists(
    State(state): State<AppState>,
    Query(params): Query<QueryParams>,
) -> Result<Json<ApiResponse<ListingResponse>>, ApiError> {
    let spec = FilterSpec::from_params(&params)?;
    let market = state.market.lock().unwrap();
    let result = market.search(&spec);

    Ok(Json(ApiResponse::ok(ListingResponse {
        summary: result.summary(),
        total: result.total,
        artists: result.artists,
    })))
}

/// GET /api/artists/:id - One artist
async fn get_artist(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Artist>>, ApiError> {
    let market = state.market.lock().unwrap();
    let artist = market
        .artist(&id)
        .cloned()
        .ok_or(MarketplaceError::UnknownArtist(id))?;

    Ok(Json(ApiResponse::ok(artist)))
}

/// GET /api/filters - Category and location dropdown values
async fn get_filters(State(state): State<AppState>) -> Json<ApiResponse<FilterOptions>> {
    let market = state.market.lock().unwrap();
    Json(ApiResponse::ok(market.filter_options()))
}

/// GET /api/submissions - All applications, oldest first
async fn list_submissions(State(state): State<AppState>) -> Json<ApiResponse<Vec<Submission>>> {
    let market = state.market.lock().unwrap();
    Json(ApiResponse::ok(market.submissions().to_vec()))
}

/// POST /api/submissions - Append a pre-validated application
async fn create_submission(
    State(state): State<AppState>,
    Json(input): Json<SubmissionInput>,
) -> Result<(StatusCode, Json<ApiResponse<Submission>>), ApiError> {
    let mut market = state.market.lock().unwrap();
    let submission = market.submit(input)?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(submission))))
}

/// POST /api/onboarding - Validate the onboarding form, then append
async fn submit_onboarding(
    State(state): State<AppState>,
    Json(form): Json<OnboardingForm>,
) -> Result<(StatusCode, Json<ApiResponse<Submission>>), ApiError> {
    let mut market = state.market.lock().unwrap();
    let submission = market.submit_onboarding(&form)?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(submission))))
}

/// GET /api/stats - Dashboard numbers
async fn get_stats(State(state): State<AppState>) -> Json<ApiResponse<DashboardStats>> {
    let market = state.market.lock().unwrap();
    Json(ApiResponse::ok(market.dashboard_stats(&chrono::Local::now())))
}

/// POST /api/artists/:id/quotes - Request a quote from one artist
async fn request_quote(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(mut input): Json<QuoteRequestInput>,
) -> Result<(StatusCode, Json<ApiResponse<QuoteRequest>>), ApiError> {
    input.artist_id = id;
    let mut market = state.market.lock().unwrap();
    let request = market.request_quote(input)?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(request))))
}

/// GET /api/quotes - All quote requests
async fn list_quotes(State(state): State<AppState>) -> Json<ApiResponse<Vec<QuoteRequest>>> {
    let market = state.market.lock().unwrap();
    Json(ApiResponse::ok(market.quotes().list().to_vec()))
}

// ============================================================================
// Router
// ============================================================================

fn app(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/health", get(health_check))
        .route("/artists", get(list_artists))
        .route("/artists/:id", get(get_artist))
        .route("/artists/:id/quotes", axum::routing::post(request_quote))
        .route("/filters", get(get_filters))
        .route("/submissions", get(list_submissions).post(create_submission))
        .route("/onboarding", axum::routing::post(submit_onboarding))
        .route("/stats", get(get_stats))
        .route("/quotes", get(list_quotes))
        .with_state(state);

    Router::new()
        .nest("/api", api_routes)
        .layer(CorsLayer::permissive())
}

// ============================================================================
// Main Server
// ============================================================================

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::parse();
    logging::init(Some(config.log_level.as_str()));

    let catalog = match &config.catalog {
        Some(path) => ArtistCatalog::from_file(path)?,
        None => ArtistCatalog::with_defaults(),
    };
    tracing::info!(artists = catalog.len(), "catalog ready");

    let state = AppState {
        market: Arc::new(Mutex::new(Marketplace::new(catalog))),
    };

    let listener = tokio::net::TcpListener::bind(&config.bind).await?;
    tracing::info!(address = %config.bind, "server listening");

    axum::serve(listener, app(state)).await?;
    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn test_app() -> Router {
        app(AppState {
            market: Arc::new(Mutex::new(Marketplace::with_defaults())),
        })
    }

    async fn call(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = call(test_app(), get_request("/api/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"], "OK");
    }

    #[tokio::test]
    async fn test_listing_with_filters() {
        let (status, body) = call(
            test_app(),
            get_request("/api/artists?category=DJs&price=high&sort=price"),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["summary"], "Showing 2 of 6 artists");
        assert_eq!(body["data"]["artists"][0]["name"], "DJ Mike");
        assert_eq!(body["data"]["artists"][1]["name"], "DJ Luna");
    }

    #[tokio::test]
    async fn test_unknown_sort_key_is_bad_request() {
        let (status, body) = call(test_app(), get_request("/api/artists?sort=newest")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn test_unknown_artist_is_not_found() {
        let (status, _) = call(test_app(), get_request("/api/artists/999")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_submission_round_trip_through_shared_state() {
        let app = test_app();

        let (status, created) = call(
            app.clone(),
            post_json(
                "/api/submissions",
                json!({
                    "name": "Ana Lopez",
                    "email": "ana@example.com",
                    "category": "Dancers",
                    "skills": ["Salsa"],
                    "location": "Miami, FL",
                    "price": 400,
                    "description": "Latin dance"
                }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);

        let (_, listed) = call(app.clone(), get_request("/api/submissions")).await;
        assert_eq!(listed["data"][0]["id"], created["data"]["id"]);

        let (_, stats) = call(app, get_request("/api/stats")).await;
        assert_eq!(stats["data"]["totalSubmissions"], 1);
        assert_eq!(stats["data"]["averagePrice"], 733);
    }

    #[tokio::test]
    async fn test_missing_fields_reported() {
        let (status, body) = call(
            test_app(),
            post_json("/api/submissions", json!({ "name": "Ana" })),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let fields: Vec<&str> = body["fields"]
            .as_array()
            .unwrap()
            .iter()
            .map(|f| f["field"].as_str().unwrap())
            .collect();
        assert_eq!(fields, vec!["email", "category", "location", "price", "description"]);
    }

    #[tokio::test]
    async fn test_quote_request() {
        let (status, body) = call(
            test_app(),
            post_json(
                "/api/artists/2/quotes",
                json!({
                    "fullName": "Sam Lee",
                    "email": "sam@example.com",
                    "eventType": "Wedding",
                    "eventDate": "2027-05-01",
                    "eventLocation": "Brooklyn, NY",
                    "performanceDuration": "4 hours",
                    "budgetRange": "$1,000 - $2,500"
                }),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["data"]["artistId"], "2");
    }
}
