// Loan Feasibility - Web Server
// JSON API with Axum plus the browser form

use axum::{
    response::{Html, IntoResponse, Json},
    routing::{get, post},
    Router,
};
use serde::Serialize;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;

use loan_feasibility::{calculate, LoanInputs, VERSION};

/// API Response wrapper
#[derive(Serialize)]
struct ApiResponse<T> {
    success: bool,
    data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl<T> ApiResponse<T> {
    fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
            error: None,
        }
    }
}

// ============================================================================
// API Handlers
// ============================================================================

/// GET /api/health - Health check
async fn health_check() -> impl IntoResponse {
    Json(ApiResponse::ok(format!("OK {}", VERSION)))
}

/// GET /api/defaults - Default form inputs for prefilling
async fn get_defaults() -> impl IntoResponse {
    Json(ApiResponse::ok(LoanInputs::default()))
}

/// POST /api/calculate - Run one calculation pass.
///
/// Rates arrive as fractions; the browser form divides its percentage
/// fields before posting. The calculation is pure, so there is no error
/// branch here.
async fn post_calculate(Json(inputs): Json<LoanInputs>) -> impl IntoResponse {
    Json(ApiResponse::ok(calculate(&inputs)))
}

/// GET / - Serve the calculator form
async fn serve_index() -> impl IntoResponse {
    Html(include_str!("../web/index.html"))
}

// ============================================================================
// Main Server
// ============================================================================

#[tokio::main]
async fn main() {
    println!("🌐 Loan Feasibility - Web Server");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    // Build API routes
    let api_routes = Router::new()
        .route("/health", get(health_check))
        .route("/defaults", get(get_defaults))
        .route("/calculate", post(post_calculate));

    // Build main router
    let app = Router::new()
        .route("/", get(serve_index))
        .nest("/api", api_routes)
        .nest_service("/static", ServeDir::new("web"))
        .layer(CorsLayer::permissive());

    // Start server
    let addr = "0.0.0.0:3000";
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    println!("\n🚀 Server running on http://localhost:3000");
    println!("   API: http://localhost:3000/api/calculate");
    println!("   UI:  http://localhost:3000");
    println!("\n   Press Ctrl+C to stop\n");

    axum::serve(listener, app)
        .await
        .expect("Failed to start server");
}
