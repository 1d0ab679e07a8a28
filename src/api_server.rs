// Axum API Server Module
//
// Purpose: JSON endpoint exposing the footprint estimator to a display layer.
// Every request computes independently. Shared state is the config plus an
// optional seeded generator for reproducible tips.

#[cfg(feature = "api")]
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};

#[cfg(feature = "api")]
use tower_http::{cors::CorsLayer, trace::TraceLayer};

#[cfg(feature = "api")]
use std::sync::{Arc, Mutex};

#[cfg(feature = "api")]
use rand::rngs::StdRng;

#[cfg(feature = "api")]
use rand::SeedableRng;

#[cfg(feature = "api")]
use crate::config::EstimatorConfig;

#[cfg(feature = "api")]
use crate::estimator;

#[cfg(feature = "api")]
use crate::model::LifestyleInput;

#[cfg(feature = "api")]
use crate::report::FootprintReport;

#[cfg(feature = "api")]
use crate::wizard::{normalize_input, FormField, WizardStep};

// ============================================================================
// Application State
// ============================================================================

#[cfg(feature = "api")]
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<EstimatorConfig>,
    /// Present only when a seed is configured, so tip order is reproducible
    seeded_rng: Option<Arc<Mutex<StdRng>>>,
}

#[cfg(feature = "api")]
impl AppState {
    pub fn new(config: EstimatorConfig) -> Self {
        let seeded_rng = config
            .seed
            .map(|seed| Arc::new(Mutex::new(StdRng::seed_from_u64(seed))));

        Self {
            config: Arc::new(config),
            seeded_rng,
        }
    }
}

// ============================================================================
// Router
// ============================================================================

#[cfg(feature = "api")]
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_check))

        // Estimator endpoints
        .route("/api/footprint", post(calculate_footprint))
        .route("/api/footprint/defaults", get(get_defaults))
        .route("/api/footprint/steps", get(get_steps))

        // Middleware (applied in reverse order)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http()) // Request logging
        .with_state(state)
}

// ============================================================================
// Endpoint Handlers
// ============================================================================

#[cfg(feature = "api")]
async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

#[cfg(feature = "api")]
async fn calculate_footprint(
    State(state): State<AppState>,
    payload: Result<Json<LifestyleInput>, JsonRejection>,
) -> Result<Json<FootprintReport>, AppError> {
    let Json(raw) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let input = normalize_input(&raw).map_err(|e| AppError::BadRequest(e.to_string()))?;

    let result = match &state.seeded_rng {
        Some(rng) => {
            let mut rng = rng
                .lock()
                .map_err(|_| AppError::Internal("RNG lock poisoned".to_string()))?;
            estimator::compute_with_rng(&input, &mut *rng)
        }
        None => estimator::compute(&input),
    };

    tracing::info!(
        "Footprint request: {} tonnes, rating {:?}",
        result.total_carbon_tonnes,
        result.rating
    );

    Ok(Json(FootprintReport::new(&input, &result)))
}

#[cfg(feature = "api")]
async fn get_defaults() -> Json<LifestyleInput> {
    Json(LifestyleInput::default())
}

/// Step metadata for rendering the wizard: title, progress, field keys,
/// numeric ranges and choices
#[cfg(feature = "api")]
async fn get_steps() -> Json<serde_json::Value> {
    let defaults = LifestyleInput::default();
    let steps: Vec<serde_json::Value> = WizardStep::INPUTS
        .iter()
        .map(|step| {
            let fields: Vec<serde_json::Value> = FormField::visible_on(*step, &defaults)
                .iter()
                .map(|f| {
                    serde_json::json!({
                        "key": f.key(),
                        "label": f.label(),
                        "choices": f.choices(),
                        "range": f.range(),
                    })
                })
                .collect();

            serde_json::json!({
                "step": step,
                "number": step.number(),
                "title": step.title(),
                "progress_percent": step.progress_percent(),
                "fields": fields,
            })
        })
        .collect();

    Json(serde_json::json!({ "steps": steps }))
}

// ============================================================================
// Error Handling
// ============================================================================

#[cfg(feature = "api")]
#[derive(Debug)]
enum AppError {
    BadRequest(String),
    Internal(String),
}

#[cfg(feature = "api")]
impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(serde_json::json!({
            "error": message
        }));

        (status, body).into_response()
    }
}
