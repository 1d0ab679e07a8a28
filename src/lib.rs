//! Carbon Footprint Estimator
//!
//! Estimates a household's annual carbon footprint from a short lifestyle
//! questionnaire.
//!
//! - `model/`: lifestyle input and footprint result types
//! - `estimator/`: emission formulas, rating thresholds, tip sampling
//! - `wizard/`: five-step input state machine with form validation
//! - `report/`: display-ready report with JSON and Markdown formatters
//! - `config`: environment-based runtime configuration
//! - `api_server`: optional axum endpoint (`api` feature)

pub mod config;
pub mod error;
pub mod estimator;
pub mod model;
pub mod report;
pub mod wizard;

#[cfg(feature = "api")]
pub mod api_server;

// Re-export commonly used types
pub use config::{EstimatorConfig, OutputFormat};
pub use error::{FormError, ParseChoiceError, WizardError};
pub use estimator::{compute, compute_with_rng};
pub use model::{FootprintResult, LifestyleInput, Rating, Tip};
pub use report::{FootprintReport, JsonFormatter, MarkdownFormatter};
pub use wizard::{normalize_input, FieldEdit, FormField, WizardAction, WizardSession, WizardStep};

#[cfg(feature = "api")]
pub use api_server::{create_router, AppState};
