//! Footprint Report
//!
//! Display-ready view of a `FootprintResult`: labels, tip text and a
//! generation timestamp. Formatters turn it into JSON or Markdown.

pub mod formatters;

pub use formatters::{JsonFormatter, MarkdownFormatter};

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::model::{FootprintResult, LifestyleInput, Rating};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FootprintReport {
    pub total_carbon_tonnes: u32,
    pub total_emissions: f64,
    pub rating: Rating,
    pub rating_label: String,
    pub rating_message: String,
    pub breakdown: Vec<CategoryLine>,
    pub tips: Vec<String>,
    pub input: LifestyleInput,
    pub generated_at: String, // RFC 3339
}

/// One row of the category breakdown
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryLine {
    pub category: String,
    pub label: String,
    pub emissions: f64,
    pub share_percent: u32,
}

impl FootprintReport {
    pub fn new(input: &LifestyleInput, result: &FootprintResult) -> Self {
        let emissions = &result.emissions;
        let breakdown = result
            .category_shares
            .by_category()
            .into_iter()
            .map(|(category, share)| CategoryLine {
                category: category.key().to_string(),
                label: category.display_text().to_string(),
                emissions: emissions.get(category),
                share_percent: share,
            })
            .collect();

        Self {
            total_carbon_tonnes: result.total_carbon_tonnes,
            total_emissions: emissions.total(),
            rating: result.rating,
            rating_label: result.rating.display_text().to_string(),
            rating_message: result.rating.description().to_string(),
            breakdown,
            tips: result.tips.iter().map(|t| t.text().to_string()).collect(),
            input: input.clone(),
            generated_at: Utc::now().to_rfc3339(),
        }
    }
}
