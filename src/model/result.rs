//! Footprint Result Types
//!
//! Output of one estimator run. Nothing here is persisted; a new result is
//! built for every calculation.

use serde::{Deserialize, Serialize};

/// Number of tips returned with every result
pub const TIP_COUNT: usize = 3;

/// Unrounded emissions per category (same unit as the rating thresholds)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CategoryEmissions {
    pub electricity: f64,
    pub transportation: f64,
    pub food: f64,
    pub goods: f64,
}

impl CategoryEmissions {
    pub fn total(&self) -> f64 {
        self.electricity + self.transportation + self.food + self.goods
    }

    pub fn get(&self, category: Category) -> f64 {
        match category {
            Category::Electricity => self.electricity,
            Category::Transportation => self.transportation,
            Category::Food => self.food,
            Category::Goods => self.goods,
        }
    }
}

/// Rounded percentage of the total per category.
///
/// Each share is rounded independently, so the sum may drift from 100 by
/// up to the number of categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CategoryShares {
    pub electricity: u32,
    pub transportation: u32,
    pub food: u32,
    pub goods: u32,
}

impl CategoryShares {
    /// All shares are 0 when the total is not positive.
    pub fn from_emissions(emissions: &CategoryEmissions) -> Self {
        let total = emissions.total();
        if total <= 0.0 {
            return Self::default();
        }

        let share = |value: f64| (value / total * 100.0).round() as u32;

        Self {
            electricity: share(emissions.electricity),
            transportation: share(emissions.transportation),
            food: share(emissions.food),
            goods: share(emissions.goods),
        }
    }

    pub fn sum(&self) -> u32 {
        self.electricity + self.transportation + self.food + self.goods
    }

    /// Shares paired with their category, in display order
    pub fn by_category(&self) -> [(Category, u32); 4] {
        [
            (Category::Electricity, self.electricity),
            (Category::Transportation, self.transportation),
            (Category::Food, self.food),
            (Category::Goods, self.goods),
        ]
    }
}

/// Emission category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Electricity,
    Transportation,
    Food,
    Goods,
}

impl Category {
    pub fn key(&self) -> &'static str {
        match self {
            Category::Electricity => "electricity",
            Category::Transportation => "transportation",
            Category::Food => "food",
            Category::Goods => "goods",
        }
    }

    pub fn display_text(&self) -> &'static str {
        match self {
            Category::Electricity => "Electricity",
            Category::Transportation => "Transportation",
            Category::Food => "Food",
            Category::Goods => "Goods & Services",
        }
    }
}

/// Qualitative bucket for total emissions
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rating {
    Excellent,
    Good,
    Average,
    Poor,
}

impl Rating {
    pub fn display_text(&self) -> &'static str {
        match self {
            Rating::Excellent => "Excellent",
            Rating::Good => "Good",
            Rating::Average => "Average",
            Rating::Poor => "Poor",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Rating::Excellent => "Well below typical household emissions",
            Rating::Good => "Below average with room for small improvements",
            Rating::Average => "In line with a typical household",
            Rating::Poor => "Well above typical household emissions",
        }
    }
}

/// Advice shown with a result. The pool order is fixed; results carry a
/// shuffled sample of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tip {
    RenewableProvider,
    ReduceMeat,
    PublicTransport,
    LocalProduce,
    EfficientAppliances,
}

impl Tip {
    pub const POOL: [Tip; 5] = [
        Tip::RenewableProvider,
        Tip::ReduceMeat,
        Tip::PublicTransport,
        Tip::LocalProduce,
        Tip::EfficientAppliances,
    ];

    pub fn text(&self) -> &'static str {
        match self {
            Tip::RenewableProvider => "Consider switching to a renewable energy provider",
            Tip::ReduceMeat => "Reduce meat consumption to lower your carbon footprint",
            Tip::PublicTransport => "Use public transportation or carpooling when possible",
            Tip::LocalProduce => "Buy local produce to reduce transportation emissions",
            Tip::EfficientAppliances => "Invest in energy-efficient appliances for your home",
        }
    }
}

/// Estimator output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FootprintResult {
    /// round(total / 1000)
    pub total_carbon_tonnes: u32,
    pub category_shares: CategoryShares,
    pub rating: Rating,
    pub tips: [Tip; TIP_COUNT],
    pub emissions: CategoryEmissions,
}
