//! Emission factors and rating thresholds.
//!
//! Fixed policy values; none of them are configurable at runtime.

/// Emissions per kWh of non-renewable electricity
pub const ELECTRICITY_PER_KWH: f64 = 0.5;

/// Emissions per mile driven
pub const ELECTRIC_PER_MILE: f64 = 0.1;
pub const HYBRID_PER_MILE: f64 = 0.2;
/// Applied to gasoline vehicles and to "no vehicle" alike
pub const GASOLINE_PER_MILE: f64 = 0.3;

pub const PER_FLIGHT: f64 = 500.0;

/// Food base before the local-sourcing reduction
pub const VEGAN_FOOD_BASE: f64 = 1000.0;
pub const VEGETARIAN_FOOD_BASE: f64 = 1500.0;
pub const MIXED_DIET_FOOD_BASE: f64 = 2500.0;

pub const MINIMAL_GOODS: f64 = 500.0;
pub const MODERATE_GOODS: f64 = 1000.0;
pub const FREQUENT_GOODS: f64 = 2000.0;

/// Upper bounds (exclusive) of each rating bucket
pub const EXCELLENT_BELOW: f64 = 5000.0;
pub const GOOD_BELOW: f64 = 10_000.0;
pub const AVERAGE_BELOW: f64 = 15_000.0;

/// Emission units per reported tonne
pub const UNITS_PER_TONNE: f64 = 1000.0;
