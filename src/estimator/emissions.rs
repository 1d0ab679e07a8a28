//! Per-category emission formulas.

use super::factors::*;
use crate::model::{
    CategoryEmissions, Diet, Energy, Food, LifestyleInput, Shopping, ShoppingFrequency,
    Transportation, VehicleType,
};

/// Fraction left after removing a 0-100 percentage
#[inline]
fn remaining_fraction(percent: f64) -> f64 {
    1.0 - percent / 100.0
}

pub fn electricity_emissions(energy: &Energy) -> f64 {
    energy.monthly_kwh * ELECTRICITY_PER_KWH * remaining_fraction(energy.renewable_percent)
}

pub fn per_mile_factor(vehicle: VehicleType) -> f64 {
    match vehicle {
        VehicleType::Electric => ELECTRIC_PER_MILE,
        VehicleType::Hybrid => HYBRID_PER_MILE,
        VehicleType::Gasoline | VehicleType::None => GASOLINE_PER_MILE,
    }
}

pub fn transportation_emissions(transportation: &Transportation) -> f64 {
    transportation.annual_miles * per_mile_factor(transportation.vehicle_type)
        + f64::from(transportation.flights_per_year) * PER_FLIGHT
}

pub fn food_base(diet: Diet) -> f64 {
    match diet {
        Diet::Vegan => VEGAN_FOOD_BASE,
        Diet::Vegetarian => VEGETARIAN_FOOD_BASE,
        Diet::Pescatarian | Diet::Omnivore => MIXED_DIET_FOOD_BASE,
    }
}

pub fn food_emissions(food: &Food) -> f64 {
    food_base(food.diet) * remaining_fraction(food.local_percent)
}

pub fn goods_emissions(shopping: &Shopping) -> f64 {
    match shopping.frequency {
        ShoppingFrequency::Minimal => MINIMAL_GOODS,
        ShoppingFrequency::Moderate => MODERATE_GOODS,
        ShoppingFrequency::Frequent => FREQUENT_GOODS,
    }
}

/// Emissions for all four categories. Household data does not contribute.
pub fn category_emissions(input: &LifestyleInput) -> CategoryEmissions {
    CategoryEmissions {
        electricity: electricity_emissions(&input.energy),
        transportation: transportation_emissions(&input.transportation),
        food: food_emissions(&input.food),
        goods: goods_emissions(&input.shopping),
    }
}
