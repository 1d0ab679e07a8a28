//! Data model shared by the estimator, the wizard and the report layer.

pub mod input;
pub mod result;

pub use input::{
    Diet, DwellingType, Energy, Food, Household, LifestyleInput, Shopping, ShoppingFrequency,
    Transportation, VehicleType,
};
pub use result::{
    Category, CategoryEmissions, CategoryShares, FootprintResult, Rating, Tip, TIP_COUNT,
};
