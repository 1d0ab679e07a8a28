//! Lifestyle Input
//!
//! The record collected by the wizard and consumed by the estimator.
//! Category fields are closed enums so every calculation step matches
//! exhaustively.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ParseChoiceError;

/// Complete lifestyle record for one calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LifestyleInput {
    pub household: Household,
    pub energy: Energy,
    pub transportation: Transportation,
    pub food: Food,
    pub shopping: Shopping,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Household {
    /// Number of people, at least 1
    pub size: u32,
    /// Not used by the calculation
    #[serde(rename = "type")]
    pub dwelling: DwellingType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Energy {
    pub monthly_kwh: f64,
    /// Share of renewable supply, 0-100
    pub renewable_percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transportation {
    pub vehicle_type: VehicleType,
    pub annual_miles: f64,
    pub flights_per_year: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Food {
    pub diet: Diet,
    /// Share of locally sourced food, 0-100
    pub local_percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shopping {
    pub frequency: ShoppingFrequency,
}

impl Default for LifestyleInput {
    /// Starting values of the calculator form
    fn default() -> Self {
        Self {
            household: Household {
                size: 2,
                dwelling: DwellingType::Apartment,
            },
            energy: Energy {
                monthly_kwh: 250.0,
                renewable_percent: 25.0,
            },
            transportation: Transportation {
                vehicle_type: VehicleType::Hybrid,
                annual_miles: 10_000.0,
                flights_per_year: 2,
            },
            food: Food {
                diet: Diet::Omnivore,
                local_percent: 30.0,
            },
            shopping: Shopping {
                frequency: ShoppingFrequency::Moderate,
            },
        }
    }
}

// ============================================================================
// Category enums
// ============================================================================

/// Implements `FromStr` over the lowercase serde names plus a `Display`
/// that prints the same names, so CLI input and JSON agree.
macro_rules! choice_enum {
    ($name:ident, $field:literal, { $($variant:ident => $key:literal),+ $(,)? }) => {
        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn key(&self) -> &'static str {
                match self {
                    $($name::$variant => $key),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.key())
            }
        }

        impl FromStr for $name {
            type Err = ParseChoiceError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = s.trim().to_ascii_lowercase();
                $name::ALL
                    .iter()
                    .copied()
                    .find(|v| v.key() == wanted)
                    .ok_or_else(|| ParseChoiceError {
                        field: $field,
                        value: s.to_string(),
                        expected: $name::ALL.iter().map(|v| v.key()).collect::<Vec<_>>().join(", "),
                    })
            }
        }
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DwellingType {
    Apartment,
    House,
    Townhouse,
    Condo,
}

choice_enum!(DwellingType, "dwelling type", {
    Apartment => "apartment",
    House => "house",
    Townhouse => "townhouse",
    Condo => "condo",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleType {
    Electric,
    Hybrid,
    Gasoline,
    /// No vehicle / public transit
    None,
}

choice_enum!(VehicleType, "vehicle type", {
    Electric => "electric",
    Hybrid => "hybrid",
    Gasoline => "gasoline",
    None => "none",
});

impl VehicleType {
    /// Whether the mileage field is shown for this vehicle.
    ///
    /// Mileage stays in the record either way and is still charged at the
    /// gasoline rate when no vehicle is selected.
    pub fn requires_mileage(&self) -> bool {
        !matches!(self, VehicleType::None)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Diet {
    Vegan,
    Vegetarian,
    Pescatarian,
    Omnivore,
}

choice_enum!(Diet, "diet", {
    Vegan => "vegan",
    Vegetarian => "vegetarian",
    Pescatarian => "pescatarian",
    Omnivore => "omnivore",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShoppingFrequency {
    Minimal,
    Moderate,
    Frequent,
}

choice_enum!(ShoppingFrequency, "shopping frequency", {
    Minimal => "minimal",
    Moderate => "moderate",
    Frequent => "frequent",
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_choices_case_insensitive() {
        assert_eq!("Hybrid".parse::<VehicleType>().unwrap(), VehicleType::Hybrid);
        assert_eq!(" vegan ".parse::<Diet>().unwrap(), Diet::Vegan);
        assert_eq!("condo".parse::<DwellingType>().unwrap(), DwellingType::Condo);
        assert_eq!("FREQUENT".parse::<ShoppingFrequency>().unwrap(), ShoppingFrequency::Frequent);
    }

    #[test]
    fn test_parse_choice_error_lists_options() {
        let err = "keto".parse::<Diet>().unwrap_err();
        assert_eq!(err.field, "diet");
        assert_eq!(err.expected, "vegan, vegetarian, pescatarian, omnivore");
        assert!(err.to_string().contains("keto"));
    }

    #[test]
    fn test_json_uses_form_keys() {
        let json = serde_json::to_value(LifestyleInput::default()).unwrap();
        assert_eq!(json["household"]["type"], "apartment");
        assert_eq!(json["energy"]["monthlyKwh"], 250.0);
        assert_eq!(json["transportation"]["vehicleType"], "hybrid");
        assert_eq!(json["transportation"]["flightsPerYear"], 2);
        assert_eq!(json["food"]["localPercent"], 30.0);
        assert_eq!(json["shopping"]["frequency"], "moderate");
    }

    #[test]
    fn test_json_parse() {
        let raw = r#"{
            "household": {"size": 4, "type": "house"},
            "energy": {"monthlyKwh": 600, "renewablePercent": 0},
            "transportation": {"vehicleType": "none", "annualMiles": 0, "flightsPerYear": 0},
            "food": {"diet": "vegetarian", "localPercent": 50},
            "shopping": {"frequency": "minimal"}
        }"#;
        let input: LifestyleInput = serde_json::from_str(raw).unwrap();
        assert_eq!(input.household.dwelling, DwellingType::House);
        assert_eq!(input.transportation.vehicle_type, VehicleType::None);
        assert!(!input.transportation.vehicle_type.requires_mileage());
        assert_eq!(input.food.diet, Diet::Vegetarian);
    }
}
