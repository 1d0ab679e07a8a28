//! Form Layer
//!
//! Typed field edits and the validation the estimator relies on. Every
//! numeric edit is checked for finiteness and clamped (and, for sliders,
//! snapped) to the range the calculator form allows.

use serde::{Deserialize, Serialize};

use super::step::WizardStep;
use crate::error::{FormError, WizardError};
use crate::model::{Diet, DwellingType, LifestyleInput, ShoppingFrequency, VehicleType};

/// Inclusive numeric bounds with an optional slider increment
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NumericRange {
    pub min: f64,
    pub max: f64,
    pub increment: Option<f64>,
}

impl NumericRange {
    const fn new(min: f64, max: f64) -> Self {
        Self { min, max, increment: None }
    }

    const fn stepped(min: f64, max: f64, increment: f64) -> Self {
        Self { min, max, increment: Some(increment) }
    }

    /// Clamp into bounds, then snap to the nearest increment.
    /// Bounds are multiples of the increment, so snapping stays in range.
    pub fn apply(&self, value: f64) -> f64 {
        let clamped = value.clamp(self.min, self.max);
        match self.increment {
            Some(inc) => (clamped / inc).round() * inc,
            None => clamped,
        }
    }
}

pub const HOUSEHOLD_SIZE: NumericRange = NumericRange::new(1.0, 10.0);
pub const MONTHLY_KWH: NumericRange = NumericRange::new(0.0, 1000.0);
pub const RENEWABLE_PERCENT: NumericRange = NumericRange::stepped(0.0, 100.0, 5.0);
pub const ANNUAL_MILES: NumericRange = NumericRange::new(0.0, 50_000.0);
pub const FLIGHTS_PER_YEAR: NumericRange = NumericRange::new(0.0, 100.0);
pub const LOCAL_PERCENT: NumericRange = NumericRange::stepped(0.0, 100.0, 10.0);

/// Editable form fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    HouseholdSize,
    DwellingType,
    MonthlyKwh,
    RenewablePercent,
    VehicleType,
    AnnualMiles,
    FlightsPerYear,
    Diet,
    LocalPercent,
    ShoppingFrequency,
}

impl FormField {
    pub fn key(&self) -> &'static str {
        match self {
            FormField::HouseholdSize => "household_size",
            FormField::DwellingType => "dwelling_type",
            FormField::MonthlyKwh => "monthly_kwh",
            FormField::RenewablePercent => "renewable_percent",
            FormField::VehicleType => "vehicle_type",
            FormField::AnnualMiles => "annual_miles",
            FormField::FlightsPerYear => "flights_per_year",
            FormField::Diet => "diet",
            FormField::LocalPercent => "local_percent",
            FormField::ShoppingFrequency => "shopping_frequency",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FormField::HouseholdSize => "Household Size",
            FormField::DwellingType => "Dwelling Type",
            FormField::MonthlyKwh => "Monthly Electricity Usage (kWh)",
            FormField::RenewablePercent => "Percentage of Renewable Energy",
            FormField::VehicleType => "Primary Vehicle Type",
            FormField::AnnualMiles => "Annual Mileage",
            FormField::FlightsPerYear => "Flights Per Year",
            FormField::Diet => "Diet Type",
            FormField::LocalPercent => "Percentage of Locally Sourced Food",
            FormField::ShoppingFrequency => "Shopping Frequency",
        }
    }

    /// Step on which the field is shown
    pub fn step(&self) -> WizardStep {
        match self {
            FormField::HouseholdSize | FormField::DwellingType => WizardStep::Household,
            FormField::MonthlyKwh | FormField::RenewablePercent => WizardStep::Energy,
            FormField::VehicleType | FormField::AnnualMiles | FormField::FlightsPerYear => {
                WizardStep::Transportation
            }
            FormField::Diet | FormField::LocalPercent => WizardStep::Food,
            FormField::ShoppingFrequency => WizardStep::Shopping,
        }
    }

    /// Fields shown on `step`, in form order. Mileage is hidden when no
    /// vehicle is selected.
    pub fn visible_on(step: WizardStep, input: &LifestyleInput) -> Vec<FormField> {
        let fields: &[FormField] = match step {
            WizardStep::Household => &[FormField::HouseholdSize, FormField::DwellingType],
            WizardStep::Energy => &[FormField::MonthlyKwh, FormField::RenewablePercent],
            WizardStep::Transportation => &[
                FormField::VehicleType,
                FormField::AnnualMiles,
                FormField::FlightsPerYear,
            ],
            WizardStep::Food => &[FormField::Diet, FormField::LocalPercent],
            WizardStep::Shopping => &[FormField::ShoppingFrequency],
            WizardStep::Results => &[],
        };

        fields
            .iter()
            .copied()
            .filter(|f| {
                *f != FormField::AnnualMiles || input.transportation.vehicle_type.requires_mileage()
            })
            .collect()
    }

    /// Current value rendered the way `parse` accepts it
    pub fn current_value(&self, input: &LifestyleInput) -> String {
        match self {
            FormField::HouseholdSize => input.household.size.to_string(),
            FormField::DwellingType => input.household.dwelling.to_string(),
            FormField::MonthlyKwh => input.energy.monthly_kwh.to_string(),
            FormField::RenewablePercent => input.energy.renewable_percent.to_string(),
            FormField::VehicleType => input.transportation.vehicle_type.to_string(),
            FormField::AnnualMiles => input.transportation.annual_miles.to_string(),
            FormField::FlightsPerYear => input.transportation.flights_per_year.to_string(),
            FormField::Diet => input.food.diet.to_string(),
            FormField::LocalPercent => input.food.local_percent.to_string(),
            FormField::ShoppingFrequency => input.shopping.frequency.to_string(),
        }
    }

    /// Bounds for numeric fields, `None` for choice fields
    pub fn range(&self) -> Option<NumericRange> {
        match self {
            FormField::HouseholdSize => Some(HOUSEHOLD_SIZE),
            FormField::MonthlyKwh => Some(MONTHLY_KWH),
            FormField::RenewablePercent => Some(RENEWABLE_PERCENT),
            FormField::AnnualMiles => Some(ANNUAL_MILES),
            FormField::FlightsPerYear => Some(FLIGHTS_PER_YEAR),
            FormField::LocalPercent => Some(LOCAL_PERCENT),
            FormField::DwellingType
            | FormField::VehicleType
            | FormField::Diet
            | FormField::ShoppingFrequency => None,
        }
    }

    /// Allowed values for choice fields, empty for numeric ones
    pub fn choices(&self) -> Vec<&'static str> {
        match self {
            FormField::DwellingType => DwellingType::ALL.iter().map(|v| v.key()).collect(),
            FormField::VehicleType => VehicleType::ALL.iter().map(|v| v.key()).collect(),
            FormField::Diet => Diet::ALL.iter().map(|v| v.key()).collect(),
            FormField::ShoppingFrequency => ShoppingFrequency::ALL.iter().map(|v| v.key()).collect(),
            _ => Vec::new(),
        }
    }

    /// Parse raw text into an edit for this field
    pub fn parse(&self, raw: &str) -> Result<FieldEdit, FormError> {
        let raw = raw.trim();
        let number = || {
            raw.parse::<f64>().map_err(|_| FormError::InvalidNumber {
                field: self.key(),
                value: raw.to_string(),
            })
        };
        let count = || {
            raw.parse::<u32>().map_err(|_| FormError::InvalidNumber {
                field: self.key(),
                value: raw.to_string(),
            })
        };

        let edit = match self {
            FormField::HouseholdSize => FieldEdit::HouseholdSize(count()?),
            FormField::DwellingType => FieldEdit::DwellingType(raw.parse()?),
            FormField::MonthlyKwh => FieldEdit::MonthlyKwh(number()?),
            FormField::RenewablePercent => FieldEdit::RenewablePercent(number()?),
            FormField::VehicleType => FieldEdit::VehicleType(raw.parse()?),
            FormField::AnnualMiles => FieldEdit::AnnualMiles(number()?),
            FormField::FlightsPerYear => FieldEdit::FlightsPerYear(count()?),
            FormField::Diet => FieldEdit::Diet(raw.parse()?),
            FormField::LocalPercent => FieldEdit::LocalPercent(number()?),
            FormField::ShoppingFrequency => FieldEdit::ShoppingFrequency(raw.parse()?),
        };
        Ok(edit)
    }
}

/// One field change with its new value
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum FieldEdit {
    HouseholdSize(u32),
    DwellingType(DwellingType),
    MonthlyKwh(f64),
    RenewablePercent(f64),
    VehicleType(VehicleType),
    AnnualMiles(f64),
    FlightsPerYear(u32),
    Diet(Diet),
    LocalPercent(f64),
    ShoppingFrequency(ShoppingFrequency),
}

impl FieldEdit {
    /// One edit per field carrying the values already in `input`, in form order
    pub fn all_from(input: &LifestyleInput) -> [FieldEdit; 10] {
        [
            FieldEdit::HouseholdSize(input.household.size),
            FieldEdit::DwellingType(input.household.dwelling),
            FieldEdit::MonthlyKwh(input.energy.monthly_kwh),
            FieldEdit::RenewablePercent(input.energy.renewable_percent),
            FieldEdit::VehicleType(input.transportation.vehicle_type),
            FieldEdit::AnnualMiles(input.transportation.annual_miles),
            FieldEdit::FlightsPerYear(input.transportation.flights_per_year),
            FieldEdit::Diet(input.food.diet),
            FieldEdit::LocalPercent(input.food.local_percent),
            FieldEdit::ShoppingFrequency(input.shopping.frequency),
        ]
    }

    pub fn field(&self) -> FormField {
        match self {
            FieldEdit::HouseholdSize(_) => FormField::HouseholdSize,
            FieldEdit::DwellingType(_) => FormField::DwellingType,
            FieldEdit::MonthlyKwh(_) => FormField::MonthlyKwh,
            FieldEdit::RenewablePercent(_) => FormField::RenewablePercent,
            FieldEdit::VehicleType(_) => FormField::VehicleType,
            FieldEdit::AnnualMiles(_) => FormField::AnnualMiles,
            FieldEdit::FlightsPerYear(_) => FormField::FlightsPerYear,
            FieldEdit::Diet(_) => FormField::Diet,
            FieldEdit::LocalPercent(_) => FormField::LocalPercent,
            FieldEdit::ShoppingFrequency(_) => FormField::ShoppingFrequency,
        }
    }

    /// Validate and write the edit into `input`.
    ///
    /// Non-finite numbers are rejected and leave `input` untouched;
    /// everything else is clamped into range.
    pub fn apply_to(&self, input: &mut LifestyleInput) -> Result<(), WizardError> {
        match *self {
            FieldEdit::HouseholdSize(size) => {
                input.household.size = self.checked(f64::from(size))? as u32;
            }
            FieldEdit::DwellingType(dwelling) => input.household.dwelling = dwelling,
            FieldEdit::MonthlyKwh(kwh) => input.energy.monthly_kwh = self.checked(kwh)?,
            FieldEdit::RenewablePercent(pct) => {
                input.energy.renewable_percent = self.checked(pct)?;
            }
            FieldEdit::VehicleType(vehicle) => input.transportation.vehicle_type = vehicle,
            FieldEdit::AnnualMiles(miles) => {
                input.transportation.annual_miles = self.checked(miles)?;
            }
            FieldEdit::FlightsPerYear(flights) => {
                input.transportation.flights_per_year = self.checked(f64::from(flights))? as u32;
            }
            FieldEdit::Diet(diet) => input.food.diet = diet,
            FieldEdit::LocalPercent(pct) => input.food.local_percent = self.checked(pct)?,
            FieldEdit::ShoppingFrequency(frequency) => input.shopping.frequency = frequency,
        }
        Ok(())
    }

    fn checked(&self, value: f64) -> Result<f64, WizardError> {
        let Some(range) = self.field().range() else {
            return Ok(value);
        };
        if !value.is_finite() {
            return Err(WizardError::NotFinite {
                field: self.field().key(),
                value,
            });
        }

        let bounded = range.apply(value);
        if bounded != value {
            tracing::debug!("Field '{}' adjusted from {} to {}", self.field().key(), value, bounded);
        }
        Ok(bounded)
    }
}

/// Run every field of a complete input record through the form layer.
///
/// Records that arrive whole (a JSON file or request body) skip the wizard,
/// so they get the same finiteness check and clamping here.
pub fn normalize_input(input: &LifestyleInput) -> Result<LifestyleInput, WizardError> {
    let mut normalized = input.clone();
    for edit in FieldEdit::all_from(input) {
        edit.apply_to(&mut normalized)?;
    }
    Ok(normalized)
}
