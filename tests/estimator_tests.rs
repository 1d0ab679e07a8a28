// Estimator Integration Tests
//
// Purpose: Check the calculator's observable properties through the public API
// Run with: cargo test --test estimator_tests

use approx::assert_relative_eq;
use footprint_estimator::model::{
    Diet, DwellingType, Energy, Food, Household, Shopping, ShoppingFrequency, Transportation,
    VehicleType,
};
use footprint_estimator::{
    compute, compute_with_rng, FieldEdit, LifestyleInput, Rating, Tip, WizardAction,
    WizardSession, WizardStep,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;

/// Build an input whose total lands exactly on `electricity + flights*500 + food + goods`
fn input_with(
    monthly_kwh: f64,
    flights: u32,
    diet: Diet,
    frequency: ShoppingFrequency,
) -> LifestyleInput {
    LifestyleInput {
        household: Household { size: 1, dwelling: DwellingType::Condo },
        energy: Energy { monthly_kwh, renewable_percent: 0.0 },
        transportation: Transportation {
            vehicle_type: VehicleType::None,
            annual_miles: 0.0,
            flights_per_year: flights,
        },
        food: Food { diet, local_percent: 0.0 },
        shopping: Shopping { frequency },
    }
}

// =========================================================================
// Section 1: Worked example
// =========================================================================

#[test]
fn test_default_form_is_good_six_tonnes() {
    let result = compute(&LifestyleInput::default());

    assert_relative_eq!(result.emissions.total(), 5843.75, epsilon = 1e-9);
    assert_eq!(result.rating, Rating::Good);
    assert_eq!(result.total_carbon_tonnes, 6);
}

// =========================================================================
// Section 2: Rating boundaries (exact totals)
// =========================================================================

#[test]
fn test_rating_boundaries_exact_totals() {
    use Diet::*;
    use ShoppingFrequency::*;

    // (input, expected total, expected rating)
    let cases = [
        // 3499 + 1000 (vegan) + 500 (minimal)
        (input_with(6998.0, 0, Vegan, Minimal), 4999.0, Rating::Excellent),
        (input_with(7000.0, 0, Vegan, Minimal), 5000.0, Rating::Good),
        // 499 + 5000 (10 flights) + 2500 (omnivore) + 2000 (frequent)
        (input_with(998.0, 10, Omnivore, Frequent), 9999.0, Rating::Good),
        (input_with(1000.0, 10, Omnivore, Frequent), 10_000.0, Rating::Average),
        // 499 + 10000 (20 flights) + 2500 + 2000
        (input_with(998.0, 20, Omnivore, Frequent), 14_999.0, Rating::Average),
        // 0 + 10500 (21 flights) + 2500 + 2000
        (input_with(0.0, 21, Omnivore, Frequent), 15_000.0, Rating::Poor),
    ];

    for (input, total, rating) in cases {
        let result = compute(&input);
        assert_eq!(result.emissions.total(), total);
        assert_eq!(result.rating, rating, "total {}", total);
    }
}

// =========================================================================
// Section 3: Derived values across a grid of inputs
// =========================================================================

#[test]
fn test_tonnes_and_shares_consistent() {
    let mut rng = StdRng::seed_from_u64(99);

    for vehicle in VehicleType::ALL {
        for diet in Diet::ALL {
            for frequency in ShoppingFrequency::ALL {
                for (kwh, renewable, miles, local) in
                    [(0.0, 0.0, 0.0, 100.0), (250.0, 25.0, 10_000.0, 30.0), (1000.0, 100.0, 50_000.0, 0.0)]
                {
                    let input = LifestyleInput {
                        household: Household { size: 3, dwelling: DwellingType::Townhouse },
                        energy: Energy { monthly_kwh: kwh, renewable_percent: renewable },
                        transportation: Transportation {
                            vehicle_type: *vehicle,
                            annual_miles: miles,
                            flights_per_year: 4,
                        },
                        food: Food { diet: *diet, local_percent: local },
                        shopping: Shopping { frequency: *frequency },
                    };

                    let result = compute_with_rng(&input, &mut rng);
                    let total = result.emissions.total();

                    assert_eq!(result.total_carbon_tonnes, (total / 1000.0).round() as u32);
                    assert!(total > 0.0);

                    let sum = result.category_shares.sum() as i64;
                    assert!((sum - 100).abs() <= 4, "shares sum to {} for {:?}", sum, input);
                }
            }
        }
    }
}

// =========================================================================
// Section 4: Tips
// =========================================================================

#[test]
fn test_tips_three_unique_from_pool() {
    let input = LifestyleInput::default();
    let mut seen: HashSet<Tip> = HashSet::new();

    for _ in 0..100 {
        let tips = compute(&input).tips;
        let unique: HashSet<Tip> = tips.iter().copied().collect();
        assert_eq!(unique.len(), 3);
        assert!(tips.iter().all(|t| Tip::POOL.contains(t)));
        seen.extend(unique);
    }

    // 100 draws of 3 from 5 cover the whole pool
    assert_eq!(seen.len(), Tip::POOL.len());
}

// =========================================================================
// Section 5: Wizard flow
// =========================================================================

#[test]
fn test_full_wizard_round_trip() {
    let mut session = WizardSession::new();

    session.edit(FieldEdit::HouseholdSize(3)).unwrap();
    session.next().unwrap();
    session.edit(FieldEdit::RenewablePercent(100.0)).unwrap();
    session.next().unwrap();
    session.edit(FieldEdit::VehicleType(VehicleType::Electric)).unwrap();
    session.edit(FieldEdit::FlightsPerYear(0)).unwrap();
    session.next().unwrap();
    session.edit(FieldEdit::Diet(Diet::Vegan)).unwrap();
    session.next().unwrap();
    session.edit(FieldEdit::ShoppingFrequency(ShoppingFrequency::Minimal)).unwrap();

    let result = session
        .calculate_with_rng(&mut StdRng::seed_from_u64(1))
        .unwrap()
        .clone();

    // 0 + 1000 (10k electric miles) + 700 (vegan, 30% local) + 500
    assert_relative_eq!(result.emissions.total(), 2200.0, epsilon = 1e-9);
    assert_eq!(result.rating, Rating::Excellent);
    assert_eq!(result.total_carbon_tonnes, 2);
    assert_eq!(session.step(), WizardStep::Results);

    assert_eq!(session.apply(WizardAction::Reset).unwrap(), WizardStep::Household);
    assert!(session.result().is_none());
    assert_eq!(session.form().household.size, 3);
}

#[test]
fn test_previous_is_noop_on_first_step() {
    let mut session = WizardSession::new();
    assert_eq!(session.apply(WizardAction::Previous).unwrap(), WizardStep::Household);
}

#[test]
fn test_next_disabled_on_last_input_step() {
    let mut session = WizardSession::new();
    for _ in 0..4 {
        session.apply(WizardAction::Next).unwrap();
    }
    assert_eq!(session.step(), WizardStep::Shopping);
    assert!(session.apply(WizardAction::Next).is_err());
    assert_eq!(session.step(), WizardStep::Shopping);
}
