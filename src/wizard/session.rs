//! Wizard Session
//!
//! Owns the form data, the current step and the latest result for one
//! user. Transitions either succeed or return `WizardError` with the session
//! unchanged.

use rand::Rng;

use super::form::FieldEdit;
use super::step::{WizardAction, WizardStep};
use crate::error::WizardError;
use crate::estimator;
use crate::model::{FootprintResult, LifestyleInput};

#[derive(Debug, Clone, Default)]
pub struct WizardSession {
    form: LifestyleInput,
    step: WizardStep,
    result: Option<FootprintResult>,
}

impl WizardSession {
    /// Start at step 1 with the default form values
    pub fn new() -> Self {
        Self::default()
    }

    /// Start at step 1 with pre-filled form values
    pub fn with_form(form: LifestyleInput) -> Self {
        Self {
            form,
            ..Self::default()
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn form(&self) -> &LifestyleInput {
        &self.form
    }

    /// Result of the last calculation, present only on the result view
    pub fn result(&self) -> Option<&FootprintResult> {
        self.result.as_ref()
    }

    /// Apply a field edit. Only fields of the current input step are editable.
    pub fn edit(&mut self, edit: FieldEdit) -> Result<(), WizardError> {
        let field = edit.field();
        if field.step() != self.step {
            return Err(WizardError::FieldNotOnStep {
                field: field.key(),
                expected: field.step(),
                current: self.step,
            });
        }
        edit.apply_to(&mut self.form)
    }

    /// Step(n) → Step(n+1) for n < 5
    pub fn next(&mut self) -> Result<WizardStep, WizardError> {
        let to = self
            .step
            .following()
            .ok_or_else(|| self.invalid(WizardAction::Next))?;
        Ok(self.move_to(to))
    }

    /// Step(n) → Step(n-1) for n > 1. A no-op on step 1.
    pub fn previous(&mut self) -> Result<WizardStep, WizardError> {
        match (self.step, self.step.preceding()) {
            (WizardStep::Results, _) => Err(self.invalid(WizardAction::Previous)),
            (_, Some(to)) => Ok(self.move_to(to)),
            (_, None) => Ok(self.step),
        }
    }

    /// Step 5 → result view using the thread-local RNG
    pub fn calculate(&mut self) -> Result<&FootprintResult, WizardError> {
        self.calculate_with_rng(&mut rand::thread_rng())
    }

    /// Step 5 → result view, drawing tips from `rng`
    pub fn calculate_with_rng<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<&FootprintResult, WizardError> {
        if self.step != WizardStep::Shopping {
            return Err(self.invalid(WizardAction::Calculate));
        }

        let result = estimator::compute_with_rng(&self.form, rng);
        self.move_to(WizardStep::Results);
        Ok(self.result.insert(result))
    }

    /// Result view → step 1. Discards the result and keeps the form values.
    pub fn reset(&mut self) -> Result<WizardStep, WizardError> {
        if self.step != WizardStep::Results {
            return Err(self.invalid(WizardAction::Reset));
        }
        self.result = None;
        Ok(self.move_to(WizardStep::Household))
    }

    /// Dispatch a transition by action
    pub fn apply(&mut self, action: WizardAction) -> Result<WizardStep, WizardError> {
        match action {
            WizardAction::Next => self.next(),
            WizardAction::Previous => self.previous(),
            WizardAction::Calculate => self.calculate().map(|_| WizardStep::Results),
            WizardAction::Reset => self.reset(),
        }
    }

    fn move_to(&mut self, to: WizardStep) -> WizardStep {
        tracing::info!("Wizard: {} -> {}", self.step, to);
        self.step = to;
        to
    }

    fn invalid(&self, action: WizardAction) -> WizardError {
        WizardError::InvalidTransition {
            from: self.step,
            action,
        }
    }
}
