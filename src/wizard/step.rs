use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of input steps before the result view
pub const INPUT_STEPS: u8 = 5;

/// Wizard position: five input steps followed by the result view
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    #[default]
    Household,
    Energy,
    Transportation,
    Food,
    Shopping,
    Results,
}

impl WizardStep {
    pub const INPUTS: [WizardStep; INPUT_STEPS as usize] = [
        WizardStep::Household,
        WizardStep::Energy,
        WizardStep::Transportation,
        WizardStep::Food,
        WizardStep::Shopping,
    ];

    /// 1-based position; the result view is step 6
    pub fn number(&self) -> u8 {
        match self {
            WizardStep::Household => 1,
            WizardStep::Energy => 2,
            WizardStep::Transportation => 3,
            WizardStep::Food => 4,
            WizardStep::Shopping => 5,
            WizardStep::Results => 6,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            WizardStep::Household => "Household",
            WizardStep::Energy => "Energy",
            WizardStep::Transportation => "Transportation",
            WizardStep::Food => "Food",
            WizardStep::Shopping => "Shopping",
            WizardStep::Results => "Results",
        }
    }

    pub fn is_input(&self) -> bool {
        !matches!(self, WizardStep::Results)
    }

    /// Progress bar fill for input steps (n / 5 × 100); `None` on the result view
    pub fn progress_percent(&self) -> Option<u8> {
        // Widened: 3 * 100 does not fit in u8
        let percent = |n: u8| (u16::from(n) * 100 / u16::from(INPUT_STEPS)) as u8;
        self.is_input().then(|| percent(self.number()))
    }

    /// Following input step, `None` from Shopping and Results
    pub(crate) fn following(&self) -> Option<WizardStep> {
        match self {
            WizardStep::Household => Some(WizardStep::Energy),
            WizardStep::Energy => Some(WizardStep::Transportation),
            WizardStep::Transportation => Some(WizardStep::Food),
            WizardStep::Food => Some(WizardStep::Shopping),
            WizardStep::Shopping | WizardStep::Results => None,
        }
    }

    /// Preceding input step, `None` from Household and Results
    pub(crate) fn preceding(&self) -> Option<WizardStep> {
        match self {
            WizardStep::Energy => Some(WizardStep::Household),
            WizardStep::Transportation => Some(WizardStep::Energy),
            WizardStep::Food => Some(WizardStep::Transportation),
            WizardStep::Shopping => Some(WizardStep::Food),
            WizardStep::Household | WizardStep::Results => None,
        }
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (step {})", self.title(), self.number())
    }
}

/// Transition requested on the wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardAction {
    Next,
    Previous,
    Calculate,
    Reset,
}

impl fmt::Display for WizardAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            WizardAction::Next => "go to next step",
            WizardAction::Previous => "go to previous step",
            WizardAction::Calculate => "calculate",
            WizardAction::Reset => "start over",
        };
        f.write_str(name)
    }
}
