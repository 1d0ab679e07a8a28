//! Calculator Wizard
//!
//! Five input steps followed by a result view:
//! - `step.rs` - step enum, titles, progress, transition names
//! - `form.rs` - typed field edits with range clamping, whole-record normalising
//! - `session.rs` - the state machine owning one user's form data

pub mod form;
pub mod session;
pub mod step;

pub use form::{normalize_input, FieldEdit, FormField, NumericRange};
pub use session::WizardSession;
pub use step::{WizardAction, WizardStep, INPUT_STEPS};
