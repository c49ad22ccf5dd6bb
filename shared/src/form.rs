use crate::client::RequestError;
use crate::fields::Field;
use crate::request::{PredictionRequest, PredictionResult};
use crate::validation::{FieldInput, FieldStatus, ValidationError, validate};
use std::collections::BTreeMap;
use strum::IntoEnumIterator;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded(PredictionResult),
    Failed(RequestError),
}

/// Why [`PredictionForm::prepare_submission`] refused to produce a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitBlocked {
    InFlight,
    Invalid(usize),
}

/// State owned by the prediction form: raw input text, the inline errors
/// currently on display, and where the submission stands.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionForm {
    values: BTreeMap<Field, String>,
    errors: Vec<ValidationError>,
    error_generation: u32,
    state: SubmissionState,
}

impl Default for PredictionForm {
    fn default() -> Self {
        Self::new()
    }
}

impl PredictionForm {
    pub fn new() -> Self {
        Self {
            values: Field::iter().map(|f| (f, String::new())).collect(),
            errors: Vec::new(),
            error_generation: 0,
            state: SubmissionState::Idle,
        }
    }

    pub fn set_value(&mut self, field: Field, raw: impl Into<String>) {
        self.values.insert(field, raw.into());
    }

    pub fn value(&self, field: Field) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or("")
    }

    pub fn field_status(&self, field: Field) -> FieldStatus {
        FieldStatus::of(&FieldInput::declared(field, self.value(field)))
    }

    pub fn inputs(&self) -> Vec<FieldInput<'_>> {
        Field::iter().map(|f| FieldInput::declared(f, self.value(f))).collect()
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    pub fn error_for(&self, field: Field) -> Option<&ValidationError> {
        self.errors.iter().find(|e| e.field == field)
    }

    /// Generation of the errors currently displayed. A delayed clear carries
    /// the generation it was scheduled for.
    pub fn error_generation(&self) -> u32 {
        self.error_generation
    }

    /// Drops the displayed errors unless a newer validation pass replaced them.
    pub fn clear_errors(&mut self, generation: u32) -> bool {
        if generation != self.error_generation || self.errors.is_empty() {
            return false;
        }
        self.errors.clear();
        true
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.state, SubmissionState::Submitting)
    }

    /// Validates the form and, when every field is in range, moves to
    /// `Submitting` and returns the request to send.
    pub fn prepare_submission(&mut self) -> Result<PredictionRequest, SubmitBlocked> {
        if self.is_submitting() {
            log::debug!("Submission ignored, a request is already in flight");
            return Err(SubmitBlocked::InFlight);
        }

        let checked = validate(&self.inputs()).and_then(PredictionRequest::try_from);
        match checked {
            Ok(request) => {
                self.errors.clear();
                self.state = SubmissionState::Submitting;
                log::debug!("Form valid, submitting");
                Ok(request)
            }
            Err(errors) => {
                let count = errors.len();
                self.errors = errors;
                self.error_generation = self.error_generation.wrapping_add(1);
                log::debug!("Form has {} invalid field(s)", count);
                Err(SubmitBlocked::Invalid(count))
            }
        }
    }

    /// Records the outcome of the in-flight request. Ignored unless submitting.
    pub fn complete(&mut self, outcome: Result<PredictionResult, RequestError>) -> bool {
        if !self.is_submitting() {
            log::warn!("Dropping prediction outcome received while not submitting");
            return false;
        }
        self.state = match outcome {
            Ok(result) => SubmissionState::Succeeded(result),
            Err(error) => SubmissionState::Failed(error),
        };
        true
    }
}
