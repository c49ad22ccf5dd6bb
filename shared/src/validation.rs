use crate::fields::{Field, FieldBounds};
use std::fmt;

/// One raw form value together with the range it is checked against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldInput<'a> {
    pub field: Field,
    pub raw: &'a str,
    pub bounds: FieldBounds,
}

impl<'a> FieldInput<'a> {
    pub fn new(field: Field, raw: &'a str, min: f64, max: f64) -> Self {
        Self { field, raw, bounds: FieldBounds::new(min, max) }
    }

    /// Input checked against the field's own declared range.
    pub fn declared(field: Field, raw: &'a str) -> Self {
        Self { field, raw, bounds: field.bounds() }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ValidationErrorKind {
    /// Not a number, or outside `[min, max]`.
    OutOfRange { min: f64, max: f64 },
    Missing,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    pub field: Field,
    pub kind: ValidationErrorKind,
}

impl ValidationError {
    pub fn out_of_range(field: Field, bounds: FieldBounds) -> Self {
        Self { field, kind: ValidationErrorKind::OutOfRange { min: bounds.min, max: bounds.max } }
    }

    pub fn missing(field: Field) -> Self {
        Self { field, kind: ValidationErrorKind::Missing }
    }

    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ValidationErrorKind::OutOfRange { min, max } => {
                write!(f, "Please enter a value between {} and {}", min, max)
            }
            ValidationErrorKind::Missing => write!(f, "{} is required", self.field.label()),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Values that passed [`validate`], in input order.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedFields {
    values: Vec<(Field, f64)>,
}

impl ValidatedFields {
    pub fn get(&self, field: Field) -> Option<f64> {
        self.values.iter().find(|(f, _)| *f == field).map(|(_, v)| *v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, f64)> + '_ {
        self.values.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Live styling state of a single input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldStatus {
    Untouched,
    Valid,
    Invalid,
}

impl FieldStatus {
    pub fn of(input: &FieldInput<'_>) -> Self {
        if input.raw.trim().is_empty() {
            FieldStatus::Untouched
        } else if parse_value(input.raw).is_some_and(|v| input.bounds.contains(v)) {
            FieldStatus::Valid
        } else {
            FieldStatus::Invalid
        }
    }

    pub fn css_class(self) -> Option<&'static str> {
        match self {
            FieldStatus::Untouched => None,
            FieldStatus::Valid => Some("input-valid"),
            FieldStatus::Invalid => Some("input-invalid"),
        }
    }
}

pub(crate) fn parse_value(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| !v.is_nan())
}

/// Checks every input against its bounds without stopping at the first failure.
pub fn validate(inputs: &[FieldInput<'_>]) -> Result<ValidatedFields, Vec<ValidationError>> {
    let mut values = Vec::with_capacity(inputs.len());
    let mut errors = Vec::new();

    for input in inputs {
        match parse_value(input.raw) {
            Some(value) if input.bounds.contains(value) => values.push((input.field, value)),
            _ => errors.push(ValidationError::out_of_range(input.field, input.bounds)),
        }
    }

    if errors.is_empty() {
        Ok(ValidatedFields { values })
    } else {
        Err(errors)
    }
}
