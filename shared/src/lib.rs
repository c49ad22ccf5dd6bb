pub mod client;
pub mod fields;
pub mod form;
pub mod render;
pub mod request;
pub mod theme;
pub mod validation;

pub use client::{PredictionTransport, RequestError, TransportResponse, classify, submit};
pub use fields::{Field, FieldBounds};
pub use form::{PredictionForm, SubmissionState, SubmitBlocked};
pub use render::{ResultTone, ResultView, render, render_state};
pub use request::{PredictionRequest, PredictionResult};
pub use theme::Theme;
pub use validation::{FieldInput, FieldStatus, ValidatedFields, ValidationError, ValidationErrorKind, validate};

/// Path of the prediction endpoint, relative to the page origin.
pub const PREDICT_ENDPOINT: &str = "/predict";

/// How long inline validation messages stay on screen.
pub const VALIDATION_ERROR_DISPLAY_MS: u32 = 3000;
