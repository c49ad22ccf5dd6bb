use crate::request::{PredictionRequest, PredictionResult};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    #[error("HTTP error! status: {0}")]
    HttpStatus(u16),
    #[error("Network error: {0}")]
    Network(String),
}

/// Raw status and text body of a finished round-trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends a serialized [`PredictionRequest`] as a JSON `POST` and hands back
/// whatever came back. Implementations must not retry.
#[allow(async_fn_in_trait)]
pub trait PredictionTransport {
    async fn post_prediction(
        &self,
        request: &PredictionRequest,
    ) -> Result<TransportResponse, RequestError>;
}

/// Performs exactly one round-trip and classifies the response text.
pub async fn submit<T>(
    transport: &T,
    request: &PredictionRequest,
) -> Result<PredictionResult, RequestError>
where
    T: PredictionTransport + ?Sized,
{
    let response = transport.post_prediction(request).await?;
    classify(&response)
}

/// Maps a finished round-trip to a classification, or to its status on failure.
pub fn classify(response: &TransportResponse) -> Result<PredictionResult, RequestError> {
    if !response.is_success() {
        log::warn!("Prediction endpoint answered with status {}", response.status);
        return Err(RequestError::HttpStatus(response.status));
    }

    let result = PredictionResult::from_response_text(&response.body);
    log::debug!("Prediction body {:?} classified as {:?}", response.body, result);
    Ok(result)
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::cell::{Cell, RefCell};

    /// In-memory transport replaying one canned outcome and counting calls.
    pub struct CannedTransport {
        outcome: Result<TransportResponse, RequestError>,
        pub calls: Cell<usize>,
        pub last_request: RefCell<Option<PredictionRequest>>,
    }

    impl CannedTransport {
        pub fn replying(status: u16, body: &str) -> Self {
            Self::with_outcome(Ok(TransportResponse::new(status, body)))
        }

        pub fn failing(message: &str) -> Self {
            Self::with_outcome(Err(RequestError::Network(message.to_string())))
        }

        fn with_outcome(outcome: Result<TransportResponse, RequestError>) -> Self {
            Self { outcome, calls: Cell::new(0), last_request: RefCell::new(None) }
        }
    }

    impl PredictionTransport for CannedTransport {
        async fn post_prediction(
            &self,
            request: &PredictionRequest,
        ) -> Result<TransportResponse, RequestError> {
            self.calls.set(self.calls.get() + 1);
            *self.last_request.borrow_mut() = Some(*request);
            self.outcome.clone()
        }
    }

    pub fn sample_request() -> PredictionRequest {
        PredictionRequest {
            pregnancies: 2.0,
            glucose: 130.0,
            blood_pressure: 70.0,
            skin_thickness: 20.0,
            insulin: 80.0,
            bmi: 28.5,
            diabetes_pedigree_function: 0.5,
            age: 33.0,
        }
    }
}
