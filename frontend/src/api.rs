use gloo_net::http::Request;
use shared::{PREDICT_ENDPOINT, PredictionRequest, PredictionTransport, RequestError, TransportResponse};

/// Browser `fetch` transport for the prediction endpoint.
pub struct GlooTransport {
    endpoint: &'static str,
}

impl Default for GlooTransport {
    fn default() -> Self {
        Self { endpoint: PREDICT_ENDPOINT }
    }
}

impl PredictionTransport for GlooTransport {
    async fn post_prediction(
        &self,
        request: &PredictionRequest,
    ) -> Result<TransportResponse, RequestError> {
        let response = Request::post(self.endpoint)
            .json(request)
            .map_err(|e| RequestError::Network(format!("Failed to encode request: {}", e)))?
            .send()
            .await
            .map_err(|e| {
                log::error!("{} network error: {:?}", self.endpoint, e);
                RequestError::Network(e.to_string())
            })?;

        let status = response.status();
        let body = if response.ok() {
            response.text().await.map_err(|e| RequestError::Network(e.to_string()))?
        } else {
            let body = response.text().await.unwrap_or_default();
            log::error!("{} failed with status {}: {}", self.endpoint, status, body);
            body
        };

        Ok(TransportResponse::new(status, body))
    }
}
