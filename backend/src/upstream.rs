use reqwest::Client as HttpClient;
use shared::{PredictionRequest, PredictionTransport, RequestError, TransportResponse};
use url::Url;

/// Forwards predictions to the model service behind the gateway.
#[derive(Clone)]
pub struct UpstreamService {
    http_client: HttpClient,
    url: Url,
}

impl UpstreamService {
    pub fn new(url: Url) -> Self {
        Self { http_client: HttpClient::new(), url }
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

impl PredictionTransport for UpstreamService {
    async fn post_prediction(
        &self,
        request: &PredictionRequest,
    ) -> Result<TransportResponse, RequestError> {
        let response = self
            .http_client
            .post(self.url.clone())
            .json(request)
            .send()
            .await
            .map_err(|e| RequestError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| RequestError::Network(e.to_string()))?;

        Ok(TransportResponse::new(status, body))
    }
}
