use gloo_net::http::Request;
use shared::{CrashFeatureRecord, PredictionResult, ResponseError, decode_response};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PredictionError {
    #[error("Failed to build request: {0}")]
    Encode(gloo_net::Error),
    #[error("Network error: {0}")]
    Network(gloo_net::Error),
    #[error(transparent)]
    Response(#[from] ResponseError),
}

/// JSON POST of one crash scenario to `endpoint`.
pub fn build_prediction_request(
    endpoint: &str,
    record: &CrashFeatureRecord,
) -> Result<Request, PredictionError> {
    Request::post(endpoint)
        .header("Content-Type", "application/json")
        .json(record)
        .map_err(PredictionError::Encode)
}

/// Sends one crash scenario and decodes the service's answer.
pub async fn request_prediction(
    endpoint: &str,
    record: &CrashFeatureRecord,
) -> Result<PredictionResult, PredictionError> {
    let request = build_prediction_request(endpoint, record)?;

    let response = request.send().await.map_err(PredictionError::Network)?;
    let status = response.status();
    let body = response.text().await.map_err(PredictionError::Network)?;

    Ok(decode_response(status, &body)?)
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use gloo_net::http::Method;
    use serde_json::Value;
    use shared::CrashField;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn record() -> CrashFeatureRecord {
        CrashFeatureRecord::from_lookup(|field| match field {
            CrashField::CrashSpeed => "abc".to_string(),
            CrashField::DriverAge => "34".to_string(),
            CrashField::CrashType => "Rollover".to_string(),
            other if other.options().is_empty() => "1".to_string(),
            other => other.options()[0].to_string(),
        })
    }

    #[wasm_bindgen_test]
    async fn request_is_a_json_post_to_the_endpoint() {
        let request = build_prediction_request("/predict", &record()).unwrap();

        assert_eq!(request.method(), Method::POST);
        assert!(request.url().ends_with("/predict"), "{}", request.url());
        assert_eq!(
            request.headers().get("Content-Type").as_deref(),
            Some("application/json")
        );

        let body: Value = serde_json::from_str(&request.text().await.unwrap()).unwrap();
        let object = body.as_object().unwrap();
        assert_eq!(object.len(), 17);
        assert_eq!(body["Crash Speed (km/h)"], Value::Null);
        assert_eq!(body["Driver Age"], serde_json::json!(34));
        assert_eq!(body["Crash Type"], serde_json::json!("Rollover"));
    }
}
