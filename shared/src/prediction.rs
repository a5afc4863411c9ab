use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// What the prediction service returned for one scenario.
///
/// Both values are kept exactly as received and only stringified for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub prediction: Value,
    pub confidence: Value,
}

/// Error body the prediction service sends with 4xx/5xx statuses.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(default)]
    pub details: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ResponseError {
    #[error("Server error: {status} - {message}")]
    Server { status: u16, message: String },
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

impl PredictionResult {
    pub fn severity_text(&self) -> String {
        format!("Severity: {}", display_value(&self.prediction))
    }

    pub fn confidence_text(&self) -> String {
        format!("Confidence: {}", display_value(&self.confidence))
    }
}

/// Turns a status code and raw body into a prediction.
pub fn decode_response(status: u16, body: &str) -> Result<PredictionResult, ResponseError> {
    if !(200..300).contains(&status) {
        return Err(ResponseError::Server {
            status,
            message: server_message(body),
        });
    }

    let value: Value =
        serde_json::from_str(body).map_err(|e| ResponseError::Decode(e.to_string()))?;
    let object = value
        .as_object()
        .ok_or_else(|| ResponseError::Decode("expected a JSON object".into()))?;

    let field = |name: &str| {
        object
            .get(name)
            .cloned()
            .ok_or_else(|| ResponseError::Decode(format!("missing field `{}`", name)))
    };

    Ok(PredictionResult {
        prediction: field("prediction")?,
        confidence: field("confidence")?,
    })
}

fn server_message(body: &str) -> String {
    match serde_json::from_str::<ErrorResponse>(body) {
        Ok(ErrorResponse {
            error,
            details: Some(details),
        }) => format!("{}: {}", error, details),
        Ok(ErrorResponse { error, .. }) => error,
        Err(_) if body.trim().is_empty() => "empty response body".to_string(),
        Err(_) => body.trim().to_string(),
    }
}

/// Stringifies a JSON value the way string concatenation does in the browser.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => match (n.as_i64(), n.as_u64(), n.as_f64()) {
            (Some(i), _, _) => i.to_string(),
            (_, Some(u), _) => u.to_string(),
            (_, _, Some(f)) => display_float(f),
            _ => n.to_string(),
        },
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => display_value(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

/// Browser number formatting: plain notation from 1e-6 up to 1e21,
/// exponent notation outside that range.
fn display_float(f: f64) -> String {
    if f == 0.0 {
        return "0".to_string();
    }
    if !f.is_finite() {
        return if f.is_nan() {
            "NaN".to_string()
        } else if f > 0.0 {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        };
    }

    // `{:e}` yields the shortest round-trip digits, e.g. "8.7e-1".
    let scientific = format!("{:e}", f.abs());
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return f.to_string();
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return f.to_string();
    };
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let k = digits.len() as i32;
    let n = exponent + 1;

    let body = if k <= n && n <= 21 {
        format!("{}{}", digits, "0".repeat((n - k) as usize))
    } else if 0 < n && n <= 21 {
        let (int_part, frac_part) = digits.split_at(n as usize);
        format!("{}.{}", int_part, frac_part)
    } else if -6 < n && n <= 0 {
        format!("0.{}{}", "0".repeat((-n) as usize), digits)
    } else {
        let sign = if n - 1 < 0 { '-' } else { '+' };
        let (first, rest) = digits.split_at(1);
        if rest.is_empty() {
            format!("{}e{}{}", first, sign, (n - 1).abs())
        } else {
            format!("{}.{}e{}{}", first, rest, sign, (n - 1).abs())
        }
    };

    if f < 0.0 { format!("-{}", body) } else { body }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn renders_severity_and_confidence() {
        let result = decode_response(200, r#"{"prediction": "Severe", "confidence": 0.87}"#).unwrap();
        assert_eq!(result.severity_text(), "Severity: Severe");
        assert_eq!(result.confidence_text(), "Confidence: 0.87");
    }

    #[test]
    fn extra_fields_are_ignored() {
        let result = decode_response(
            201,
            r#"{"prediction": "Minor", "confidence": 0.5, "model": "rf"}"#,
        )
        .unwrap();
        assert_eq!(result.prediction, json!("Minor"));
    }

    #[test]
    fn values_of_any_type_are_rendered_as_is() {
        assert_eq!(display_value(&json!(1.0)), "1");
        assert_eq!(display_value(&json!(3)), "3");
        assert_eq!(display_value(&json!(-0.0)), "0");
        assert_eq!(display_value(&json!(0.125)), "0.125");
        assert_eq!(display_value(&json!(null)), "null");
        assert_eq!(display_value(&json!(true)), "true");
        assert_eq!(display_value(&json!(["a", null, 2])), "a,,2");
        assert_eq!(display_value(&json!({"a": 1})), "[object Object]");
    }

    #[test]
    fn floats_switch_to_exponent_form_like_the_browser() {
        assert_eq!(display_value(&json!(1e-7)), "1e-7");
        assert_eq!(display_value(&json!(1.5e-7)), "1.5e-7");
        assert_eq!(display_value(&json!(0.000001)), "0.000001");
        assert_eq!(display_value(&json!(1e21)), "1e+21");
        assert_eq!(display_value(&json!(1.25e22)), "1.25e+22");
        assert_eq!(display_value(&json!(1e20)), "100000000000000000000");
        assert_eq!(display_value(&json!(-2.5)), "-2.5");
        assert_eq!(display_value(&json!(123.456)), "123.456");
    }

    #[test]
    fn null_values_are_still_a_prediction() {
        let result = decode_response(200, r#"{"prediction": null, "confidence": null}"#).unwrap();
        assert_eq!(result.severity_text(), "Severity: null");
    }

    #[test]
    fn missing_confidence_is_a_decode_error() {
        let err = decode_response(200, r#"{"prediction": "Severe"}"#).unwrap_err();
        assert_eq!(err, ResponseError::Decode("missing field `confidence`".into()));
    }

    #[test]
    fn non_object_and_non_json_bodies_fail_to_decode() {
        assert!(matches!(decode_response(200, "[1, 2]"), Err(ResponseError::Decode(_))));
        assert!(matches!(
            decode_response(200, "<html>oops</html>"),
            Err(ResponseError::Decode(_))
        ));
    }

    #[test]
    fn server_errors_surface_the_service_message() {
        let err = decode_response(500, r#"{"error": "Model or target encoder not loaded"}"#)
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Server error: 500 - Model or target encoder not loaded"
        );

        let err = decode_response(
            404,
            r#"{"error": "Resource not found", "details": "no such URL"}"#,
        )
        .unwrap_err();
        assert_eq!(
            err,
            ResponseError::Server {
                status: 404,
                message: "Resource not found: no such URL".into()
            }
        );
    }

    #[test]
    fn server_errors_without_json_keep_the_raw_body() {
        let err = decode_response(502, "Bad Gateway\n").unwrap_err();
        assert_eq!(err.to_string(), "Server error: 502 - Bad Gateway");

        let err = decode_response(503, "").unwrap_err();
        assert_eq!(err.to_string(), "Server error: 503 - empty response body");
    }
}
