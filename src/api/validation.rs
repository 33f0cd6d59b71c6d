use actix_web::{web, HttpResponse};

use crate::api::error::{ApiError, ErrorResponse};

/// Project-wide JsonConfig turning body extraction failures into
/// structured 400 responses
pub fn json_config() -> actix_web_validator::JsonConfig {
    actix_web_validator::JsonConfig::default().error_handler(|err, _req| {
        let mut fields = serde_json::Map::new();

        match err {
            actix_web_validator::Error::Validate(validation_errors) => {
                for (field, errors) in validation_errors.field_errors() {
                    let messages: Vec<String> = errors
                        .iter()
                        .map(|e| {
                            e.message
                                .as_ref()
                                .map(|m| m.to_string())
                                .unwrap_or_else(|| format!("Invalid value for field: {}", field))
                        })
                        .collect();
                    fields.insert(field.to_string(), serde_json::json!({ "errors": messages }));
                }
            }
            actix_web_validator::Error::Deserialize(de_err) => {
                let err_string = de_err.to_string();

                let message = if err_string.contains("EOF while parsing") {
                    "Request body is empty. Expected JSON payload"
                } else if err_string.contains("unknown variant") {
                    "Invalid enum value. Check allowed values for this field"
                } else if err_string.contains("missing field") {
                    "Missing required field"
                } else {
                    "Invalid JSON format"
                };
                fields.insert("message".to_string(), serde_json::json!(message));
            }
            _ => {
                fields.insert("message".to_string(), serde_json::json!("Invalid request"));
            }
        }

        let error_response = ErrorResponse {
            error: "Validation failed".to_string(),
            fields: serde_json::Value::Object(fields),
        };
        actix_web::error::InternalError::from_response(
            "",
            HttpResponse::BadRequest().json(error_response),
        )
        .into()
    })
}

/// Non-numeric path ids are a validation failure, not a routing miss
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default()
        .error_handler(|_err, _req| ApiError::Validation("Invalid id".to_string()).into())
}
