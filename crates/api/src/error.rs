use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use domain::services::validation::SelectionError;
use persistence::repositories::RegistrationStoreError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Validation error: {message}")]
    Validation {
        message: String,
        details: Vec<ValidationDetail>,
    },

    #[error("Capacity exceeded for {event}")]
    CapacityExceeded { event: String },

    #[error("Internal error: {0}")]
    Internal(String),
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<Vec<ValidationDetail>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ValidationDetail {
    pub field: String,
    pub message: String,
}

impl ApiError {
    /// Builds a validation error from collected field details.
    pub fn validation(details: Vec<ValidationDetail>) -> Self {
        let message = match details.as_slice() {
            [single] => single.message.clone(),
            many => format!("{} validation errors", many.len()),
        };
        ApiError::Validation { message, details }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code, message, details) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg, None),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, "conflict", msg, None),
            ApiError::Validation { message, details } => (
                StatusCode::BAD_REQUEST,
                "validation_error",
                message,
                Some(details),
            ),
            ApiError::CapacityExceeded { event } => (
                StatusCode::CONFLICT,
                "capacity_exceeded",
                format!("\"{}\" is full. Please choose another event.", event),
                None,
            ),
            ApiError::Internal(msg) => {
                // Log the detail server-side, return a generic body
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "An internal error occurred".into(),
                    None,
                )
            }
        };

        let body = ErrorBody {
            error: error_code.into(),
            message,
            details,
        };

        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => ApiError::NotFound("Resource not found".into()),
            sqlx::Error::Database(db_err) => {
                if let Some(code) = db_err.code() {
                    match code.as_ref() {
                        "23505" => ApiError::Conflict("Resource already exists".into()),
                        _ => ApiError::Internal(format!("Database error: {}", db_err)),
                    }
                } else {
                    ApiError::Internal(format!("Database error: {}", db_err))
                }
            }
            _ => ApiError::Internal(format!("Database error: {}", err)),
        }
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let details: Vec<ValidationDetail> = errors
            .field_errors()
            .iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |e| ValidationDetail {
                    field: field.to_string(),
                    message: e.message.clone().map(|m| m.to_string()).unwrap_or_default(),
                })
            })
            .collect();

        ApiError::validation(details)
    }
}

impl From<Vec<SelectionError>> for ApiError {
    fn from(errors: Vec<SelectionError>) -> Self {
        let details = errors
            .into_iter()
            .map(|e| ValidationDetail {
                field: "events".to_string(),
                message: e.to_string(),
            })
            .collect();

        ApiError::validation(details)
    }
}

impl From<RegistrationStoreError> for ApiError {
    fn from(err: RegistrationStoreError) -> Self {
        match err {
            RegistrationStoreError::CapacityExceeded { event } => {
                ApiError::CapacityExceeded { event }
            }
            RegistrationStoreError::Database(e) => e.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_api_error_not_found() {
        let error = ApiError::NotFound("no such event".to_string());
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_api_error_conflict() {
        let error = ApiError::Conflict("already exists".to_string());
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_api_error_validation() {
        let error = ApiError::validation(vec![ValidationDetail {
            field: "phone".to_string(),
            message: "Phone number must be at least 10 digits".to_string(),
        }]);
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_api_error_capacity_exceeded_is_conflict() {
        let error = ApiError::CapacityExceeded {
            event: "Crisis Management".to_string(),
        };
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_api_error_internal() {
        let error = ApiError::Internal("db exploded".to_string());
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_validation_message_single_detail() {
        let error = ApiError::validation(vec![ValidationDetail {
            field: "name".to_string(),
            message: "This field is required".to_string(),
        }]);
        assert_eq!(
            error.to_string(),
            "Validation error: This field is required"
        );
    }

    #[test]
    fn test_validation_message_many_details() {
        let detail = |field: &str| ValidationDetail {
            field: field.to_string(),
            message: "This field is required".to_string(),
        };
        let error = ApiError::validation(vec![detail("name"), detail("course")]);
        assert_eq!(error.to_string(), "Validation error: 2 validation errors");
    }

    #[test]
    fn test_store_capacity_error_maps_to_capacity_exceeded() {
        let store_err = RegistrationStoreError::CapacityExceeded {
            event: "Duologue".to_string(),
        };
        let api_err: ApiError = store_err.into();
        assert!(matches!(
            api_err,
            ApiError::CapacityExceeded { ref event } if event == "Duologue"
        ));
    }

    #[test]
    fn test_selection_errors_map_to_validation_details() {
        let api_err: ApiError = vec![SelectionError::MissingParticipants {
            event: "Duologue".to_string(),
        }]
        .into();

        match api_err {
            ApiError::Validation { details, .. } => {
                assert_eq!(details.len(), 1);
                assert_eq!(details[0].field, "events");
                assert!(details[0].message.contains("Duologue"));
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }
}
