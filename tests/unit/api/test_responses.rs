// Unit tests for API response types

use axum::{
    body::to_bytes,
    http::StatusCode,
    response::IntoResponse,
};
use event_catalog::api::responses::*;
use event_catalog::core::errors::CatalogError;

async fn body_json(err: ApiError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[test]
fn test_registration_response_shapes() {
    let ok = serde_json::to_value(RegistrationResponse::accepted()).unwrap();
    assert_eq!(ok, serde_json::json!({"success": true, "message": "Registration successful"}));

    let rejected = serde_json::to_value(RegistrationResponse::rejected("Event is full")).unwrap();
    assert_eq!(rejected, serde_json::json!({"success": false, "message": "Event is full"}));
}

#[test]
fn test_error_response_omits_empty_fields() {
    let response = ErrorResponse {
        success: None,
        error: "Event not found".to_string(),
        request_id: None,
    };

    let json = serde_json::to_string(&response).unwrap();
    assert_eq!(json, r#"{"error":"Event not found"}"#);
}

#[test]
fn test_validation_error_maps_to_400_with_success_flag() {
    let err = ApiError::from_catalog_error(CatalogError::Validation(
        "Missing required event data: title".to_string(),
    ));
    assert_eq!(err.status, StatusCode::BAD_REQUEST);
    assert_eq!(err.success, Some(false));
    assert_eq!(err.message, "Missing required event data: title");
}

#[test]
fn test_not_found_maps_to_404_without_success_flag() {
    let err: ApiError = CatalogError::NotFound(12).into();
    assert_eq!(err.status, StatusCode::NOT_FOUND);
    assert_eq!(err.success, None);
    assert_eq!(err.message, "Event not found");
}

#[test]
fn test_configuration_error_maps_to_500() {
    let err = ApiError::from_catalog_error(CatalogError::Configuration("bad".to_string()));
    assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(err.message, "Internal error");
}

#[tokio::test]
async fn test_api_error_into_response() {
    let err = ApiError::from_catalog_error_with_id(
        CatalogError::Validation("Invalid capacity 'x': must be an integer".to_string()),
        "req-123".to_string(),
    );

    let (status, json) = body_json(err).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["success"], false);
    assert_eq!(json["request_id"], "req-123");
    assert!(json["error"].as_str().unwrap().contains("capacity"));
}

#[tokio::test]
async fn test_api_error_new_into_response() {
    let (status, json) = body_json(ApiError::new(StatusCode::NOT_FOUND, "gone".to_string())).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json, serde_json::json!({"error": "gone"}));
}
