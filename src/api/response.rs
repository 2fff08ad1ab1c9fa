//! Success-envelope builders: `{status: "success", data?, message?, results?}`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde_json::{json, Value};

fn data_object<T: Serialize>(key: &str, value: &T) -> Value {
    let mut map = serde_json::Map::new();
    map.insert(
        key.to_string(),
        serde_json::to_value(value).expect("document serialization should not fail"),
    );
    Value::Object(map)
}

/// 200 with `data: {key: value}`.
pub fn ok<T: Serialize>(key: &str, value: &T) -> Response {
    let body = json!({ "status": "success", "data": data_object(key, value) });
    (StatusCode::OK, axum::Json(body)).into_response()
}

/// 201 with `data: {key: value}`.
pub fn created<T: Serialize>(key: &str, value: &T) -> Response {
    let body = json!({ "status": "success", "data": data_object(key, value) });
    (StatusCode::CREATED, axum::Json(body)).into_response()
}

/// 200 with both a human-readable message and data.
pub fn ok_with_message<T: Serialize>(message: &str, key: &str, value: &T) -> Response {
    let body = json!({
        "status": "success",
        "message": message,
        "data": data_object(key, value),
    });
    (StatusCode::OK, axum::Json(body)).into_response()
}

/// 201 with both a message and data (contact-form acknowledgement).
pub fn created_with_message<T: Serialize>(message: &str, key: &str, value: &T) -> Response {
    let body = json!({
        "status": "success",
        "message": message,
        "data": data_object(key, value),
    });
    (StatusCode::CREATED, axum::Json(body)).into_response()
}

/// 200 with a message only (deletions).
pub fn message(message: &str) -> Response {
    let body = json!({ "status": "success", "message": message });
    (StatusCode::OK, axum::Json(body)).into_response()
}

/// 200 for list endpoints; `results` carries the item count.
pub fn list<T: Serialize>(key: &str, items: &[T]) -> Response {
    let body = json!({
        "status": "success",
        "results": items.len(),
        "data": data_object(key, &items),
    });
    (StatusCode::OK, axum::Json(body)).into_response()
}
