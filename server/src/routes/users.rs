//! User document routes: static placeholder messages.

#![allow(clippy::unused_async)]

use axum::extract::Path;
use axum::response::Json;
use serde_json::{Value, json};

/// `GET /api/users/{id}/documents`: placeholder listing message.
pub async fn list_documents(Path(user_id): Path<String>) -> Json<Value> {
    Json(json!({ "message": format!("Placeholder for documents of user {user_id}") }))
}

/// `POST /api/users/{id}/documents`: placeholder creation message.
pub async fn create_document(Path(user_id): Path<String>) -> Json<Value> {
    Json(json!({
        "message": format!("Placeholder for creating a new document for user {user_id}")
    }))
}

#[cfg(test)]
#[path = "users_test.rs"]
mod tests;
