//! Auth routes: placeholders only.
//!
//! The real credential check runs client-side against demo accounts; these
//! endpoints accept anything and acknowledge nothing. A production rewrite
//! would move the checks in `client::util::credentials` behind this
//! boundary and issue server-minted tokens.

#![allow(clippy::unused_async)]

use axum::response::Json;
use serde_json::{Value, json};

/// `POST /api/auth/register`: static acknowledgement.
pub async fn register() -> Json<Value> {
    Json(json!({ "message": "User registration placeholder" }))
}

/// `POST /api/auth/login`: static acknowledgement.
pub async fn login() -> Json<Value> {
    Json(json!({ "message": "User login placeholder" }))
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
