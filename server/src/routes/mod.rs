//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module stitches the placeholder JSON API together with Leptos SSR
//! rendering under a single Axum router. The API endpoints exist as a
//! collaborator boundary only: every handler returns static JSON, performs
//! no credential checking and touches no storage, and the SPA's auth flows
//! never call them.

#![allow(clippy::unused_async)]

pub mod auth;
pub mod templates;
pub mod users;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::response::Json;
use axum::routing::{get, post};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Placeholder API routes, CORS-open like the original backend.
fn api_routes() -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/status", get(status))
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/login", post(auth::login))
        .route("/api/templates", get(templates::list_templates))
        .route("/api/templates/{id}", get(templates::get_template))
        .route(
            "/api/users/{id}/documents",
            get(users::list_documents).post(users::create_document),
        )
        .route("/healthz", get(healthz))
        .layer(cors)
}

/// Full application router: placeholder API + Leptos SSR + static assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing
/// or malformed `Cargo.toml` `[package.metadata.leptos]` section).
pub fn app() -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    // Leptos static assets (WASM, CSS, JS) from the site root /pkg directory.
    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(api_routes()
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(TraceLayer::new_for_http()))
}

/// `GET /api/status`: liveness message for the frontend dev proxy.
async fn status() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "message": "Backend server is running!" }))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
