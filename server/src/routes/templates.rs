//! Template routes: static sample payloads.

#![allow(clippy::unused_async)]

use axum::extract::Path;
use axum::response::Json;
use serde::Serialize;
use serde_json::{Value, json};

/// Summary row in the template listing.
#[derive(Debug, Serialize)]
pub struct TemplateSummary {
    pub id: u32,
    pub name: String,
}

/// `GET /api/templates`: fixed two-row sample list.
pub async fn list_templates() -> Json<Vec<TemplateSummary>> {
    Json(vec![
        TemplateSummary {
            id: 1,
            name: "Sample Template 1".to_owned(),
        },
        TemplateSummary {
            id: 2,
            name: "Sample Template 2".to_owned(),
        },
    ])
}

/// `GET /api/templates/{id}`: echoes the requested id back.
///
/// The id stays a string here while the listing uses numbers; nothing
/// downstream depends on the asymmetry.
pub async fn get_template(Path(id): Path<String>) -> Json<Value> {
    Json(json!({ "id": id, "name": format!("Sample Template {id}") }))
}

#[cfg(test)]
#[path = "templates_test.rs"]
mod tests;
