//! Option catalog API handlers
//!
//! Serves the configured model and tool choice lists to the presentation
//! layer. The lists are advisory; submitted records are never validated
//! against them.

use crate::session::SessionContext;
use axum::{extract::State, response::Json};
use serde::Serialize;
use std::sync::Arc;

/// Option catalogs response
#[derive(Serialize)]
pub struct OptionsResponse {
    /// Model identifiers offered for new agents
    pub models: Vec<String>,
    /// Tool names offered for new agents
    pub tools: Vec<String>,
}

/// GET /api/options - Model and tool choices for new agents
pub async fn get_options(State(ctx): State<Arc<SessionContext>>) -> Json<OptionsResponse> {
    let catalog = ctx.catalog();

    Json(OptionsResponse {
        models: catalog.models.clone(),
        tools: catalog.tools.clone(),
    })
}
