//! Agent roster API handlers
//!
//! Contains HTTP request handlers for creating, reading and deleting the
//! session's agent records.

use crate::api::notice::Notice;
use crate::error::AppError;
use crate::session::{AgentId, AgentRecord, SessionContext};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, info};

/// Agents list response
#[derive(Serialize)]
pub struct AgentsListResponse {
    /// Registry records in insertion order
    pub agents: Vec<AgentRecord>,
    /// Total number of agents
    pub count: usize,
}

/// Create agent request
#[derive(Deserialize)]
pub struct CreateAgentRequest {
    /// Name for the new agent
    pub name: String,
    /// Instruction prompt the agent runs with
    pub prompt: String,
    /// Model identifier (not validated against the option catalog)
    pub model: String,
    /// Selected tool names, in selection order
    #[serde(default)]
    pub tools: Vec<String>,
}

/// Create agent response
#[derive(Debug, Serialize)]
pub struct CreateAgentResponse {
    /// The newly stored record
    pub agent: AgentRecord,
    /// Notification for the presentation layer
    pub notice: Notice,
}

/// Delete agent response
#[derive(Serialize)]
pub struct DeleteAgentResponse {
    /// Whether a record was actually removed
    pub deleted: bool,
    /// Notification for the presentation layer; absent when the delete was a
    /// no-op
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<Notice>,
}

/// GET /api/agents - List the session's agents
pub async fn list_agents(
    State(ctx): State<Arc<SessionContext>>,
) -> Result<Json<AgentsListResponse>, AppError> {
    let state = ctx.state().read().await;
    let agents = state.registry.records().to_vec();

    Ok(Json(AgentsListResponse {
        count: agents.len(),
        agents,
    }))
}

/// GET /api/agents/:id - Get a specific agent
pub async fn get_agent(
    State(ctx): State<Arc<SessionContext>>,
    Path(id): Path<AgentId>,
) -> Result<Json<AgentRecord>, AppError> {
    let state = ctx.state().read().await;
    let record = state
        .registry
        .find_by_id(&id)
        .ok_or_else(|| AppError::AgentNotFound(id.clone()))?;

    Ok(Json(record.clone()))
}

/// POST /api/agents - Create a new agent
///
/// The record is persisted before it becomes visible in the session registry,
/// so a failed save leaves no trace in memory.
pub async fn create_agent(
    State(ctx): State<Arc<SessionContext>>,
    Json(request): Json<CreateAgentRequest>,
) -> Result<(StatusCode, Json<CreateAgentResponse>), AppError> {
    let record = AgentRecord::create(request.name, request.prompt, request.model, request.tools)
        .map_err(AppError::Validation)?;

    let mut state = ctx.state().write().await;

    if let Err(e) = ctx.store().save(&record).await {
        error!(id = %record.id, error = %e, "Failed to persist new agent");
        return Err(AppError::Store(e));
    }
    state.registry.add(record.clone());

    info!(id = %record.id, name = %record.name, "Created agent");

    Ok((
        StatusCode::CREATED,
        Json(CreateAgentResponse {
            notice: Notice::success(format!("Agent '{}' created", record.name)),
            agent: record,
        }),
    ))
}

/// DELETE /api/agents/:id - Delete an agent
///
/// Deleting an id that is not present is a benign no-op, reported with
/// `deleted: false` rather than an error.
pub async fn delete_agent(
    State(ctx): State<Arc<SessionContext>>,
    Path(id): Path<AgentId>,
) -> Result<Json<DeleteAgentResponse>, AppError> {
    let mut state = ctx.state().write().await;

    if state.registry.find_by_id(&id).is_none() {
        info!(id = %id, "Delete requested for unknown agent, ignoring");
        return Ok(Json(DeleteAgentResponse {
            deleted: false,
            notice: None,
        }));
    }

    // Store first, registry second: a failed store delete leaves the record
    // visible instead of resurrecting it on the next restart.
    ctx.store().delete_by_id(&id).await?;

    // The write lock is held since the presence check, so the record must
    // still be here.
    let removed = state.registry.remove_by_id(&id).ok_or_else(|| {
        AppError::Internal(anyhow::anyhow!("Agent not found after store delete"))
    })?;

    info!(id = %id, "Deleted agent");

    Ok(Json(DeleteAgentResponse {
        deleted: true,
        notice: Some(Notice::info(format!("Agent '{}' deleted", removed.name))),
    }))
}
