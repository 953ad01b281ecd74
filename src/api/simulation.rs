//! Team simulation API handlers
//!
//! Contains HTTP request handlers for running a team simulation and for
//! reading and clearing the simulation log.

use crate::api::notice::Notice;
use crate::error::AppError;
use crate::session::SessionContext;
use axum::{extract::State, response::Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, info, warn};

/// Run simulation request
#[derive(Deserialize)]
pub struct RunSimulationRequest {
    /// Agent names to run, in order
    pub names: Vec<String>,
}

/// Run simulation response
#[derive(Serialize)]
pub struct RunSimulationResponse {
    /// Names that resolved and ran to completion, in run order
    pub completed: Vec<String>,
    /// Names that did not match any registry record
    pub skipped: Vec<String>,
    /// Names whose simulation failed
    pub failed: Vec<String>,
    /// Notification for the presentation layer
    pub notice: Notice,
}

/// Simulation log response
#[derive(Serialize)]
pub struct SimulationLogResponse {
    /// Log entries in append order
    pub entries: Vec<String>,
    /// Total number of entries
    pub count: usize,
}

/// Clear log response
#[derive(Serialize)]
pub struct ClearLogResponse {
    /// Notification for the presentation layer
    pub notice: Notice,
}

/// POST /api/simulation/run - Run a team simulation
///
/// Resolves each requested name against the session registry in order and
/// appends one work block per resolved agent to the log, bracketed by run
/// markers. Unresolvable names are skipped with a warning notice; a failing
/// simulation raises the notice to error level. Neither aborts the rest of
/// the run. An empty selection leaves the log untouched.
pub async fn run_simulation(
    State(ctx): State<Arc<SessionContext>>,
    Json(request): Json<RunSimulationRequest>,
) -> Result<Json<RunSimulationResponse>, AppError> {
    if request.names.is_empty() {
        return Ok(Json(RunSimulationResponse {
            completed: Vec::new(),
            skipped: Vec::new(),
            failed: Vec::new(),
            notice: Notice::warning("No agents selected for the simulation".to_string()),
        }));
    }

    let mut state = ctx.state().write().await;

    info!(requested = request.names.len(), "Starting team simulation");
    state.log.begin_run();

    let mut completed = Vec::new();
    let mut skipped = Vec::new();
    let mut failed = Vec::new();

    for name in &request.names {
        let record = match state.registry.find_by_name(name) {
            Some(record) => record.clone(),
            None => {
                warn!(name = %name, "Simulation requested for unknown agent, skipping");
                skipped.push(name.clone());
                continue;
            }
        };

        match ctx.simulator().simulate(&record).await {
            Ok(block) => {
                state.log.append(block);
                completed.push(name.clone());
            }
            Err(e) => {
                error!(name = %name, error = %e, "Agent simulation failed");
                failed.push(name.clone());
            }
        }
    }

    state.log.end_run();

    info!(
        completed = completed.len(),
        skipped = skipped.len(),
        failed = failed.len(),
        "Team simulation finished"
    );

    let notice = if skipped.is_empty() && failed.is_empty() {
        Notice::success("Team simulation finished".to_string())
    } else {
        let summary = format!(
            "Team simulation finished: {} completed, {} skipped, {} failed",
            completed.len(),
            skipped.len(),
            failed.len()
        );
        if failed.is_empty() {
            Notice::warning(summary)
        } else {
            Notice::error(summary)
        }
    };

    Ok(Json(RunSimulationResponse {
        completed,
        skipped,
        failed,
        notice,
    }))
}

/// GET /api/simulation/log - Read the simulation log
pub async fn get_log(
    State(ctx): State<Arc<SessionContext>>,
) -> Result<Json<SimulationLogResponse>, AppError> {
    let state = ctx.state().read().await;
    let entries = state.log.entries().to_vec();

    Ok(Json(SimulationLogResponse {
        count: entries.len(),
        entries,
    }))
}

/// DELETE /api/simulation/log - Clear the simulation log
pub async fn clear_log(
    State(ctx): State<Arc<SessionContext>>,
) -> Result<Json<ClearLogResponse>, AppError> {
    let mut state = ctx.state().write().await;
    state.log.clear();

    info!("Simulation log cleared");

    Ok(Json(ClearLogResponse {
        notice: Notice::info("Simulation log cleared".to_string()),
    }))
}
