//! Work simulation behind an awaitable boundary.
//!
//! `WorkSimulator` is the seam where a real agent backend would plug in; the
//! shipped [`DelaySimulator`] stands in for one by sleeping an artificial
//! delay and producing a deterministic transcript block.

use crate::session::AgentRecord;
use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// Errors raised while simulating an agent's work.
#[derive(Error, Debug)]
pub enum SimulationError {
    /// The simulated backend reported a failure.
    #[error("simulation backend failed: {0}")]
    Backend(String),
}

/// Asynchronous work boundary for one agent.
///
/// Implementations run one agent's task and return the transcript block to
/// append to the simulation log. A real backend integration replaces
/// [`DelaySimulator`] behind this trait without touching the run loop.
#[async_trait]
pub trait WorkSimulator: Send + Sync {
    /// Run `agent`'s task and return its formatted transcript block.
    async fn simulate(&self, agent: &AgentRecord) -> Result<String, SimulationError>;
}

/// Default simulator: an artificial delay followed by a canned work block.
pub struct DelaySimulator {
    /// How long each simulated task takes.
    delay: Duration,
}

impl DelaySimulator {
    /// Create a simulator with the given per-agent delay.
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// Get the configured per-agent delay
    #[cfg(test)]
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

#[async_trait]
impl WorkSimulator for DelaySimulator {
    async fn simulate(&self, agent: &AgentRecord) -> Result<String, SimulationError> {
        debug!(
            agent_id = %agent.id,
            agent_name = %agent.name,
            delay_ms = self.delay.as_millis() as u64,
            "Simulating agent work"
        );

        tokio::time::sleep(self.delay).await;

        Ok(work_block(agent))
    }
}

/// Format one agent's transcript block: name and model header, quoted prompt,
/// and a completion line naming the tools used.
pub fn work_block(agent: &AgentRecord) -> String {
    let completion = if agent.tools.is_empty() {
        "*Task completed without tools.*".to_string()
    } else {
        format!("*Task completed with tools: {}*", agent.tools.join(", "))
    };

    format!(
        "**{} ({}):**\n> {}\n\n{}",
        agent.name, agent.model, agent.prompt, completion
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_agent(tools: Vec<String>) -> AgentRecord {
        AgentRecord::new(
            "agent-1".to_string(),
            "Researcher".to_string(),
            "Find papers".to_string(),
            "gpt-4o".to_string(),
            tools,
        )
    }

    #[test]
    fn test_work_block_with_tools() {
        let agent = sample_agent(vec!["Поиск".to_string(), "Калькулятор".to_string()]);
        assert_eq!(
            work_block(&agent),
            "**Researcher (gpt-4o):**\n> Find papers\n\n*Task completed with tools: Поиск, Калькулятор*"
        );
    }

    #[test]
    fn test_work_block_without_tools() {
        let agent = sample_agent(Vec::new());
        assert_eq!(
            work_block(&agent),
            "**Researcher (gpt-4o):**\n> Find papers\n\n*Task completed without tools.*"
        );
    }

    #[tokio::test]
    async fn test_simulator_creation() {
        let simulator = DelaySimulator::new(Duration::from_millis(250));
        assert_eq!(simulator.delay().as_millis(), 250);
    }

    #[tokio::test]
    async fn test_simulate_returns_work_block() {
        let simulator = DelaySimulator::new(Duration::ZERO);
        let agent = sample_agent(Vec::new());

        let block = simulator.simulate(&agent).await.unwrap();
        assert_eq!(block, work_block(&agent));
    }

    #[tokio::test]
    async fn test_simulate_waits_for_configured_delay() {
        let simulator = DelaySimulator::new(Duration::from_millis(50));
        let agent = sample_agent(Vec::new());

        let started = tokio::time::Instant::now();
        simulator.simulate(&agent).await.unwrap();
        assert!(started.elapsed() >= Duration::from_millis(50));
    }
}
