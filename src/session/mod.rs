//! Session-scoped state: the agent working set, the simulation log, and the
//! context object every handler receives.

pub mod record;
pub mod registry;

pub use record::{AgentId, AgentRecord};
pub use registry::SessionRegistry;

use crate::config::CatalogConfig;
use crate::simulation::{SimulationLog, WorkSimulator};
use crate::store::AgentStore;
use tokio::sync::RwLock;

/// Mutable in-memory state of one interactive session.
#[derive(Debug, Default)]
pub struct SessionState {
    /// Working set of agent records, seeded from the store at startup.
    pub registry: SessionRegistry,
    /// Append-only team-simulation log.
    pub log: SimulationLog,
}

/// Everything a command handler needs, scoped to one session.
///
/// Passed to every handler as shared state; there are no process-wide
/// singletons. Mutating handlers take the write lock for their whole body, so
/// within one session commands run to completion before the next one starts.
pub struct SessionContext {
    state: RwLock<SessionState>,
    store: AgentStore,
    simulator: Box<dyn WorkSimulator>,
    catalog: CatalogConfig,
}

impl SessionContext {
    /// Assemble a session context from its parts.
    ///
    /// `registry` should come from [`AgentStore::load_all`] so the session
    /// starts in step with the store.
    pub fn new(
        registry: SessionRegistry,
        store: AgentStore,
        simulator: Box<dyn WorkSimulator>,
        catalog: CatalogConfig,
    ) -> Self {
        Self {
            state: RwLock::new(SessionState {
                registry,
                log: SimulationLog::new(),
            }),
            store,
            simulator,
            catalog,
        }
    }

    /// The lock over the session's mutable state.
    pub fn state(&self) -> &RwLock<SessionState> {
        &self.state
    }

    /// The durable agent store backing this session.
    pub fn store(&self) -> &AgentStore {
        &self.store
    }

    /// The work simulator used by team runs.
    pub fn simulator(&self) -> &dyn WorkSimulator {
        self.simulator.as_ref()
    }

    /// The model/tool choice lists served to the presentation layer.
    pub fn catalog(&self) -> &CatalogConfig {
        &self.catalog
    }
}
