//! The agent record entity.
//!
//! A fixed-shape record whose required fields are checked at construction
//! time, so anything in the registry or the store is already well-formed.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for an agent record.
pub type AgentId = String;

/// A named agent configuration: instruction prompt, model choice and tool
/// selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentRecord {
    /// Opaque unique identifier, generated at creation time. Immutable.
    pub id: AgentId,
    /// Display name. Never empty for a persisted record.
    pub name: String,
    /// Instruction prompt. Never empty for a persisted record; unbounded.
    pub prompt: String,
    /// Model identifier. Opaque to the core; the choice list is
    /// presentation-layer configuration.
    pub model: String,
    /// Selected tool identifiers. Order preserved, semantically a set.
    pub tools: Vec<String>,
}

impl AgentRecord {
    /// Rehydrate a record from already-persisted parts.
    pub fn new(
        id: AgentId,
        name: String,
        prompt: String,
        model: String,
        tools: Vec<String>,
    ) -> Self {
        Self {
            id,
            name,
            prompt,
            model,
            tools,
        }
    }

    /// Build a fresh record with a generated id, checking required fields.
    ///
    /// `name` and `prompt` must be non-empty; whitespace-only counts as empty.
    pub fn create(
        name: String,
        prompt: String,
        model: String,
        tools: Vec<String>,
    ) -> Result<Self, String> {
        let record = Self::new(Self::generate_id(), name, prompt, model, tools);
        record.validate()?;
        Ok(record)
    }

    /// Generate a new unique agent id.
    /// Uses UUID v4 for uniqueness.
    pub fn generate_id() -> AgentId {
        Uuid::new_v4().to_string()
    }

    /// Validate the record's required fields.
    /// Returns Ok(()) if valid, Err with message if invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Agent name cannot be empty".to_string());
        }
        if self.prompt.trim().is_empty() {
            return Err("Agent prompt cannot be empty".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> AgentRecord {
        AgentRecord::new(
            "agent-1".to_string(),
            "Researcher".to_string(),
            "Find papers".to_string(),
            "gpt-4o".to_string(),
            vec!["Поиск".to_string()],
        )
    }

    #[test]
    fn test_generate_id_is_unique() {
        let id1 = AgentRecord::generate_id();
        let id2 = AgentRecord::generate_id();
        assert_ne!(id1, id2);
        assert!(!id1.is_empty());
    }

    #[test]
    fn test_create_assigns_fresh_id_and_keeps_fields() {
        let record = AgentRecord::create(
            "Researcher".to_string(),
            "Find papers".to_string(),
            "gpt-4o".to_string(),
            vec!["Поиск".to_string()],
        )
        .unwrap();

        assert!(!record.id.is_empty());
        assert_eq!(record.name, "Researcher");
        assert_eq!(record.prompt, "Find papers");
        assert_eq!(record.model, "gpt-4o");
        assert_eq!(record.tools, vec!["Поиск".to_string()]);
    }

    #[test]
    fn test_create_rejects_empty_required_fields() {
        assert!(AgentRecord::create(
            "".to_string(),
            "Find papers".to_string(),
            "gpt-4o".to_string(),
            vec![],
        )
        .is_err());

        assert!(AgentRecord::create(
            "Researcher".to_string(),
            "".to_string(),
            "gpt-4o".to_string(),
            vec![],
        )
        .is_err());

        // Whitespace-only counts as empty.
        assert!(AgentRecord::create(
            "   ".to_string(),
            "Find papers".to_string(),
            "gpt-4o".to_string(),
            vec![],
        )
        .is_err());
    }

    #[test]
    fn test_validate() {
        let mut record = sample();
        assert!(record.validate().is_ok());

        record.name = "".to_string();
        assert!(record.validate().is_err());

        record.name = "Researcher".to_string();
        record.prompt = "  ".to_string();
        assert!(record.validate().is_err());
    }

    #[test]
    fn test_record_serialization_round_trip() {
        let record = sample();
        let json = serde_json::to_string(&record).unwrap();
        let deserialized: AgentRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, deserialized);
    }
}
