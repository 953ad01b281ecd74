//! In-memory working set of agent records.

use super::record::AgentRecord;

/// The agent records loaded for one interactive session.
///
/// Insertion-ordered; lookups are linear first-match scans, which keeps
/// "the first record with this name" well-defined when names collide.
#[derive(Debug, Default)]
pub struct SessionRegistry {
    records: Vec<AgentRecord>,
}

impl SessionRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a registry from records loaded out of the repository.
    pub fn with_records(records: Vec<AgentRecord>) -> Self {
        Self { records }
    }

    /// Append a record to the working set.
    pub fn add(&mut self, record: AgentRecord) {
        self.records.push(record);
    }

    /// Remove and return the first record whose id matches.
    /// Returns `None` (not an error) when the id is absent.
    pub fn remove_by_id(&mut self, id: &str) -> Option<AgentRecord> {
        let index = self.records.iter().position(|record| record.id == id)?;
        Some(self.records.remove(index))
    }

    /// The first record whose id matches, if any.
    pub fn find_by_id(&self, id: &str) -> Option<&AgentRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    /// The first record whose name matches, if any.
    ///
    /// Names are not unique; when two records share one, the earliest-added
    /// record wins.
    pub fn find_by_name(&self, name: &str) -> Option<&AgentRecord> {
        self.records.iter().find(|record| record.name == name)
    }

    /// All records in insertion order.
    pub fn records(&self) -> &[AgentRecord] {
        &self.records
    }

    /// Number of records in the working set.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the working set is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, name: &str) -> AgentRecord {
        AgentRecord::new(
            id.to_string(),
            name.to_string(),
            "do the thing".to_string(),
            "gpt-4o".to_string(),
            Vec::new(),
        )
    }

    #[test]
    fn test_new_registry_is_empty() {
        let registry = SessionRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
    }

    #[test]
    fn test_with_records_seeds_in_order() {
        let registry =
            SessionRegistry::with_records(vec![record("1", "Alpha"), record("2", "Beta")]);
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.records()[0].name, "Alpha");
        assert_eq!(registry.records()[1].name, "Beta");
    }

    #[test]
    fn test_add_and_find_by_id() {
        let mut registry = SessionRegistry::new();
        registry.add(record("1", "Alpha"));

        assert!(registry.find_by_id("1").is_some());
        assert!(registry.find_by_id("999").is_none());
    }

    #[test]
    fn test_remove_by_id() {
        let mut registry = SessionRegistry::new();
        registry.add(record("1", "Alpha"));
        registry.add(record("2", "Beta"));

        let removed = registry.remove_by_id("1");
        assert_eq!(removed.unwrap().name, "Alpha");
        assert_eq!(registry.len(), 1);

        // Removing an absent id is a no-op.
        assert!(registry.remove_by_id("1").is_none());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_find_by_name_first_match_wins() {
        let mut registry = SessionRegistry::new();
        registry.add(record("1", "Twin"));
        registry.add(record("2", "Twin"));

        let found = registry.find_by_name("Twin").unwrap();
        assert_eq!(found.id, "1");
        assert!(registry.find_by_name("Ghost").is_none());
    }

    #[test]
    fn test_insertion_order_survives_removal() {
        let mut registry = SessionRegistry::new();
        registry.add(record("1", "Alpha"));
        registry.add(record("2", "Beta"));
        registry.add(record("3", "Gamma"));
        registry.remove_by_id("2");

        let names: Vec<&str> = registry
            .records()
            .iter()
            .map(|record| record.name.as_str())
            .collect();
        assert_eq!(names, vec!["Alpha", "Gamma"]);
    }
}
