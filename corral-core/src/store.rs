//! In-memory record store
//!
//! The client-side mirror of the registry list. The store is a plain
//! value owned by the view layer; every mutation is synchronous and is
//! only applied after the server has confirmed the corresponding
//! request.

use crate::record::Record;

/// The in-memory list of records backing the table view
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordStore {
    records: Vec<Record>,
}

/// The fixed list the store starts from before the first fetch
pub fn seed_records() -> Vec<Record> {
    vec![
        Record {
            id: "1".to_string(),
            name: "John Doe".to_string(),
            age: 25,
            colour: "Blue".to_string(),
        },
        Record {
            id: "2".to_string(),
            name: "Jane Smith".to_string(),
            age: 30,
            colour: "Red".to_string(),
        },
        Record {
            id: "3".to_string(),
            name: "Bob Johnson".to_string(),
            age: 35,
            colour: "Green".to_string(),
        },
    ]
}

impl RecordStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the seed list
    ///
    /// The seed is placeholder content for the moment between startup
    /// and the first successful list fetch, which replaces it wholesale.
    pub fn seeded() -> Self {
        Self {
            records: seed_records(),
        }
    }

    /// Replace the entire contents, used by the initial list fetch
    pub fn replace_all(&mut self, records: Vec<Record>) {
        self.records = records;
    }

    /// Append a server-confirmed record
    pub fn add(&mut self, record: Record) {
        self.records.push(record);
    }

    /// Replace the record whose id matches; no-op if absent
    pub fn edit(&mut self, id: &str, record: Record) {
        if let Some(existing) = self.records.iter_mut().find(|r| r.id == id) {
            *existing = record;
        }
    }

    /// Remove the record whose id matches
    ///
    /// Returns true if a record was removed, false if no id matched.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.records.len();
        self.records.retain(|r| r.id != id);
        self.records.len() != before
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn get(&self, id: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
