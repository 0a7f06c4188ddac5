//! Track list store
//!
//! In-memory holder of the ordered track-record collection backing the form.
//! The store always contains at least one record: it is seeded with a default
//! record on creation, and deleting the last remaining record immediately
//! re-seeds one.

use super::track::{TrackField, TrackId, TrackRecord};

/// Ordered collection of track records
#[derive(Debug)]
pub struct TrackStore {
    records: Vec<TrackRecord>,
}

impl TrackStore {
    /// Create a store seeded with a single default record
    pub fn new() -> Self {
        Self {
            records: vec![TrackRecord::with_position(1)],
        }
    }

    /// The records, in form order
    pub fn records(&self) -> &[TrackRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always false: the store re-seeds a default record rather than go empty
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Look up a record by id
    pub fn get(&self, id: &TrackId) -> Option<&TrackRecord> {
        self.records.iter().find(|r| &r.id == id)
    }

    /// Append a new record titled after the current count + 1
    ///
    /// Returns the id of the new record.
    pub fn add_track(&mut self) -> TrackId {
        let record = TrackRecord::with_position(self.records.len() + 1);
        let id = record.id.clone();
        self.records.push(record);
        id
    }

    /// Overwrite one field on the record with the given id
    ///
    /// Unknown ids are ignored; a delete can leave stale ids behind in the
    /// view layer and those edits must not land anywhere.
    pub fn update_field(&mut self, id: &TrackId, field: TrackField, value: String) {
        match self.records.iter_mut().find(|r| &r.id == id) {
            Some(record) => record.set_field(field, value),
            None => log::debug!("update_field ignored for unknown track id {}", id),
        }
    }

    /// Remove the record with the given id
    ///
    /// Unknown ids are a no-op. If the removal empties the collection, a
    /// single default record is re-seeded so the form never renders empty.
    pub fn delete_track(&mut self, id: &TrackId) {
        self.records.retain(|r| &r.id != id);
        if self.records.is_empty() {
            self.records.push(TrackRecord::with_position(1));
        }
    }

    /// True iff every record has all four metadata fields filled in
    pub fn is_complete(&self) -> bool {
        self.records.iter().all(|r| r.is_complete())
    }

    /// Discard all records and re-seed a single default one (File > New Form)
    pub fn reset(&mut self) {
        self.records = vec![TrackRecord::with_position(1)];
    }
}

impl Default for TrackStore {
    fn default() -> Self {
        Self::new()
    }
}
