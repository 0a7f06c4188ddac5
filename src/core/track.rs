//! Track record types
//!
//! A track record is one row of the form: a stable id plus the title and the
//! four metadata fields collected for each track.

use std::fmt;

/// Unique identifier for a track record
///
/// Assigned once at creation and never reused, even after the record is
/// deleted. Used only for lookup and deletion.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TrackId(String);

impl TrackId {
    /// Create a fresh unique id
    pub fn new() -> Self {
        TrackId(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for TrackId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TrackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The writable fields of a track record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackField {
    Title,
    Bpm,
    Key,
    Meter,
    Instrumentation,
}

impl TrackField {
    /// The four fields that must be filled in before the form can be submitted
    pub const REQUIRED: [TrackField; 4] = [
        TrackField::Bpm,
        TrackField::Key,
        TrackField::Meter,
        TrackField::Instrumentation,
    ];

    /// Short display name, used in the per-row "Missing: ..." warning
    pub fn label(&self) -> &'static str {
        match self {
            TrackField::Title => "Title",
            TrackField::Bpm => "BPM",
            TrackField::Key => "Key",
            TrackField::Meter => "Meter",
            TrackField::Instrumentation => "Instrumentation",
        }
    }

    /// Placeholder text shown in an empty input
    pub fn placeholder(&self) -> &'static str {
        match self {
            TrackField::Title => "Track title",
            TrackField::Bpm => "BPM",
            TrackField::Key => "Key(s)",
            TrackField::Meter => "Meter(s)",
            TrackField::Instrumentation => "Instrumentation",
        }
    }
}

/// One row of music metadata in the form
#[derive(Debug, Clone)]
pub struct TrackRecord {
    /// Stable identity, never renumbered
    pub id: TrackId,
    /// Free text, pre-filled from the record's position at creation time
    pub title: String,
    pub bpm: String,
    pub key: String,
    pub meter: String,
    pub instrumentation: String,
}

impl TrackRecord {
    /// Create a record with the default title for the given 1-based position
    ///
    /// The position is baked into the title at creation time only; deleting
    /// earlier records does not renumber it.
    pub fn with_position(position: usize) -> Self {
        Self {
            id: TrackId::new(),
            title: format!("TRACK TITLE {}", position),
            bpm: String::new(),
            key: String::new(),
            meter: String::new(),
            instrumentation: String::new(),
        }
    }

    /// Get the current value of a field
    pub fn field(&self, field: TrackField) -> &str {
        match field {
            TrackField::Title => &self.title,
            TrackField::Bpm => &self.bpm,
            TrackField::Key => &self.key,
            TrackField::Meter => &self.meter,
            TrackField::Instrumentation => &self.instrumentation,
        }
    }

    /// Overwrite a field in full (no merging, no content validation)
    pub fn set_field(&mut self, field: TrackField, value: String) {
        match field {
            TrackField::Title => self.title = value,
            TrackField::Bpm => self.bpm = value,
            TrackField::Key => self.key = value,
            TrackField::Meter => self.meter = value,
            TrackField::Instrumentation => self.instrumentation = value,
        }
    }

    /// True when all four metadata fields are non-empty
    pub fn is_complete(&self) -> bool {
        TrackField::REQUIRED.iter().all(|f| !self.field(*f).is_empty())
    }

    /// Labels of the required fields that are still empty
    pub fn missing_fields(&self) -> Vec<&'static str> {
        TrackField::REQUIRED
            .iter()
            .filter(|f| self.field(**f).is_empty())
            .map(|f| f.label())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_track_id_unique() {
        let id1 = TrackId::new();
        let id2 = TrackId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_track_id_display() {
        let id = TrackId::new();
        assert_eq!(format!("{}", id), id.as_str());
    }

    #[test]
    fn test_with_position_defaults() {
        let record = TrackRecord::with_position(3);
        assert_eq!(record.title, "TRACK TITLE 3");
        assert!(record.bpm.is_empty());
        assert!(record.key.is_empty());
        assert!(record.meter.is_empty());
        assert!(record.instrumentation.is_empty());
    }

    #[test]
    fn test_default_record_incomplete() {
        let record = TrackRecord::with_position(1);
        assert!(!record.is_complete());
        assert_eq!(
            record.missing_fields(),
            vec!["BPM", "Key", "Meter", "Instrumentation"]
        );
    }

    #[test]
    fn test_set_field_overwrites() {
        let mut record = TrackRecord::with_position(1);
        record.set_field(TrackField::Bpm, "120".to_string());
        assert_eq!(record.bpm, "120");
        record.set_field(TrackField::Bpm, "90".to_string());
        assert_eq!(record.bpm, "90");
        record.set_field(TrackField::Title, "My Track".to_string());
        assert_eq!(record.title, "My Track");
    }

    #[test]
    fn test_is_complete_requires_all_four() {
        let mut record = TrackRecord::with_position(1);
        record.set_field(TrackField::Bpm, "120".to_string());
        record.set_field(TrackField::Key, "C".to_string());
        record.set_field(TrackField::Meter, "4/4".to_string());
        assert!(!record.is_complete());
        assert_eq!(record.missing_fields(), vec!["Instrumentation"]);

        record.set_field(TrackField::Instrumentation, "piano".to_string());
        assert!(record.is_complete());
        assert!(record.missing_fields().is_empty());
    }

    #[test]
    fn test_title_not_required() {
        let mut record = TrackRecord::with_position(1);
        record.set_field(TrackField::Title, String::new());
        record.set_field(TrackField::Bpm, "120".to_string());
        record.set_field(TrackField::Key, "C".to_string());
        record.set_field(TrackField::Meter, "4/4".to_string());
        record.set_field(TrackField::Instrumentation, "piano".to_string());
        assert!(record.is_complete());
    }

    #[test]
    fn test_field_roundtrip() {
        let mut record = TrackRecord::with_position(1);
        for field in [
            TrackField::Title,
            TrackField::Bpm,
            TrackField::Key,
            TrackField::Meter,
            TrackField::Instrumentation,
        ] {
            record.set_field(field, format!("value for {}", field.label()));
            assert_eq!(record.field(field), format!("value for {}", field.label()));
        }
    }
}
