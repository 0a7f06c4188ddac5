//! XLSX generation for the submission attachment
//!
//! One workbook per submission, written to the system temp directory under a
//! unique name so repeated submissions never collide. The file is one-shot:
//! the submission workflow deletes it after the send attempt.

use std::path::{Path, PathBuf};

use rust_xlsxwriter::Workbook;

use crate::core::TrackRecord;

/// Column headers, in export order
pub const COLUMNS: [&str; 6] = ["id", "title", "bpm", "key", "meter", "instrumentation"];

/// Flatten a record into cells matching [`COLUMNS`]
fn record_cells(record: &TrackRecord) -> [String; 6] {
    [
        record.id.to_string(),
        record.title.clone(),
        record.bpm.clone(),
        record.key.clone(),
        record.meter.clone(),
        record.instrumentation.clone(),
    ]
}

/// Write the records to an XLSX workbook at `path`
///
/// Header row first, then one row per record in store order.
pub fn write_workbook(records: &[TrackRecord], path: &Path) -> Result<(), String> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name("Tracks")
        .map_err(|e| format!("Failed to name worksheet: {}", e))?;

    for (col, header) in COLUMNS.iter().enumerate() {
        worksheet
            .write_string(0, col as u16, *header)
            .map_err(|e| format!("Failed to write header row: {}", e))?;
    }

    for (row, record) in records.iter().enumerate() {
        let cells = record_cells(record);
        for (col, value) in cells.iter().enumerate() {
            worksheet
                .write_string(row as u32 + 1, col as u16, value.as_str())
                .map_err(|e| format!("Failed to write row {}: {}", row + 1, e))?;
        }
    }

    workbook
        .save(path)
        .map_err(|e| format!("Failed to save spreadsheet: {}", e))?;

    Ok(())
}

/// Export the records to a fresh file in the system temp directory
///
/// Returns the path to the new spreadsheet.
pub fn export_tracks(records: &[TrackRecord]) -> Result<PathBuf, String> {
    let path = std::env::temp_dir().join(format!("tracks_{}.xlsx", uuid::Uuid::new_v4()));
    write_workbook(records, &path)?;
    log::info!(
        "Spreadsheet with {} track(s) written to {}",
        records.len(),
        path.display()
    );
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{TrackField, TrackStore};
    use tempfile::TempDir;

    fn sample_store() -> TrackStore {
        let mut store = TrackStore::new();
        let id = store.records()[0].id.clone();
        store.update_field(&id, TrackField::Bpm, "120".to_string());
        store.update_field(&id, TrackField::Key, "C".to_string());
        store.update_field(&id, TrackField::Meter, "4/4".to_string());
        store.update_field(&id, TrackField::Instrumentation, "piano".to_string());
        store
    }

    #[test]
    fn test_record_cells_order_matches_columns() {
        let store = sample_store();
        let record = &store.records()[0];

        let cells = record_cells(record);

        assert_eq!(cells[0], record.id.to_string());
        assert_eq!(cells[1], "TRACK TITLE 1");
        assert_eq!(cells[2], "120");
        assert_eq!(cells[3], "C");
        assert_eq!(cells[4], "4/4");
        assert_eq!(cells[5], "piano");
        assert_eq!(cells.len(), COLUMNS.len());
    }

    #[test]
    fn test_write_workbook_creates_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("tracks.xlsx");
        let store = sample_store();

        write_workbook(store.records(), &path).unwrap();

        assert!(path.exists());
        let bytes = std::fs::read(&path).unwrap();
        assert!(!bytes.is_empty());
        // XLSX files are ZIP archives
        assert_eq!(&bytes[..2], b"PK");
    }

    #[test]
    fn test_write_workbook_empty_fields_ok() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("tracks.xlsx");
        let store = TrackStore::new();

        // Presence-checking is the submit button's job, not the exporter's
        write_workbook(store.records(), &path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_export_tracks_unique_paths() {
        let store = sample_store();

        let path1 = export_tracks(store.records()).unwrap();
        let path2 = export_tracks(store.records()).unwrap();

        assert_ne!(path1, path2);
        assert!(path1.file_name().unwrap().to_string_lossy().starts_with("tracks_"));
        assert!(path1.extension().unwrap() == "xlsx");

        let _ = std::fs::remove_file(path1);
        let _ = std::fs::remove_file(path2);
    }
}
