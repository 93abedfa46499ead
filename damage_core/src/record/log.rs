//! ResultLog - caller-owned, ordered list of saved results

use super::csv::write_csv;
use super::SavedResultRecord;
use crate::calculator::DamageReport;
use crate::error::DamageError;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Append-only (plus explicit removal) list of saved calculations
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResultLog {
    records: Vec<SavedResultRecord>,
}

impl ResultLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot a report under the given name and append it
    pub fn save(&mut self, name: impl Into<String>, report: &DamageReport) -> &SavedResultRecord {
        let record = SavedResultRecord::from_report(name, report);
        tracing::debug!(name = %record.name, category = %record.weapon_type, "saved result");
        self.records.push(record);
        &self.records[self.records.len() - 1]
    }

    pub fn remove(&mut self, index: usize) -> Option<SavedResultRecord> {
        (index < self.records.len()).then(|| self.records.remove(index))
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&SavedResultRecord> {
        self.records.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SavedResultRecord> {
        self.records.iter()
    }

    pub fn to_csv(&self) -> Result<String, DamageError> {
        let mut out = Vec::new();
        write_csv(&mut out, &self.records)?;
        Ok(String::from_utf8_lossy(&out).into_owned())
    }

    pub fn to_json(&self) -> Result<String, DamageError> {
        Ok(serde_json::to_string_pretty(&self.records)?)
    }

    pub fn from_json(content: &str) -> Result<Self, DamageError> {
        Ok(ResultLog {
            records: serde_json::from_str(content)?,
        })
    }

    pub fn write_csv(&self, path: &Path) -> Result<(), DamageError> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        write_csv(&mut writer, &self.records)?;
        writer.flush()?;
        tracing::info!(path = %path.display(), rows = self.records.len(), "exported CSV");
        Ok(())
    }

    pub fn write_json(&self, path: &Path) -> Result<(), DamageError> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, &self.records)?;
        writer.flush()?;
        tracing::info!(path = %path.display(), rows = self.records.len(), "exported JSON");
        Ok(())
    }
}

impl<'a> IntoIterator for &'a ResultLog {
    type Item = &'a SavedResultRecord;
    type IntoIter = std::slice::Iter<'a, SavedResultRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
