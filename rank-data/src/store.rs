use std::{collections::HashMap, path::Path};

use app_core::string_error::ErrorStringExt;

use crate::record::{RankRecord, RecordError};

/// Outcome of loading a dataset.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LoadReport {
    pub loaded: usize,
    pub skipped: usize,
}

/// Case-insensitive lookup of `RankRecord`s by name.
///
/// Records are immutable, so the store keeps parsed records and hands out
/// clones; two callers never share an instance.
#[derive(Debug, Default, Clone)]
pub struct RankStore {
    records: HashMap<String, RankRecord>,
}

impl RankStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a dataset from `path`.
    ///
    /// Only failing to read the file is an error. Malformed lines are skipped,
    /// see `load`.
    pub fn from_path(path: &Path) -> Result<Self, String> {
        let raw = std::fs::read_to_string(path).err_to_string("could not read dataset")?;
        let mut store = Self::new();
        let report = store.load(raw.lines());
        log::info!(
            "loaded {} records from {:?} ({} lines skipped)",
            report.loaded,
            path,
            report.skipped
        );
        Ok(store)
    }

    /// Parse and index every line. Lines that do not form a valid record are
    /// logged and skipped; a later record with the same name replaces an
    /// earlier one.
    pub fn load<I, S>(&mut self, lines: I) -> LoadReport
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut report = LoadReport::default();
        for (line_no, line) in lines.into_iter().enumerate() {
            match RankRecord::from_line(line.as_ref()) {
                Ok(record) => {
                    let key = record.name().to_uppercase();
                    if self.records.insert(key, record).is_some() {
                        log::debug!("line {}: replacing earlier record", line_no + 1);
                    }
                    report.loaded += 1;
                }
                Err(RecordError::Empty) => {
                    log::debug!("line {}: skipping blank line", line_no + 1);
                }
                Err(err) => {
                    log::warn!("line {}: skipping malformed record: {}", line_no + 1, err);
                    report.skipped += 1;
                }
            }
        }
        report
    }

    /// Look up `name` regardless of case. The returned record keeps the
    /// casing of the dataset.
    pub fn find(&self, name: &str) -> Option<RankRecord> {
        self.records.get(&name.trim().to_uppercase()).cloned()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All display names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.records.values().map(RankRecord::name).collect();
        names.sort_unstable();
        names
    }
}
