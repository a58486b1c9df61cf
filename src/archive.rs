/*
archive.rs

Copyright 2025 Hervé Quatremain

This file is part of Quizboard.

Quizboard is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Quizboard is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Quizboard. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Load the archive of historical questions.
//!
//! The archive is a JSON array of records as they were aired.
//! Entries are loosely typed: any field can be missing or `null`.
//! They are kept as [`RawRecord`] objects and validated into [`QuestionRecord`] objects by the
//! [`crate::generator::category_index`] module.
//!
//! The [`ArchiveCache`] object loads the archive file once and shares it for the lifetime of
//! the process.

use log::{debug, info};
use std::error::Error;
use std::fmt;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use serde::{Deserialize, Serialize};

/// Archive round label for the first round.
pub const ROUND_A_LABEL: &str = "Jeopardy!";

/// Archive round label for the second round.
pub const ROUND_B_LABEL: &str = "Double Jeopardy!";

/// Archive round labels for the final question contain this marker.
pub const FINAL_MARKER: &str = "Final";

/// Game round.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Round {
    /// First round of the board.
    #[serde(rename = "jeopardy")]
    RoundA,

    /// Second round of the board, with higher values.
    #[serde(rename = "double-jeopardy")]
    RoundB,

    /// Single question played after the two rounds.
    #[serde(rename = "final-jeopardy")]
    Final,
}

impl Round {
    /// Classify an archive round label.
    ///
    /// Return None for labels that belong to none of the board rounds (tiebreakers for example).
    pub fn from_label(label: &str) -> Option<Round> {
        if label.contains(FINAL_MARKER) {
            Some(Round::Final)
        } else if label == ROUND_A_LABEL {
            Some(Round::RoundA)
        } else if label == ROUND_B_LABEL {
            Some(Round::RoundB)
        } else {
            None
        }
    }
}

impl fmt::Display for Round {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Round::RoundA => write!(f, "jeopardy"),
            Round::RoundB => write!(f, "double-jeopardy"),
            Round::Final => write!(f, "final-jeopardy"),
        }
    }
}

/// Archive entry as stored in the JSON file.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct RawRecord {
    pub category: Option<String>,
    pub round: Option<String>,
    pub value: Option<String>,
    pub question: Option<String>,
    pub answer: Option<String>,

    /// Optional reference to an image that illustrates the question.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub air_date: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_number: Option<String>,
}

impl RawRecord {
    /// Create a [`RawRecord`] object with all the required fields set.
    pub fn new(category: &str, round: &str, value: &str, question: &str, answer: &str) -> Self {
        Self {
            category: Some(category.to_string()),
            round: Some(round.to_string()),
            value: Some(value.to_string()),
            question: Some(question.to_string()),
            answer: Some(answer.to_string()),
            image: None,
            air_date: None,
            show_number: None,
        }
    }

    /// Whether the record belongs to the final round.
    pub fn is_final(&self) -> bool {
        self.round
            .as_deref()
            .is_some_and(|r| r.contains(FINAL_MARKER))
    }
}

/// Return the field value, or None if the field is missing or empty.
pub(crate) fn populated(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

/// Validated question.
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionRecord {
    pub category: String,
    pub round: Round,

    /// Value as written in the archive, such as `$1,000`.
    pub value: String,
    pub question: String,
    pub answer: String,
    pub image: Option<String>,
}

impl QuestionRecord {
    /// Build a [`QuestionRecord`] object from an archive entry.
    ///
    /// Return None if one of the required fields is missing or empty, or if the round label is
    /// unknown.
    pub fn from_raw(raw: &RawRecord) -> Option<Self> {
        let round: Round = Round::from_label(populated(&raw.round)?)?;
        Some(Self {
            category: populated(&raw.category)?.to_string(),
            round,
            value: populated(&raw.value)?.to_string(),
            question: populated(&raw.question)?.to_string(),
            answer: populated(&raw.answer)?.to_string(),
            image: populated(&raw.image).map(str::to_string),
        })
    }

    /// Return the numeric value of the question.
    pub fn numeric_value(&self) -> u32 {
        parse_value(&self.value)
    }
}

/// Extract the numeric value from a string such as `$1,000`.
///
/// Unparsable values are returned as 0.
pub fn parse_value(value: &str) -> u32 {
    let digits: String = value
        .trim()
        .trim_start_matches('$')
        .chars()
        .filter(|c| *c != ',')
        .collect();
    digits.parse().unwrap_or(0)
}

/// Type of errors.
#[derive(Debug)]
pub enum ArchiveError {
    /// The archive file cannot be read.
    Io { path: PathBuf, source: io::Error },

    /// The archive file is not a JSON array of records.
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl fmt::Display for ArchiveError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ArchiveError::Io { path, source } => {
                write!(f, "cannot read archive {}: {source}", path.display())
            }
            ArchiveError::Parse { path, source } => {
                write!(f, "malformed archive {}: {source}", path.display())
            }
        }
    }
}

impl Error for ArchiveError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ArchiveError::Io { source, .. } => Some(source),
            ArchiveError::Parse { source, .. } => Some(source),
        }
    }
}

/// In-memory archive.
#[derive(Debug, Clone, Default)]
pub struct Archive {
    records: Vec<RawRecord>,
}

impl Archive {
    /// Create an [`Archive`] object from a list of records.
    pub fn from_records(records: Vec<RawRecord>) -> Self {
        Self { records }
    }

    /// Read the archive from a JSON reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, serde_json::Error> {
        let records: Vec<RawRecord> = serde_json::from_reader(reader)?;
        Ok(Self { records })
    }

    /// Load the archive from the provided file.
    pub fn load(path: &Path) -> Result<Self, ArchiveError> {
        debug!("Loading archive from {path:?}");
        let file: File = File::open(path).map_err(|source| ArchiveError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let archive: Archive =
            Self::from_reader(BufReader::new(file)).map_err(|source| ArchiveError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        info!("Loaded {} questions from {path:?}", archive.len());
        Ok(archive)
    }

    /// Return the archive entries.
    pub fn records(&self) -> &[RawRecord] {
        &self.records
    }

    /// Number of entries in the archive.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Load the archive on first use and share it afterward.
///
/// The first caller loads the file while holding the lock, so concurrent first callers wait
/// for that single load instead of reading the file again.
/// A failed load leaves the cache empty and the error is returned to the caller.
#[derive(Debug)]
pub struct ArchiveCache {
    /// Path to the archive file.
    path: PathBuf,

    archive: Mutex<Option<Arc<Archive>>>,
}

impl ArchiveCache {
    /// Create an [`ArchiveCache`] object for the given file. The file is not read yet.
    pub fn new(path: PathBuf) -> Self {
        debug!("Archive file: {path:?}");
        Self {
            path,
            archive: Mutex::new(None),
        }
    }

    /// Create an [`ArchiveCache`] object that already holds the provided archive.
    pub fn with_archive(archive: Archive) -> Self {
        Self {
            path: PathBuf::new(),
            archive: Mutex::new(Some(Arc::new(archive))),
        }
    }

    /// Whether the archive has been loaded.
    pub fn is_loaded(&self) -> bool {
        self.archive
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// Return the archive, loading it if this is the first call.
    pub fn get(&self) -> Result<Arc<Archive>, ArchiveError> {
        let mut cached = self.archive.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(archive) = cached.as_ref() {
            return Ok(Arc::clone(archive));
        }
        let archive: Arc<Archive> = Arc::new(Archive::load(&self.path)?);
        *cached = Some(Arc::clone(&archive));
        Ok(archive)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::thread;

    #[test]
    fn parse_value_strips_currency_and_separators() {
        assert_eq!(parse_value("$200"), 200);
        assert_eq!(parse_value("1,000"), 1000);
        assert_eq!(parse_value("$2,000"), 2000);
        assert_eq!(parse_value(" $400 "), 400);
        assert_eq!(parse_value("bogus"), 0);
        assert_eq!(parse_value(""), 0);
    }

    #[test]
    fn round_labels() {
        assert_eq!(Round::from_label("Jeopardy!"), Some(Round::RoundA));
        assert_eq!(Round::from_label("Double Jeopardy!"), Some(Round::RoundB));
        assert_eq!(Round::from_label("Final Jeopardy!"), Some(Round::Final));
        assert_eq!(Round::from_label("Tiebreaker"), None);
    }

    #[test]
    fn question_record_requires_all_fields() {
        let raw = RawRecord::new("POETS", "Jeopardy!", "$200", "He wrote Howl", "Ginsberg");
        let record = QuestionRecord::from_raw(&raw).expect("complete record");
        assert_eq!(record.round, Round::RoundA);
        assert_eq!(record.numeric_value(), 200);

        let mut missing_answer = raw.clone();
        missing_answer.answer = None;
        assert!(QuestionRecord::from_raw(&missing_answer).is_none());

        let mut empty_value = raw.clone();
        empty_value.value = Some(String::new());
        assert!(QuestionRecord::from_raw(&empty_value).is_none());
    }

    #[test]
    fn archive_accepts_null_and_missing_fields() {
        let json = r#"[
            {"category": "POETS", "round": "Jeopardy!", "value": "$200",
             "question": "He wrote Howl", "answer": "Ginsberg", "show_number": "4680"},
            {"category": "WAR", "round": "Final Jeopardy!", "value": null,
             "question": "D-Day leader", "answer": "Eisenhower"},
            {"question": "orphan"}
        ]"#;
        let archive = Archive::from_reader(json.as_bytes()).expect("valid archive");
        assert_eq!(archive.len(), 3);
        assert!(archive.records()[1].is_final());
        assert_eq!(archive.records()[0].show_number.as_deref(), Some("4680"));
        assert_eq!(archive.records()[1].show_number, None);
        assert_eq!(archive.records()[2].category, None);
    }

    #[test]
    fn missing_archive_is_an_io_error() {
        let cache = ArchiveCache::new(PathBuf::from("/nonexistent/archive.json"));
        match cache.get() {
            Err(ArchiveError::Io { .. }) => (),
            other => panic!("unexpected result: {other:?}"),
        }
        assert!(!cache.is_loaded());
    }

    #[test]
    fn malformed_archive_is_a_parse_error() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, "{{\"not\": \"an array\"}}").expect("write");
        let cache = ArchiveCache::new(file.path().to_path_buf());
        assert!(matches!(cache.get(), Err(ArchiveError::Parse { .. })));
    }

    #[test]
    fn cache_loads_once_for_concurrent_callers() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(
            file,
            r#"[{{"category": "C", "round": "Jeopardy!", "value": "$200",
                  "question": "Q", "answer": "A"}}]"#
        )
        .expect("write");
        let cache = Arc::new(ArchiveCache::new(file.path().to_path_buf()));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let cache = Arc::clone(&cache);
                thread::spawn(move || cache.get().expect("archive"))
            })
            .collect();
        let archives: Vec<Arc<Archive>> = handles
            .into_iter()
            .map(|h| h.join().expect("thread"))
            .collect();

        for archive in &archives {
            assert!(Arc::ptr_eq(archive, &archives[0]));
        }
        assert_eq!(archives[0].len(), 1);
    }
}
