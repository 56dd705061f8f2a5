//! Fetch types: page envelope, result set, and the pagination cursor

use crate::error::{Error, Result};
use serde::Deserialize;
use serde_json::Value;

/// One character record, passed through as opaque structured JSON
///
/// The fetcher does not interpret individual fields; that is the table
/// layer's job.
pub type CharacterRecord = Value;

/// Parsed `data` object of one page response
#[derive(Debug, Clone)]
pub struct PageData {
    /// Offset the server echoed back
    pub offset: u64,
    /// Limit the server echoed back
    pub limit: u64,
    /// Total matching records server-side; authoritative on the first page
    /// but allowed to be absent on later pages
    pub total: Option<u64>,
    /// Number of records actually returned in this page
    pub count: u64,
    /// Records in server order
    pub results: Vec<CharacterRecord>,
}

impl PageData {
    /// Parse a page out of a response body
    ///
    /// `data.count` and `data.results` are required; everything else is
    /// tolerated as missing so a flaky later page cannot break an otherwise
    /// terminable run.
    pub fn from_body(body: &Value) -> Result<Self> {
        let envelope: RawEnvelope = serde_json::from_value(body.clone())
            .map_err(|e| Error::response_format(format!("unexpected envelope shape: {e}")))?;

        let data = envelope
            .data
            .ok_or_else(|| Error::response_format("missing field `data`"))?;

        let count = data
            .count
            .ok_or_else(|| Error::response_format("missing field `data.count`"))?;

        let results = data
            .results
            .ok_or_else(|| Error::response_format("missing field `data.results`"))?;

        Ok(Self {
            offset: data.offset.unwrap_or(0),
            limit: data.limit.unwrap_or(0),
            total: data.total,
            count,
            results,
        })
    }
}

/// Raw envelope with every field optional, so field absence can be
/// reported by name instead of as a generic deserialize failure
#[derive(Debug, Deserialize)]
struct RawEnvelope {
    data: Option<RawData>,
}

#[derive(Debug, Deserialize)]
struct RawData {
    offset: Option<u64>,
    limit: Option<u64>,
    total: Option<u64>,
    count: Option<u64>,
    results: Option<Vec<CharacterRecord>>,
}

/// Ordered accumulation of records across all pages for one run
///
/// Append-only while the fetcher owns it; handed off whole on completion.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultSet {
    records: Vec<CharacterRecord>,
}

impl ResultSet {
    /// Create an empty result set
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records accumulated
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if no records were accumulated
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Append one page of records, preserving server order
    pub fn append(&mut self, records: Vec<CharacterRecord>) {
        self.records.extend(records);
    }

    /// Drop records beyond a configured cap
    pub fn truncate(&mut self, max: usize) {
        self.records.truncate(max);
    }

    /// View the accumulated records
    pub fn records(&self) -> &[CharacterRecord] {
        &self.records
    }

    /// Consume into the accumulated records
    pub fn into_records(self) -> Vec<CharacterRecord> {
        self.records
    }

    /// Iterate over the accumulated records
    pub fn iter(&self) -> std::slice::Iter<'_, CharacterRecord> {
        self.records.iter()
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a CharacterRecord;
    type IntoIter = std::slice::Iter<'a, CharacterRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Pagination state machine for one run
///
/// Two facts drive termination, checked after every page:
/// - a short page (`count < page_size`) always terminates and takes
///   precedence, so an unreliable or absent `total` cannot cause an
///   endless loop;
/// - `offset >= total` is a fast path once the first page has reported a
///   total, saving one trailing empty-page request.
#[derive(Debug, Clone, Default)]
pub struct OffsetCursor {
    offset: u64,
    total: Option<u64>,
    fetched: u64,
    done: bool,
}

impl OffsetCursor {
    /// Create a cursor at offset zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Offset of the next page to request
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Total reported by the first page, if any
    pub fn total(&self) -> Option<u64> {
        self.total
    }

    /// Records fetched so far
    pub fn fetched(&self) -> u64 {
        self.fetched
    }

    /// Check whether pagination has terminated
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Record the authoritative total from the first page
    ///
    /// The dataset is not expected to mutate mid-fetch, so only the first
    /// reported total is kept.
    pub fn record_total(&mut self, total: u64) {
        if self.total.is_none() {
            self.total = Some(total);
        }
    }

    /// Advance past one successful page
    pub fn advance(&mut self, count: u64, page_size: u64) {
        self.fetched += count;
        self.offset += page_size;

        if count < page_size {
            self.done = true;
        } else if let Some(total) = self.total {
            if self.offset >= total {
                self.done = true;
            }
        }
    }
}
