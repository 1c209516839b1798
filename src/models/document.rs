//! The ledger document and its merge policy
//!
//! The document is the decrypted, authoritative representation of the
//! ledger: year key to month key to the six amount fields. BTreeMaps keep
//! the JSON serialization deterministic, so identical documents always
//! produce identical plaintext bytes.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::period::PeriodKey;

/// The six on-disk amount fields of one period record
pub type PeriodFields = BTreeMap<String, f64>;

/// The full ledger, keyed by year and month
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LedgerDocument {
    years: BTreeMap<String, BTreeMap<String, PeriodFields>>,
}

/// What a merge did with the incoming record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeOutcome {
    /// The record landed in a previously empty (year, month) slot
    Inserted,
    /// An existing record for the same (year, month) was replaced
    Replaced,
    /// A record already existed and overwrite was disabled; nothing changed
    KeptExisting,
}

impl MergeOutcome {
    /// True when the merge left the document unchanged
    pub fn is_noop(&self) -> bool {
        matches!(self, MergeOutcome::KeptExisting)
    }
}

impl LedgerDocument {
    /// Create an empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether the document holds no periods at all
    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }

    /// Number of stored periods across all years
    pub fn period_count(&self) -> usize {
        self.years.values().map(|months| months.len()).sum()
    }

    /// Look up the record for a period, if present
    pub fn record(&self, period: &PeriodKey) -> Option<&PeriodFields> {
        self.years
            .get(&period.year_key())
            .and_then(|months| months.get(&period.month_key()))
    }

    /// Iterate all stored periods as (year, month, fields), sorted by key
    pub fn iter_periods(&self) -> impl Iterator<Item = (&str, &str, &PeriodFields)> {
        self.years.iter().flat_map(|(year, months)| {
            months
                .iter()
                .map(move |(month, fields)| (year.as_str(), month.as_str(), fields))
        })
    }

    /// Upsert one period record under the duplicate policy
    ///
    /// An incoming record for an absent year or month is always inserted.
    /// For a duplicate (year, month), `overwrite` decides whether the
    /// existing record is replaced or kept; a kept duplicate is reported
    /// through the returned outcome so the caller can tell the operator.
    pub fn merge(
        &mut self,
        period: &PeriodKey,
        fields: PeriodFields,
        overwrite: bool,
    ) -> MergeOutcome {
        let months = self.years.entry(period.year_key()).or_default();
        match months.entry(period.month_key()) {
            Entry::Vacant(slot) => {
                slot.insert(fields);
                MergeOutcome::Inserted
            }
            Entry::Occupied(mut slot) => {
                if overwrite {
                    slot.insert(fields);
                    MergeOutcome::Replaced
                } else {
                    MergeOutcome::KeptExisting
                }
            }
        }
    }
}
