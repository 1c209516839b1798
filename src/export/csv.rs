//! CSV Export functionality
//!
//! Flattens the ledger to one row per stored (year, month) with the six
//! amount columns, spreadsheet-compatible.

use std::io::Write;

use crate::error::{SplitError, SplitResult};
use crate::models::{EntryKind, LedgerDocument, UserPair, UserSlot};

/// Export the ledger to CSV
///
/// Columns are `year,month` followed by the six field names in user order;
/// a field absent from a stored record is exported as 0.00.
pub fn export_ledger_csv<W: Write>(
    document: &LedgerDocument,
    users: &UserPair,
    writer: W,
) -> SplitResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    let mut header = vec!["year".to_string(), "month".to_string()];
    for slot in UserSlot::BOTH {
        for kind in EntryKind::ALL {
            header.push(users.field_name(slot, kind));
        }
    }
    csv_writer
        .write_record(&header)
        .map_err(|e| SplitError::Export(e.to_string()))?;

    for (year, month, fields) in document.iter_periods() {
        let mut row = vec![year.to_string(), month.to_string()];
        for slot in UserSlot::BOTH {
            for kind in EntryKind::ALL {
                let name = users.field_name(slot, kind);
                let value = fields.get(&name).copied().unwrap_or(0.0);
                row.push(format!("{:.2}", value));
            }
        }
        csv_writer
            .write_record(&row)
            .map_err(|e| SplitError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| SplitError::Export(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Month, PeriodRecord, PeriodKey, UserAmounts, Year};

    fn users() -> UserPair {
        UserPair::new("alice", "bob").unwrap()
    }

    fn document() -> LedgerDocument {
        let users = users();
        let record = PeriodRecord::new(
            UserAmounts {
                income: 2000.0,
                shared_exp: 300.0,
                personal_exp: 50.0,
            },
            UserAmounts {
                income: 1000.0,
                shared_exp: 150.0,
                personal_exp: 25.5,
            },
        );
        let mut doc = LedgerDocument::new();
        let period = PeriodKey::new(Year::new(2024).unwrap(), Month::Mar);
        doc.merge(&period, record.to_fields(&users), false);
        doc
    }

    #[test]
    fn test_csv_header_and_rows() {
        let mut out = Vec::new();
        export_ledger_csv(&document(), &users(), &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next().unwrap(),
            "year,month,alice_income,alice_shared_exp,alice_personal_exp,\
             bob_income,bob_shared_exp,bob_personal_exp"
        );
        assert_eq!(
            lines.next().unwrap(),
            "2024,Mar,2000.00,300.00,50.00,1000.00,150.00,25.50"
        );
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_csv_empty_document_has_only_header() {
        let mut out = Vec::new();
        export_ledger_csv(&LedgerDocument::new(), &users(), &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 1);
    }
}
