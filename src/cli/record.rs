//! Monthly record entry
//!
//! The default command: prompt for both users' amounts, compute the
//! income-proportional split, show the settlement, and persist the month's
//! record when output is enabled.

use crate::config::{SplitPaths, Settings};
use crate::display;
use crate::error::SplitResult;
use crate::models::{EntryKind, MergeOutcome, PeriodKey, PeriodRecord, UserSlot};
use crate::services::split::{settle, summarize};
use crate::storage::{LedgerStore, StorageMode};

use super::input;

/// Run the monthly entry flow for the current (year, month)
pub fn handle_add(paths: &SplitPaths, settings: &Settings) -> SplitResult<()> {
    let users = settings.user_pair()?;
    let period = PeriodKey::current();
    let currency = &settings.currency_symbol;

    let mut record = PeriodRecord::default();
    for (kind, label) in [
        (EntryKind::Income, "net income for this month"),
        (EntryKind::SharedExpense, "shared expenses for this month"),
        (
            EntryKind::PersonalExpense,
            "personal expenses for this month (optional)",
        ),
    ] {
        for slot in UserSlot::BOTH {
            let amount = input::prompt_amount(&format!("{}'s {}", users.name(slot), label))?;
            record.set_amount(slot, kind, amount);
        }
    }

    let settlement = settle(&record)?;
    settlement.apply(&mut record);

    display::print_shares(&users, &settlement, currency);
    display::print_debt(&users, &settlement.debt(), currency);
    let summary = summarize(&record, &settlement);
    display::print_summary(&users, &summary, currency);

    if !settings.json_output.enable {
        return Ok(());
    }

    let password = if settings.json_output.encrypt {
        Some(input::prompt_password()?)
    } else {
        None
    };

    let store = LedgerStore::new(
        paths.ledger_file(&settings.json_output.name),
        StorageMode::from_encrypt_flag(settings.json_output.encrypt),
    );
    let outcome = store.update(
        &period,
        record.to_fields(&users),
        password.as_ref(),
        settings.json_output.overwrite_duplicate_month,
    )?;

    println!();
    match outcome {
        MergeOutcome::Inserted => {
            println!("Stored the record for {} in {}", period, store.path().display());
        }
        MergeOutcome::Replaced => {
            println!("Replaced the stored record for {}", period);
        }
        MergeOutcome::KeptExisting => {
            println!(
                "A record for {} already exists, keeping the stored data \
                 (overwrite_duplicate_month is disabled)",
                period
            );
        }
    }
    Ok(())
}
