//! Terminal output for the monthly split
//!
//! Formats the settlement and summary figures for the operator. All
//! monetary amounts are printed with two decimals and the configured
//! currency symbol.

use crate::models::{UserPair, UserSlot};
use crate::services::split::{Debt, MonthlySummary, Settlement};

/// Print each user's fair share of the month's shared expenses
pub fn print_shares(users: &UserPair, settlement: &Settlement, currency: &str) {
    println!();
    for slot in UserSlot::BOTH {
        println!(
            "{}'s monthly shared expenses: {:.2} {}",
            users.name(slot),
            settlement.share(slot),
            currency
        );
    }
    println!();
}

/// Print who owes whom for the month
pub fn print_debt(users: &UserPair, debt: &Debt, currency: &str) {
    println!(
        "{} has to give {:.2} {} to {}",
        users.name(debt.debtor),
        debt.amount,
        currency,
        users.name(debt.debtor.other())
    );
    println!();
}

/// Print the whole-month summary figures
pub fn print_summary(users: &UserPair, summary: &MonthlySummary, currency: &str) {
    println!("Combined income:   {:.2} {}", summary.combined_income, currency);
    println!(
        "Combined expenses: {:.2} {}",
        summary.combined_expenses, currency
    );
    println!("Combined gain:     {:.2} {}", summary.combined_gain, currency);
    println!();

    for (index, slot) in UserSlot::BOTH.into_iter().enumerate() {
        println!(
            "{}'s expenses: {:.2} {}",
            users.name(slot),
            summary.expenses[index],
            currency
        );
    }
    println!();

    for (index, slot) in UserSlot::BOTH.into_iter().enumerate() {
        println!(
            "{}'s net gain: {:.2} {}",
            users.name(slot),
            summary.net_gain[index],
            currency
        );
    }
}
