//! Income-proportional splitting of shared expenses
//!
//! Each user's fair share of the month's total shared expenses is their
//! percentage of the combined income. The record stores the fair shares,
//! not the amounts actually paid; the difference between the two is what
//! one user owes the other.

use crate::error::{SplitError, SplitResult};
use crate::models::{EntryKind, PeriodRecord, UserSlot};

/// Round a monetary amount to cents
pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Who owes whom for the month
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Debt {
    /// The user who paid less than their fair share
    pub debtor: UserSlot,
    /// The amount owed to the other user
    pub amount: f64,
}

/// The income-proportional split of one month's shared expenses
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settlement {
    percentages: [f64; 2],
    shares: [f64; 2],
    paid: [f64; 2],
}

impl Settlement {
    fn index(slot: UserSlot) -> usize {
        match slot {
            UserSlot::First => 0,
            UserSlot::Second => 1,
        }
    }

    /// A user's percentage of the combined income
    pub fn percentage(&self, slot: UserSlot) -> f64 {
        self.percentages[Self::index(slot)]
    }

    /// A user's fair share of the total shared expenses, rounded to cents
    pub fn share(&self, slot: UserSlot) -> f64 {
        self.shares[Self::index(slot)]
    }

    /// What a user actually paid in shared expenses this month
    pub fn paid(&self, slot: UserSlot) -> f64 {
        self.paid[Self::index(slot)]
    }

    /// Replace the record's shared-expense amounts with the fair shares
    ///
    /// This is what gets persisted: the ledger keeps each user's share,
    /// not the raw amounts paid.
    pub fn apply(&self, record: &mut PeriodRecord) {
        for slot in UserSlot::BOTH {
            record.set_amount(slot, EntryKind::SharedExpense, self.share(slot));
        }
    }

    /// Who owes whom, settled against the first user's balance
    pub fn debt(&self) -> Debt {
        let first_paid = self.paid(UserSlot::First);
        let first_share = self.share(UserSlot::First);
        if first_paid < first_share {
            Debt {
                debtor: UserSlot::First,
                amount: round_cents(first_share - first_paid),
            }
        } else {
            Debt {
                debtor: UserSlot::Second,
                amount: round_cents(first_paid - first_share),
            }
        }
    }
}

/// Split the month's shared expenses proportionally to income
///
/// Fails if the record holds non-finite amounts or the combined income is
/// not positive (the split would be meaningless).
pub fn settle(record: &PeriodRecord) -> SplitResult<Settlement> {
    record.validate()?;

    let first_income = record.amount(UserSlot::First, EntryKind::Income);
    let second_income = record.amount(UserSlot::Second, EntryKind::Income);
    let combined_income = first_income + second_income;

    if combined_income <= 0.0 {
        return Err(SplitError::Validation(
            "Combined income must be positive to split expenses".into(),
        ));
    }

    let first_percentage = (first_income / combined_income) * 100.0;
    let second_percentage = 100.0 - first_percentage;

    let first_paid = record.amount(UserSlot::First, EntryKind::SharedExpense);
    let second_paid = record.amount(UserSlot::Second, EntryKind::SharedExpense);
    let total_shared = first_paid + second_paid;

    Ok(Settlement {
        percentages: [first_percentage, second_percentage],
        shares: [
            round_cents((total_shared / 100.0) * first_percentage),
            round_cents((total_shared / 100.0) * second_percentage),
        ],
        paid: [first_paid, second_paid],
    })
}

/// The whole-month figures shown after a split
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthlySummary {
    pub combined_income: f64,
    pub combined_expenses: f64,
    pub combined_gain: f64,
    /// Per-user total expenses (fair share + personal), first user first
    pub expenses: [f64; 2],
    /// Per-user net gain (income - fair share - personal), first user first
    pub net_gain: [f64; 2],
}

/// Summarize a month from the settled record
///
/// Expects the record to already carry the fair shares (see
/// [`Settlement::apply`]); combined expenses use the amounts actually paid.
pub fn summarize(record: &PeriodRecord, settlement: &Settlement) -> MonthlySummary {
    let income = |slot: UserSlot| record.amount(slot, EntryKind::Income);
    let personal = |slot: UserSlot| record.amount(slot, EntryKind::PersonalExpense);
    let share = |slot: UserSlot| record.amount(slot, EntryKind::SharedExpense);

    let combined_income = income(UserSlot::First) + income(UserSlot::Second);
    let paid_shared = settlement.paid(UserSlot::First) + settlement.paid(UserSlot::Second);
    let combined_personal = personal(UserSlot::First) + personal(UserSlot::Second);
    let combined_expenses = paid_shared + combined_personal;

    let per_user = |slot: UserSlot| {
        (
            share(slot) + personal(slot),
            income(slot) - share(slot) - personal(slot),
        )
    };
    let (first_expenses, first_net) = per_user(UserSlot::First);
    let (second_expenses, second_net) = per_user(UserSlot::Second);

    MonthlySummary {
        combined_income,
        combined_expenses,
        combined_gain: combined_income - combined_expenses,
        expenses: [first_expenses, second_expenses],
        net_gain: [first_net, second_net],
    }
}
