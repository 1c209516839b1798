//! Typed period record
//!
//! In memory a period record is keyed by `(UserSlot, EntryKind)`; on disk it
//! is a flat map of `<user>_income`, `<user>_shared_exp` and
//! `<user>_personal_exp` fields built from the two configured user names, so
//! files written by earlier versions of the tool stay readable.

use super::document::PeriodFields;
use crate::error::{SplitError, SplitResult};

/// Which of the two configured users an amount belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserSlot {
    First,
    Second,
}

impl UserSlot {
    /// Both slots, first user first
    pub const BOTH: [UserSlot; 2] = [UserSlot::First, UserSlot::Second];

    /// The other user
    pub fn other(&self) -> UserSlot {
        match self {
            UserSlot::First => UserSlot::Second,
            UserSlot::Second => UserSlot::First,
        }
    }
}

/// The three amounts tracked per user and month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    Income,
    SharedExpense,
    PersonalExpense,
}

impl EntryKind {
    /// All entry kinds
    pub const ALL: [EntryKind; 3] = [
        EntryKind::Income,
        EntryKind::SharedExpense,
        EntryKind::PersonalExpense,
    ];

    /// The on-disk field-name suffix
    pub fn suffix(&self) -> &'static str {
        match self {
            EntryKind::Income => "income",
            EntryKind::SharedExpense => "shared_exp",
            EntryKind::PersonalExpense => "personal_exp",
        }
    }
}

/// The two configured user names, in configuration order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserPair {
    first: String,
    second: String,
}

impl UserPair {
    /// Create a user pair from two distinct, non-empty names
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> SplitResult<Self> {
        let first = first.into();
        let second = second.into();
        if first.trim().is_empty() || second.trim().is_empty() {
            return Err(SplitError::Validation("User names must not be empty".into()));
        }
        if first == second {
            return Err(SplitError::Validation(format!(
                "User names must be distinct: {}",
                first
            )));
        }
        Ok(Self { first, second })
    }

    /// The name for a slot
    pub fn name(&self, slot: UserSlot) -> &str {
        match slot {
            UserSlot::First => &self.first,
            UserSlot::Second => &self.second,
        }
    }

    /// The on-disk field name for one amount, e.g. `alice_shared_exp`
    pub fn field_name(&self, slot: UserSlot, kind: EntryKind) -> String {
        format!("{}_{}", self.name(slot), kind.suffix())
    }
}

/// The three amounts for one user in one month
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct UserAmounts {
    pub income: f64,
    pub shared_exp: f64,
    pub personal_exp: f64,
}

impl UserAmounts {
    fn get(&self, kind: EntryKind) -> f64 {
        match kind {
            EntryKind::Income => self.income,
            EntryKind::SharedExpense => self.shared_exp,
            EntryKind::PersonalExpense => self.personal_exp,
        }
    }

    fn set(&mut self, kind: EntryKind, value: f64) {
        match kind {
            EntryKind::Income => self.income = value,
            EntryKind::SharedExpense => self.shared_exp = value,
            EntryKind::PersonalExpense => self.personal_exp = value,
        }
    }
}

/// One month's income/expense snapshot for both users
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PeriodRecord {
    first: UserAmounts,
    second: UserAmounts,
}

impl PeriodRecord {
    /// Create a record from both users' amounts
    pub fn new(first: UserAmounts, second: UserAmounts) -> Self {
        Self { first, second }
    }

    /// Get one amount
    pub fn amount(&self, slot: UserSlot, kind: EntryKind) -> f64 {
        self.amounts(slot).get(kind)
    }

    /// Set one amount
    pub fn set_amount(&mut self, slot: UserSlot, kind: EntryKind, value: f64) {
        match slot {
            UserSlot::First => self.first.set(kind, value),
            UserSlot::Second => self.second.set(kind, value),
        }
    }

    /// Get all amounts for one user
    pub fn amounts(&self, slot: UserSlot) -> &UserAmounts {
        match slot {
            UserSlot::First => &self.first,
            UserSlot::Second => &self.second,
        }
    }

    /// Check that all six amounts are finite numbers
    pub fn validate(&self) -> SplitResult<()> {
        for slot in UserSlot::BOTH {
            for kind in EntryKind::ALL {
                let value = self.amount(slot, kind);
                if !value.is_finite() {
                    return Err(SplitError::Validation(format!(
                        "Amount {} is not a finite number",
                        kind.suffix()
                    )));
                }
            }
        }
        Ok(())
    }

    /// Flatten to the six on-disk fields
    pub fn to_fields(&self, users: &UserPair) -> PeriodFields {
        let mut fields = PeriodFields::new();
        for slot in UserSlot::BOTH {
            for kind in EntryKind::ALL {
                fields.insert(users.field_name(slot, kind), self.amount(slot, kind));
            }
        }
        fields
    }

    /// Rebuild from the six on-disk fields
    ///
    /// Fails if any of the six expected fields is missing or not finite.
    pub fn from_fields(users: &UserPair, fields: &PeriodFields) -> SplitResult<Self> {
        let mut record = PeriodRecord::default();
        for slot in UserSlot::BOTH {
            for kind in EntryKind::ALL {
                let name = users.field_name(slot, kind);
                let value = *fields.get(&name).ok_or_else(|| {
                    SplitError::Validation(format!("Missing field in stored record: {}", name))
                })?;
                if !value.is_finite() {
                    return Err(SplitError::Validation(format!(
                        "Stored field {} is not a finite number",
                        name
                    )));
                }
                record.set_amount(slot, kind, value);
            }
        }
        Ok(record)
    }
}
