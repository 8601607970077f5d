// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecurringType {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl FromStr for RecurringType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "daily" => Ok(RecurringType::Daily),
            "weekly" => Ok(RecurringType::Weekly),
            "monthly" => Ok(RecurringType::Monthly),
            "yearly" => Ok(RecurringType::Yearly),
            other => Err(format!(
                "Unknown recurrence '{}', expected daily|weekly|monthly|yearly",
                other
            )),
        }
    }
}

impl fmt::Display for RecurringType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RecurringType::Daily => "daily",
            RecurringType::Weekly => "weekly",
            RecurringType::Monthly => "monthly",
            RecurringType::Yearly => "yearly",
        };
        f.write_str(s)
    }
}

/// A stored ledger entry. Positive amounts are income, negative are expenses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub title: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub date: String, // YYYY-MM-DD
    pub category: String,
    #[serde(default)]
    pub is_recurring: bool,
    #[serde(default)]
    pub recurring_type: Option<RecurringType>,
    #[serde(default)]
    pub recurring_end_date: Option<String>,
}

/// A transaction that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    pub title: String,
    pub amount: Decimal,
    pub date: String,
    pub category: String,
    pub is_recurring: bool,
    pub recurring_type: Option<RecurringType>,
    pub recurring_end_date: Option<String>,
}

impl NewTransaction {
    pub fn new(title: &str, amount: Decimal, date: &str, category: &str) -> Self {
        NewTransaction {
            title: title.to_string(),
            amount,
            date: date.to_string(),
            category: category.to_string(),
            is_recurring: false,
            recurring_type: None,
            recurring_end_date: None,
        }
    }

    pub fn recurring(mut self, kind: RecurringType, end_date: Option<&str>) -> Self {
        self.is_recurring = true;
        self.recurring_type = Some(kind);
        self.recurring_end_date = end_date.map(|s| s.to_string());
        self
    }

    pub fn with_id(self, id: String) -> Transaction {
        Transaction {
            id,
            title: self.title,
            amount: self.amount,
            date: self.date,
            category: self.category,
            is_recurring: self.is_recurring,
            recurring_type: self.recurring_type,
            recurring_end_date: self.recurring_end_date,
        }
    }
}

impl Transaction {
    pub fn is_income(&self) -> bool {
        self.amount > Decimal::ZERO
    }

    pub fn is_expense(&self) -> bool {
        self.amount < Decimal::ZERO
    }

    /// Everything except the id, for comparing a stored record with its input.
    pub fn without_id(&self) -> NewTransaction {
        NewTransaction {
            title: self.title.clone(),
            amount: self.amount,
            date: self.date.clone(),
            category: self.category.clone(),
            is_recurring: self.is_recurring,
            recurring_type: self.recurring_type,
            recurring_end_date: self.recurring_end_date.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency {
    pub symbol: String,
    pub code: String,
}

impl Currency {
    pub fn new(symbol: &str, code: &str) -> Self {
        Currency {
            symbol: symbol.to_string(),
            code: code.to_string(),
        }
    }
}

impl Default for Currency {
    fn default() -> Self {
        Currency::new("$", "USD")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    // Anything other than "dark" reads as light.
    pub fn from_setting(s: &str) -> Self {
        if s == "dark" { Theme::Dark } else { Theme::Light }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Which side of the ledger a filter or catalog lookup refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Kind {
    #[default]
    All,
    Income,
    Expense,
}

impl FromStr for Kind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "all" => Ok(Kind::All),
            "income" => Ok(Kind::Income),
            "expense" | "expenses" => Ok(Kind::Expense),
            other => Err(format!("Unknown type '{}', expected all|income|expense", other)),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Totals {
    pub income: Decimal,
    pub expenses: Decimal,
    pub balance: Decimal,
}

impl Totals {
    pub fn from_transactions(items: &[Transaction]) -> Self {
        let mut t = Totals::default();
        for tx in items {
            // Saturate rather than panic on absurd ledgers.
            if tx.amount > Decimal::ZERO {
                t.income = t.income.saturating_add(tx.amount);
            } else {
                t.expenses = t.expenses.saturating_add(tx.amount.abs());
            }
        }
        t.balance = t.income.saturating_sub(t.expenses);
        t
    }
}
