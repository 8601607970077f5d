// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{Currency, Kind};

pub const EXPENSE_CATEGORIES: &[&str] = &[
    "Food & Drinks",
    "Shopping",
    "Transport",
    "Housing",
    "Entertainment",
    "Healthcare",
    "Education",
    "Utilities",
    "Travel",
    "Insurance",
    "Personal Care",
    "Gifts",
    "Investments",
    "Other",
];

pub const INCOME_CATEGORIES: &[&str] = &[
    "Salary",
    "Business",
    "Investments",
    "Freelance",
    "Gifts",
    "Rental",
    "Refunds",
    "Other",
];

/// Categories offered for a ledger side; `All` is the union without duplicates.
pub fn categories_for(kind: Kind) -> Vec<&'static str> {
    match kind {
        Kind::Income => INCOME_CATEGORIES.to_vec(),
        Kind::Expense => EXPENSE_CATEGORIES.to_vec(),
        Kind::All => {
            let mut out: Vec<&'static str> = INCOME_CATEGORIES.to_vec();
            for c in EXPENSE_CATEGORIES {
                if !out.contains(c) {
                    out.push(c);
                }
            }
            out
        }
    }
}

pub fn is_known_category(name: &str) -> bool {
    INCOME_CATEGORIES.contains(&name) || EXPENSE_CATEGORIES.contains(&name)
}

// (symbol, code)
pub const CURRENCIES: &[(&str, &str)] = &[
    ("$", "USD"),
    ("€", "EUR"),
    ("£", "GBP"),
    ("¥", "JPY"),
    ("$", "CAD"),
    ("$", "AUD"),
    ("Fr", "CHF"),
    ("¥", "CNY"),
    ("₹", "INR"),
    ("₩", "KRW"),
    ("$", "NZD"),
    ("kr", "SEK"),
    ("$", "SGD"),
    ("฿", "THB"),
    ("₺", "TRY"),
    ("R", "ZAR"),
    ("₽", "RUB"),
    ("R$", "BRL"),
    ("$", "HKD"),
    ("$", "MXN"),
    ("kr", "NOK"),
    ("kr", "DKK"),
    ("zł", "PLN"),
    ("₱", "PHP"),
    ("Dh", "AED"),
    ("₪", "ILS"),
    ("Kč", "CZK"),
    ("Ft", "HUF"),
    ("RM", "MYR"),
    ("$", "TWD"),
    ("₡", "CRC"),
    ("S/", "PEN"),
    ("$", "CLP"),
    ("$", "ARS"),
    ("₦", "NGN"),
    ("₸", "KZT"),
    ("₴", "UAH"),
    ("₫", "VND"),
    ("Rp", "IDR"),
];

pub fn find_currency(code: &str) -> Option<Currency> {
    CURRENCIES
        .iter()
        .find(|(_, c)| c.eq_ignore_ascii_case(code))
        .map(|(s, c)| Currency::new(s, c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_categories_are_deduplicated() {
        let all = categories_for(Kind::All);
        assert_eq!(all.iter().filter(|c| **c == "Investments").count(), 1);
        assert_eq!(all.iter().filter(|c| **c == "Other").count(), 1);
        assert_eq!(all.len(), 19);
        assert_eq!(all[0], "Salary");
    }

    #[test]
    fn currency_lookup_ignores_case() {
        assert_eq!(find_currency("eur"), Some(Currency::new("€", "EUR")));
        assert_eq!(find_currency("XYZ"), None);
        assert_eq!(CURRENCIES.len(), 39);
    }
}
