// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Display currency and the bulk rescale that runs when it changes.
//!
//! The confirmed rate multiplies every stored amount as-is. It is not a
//! delta from the previous rate, so two changes in a row compound.

use crate::error::{Error, Result};
use crate::ledger::Ledger;
use crate::models::Currency;
use crate::store::{RecordStore, SettingsStore};
use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use std::fmt;
use std::str::FromStr;

pub const CURRENCY_KEY: &str = "currency";
pub const RATE_KEY: &str = "conversion_rate";

/// A strictly positive conversion factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConversionRate(Decimal);

impl ConversionRate {
    pub const ONE: ConversionRate = ConversionRate(Decimal::ONE);

    pub fn new(rate: Decimal) -> Result<Self> {
        if rate <= Decimal::ZERO {
            return Err(Error::Validation(format!(
                "conversion rate must be greater than zero, got {}",
                rate
            )));
        }
        Ok(ConversionRate(rate))
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl TryFrom<f64> for ConversionRate {
    type Error = Error;

    fn try_from(v: f64) -> Result<Self> {
        if !v.is_finite() {
            return Err(Error::Validation(format!(
                "conversion rate must be finite, got {}",
                v
            )));
        }
        let d = Decimal::from_f64(v)
            .ok_or_else(|| Error::Validation(format!("conversion rate {} is out of range", v)))?;
        ConversionRate::new(d)
    }
}

impl FromStr for ConversionRate {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let d = s
            .trim()
            .parse::<Decimal>()
            .map_err(|_| Error::Validation(format!("invalid conversion rate '{}'", s)))?;
        ConversionRate::new(d)
    }
}

impl fmt::Display for ConversionRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.normalize())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionState {
    Idle,
    AwaitingRate { target: Currency },
    Applying { target: Currency },
}

/// Multiply every stored amount by `rate` and write the collection back once.
/// Nothing is written if any product overflows.
pub fn rescale<S: RecordStore + ?Sized>(store: &S, rate: ConversionRate) -> Result<usize> {
    let mut items = store.read_all()?;
    for tx in items.iter_mut() {
        tx.amount = tx.amount.checked_mul(rate.value()).ok_or_else(|| {
            Error::Validation(format!(
                "rate {} overflows the amount of transaction '{}'",
                rate, tx.id
            ))
        })?;
    }
    store.write_all(&items)?;
    Ok(items.len())
}

pub struct CurrencyManager {
    currency: Currency,
    rate: ConversionRate,
    state: ConversionState,
}

impl Default for CurrencyManager {
    fn default() -> Self {
        CurrencyManager {
            currency: Currency::default(),
            rate: ConversionRate::ONE,
            state: ConversionState::Idle,
        }
    }
}

impl CurrencyManager {
    /// Load the persisted selection. Unreadable values fall back to the
    /// defaults with a warning rather than failing startup.
    pub fn load<S: SettingsStore + ?Sized>(settings: &S) -> Result<Self> {
        let mut mgr = CurrencyManager::default();
        if let Some(raw) = settings.get_setting(CURRENCY_KEY)? {
            match serde_json::from_str::<Currency>(&raw) {
                Ok(c) => mgr.currency = c,
                Err(e) => tracing::warn!(error = %e, "ignoring unreadable currency setting"),
            }
        }
        if let Some(raw) = settings.get_setting(RATE_KEY)? {
            match raw.parse::<ConversionRate>() {
                Ok(r) => mgr.rate = r,
                Err(e) => tracing::warn!(error = %e, "ignoring unreadable conversion rate"),
            }
        }
        Ok(mgr)
    }

    pub fn currency(&self) -> &Currency {
        &self.currency
    }

    pub fn rate(&self) -> ConversionRate {
        self.rate
    }

    pub fn state(&self) -> &ConversionState {
        &self.state
    }

    /// Returns false when `target` is already the active currency.
    pub fn request_change(&mut self, target: Currency) -> bool {
        if target.code == self.currency.code {
            return false;
        }
        tracing::debug!(from = %self.currency.code, to = %target.code, "currency change requested");
        self.state = ConversionState::AwaitingRate { target };
        true
    }

    pub fn cancel(&mut self) {
        if matches!(self.state, ConversionState::AwaitingRate { .. }) {
            self.state = ConversionState::Idle;
        }
    }

    /// Rescale the ledger by `rate` and make the pending currency active.
    /// An invalid rate leaves the change pending.
    pub fn confirm_rate<S>(&mut self, ledger: &mut Ledger<S>, rate: f64) -> Result<()>
    where
        S: RecordStore + SettingsStore,
    {
        let rate = ConversionRate::try_from(rate)?;
        self.confirm(ledger, rate)
    }

    /// Same as `confirm_rate` for a rate that is already validated. The
    /// settings are only written once the rescale has succeeded.
    pub fn confirm<S>(&mut self, ledger: &mut Ledger<S>, rate: ConversionRate) -> Result<()>
    where
        S: RecordStore + SettingsStore,
    {
        let target = match &self.state {
            ConversionState::AwaitingRate { target } => target.clone(),
            _ => {
                return Err(Error::Validation(
                    "no currency change is pending".to_string(),
                ));
            }
        };
        self.apply(ledger, target, rate)
    }

    fn apply<S>(&mut self, ledger: &mut Ledger<S>, target: Currency, rate: ConversionRate) -> Result<()>
    where
        S: RecordStore + SettingsStore,
    {
        self.state = ConversionState::Applying {
            target: target.clone(),
        };
        let result = Self::rescale_and_persist(ledger, &target, rate);
        self.state = ConversionState::Idle;
        match result {
            Ok(count) => {
                tracing::info!(
                    from = %self.currency.code,
                    to = %target.code,
                    %rate,
                    count,
                    "currency changed"
                );
                self.currency = target;
                self.rate = rate;
                ledger.refresh()
            }
            Err(e) => {
                tracing::error!(error = %e, to = %target.code, "currency change failed");
                Err(e)
            }
        }
    }

    fn rescale_and_persist<S>(ledger: &Ledger<S>, target: &Currency, rate: ConversionRate) -> Result<usize>
    where
        S: RecordStore + SettingsStore,
    {
        let store = ledger.store();
        let count = rescale(store, rate)?;
        store.set_setting(CURRENCY_KEY, &serde_json::to_string(target)?)?;
        store.set_setting(RATE_KEY, &rate.to_string())?;
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_rejects_non_positive_and_non_finite() {
        assert!(matches!(ConversionRate::try_from(0.0), Err(Error::Validation(_))));
        assert!(matches!(ConversionRate::try_from(-1.5), Err(Error::Validation(_))));
        assert!(matches!(ConversionRate::try_from(f64::NAN), Err(Error::Validation(_))));
        assert!(matches!(ConversionRate::try_from(f64::INFINITY), Err(Error::Validation(_))));
        assert!(matches!("abc".parse::<ConversionRate>(), Err(Error::Validation(_))));
        assert_eq!(ConversionRate::try_from(0.5).unwrap().value(), Decimal::new(5, 1));
    }

    #[test]
    fn same_code_request_stays_idle() {
        let mut mgr = CurrencyManager::default();
        assert!(!mgr.request_change(Currency::new("$", "USD")));
        assert_eq!(mgr.state(), &ConversionState::Idle);
    }

    #[test]
    fn cancel_returns_to_idle() {
        let mut mgr = CurrencyManager::default();
        assert!(mgr.request_change(Currency::new("€", "EUR")));
        assert!(matches!(mgr.state(), ConversionState::AwaitingRate { .. }));
        mgr.cancel();
        assert_eq!(mgr.state(), &ConversionState::Idle);
        assert_eq!(mgr.currency().code, "USD");
    }

    #[test]
    fn rate_display_is_normalized() {
        let r: ConversionRate = "0.9200".parse().unwrap();
        assert_eq!(r.to_string(), "0.92");
    }
}
