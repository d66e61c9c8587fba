//! `Carrier` - a named prefix-to-rate table.
//!
//! The [`RateTable`] trait is the seam the router depends on: insert a
//! prefix rate, resolve a rate for a number. [`Carrier`] is its only
//! implementation, backed by a [`DigitTrie`].

use crate::{digit_trie::DigitTrie, RateError};

/// Capability interface for a prefix-rate table.
///
/// Implementations store prefix-to-rate associations and answer "what rate
/// applies to this number" using longest-prefix-match.
pub trait RateTable {
    /// Associate `rate` with `prefix`, overwriting any prior rate on that
    /// exact prefix.
    ///
    /// # Errors
    ///
    /// Returns [`RateError::InvalidPrefix`] if `prefix` contains a
    /// character outside `0`-`9`, or [`RateError::InvalidRate`] if `rate`
    /// is NaN, infinite, or negative.
    fn insert_prefix_rate(&mut self, prefix: &str, rate: f64) -> Result<(), RateError>;

    /// Resolve the rate for `number` using longest-prefix-match.
    ///
    /// Returns `Ok(None)` if no stored prefix matches; an unmatched number
    /// is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`RateError::InvalidNumber`] if `number` contains a
    /// character outside `0`-`9`.
    fn rate_for_number(&self, number: &str) -> Result<Option<f64>, RateError>;
}

/// A telephone carrier: a name plus one owned rate trie.
///
/// Created once with a name, populated via one or more insertions, then
/// queried. There is no deletion operation.
///
/// # Example
///
/// ```
/// use tarifa::{Carrier, RateTable};
///
/// let mut carrier = Carrier::new("Operator A");
/// carrier.insert_prefix_rate("46", 0.17)?;
/// carrier.insert_prefix_rate("468", 0.15)?;
///
/// assert_eq!(carrier.rate_for_number("4680000")?, Some(0.15));
/// assert_eq!(carrier.rate_for_number("4690000")?, Some(0.17));
/// assert_eq!(carrier.rate_for_number("1230000")?, None);
/// # Ok::<(), tarifa::RateError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Carrier {
    name: String,
    rates: DigitTrie<f64>,
}

impl Carrier {
    /// Create a carrier with an empty rate table.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rates: DigitTrie::new(),
        }
    }

    /// Returns the carrier's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Apply [`RateTable::insert_prefix_rate`] to each pair in order.
    ///
    /// Stops at the first validation error and propagates it. There is no
    /// rollback: pairs inserted before the failure stay in place.
    ///
    /// # Errors
    ///
    /// Propagates the first [`RateError`] from the underlying inserts.
    pub fn bulk_insert_prefix_rates<P, I>(&mut self, pairs: I) -> Result<(), RateError>
    where
        P: AsRef<str>,
        I: IntoIterator<Item = (P, f64)>,
    {
        for (prefix, rate) in pairs {
            self.insert_prefix_rate(prefix.as_ref(), rate)?;
        }
        Ok(())
    }

    /// Returns the number of stored prefixes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    /// Returns `true` if no prefixes are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}

impl RateTable for Carrier {
    fn insert_prefix_rate(&mut self, prefix: &str, rate: f64) -> Result<(), RateError> {
        if !rate.is_finite() || rate < 0.0 {
            return Err(RateError::InvalidRate { rate });
        }
        self.rates.insert(prefix, rate)?;
        Ok(())
    }

    fn rate_for_number(&self, number: &str) -> Result<Option<f64>, RateError> {
        Ok(self.rates.longest_match(number)?.copied())
    }
}
