//! `RateRouter` - cross-carrier minimum-rate search.
//!
//! Owns an ordered collection of carriers and finds the cheapest applicable
//! rate across all of them for a given number. Registration order is
//! preserved; it only matters for tie-breaking, where the first-registered
//! carrier among the tied minimum wins.

use crate::{
    carrier::{Carrier, RateTable},
    digit_trie::first_non_digit,
    RateError,
};

/// Ordered collection of carriers with a minimum-rate scan.
///
/// Created empty; carriers are appended over time and never otherwise
/// mutated. No uniqueness constraint is enforced on carrier names:
/// duplicates are accepted and remain independently queryable.
///
/// # Concurrency
///
/// All operations are synchronous in-memory traversals. The router is
/// `Send + Sync` by construction, and concurrent lookups are safe once
/// population is done; concurrent mutation needs external synchronization.
///
/// # Example
///
/// ```
/// use tarifa::{RateRouter, RateTable};
///
/// let mut router = RateRouter::new();
/// router.bulk_register([
///     ("Operator A", vec![("123", 0.8)]),
///     ("Operator B", vec![("123", 0.92)]),
/// ])?;
///
/// let (carrier, rate) = router.find_cheapest("123")?.unwrap();
/// assert_eq!(carrier.name(), "Operator A");
/// assert_eq!(rate, 0.8);
///
/// assert_eq!(router.find_cheapest("234")?, None);
/// # Ok::<(), tarifa::RateError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct RateRouter {
    carriers: Vec<Carrier>,
}

impl RateRouter {
    /// Create a router with no carriers.
    #[must_use]
    pub fn new() -> Self {
        Self {
            carriers: Vec::new(),
        }
    }

    /// Append a carrier to the collection.
    pub fn add_carrier(&mut self, carrier: Carrier) {
        self.carriers.push(carrier);
    }

    /// Construct, populate, and register one carrier per dataset entry.
    ///
    /// Iteration order of `dataset` becomes registration order, which
    /// drives tie-breaking in [`find_cheapest`](Self::find_cheapest). Pass
    /// an ordered collection when that matters.
    ///
    /// On a validation error the offending carrier is dropped (carriers
    /// registered before it stay in place) and the error is wrapped in
    /// [`RateError::Carrier`] naming it.
    ///
    /// # Errors
    ///
    /// Returns [`RateError::Carrier`] wrapping the first validation error
    /// from the underlying inserts.
    pub fn bulk_register<N, R, P, I>(&mut self, dataset: I) -> Result<(), RateError>
    where
        N: Into<String>,
        R: IntoIterator<Item = (P, f64)>,
        P: AsRef<str>,
        I: IntoIterator<Item = (N, R)>,
    {
        for (name, rates) in dataset {
            let mut carrier = Carrier::new(name);
            carrier
                .bulk_insert_prefix_rates(rates)
                .map_err(|source| RateError::Carrier {
                    name: carrier.name().to_string(),
                    source: Box::new(source),
                })?;
            self.add_carrier(carrier);
        }
        Ok(())
    }

    /// Find the carrier offering the lowest rate for `number`.
    ///
    /// Queries every registered carrier in registration order and tracks
    /// the minimum with a strict less-than comparison: a later carrier
    /// with a rate equal to the current minimum does not replace it, so on
    /// ties the first-registered carrier wins. Carriers with no matching
    /// prefix are skipped, never treated as rate zero or infinity.
    ///
    /// Returns `Ok(None)` if no carrier produced a rate. Cost is
    /// O(carrier count x number length).
    ///
    /// # Errors
    ///
    /// Returns [`RateError::InvalidNumber`] if `number` contains a
    /// character outside `0`-`9`. Validation happens once at this entry
    /// point.
    pub fn find_cheapest(&self, number: &str) -> Result<Option<(&Carrier, f64)>, RateError> {
        if first_non_digit(number).is_some() {
            return Err(RateError::InvalidNumber {
                number: number.to_string(),
            });
        }

        let mut best: Option<(&Carrier, f64)> = None;
        for carrier in &self.carriers {
            let Some(rate) = carrier.rate_for_number(number)? else {
                continue;
            };
            if best.map_or(true, |(_, cheapest)| rate < cheapest) {
                best = Some((carrier, rate));
            }
        }
        Ok(best)
    }

    /// Returns the registered carriers in registration order.
    #[must_use]
    pub fn carriers(&self) -> &[Carrier] {
        &self.carriers
    }

    /// Returns the number of registered carriers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.carriers.len()
    }

    /// Returns `true` if no carriers are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.carriers.is_empty()
    }
}
