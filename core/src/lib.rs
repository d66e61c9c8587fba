//! tarifa - cheapest-carrier telephone rate lookup
//!
//! Matches a dialed number against each carrier's table of price-per-prefix
//! rules and finds the carrier offering the lowest rate, with
//! longest-prefix-match semantics (more specific prefixes override shorter
//! ones).
//!
//! # Architecture
//!
//! - [`DigitTrie<V>`] - per-carrier ordered digit-trie, one node per digit,
//!   answering longest-prefix lookups in O(number length)
//! - [`RateTable`] - the capability seam: insert a prefix rate, resolve a
//!   rate for a number
//! - [`Carrier`] - a name plus one owned rate trie, the only `RateTable`
//!   implementation
//! - [`RateRouter`] - ordered collection of carriers with a minimum-rate
//!   scan; on ties the first-registered carrier wins
//!
//! # Example
//!
//! ```
//! use tarifa::{Carrier, RateRouter, RateTable};
//!
//! let mut a = Carrier::new("Operator A");
//! a.bulk_insert_prefix_rates([("46", 0.17), ("468", 0.15)])?;
//!
//! let mut b = Carrier::new("Operator B");
//! b.insert_prefix_rate("46", 0.2)?;
//!
//! let mut router = RateRouter::new();
//! router.add_carrier(a);
//! router.add_carrier(b);
//!
//! // "468..." is most specifically priced by Operator A
//! let (carrier, rate) = router.find_cheapest("4680000")?.unwrap();
//! assert_eq!(carrier.name(), "Operator A");
//! assert_eq!(rate, 0.15);
//!
//! // No carrier prices "39..."
//! assert_eq!(router.find_cheapest("3912345")?, None);
//! # Ok::<(), tarifa::RateError>(())
//! ```
//!
//! # Validation
//!
//! Prefixes and queried numbers are decimal-digit strings; any other
//! character is a [`RateError`], raised at the point of invalid input and
//! never recovered internally. A syntactically valid but unmatched number
//! is a normal `Ok(None)`, not an error.

// ═══════════════════════════════════════════════════════════════════════════════
// Modules
// ═══════════════════════════════════════════════════════════════════════════════

mod carrier;
mod digit_trie;
mod router;

#[cfg(feature = "config")]
mod config;

// ═══════════════════════════════════════════════════════════════════════════════
// Public API
// ═══════════════════════════════════════════════════════════════════════════════

pub use carrier::{Carrier, RateTable};
pub use digit_trie::DigitTrie;
pub use router::RateRouter;

#[cfg(feature = "config")]
pub use config::{CarrierConfig, RateEntryConfig, RouterConfig};

/// Prelude module for convenient imports.
///
/// ```
/// use tarifa::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{Carrier, DigitTrie, RateError, RateRouter, RateTable};
}

// ═══════════════════════════════════════════════════════════════════════════════
// Errors
// ═══════════════════════════════════════════════════════════════════════════════

/// Errors from rate insertion, lookup, and registration.
///
/// All variants are input-validation failures surfaced synchronously to the
/// caller; there are no fatal process-level errors in this crate. Bulk
/// operations do not roll back: a failure partway through leaves prior
/// successful insertions in place.
#[derive(Debug, Clone, PartialEq)]
pub enum RateError {
    /// A prefix contains a character outside `0`-`9` during insertion.
    InvalidPrefix {
        /// The offending prefix.
        prefix: String,
    },
    /// A rate is NaN, infinite, or negative during insertion.
    InvalidRate {
        /// The offending rate.
        rate: f64,
    },
    /// A queried number contains a character outside `0`-`9`.
    InvalidNumber {
        /// The offending number.
        number: String,
    },
    /// A carrier failed validation during bulk registration.
    Carrier {
        /// Name of the offending carrier.
        name: String,
        /// The underlying validation error.
        source: Box<RateError>,
    },
    /// Rate-plan deserialization or construction failed.
    InvalidConfig {
        /// The underlying error message.
        source: String,
    },
}

impl std::fmt::Display for RateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidPrefix { prefix } => {
                write!(
                    f,
                    "invalid prefix {prefix:?}: prefixes may contain only the digits 0-9"
                )
            }
            Self::InvalidRate { rate } => {
                write!(f, "invalid rate {rate}: rates must be finite and non-negative")
            }
            Self::InvalidNumber { number } => {
                write!(
                    f,
                    "invalid number {number:?}: numbers may contain only the digits 0-9"
                )
            }
            Self::Carrier { name, source } => {
                write!(f, "carrier {name:?}: {source}")
            }
            Self::InvalidConfig { source } => {
                write!(f, "invalid rate plan: {source}")
            }
        }
    }
}

impl std::error::Error for RateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Carrier { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}
