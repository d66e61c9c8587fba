//! Config types for serde-driven router construction.
//!
//! These types mirror the runtime types but are serde-deserializable,
//! enabling rate plans to be loaded from JSON or YAML documents.
//!
//! # Relationship to runtime types
//!
//! | Config type | Runtime type | Loader |
//! |-------------|--------------|--------|
//! | [`RouterConfig`] | [`RateRouter`](crate::RateRouter) | [`RouterConfig::load`] |
//! | [`CarrierConfig`] | [`Carrier`](crate::Carrier) | via `load` |
//! | [`RateEntryConfig`] | one trie entry | via `load` |
//!
//! Carriers are a *sequence*, not a map: document order becomes
//! registration order, which drives the router's tie-break.

use crate::{RateError, RateRouter};
use serde::Deserialize;

/// Configuration for a [`RateRouter`](crate::RateRouter).
///
/// ```
/// use tarifa::RouterConfig;
///
/// let config = RouterConfig::from_json(
///     r#"{
///         "carriers": [
///             { "name": "Operator A", "rates": [{ "prefix": "46", "rate": 0.17 }] },
///             { "name": "Operator B", "rates": [{ "prefix": "46", "rate": 0.2 }] }
///         ]
///     }"#,
/// ).unwrap();
///
/// let router = config.load().unwrap();
/// assert_eq!(router.len(), 2);
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct RouterConfig {
    /// Carriers in registration order.
    pub carriers: Vec<CarrierConfig>,
}

/// Configuration for one [`Carrier`](crate::Carrier).
#[derive(Debug, Clone, Deserialize)]
pub struct CarrierConfig {
    /// Carrier name. Uniqueness is not enforced.
    pub name: String,
    /// Prefix rates, applied in order.
    pub rates: Vec<RateEntryConfig>,
}

/// One prefix-rate association.
#[derive(Debug, Clone, Deserialize)]
pub struct RateEntryConfig {
    /// Decimal-digit prefix.
    pub prefix: String,
    /// Price per unit; units are defined by the dataset.
    pub rate: f64,
}

impl RouterConfig {
    /// Deserialize a rate plan from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`RateError::InvalidConfig`] if the document does not
    /// deserialize.
    pub fn from_json(json: &str) -> Result<Self, RateError> {
        serde_json::from_str(json).map_err(|e| RateError::InvalidConfig {
            source: e.to_string(),
        })
    }

    /// Build a router, registering every carrier in document order.
    ///
    /// # Errors
    ///
    /// Returns [`RateError::Carrier`] naming the offending carrier if any
    /// entry fails validation.
    pub fn load(self) -> Result<RateRouter, RateError> {
        let mut router = RateRouter::new();
        router.bulk_register(self.carriers.into_iter().map(|carrier| {
            (
                carrier.name,
                carrier
                    .rates
                    .into_iter()
                    .map(|entry| (entry.prefix, entry.rate))
                    .collect::<Vec<_>>(),
            )
        }))?;
        Ok(router)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLAN: &str = r#"{
        "carriers": [
            { "name": "Operator A", "rates": [{ "prefix": "123", "rate": 0.8 }] },
            { "name": "Operator B", "rates": [{ "prefix": "123", "rate": 0.92 }] }
        ]
    }"#;

    #[test]
    fn test_load_json_plan() {
        let router = RouterConfig::from_json(PLAN).unwrap().load().unwrap();

        let (carrier, rate) = router.find_cheapest("123").unwrap().unwrap();
        assert_eq!(carrier.name(), "Operator A");
        assert_eq!(rate, 0.8);
    }

    #[test]
    fn test_document_order_is_registration_order() {
        let router = RouterConfig::from_json(PLAN).unwrap().load().unwrap();
        let names: Vec<&str> = router.carriers().iter().map(|c| c.name()).collect();
        assert_eq!(names, ["Operator A", "Operator B"]);
    }

    #[test]
    fn test_malformed_json_is_invalid_config() {
        let err = RouterConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, RateError::InvalidConfig { .. }));
    }

    #[test]
    fn test_invalid_entry_names_the_carrier() {
        let plan = r#"{
            "carriers": [
                { "name": "Operator A", "rates": [{ "prefix": "12x", "rate": 0.8 }] }
            ]
        }"#;

        let err = RouterConfig::from_json(plan).unwrap().load().unwrap_err();
        match err {
            RateError::Carrier { name, .. } => assert_eq!(name, "Operator A"),
            other => panic!("expected RateError::Carrier, got {other:?}"),
        }
    }
}
