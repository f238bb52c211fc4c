//! Option- and group-level price resolution.
//!
//! Composes the discount calculators into the derived views the API layer
//! serializes: per-option effective price and group-level price bounds.
//! Nothing here holds state; every view is recomputed from the reference
//! instant.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use super::calculators::{discount_is_active, effective_price};
use super::models::{PricingGroup, PricingOption};

/// Resolved view of a single pricing option.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedOption {
    #[serde(with = "rust_decimal::serde::str")]
    pub effective_price: Decimal,
    pub has_active_discount: bool,
}

/// Resolved price bounds of a pricing group.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupPriceBounds {
    #[serde(with = "rust_decimal::serde::str")]
    pub min_price: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub max_price: Decimal,
}

/// Resolve one option's payable price at the reference instant.
pub fn resolve_option(option: &PricingOption, now: DateTime<Utc>) -> ResolvedOption {
    let has_active_discount = option
        .discount
        .as_ref()
        .map(|d| discount_is_active(d, now))
        .unwrap_or(false);
    ResolvedOption {
        effective_price: effective_price(option.price, option.discount.as_ref(), now),
        has_active_discount,
    }
}

/// Min/max over the group's resolved effective prices.
///
/// Discounts move the bounds: an option discounted below a cheaper option's
/// base price lowers `min_price`. The group invariant guarantees at least
/// one option; an empty group resolves to zero bounds rather than panicking.
pub fn resolve_group(group: &PricingGroup, now: DateTime<Utc>) -> GroupPriceBounds {
    let mut prices = group
        .options
        .iter()
        .map(|option| resolve_option(option, now).effective_price);

    let first = match prices.next() {
        Some(price) => price,
        None => {
            tracing::debug!(group = %group.label, "resolving empty pricing group");
            return GroupPriceBounds {
                min_price: Decimal::ZERO,
                max_price: Decimal::ZERO,
            };
        }
    };

    let (min_price, max_price) = prices.fold((first, first), |(min, max), price| {
        (min.min(price), max.max(price))
    });

    GroupPriceBounds {
        min_price,
        max_price,
    }
}

/// Exact, case-sensitive lookup of an option by display name.
pub fn find_option_by_name<'a>(group: &'a PricingGroup, name: &str) -> Option<&'a PricingOption> {
    group.options.iter().find(|option| option.name == name)
}
