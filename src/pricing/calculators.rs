//! Core discount calculation functions.
//!
//! Pure functions for pricing math - no database access, no system clock.
//! The reference instant is always an explicit parameter.

use chrono::{DateTime, Utc};
use rust_decimal::prelude::*;
use rust_decimal::Decimal;

use super::models::Discount;

/// Round to specified decimal places using banker's rounding (ROUND_HALF_EVEN).
///
/// Banker's rounding rounds to the nearest even number when the value is exactly
/// halfway between two possibilities. This reduces cumulative rounding bias.
///
/// # Examples
/// ```
/// use rust_decimal_macros::dec;
/// use tourbook_engine::pricing::round_money;
///
/// assert_eq!(round_money(dec!(2.5), 0), dec!(2));   // rounds to even
/// assert_eq!(round_money(dec!(3.5), 0), dec!(4));   // rounds to even
/// assert_eq!(round_money(dec!(1.234), 2), dec!(1.23));
/// ```
pub fn round_money(amount: Decimal, places: u32) -> Decimal {
    amount.round_dp_with_strategy(places, RoundingStrategy::MidpointNearestEven)
}

/// Whether a discount applies at the reference instant.
///
/// False for disabled discounts; otherwise the discount window is inclusive
/// on both ends.
pub fn discount_is_active(discount: &Discount, now: DateTime<Utc>) -> bool {
    if !discount.enabled {
        return false;
    }
    match &discount.date_range {
        Some(range) => range.contains(now),
        None => false,
    }
}

/// Price payable for `base_price` after applying the discount, if any.
///
/// Absent, disabled, or out-of-window discounts leave the base price
/// unchanged. Percentage mode takes `discount_percentage` percent off,
/// rounded to 2dp and clamped to `max_discount_amount` when the cap is set.
/// Fixed-price mode subtracts `discount_price`. The result is never
/// negative.
pub fn effective_price(
    base_price: Decimal,
    discount: Option<&Discount>,
    now: DateTime<Utc>,
) -> Decimal {
    let discount = match discount {
        Some(d) if discount_is_active(d, now) => d,
        _ => return base_price,
    };

    if discount.percentage_or_price {
        let percentage = discount.discount_percentage.unwrap_or(Decimal::ZERO);
        let mut amount = round_money(base_price * percentage / Decimal::ONE_HUNDRED, 2);
        if let Some(cap) = discount.max_discount_amount {
            if amount > cap {
                amount = cap;
            }
        }
        (base_price - amount).max(Decimal::ZERO)
    } else {
        let off = discount.discount_price.unwrap_or(Decimal::ZERO);
        (base_price - off).max(Decimal::ZERO)
    }
}
