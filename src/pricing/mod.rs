//! Pricing resolution for tours.
//!
//! Stored pricing configuration (options, groups, discounts) comes in from
//! the persistence layer; effective prices and group bounds come out for
//! the API layer to serialize.

pub mod calculators;
pub mod models;
pub mod resolvers;

// Re-export commonly used items
pub use calculators::{discount_is_active, effective_price, round_money};
pub use models::{Discount, PaxRange, PricingCategory, PricingGroup, PricingOption};
pub use resolvers::{
    find_option_by_name, resolve_group, resolve_option, GroupPriceBounds, ResolvedOption,
};
