//! Value types for tour pricing.
//!
//! Stored pricing configuration as handed over by the persistence layer.
//! Cross-field invariants are checked by the `validate` methods at that
//! boundary; the resolvers trust them afterwards.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ValidationError};
use crate::scheduling::DateRange;

/// A time-bounded discount attached to a pricing option.
///
/// `percentage_or_price` selects the mode: percentage of the base price
/// (optionally capped by `max_discount_amount`) or a fixed amount off.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Discount {
    pub enabled: bool,
    pub percentage_or_price: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_percentage: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_discount_amount: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_range: Option<DateRange>,
}

impl Discount {
    pub fn validate(&self) -> Result<()> {
        if let Some(cap) = self.max_discount_amount {
            if cap < Decimal::ZERO {
                return Err(ValidationError::NegativeMaxDiscountAmount(cap));
            }
        }
        if !self.enabled {
            return Ok(());
        }
        match &self.date_range {
            None => return Err(ValidationError::MissingDiscountRange),
            Some(range) => range.validate()?,
        }
        if self.percentage_or_price {
            match self.discount_percentage {
                None => return Err(ValidationError::MissingDiscountPercentage),
                Some(pct) if pct < Decimal::ZERO || pct > Decimal::ONE_HUNDRED => {
                    return Err(ValidationError::DiscountPercentageOutOfRange(pct))
                }
                Some(_) => {}
            }
        } else {
            match self.discount_price {
                None => return Err(ValidationError::MissingDiscountPrice),
                Some(price) if price < Decimal::ZERO => {
                    return Err(ValidationError::NegativeDiscountPrice(price))
                }
                Some(_) => {}
            }
        }
        Ok(())
    }
}

/// Passenger-count bounds covered by a pricing option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaxRange {
    pub min_pax: u32,
    pub max_pax: u32,
}

impl Default for PaxRange {
    fn default() -> Self {
        Self {
            min_pax: 1,
            max_pax: 10,
        }
    }
}

impl PaxRange {
    pub fn validate(&self) -> Result<()> {
        if self.min_pax == 0 {
            return Err(ValidationError::ZeroMinPax);
        }
        if self.max_pax < self.min_pax {
            return Err(ValidationError::InvalidPaxRange {
                min_pax: self.min_pax,
                max_pax: self.max_pax,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PricingCategory {
    Adult,
    Child,
    Senior,
    Student,
    Custom,
}

/// A named, priced way to book the tour (adult fare, child fare, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingOption {
    pub id: String,
    pub name: String,
    pub category: PricingCategory,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_category: Option<String>,
    #[serde(with = "rust_decimal::serde::str")]
    pub price: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount: Option<Discount>,
    #[serde(default)]
    pub pax_range: PaxRange,
}

impl PricingOption {
    pub fn validate(&self) -> Result<()> {
        if self.price < Decimal::ZERO {
            return Err(ValidationError::NegativePrice {
                id: self.id.clone(),
                price: self.price,
            });
        }
        if self.category == PricingCategory::Custom && self.custom_category.is_none() {
            return Err(ValidationError::MissingCustomCategory(self.id.clone()));
        }
        if let Some(discount) = &self.discount {
            discount.validate()?;
        }
        self.pax_range.validate()
    }
}

/// A labelled set of pricing options; never empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingGroup {
    pub label: String,
    pub options: Vec<PricingOption>,
}

impl PricingGroup {
    pub fn validate(&self) -> Result<()> {
        if self.options.is_empty() {
            return Err(ValidationError::EmptyPricingGroup(self.label.clone()));
        }
        let mut seen = std::collections::HashSet::new();
        for option in &self.options {
            option.validate()?;
            if !seen.insert(option.id.as_str()) {
                return Err(ValidationError::DuplicateOptionId {
                    group: self.label.clone(),
                    id: option.id.clone(),
                });
            }
        }
        Ok(())
    }
}
